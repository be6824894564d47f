use anyhow::Context;

/// Executes one GraphQL payload against an endpoint and returns the raw
/// response body, or fails with the transport's own error.
///
/// The library ships [`GithubExecutor`]; embedding code can substitute any
/// other implementation (a recorded transcript, a proxy, ...).
#[allow(async_fn_in_trait)]
pub trait GraphqlExecutor {
    async fn execute(&self, payload: &serde_json::Value) -> anyhow::Result<serde_json::Value>;
}

/// Octocrab-backed executor authenticated with a personal token.
pub struct GithubExecutor {
    octocrab: octocrab::Octocrab,
}

impl GithubExecutor {
    pub fn new(token: impl Into<String>) -> anyhow::Result<Self> {
        let octocrab = octocrab::Octocrab::builder()
            .personal_token(token.into())
            .build()
            .context("failed to build GitHub client")?;
        Ok(Self { octocrab })
    }
}

impl GraphqlExecutor for GithubExecutor {
    async fn execute(&self, payload: &serde_json::Value) -> anyhow::Result<serde_json::Value> {
        self.octocrab
            .graphql::<serde_json::Value>(payload)
            .await
            .context("GraphQL request failed")
    }
}
