use tokio::sync::Mutex;
use tracing::debug;

use super::auth;
use super::graphql::fetch::{find_sponsorship, LookupState};
use super::graphql::Sponsorship;
use super::transport::{GithubExecutor, GraphqlExecutor};

/// Construction options for [`SponsorLookup`].
#[derive(Debug, Clone)]
pub struct LookupOptions {
    /// Personal token used as the authorization credential.
    pub token: String,
    /// When false, lookups skip the read-from-cache step and always
    /// traverse from the current pagination position. The cache is still
    /// populated during traversal.
    pub cache: bool,
}

impl LookupOptions {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            cache: true,
        }
    }
}

/// Answers "does this login sponsor the authenticated viewer?" against the
/// paginated sponsorship connection, caching every record it decodes.
///
/// Cache and cursor live behind a mutex held for the whole traversal, so
/// concurrent callers on one instance are serialized rather than racing the
/// shared pagination position.
pub struct SponsorLookup<T = GithubExecutor> {
    executor: T,
    use_cache: bool,
    state: Mutex<LookupState>,
}

impl SponsorLookup {
    pub fn new(options: LookupOptions) -> anyhow::Result<Self> {
        let LookupOptions { token, cache } = options;
        let executor = GithubExecutor::new(token)?;
        Ok(Self::with_executor(executor, cache))
    }

    /// Builds a lookup with the token resolved from `GH_TOKEN`,
    /// `GITHUB_TOKEN`, or the `gh` CLI.
    pub fn from_env() -> anyhow::Result<Self> {
        let token = auth::fetch_token()?;
        Self::new(LookupOptions::new(token))
    }
}

impl<T: GraphqlExecutor> SponsorLookup<T> {
    /// Builds a lookup over a caller-supplied transport.
    pub fn with_executor(executor: T, cache: bool) -> Self {
        Self {
            executor,
            use_cache: cache,
            state: Mutex::new(LookupState::new()),
        }
    }

    /// Returns the sponsorship record for `login`, or `None` when the login
    /// does not sponsor the viewer. Fails only on transport or decoding
    /// errors, never for a not-found login.
    pub async fn get_info(&self, login: &str) -> anyhow::Result<Option<Sponsorship>> {
        let mut state = self.state.lock().await;
        find_sponsorship(&self.executor, &mut state, login, self.use_cache).await
    }

    pub async fn is_sponsor(&self, login: &str) -> anyhow::Result<bool> {
        Ok(self.get_info(login).await?.is_some())
    }

    /// Clears the cache and resets pagination to the first page.
    pub async fn flush(&self) {
        let mut state = self.state.lock().await;
        state.reset();
        debug!("sponsorship cache flushed");
    }
}
