use anyhow::Context;
use std::collections::HashMap;
use tracing::debug;

use super::queries::sponsorships_payload;
use super::sponsorships::sponsorship_from_node;
use super::types::{GraphqlResponse, Sponsorship};
use crate::github::transport::GraphqlExecutor;

pub(crate) const MAX_PAGES: usize = 1000;

/// Shared lookup state: the login → sponsorship cache plus the pagination
/// position. The cursor advances across calls, so a later lookup resumes
/// where the previous traversal stopped instead of refetching from the start.
#[derive(Debug)]
pub(crate) struct LookupState {
    pub(crate) entries: HashMap<String, Sponsorship>,
    pub(crate) after: Option<String>,
    pub(crate) has_next_page: bool,
}

impl LookupState {
    pub(crate) fn new() -> Self {
        Self {
            entries: HashMap::new(),
            after: None,
            has_next_page: true,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.entries.clear();
        self.after = None;
        self.has_next_page = true;
    }
}

/// Walks the sponsorship connection until `login` turns up or no pages
/// remain. Every decoded record is cached, even when cache reads are
/// disabled, so the cache stays warm for callers that re-enable it.
///
/// Pagination state is updated from `pageInfo` before the page's records are
/// scanned; a hit on this page still leaves the cursor at the next page.
pub(crate) async fn find_sponsorship<T: GraphqlExecutor>(
    executor: &T,
    state: &mut LookupState,
    login: &str,
    use_cache: bool,
) -> anyhow::Result<Option<Sponsorship>> {
    if use_cache {
        if let Some(found) = state.entries.get(login) {
            debug!(login, "sponsorship cache hit");
            return Ok(Some(found.clone()));
        }
    }

    for _ in 0..MAX_PAGES {
        if !state.has_next_page {
            break;
        }

        let payload = sponsorships_payload(state.after.as_deref());
        let raw = executor.execute(&payload).await?;
        let resp: GraphqlResponse<serde_json::Value> =
            serde_json::from_value(raw).context("malformed GraphQL response envelope")?;
        let data = graphql_data(resp)?;

        let connection = data
            .get("viewer")
            .and_then(|viewer| viewer.get("sponsorshipsAsMaintainer"))
            .context("sponsorships response missing connection")?;
        let page_info = connection
            .get("pageInfo")
            .context("sponsorships response missing pageInfo")?;
        state.has_next_page = page_info
            .get("hasNextPage")
            .and_then(|value| value.as_bool())
            .context("sponsorships response missing pageInfo.hasNextPage")?;
        state.after = page_info
            .get("endCursor")
            .and_then(|value| value.as_str())
            .map(|value| value.to_string());

        let mut found = None;
        if let Some(nodes) = connection.get("nodes").and_then(|value| value.as_array()) {
            debug!(nodes = nodes.len(), "fetched sponsorships page");
            for node in nodes.iter().filter(|node| !node.is_null()) {
                // Nodes without a sponsor login (anonymized or deleted
                // accounts) decode to None and are skipped.
                let Some(sponsorship) = sponsorship_from_node(node)? else {
                    continue;
                };
                if sponsorship.sponsor.login == login {
                    found = Some(sponsorship.clone());
                }
                state
                    .entries
                    .insert(sponsorship.sponsor.login.clone(), sponsorship);
            }
        }

        if let Some(found) = found {
            return Ok(Some(found));
        }
        if state.has_next_page && state.after.is_none() {
            break;
        }
    }

    Ok(None)
}

pub(super) fn graphql_data<T>(resp: GraphqlResponse<T>) -> anyhow::Result<T> {
    if let Some(errors) = resp.errors {
        let msg = errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; ");
        anyhow::bail!("GraphQL returned errors: {msg}");
    }
    resp.data.context("GraphQL response missing data")
}

pub(super) fn parse_datetime(value: &str) -> anyhow::Result<chrono::DateTime<chrono::Utc>> {
    let dt = chrono::DateTime::parse_from_rfc3339(value).context("invalid datetime")?;
    Ok(dt.with_timezone(&chrono::Utc))
}
