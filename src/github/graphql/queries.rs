pub(crate) const SPONSORSHIPS_QUERY: &str = include_str!("queries/sponsorships.graphql");

/// Records per page. A tuning parameter, not a contract.
pub(crate) const PAGE_SIZE: i64 = 50;

pub(crate) fn sponsorships_payload(after: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "query": SPONSORSHIPS_QUERY,
        "variables": { "first": PAGE_SIZE, "after": after },
    })
}
