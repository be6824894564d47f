/// One sponsorship of the authenticated viewer, decoded from a single
/// connection node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sponsorship {
    pub id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// True iff the sponsorship's privacy level is `PUBLIC`.
    pub public: bool,
    pub sponsor: Sponsor,
    pub tier: Tier,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sponsor {
    /// Account login handle; the cache key.
    pub login: String,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tier {
    pub id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub name: String,
    pub description: String,
    /// Integer cents; never a float.
    pub monthly_price_in_cents: i64,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct GraphqlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct GraphqlError {
    pub message: String,
}
