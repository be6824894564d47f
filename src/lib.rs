//! Client for the GitHub Sponsors GraphQL API.
//!
//! [`SponsorLookup`] answers "does this login sponsor the authenticated
//! viewer?" by walking the viewer's sponsorship connection page by page,
//! caching every record it sees along the way.

mod github;

pub use github::{
    GithubExecutor, GraphqlExecutor, LookupOptions, Sponsor, SponsorLookup, Sponsorship, Tier,
};
