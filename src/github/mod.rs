mod auth;
mod client;
mod graphql;
mod transport;

pub use client::{LookupOptions, SponsorLookup};
pub use graphql::{Sponsor, Sponsorship, Tier};
pub use transport::{GithubExecutor, GraphqlExecutor};
