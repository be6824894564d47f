pub(crate) mod fetch;
mod queries;
mod sponsorships;
mod types;

pub use types::{Sponsor, Sponsorship, Tier};
