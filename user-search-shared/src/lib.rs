//! # User Search Shared
//!
//! Record shapes submitted to the search engine by the demo programs,
//! the literal sample data they index, and the match filter they search with.

mod profile;
mod query;
mod record;
mod user;

pub use profile::{sample_profile, Profile};
pub use query::MatchQuery;
pub use record::Record;
pub use user::{sample_users, Tag, User};
