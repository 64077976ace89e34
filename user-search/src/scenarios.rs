//! The two demo programs' scenarios.

use crate::driver::Scenario;
use user_search_shared::{sample_profile, sample_users, MatchQuery, Profile, User};

/// Collection the `nested-users` program writes to.
pub const USER_COLLECTION: &str = "user";

/// Collection the `single-profile` program writes to.
pub const PROFILE_COLLECTION: &str = "profile";

/// Three tagged users, searched by owner `ch1`.
pub fn nested_users() -> Scenario<User> {
    Scenario::new(
        USER_COLLECTION,
        sample_users(),
        MatchQuery::new("owner_id", "ch1"),
    )
}

/// One flat profile, searched by name.
pub fn single_profile() -> Scenario<Profile> {
    Scenario::new(
        PROFILE_COLLECTION,
        vec![sample_profile()],
        MatchQuery::new("name", "Alice"),
    )
}
