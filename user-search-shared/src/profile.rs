//! The flat profile record indexed by the `single-profile` program.

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// A flat user profile with no nesting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub age: u32,
}

impl Record for Profile {}

/// The single literal profile indexed by the `single-profile` program.
pub fn sample_profile() -> Profile {
    Profile {
        name: "Alice".to_string(),
        age: 30,
    }
}
