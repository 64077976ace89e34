//! The tagged user record indexed by the `nested-users` program.

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// A tag attached to a user. Stored as a nested object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

impl Tag {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A user owned by some other entity, carrying an ordered list of tags.
///
/// `id` is the user's own identifier. It is not used as the document id
/// when the record is indexed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The user's external identifier.
    pub id: String,
    /// Identifier of the owning entity.
    pub owner_id: String,
    /// Tags in insertion order. May be empty.
    pub tags: Vec<Tag>,
}

impl User {
    pub fn new(id: impl Into<String>, owner_id: impl Into<String>, tags: Vec<Tag>) -> Self {
        Self {
            id: id.into(),
            owner_id: owner_id.into(),
            tags,
        }
    }
}

impl Record for User {
    fn validate(&self) -> Result<(), String> {
        for (position, tag) in self.tags.iter().enumerate() {
            if tag.id.is_empty() {
                return Err(format!("user {}: tag {} has an empty id", self.id, position));
            }
            if tag.name.is_empty() {
                return Err(format!(
                    "user {}: tag {} has an empty name",
                    self.id, position
                ));
            }
        }
        Ok(())
    }
}

/// The three literal users indexed by the `nested-users` program.
pub fn sample_users() -> Vec<User> {
    vec![
        User::new("u1", "ch1", vec![Tag::new("t1", "t1_name")]),
        User::new(
            "u2",
            "ch1",
            vec![Tag::new("t1", "t1_name"), Tag::new("t2", "t2_name")],
        ),
        User::new("u3", "ch3", vec![Tag::new("t3", "t3_name")]),
    ]
}
