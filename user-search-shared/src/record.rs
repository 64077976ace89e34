//! The `Record` trait implemented by every indexable record shape.

use serde::Serialize;

/// A record that can be serialized and submitted as a search document.
pub trait Record: Serialize {
    /// Check the record's invariants before it is serialized.
    ///
    /// Returns a description of the first violation found.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
