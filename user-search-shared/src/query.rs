//! Search query parameters.

/// A single match filter: documents whose `field` matches `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchQuery {
    /// The document field to match on.
    pub field: String,
    /// The literal value the field must match.
    pub value: String,
}

impl MatchQuery {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}
