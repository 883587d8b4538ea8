//! Resource identifiers accepted by remove calls.

use std::fmt;

/// Identifier of a REST resource: either numeric or a string.
///
/// Displays as the bare value so it can be embedded in a resource path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceId {
    Numeric(i64),
    Named(String),
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{id}"),
            Self::Named(id) => f.write_str(id),
        }
    }
}

impl From<i64> for ResourceId {
    fn from(id: i64) -> Self {
        Self::Numeric(id)
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        Self::Named(id.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        Self::Named(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ResourceId::from(42_i64).to_string(), "42");
        assert_eq!(ResourceId::from("key-7").to_string(), "key-7");
        assert_eq!(ResourceId::from(String::from("x")).to_string(), "x");
        assert_eq!(ResourceId::from(-1_i64).to_string(), "-1");
    }

    #[test]
    fn test_numeric_and_named_are_distinct() {
        assert_ne!(ResourceId::from(42_i64), ResourceId::from("42"));
    }
}
