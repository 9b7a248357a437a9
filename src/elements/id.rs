//! Element identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a node or member.
///
/// The diagram editor hands out numeric ids for nodes it creates itself and
/// string ids (e.g. `"3-7"`) for edges, so the engine folds both into a
/// single type. Equality is by value and variant: `Id::Int(1)` and
/// `Id::Text("1")` are distinct identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    /// Numeric identifier
    Int(i64),
    /// Textual identifier
    Text(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Int(n) => write!(f, "{n}"),
            Id::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Id {
    fn from(value: i64) -> Self {
        Id::Int(value)
    }
}

impl From<i32> for Id {
    fn from(value: i32) -> Self {
        Id::Int(value as i64)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Id::Text(value.to_string())
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Id::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Id::from(42).to_string(), "42");
        assert_eq!(Id::from("3-7").to_string(), "3-7");
    }

    #[test]
    fn test_variants_are_distinct() {
        assert_ne!(Id::from(1), Id::from("1"));
    }

    #[test]
    fn test_untagged_serde() {
        let int: Id = serde_json::from_str("5").unwrap();
        assert_eq!(int, Id::from(5));

        let text: Id = serde_json::from_str("\"5-6\"").unwrap();
        assert_eq!(text, Id::from("5-6"));

        assert_eq!(serde_json::to_string(&int).unwrap(), "5");
        assert_eq!(serde_json::to_string(&text).unwrap(), "\"5-6\"");
    }
}
