//! Validated name newtypes for actors and items
//!
//! Names are trimmed on construction and must be non-empty and no longer
//! than [`MAX_NAME_LENGTH`] characters. Parsing through serde goes through
//! the same validation, so a deserialized name is always well-formed.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length of an actor or item name, in characters.
pub const MAX_NAME_LENGTH: usize = 200;

macro_rules! define_name {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Create a new name, trimming surrounding whitespace.
            ///
            /// # Errors
            ///
            /// Returns `DomainError::Validation` if the trimmed name is
            /// empty or longer than [`MAX_NAME_LENGTH`] characters.
            pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
                let name = name.into();
                let trimmed = name.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::validation(concat!(
                        $label,
                        " name cannot be empty"
                    )));
                }
                if trimmed.chars().count() > MAX_NAME_LENGTH {
                    return Err(DomainError::validation(format!(
                        concat!($label, " name cannot exceed {} characters"),
                        MAX_NAME_LENGTH
                    )));
                }
                Ok(Self(trimmed.to_string()))
            }

            /// The validated name as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::new(s)
            }
        }

        impl From<$name> for String {
            fn from(name: $name) -> String {
                name.0
            }
        }
    };
}

define_name!(
    /// The display name of an actor.
    ActorName,
    "Actor"
);

define_name!(
    /// The display name of an item.
    ItemName,
    "Item"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_trims_valid_name() {
        let name = ActorName::new("  John Doe  ").expect("valid name");
        assert_eq!(name.as_str(), "John Doe");
        assert_eq!(name.to_string(), "John Doe");
    }

    #[test]
    fn rejects_empty_name() {
        assert!(ActorName::new("").is_err());
        assert!(ItemName::new("   ").is_err());
    }

    #[test]
    fn rejects_overlong_name() {
        let long = "x".repeat(MAX_NAME_LENGTH + 1);
        assert!(ItemName::new(long).is_err());
        let max = "x".repeat(MAX_NAME_LENGTH);
        assert!(ItemName::new(max).is_ok());
    }

    #[test]
    fn serde_round_trips_as_string() {
        let name = ItemName::new("Cloak of Protection").expect("valid name");
        let json = serde_json::to_string(&name).expect("serializes");
        assert_eq!(json, "\"Cloak of Protection\"");
        let parsed: ItemName = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(parsed, name);
    }

    #[test]
    fn serde_rejects_blank_name() {
        let result: Result<ActorName, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
    }
}
