//! Target paths - dot-separated addresses into a sheet tree
//!
//! A path like `abilities.str.save` names a single field; a `*` segment fans
//! out, so `abilities.*.save` addresses the save field of every ability.
//! Paths are valid by construction: non-empty, with no empty segments.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// One segment of a target path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Matches a single named entry of a group
    Key(String),
    /// Fans out to every element of a list or every entry of a group
    Wildcard,
}

/// A validated dot-path addressing fields within a sheet tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TargetPath {
    segments: Vec<PathSegment>,
}

impl TargetPath {
    /// Parse a dot-path string into a validated target path.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The path is empty after trimming
    /// - Any segment is empty (leading, trailing, or doubled dots)
    pub fn new(path: impl Into<String>) -> Result<Self, DomainError> {
        let path = path.into();
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Target path cannot be empty"));
        }

        let mut segments = Vec::new();
        for part in trimmed.split('.') {
            if part.is_empty() {
                return Err(DomainError::validation(format!(
                    "Target path '{}' contains an empty segment",
                    trimmed
                )));
            }
            segments.push(match part {
                "*" => PathSegment::Wildcard,
                key => PathSegment::Key(key.to_string()),
            });
        }

        Ok(Self { segments })
    }

    /// The parsed segments, in order.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Whether the path contains no wildcard segments.
    pub fn is_concrete(&self) -> bool {
        self.segments
            .iter()
            .all(|segment| matches!(segment, PathSegment::Key(_)))
    }
}

impl fmt::Display for TargetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            match segment {
                PathSegment::Key(key) => write!(f, "{}", key)?,
                PathSegment::Wildcard => write!(f, "*")?,
            }
        }
        Ok(())
    }
}

impl FromStr for TargetPath {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TargetPath {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<TargetPath> for String {
    fn from(path: TargetPath) -> String {
        path.to_string()
    }
}
