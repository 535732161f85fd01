//! Provider - an item-declared modification instruction
//!
//! Items do not hold modifiers directly; they declare providers. On
//! activation each provider is materialized into a [`Modifier`] stamped with
//! the owning item's kind and name, and applied along its target path.

use serde::{Deserialize, Serialize};

use crate::value_objects::{Modifier, ModifierKind, TargetPath};

/// An instruction describing which field path to modify and how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    /// How the materialized modifier combines with the target's base
    #[serde(rename = "type")]
    kind: ModifierKind,
    /// Dot-path to the field(s) this provider modifies (wildcards allowed)
    target: TargetPath,
    /// The value the materialized modifier carries
    value: i32,
}

impl Provider {
    /// Create a new provider.
    pub fn new(kind: ModifierKind, target: TargetPath, value: i32) -> Self {
        Self {
            kind,
            target,
            value,
        }
    }

    /// How the materialized modifier combines with the target's base.
    pub fn kind(&self) -> ModifierKind {
        self.kind
    }

    /// Dot-path to the field(s) this provider modifies.
    pub fn target(&self) -> &TargetPath {
        &self.target
    }

    /// The value the materialized modifier carries.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Materialize this provider into a modifier stamped with its source.
    pub fn materialize(
        &self,
        source_type: impl Into<String>,
        source_name: impl Into<String>,
    ) -> Modifier {
        Modifier::new(self.kind, self.value, source_type, source_name)
    }
}
