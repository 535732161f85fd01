//! Item entity - equipment, spells, and other modifier sources
//!
//! An item does not hold modifiers; it declares [`Provider`]s. While the
//! item is active, each provider has been materialized into a modifier on
//! the owning actor's sheet, stamped with the item's kind and name so it
//! can be taken back on deactivation.

use serde::{Deserialize, Serialize};

use sheetcraft_domain::{ItemId, ItemName, Provider};

/// A named object an actor can own, carrying modifier instructions
///
/// This is a data-carrying struct with no invariants of its own; the
/// activation state machine lives on [`Actor`](crate::entities::Actor),
/// which owns the sheet the providers act on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: ItemName,
    /// Kind of item (e.g., "Equipment", "Spell"), stamped onto modifiers
    /// as their source type
    #[serde(rename = "type")]
    pub kind: String,
    /// Whether the item's providers are currently applied
    #[serde(default)]
    pub is_active: bool,
    /// Modifier instructions this item contributes while active
    #[serde(default)]
    pub provides: Vec<Provider>,
}

impl Item {
    /// Create an inactive item with no providers.
    pub fn new(name: ItemName, kind: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            name,
            kind: kind.into(),
            is_active: false,
            provides: Vec::new(),
        }
    }

    /// Builder method to append a provider.
    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.provides.push(provider);
        self
    }

    /// Builder method to set the initial activation state.
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}
