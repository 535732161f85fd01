//! Modifier and ModifiableValue - numeric adjustments on sheet fields
//!
//! Every modifiable field on a sheet is a [`ModifiableValue`]: a base value
//! plus an ordered list of [`Modifier`]s. The effective value is computed on
//! read; writing replaces only the base and leaves the modifiers untouched.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// How a modifier combines with a field's base value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModifierKind {
    /// Added on top of the resolved value (negative values act as penalties)
    Bonus,
    /// Overrides the base value; the highest nonzero `Set` wins
    Set,
}

impl ModifierKind {
    /// Returns the lowercase string representation (e.g., "bonus", "set").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bonus => "bonus",
            Self::Set => "set",
        }
    }
}

impl fmt::Display for ModifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ModifierKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bonus" => Ok(Self::Bonus),
            "set" => Ok(Self::Set),
            _ => Err(DomainError::parse(format!("Unknown modifier kind: {}", s))),
        }
    }
}

/// A named numeric adjustment attached to a field's modifier list
/// (from equipment, spells, conditions, etc.)
///
/// This is an immutable value object. Modifiers carry no identity of their
/// own: removal matches the first structurally-equal entry, so an item that
/// contributed a modifier can always take exactly that contribution back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modifier {
    /// How the value combines with the base
    #[serde(rename = "type")]
    kind: ModifierKind,
    /// The value to apply (for `Bonus`: positive = bonus, negative = penalty)
    value: i32,
    /// Kind of source that contributed the modifier (e.g., "Equipment")
    source_type: String,
    /// Name of the source (e.g., "Cloak of Protection")
    source_name: String,
}

impl Modifier {
    /// Create a new modifier.
    pub fn new(
        kind: ModifierKind,
        value: i32,
        source_type: impl Into<String>,
        source_name: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            value,
            source_type: source_type.into(),
            source_name: source_name.into(),
        }
    }

    /// How the value combines with the base.
    pub fn kind(&self) -> ModifierKind {
        self.kind
    }

    /// The value to apply.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Kind of source that contributed the modifier (e.g., "Equipment").
    pub fn source_type(&self) -> &str {
        &self.source_type
    }

    /// Name of the source (e.g., "Cloak of Protection").
    pub fn source_name(&self) -> &str {
        &self.source_name
    }
}

/// A modifiable numeric field: a base value plus an ordered modifier list
///
/// The effective value is computed on read:
/// 1. the highest nonzero `Set` modifier overrides the base (if any),
/// 2. all `Bonus` modifier values are summed on top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ModifiableValue {
    /// The base value (before modifiers)
    base: i32,
    /// Modifiers currently affecting this field, in insertion order
    #[serde(default)]
    modifiers: Vec<Modifier>,
}

impl ModifiableValue {
    /// Create a field with the given base value and no modifiers.
    pub fn new(base: i32) -> Self {
        Self {
            base,
            modifiers: Vec::new(),
        }
    }

    /// Get the base value (before modifiers).
    pub fn base(&self) -> i32 {
        self.base
    }

    /// Replace the base value. Modifiers are untouched.
    pub fn set_base(&mut self, base: i32) {
        self.base = base;
    }

    /// Get all modifiers in insertion order.
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// Append a modifier.
    pub fn add_modifier(&mut self, modifier: Modifier) {
        self.modifiers.push(modifier);
    }

    /// Remove the first modifier structurally equal to the given one.
    ///
    /// Returns `false` (list unchanged) when nothing matches.
    pub fn remove_modifier(&mut self, modifier: &Modifier) -> bool {
        if let Some(idx) = self.modifiers.iter().position(|m| m == modifier) {
            self.modifiers.remove(idx);
            return true;
        }
        false
    }

    /// Compute the effective value: `(max Set or base) + sum of Bonuses`.
    ///
    /// A `Set` modifier only takes effect when the highest `Set` value is
    /// nonzero; negative `Set` values therefore never win over the base.
    pub fn effective(&self) -> i32 {
        let set = self
            .modifiers
            .iter()
            .filter(|m| m.kind() == ModifierKind::Set)
            .map(Modifier::value)
            .fold(0, i32::max);
        let bonus: i32 = self
            .modifiers
            .iter()
            .filter(|m| m.kind() == ModifierKind::Bonus)
            .map(Modifier::value)
            .sum();

        if set != 0 {
            set + bonus
        } else {
            self.base + bonus
        }
    }
}
