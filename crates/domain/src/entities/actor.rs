//! Actor aggregate - a sheet plus the items that modify it
//!
//! The actor owns the consistency between item activation state and the
//! modifiers present on its sheet: an item is active exactly when its
//! materialized modifiers sit on the fields its providers target. All item
//! state transitions therefore go through the actor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sheetcraft_domain::{
    ActorId, ActorName, Item, ItemId, Modifier, Sheet, TargetPath,
};

/// An item in an actor's possession, with acquisition metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedItem {
    pub item: Item,
    /// When the actor acquired the item
    pub acquired_at: DateTime<Utc>,
}

/// A character, NPC, or monster: a named sheet plus owned items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    id: ActorId,
    name: ActorName,
    sheet: Sheet,
    #[serde(default)]
    items: Vec<OwnedItem>,
}

impl Actor {
    /// Create an actor with the given sheet and no items.
    pub fn new(name: ActorName, sheet: Sheet) -> Self {
        Self {
            id: ActorId::new(),
            name,
            sheet,
            items: Vec::new(),
        }
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn name(&self) -> &ActorName {
        &self.name
    }

    /// The actor's sheet, with all active-item modifiers in place.
    pub fn sheet(&self) -> &Sheet {
        &self.sheet
    }

    /// The actor's items in acquisition order.
    pub fn items(&self) -> &[OwnedItem] {
        &self.items
    }

    /// Look up an owned item by id.
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items
            .iter()
            .map(|owned| &owned.item)
            .find(|item| item.id == id)
    }

    /// Take ownership of an item.
    ///
    /// An item that arrives already active has its providers applied
    /// immediately, so the sheet and the activation state stay in step.
    pub fn add_item(&mut self, item: Item, now: DateTime<Utc>) -> ItemId {
        let id = item.id;
        if item.is_active {
            for (path, modifier) in materialize(&item) {
                self.sheet.apply(&path, &modifier);
            }
        }
        self.items.push(OwnedItem {
            item,
            acquired_at: now,
        });
        id
    }

    /// Activate an inactive item, applying its providers to the sheet.
    ///
    /// Returns `false` without touching anything when the item is unknown
    /// or already active, so repeated activation never stacks modifiers.
    pub fn enable_item(&mut self, id: ItemId) -> bool {
        let Some(owned) = self.items.iter_mut().find(|owned| owned.item.id == id) else {
            return false;
        };
        if owned.item.is_active {
            return false;
        }
        owned.item.is_active = true;
        for (path, modifier) in materialize(&owned.item) {
            self.sheet.apply(&path, &modifier);
        }
        true
    }

    /// Deactivate an active item, retracting its providers from the sheet.
    ///
    /// Returns `false` without touching anything when the item is unknown
    /// or already inactive.
    pub fn disable_item(&mut self, id: ItemId) -> bool {
        let Some(owned) = self.items.iter_mut().find(|owned| owned.item.id == id) else {
            return false;
        };
        if !owned.item.is_active {
            return false;
        }
        owned.item.is_active = false;
        for (path, modifier) in materialize(&owned.item) {
            self.sheet.retract(&path, &modifier);
        }
        true
    }

    /// Remove an item from the actor's possession.
    ///
    /// An active item is deactivated first, so its modifiers leave the
    /// sheet along with it.
    pub fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|owned| owned.item.id == id)?;
        if self.items[index].item.is_active {
            self.disable_item(id);
        }
        Some(self.items.remove(index).item)
    }

    /// Computed value of the field at a concrete path.
    pub fn effective(&self, path: &TargetPath) -> Option<i32> {
        self.sheet.effective(path)
    }

    /// Replace a field's base value, leaving its modifiers untouched.
    ///
    /// Returns `false` when the path does not resolve to a field.
    pub fn set_base(&mut self, path: &TargetPath, base: i32) -> bool {
        self.sheet.set_base(path, base)
    }

    /// Computed values of every field a (possibly wildcard) path matches.
    pub fn collect_effective(&self, path: &TargetPath) -> Vec<(String, i32)> {
        self.sheet.collect_effective(path)
    }
}

/// Materialize every provider of an item into a (path, modifier) pair.
///
/// Collected up front so sheet mutation never overlaps a borrow of the
/// item that drives it.
fn materialize(item: &Item) -> Vec<(TargetPath, Modifier)> {
    item.provides
        .iter()
        .map(|provider| {
            (
                provider.target().clone(),
                provider.materialize(&item.kind, item.name.as_str()),
            )
        })
        .collect()
}
