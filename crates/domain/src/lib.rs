extern crate self as sheetcraft_domain;

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{Actor, Item, OwnedItem};

pub use error::DomainError;

// Re-export ID types
pub use ids::{ActorId, ItemId};

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{
    ActorName, ItemName, ModifiableValue, Modifier, ModifierKind, PathSegment, Provider, Sheet,
    SheetNode, TargetPath, MAX_NAME_LENGTH,
};
