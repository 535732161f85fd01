//! Value objects - Immutable objects defined by their attributes

mod modifier;
mod names;
mod path;
mod provider;
mod sheet;

pub use modifier::{ModifiableValue, Modifier, ModifierKind};
pub use names::{ActorName, ItemName, MAX_NAME_LENGTH};
pub use path::{PathSegment, TargetPath};
pub use provider::Provider;
pub use sheet::{Sheet, SheetNode};
