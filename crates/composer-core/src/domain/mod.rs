//! Domain Layer
//!
//! Lists, their items and the ordered collection that owns them.
//! No browser or spreadsheet types leak in here.

mod collection;
mod entity;
mod item;
mod list;
mod modes;

pub use collection::Collection;
pub use entity::Entity;
pub use item::ListItem;
pub use list::{CodeList, EditState, ListId, ListPatch};
pub use modes::{DisplayMode, SortMode};
