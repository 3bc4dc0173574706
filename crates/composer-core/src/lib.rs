//! Code Composer Core
//!
//! Everything the browser frontend needs that is not DOM plumbing:
//! - domain: lists, items and the collection that owns them
//! - composer: joins the current selections into the composed code
//! - exchange: spreadsheet import/export behind a codec trait
//! - settings: tunable defaults loaded at startup

pub mod composer;
pub mod domain;
pub mod error;
pub mod exchange;
pub mod settings;

pub use composer::{compose, Separator};
pub use domain::{CodeList, Collection, DisplayMode, EditState, ListId, ListItem, ListPatch, SortMode};
pub use error::{ExchangeError, ItemError};
pub use exchange::{export_collection, import_collection, SheetTable, WorkbookCodec, XlsxCodec};
pub use settings::Settings;
