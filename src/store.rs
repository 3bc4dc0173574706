//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use composer_core::exchange::{export_collection, import_collection};
use composer_core::{CodeList, Collection, ExchangeError, ListId, ListPatch, Separator, Settings, XlsxCodec};
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All lists, in display order
    pub collection: Collection,
    /// Separator placed between selections in the composed code
    pub separator: Separator,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        let collection = if settings.seed_sample_list {
            Collection::with_sample(settings)
        } else {
            Collection::new(settings)
        };
        Self {
            collection,
            separator: settings.default_separator,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Read one list by ID (tracked)
pub fn read_list<R>(store: &AppStore, list_id: ListId, f: impl FnOnce(&CodeList) -> R) -> Option<R> {
    store.collection().read().list(list_id).map(f)
}

/// Mutate one list by ID
pub fn update_list<R>(store: &AppStore, list_id: ListId, f: impl FnOnce(&mut CodeList) -> R) -> Option<R> {
    store.collection().write().with_list_mut(list_id, f)
}

/// Merge a partial update into one list
pub fn store_patch_list(store: &AppStore, list_id: ListId, patch: ListPatch) {
    store.collection().write().update_list(list_id, patch);
}

pub fn store_add_list(store: &AppStore) -> ListId {
    store.collection().write().add_list()
}

pub fn store_delete_list(store: &AppStore, list_id: ListId) {
    store.collection().write().delete_list(list_id);
}

/// Move a dragged list onto the slot of the list it was dropped on
pub fn store_reorder_lists(store: &AppStore, dragged: ListId, target: ListId) {
    store.collection().write().reorder(dragged, target);
}

pub fn store_set_separator(store: &AppStore, separator: Separator) {
    *store.separator().write() = separator;
}

/// Composed code for the current selections and separator (tracked)
pub fn composed_code(store: &AppStore) -> String {
    let separator = store.separator().get();
    store.collection().read().composed_code(separator)
}

/// Encode all lists as an xlsx workbook
pub fn store_export(store: &AppStore) -> Result<Vec<u8>, ExchangeError> {
    export_collection(&store.collection().read_untracked(), &XlsxCodec)
}

/// Replace all lists with the ones in `bytes`.
///
/// Works on a copy and only swaps it in on success, so the lists on screen
/// are untouched by a failed import.
pub fn store_import(store: &AppStore, bytes: &[u8]) -> Result<usize, ExchangeError> {
    let mut next = store.collection().get_untracked();
    let count = import_collection(&mut next, &XlsxCodec, bytes)?;
    *store.collection().write() = next;
    Ok(count)
}
