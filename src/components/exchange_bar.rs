//! Exchange Bar Component
//!
//! Import/export buttons for moving all lists in and out of a spreadsheet.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::context::use_app_context;
use crate::store::{store_export, store_import, use_app_store, AppStateStoreFields};

const IMPORT_FAILED: &str = "The file could not be processed. Make sure it is a valid spreadsheet.";

#[component]
pub fn ExchangeBar() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let file_input = NodeRef::<leptos::html::Input>::new();

    let on_file_picked = move |ev: web_sys::Event| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
            return;
        };
        let file = input.files().and_then(|files| files.get(0));
        // Reset so picking the same file again still fires change
        input.set_value("");
        let Some(file) = file else {
            return;
        };

        spawn_local(async move {
            let result = match commands::read_file_bytes(&file).await {
                Ok(bytes) => store_import(&store, &bytes).map_err(|e| e.to_string()),
                Err(e) => Err(e),
            };
            match result {
                Ok(count) => log::info!(target: "exchange", "imported {} lists from {}", count, file.name()),
                Err(e) => {
                    log::error!(target: "exchange", "import of {} failed: {}", file.name(), e);
                    commands::alert(IMPORT_FAILED);
                }
            }
        });
    };

    let on_export = move |_| {
        let file_name = ctx.setting(|s| s.export_file_name.clone());
        let result = store_export(&store)
            .map_err(|e| e.to_string())
            .and_then(|bytes| commands::download_bytes(&file_name, &bytes, commands::XLSX_MIME));
        if let Err(e) = result {
            log::error!(target: "exchange", "export failed: {}", e);
            commands::alert(&format!("Export failed: {}", e));
        }
    };

    view! {
        <div class="exchange-bar">
            <input
                type="file"
                class="hidden"
                accept=".xlsx, .xls"
                node_ref=file_input
                on:change=on_file_picked
            />
            <button
                type="button"
                class="exchange-btn"
                title="Import lists from a spreadsheet"
                on:click=move |_| {
                    if let Some(input) = file_input.get() {
                        input.click();
                    }
                }
            >
                "⭱ Import"
            </button>
            <button
                type="button"
                class="exchange-btn"
                title="Export lists to a spreadsheet"
                disabled=move || store.collection().read().is_empty()
                on:click=on_export
            >
                "⭳ Export"
            </button>
        </div>
    }
}
