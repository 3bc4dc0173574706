//! Code Composer App
//!
//! Main application component: header with import/export, the composed
//! code bar and the board of lists.

use composer_core::Settings;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CodeBar, ExchangeBar, ListBoard};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(settings: Settings) -> impl IntoView {
    let store = Store::new(AppState::new(&settings));
    log::info!(
        target: "app",
        "starting with {} lists, char limit {}",
        store.collection().read_untracked().len(),
        settings.default_char_limit
    );

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(settings));

    let has_lists = move || !store.collection().read().is_empty();

    view! {
        <div class="app-layout">
            <header class="app-header">
                <div class="app-title">
                    <h1>"Code Composer"</h1>
                    <p class="app-subtitle">"Build codes by picking one item from each list"</p>
                </div>
                <ExchangeBar />
            </header>

            <Show when=has_lists>
                <CodeBar />
            </Show>

            <ListBoard />

            <Show when=move || !has_lists()>
                <div class="empty-state">
                    <p class="empty-title">"No lists to display."</p>
                    <p class="empty-hint">"Import a file or add a new list to get started."</p>
                </div>
            </Show>
        </div>
    }
}
