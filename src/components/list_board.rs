//! List Board Component
//!
//! Grid of list cards that can be reordered by drag-and-drop.
//! Uses leptos-dragdrop; dropping a card on another moves it to that slot.

use leptos::prelude::*;

use crate::components::ListCard;
use crate::store::{store_add_list, store_reorder_lists, use_app_store, AppStateStoreFields};

use leptos_dragdrop::*;

#[component]
pub fn ListBoard() -> impl IntoView {
    let store = use_app_store();

    let dnd = create_dnd_signals();
    bind_global_mouseup(dnd, move |dragged_id, target_id| {
        log::debug!(target: "dnd", "drop list {} on list {}", dragged_id, target_id);
        store_reorder_lists(&store, dragged_id, target_id);
    });

    let list_ids = move || store.collection().read().list_ids();

    view! {
        <main class="list-board">
            <For
                each=list_ids
                key=|id| *id
                children=move |id| {
                    let on_mousedown = make_on_mousedown(dnd, id);
                    let on_mouseenter = make_on_card_mouseenter(dnd, id);
                    let on_mouseleave = make_on_mouseleave(dnd);

                    let card_class = move || {
                        let mut c = String::from("list-card-wrapper");
                        if dnd.dragging_id_read.get() == Some(id) { c.push_str(" dragging"); }
                        if dnd.over_id_read.get() == Some(id) { c.push_str(" drop-target"); }
                        c
                    };

                    view! {
                        <div
                            class=card_class
                            on:mousedown=on_mousedown
                            on:mouseenter=on_mouseenter
                            on:mouseleave=on_mouseleave
                        >
                            <ListCard list_id=id />
                        </div>
                    }
                }
            />
            <button
                type="button"
                class="add-list-btn"
                title="Add a new list"
                on:click=move |_| {
                    store_add_list(&store);
                }
            >
                <span class="add-list-icon">"+"</span>
                <span>"Add new list"</span>
            </button>
        </main>
    }
}
