//! List Card Component
//!
//! One dropdown list: editable name, char limit, item form, view toggles,
//! the dropdown itself and the remove-item button.

use composer_core::{DisplayMode, ListId, ListPatch, SortMode};
use leptos::prelude::*;

use crate::components::keys::{keep_focus, prompt_key, PromptKey};
use crate::components::{DeleteConfirmButton, ItemForm};
use crate::store::{read_list, store_delete_list, store_patch_list, update_list, use_app_store};

#[component]
pub fn ListCard(list_id: ListId) -> impl IntoView {
    view! {
        <div class="list-card">
            <ListHeader list_id=list_id />
            <ItemForm list_id=list_id />
            <ItemPicker list_id=list_id />
        </div>
    }
}

/// Name (click pencil to rename), char limit and delete
#[component]
fn ListHeader(list_id: ListId) -> impl IntoView {
    let store = use_app_store();
    let name_ref = NodeRef::<leptos::html::Input>::new();

    let (editing_name, set_editing_name) = signal(false);
    let (edited_name, set_edited_name) = signal(String::new());

    let name = move || read_list(&store, list_id, |l| l.name().to_string()).unwrap_or_default();
    let char_limit = move || read_list(&store, list_id, |l| l.char_limit().to_string()).unwrap_or_default();

    // Blank names keep the editor open
    let save_name = move || {
        let candidate = edited_name.get_untracked();
        if update_list(&store, list_id, |l| l.rename(&candidate)).unwrap_or(false) {
            set_editing_name.set(false);
        }
    };
    let cancel_name = move || {
        set_edited_name.set(name());
        set_editing_name.set(false);
    };
    let start_editing = move |_: web_sys::MouseEvent| {
        set_edited_name.set(name());
        set_editing_name.set(true);
    };

    Effect::new(move |_| {
        if editing_name.get() {
            if let Some(input) = name_ref.get() {
                let _ = input.focus();
                input.select();
            }
        }
    });

    view! {
        <div class="list-header">
            <span class="drag-handle" title="Drag to reorder">"⠿"</span>
            {move || if editing_name.get() {
                view! {
                    <div class="name-editor">
                        <input
                            type="text"
                            node_ref=name_ref
                            prop:value=move || edited_name.get()
                            on:input=move |ev| set_edited_name.set(event_target_value(&ev))
                            on:keydown=move |ev: web_sys::KeyboardEvent| match prompt_key(&ev.key()) {
                                Some(PromptKey::Commit) => save_name(),
                                Some(PromptKey::Cancel) => cancel_name(),
                                None => {}
                            }
                            on:blur=move |_| save_name()
                        />
                        <button type="button" class="icon-btn" title="Save name" on:mousedown=keep_focus on:click=move |_| save_name()>"✓"</button>
                        <button type="button" class="icon-btn" title="Cancel editing" on:mousedown=keep_focus on:click=move |_| cancel_name()>"✗"</button>
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="name-display">
                        <h2 class="list-name">{name}</h2>
                        <input
                            type="number"
                            min="1"
                            class="char-limit"
                            title="Character limit for item values"
                            prop:value=char_limit
                            on:input=move |ev| {
                                let limit = event_target_value(&ev).trim().parse::<usize>().unwrap_or(1);
                                store_patch_list(&store, list_id, ListPatch { char_limit: Some(limit), ..Default::default() });
                            }
                        />
                        <button
                            type="button"
                            class="icon-btn"
                            title=move || format!("Rename {}", name())
                            on:click=start_editing
                        >
                            "✎"
                        </button>
                        <DeleteConfirmButton
                            label="Delete this list"
                            prompt=Signal::derive(move || format!("Delete \"{}\"?", name()))
                            on_confirm=move |_| store_delete_list(&store, list_id)
                        />
                    </div>
                }.into_any()
            }}
        </div>
    }
}

/// Sort/display toggles, the dropdown and the remove-selected button
#[component]
fn ItemPicker(list_id: ListId) -> impl IntoView {
    let store = use_app_store();

    let sort_mode = move || read_list(&store, list_id, |l| l.sort_mode).unwrap_or_default();
    let display_mode = move || read_list(&store, list_id, |l| l.display_mode).unwrap_or_default();
    let selected = move || read_list(&store, list_id, |l| l.selected_item().to_string()).unwrap_or_default();
    let is_empty = move || read_list(&store, list_id, |l| l.is_empty()).unwrap_or(true);

    // (value, label, tooltip) in display order
    let options = move || {
        read_list(&store, list_id, |l| {
            l.visible_items()
                .into_iter()
                .map(|item| {
                    (
                        item.value.clone(),
                        item.label(l.display_mode).to_string(),
                        item.tooltip(l.display_mode).to_string(),
                    )
                })
                .collect::<Vec<_>>()
        })
        .unwrap_or_default()
    };

    let sort_icon = move || match sort_mode() {
        SortMode::None => "⇅",
        SortMode::Asc => "A→Z",
        SortMode::Desc => "Z→A",
    };

    view! {
        <div class="item-picker">
            <div class="picker-toolbar">
                <button
                    type="button"
                    class=move || if sort_mode() == SortMode::None { "icon-btn" } else { "icon-btn active" }
                    title=move || sort_mode().toggle_hint()
                    on:click=move |_| {
                        update_list(&store, list_id, |l| l.toggle_sort());
                    }
                >
                    {sort_icon}
                </button>
                <button
                    type="button"
                    class=move || if display_mode() == DisplayMode::Description { "icon-btn active" } else { "icon-btn" }
                    title="Switch between value and description"
                    on:click=move |_| {
                        update_list(&store, list_id, |l| l.toggle_display());
                    }
                >
                    "⇄"
                </button>
            </div>
            <div class="picker-row">
                <select
                    class="item-select"
                    disabled=is_empty
                    prop:value=selected
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        update_list(&store, list_id, |l| l.select_item(&value));
                    }
                >
                    {move || if is_empty() {
                        view! { <option value="" disabled=true>"List is empty"</option> }.into_any()
                    } else {
                        view! {
                            <option value="" disabled=move || !selected().is_empty()>"Choose an item..."</option>
                            {options()
                                .into_iter()
                                .map(|(value, label, tooltip)| {
                                    let is_selected = value == selected();
                                    view! {
                                        <option value=value title=tooltip selected=is_selected>{label}</option>
                                    }
                                })
                                .collect_view()}
                        }.into_any()
                    }}
                </select>
                <button
                    type="button"
                    class="remove-item-btn"
                    title="Remove selected item"
                    disabled=move || selected().is_empty() || is_empty()
                    on:click=move |_| {
                        update_list(&store, list_id, |l| l.remove_selected());
                    }
                >
                    "🗑"
                </button>
            </div>
        </div>
    }
}
