//! Item Form Component
//!
//! Draft inputs for adding a new item or editing the selected one.

use composer_core::{ItemError, ListId};
use leptos::prelude::*;

use crate::store::{read_list, update_list, use_app_store};

/// Value/description form for one list
#[component]
pub fn ItemForm(list_id: ListId) -> impl IntoView {
    let store = use_app_store();

    let draft_value = move || read_list(&store, list_id, |l| l.draft_value().to_string()).unwrap_or_default();
    let draft_description =
        move || read_list(&store, list_id, |l| l.draft_description().to_string()).unwrap_or_default();
    let is_editing = move || read_list(&store, list_id, |l| l.is_editing()).unwrap_or(false);
    let counter = move || {
        read_list(&store, list_id, |l| format!("{}/{}", l.draft_len(), l.char_limit())).unwrap_or_default()
    };
    let blocked = move || read_list(&store, list_id, |l| l.draft_issue().is_some()).unwrap_or(true);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(Err(e)) = update_list(&store, list_id, |l| l.submit_draft()) {
            log::debug!(target: "item_form", "list {}: draft rejected: {}", list_id, e);
        }
    };

    view! {
        <form class="item-form" on:submit=submit>
            <div class="item-form-row">
                <div class="draft-value">
                    <input
                        type="text"
                        placeholder="e.g. Orange"
                        prop:value=draft_value
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            update_list(&store, list_id, |l| l.set_draft_value(value));
                        }
                    />
                    <span class="char-counter">{counter}</span>
                </div>
                <input
                    type="text"
                    class="draft-description"
                    placeholder="e.g. Round and orange"
                    prop:value=draft_description
                    on:input=move |ev| {
                        let description = event_target_value(&ev);
                        update_list(&store, list_id, |l| l.set_draft_description(description));
                    }
                />
            </div>
            <div class="item-form-actions">
                <button
                    type="submit"
                    class=move || if is_editing() { "submit-btn save" } else { "submit-btn add" }
                    disabled=blocked
                >
                    {move || if is_editing() { "Save" } else { "+ Add" }}
                </button>
                <Show when=is_editing>
                    <button
                        type="button"
                        class="cancel-btn"
                        title="Cancel editing and clear the form"
                        on:click=move |_| {
                            update_list(&store, list_id, |l| l.cancel_edit());
                        }
                    >
                        "✗"
                    </button>
                </Show>
            </div>
            <DraftMessage list_id=list_id />
        </form>
    }
}

/// Error from the last submit, or a live hint about the current draft
#[component]
fn DraftMessage(list_id: ListId) -> impl IntoView {
    let store = use_app_store();

    let message = move || {
        read_list(&store, list_id, |l| match (l.error(), l.draft_issue()) {
            (Some(err), _) => ("draft-message error", err.to_string()),
            (None, Some(issue @ (ItemError::Duplicate | ItemError::OverLimit { .. }))) => {
                let class = if issue == ItemError::Duplicate { "draft-message warning" } else { "draft-message error" };
                (class, issue.hint().to_string())
            }
            (None, _) => ("draft-message", String::new()),
        })
        .unwrap_or(("draft-message", String::new()))
    };

    view! {
        <p class=move || message().0>{move || message().1}</p>
    }
}
