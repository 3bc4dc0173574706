//! Delete Confirm Button Component
//!
//! Two-step delete: a × button that turns into "prompt ✓ ✗".

use leptos::prelude::*;

use super::keys::{prompt_key, PromptKey};

/// Inline delete confirmation.
///
/// While asking, the ✓ button takes focus so Enter confirms and Escape
/// backs out. `label` is the tooltip of the idle × button.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] label: String,
    #[prop(into, default = Signal::stored("Delete?".to_string()))] prompt: Signal<String>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);
    let confirm_ref = NodeRef::<leptos::html::Button>::new();

    Effect::new(move |_| {
        if asking.get() {
            if let Some(button) = confirm_ref.get() {
                let _ = button.focus();
            }
        }
    });

    let confirm = move || {
        set_asking.set(false);
        on_confirm.run(());
    };

    let idle_button = move || {
        view! {
            <button
                type="button"
                class="icon-btn delete-btn"
                title=label.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_asking.set(true);
                }
            >
                "×"
            </button>
        }
    };

    view! {
        <Show when=move || asking.get() fallback=idle_button>
            <span
                class="delete-confirm"
                on:keydown=move |ev: web_sys::KeyboardEvent| match prompt_key(&ev.key()) {
                    Some(PromptKey::Commit) => {
                        ev.prevent_default();
                        confirm();
                    }
                    Some(PromptKey::Cancel) => set_asking.set(false),
                    None => {}
                }
            >
                <span class="delete-confirm-text">{move || prompt.get()}</span>
                <button
                    type="button"
                    class="confirm-btn"
                    title="Confirm"
                    node_ref=confirm_ref
                    on:click=move |ev| {
                        ev.stop_propagation();
                        confirm();
                    }
                >
                    "✓"
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    title="Keep it"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
