//! Code Bar Component
//!
//! Shows the composed code with the separator picker and a copy button.

use composer_core::Separator;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::store::{composed_code, store_set_separator, use_app_store, AppStateStoreFields};

#[component]
pub fn CodeBar() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let ack_ms = ctx.setting(|s| s.copied_ack_ms);

    let code = Memo::new(move |_| composed_code(&store));
    let (copied, set_copied) = signal(false);

    let copy = move |_| {
        let text = code.get_untracked();
        if text.is_empty() {
            return;
        }
        spawn_local(async move {
            match commands::write_clipboard_text(&text).await {
                Ok(()) => {
                    set_copied.set(true);
                    TimeoutFuture::new(ack_ms).await;
                    set_copied.set(false);
                }
                Err(e) => log::error!(target: "clipboard", "{}", e),
            }
        });
    };

    view! {
        <section class="code-bar">
            <div class="code-bar-header">
                <h2>"Composed Code"</h2>
                <label class="separator-picker">
                    "Separator:"
                    <select
                        prop:value=move || store.separator().get().as_str()
                        on:change=move |ev| {
                            if let Some(separator) = Separator::from_symbol(&event_target_value(&ev)) {
                                store_set_separator(&store, separator);
                            }
                        }
                    >
                        {Separator::ALL
                            .into_iter()
                            .map(|sep| view! { <option value=sep.as_str()>{sep.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
            </div>
            <div class="code-bar-row">
                <input
                    type="text"
                    class="composed-code"
                    readonly=true
                    placeholder="Pick items from the lists to build a code"
                    prop:value=move || code.get()
                />
                <button
                    type="button"
                    class=move || if copied.get() { "copy-btn copied" } else { "copy-btn" }
                    title="Copy the composed code to the clipboard"
                    disabled=move || code.get().is_empty()
                    on:click=copy
                >
                    {move || if copied.get() { "✓ Copied!" } else { "Copy" }}
                </button>
            </div>
        </section>
    }
}
