//! Clipboard Commands
//!
//! Frontend wrappers for clipboard operations.

use wasm_bindgen_futures::JsFuture;

use super::js_error;

/// Write plain text to the system clipboard
pub async fn write_clipboard_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window available")?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| js_error("Failed to copy to clipboard", e))
}
