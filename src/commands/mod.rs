//! Browser Command Wrappers
//!
//! Thin async/sync bindings to the browser APIs the app needs, organized by
//! concern. Errors come back as display strings.

mod clipboard;
mod dialog;
mod files;

use wasm_bindgen::JsValue;

// Re-export all public items
pub use clipboard::*;
pub use dialog::*;
pub use files::*;

/// Render a JS exception for logs and alerts
fn js_error(context: &str, err: JsValue) -> String {
    match err.as_string() {
        Some(message) => format!("{}: {}", context, message),
        None => format!("{}: {:?}", context, err),
    }
}
