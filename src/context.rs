//! Application Context
//!
//! Settings shared via Leptos Context API, loaded once from the host page.

use composer_core::Settings;
use leptos::prelude::*;

/// Id of the optional `<script type="application/json">` block holding settings
pub const SETTINGS_ELEMENT_ID: &str = "composer-settings";

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    settings: StoredValue<Settings>,
}

impl AppContext {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: StoredValue::new(settings),
        }
    }

    /// Read a value out of the settings
    pub fn setting<R>(&self, f: impl FnOnce(&Settings) -> R) -> R {
        self.settings.with_value(f)
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Settings embedded in the page, or defaults when absent
pub fn load_settings() -> Settings {
    let source = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(SETTINGS_ELEMENT_ID))
        .and_then(|el| el.text_content());
    settings_from_source(source.as_deref())
}

/// Parse settings JSON; malformed input falls back to defaults
pub fn settings_from_source(source: Option<&str>) -> Settings {
    match source.map(str::trim).filter(|s| !s.is_empty()) {
        Some(json) => Settings::from_json(json).unwrap_or_else(|e| {
            log::warn!(target: "settings", "ignoring malformed settings: {}", e);
            Settings::default()
        }),
        None => Settings::default(),
    }
}
