//! Settings
//!
//! Startup defaults. Every field is optional in the JSON source; missing
//! fields take the values below.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::composer::Separator;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Char limit given to newly added lists
    pub default_char_limit: usize,
    /// New lists are named "{prefix} {n}"
    pub list_name_prefix: String,
    pub default_separator: Separator,
    pub export_file_name: String,
    /// How long the "Copied!" acknowledgment stays up
    pub copied_ack_ms: u32,
    pub log_level: String,
    /// Start with a demo list instead of an empty board
    pub seed_sample_list: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_char_limit: 20,
            list_name_prefix: "List".to_string(),
            default_separator: Separator::Underscore,
            export_file_name: "lists-export.xlsx".to_string(),
            copied_ack_ms: 2000,
            log_level: "info".to_string(),
            seed_sample_list: true,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.default_char_limit = settings.default_char_limit.max(1);
        Ok(settings)
    }

    /// Parsed log level; unknown names mean `Info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "default_separator": "semicolon", "copied_ack_ms": 500 }"#).unwrap();
        assert_eq!(settings.default_separator, Separator::Semicolon);
        assert_eq!(settings.copied_ack_ms, 500);
        assert_eq!(settings.default_char_limit, 20);
        assert_eq!(settings.export_file_name, "lists-export.xlsx");
    }

    #[test]
    fn test_char_limit_clamped() {
        let settings = Settings::from_json(r#"{ "default_char_limit": 0 }"#).unwrap();
        assert_eq!(settings.default_char_limit, 1);
    }

    #[test]
    fn test_level_filter() {
        let mut settings = Settings::default();
        assert_eq!(settings.level_filter(), LevelFilter::Info);
        settings.log_level = "debug".to_string();
        assert_eq!(settings.level_filter(), LevelFilter::Debug);
        settings.log_level = "loud".to_string();
        assert_eq!(settings.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }
}
