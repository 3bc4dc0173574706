//! List Item Entity
//!
//! A value/description pair. Values are unique within a list, ignoring case.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::modes::DisplayMode;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListItem {
    /// Text that ends up in the composed code
    pub value: String,
    /// Free-form explanation, may be empty
    #[serde(default)]
    pub description: String,
}

impl ListItem {
    pub fn new(value: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            description: description.into(),
        }
    }

    /// Dropdown label; an empty description falls back to the value
    pub fn label(&self, mode: DisplayMode) -> &str {
        match mode {
            DisplayMode::Value => &self.value,
            DisplayMode::Description if self.description.is_empty() => &self.value,
            DisplayMode::Description => &self.description,
        }
    }

    /// Hover text: whichever field the label is not showing
    pub fn tooltip(&self, mode: DisplayMode) -> &str {
        match mode {
            DisplayMode::Value => &self.description,
            DisplayMode::Description => &self.value,
        }
    }

    pub fn value_eq_ignore_case(&self, other: &str) -> bool {
        self.value.to_lowercase() == other.to_lowercase()
    }

    /// Number of characters in the value, as counted against a char limit
    pub fn value_len(&self) -> usize {
        self.value.chars().count()
    }
}

/// Case-insensitive ordering of two item values
pub fn cmp_values(a: &ListItem, b: &ListItem) -> Ordering {
    a.value.to_lowercase().cmp(&b.value.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_falls_back_to_value() {
        let item = ListItem::new("AB", "");
        assert_eq!(item.label(DisplayMode::Description), "AB");

        let described = ListItem::new("AB", "Alpha Bravo");
        assert_eq!(described.label(DisplayMode::Description), "Alpha Bravo");
        assert_eq!(described.label(DisplayMode::Value), "AB");
        assert_eq!(described.tooltip(DisplayMode::Value), "Alpha Bravo");
    }

    #[test]
    fn test_value_comparison_ignores_case() {
        let item = ListItem::new("Żółw", "");
        assert!(item.value_eq_ignore_case("żółw"));
        assert_eq!(item.value_len(), 4);
        assert_eq!(cmp_values(&ListItem::new("apple", ""), &ListItem::new("Banana", "")), Ordering::Less);
    }
}
