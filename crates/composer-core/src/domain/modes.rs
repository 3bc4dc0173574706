//! View Modes
//!
//! Per-list toggles that only affect how items are shown.

use serde::{Deserialize, Serialize};

/// Which field of an item the dropdown shows as its label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Value,
    Description,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Value => DisplayMode::Description,
            DisplayMode::Description => DisplayMode::Value,
        }
    }
}

/// Display ordering of a list's items
///
/// Cycles `None -> Asc -> Desc -> None`. Stored item order never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    None,
    Asc,
    Desc,
}

impl SortMode {
    pub fn next(self) -> Self {
        match self {
            SortMode::None => SortMode::Asc,
            SortMode::Asc => SortMode::Desc,
            SortMode::Desc => SortMode::None,
        }
    }

    /// Tooltip describing what the next toggle does
    pub fn toggle_hint(&self) -> &'static str {
        match self {
            SortMode::None => "Sort A-Z",
            SortMode::Asc => "Sort Z-A",
            SortMode::Desc => "Disable sorting",
        }
    }
}
