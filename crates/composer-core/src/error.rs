//! Error Types
//!
//! Item validation errors are shown inline next to the draft; exchange errors
//! abort an import or export as a whole.

use thiserror::Error;

/// Why a draft item cannot be added or saved
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemError {
    #[error("Item value cannot be empty.")]
    Empty,

    #[error("An item with this value already exists.")]
    Duplicate,

    #[error("Value exceeds the {limit} character limit.")]
    OverLimit { limit: usize },
}

impl ItemError {
    /// Short hint shown while typing, before the user submits
    pub fn hint(&self) -> &'static str {
        match self {
            ItemError::Empty => "",
            ItemError::Duplicate => "This item already exists.",
            ItemError::OverLimit { .. } => "Item value is too long.",
        }
    }
}

#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("failed to open workbook: {0}")]
    OpenWorkbook(String),

    #[error("failed to read sheet '{sheet}': {message}")]
    ReadSheet { sheet: String, message: String },

    #[error("workbook contains no sheets")]
    EmptyWorkbook,

    #[error("there are no lists to export")]
    NothingToExport,

    #[error("xlsx error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
