//! Code Composer
//!
//! Joins one selection per list into the composed code.

use serde::{Deserialize, Serialize};

/// Separators the user can pick between selections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    #[default]
    Underscore,
    Hyphen,
    Space,
    Comma,
    Semicolon,
}

impl Separator {
    pub const ALL: [Separator; 5] = [
        Separator::Underscore,
        Separator::Hyphen,
        Separator::Space,
        Separator::Comma,
        Separator::Semicolon,
    ];

    /// The text placed between selections
    pub fn as_str(&self) -> &'static str {
        match self {
            Separator::Underscore => "_",
            Separator::Hyphen => "-",
            Separator::Space => " ",
            Separator::Comma => ",",
            Separator::Semicolon => ";",
        }
    }

    /// Option label for the separator picker
    pub fn label(&self) -> &'static str {
        match self {
            Separator::Underscore => "_ (underscore)",
            Separator::Hyphen => "- (hyphen)",
            Separator::Space => "  (space)",
            Separator::Comma => ", (comma)",
            Separator::Semicolon => "; (semicolon)",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == symbol)
    }
}

/// Join non-empty selections with `separator`, keeping their order
pub fn compose<'a, I>(selections: I, separator: Separator) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    selections
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(separator.as_str())
}
