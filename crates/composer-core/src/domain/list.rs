//! Code List Entity
//!
//! One dropdown: its items, the active selection, view toggles and the
//! in-progress draft used to add or edit items.

use log::debug;

use super::entity::Entity;
use super::item::{cmp_values, ListItem};
use super::modes::{DisplayMode, SortMode};
use crate::error::ItemError;

pub type ListId = u32;

/// Whether the draft fields belong to a new item or to an existing one
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    /// Editing the item whose value was `original` when editing started
    Editing { original: String },
}

/// Partial set of field changes merged into a list by id
///
/// `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListPatch {
    pub name: Option<String>,
    pub char_limit: Option<usize>,
    pub display_mode: Option<DisplayMode>,
    pub sort_mode: Option<SortMode>,
    pub selected_item: Option<String>,
    pub draft_value: Option<String>,
    pub draft_description: Option<String>,
}

/// A named dropdown list
///
/// Invariants: values are unique ignoring case, the selection is empty or
/// names an existing value, and the char limit is at least 1.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeList {
    id: ListId,
    name: String,
    items: Vec<ListItem>,
    selected: String,
    pub display_mode: DisplayMode,
    pub sort_mode: SortMode,
    char_limit: usize,
    draft_value: String,
    draft_description: String,
    error: Option<ItemError>,
    edit_state: EditState,
}

impl CodeList {
    /// Create an empty list
    pub fn new(id: ListId, name: impl Into<String>, char_limit: usize) -> Self {
        Self {
            id,
            name: name.into(),
            items: Vec::new(),
            selected: String::new(),
            display_mode: DisplayMode::default(),
            sort_mode: SortMode::default(),
            char_limit: char_limit.max(1),
            draft_value: String::new(),
            draft_description: String::new(),
            error: None,
            edit_state: EditState::Idle,
        }
    }

    /// Build a list around already-validated items, as import does.
    ///
    /// The char limit fits the longest value and the first item is selected.
    pub fn from_items(id: ListId, name: impl Into<String>, items: Vec<ListItem>, empty_limit: usize) -> Self {
        let char_limit = items
            .iter()
            .map(ListItem::value_len)
            .max()
            .unwrap_or(empty_limit);
        let mut list = Self::new(id, name, char_limit);
        list.selected = items.first().map(|i| i.value.clone()).unwrap_or_default();
        list.items = items;
        list
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename; blank names are ignored
    pub fn rename(&mut self, name: &str) -> bool {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.name = trimmed.to_string();
        true
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Selected value, empty when nothing is selected
    pub fn selected_item(&self) -> &str {
        &self.selected
    }

    pub fn char_limit(&self) -> usize {
        self.char_limit
    }

    pub fn set_char_limit(&mut self, limit: usize) {
        self.char_limit = limit.max(1);
    }

    pub fn draft_value(&self) -> &str {
        &self.draft_value
    }

    pub fn draft_description(&self) -> &str {
        &self.draft_description
    }

    /// Characters typed into the draft value, untrimmed (the `n/limit` counter)
    pub fn draft_len(&self) -> usize {
        self.draft_value.chars().count()
    }

    pub fn error(&self) -> Option<&ItemError> {
        self.error.as_ref()
    }

    pub fn edit_state(&self) -> &EditState {
        &self.edit_state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.edit_state, EditState::Editing { .. })
    }

    /// Typing in the value field clears any stale error
    pub fn set_draft_value(&mut self, value: impl Into<String>) {
        self.draft_value = value.into();
        self.error = None;
    }

    pub fn set_draft_description(&mut self, description: impl Into<String>) {
        self.draft_description = description.into();
    }

    /// First problem that would block submitting the current draft
    pub fn draft_issue(&self) -> Option<ItemError> {
        self.validate_draft().err()
    }

    /// Check the draft and return its trimmed value
    pub fn validate_draft(&self) -> Result<String, ItemError> {
        let value = self.draft_value.trim();
        if value.is_empty() {
            return Err(ItemError::Empty);
        }

        let editing = match &self.edit_state {
            EditState::Editing { original } => Some(original.as_str()),
            EditState::Idle => None,
        };
        let duplicate = self
            .items
            .iter()
            .filter(|item| Some(item.value.as_str()) != editing)
            .any(|item| item.value_eq_ignore_case(value));
        if duplicate {
            return Err(ItemError::Duplicate);
        }

        if value.chars().count() > self.char_limit {
            return Err(ItemError::OverLimit { limit: self.char_limit });
        }

        Ok(value.to_string())
    }

    /// Add a new item, or replace the one being edited in place.
    ///
    /// On failure the error is kept on the list and items are untouched.
    pub fn submit_draft(&mut self) -> Result<(), ItemError> {
        let value = match self.validate_draft() {
            Ok(value) => value,
            Err(e) => {
                self.error = Some(e.clone());
                return Err(e);
            }
        };
        let item = ListItem::new(value, self.draft_description.trim());

        match std::mem::take(&mut self.edit_state) {
            EditState::Editing { original } => {
                if let Some(slot) = self.items.iter_mut().find(|i| i.value == original) {
                    debug!("list {}: update item '{}' -> '{}'", self.id, original, item.value);
                    self.selected = item.value.clone();
                    *slot = item;
                } else {
                    // The edited item vanished; fall back to appending it
                    self.push_item(item);
                }
            }
            EditState::Idle => self.push_item(item),
        }

        self.draft_value.clear();
        self.draft_description.clear();
        self.error = None;
        Ok(())
    }

    fn push_item(&mut self, item: ListItem) {
        debug!("list {}: add item '{}'", self.id, item.value);
        if self.items.is_empty() {
            self.selected = item.value.clone();
        }
        self.items.push(item);
    }

    /// Select an item and load it into the draft for editing.
    ///
    /// An empty or unknown value clears the selection and leaves edit mode.
    pub fn select_item(&mut self, value: &str) {
        self.error = None;
        match self.items.iter().find(|i| i.value == value) {
            Some(item) => {
                self.selected = item.value.clone();
                self.draft_value = item.value.clone();
                self.draft_description = item.description.clone();
                self.edit_state = EditState::Editing {
                    original: item.value.clone(),
                };
            }
            None => {
                self.selected.clear();
                self.draft_value.clear();
                self.draft_description.clear();
                self.edit_state = EditState::Idle;
            }
        }
    }

    /// Leave edit mode, dropping the draft and the selection
    pub fn cancel_edit(&mut self) {
        self.select_item("");
    }

    /// Delete the selected item; the first remaining item becomes selected
    pub fn remove_selected(&mut self) -> Option<ListItem> {
        if self.selected.is_empty() {
            return None;
        }
        let index = self.items.iter().position(|i| i.value == self.selected)?;
        let removed = self.items.remove(index);
        debug!("list {}: remove item '{}'", self.id, removed.value);

        let was_editing = matches!(&self.edit_state, EditState::Editing { original } if *original == removed.value);
        if was_editing {
            self.draft_value.clear();
            self.draft_description.clear();
            self.edit_state = EditState::Idle;
        }
        self.selected = self.items.first().map(|i| i.value.clone()).unwrap_or_default();
        self.error = None;
        Some(removed)
    }

    pub fn toggle_sort(&mut self) {
        self.sort_mode = self.sort_mode.next();
    }

    pub fn toggle_display(&mut self) {
        self.display_mode = self.display_mode.toggled();
    }

    /// Items in display order. Stored order is left alone.
    pub fn visible_items(&self) -> Vec<&ListItem> {
        let mut items: Vec<&ListItem> = self.items.iter().collect();
        match self.sort_mode {
            SortMode::None => {}
            SortMode::Asc => items.sort_by(|a, b| cmp_values(a, b)),
            SortMode::Desc => {
                items.sort_by(|a, b| cmp_values(a, b));
                items.reverse();
            }
        }
        items
    }

    /// Merge a patch into this list
    pub fn apply(&mut self, patch: ListPatch) {
        if let Some(name) = patch.name {
            self.rename(&name);
        }
        if let Some(limit) = patch.char_limit {
            self.set_char_limit(limit);
        }
        if let Some(mode) = patch.display_mode {
            self.display_mode = mode;
        }
        if let Some(mode) = patch.sort_mode {
            self.sort_mode = mode;
        }
        if let Some(selected) = patch.selected_item {
            self.select_item(&selected);
        }
        if let Some(value) = patch.draft_value {
            self.set_draft_value(value);
        }
        if let Some(description) = patch.draft_description {
            self.set_draft_description(description);
        }
    }
}

impl Entity for CodeList {
    type Id = ListId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
