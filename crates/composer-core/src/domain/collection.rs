//! List Collection
//!
//! The ordered set of lists. Order matters: it is both the on-screen order and
//! the order selections appear in the composed code.

use log::debug;

use super::entity::{position_of, Entity};
use super::item::ListItem;
use super::list::{CodeList, ListId, ListPatch};
use crate::composer::{compose, Separator};
use crate::settings::Settings;

#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    lists: Vec<CodeList>,
    next_id: ListId,
    name_prefix: String,
    default_char_limit: usize,
}

impl Default for Collection {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl Collection {
    /// Empty collection using the naming and limit defaults from `settings`
    pub fn new(settings: &Settings) -> Self {
        Self {
            lists: Vec::new(),
            next_id: 1,
            name_prefix: settings.list_name_prefix.clone(),
            default_char_limit: settings.default_char_limit.max(1),
        }
    }

    /// Collection holding one demo list, shown on first load
    pub fn with_sample(settings: &Settings) -> Self {
        let mut collection = Self::new(settings);
        let id = collection.allocate_id();
        let sample = CodeList::from_items(
            id,
            format!("{} 1", collection.name_prefix),
            vec![
                ListItem::new("Apple", "Red and juicy."),
                ListItem::new("Banana", "Long and yellow."),
                ListItem::new("Cherry", "Small and sweet."),
            ],
            collection.default_char_limit,
        );
        collection.lists.push(sample);
        if let Some(list) = collection.lists.last_mut() {
            list.set_char_limit(collection.default_char_limit);
        }
        collection
    }

    fn allocate_id(&mut self) -> ListId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn lists(&self) -> &[CodeList] {
        &self.lists
    }

    pub fn list_ids(&self) -> Vec<ListId> {
        self.lists.iter().map(Entity::id).collect()
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn list(&self, id: ListId) -> Option<&CodeList> {
        self.lists.iter().find(|l| l.id() == id)
    }

    pub fn list_mut(&mut self, id: ListId) -> Option<&mut CodeList> {
        self.lists.iter_mut().find(|l| l.id() == id)
    }

    /// Append an empty list named after its position
    pub fn add_list(&mut self) -> ListId {
        let id = self.allocate_id();
        let name = format!("{} {}", self.name_prefix, self.lists.len() + 1);
        debug!("add list {} '{}'", id, name);
        self.lists.push(CodeList::new(id, name, self.default_char_limit));
        id
    }

    pub fn delete_list(&mut self, id: ListId) -> bool {
        let before = self.lists.len();
        self.lists.retain(|l| l.id() != id);
        let removed = self.lists.len() != before;
        if removed {
            debug!("delete list {}", id);
        }
        removed
    }

    /// Move `source` to the index currently held by `target`.
    ///
    /// Everything else keeps its relative order.
    pub fn reorder(&mut self, source: ListId, target: ListId) -> bool {
        if source == target {
            return false;
        }
        let (Some(from), Some(to)) = (position_of(&self.lists, source), position_of(&self.lists, target)) else {
            return false;
        };
        let moved = self.lists.remove(from);
        self.lists.insert(to, moved);
        debug!("reorder list {} from {} to {}", source, from, to);
        true
    }

    /// Merge a partial update into one list
    pub fn update_list(&mut self, id: ListId, patch: ListPatch) -> bool {
        match self.list_mut(id) {
            Some(list) => {
                list.apply(patch);
                true
            }
            None => false,
        }
    }

    /// Run `f` against one list; `None` when the id is unknown
    pub fn with_list_mut<R>(&mut self, id: ListId, f: impl FnOnce(&mut CodeList) -> R) -> Option<R> {
        self.list_mut(id).map(f)
    }

    pub fn rename_list(&mut self, id: ListId, name: &str) -> bool {
        self.list_mut(id).is_some_and(|l| l.rename(name))
    }

    /// Swap in a whole new set of lists, each with a fresh id
    pub fn replace_all(&mut self, lists: Vec<(String, Vec<ListItem>)>) {
        let limit = self.default_char_limit;
        let mut replaced = Vec::with_capacity(lists.len());
        for (name, items) in lists {
            let id = self.allocate_id();
            replaced.push(CodeList::from_items(id, name, items, limit));
        }
        self.lists = replaced;
    }

    /// Selections joined in list order, skipping lists with nothing selected
    pub fn composed_code(&self, separator: Separator) -> String {
        compose(self.lists.iter().map(CodeList::selected_item), separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(collection: &Collection) -> Vec<String> {
        collection.lists().iter().map(|l| l.name().to_string()).collect()
    }

    fn collection_of(n: usize) -> Collection {
        let mut collection = Collection::default();
        for _ in 0..n {
            collection.add_list();
        }
        collection
    }

    fn select(collection: &mut Collection, id: ListId, value: &str) {
        collection.with_list_mut(id, |l| {
            l.set_draft_value(value);
            l.submit_draft().expect("add failed");
            l.select_item(value);
        });
    }

    #[test]
    fn test_add_list_defaults() {
        let collection = collection_of(2);
        assert_eq!(names(&collection), vec!["List 1", "List 2"]);
        let list = &collection.lists()[1];
        assert!(list.is_empty());
        assert_eq!(list.char_limit(), 20);
        assert_ne!(collection.lists()[0].id(), list.id());
    }

    #[test]
    fn test_delete_list() {
        let mut collection = collection_of(3);
        let ids = collection.list_ids();
        assert!(collection.delete_list(ids[1]));
        assert_eq!(collection.list_ids(), vec![ids[0], ids[2]]);
        assert!(!collection.delete_list(999));
    }

    #[test]
    fn test_reorder_forward_and_backward() {
        let mut collection = collection_of(4);
        let ids = collection.list_ids();
        let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);

        assert!(collection.reorder(a, c));
        assert_eq!(collection.list_ids(), vec![b, c, a, d]);

        assert!(collection.reorder(d, b));
        assert_eq!(collection.list_ids(), vec![d, b, c, a]);
    }

    #[test]
    fn test_reorder_keeps_relative_order_of_others() {
        let mut collection = collection_of(5);
        let ids = collection.list_ids();
        collection.reorder(ids[1], ids[3]);

        let others: Vec<ListId> = collection.list_ids().into_iter().filter(|id| *id != ids[1]).collect();
        assert_eq!(others, vec![ids[0], ids[2], ids[3], ids[4]]);
    }

    #[test]
    fn test_reorder_noop_cases() {
        let mut collection = collection_of(2);
        let ids = collection.list_ids();
        assert!(!collection.reorder(ids[0], ids[0]));
        assert!(!collection.reorder(ids[0], 42));
        assert_eq!(collection.list_ids(), ids);
    }

    #[test]
    fn test_update_list_unknown_id() {
        let mut collection = collection_of(1);
        let before = collection.clone();
        assert!(!collection.update_list(42, ListPatch { name: Some("x".into()), ..Default::default() }));
        assert_eq!(collection, before);
    }

    #[test]
    fn test_composed_code_skips_empty_selections() {
        let mut collection = collection_of(3);
        let ids = collection.list_ids();
        select(&mut collection, ids[0], "AB");
        select(&mut collection, ids[2], "01");

        assert_eq!(collection.composed_code(Separator::Underscore), "AB_01");
        assert_eq!(collection.composed_code(Separator::Semicolon), "AB;01");

        collection.reorder(ids[2], ids[0]);
        assert_eq!(collection.composed_code(Separator::Hyphen), "01-AB");
    }

    #[test]
    fn test_replace_all_assigns_fresh_ids() {
        let mut collection = collection_of(2);
        let old_ids = collection.list_ids();
        collection.replace_all(vec![("Imported".to_string(), vec![ListItem::new("X", "")])]);

        assert_eq!(names(&collection), vec!["Imported"]);
        assert!(!old_ids.contains(&collection.list_ids()[0]));
        assert_eq!(collection.lists()[0].selected_item(), "X");
    }

    #[test]
    fn test_sample_collection() {
        let collection = Collection::with_sample(&Settings::default());
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.lists()[0].items().len(), 3);
        assert_eq!(collection.composed_code(Separator::Underscore), "Apple");
    }
}
