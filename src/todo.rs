//! To-Do Manager
//!
//! Items are addressed by their current position in the stored list, so a
//! view must be rebuilt after every mutation before the next interaction.

use crate::config::TODO_KEY;
use crate::list_store::PersistedList;
use crate::models::TodoItem;
use crate::storage::{KeyValueStorage, StorageResult};

/// Result of submitting the add form
#[derive(Debug, Clone, PartialEq)]
pub struct AddOutcome {
    /// Updated list, `None` when nothing was added
    pub items: Option<Vec<TodoItem>>,
    /// What the input field should hold afterwards
    pub input: String,
}

pub struct TodoList<S> {
    list: PersistedList<TodoItem, S>,
}

impl<S: KeyValueStorage> TodoList<S> {
    pub fn new(storage: S) -> Self {
        Self {
            list: PersistedList::new(storage, TODO_KEY),
        }
    }

    pub fn items(&self) -> Vec<TodoItem> {
        self.list.load()
    }

    /// Append a trimmed, uncompleted item. Blank text is ignored (`Ok(None)`).
    pub fn add(&self, text: &str) -> StorageResult<Option<Vec<TodoItem>>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        self.list.update(|items| {
            items.push(TodoItem::new(text));
            true
        })
    }

    /// Add from the input field: cleared after an add, kept as typed otherwise
    pub fn submit(&self, input: &str) -> StorageResult<AddOutcome> {
        let items = self.add(input)?;
        let input = if items.is_some() { String::new() } else { input.to_string() };
        Ok(AddOutcome { items, input })
    }

    /// List to render after a mutation.
    ///
    /// Falls back to the stored list when nothing changed, so a control the
    /// browser already flipped is reset to what storage says.
    pub fn rendered(&self, result: &StorageResult<Option<Vec<TodoItem>>>) -> Vec<TodoItem> {
        match result {
            Ok(Some(items)) => items.clone(),
            _ => self.items(),
        }
    }

    /// Flip completion of the item at `index`; out of range is ignored
    pub fn toggle(&self, index: usize) -> StorageResult<Option<Vec<TodoItem>>> {
        self.list.update(|items| match items.get_mut(index) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        })
    }

    /// Remove the item at `index`; out of range is ignored
    pub fn remove(&self, index: usize) -> StorageResult<Option<Vec<TodoItem>>> {
        self.list.update(|items| {
            if index < items.len() {
                items.remove(index);
                true
            } else {
                false
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn make_item(text: &str, completed: bool) -> TodoItem {
        TodoItem {
            text: text.to_string(),
            completed,
        }
    }

    fn seeded(items: &[TodoItem]) -> MemoryStorage {
        MemoryStorage::new().with_entry(TODO_KEY, &serde_json::to_string(items).unwrap())
    }

    #[test]
    fn test_add_trims_text() {
        let storage = MemoryStorage::new();
        let todos = TodoList::new(&storage);

        let items = todos.add("  buy milk  ").unwrap();

        assert_eq!(items, Some(vec![make_item("buy milk", false)]));
        assert_eq!(todos.items(), vec![make_item("buy milk", false)]);
    }

    #[test]
    fn test_add_clears_input() {
        let storage = MemoryStorage::new();
        let todos = TodoList::new(&storage);

        let blank = todos.submit("   ").unwrap();
        assert_eq!(blank, AddOutcome { items: None, input: "   ".to_string() });

        let added = todos.submit("  buy milk  ").unwrap();
        assert_eq!(added.input, "");
        assert_eq!(added.items, Some(vec![make_item("buy milk", false)]));
        assert_eq!(todos.items(), vec![make_item("buy milk", false)]);
    }

    #[test]
    fn test_rendered_after_noop_reloads_storage() {
        let storage = seeded(&[make_item("a", false)]);
        let todos = TodoList::new(&storage);

        let result = todos.toggle(3);
        assert_eq!(todos.rendered(&result), vec![make_item("a", false)]);

        let result = todos.toggle(0);
        assert_eq!(todos.rendered(&result), vec![make_item("a", true)]);
    }

    #[test]
    fn test_add_appends_at_end() {
        let storage = MemoryStorage::new();
        let todos = TodoList::new(&storage);

        todos.add("first").unwrap();
        todos.add("second").unwrap();

        let texts: Vec<String> = todos.items().into_iter().map(|item| item.text).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    fn test_add_blank_is_noop() {
        let storage = MemoryStorage::new();
        let todos = TodoList::new(&storage);

        assert_eq!(todos.add("   ").unwrap(), None);
        assert!(todos.items().is_empty());
        assert_eq!(storage.get(TODO_KEY), None);
    }

    #[test]
    fn test_toggle_in_bounds() {
        let storage = seeded(&[make_item("a", false), make_item("b", false)]);
        let todos = TodoList::new(&storage);

        todos.toggle(1).unwrap();
        assert_eq!(todos.items(), vec![make_item("a", false), make_item("b", true)]);

        todos.toggle(1).unwrap();
        assert_eq!(todos.items(), vec![make_item("a", false), make_item("b", false)]);
    }

    #[test]
    fn test_toggle_out_of_bounds() {
        let storage = seeded(&[make_item("a", false), make_item("b", false)]);
        let todos = TodoList::new(&storage);

        assert_eq!(todos.toggle(5).unwrap(), None);
        assert_eq!(todos.items(), vec![make_item("a", false), make_item("b", false)]);
    }

    #[test]
    fn test_remove_shifts_indices() {
        let storage = seeded(&[make_item("a", false), make_item("b", true), make_item("c", false)]);
        let todos = TodoList::new(&storage);

        todos.remove(0).unwrap();

        let items = todos.items();
        assert_eq!(items, vec![make_item("b", true), make_item("c", false)]);

        // Index 1 now refers to "c"
        todos.toggle(1).unwrap();
        assert_eq!(todos.items()[1], make_item("c", true));
    }

    #[test]
    fn test_remove_out_of_bounds() {
        let storage = seeded(&[make_item("a", false)]);
        let todos = TodoList::new(&storage);

        assert_eq!(todos.remove(1).unwrap(), None);
        assert_eq!(todos.items().len(), 1);
    }

    #[test]
    fn test_reads_existing_storage_format() {
        let storage = MemoryStorage::new().with_entry(TODO_KEY, r#"[{"text":"x","completed":true}]"#);
        let todos = TodoList::new(&storage);

        assert_eq!(todos.items(), vec![make_item("x", true)]);
    }
}
