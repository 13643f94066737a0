//! Persisted List Store
//!
//! Read-modify-write cycle over one JSON array stored under a fixed key.
//! Every operation starts from the latest persisted value; nothing is cached
//! between calls.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::storage::{KeyValueStorage, StorageError, StorageResult};

pub struct PersistedList<T, S> {
    storage: S,
    key: &'static str,
    _item: PhantomData<T>,
}

impl<T, S> PersistedList<T, S>
where
    T: Serialize + DeserializeOwned,
    S: KeyValueStorage,
{
    pub fn new(storage: S, key: &'static str) -> Self {
        Self {
            storage,
            key,
            _item: PhantomData,
        }
    }

    /// Load the collection. Missing or malformed data reads as empty.
    pub fn load(&self) -> Vec<T> {
        self.storage
            .get(self.key)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Serialize and overwrite the whole collection in one write
    pub fn save(&self, items: &[T]) -> StorageResult<()> {
        let raw = serde_json::to_string(items).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.storage.set(self.key, &raw)
    }

    /// Load, mutate, save.
    ///
    /// `mutate` returns whether it changed anything; unchanged collections are
    /// not written back and yield `None`.
    pub fn update<F>(&self, mutate: F) -> StorageResult<Option<Vec<T>>>
    where
        F: FnOnce(&mut Vec<T>) -> bool,
    {
        let mut items = self.load();
        if !mutate(&mut items) {
            return Ok(None);
        }
        self.save(&items)?;
        Ok(Some(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_load_absent_is_empty() {
        let storage = MemoryStorage::new();
        let list: PersistedList<String, _> = PersistedList::new(&storage, "list");
        assert!(list.load().is_empty());
    }

    #[test]
    fn test_load_malformed_is_empty() {
        for raw in ["{not json", "null", "{\"a\":1}", "[1, 2, 3]"] {
            let storage = MemoryStorage::new().with_entry("list", raw);
            let list: PersistedList<String, _> = PersistedList::new(&storage, "list");
            assert!(list.load().is_empty(), "expected empty for {}", raw);
        }
    }

    #[test]
    fn test_save_overwrites() {
        let storage = MemoryStorage::new().with_entry("list", "[\"old\"]");
        let list: PersistedList<String, _> = PersistedList::new(&storage, "list");

        list.save(&["a".to_string(), "b".to_string()]).unwrap();

        assert_eq!(storage.get("list").as_deref(), Some("[\"a\",\"b\"]"));
        assert_eq!(list.load(), vec!["a", "b"]);
    }

    #[test]
    fn test_update_skips_write_when_unchanged() {
        let storage = MemoryStorage::new().with_entry("list", "[ \"a\" ]");
        let list: PersistedList<String, _> = PersistedList::new(&storage, "list");

        assert_eq!(list.update(|_| false).unwrap(), None);
        // Raw formatting untouched means nothing was written
        assert_eq!(storage.get("list").as_deref(), Some("[ \"a\" ]"));

        let updated = list.update(|items| {
            items.push("b".to_string());
            true
        });
        assert_eq!(updated.unwrap(), Some(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(storage.get("list").as_deref(), Some("[\"a\",\"b\"]"));
    }
}
