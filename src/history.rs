//! Search History Manager
//!
//! Most-recent-first, duplicate-free, bounded list of submitted queries.

use crate::config::{HISTORY_CAPACITY, HISTORY_KEY, HISTORY_PANEL_SIZE};
use crate::list_store::PersistedList;
use crate::storage::{KeyValueStorage, StorageResult};

pub struct SearchHistory<S> {
    list: PersistedList<String, S>,
}

impl<S: KeyValueStorage> SearchHistory<S> {
    pub fn new(storage: S) -> Self {
        Self {
            list: PersistedList::new(storage, HISTORY_KEY),
        }
    }

    /// All stored entries, newest first
    pub fn entries(&self) -> Vec<String> {
        self.list.load()
    }

    /// Entries shown in the history panel
    pub fn recent(&self) -> Vec<String> {
        recent_entries(&self.entries())
    }

    /// Move `query` to the front, dropping older duplicates and anything past
    /// the capacity. Blank queries are ignored (`Ok(None)`).
    pub fn record(&self, query: &str) -> StorageResult<Option<Vec<String>>> {
        if query.trim().is_empty() {
            return Ok(None);
        }
        self.list.update(|entries| {
            push_front_unique(entries, query, HISTORY_CAPACITY);
            true
        })
    }
}

/// Insert at the front with exact-match dedupe, then truncate to `capacity`
pub fn push_front_unique(entries: &mut Vec<String>, query: &str, capacity: usize) {
    entries.retain(|entry| entry != query);
    entries.insert(0, query.to_string());
    entries.truncate(capacity);
}

/// The first few entries of a newest-first list
pub fn recent_entries(entries: &[String]) -> Vec<String> {
    entries.iter().take(HISTORY_PANEL_SIZE).cloned().collect()
}
