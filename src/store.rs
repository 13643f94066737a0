//! Global Application State Store
//!
//! Render copy of everything persisted in local storage. Managers always
//! mutate storage first; the store is then overwritten with their result.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::background;
use crate::history::SearchHistory;
use crate::models::TodoItem;
use crate::storage::KeyValueStorage;
use crate::theme::Theme;
use crate::todo::TodoList;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Search history, newest first
    pub history: Vec<String>,
    /// To-do items in storage order
    pub todos: Vec<TodoItem>,
    pub theme: Theme,
    /// Background image source (URL or data URL)
    pub background: Option<String>,
}

impl AppState {
    /// Initial state read from storage
    pub fn load<S: KeyValueStorage>(storage: &S, prefers_light: bool) -> Self {
        Self {
            history: SearchHistory::new(storage).entries(),
            todos: TodoList::new(storage).items(),
            theme: Theme::load(storage, prefers_light),
            background: background::load(storage),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_history(store: &AppStore, entries: Vec<String>) {
    *store.history().write() = entries;
}

pub fn store_set_todos(store: &AppStore, items: Vec<TodoItem>) {
    *store.todos().write() = items;
}

pub fn store_set_theme(store: &AppStore, theme: Theme) {
    *store.theme().write() = theme;
}

pub fn store_set_background(store: &AppStore, src: String) {
    *store.background().write() = Some(src);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BACKGROUND_KEY, HISTORY_KEY, THEME_KEY, TODO_KEY};
    use crate::storage::MemoryStorage;

    #[test]
    fn test_load_empty_storage() {
        let storage = MemoryStorage::new();
        let state = AppState::load(&storage, false);

        assert!(state.history.is_empty());
        assert!(state.todos.is_empty());
        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(state.background, None);
    }

    #[test]
    fn test_load_persists_system_theme() {
        let storage = MemoryStorage::new();
        let state = AppState::load(&storage, true);

        assert_eq!(state.theme, Theme::Light);
        assert_eq!(storage.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_load_saved_state() {
        let storage = MemoryStorage::new()
            .with_entry(HISTORY_KEY, r#"["b","a"]"#)
            .with_entry(TODO_KEY, r#"[{"text":"t","completed":false}]"#)
            .with_entry(THEME_KEY, "light")
            .with_entry(BACKGROUND_KEY, "https://example.com/bg.jpg");
        let state = AppState::load(&storage, false);

        assert_eq!(state.history, vec!["b", "a"]);
        assert_eq!(state.todos, vec![TodoItem::new("t")]);
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(state.background.as_deref(), Some("https://example.com/bg.jpg"));
    }
}
