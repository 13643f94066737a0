//! Start Page App
//!
//! Root component: loads persisted state and lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands;
use crate::components::{BookmarkGrid, ClockDisplay, SearchBox, SettingsButton, SettingsModal, ThemeToggle, TodoPanel};
use crate::config::DEFAULT_ENGINE;
use crate::context::AppContext;
use crate::storage::BrowserStorage;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let storage = BrowserStorage;

    // State
    let state = AppState::load(&storage, commands::prefers_light_scheme());
    web_sys::console::log_1(&format!(
        "[APP] Loaded {} history entries, {} todos, theme={}",
        state.history.len(),
        state.todos.len(),
        state.theme.as_str()
    ).into());
    let store = Store::new(state);

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(
        storage,
        signal(String::new()),
        signal(DEFAULT_ENGINE.to_string()),
        signal(false),
        signal(false),
    ));

    // Reflect theme and background on the document
    Effect::new(move |_| {
        if let Err(e) = commands::apply_theme_class(store.theme().get()) {
            web_sys::console::warn_1(&format!("[THEME] {}", e).into());
        }
    });
    Effect::new(move |_| {
        if let Some(src) = store.background().get() {
            if let Err(e) = commands::apply_background(&src) {
                web_sys::console::warn_1(&format!("[BG] {}", e).into());
            }
        }
    });

    view! {
        <div class="top-controls">
            <ThemeToggle />
            <SettingsButton />
        </div>

        <div class="container">
            <header class="header">
                <ClockDisplay />
            </header>

            <SearchBox />

            <BookmarkGrid />

            <TodoPanel />
        </div>

        <SettingsModal />
    }
}
