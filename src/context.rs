//! Application Context
//!
//! Shared UI signals and the storage handle, provided via Leptos Context API.

use leptos::html;
use leptos::prelude::*;

use crate::storage::BrowserStorage;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Persistence capability handed to the managers
    pub storage: BrowserStorage,
    /// Search box text - read
    pub query: ReadSignal<String>,
    /// Search box text - write
    set_query: WriteSignal<String>,
    /// Selected engine identifier - read
    pub engine: ReadSignal<String>,
    /// Selected engine identifier - write
    set_engine: WriteSignal<String>,
    /// History dropdown visibility - read
    pub history_open: ReadSignal<bool>,
    /// History dropdown visibility - write
    set_history_open: WriteSignal<bool>,
    /// Background settings modal visibility - read
    pub settings_open: ReadSignal<bool>,
    /// Background settings modal visibility - write
    set_settings_open: WriteSignal<bool>,
    /// Search input element, refocused after an empty submit
    pub search_input: NodeRef<html::Input>,
}

impl AppContext {
    pub fn new(
        storage: BrowserStorage,
        query: (ReadSignal<String>, WriteSignal<String>),
        engine: (ReadSignal<String>, WriteSignal<String>),
        history_open: (ReadSignal<bool>, WriteSignal<bool>),
        settings_open: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            storage,
            query: query.0,
            set_query: query.1,
            engine: engine.0,
            set_engine: engine.1,
            history_open: history_open.0,
            set_history_open: history_open.1,
            settings_open: settings_open.0,
            set_settings_open: settings_open.1,
            search_input: NodeRef::new(),
        }
    }

    pub fn set_query(&self, query: String) {
        self.set_query.set(query);
    }

    pub fn set_engine(&self, engine_id: String) {
        self.set_engine.set(engine_id);
    }

    pub fn show_history(&self) {
        self.set_history_open.set(true);
    }

    pub fn hide_history(&self) {
        self.set_history_open.set(false);
    }

    pub fn open_settings(&self) {
        self.set_settings_open.set(true);
    }

    pub fn close_settings(&self) {
        self.set_settings_open.set(false);
    }

    /// Move keyboard focus back to the search box
    pub fn focus_search(&self) {
        if let Some(input) = self.search_input.get_untracked() {
            let _ = input.focus();
        }
    }
}
