//! Frontend Models
//!
//! Data structures persisted in local storage or rendered as static tables.

use serde::{Deserialize, Serialize};

/// To-do item data structure (stored as `{text, completed}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub text: String,
    pub completed: bool,
}

impl TodoItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }
}

/// Quick-launch bookmark tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bookmark {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

/// Configured search backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchEngine {
    /// Identifier used by the engine selector
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Base search URL
    pub url: &'static str,
    /// Query parameter carrying the search text
    pub query_param: &'static str,
}
