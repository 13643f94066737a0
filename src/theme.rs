//! Theme Preference
//!
//! Light/dark mode persisted as a plain string.

use crate::config::THEME_KEY;
use crate::storage::{KeyValueStorage, StorageResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Toggle button label
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "☀️",
            Theme::Dark => "🌙",
        }
    }

    /// Toggle button tooltip, naming the mode a click switches to
    pub fn toggle_title(&self) -> &'static str {
        match self {
            Theme::Light => "切换到深色模式",
            Theme::Dark => "切换到浅色模式",
        }
    }

    /// Saved preference, else the system preference.
    ///
    /// A missing or unreadable preference is replaced by the resolved one, so
    /// the first visit pins the theme. A failed write only means the next
    /// load resolves it again.
    pub fn load<S: KeyValueStorage>(storage: &S, prefers_light: bool) -> Self {
        if let Some(saved) = storage.get(THEME_KEY).and_then(|saved| Theme::parse(&saved)) {
            return saved;
        }
        let resolved = if prefers_light { Theme::Light } else { Theme::Dark };
        let _ = resolved.save(storage);
        resolved
    }

    pub fn save<S: KeyValueStorage>(&self, storage: &S) -> StorageResult<()> {
        storage.set(THEME_KEY, self.as_str())
    }
}
