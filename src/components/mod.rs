//! UI Components
//!
//! Leptos components for each start page section.

mod bookmark_grid;
mod clock_display;
mod history_panel;
mod search_box;
mod settings_modal;
mod theme_toggle;
mod todo_panel;

pub use bookmark_grid::BookmarkGrid;
pub use clock_display::ClockDisplay;
pub use history_panel::HistoryPanel;
pub use search_box::{perform_search, SearchBox};
pub use settings_modal::{SettingsButton, SettingsModal};
pub use theme_toggle::ThemeToggle;
pub use todo_panel::TodoPanel;
