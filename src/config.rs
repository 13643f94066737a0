//! Start Page Configuration
//!
//! Compile-time tables and storage keys.

use crate::models::{Bookmark, SearchEngine};

// ========================
// Storage Keys
// ========================

pub const THEME_KEY: &str = "userTheme";
pub const BACKGROUND_KEY: &str = "backgroundImage";
pub const HISTORY_KEY: &str = "searchHistory";
pub const TODO_KEY: &str = "todoList";

// ========================
// Limits
// ========================

/// Maximum number of stored search history entries
pub const HISTORY_CAPACITY: usize = 50;
/// Number of entries shown in the history panel
pub const HISTORY_PANEL_SIZE: usize = 5;

// ========================
// Tables
// ========================

pub const BOOKMARKS: &[Bookmark] = &[
    Bookmark { name: "Google", url: "https://www.google.com", icon: "🌐" },
    Bookmark { name: "Gmail", url: "https://mail.google.com", icon: "📧" },
    Bookmark { name: "YouTube", url: "https://www.youtube.com", icon: "🎬" },
    Bookmark { name: "GitHub", url: "https://github.com", icon: "💻" },
    Bookmark { name: "知乎", url: "https://www.zhihu.com", icon: "📖" },
    Bookmark { name: "微博", url: "https://weibo.com", icon: "📰" },
    Bookmark { name: "Bilibili", url: "https://www.bilibili.com", icon: "📺" },
    Bookmark { name: "天气", url: "https://weather.com/zh-CN/weather/today/l/CHXX0008:1:CH", icon: "🌤️" },
];

pub const SEARCH_ENGINES: &[SearchEngine] = &[
    SearchEngine { id: "google", name: "Google", url: "https://www.google.com/search", query_param: "q" },
    SearchEngine { id: "bing", name: "Bing", url: "https://www.bing.com/search", query_param: "q" },
    SearchEngine { id: "baidu", name: "百度", url: "https://www.baidu.com/s", query_param: "wd" },
    SearchEngine { id: "duckduckgo", name: "DuckDuckGo", url: "https://duckduckgo.com/", query_param: "q" },
];

pub const DEFAULT_ENGINE: &str = "google";
