//! Search Dispatch
//!
//! Turns a submitted query into either a direct navigation (URL-like input)
//! or a new-tab search on the selected engine, recording searches in history.

use std::sync::OnceLock;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;

use crate::config::SEARCH_ENGINES;
use crate::history::SearchHistory;
use crate::models::SearchEngine;
use crate::storage::{KeyValueStorage, StorageResult};

/// Characters left as-is by `encodeURIComponent`
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

static URL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn url_pattern() -> &'static Regex {
    URL_PATTERN.get_or_init(|| {
        Regex::new(r"^(https?://)?([0-9a-z.-]+)\.([a-z.]{2,6})([/0-9A-Za-z_ .-]*)*/?$")
            .expect("URL pattern is valid")
    })
}

/// What the page should do with a submitted query
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Replace the current page
    Navigate(String),
    /// Open the engine's result page in a new browsing context
    OpenTab {
        url: String,
        /// History after recording the query
        recorded: StorageResult<Option<Vec<String>>>,
    },
}

/// Rejected submissions, shown to the user as alerts
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    EmptyQuery,
    UnknownEngine(String),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::EmptyQuery => write!(f, "请输入搜索内容！"),
            SearchError::UnknownEngine(_) => write!(f, "未知的搜索引擎配置！"),
        }
    }
}

impl std::error::Error for SearchError {}

impl SearchEngine {
    pub fn find(id: &str) -> Option<&'static SearchEngine> {
        SEARCH_ENGINES.iter().find(|engine| engine.id == id)
    }

    /// Result page URL with the query percent-encoded into `query_param`
    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}?{}={}",
            self.url,
            self.query_param,
            utf8_percent_encode(query, QUERY_COMPONENT)
        )
    }
}

/// Whether the query looks like a host name or URL rather than search text
pub fn is_url_like(query: &str) -> bool {
    url_pattern().is_match(query)
}

/// Full URL for a URL-like query, defaulting to https
pub fn navigation_target(query: &str) -> String {
    if query.starts_with("http") {
        query.to_string()
    } else {
        format!("https://{}", query)
    }
}

/// Decide what a submission does. Only engine searches touch history.
pub fn dispatch<S: KeyValueStorage>(
    history: &SearchHistory<S>,
    query: &str,
    engine_id: &str,
) -> Result<SearchOutcome, SearchError> {
    if query.trim().is_empty() {
        return Err(SearchError::EmptyQuery);
    }
    let engine = SearchEngine::find(engine_id).ok_or_else(|| SearchError::UnknownEngine(engine_id.to_string()))?;

    if is_url_like(query) {
        return Ok(SearchOutcome::Navigate(navigation_target(query)));
    }

    Ok(SearchOutcome::OpenTab {
        url: engine.search_url(query),
        recorded: history.record(query),
    })
}
