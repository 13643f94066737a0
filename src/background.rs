//! Background Image
//!
//! Persisted image source: a URL typed by the user or a data URL read from a
//! picked file.

use crate::config::BACKGROUND_KEY;
use crate::storage::{KeyValueStorage, StorageResult};

/// Alert shown when "set" is pressed with an empty URL field
pub const EMPTY_SOURCE_MESSAGE: &str = "请输入有效的图片URL或选择一个文件";

pub fn load<S: KeyValueStorage>(storage: &S) -> Option<String> {
    storage.get(BACKGROUND_KEY).filter(|src| !src.is_empty())
}

pub fn save<S: KeyValueStorage>(storage: &S, src: &str) -> StorageResult<()> {
    storage.set(BACKGROUND_KEY, src)
}

/// Trimmed URL field value, `None` when blank
pub fn normalize_source(input: &str) -> Option<String> {
    let src = input.trim();
    (!src.is_empty()).then(|| src.to_string())
}

/// `background-image` value for a source
pub fn css_value(src: &str) -> String {
    format!("url('{}')", src)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_save_and_load() {
        let storage = MemoryStorage::new();
        assert_eq!(load(&storage), None);

        save(&storage, "https://example.com/bg.jpg").unwrap();
        assert_eq!(load(&storage).as_deref(), Some("https://example.com/bg.jpg"));

        save(&storage, "data:image/png;base64,AAAA").unwrap();
        assert_eq!(load(&storage).as_deref(), Some("data:image/png;base64,AAAA"));
    }

    #[test]
    fn test_empty_saved_value_ignored() {
        let storage = MemoryStorage::new().with_entry(BACKGROUND_KEY, "");
        assert_eq!(load(&storage), None);
    }

    #[test]
    fn test_normalize_source() {
        assert_eq!(normalize_source("  https://a.b/c.png "), Some("https://a.b/c.png".to_string()));
        assert_eq!(normalize_source("   "), None);
    }

    #[test]
    fn test_css_value() {
        assert_eq!(css_value("https://a.b/c.png"), "url('https://a.b/c.png')");
    }
}
