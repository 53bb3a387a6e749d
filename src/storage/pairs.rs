//! Ordered `key|value` stores loaded from pipe-delimited text files

use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{MsgError, MsgResult};

/// Ordered mapping of display key to associated text.
///
/// Keeps insertion order. A repeated key is ignored, so the first occurrence
/// keeps both its position and its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValueStore {
    entries: Vec<(String, String)>,
}

impl KeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair unless the key is already present. Returns whether it was inserted.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if self.contains_key(&key) {
            return false;
        }
        self.entries.push((key, value.into()));
        true
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Pair at a zero-based position
    pub fn entry_at(&self, index: usize) -> Option<(&str, &str)> {
        self.entries
            .get(index)
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parse pipe-delimited text.
    ///
    /// `\n`, `\r\n` and a lone `\r` all end a line. Each line is trimmed,
    /// then split on its first `|`. Lines without a `|` are skipped.
    pub fn parse(text: &str) -> Self {
        let mut store = Self::new();
        for line in text.split(['\n', '\r']) {
            if let Some((key, value)) = line.trim().split_once('|') {
                store.insert(key, value);
            }
        }
        store
    }
}

/// Load a `key|value` file. A missing file yields an empty store.
pub fn load_pairs(path: &Path) -> MsgResult<KeyValueStore> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "pairs file missing, using empty store");
            return Ok(KeyValueStore::new());
        }
        Err(e) => return Err(MsgError::io(format!("reading {}", path.display()), e)),
    };

    let store = KeyValueStore::parse(&text);
    debug!(path = %path.display(), entries = store.len(), "loaded pairs");
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_wins() {
        let store = KeyValueStore::parse("a|1\nb|2\na|3");
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("a"), Some("1"));
        assert_eq!(store.entry_at(1), Some(("b", "2")));
    }

    #[test]
    fn test_splits_on_first_pipe_only() {
        let store = KeyValueStore::parse("  key|a|b  \r\n");
        assert_eq!(store.get("key"), Some("a|b"));
    }

    #[test]
    fn test_lone_carriage_return_ends_a_line() {
        let store = KeyValueStore::parse("a|1\rb|2\r\nc|3");
        let keys: Vec<&str> = store.keys().collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(store.get("a"), Some("1"));
    }
}
