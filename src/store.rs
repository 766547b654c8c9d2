//! Saved-summary history store.
//!
//! An ordered sequence of [`SavedSummary`] records, newest first, serialized
//! as a single JSON array under one fixed key on every mutation. The backing
//! key-value store is abstracted behind [`StoreBackend`] (get-all /
//! replace-all), with sled as the durable backend.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::style::SummaryStyle;

/// The fixed key holding the whole serialized history.
pub const STORE_KEY: &str = "saved_summaries";

/// Title used when the URL has no trailing path segment.
pub const UNTITLED: &str = "Untitled Summary";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Db(#[from] sled::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// One saved summarization result. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedSummary {
    /// Creation time in epoch milliseconds, as a string.
    pub id: String,
    pub url: String,
    pub summary: String,
    #[serde(rename = "type")]
    pub style: SummaryStyle,
    /// Epoch milliseconds.
    pub timestamp: i64,
    pub title: String,
}

impl SavedSummary {
    /// Build a record for the current instant.
    pub fn new(url: &str, style: SummaryStyle, summary: &str) -> Self {
        let now = Utc::now().timestamp_millis();
        Self {
            id: now.to_string(),
            url: url.to_string(),
            summary: summary.to_string(),
            style,
            timestamp: now,
            title: derive_title(url),
        }
    }
}

/// The segment after the final `/`, or a placeholder when that is empty.
pub fn derive_title(url: &str) -> String {
    match url.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment.to_string(),
        _ => UNTITLED.to_string(),
    }
}

/// Whole-value access to the persisted history blob.
pub trait StoreBackend {
    fn load(&self) -> Result<Option<Vec<u8>>, StoreError>;
    fn replace(&self, value: &[u8]) -> Result<(), StoreError>;
}

/// Sled-backed store keeping the history under [`STORE_KEY`].
pub struct SledBackend {
    db: sled::Db,
}

impl SledBackend {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }
}

impl StoreBackend for SledBackend {
    fn load(&self) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.db.get(STORE_KEY)?.map(|value| value.to_vec()))
    }

    fn replace(&self, value: &[u8]) -> Result<(), StoreError> {
        self.db.insert(STORE_KEY, value)?;
        self.db.flush()?;
        Ok(())
    }
}

/// The history: newest first, persisted in full on every mutation.
pub struct SummaryStore<B: StoreBackend> {
    backend: B,
    entries: Vec<SavedSummary>,
}

impl<B: StoreBackend> SummaryStore<B> {
    /// Load the stored sequence, or start empty when nothing is stored.
    /// Malformed stored data is a hard error.
    pub fn open(backend: B) -> Result<Self, StoreError> {
        let entries = match backend.load()? {
            Some(raw) => serde_json::from_slice(&raw)?,
            None => Vec::new(),
        };
        Ok(Self { backend, entries })
    }

    /// Save a summary. Empty text is a no-op and returns `None`; otherwise
    /// the new record is prepended and the whole sequence persisted.
    pub fn add(
        &mut self,
        url: &str,
        style: SummaryStyle,
        summary: &str,
    ) -> Result<Option<&SavedSummary>, StoreError> {
        if summary.is_empty() {
            return Ok(None);
        }
        let record = SavedSummary::new(url, style, summary);
        self.entries.insert(0, record);
        self.persist()?;
        Ok(Some(&self.entries[0]))
    }

    /// Remove the entry with the given id. Silently does nothing when no
    /// entry matches.
    pub fn delete(&mut self, id: &str) -> Result<bool, StoreError> {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        if self.entries.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    pub fn find(&self, id: &str) -> Option<&SavedSummary> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn entries(&self) -> &[SavedSummary] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self) -> Result<(), StoreError> {
        let raw = serde_json::to_vec(&self.entries)?;
        self.backend.replace(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// In-memory backend for exercising the store without sled.
    struct MemoryBackend {
        value: Mutex<Option<Vec<u8>>>,
    }

    impl MemoryBackend {
        fn new() -> Self {
            Self {
                value: Mutex::new(None),
            }
        }
    }

    impl StoreBackend for MemoryBackend {
        fn load(&self) -> Result<Option<Vec<u8>>, StoreError> {
            Ok(self.value.lock().unwrap().clone())
        }

        fn replace(&self, value: &[u8]) -> Result<(), StoreError> {
            *self.value.lock().unwrap() = Some(value.to_vec());
            Ok(())
        }
    }

    fn record(id: &str, url: &str) -> SavedSummary {
        SavedSummary {
            id: id.to_string(),
            url: url.to_string(),
            summary: format!("summary of {url}"),
            style: SummaryStyle::Concise,
            timestamp: id.parse().unwrap_or(0),
            title: derive_title(url),
        }
    }

    #[test]
    fn title_is_last_path_segment() {
        assert_eq!(
            derive_title("https://example.com/posts/my-article"),
            "my-article"
        );
        assert_eq!(derive_title("https://example.com/"), UNTITLED);
        assert_eq!(derive_title(""), UNTITLED);
    }

    #[test]
    fn add_prepends_newest_first() {
        let mut store = SummaryStore::open(MemoryBackend::new()).unwrap();
        store
            .add("https://a.test/a", SummaryStyle::Concise, "A")
            .unwrap();
        store
            .add("https://a.test/b", SummaryStyle::Bullet, "B")
            .unwrap();

        let summaries: Vec<&str> = store.entries().iter().map(|e| e.summary.as_str()).collect();
        assert_eq!(summaries, ["B", "A"]);
    }

    #[test]
    fn add_empty_summary_is_a_noop() {
        let mut store = SummaryStore::open(MemoryBackend::new()).unwrap();
        let added = store.add("https://a.test/a", SummaryStyle::Eli5, "").unwrap();
        assert!(added.is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn add_then_delete_restores_the_sequence() {
        let mut store = SummaryStore::open(MemoryBackend::new()).unwrap();
        store
            .add("https://a.test/first", SummaryStyle::Concise, "one")
            .unwrap();
        let before = store.entries().to_vec();

        // Ids are millisecond timestamps; keep the two adds apart.
        std::thread::sleep(std::time::Duration::from_millis(2));

        let id = store
            .add("https://a.test/second", SummaryStyle::Facts, "two")
            .unwrap()
            .unwrap()
            .id
            .clone();
        assert!(store.delete(&id).unwrap());

        assert_eq!(store.entries(), before.as_slice());
    }

    #[test]
    fn delete_of_unknown_id_is_silent() {
        let mut store = SummaryStore::open(MemoryBackend::new()).unwrap();
        store
            .add("https://a.test/a", SummaryStyle::Concise, "A")
            .unwrap();
        assert!(!store.delete("no-such-id").unwrap());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn sequence_round_trips_through_the_backend() {
        let backend = MemoryBackend::new();
        let records = vec![record("2", "https://a.test/b"), record("1", "https://a.test/a")];
        backend
            .replace(&serde_json::to_vec(&records).unwrap())
            .unwrap();

        let store = SummaryStore::open(backend).unwrap();
        assert_eq!(store.entries(), records.as_slice());
    }

    #[test]
    fn malformed_stored_data_is_an_error() {
        let backend = MemoryBackend::new();
        backend.replace(b"not json").unwrap();
        assert!(SummaryStore::open(backend).is_err());
    }

    #[test]
    fn sled_backend_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();

        {
            let backend = SledBackend::open(dir.path()).unwrap();
            let mut store = SummaryStore::open(backend).unwrap();
            store
                .add("https://a.test/kept", SummaryStyle::Executive, "kept")
                .unwrap();
        }

        let backend = SledBackend::open(dir.path()).unwrap();
        let store = SummaryStore::open(backend).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].title, "kept");
    }

    #[test]
    fn stored_json_uses_the_original_field_names() {
        let entry = record("1700000000000", "https://a.test/post");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "concise");
        assert_eq!(json["id"], "1700000000000");
        assert!(json["timestamp"].is_i64());
    }
}
