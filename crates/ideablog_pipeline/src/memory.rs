//! Append-only interaction log.

use ideablog_error::{IdeaBlogResult, StorageError, StorageErrorKind};
use serde::Serialize;
use std::path::Path;
use tracing::instrument;

/// Ordered log of records owned by one pipeline stage.
///
/// Entries are only ever appended. Export writes `{"<key>": [entries...]}`
/// as pretty-printed JSON, replacing any existing file.
///
/// # Examples
///
/// ```
/// use ideablog_core::DraftRecord;
/// use ideablog_pipeline::SessionMemory;
///
/// let mut memory = SessionMemory::new("drafts");
/// memory.record(DraftRecord::now("<draft>a</draft>", "A"));
/// memory.record(DraftRecord::now("<draft>b</draft>", "B"));
///
/// let doc = memory.to_json().unwrap();
/// assert_eq!(doc["drafts"].as_array().unwrap().len(), 2);
/// assert_eq!(memory.history()[1].styled_draft, "B");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SessionMemory<T> {
    key: &'static str,
    entries: Vec<T>,
}

impl<T: Serialize> SessionMemory<T> {
    /// Empty log exported under `key`.
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            entries: Vec::new(),
        }
    }

    /// Append an entry.
    pub fn record(&mut self, entry: T) {
        self.entries.push(entry);
        tracing::debug!(key = self.key, len = self.entries.len(), "Recorded interaction");
    }

    /// All entries, oldest first.
    pub fn history(&self) -> &[T] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True before anything is recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Top-level key used on export.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// The export document.
    pub fn to_json(&self) -> IdeaBlogResult<serde_json::Value> {
        let entries = serde_json::to_value(&self.entries).map_err(|e| {
            StorageError::new(StorageErrorKind::Serialization(e.to_string()))
        })?;
        let mut doc = serde_json::Map::new();
        doc.insert(self.key.to_string(), entries);
        Ok(serde_json::Value::Object(doc))
    }

    /// Write the export document to `path`.
    #[instrument(skip(self), fields(key = self.key, entries = self.entries.len()))]
    pub fn export(&self, path: &Path) -> IdeaBlogResult<()> {
        write_json(path, &self.to_json()?)
    }
}

/// Pretty-print `value` to `path`, replacing existing content.
pub(crate) fn write_json<V: Serialize + ?Sized>(path: &Path, value: &V) -> IdeaBlogResult<()> {
    let body = serde_json::to_string_pretty(value)
        .map_err(|e| StorageError::new(StorageErrorKind::Serialization(e.to_string())))?;
    std::fs::write(path, body).map_err(|e| {
        tracing::error!(path = %path.display(), "Export failed: {}", e);
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;
    tracing::info!(path = %path.display(), "Exported");
    Ok(())
}
