//! Staging index
//!
//! The index lists the files staged for the next commit as `(path, hash)`
//! entries in the order they were added. Entries are never merged: staging the
//! same path twice keeps both entries, and the commit records both.
//!
//! ## Index File Format
//!
//! A JSON array of `{"path": ..., "hash": ...}` objects, `[]` when empty.
//! The file is always replaced as a whole (temp file + rename), so a reader
//! never sees a partially written index.

use crate::artifacts::index::index_entry::IndexEntry;
use anyhow::Context;
use fake::rand;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Staging index
///
/// Holds the in-memory copy of `.groot/index`; call `rehydrate` to load it
/// and `write_updates` to persist changes.
#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.groot/index`)
    path: Box<Path>,
    /// Staged entries in insertion order
    entries: Vec<IndexEntry>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    /// Create a new empty index
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the index file (typically `.groot/index`)
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: Vec::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the index file holding an empty list, unless it already exists
    ///
    /// Returns whether the file was created.
    pub fn create(&self) -> anyhow::Result<bool> {
        let result = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(self.path());

        match result {
            Ok(mut file) => {
                file.write_all(b"[]")?;
                Ok(true)
            }
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => Ok(false),
            Err(err) => {
                Err(err).with_context(|| format!("Unable to create {}", self.path().display()))
            }
        }
    }

    /// Load the index from disk
    ///
    /// A missing or blank index file loads as an empty index.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.entries.clear();
        self.changed = false;

        if !self.path().exists() {
            return Ok(());
        }

        let content = std::fs::read_to_string(self.path())
            .with_context(|| format!("Unable to read index file {}", self.path().display()))?;

        if !content.trim().is_empty() {
            self.entries = serde_json::from_str(&content)
                .with_context(|| format!("Corrupt index file {}", self.path().display()))?;
        }

        debug!(entries = self.entries.len(), "loaded index");

        Ok(())
    }

    /// Append an entry; earlier entries for the same path are kept
    pub fn add(&mut self, entry: IndexEntry) {
        self.entries.push(entry);
        self.changed = true;
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
        self.changed = true;
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> impl Iterator<Item = IndexEntry> {
        self.entries.into_iter()
    }

    /// Persist the in-memory entries, replacing the index file atomically
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        let content = serde_json::to_vec(&self.entries).context("Unable to serialize index")?;

        let index_dir = self
            .path()
            .parent()
            .with_context(|| format!("Invalid index path {}", self.path().display()))?;
        let temp_path = index_dir.join(format!("index.tmp-{}", rand::random::<u32>()));

        let mut temp_file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_path)
            .with_context(|| format!("Unable to open {}", temp_path.display()))?;
        temp_file
            .write_all(&content)
            .with_context(|| format!("Unable to write {}", temp_path.display()))?;
        temp_file.sync_all()?;

        std::fs::rename(&temp_path, self.path())
            .with_context(|| format!("Unable to replace {}", self.path().display()))?;

        self.changed = false;
        debug!(entries = self.entries.len(), "wrote index");

        Ok(())
    }
}
