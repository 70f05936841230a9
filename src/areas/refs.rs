//! HEAD reference
//!
//! `HEAD` is a plain text file holding the id of the most recent commit, or
//! nothing before the first commit. There are no branches and no symbolic
//! references: `commit` is the only writer.

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use fake::rand;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository directory (typically `.groot`)
    path: Box<Path>,
}

impl Refs {
    pub fn head_path(&self) -> PathBuf {
        self.path.join(HEAD_REF_NAME)
    }

    /// Read the current head commit id
    ///
    /// A missing or empty `HEAD` file means no commit has been made yet.
    pub fn read_head(&self) -> anyhow::Result<Option<ObjectId>> {
        let head_path = self.head_path();

        if !head_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&head_path)
            .with_context(|| format!("failed to read {}", head_path.display()))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        ObjectId::try_parse(content.to_string())
            .map(Some)
            .with_context(|| format!("{} holds an invalid commit id", head_path.display()))
    }

    /// Point `HEAD` at a new commit
    ///
    /// The file is replaced through a rename so readers see either the old or
    /// the new id, never a torn write.
    pub fn update_head(&self, oid: &ObjectId) -> anyhow::Result<()> {
        self.update_ref_file(self.head_path(), oid.as_ref())?;
        debug!(oid = %oid, "updated HEAD");

        Ok(())
    }

    /// Create an empty `HEAD` unless one already exists
    ///
    /// Returns whether the file was created.
    pub fn create_head(&self) -> anyhow::Result<bool> {
        let result = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(self.head_path());

        match result {
            Ok(_) => Ok(true),
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => Ok(false),
            Err(err) => Err(err)
                .with_context(|| format!("failed to create {}", self.head_path().display())),
        }
    }

    fn update_ref_file(&self, path: PathBuf, content: &str) -> anyhow::Result<()> {
        let temp_path = self
            .path
            .join(format!("{HEAD_REF_NAME}.tmp-{}", rand::random::<u32>()));

        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_path)
            .with_context(|| format!("failed to open ref file at {:?}", temp_path))?;
        ref_file.write_all(content.as_bytes())?;
        ref_file.sync_all()?;

        std::fs::rename(&temp_path, &path)
            .with_context(|| format!("failed to update ref file at {:?}", path))
    }
}
