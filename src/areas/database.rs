//! Object database
//!
//! Flat content-addressable store: every object lives at `objects/<oid>`
//! holding its raw bytes. Objects are written once through a temp file and a
//! rename, and never rewritten or removed afterwards.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GrootError;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.to_path()).is_file()
    }

    /// Read the raw bytes stored under `object_id`
    ///
    /// Fails with `GrootError::NotFound` when no such object was ever stored.
    pub fn load(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        let object_path = self.path.join(object_id.to_path());

        if !object_path.is_file() {
            return Err(GrootError::NotFound(object_id.to_string()).into());
        }

        self.read_object(object_path)
    }

    /// Persist an object under the hash of its serialized form
    ///
    /// Storing content that is already present is a no-op returning the same id.
    pub fn store(&self, object: &impl Object) -> anyhow::Result<ObjectId> {
        let object_content = object.serialize()?;
        let object_id = ObjectId::hash_content(&object_content);
        let object_path = self.path.join(object_id.to_path());

        // write the object to disk unless it already exists
        if self.exists(&object_id) {
            trace!(oid = %object_id, "object already stored");
        } else {
            self.write_object(object_path, object_content)?;
            debug!(oid = %object_id, "stored object");
        }

        Ok(object_id)
    }

    pub fn parse_object_as_blob(&self, object_id: &ObjectId) -> anyhow::Result<Blob> {
        let object_content = self.load(object_id)?;

        Blob::deserialize(Cursor::new(object_content))
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> anyhow::Result<Commit> {
        let object_content = self.load(object_id)?;

        Commit::deserialize(Cursor::new(object_content))
            .with_context(|| format!("Object {} is not a commit", object_id))
    }

    /// Resolve a full or abbreviated object id to a stored object
    ///
    /// Fails with `InvalidObjectId` for malformed input, `NotFound` when nothing
    /// matches and `AmbiguousObjectId` when the prefix matches several objects.
    pub fn resolve_prefix(&self, prefix: &str) -> anyhow::Result<ObjectId> {
        let prefix = prefix.trim().to_ascii_lowercase();

        if !ObjectId::is_valid_prefix(&prefix) {
            return Err(GrootError::InvalidObjectId(prefix).into());
        }

        let mut matches = self.find_objects_by_prefix(&prefix)?;

        match matches.len() {
            0 => Err(GrootError::NotFound(prefix).into()),
            1 => Ok(matches.remove(0)),
            _ => {
                matches.sort();
                Err(GrootError::AmbiguousObjectId {
                    prefix,
                    candidates: matches.into_iter().map(String::from).collect(),
                }
                .into())
            }
        }
    }

    /// Find all objects whose OID starts with the given prefix.
    ///
    /// Temporary files left behind by interrupted writes never parse as an
    /// object id and are skipped.
    pub fn find_objects_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<ObjectId>> {
        if !self.path.is_dir() {
            return Ok(Vec::new());
        }

        let mut matches = Vec::new();
        for entry in std::fs::read_dir(&self.path)
            .with_context(|| format!("Unable to list objects in {}", self.path.display()))?
        {
            let file_name = entry?.file_name().to_string_lossy().to_string();

            if file_name.starts_with(prefix)
                && let Ok(oid) = ObjectId::try_parse(file_name)
            {
                matches.push(oid);
            }
        }

        Ok(matches)
    }

    fn read_object(&self, object_path: PathBuf) -> anyhow::Result<Bytes> {
        let object_content = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        Ok(object_content.into())
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.path).context(format!(
            "Unable to create object directory {}",
            self.path.display()
        ))?;
        let temp_object_path = self.path.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(&object_content).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;
        file.sync_all()?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, &object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
