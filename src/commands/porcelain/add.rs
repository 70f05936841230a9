use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;
use std::path::Path;
use tracing::debug;

impl Repository {
    /// Stage every path in order, writing the index once at the end
    ///
    /// The first unreadable path aborts the command before the index is written.
    pub async fn add(&mut self, paths: &[String]) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate()?;

        for path in paths {
            let entry = self.stage_entry(&mut index, Path::new(path))?;

            writeln!(self.writer(), "{}", entry.hash)?;
            writeln!(self.writer(), "Added file {}", entry.path)?;
        }

        index.write_updates()?;

        Ok(())
    }

    /// Stage a single file and persist the index, returning the blob id
    pub async fn stage_file(&self, path: &Path) -> anyhow::Result<ObjectId> {
        self.ensure_initialized()?;

        let index = self.index();
        let mut index = index.lock().await;

        index.rehydrate()?;
        let entry = self.stage_entry(&mut index, path)?;
        index.write_updates()?;

        Ok(entry.hash)
    }

    fn stage_entry(&self, index: &mut Index, path: &Path) -> anyhow::Result<IndexEntry> {
        let data = self.workspace().read_file(path)?;
        let blob_id = self.database().store(&Blob::new(data))?;

        let entry = IndexEntry::new(self.workspace().entry_name(path), blob_id);
        debug!(path = %entry.path, oid = %entry.hash, "staged file");
        index.add(entry.clone());

        Ok(entry)
    }
}
