use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use tracing::info;

impl Repository {
    /// Snapshot the index into a new commit on top of `HEAD`
    ///
    /// The index is read before anything is written, so a failure there leaves
    /// `HEAD`, the index and the object store as they were. `HEAD` moves before
    /// the index is cleared.
    pub async fn commit(&mut self, message: &str) -> anyhow::Result<ObjectId> {
        self.ensure_initialized()?;

        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate()?;

        let parent = self.refs().read_head()?;
        let is_root = match parent {
            Some(_) => "",
            None => "(root-commit) ",
        };

        let files = index.entries().cloned().collect::<Vec<_>>();
        let message = message.trim().to_string();
        let commit = Commit::new(parent, files, message, Commit::timestamp_from_env()?);

        let commit_id = self.database().store(&commit)?;
        self.refs().update_head(&commit_id)?;

        index.clear();
        index.write_updates()?;

        info!(oid = %commit_id, files = commit.files().len(), "created commit");
        writeln!(
            self.writer(),
            "[{}{}] {}",
            is_root,
            commit_id.to_short_oid(),
            commit.short_message()
        )?;

        Ok(commit_id)
    }
}
