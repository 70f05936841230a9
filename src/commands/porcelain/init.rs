use crate::areas::repository::Repository;
use crate::errors::GrootError;
use anyhow::Context;
use std::fs;
use tracing::info;

impl Repository {
    /// Create `.groot/objects`, `HEAD` and `index`
    ///
    /// Safe to run again: existing files are left untouched and the repository
    /// is reported as already initialized.
    pub async fn init(&mut self) -> anyhow::Result<()> {
        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .groot/objects directory")?;

        let created_head = self
            .refs()
            .create_head()
            .context("Failed to create .groot/HEAD")?;

        let index = self.index();
        let index = index.lock().await;
        let created_index = index.create().context("Failed to create .groot/index")?;

        if !created_head && !created_index {
            let already = GrootError::AlreadyInitialized(self.groot_path().display().to_string());
            info!("{already}");
            writeln!(self.writer(), "{already}")?;
            return Ok(());
        }

        writeln!(
            self.writer(),
            "Initialized empty groot repository in {}",
            self.groot_path().display()
        )?;

        Ok(())
    }
}
