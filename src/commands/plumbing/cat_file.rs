use crate::areas::repository::Repository;

impl Repository {
    /// Write an object's stored bytes unchanged
    pub fn cat_file(&mut self, object_id: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let object_id = self.database().resolve_prefix(object_id)?;
        let object_data = self.database().load(&object_id)?;

        self.writer().write_all(&object_data)?;

        Ok(())
    }
}
