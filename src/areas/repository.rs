use crate::REPOSITORY_DIR;
use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GrootError;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Handle on one repository
///
/// Owns the object database, staging index, `HEAD` and workspace of the
/// repository rooted at `path`, plus the writer every command reports to.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: Arc<Mutex<Index>>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path);

        if !path.exists() {
            std::fs::create_dir_all(path)
                .with_context(|| format!("Unable to create directory {}", path.display()))?;
        }
        let path = path.canonicalize()?;
        let groot_path = path.join(REPOSITORY_DIR);

        let index = Index::new(groot_path.join("index").into_boxed_path());
        let database = Database::new(groot_path.join("objects").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(groot_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            index: Arc::new(Mutex::new(index)),
            database,
            workspace,
            refs,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The hidden repository directory, `<root>/.groot`
    pub fn groot_path(&self) -> PathBuf {
        self.path.join(REPOSITORY_DIR)
    }

    /// Fail with `GrootError::NotInitialized` unless `init` has run here
    pub fn ensure_initialized(&self) -> anyhow::Result<()> {
        if self.database.objects_path().is_dir() {
            Ok(())
        } else {
            Err(GrootError::NotInitialized(self.path.display().to_string()).into())
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&self) -> Arc<Mutex<Index>> {
        self.index.clone()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    /// Id of the most recent commit, `None` before the first one
    pub fn head(&self) -> anyhow::Result<Option<ObjectId>> {
        self.refs.read_head()
    }

    /// Entries currently staged, as persisted on disk
    pub async fn staged_entries(&self) -> anyhow::Result<Vec<IndexEntry>> {
        let index = self.index();
        let mut index = index.lock().await;

        index.rehydrate()?;

        Ok(index.entries().cloned().collect())
    }
}
