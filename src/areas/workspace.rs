use crate::errors::GrootError;
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Read a file's raw bytes
    ///
    /// Relative paths are taken from the workspace root. Any I/O failure is
    /// reported as `GrootError::ReadError`.
    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let full_path = self.path.join(file_path);

        if full_path.is_dir() {
            return Err(GrootError::ReadError {
                path: file_path.display().to_string(),
                reason: "is a directory".to_string(),
            }
            .into());
        }

        let content = std::fs::read(&full_path).map_err(|err| GrootError::ReadError {
            path: file_path.display().to_string(),
            reason: err.to_string(),
        })?;

        Ok(content.into())
    }

    /// Name a file is staged under
    ///
    /// Files inside the workspace are named relative to its root with `/`
    /// separators, so `./a.txt`, `a.txt` and an absolute path to it agree.
    /// Anything else keeps the name it was given.
    pub fn entry_name(&self, file_path: &Path) -> String {
        let full_path = self.path.join(file_path);

        let relative = match (self.path.canonicalize(), full_path.canonicalize()) {
            (Ok(root), Ok(file)) => file.strip_prefix(&root).map(PathBuf::from).ok(),
            _ => None,
        };

        match relative {
            Some(relative) => relative
                .components()
                .filter_map(|component| match component {
                    Component::Normal(name) => Some(name.to_string_lossy().to_string()),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join("/"),
            None => file_path.display().to_string(),
        }
    }
}
