use crate::areas::database::Database;
use crate::artifacts::diff::line_diff::{LineDiff, MyersLineDiff, Segment};
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GrootError;
use derive_new::new;

/// How a file in a commit relates to its parent commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileChange {
    /// The commit has no parent
    FirstCommit,
    /// The parent commit has no entry for this path
    NewFile,
    /// The parent has this path; segments compare its content to this commit's
    Modified { segments: Vec<Segment> },
}

/// One file entry of a commit, resolved against the object store
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FileDiff {
    pub path: String,
    pub oid: ObjectId,
    /// Content at this commit
    pub content: String,
    pub change: FileChange,
}

/// Compares the files of a commit with the same paths in its parent
///
/// Read only: nothing in the object store or the refs is touched.
#[derive(new)]
pub struct CommitDiff<'d, D: LineDiff = MyersLineDiff> {
    database: &'d Database,
    differ: D,
}

impl<'d> CommitDiff<'d> {
    pub fn with_default_differ(database: &'d Database) -> Self {
        CommitDiff::new(database, MyersLineDiff)
    }
}

impl<D: LineDiff> CommitDiff<'_, D> {
    /// Resolve every file entry of `commit`, in staging order
    ///
    /// A dangling parent link fails with `GrootError::CorruptHistory`; a missing
    /// blob fails with `GrootError::NotFound`.
    pub fn compare(&self, commit_oid: &ObjectId, commit: &Commit) -> anyhow::Result<Vec<FileDiff>> {
        let parent = match commit.parent() {
            Some(parent_oid) => Some(self.load_parent(commit_oid, parent_oid)?),
            None => None,
        };

        commit
            .files()
            .iter()
            .map(|entry| -> anyhow::Result<FileDiff> {
                let content = self.database.parse_object_as_blob(&entry.hash)?;
                let content = content.text().into_owned();

                let change = match &parent {
                    None => FileChange::FirstCommit,
                    Some(parent) => match parent.find_file(&entry.path) {
                        None => FileChange::NewFile,
                        Some(parent_entry) => {
                            let before = self.database.parse_object_as_blob(&parent_entry.hash)?;
                            FileChange::Modified {
                                segments: self.differ.diff_lines(&before.text(), &content),
                            }
                        }
                    },
                };

                Ok(FileDiff::new(
                    entry.path.clone(),
                    entry.hash.clone(),
                    content,
                    change,
                ))
            })
            .collect()
    }

    fn load_parent(&self, commit_oid: &ObjectId, parent_oid: &ObjectId) -> anyhow::Result<Commit> {
        self.database
            .parse_object_as_commit(parent_oid)
            .map_err(|err| {
                if GrootError::is_not_found(&err) {
                    GrootError::CorruptHistory {
                        missing: parent_oid.to_string(),
                        referenced_by: commit_oid.to_string(),
                    }
                    .into()
                } else {
                    err
                }
            })
    }
}
