use crate::areas::database::Database;
use crate::areas::refs::HEAD_REF_NAME;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GrootError;
use derive_new::new;
use tracing::trace;

/// History of a repository, newest commit first
///
/// Each call to `walk` starts again from the current `HEAD`.
#[derive(Clone, new)]
pub struct RevList<'r> {
    repository: &'r Repository,
}

impl<'r> RevList<'r> {
    pub fn walk(&self) -> anyhow::Result<RevListIter<'r>> {
        let head = self.repository.head()?;

        Ok(RevListIter {
            database: self.repository.database(),
            next_commit: head.map(|oid| (oid, HEAD_REF_NAME.to_string())),
        })
    }
}

/// Lazy iterator over `(commit id, commit)` pairs
///
/// A dangling reference yields one `GrootError::CorruptHistory` item and ends
/// the walk.
#[derive(Clone)]
pub struct RevListIter<'r> {
    database: &'r Database,
    /// Next commit to load and who referenced it
    next_commit: Option<(ObjectId, String)>,
}

impl Iterator for RevListIter<'_> {
    type Item = anyhow::Result<(ObjectId, Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        let (commit_oid, referenced_by) = self.next_commit.take()?;
        trace!(oid = %commit_oid, "walking commit");

        match self.database.parse_object_as_commit(&commit_oid) {
            Ok(commit) => {
                // Move to the parent commit for the next iteration
                self.next_commit = commit
                    .parent()
                    .cloned()
                    .map(|parent| (parent, commit_oid.to_string()));
                Some(Ok((commit_oid, commit)))
            }
            Err(err) if GrootError::is_not_found(&err) => Some(Err(GrootError::CorruptHistory {
                missing: commit_oid.to_string(),
                referenced_by,
            }
            .into())),
            Err(err) => Some(Err(err)),
        }
    }
}
