use crate::areas::repository::Repository;
use crate::artifacts::diff::commit_diff::{CommitDiff, FileChange, FileDiff};
use crate::artifacts::diff::line_diff::Segment;
use crate::errors::GrootError;
use colored::Colorize;
use tracing::debug;

impl Repository {
    /// Print a commit's files and how each differs from the parent commit
    ///
    /// An unknown commit is reported as "Commit not found!" and nothing else
    /// happens. Nothing is written to the repository.
    pub fn show(&self, revision: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let commit_oid = match self.database().resolve_prefix(revision) {
            Ok(commit_oid) => commit_oid,
            Err(err) if GrootError::is_not_found(&err) || is_malformed(&err) => {
                debug!(revision, "commit not found");
                writeln!(self.writer(), "Commit not found!")?;
                return Ok(());
            }
            Err(err) => return Err(err),
        };
        let commit = self.database().parse_object_as_commit(&commit_oid)?;

        self.show_commit_medium(&commit_oid, &commit)?;
        writeln!(self.writer())?;

        let file_diffs =
            CommitDiff::with_default_differ(self.database()).compare(&commit_oid, &commit)?;
        for file_diff in &file_diffs {
            self.print_file_diff(file_diff)?;
        }

        Ok(())
    }

    fn print_file_diff(&self, file_diff: &FileDiff) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", format!("File: {}", file_diff.path).bold())?;
        write_terminated(self, &file_diff.content)?;

        match &file_diff.change {
            FileChange::FirstCommit => writeln!(self.writer(), "First commit")?,
            FileChange::NewFile => writeln!(self.writer(), "New file in this commit")?,
            FileChange::Modified { segments } => {
                writeln!(self.writer(), "{}", "Diff:".bold())?;
                for segment in segments {
                    self.print_segment(segment)?;
                }
            }
        }
        writeln!(self.writer())?;

        Ok(())
    }

    fn print_segment(&self, segment: &Segment) -> anyhow::Result<()> {
        for line in segment.value.split_inclusive('\n') {
            let line = line.strip_suffix('\n').unwrap_or(line);

            let rendered = if segment.added {
                format!("+{line}").green()
            } else if segment.removed {
                format!("-{line}").red()
            } else {
                format!(" {line}").dimmed()
            };
            writeln!(self.writer(), "{}", rendered)?;
        }

        Ok(())
    }
}

fn is_malformed(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<GrootError>(),
        Some(GrootError::InvalidObjectId(_))
    )
}

fn write_terminated(repository: &Repository, content: &str) -> anyhow::Result<()> {
    if content.is_empty() || content.ends_with('\n') {
        write!(repository.writer(), "{}", content)?;
    } else {
        writeln!(repository.writer(), "{}", content)?;
    }

    Ok(())
}
