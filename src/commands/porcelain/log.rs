use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use colored::Colorize;

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub oneline: bool,
}

impl Repository {
    /// Print history from `HEAD` back to the root commit
    ///
    /// Commits are printed as they are walked; a broken parent link stops the
    /// walk with `GrootError::CorruptHistory` after the commits before it.
    pub fn log(&self, opts: &LogOptions) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        for entry in RevList::new(self).walk()? {
            let (commit_oid, commit) = entry?;

            if opts.oneline {
                self.show_commit_oneline(&commit_oid, &commit)?;
            } else {
                self.show_commit_medium(&commit_oid, &commit)?;
                writeln!(self.writer())?;
            }
        }

        Ok(())
    }

    pub fn show_commit_medium(&self, commit_oid: &ObjectId, commit: &Commit) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{}",
            format!("commit {}", commit_oid).yellow()
        )?;
        writeln!(self.writer(), "Date:   {}", commit.iso_timestamp())?;
        writeln!(self.writer())?;
        for message_line in commit.message().lines() {
            writeln!(self.writer(), "    {}", message_line)?;
        }

        Ok(())
    }

    fn show_commit_oneline(&self, commit_oid: &ObjectId, commit: &Commit) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{} {}",
            commit_oid.to_short_oid().yellow(),
            commit.short_message()
        )?;

        Ok(())
    }
}
