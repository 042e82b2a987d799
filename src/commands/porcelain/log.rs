use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Print the commit HEAD leads to. Commits carry no parents, so this is
    /// always a single entry.
    pub fn log(&self) -> anyhow::Result<Commit> {
        self.ensure_initialized()?;

        let commit_id = self.refs().resolve_head()?;
        let commit = self.database().load_commit(&commit_id)?;

        self.show_commit(&commit_id, &commit)?;

        Ok(commit)
    }

    fn show_commit(&self, commit_id: &ObjectId, commit: &Commit) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", format!("commit {commit_id}").yellow())?;
        writeln!(self.writer(), "Author: {}", commit.author())?;
        writeln!(self.writer(), "Date:   {}", commit.timestamp())?;
        writeln!(self.writer())?;
        for message_line in commit.message().lines() {
            writeln!(self.writer(), "    {}", message_line)?;
        }

        Ok(())
    }
}
