use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::KommitoError;
use std::io::Write;

impl Repository {
    pub fn commit(&self, message: &str) -> anyhow::Result<ObjectId> {
        self.ensure_initialized()?;

        if message.trim().is_empty() {
            return Err(KommitoError::EmptyCommitMessage.into());
        }

        let (commit_id, commit) = self.write_commit(message.to_string())?;

        writeln!(
            self.writer(),
            "[{}] {}",
            commit_id.to_short_oid(),
            commit.short_message()
        )?;

        Ok(commit_id)
    }
}
