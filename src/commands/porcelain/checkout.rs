use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::KommitoError;
use std::io::Write;

impl Repository {
    /// Restore the working directory and, for a branch target, move HEAD.
    ///
    /// `target` is looked up as a branch first and as a commit hash second.
    /// The resolved commit only has to exist: the files written come from the
    /// path keyed view of the index, and top-level files missing from it are
    /// deleted.
    pub fn checkout(&self, target: &str) -> anyhow::Result<ObjectId> {
        self.ensure_initialized()?;

        let branch = BranchName::try_parse(target.to_string())
            .ok()
            .filter(|name| self.refs().branch_exists(name.as_ref()));

        let (branch_raw, commit_id) = match &branch {
            Some(name) => {
                let raw = self.refs().branch_commit(name)?;
                let commit_id = self.refs().resolve(&raw, &self.refs().heads_path())?;
                (Some(raw), commit_id)
            }
            None => {
                let commit_id = ObjectId::try_parse(target.to_string())
                    .map_err(|_| KommitoError::CommitNotFound(target.to_string()))?;
                (None, commit_id)
            }
        };

        if !self.database().contains(ObjectType::Commit, &commit_id) {
            return Err(KommitoError::CommitNotFound(target.to_string()).into());
        }
        self.database().load_commit(&commit_id)?;

        let restoration_set = self.index().path_to_hash_map()?;
        let migration = Migration::plan(self.workspace().list_files()?, restoration_set);
        self.workspace()
            .apply_migration(&migration, self.database())?;

        if let Some(raw) = branch_raw {
            self.refs().write_head_raw(&raw)?;
        }

        tracing::info!(target, commit = %commit_id, "checked out");
        writeln!(self.writer(), "Checked out {}", target)?;

        Ok(commit_id)
    }
}
