use crate::areas::repository::Repository;
use crate::artifacts::branch::ref_target::RefTarget;
use crate::artifacts::config::Config;
use crate::artifacts::objects::commit::{Author, Commit};
use crate::artifacts::objects::object_id::ObjectId;

impl Repository {
    /// Snapshot the index into a commit and point HEAD at it.
    ///
    /// Every index line contributes its hash, stale duplicates included. The
    /// message is taken as is; HEAD is overwritten with the raw commit hash
    /// and no branch file is touched.
    pub fn write_commit(&self, message: String) -> anyhow::Result<(ObjectId, Commit)> {
        let blobs = self.index().snapshot_hashes()?;

        let config = Config::load(&self.config_path());
        let author = Author::load(config.as_ref().and_then(Config::author));

        let commit = Commit::new(&author, message, blobs);
        let commit_id = self.database().store(&commit)?;
        self.refs().write_head(&RefTarget::Direct(commit_id.clone()))?;

        tracing::info!(commit = %commit_id, blobs = commit.blobs().len(), "created commit");

        Ok((commit_id, commit))
    }
}
