use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::ref_target::RefTarget;
use crate::artifacts::config::Config;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    /// Lay out `.kommito`; running it again resets HEAD and the index.
    pub fn init(&self) -> anyhow::Result<()> {
        for object_type in [ObjectType::Blob, ObjectType::Commit] {
            fs::create_dir_all(self.database().namespace_path(object_type)).with_context(|| {
                format!("Failed to create .kommito/objects/{}", object_type.namespace())
            })?;
        }

        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create .kommito/refs/heads directory")?;

        self.refs()
            .write_head(&RefTarget::Symbolic(BranchName::default_branch()))
            .context("Failed to create initial HEAD reference")?;

        self.index()
            .reset()
            .context("Failed to create .kommito/index file")?;

        Config::default()
            .store(&self.config_path())
            .context("Failed to create .kommito/config.json")?;

        tracing::info!(path = %self.path().display(), "initialized repository");
        writeln!(
            self.writer(),
            "Initialized empty Kommito repository in {}",
            self.path().display()
        )?;

        Ok(())
    }
}
