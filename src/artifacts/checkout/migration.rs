use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// File system actions needed to bring the working directory in line with
/// a restoration set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Migration {
    /// Untracked top-level files to remove
    deletions: BTreeSet<PathBuf>,
    /// Paths to (re)write with the content of the given blob
    writes: BTreeMap<PathBuf, ObjectId>,
}

impl Migration {
    /// Plan a restoration
    ///
    /// # Arguments
    ///
    /// * `workspace_files` - top-level regular, non-housekeeping files
    /// * `restoration_set` - path to blob mapping that must exist afterwards
    pub fn plan(
        workspace_files: impl IntoIterator<Item = PathBuf>,
        restoration_set: BTreeMap<PathBuf, ObjectId>,
    ) -> Self {
        let deletions = workspace_files
            .into_iter()
            .filter(|path| !restoration_set.contains_key(path))
            .collect();

        Migration {
            deletions,
            writes: restoration_set,
        }
    }

    pub fn deletions(&self) -> &BTreeSet<PathBuf> {
        &self.deletions
    }

    pub fn writes(&self) -> &BTreeMap<PathBuf, ObjectId> {
        &self.writes
    }
}
