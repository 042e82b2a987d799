use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::FileChangeType;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

pub type FileSet = BTreeSet<PathBuf>;

/// Three disjoint path reports produced by `status`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusReport {
    pub staged: FileSet,
    pub modified: FileSet,
    pub untracked: FileSet,
}

impl StatusReport {
    /// Sort paths into the three reports
    ///
    /// # Arguments
    ///
    /// * `staged` - path-keyed view of the index
    /// * `workspace_files` - top-level regular, non-housekeeping files
    /// * `current_digest` - digest of a path's current content, `None` when it is gone
    pub fn build(
        staged: &BTreeMap<PathBuf, ObjectId>,
        workspace_files: impl IntoIterator<Item = PathBuf>,
        mut current_digest: impl FnMut(&Path) -> Option<ObjectId>,
    ) -> Self {
        let mut report = StatusReport::default();

        for (path, oid) in staged {
            match current_digest(path) {
                Some(current) if &current != oid => {
                    report.modified.insert(path.clone());
                }
                _ => {
                    report.staged.insert(path.clone());
                }
            }
        }

        report.untracked = workspace_files
            .into_iter()
            .filter(|path| !staged.contains_key(path))
            .collect();

        report
    }

    pub fn sections(&self) -> [(FileChangeType, &FileSet); 3] {
        [
            (FileChangeType::Staged, &self.staged),
            (FileChangeType::Modified, &self.modified),
            (FileChangeType::Untracked, &self.untracked),
        ]
    }
}
