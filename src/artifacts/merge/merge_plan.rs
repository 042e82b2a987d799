use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;

/// Path to blob mapping of one side of a merge.
pub type SidePaths = BTreeMap<PathBuf, ObjectId>;

/// Recover the paths of a commit's blobs from the index lines.
pub fn side_paths(entries: &[IndexEntry], blobs: &[ObjectId]) -> SidePaths {
    let blobs = blobs.iter().collect::<HashSet<_>>();

    entries
        .iter()
        .filter(|entry| blobs.contains(&entry.oid))
        .fold(BTreeMap::new(), |mut paths, entry| {
            paths.insert(entry.name.clone(), entry.oid.clone());
            paths
        })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeAction {
    /// The path is only known on the target side
    Create { path: PathBuf, oid: ObjectId },
    /// Both sides know the path with the same blob
    Rewrite { path: PathBuf, oid: ObjectId },
    /// Both sides know the path with different blobs
    Conflict {
        path: PathBuf,
        current: ObjectId,
        target: ObjectId,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergePlan {
    actions: Vec<MergeAction>,
    unplaced: Vec<ObjectId>,
}

impl MergePlan {
    pub fn build(entries: &[IndexEntry], current: &Commit, target: &Commit) -> Self {
        let current_paths = side_paths(entries, current.blobs());
        let target_paths = side_paths(entries, target.blobs());

        let indexed = entries.iter().map(|entry| &entry.oid).collect::<HashSet<_>>();
        let mut unplaced = Vec::<ObjectId>::new();
        for oid in target.blobs() {
            if !indexed.contains(oid) && !unplaced.contains(oid) {
                unplaced.push(oid.clone());
            }
        }

        let actions = target_paths
            .into_iter()
            .map(|(path, oid)| match current_paths.get(&path) {
                None => MergeAction::Create { path, oid },
                Some(current) if current == &oid => MergeAction::Rewrite { path, oid },
                Some(current) => MergeAction::Conflict {
                    path,
                    current: current.clone(),
                    target: oid,
                },
            })
            .collect();

        MergePlan { actions, unplaced }
    }

    pub fn actions(&self) -> &[MergeAction] {
        &self.actions
    }

    /// Target blobs with no recoverable destination path.
    pub fn unplaced(&self) -> &[ObjectId] {
        &self.unplaced
    }
}

/// What a merge did to the working directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    pub conflicts: Vec<PathBuf>,
    pub written: Vec<PathBuf>,
    pub unplaced: Vec<ObjectId>,
}

impl MergeOutcome {
    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty()
    }
}
