//! Staging index
//!
//! The index is an append-only log of `(digest, path)` observations, one per
//! line. Re-staging a path appends a new line and never rewrites the old one.
//!
//! Two views are read from the same file:
//!
//! - [`Index::snapshot_hashes`]: every digest in file order, stale duplicates
//!   included (used to build commits)
//! - [`Index::path_to_hash_map`]: path keyed, later lines overwrite earlier
//!   ones (used by checkout, status and clone)

use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Index {
    /// Path to the index file (`.kommito/index`)
    path: Box<Path>,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Truncate the index to zero entries.
    pub fn reset(&self) -> anyhow::Result<()> {
        std::fs::write(&self.path, b"")
            .with_context(|| format!("Unable to create index file {}", self.path.display()))
    }

    /// Append one entry, leaving every prior line untouched.
    pub fn append(&self, entry: &IndexEntry) -> anyhow::Result<()> {
        let mut index_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Unable to open index file {}", self.path.display()))?;

        index_file
            .write_all(entry.to_line().as_bytes())
            .with_context(|| format!("Unable to update index file {}", self.path.display()))?;

        tracing::debug!(oid = %entry.oid, path = %entry.name.display(), "staged entry");

        Ok(())
    }

    /// All entries in file order.
    pub fn entries(&self) -> anyhow::Result<Vec<IndexEntry>> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Unable to read index file {}", self.path.display()))?;

        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(number, line)| {
                IndexEntry::try_parse(line).with_context(|| {
                    format!(
                        "Malformed index file {} at line {}",
                        self.path.display(),
                        number + 1
                    )
                })
            })
            .collect()
    }

    /// Entries, or nothing when the index file does not exist yet.
    pub fn entries_or_empty(&self) -> anyhow::Result<Vec<IndexEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        self.entries()
    }

    pub fn snapshot_hashes(&self) -> anyhow::Result<Vec<ObjectId>> {
        Ok(self.entries()?.into_iter().map(|entry| entry.oid).collect())
    }

    pub fn path_to_hash_map(&self) -> anyhow::Result<BTreeMap<PathBuf, ObjectId>> {
        Ok(Self::last_wins(self.entries()?))
    }

    fn last_wins(entries: Vec<IndexEntry>) -> BTreeMap<PathBuf, ObjectId> {
        entries
            .into_iter()
            .map(|entry| (entry.name, entry.oid))
            .collect()
    }

    /// Path keyed view that treats a missing index as empty.
    pub fn path_to_hash_map_or_empty(&self) -> anyhow::Result<BTreeMap<PathBuf, ObjectId>> {
        Ok(Self::last_wins(self.entries_or_empty()?))
    }
}
