use crate::areas::database::Database;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::blob::Blob;
use anyhow::Context;
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Names never staged, listed, deleted or copied; matched case-insensitively.
const HOUSEKEEPING_NAMES: phf::Set<&'static str> = phf::phf_set! {
    ".git",
    ".kommito",
    "application data",
    "cookies",
    "local settings",
    "my documents",
    "ntuser.dat",
    "nethood",
    "printhood",
    "recent",
    "sendto",
    "start menu",
    "templates",
    "ntuser.dat.log1",
    "ntuser.dat.log2",
};

pub fn is_housekeeping_name(name: &str) -> bool {
    HOUSEKEEPING_NAMES.contains(name.to_lowercase().as_str())
}

/// Whether the final component of a path is a housekeeping name.
pub fn is_housekeeping_path(path: &Path) -> bool {
    path.file_name()
        .map(|name| is_housekeeping_name(&name.to_string_lossy()))
        .unwrap_or(false)
}

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Top-level entries other than housekeeping names, sorted by name.
    pub fn list_entries(&self) -> anyhow::Result<Vec<PathBuf>> {
        let mut entries = std::fs::read_dir(&self.path)
            .with_context(|| format!("Unable to read directory {}", self.path.display()))?
            .filter_map(|entry| entry.ok())
            .map(|entry| PathBuf::from(entry.file_name()))
            .filter(|name| !is_housekeeping_path(name))
            .collect::<Vec<_>>();
        entries.sort();

        Ok(entries)
    }

    /// Top-level regular files other than housekeeping names, sorted by name.
    pub fn list_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        Ok(self
            .list_entries()?
            .into_iter()
            .filter(|name| self.path.join(name).is_file())
            .collect())
    }

    /// Path relative to the workspace root with `.` and `..` folded away.
    ///
    /// `./a.txt`, `a.txt` and `<root>/a.txt` all name the same index key.
    pub fn relative_path(&self, file_path: &Path) -> PathBuf {
        let file_path = file_path.strip_prefix(&self.path).unwrap_or(file_path);

        file_path
            .components()
            .fold(PathBuf::new(), |mut normalized, component| {
                match component {
                    Component::CurDir => {}
                    Component::ParentDir => {
                        normalized.pop();
                    }
                    other => normalized.push(other.as_os_str()),
                }
                normalized
            })
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let full_path = self.path.join(file_path);
        let content = std::fs::read(&full_path)
            .with_context(|| format!("Unable to read file {}", full_path.display()))?;

        Ok(Bytes::from(content))
    }

    pub fn parse_blob(&self, file_path: &Path) -> anyhow::Result<Blob> {
        Ok(Blob::new(self.read_file(file_path)?))
    }

    /// Write a file, creating missing parent directories.
    pub fn write_file(&self, file_path: &Path, content: &[u8]) -> anyhow::Result<()> {
        let full_path = self.path.join(file_path);

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Unable to create directory {}", parent.display()))?;
        }

        std::fs::write(&full_path, content)
            .with_context(|| format!("Unable to write file {}", full_path.display()))
    }

    pub fn remove_file(&self, file_path: &Path) -> anyhow::Result<()> {
        let full_path = self.path.join(file_path);

        std::fs::remove_file(&full_path)
            .with_context(|| format!("Unable to remove file {}", full_path.display()))
    }

    // Deletions go first so a restored path is never removed afterwards.
    pub fn apply_migration(&self, migration: &Migration, database: &Database) -> anyhow::Result<()> {
        for path in migration.deletions() {
            self.remove_file(path)?;
            tracing::debug!(path = %path.display(), "removed untracked file");
        }

        for (path, oid) in migration.writes() {
            let blob = database
                .load_blob(oid)
                .with_context(|| format!("Unable to restore {}", path.display()))?;
            self.write_file(path, blob.content())?;
        }

        Ok(())
    }
}

/// Copy a directory tree, skipping housekeeping names below the root.
pub fn copy_tree(source: &Path, destination: &Path) -> anyhow::Result<()> {
    let walker = WalkDir::new(source)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_housekeeping_path(entry.path()));

    for entry in walker {
        let entry = entry.with_context(|| format!("Unable to walk {}", source.display()))?;
        let relative = entry.path().strip_prefix(source)?;
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target)
                .with_context(|| format!("Unable to create directory {}", target.display()))?;
        } else if entry.file_type().is_file() {
            std::fs::copy(entry.path(), &target).with_context(|| {
                format!(
                    "Unable to copy {} to {}",
                    entry.path().display(),
                    target.display()
                )
            })?;
        }
    }

    Ok(())
}
