use crate::areas::repository::Repository;
use crate::areas::workspace::is_housekeeping_path;
use crate::artifacts::core::BatchOutcome;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::errors::KommitoError;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Path argument meaning "every eligible top-level file".
pub const STAGE_ALL: &str = ".";

impl Repository {
    pub fn add(&self, path: &str) -> anyhow::Result<BatchOutcome<PathBuf>> {
        self.ensure_initialized()?;

        if path == STAGE_ALL {
            return self.add_all();
        }

        let entry = self.stage_file(Path::new(path))?;
        writeln!(self.writer(), "Added {}", entry.name.display())?;

        let mut outcome = BatchOutcome::default();
        outcome.record_success(entry.name);

        Ok(outcome)
    }

    /// Stage every top-level regular file; a failing file is reported and skipped.
    pub fn add_all(&self) -> anyhow::Result<BatchOutcome<PathBuf>> {
        let mut outcome = BatchOutcome::default();

        for file in self.workspace().list_files()? {
            match self.stage_file(&file) {
                Ok(entry) => outcome.record_success(entry.name),
                Err(error) => {
                    tracing::warn!(path = %file.display(), error = %format!("{error:#}"), "skipping file");
                    writeln!(self.writer(), "Could not add {}: {error:#}", file.display())?;
                    outcome.record_failure(file, format!("{error:#}"));
                }
            }
        }

        if outcome.succeeded().is_empty() {
            writeln!(self.writer(), "No files to add")?;
        } else {
            writeln!(
                self.writer(),
                "Staged {} file(s)",
                outcome.succeeded().len()
            )?;
        }

        Ok(outcome)
    }

    /// Store a file as a blob and append its index line.
    pub fn stage_file(&self, path: &Path) -> anyhow::Result<IndexEntry> {
        let path = self.workspace().relative_path(path);

        if is_housekeeping_path(&path) {
            return Err(KommitoError::HousekeepingPath(path).into());
        }

        let blob = self.workspace().parse_blob(&path)?;
        let oid = self.database().store(&blob)?;

        let entry = IndexEntry::new(oid, path);
        self.index().append(&entry)?;

        Ok(entry)
    }
}
