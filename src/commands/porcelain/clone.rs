use crate::areas::index::Index;
use crate::areas::remote::RemoteFetcher;
use crate::areas::repository::{METADATA_DIR, Repository};
use crate::areas::workspace::{Workspace, copy_tree};
use crate::artifacts::core::BatchOutcome;
use crate::errors::KommitoError;
use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Message of the commit recording a repository fetched from Git.
pub const REMOTE_CLONE_MESSAGE: &str = "Initial commit from Git repository";

const REMOTE_CHECKOUT_PREFIX: &str = "kommito-git-";

impl Repository {
    /// Copy another Kommito repository into this one.
    ///
    /// The metadata directory is copied as a whole, then every path known to
    /// the source index. Any failing copy aborts the clone.
    pub fn clone_local(&self, source: &Path) -> anyhow::Result<()> {
        let source_metadata = source.join(METADATA_DIR);
        if !source_metadata.is_dir() {
            return Err(KommitoError::NotARepository(source.to_path_buf()).into());
        }

        let source = source
            .canonicalize()
            .with_context(|| format!("Unable to resolve path {}", source.display()))?;
        if self.path().starts_with(&source) {
            return Err(KommitoError::CloneIntoSource {
                origin: source,
                destination: self.path().to_path_buf(),
            }
            .into());
        }

        copy_tree(&source_metadata, &self.metadata_path())
            .context("Failed to copy .kommito directory")?;

        let source_index = Index::new(source_metadata.join("index").into_boxed_path());
        for path in source_index.path_to_hash_map()?.into_keys() {
            let source_file = source.join(&path);
            let content = std::fs::read(&source_file)
                .with_context(|| format!("Failed to copy file {}", source_file.display()))?;
            self.workspace().write_file(&path, &content)?;
        }

        tracing::info!(source = %source.display(), "cloned local repository");
        writeln!(
            self.writer(),
            "Cloned {} into {}",
            source.display(),
            self.path().display()
        )?;

        Ok(())
    }

    /// Fetch a Git repository, then init, stage and commit its files here.
    ///
    /// The fetched checkout lives in a temporary directory that is removed on
    /// every exit path.
    pub fn clone_remote(
        &self,
        url: &str,
        fetcher: &dyn RemoteFetcher,
    ) -> anyhow::Result<BatchOutcome<PathBuf>> {
        let scratch = tempfile::Builder::new()
            .prefix(REMOTE_CHECKOUT_PREFIX)
            .tempdir()
            .context("Failed to create temporary directory")?;
        let checkout_path = scratch.path().join("checkout");

        fetcher.fetch(url, &checkout_path)?;

        self.init()?;
        let copied = self.copy_checkout(&checkout_path)?;
        let staged = self.add_all()?;
        self.commit(REMOTE_CLONE_MESSAGE)?;

        writeln!(
            self.writer(),
            "Cloned {} into {} ({} file(s) staged)",
            url,
            self.path().display(),
            staged.succeeded().len()
        )?;

        Ok(copied)
    }

    // Best effort: an entry that cannot be copied is reported and skipped.
    fn copy_checkout(&self, checkout_path: &Path) -> anyhow::Result<BatchOutcome<PathBuf>> {
        let checkout = Workspace::new(checkout_path.to_path_buf().into_boxed_path());
        let mut outcome = BatchOutcome::default();

        for entry in checkout.list_entries()? {
            let source = checkout_path.join(&entry);
            let destination = self.path().join(&entry);

            let copied = if source.is_dir() {
                copy_tree(&source, &destination)
            } else {
                std::fs::copy(&source, &destination)
                    .map(|_| ())
                    .with_context(|| format!("Unable to copy {}", source.display()))
            };

            match copied {
                Ok(()) => outcome.record_success(entry),
                Err(error) => {
                    tracing::warn!(path = %entry.display(), error = %format!("{error:#}"), "skipping entry");
                    writeln!(self.writer(), "Could not copy {}: {error:#}", entry.display())?;
                    outcome.record_failure(entry, format!("{error:#}"));
                }
            }
        }

        Ok(outcome)
    }
}
