//! Fetching repositories that live outside Kommito
//!
//! The only capability the rest of the crate needs is "bring the repository
//! at this URL into this local directory". The default implementation shells
//! out to the `git` client.

use crate::errors::KommitoError;
use anyhow::Context;
use std::path::Path;
use std::process::Command;

pub trait RemoteFetcher {
    /// Populate `destination` (which must not exist yet) with the content of `url`.
    fn fetch(&self, url: &str, destination: &Path) -> anyhow::Result<()>;
}

/// Runs `git clone <url> <destination>` and waits for it.
#[derive(Debug, Clone)]
pub struct GitCliFetcher {
    program: String,
}

impl Default for GitCliFetcher {
    fn default() -> Self {
        GitCliFetcher {
            program: "git".to_string(),
        }
    }
}

impl GitCliFetcher {
    pub fn with_program(program: impl Into<String>) -> Self {
        GitCliFetcher {
            program: program.into(),
        }
    }
}

impl RemoteFetcher for GitCliFetcher {
    fn fetch(&self, url: &str, destination: &Path) -> anyhow::Result<()> {
        tracing::info!(url, destination = %destination.display(), "cloning remote repository");

        let status = Command::new(&self.program)
            .arg("clone")
            .arg(url)
            .arg(destination)
            .status()
            .with_context(|| format!("Unable to run {}", self.program))?;

        if !status.success() {
            return Err(KommitoError::ExternalProcess {
                program: format!("{} clone", self.program),
                status: status.to_string(),
            }
            .into());
        }

        Ok(())
    }
}
