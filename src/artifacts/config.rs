//! Repository configuration record (`.kommito/config.json`)

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const REPOSITORY_NAME: &str = "kommito";
pub const REPOSITORY_VERSION: &str = "0.1.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            name: REPOSITORY_NAME.to_string(),
            version: REPOSITORY_VERSION.to_string(),
            author: None,
        }
    }
}

impl Config {
    /// Read the config file; a missing or malformed file yields `None`.
    pub fn load(path: &Path) -> Option<Self> {
        let content = std::fs::read(path).ok()?;

        match serde_json::from_slice(&content) {
            Ok(config) => Some(config),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "ignoring malformed config");
                None
            }
        }
    }

    pub fn store(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_vec_pretty(self).context("Unable to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Unable to write config file {}", path.display()))
    }

    /// Configured author, if present and non-empty.
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref().filter(|author| !author.is_empty())
    }
}
