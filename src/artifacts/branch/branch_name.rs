use crate::artifacts::branch::INVALID_BRANCH_NAME_REGEX;
use crate::errors::KommitoError;
use anyhow::Context;

/// Name of the branch HEAD points at right after `init`.
pub const DEFAULT_BRANCH: &str = "main";

/// A validated branch name, usable as a single file name under `refs/heads`.
///
/// Comparison is exact byte equality; no case folding or normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: String) -> anyhow::Result<Self> {
        if name.is_empty() {
            return Err(KommitoError::EmptyBranchName.into());
        }

        if name == "." || name == ".." {
            return Err(KommitoError::InvalidBranchName {
                name,
                reason: "reserved path component",
            }
            .into());
        }

        let re = regex::Regex::new(INVALID_BRANCH_NAME_REGEX)
            .with_context(|| format!("invalid branch name regex: {INVALID_BRANCH_NAME_REGEX}"))?;

        if re.is_match(&name) {
            Err(KommitoError::InvalidBranchName {
                name,
                reason: "contains a path separator or control character",
            }
            .into())
        } else {
            Ok(Self(name))
        }
    }

    pub fn default_branch() -> Self {
        Self(DEFAULT_BRANCH.to_string())
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
