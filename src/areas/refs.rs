//! References (HEAD and branches)
//!
//! ## Layout
//!
//! - `.kommito/HEAD`: `ref: refs/heads/<name>` right after init, a raw commit
//!   hash after the first commit or branch switch
//! - `.kommito/refs/heads/<name>`: a verbatim copy of HEAD taken when the
//!   branch was created
//!
//! Branches are not advanced by commits. The current branch is recovered by
//! comparing the raw content of every branch file with the raw content of
//! HEAD, so all comparisons here are done on raw bytes and interpretation goes
//! through [`RefTarget`].

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::ref_target::RefTarget;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::KommitoError;
use anyhow::Context;
use derive_new::new;
use std::path::{Path, PathBuf};

/// Name of the HEAD reference file
pub const HEAD_REF_NAME: &str = "HEAD";

/// Symbolic hops followed before giving up on a reference chain
const MAX_REF_DEPTH: usize = 8;

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository metadata directory (`.kommito`)
    path: Box<Path>,
}

/// A branch file and its raw content.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Branch {
    pub name: String,
    pub raw: String,
}

impl Refs {
    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }

    fn branch_path(&self, name: &BranchName) -> PathBuf {
        self.heads_path().join(name.as_ref())
    }

    pub fn read_head_raw(&self) -> anyhow::Result<String> {
        let head_path = self.head_path();

        std::fs::read_to_string(&head_path)
            .with_context(|| format!("Unable to read HEAD at {}", head_path.display()))
    }

    pub fn read_head(&self) -> anyhow::Result<RefTarget> {
        let raw = self.read_head_raw()?;

        RefTarget::parse(&raw)?.ok_or_else(|| {
            KommitoError::MalformedRef {
                path: self.head_path().into(),
                content: raw,
            }
            .into()
        })
    }

    /// Overwrite HEAD with raw content, exactly as given.
    pub fn write_head_raw(&self, raw: &str) -> anyhow::Result<()> {
        let head_path = self.head_path();

        std::fs::write(&head_path, raw)
            .with_context(|| format!("Unable to update HEAD at {}", head_path.display()))?;
        tracing::debug!(head = raw, "updated HEAD");

        Ok(())
    }

    pub fn write_head(&self, target: &RefTarget) -> anyhow::Result<()> {
        self.write_head_raw(&target.to_raw())
    }

    /// Create a branch holding a verbatim copy of HEAD.
    pub fn create_branch(&self, name: &BranchName) -> anyhow::Result<String> {
        // names are compared exactly against the existing branch files
        if self
            .list_branches()?
            .iter()
            .any(|branch| branch.name == name.as_ref())
        {
            return Err(KommitoError::BranchAlreadyExists(name.to_string()).into());
        }

        let head = self.read_head_raw()?;
        let heads_path = self.heads_path();
        std::fs::create_dir_all(&heads_path).with_context(|| {
            format!("Unable to create branch directory {}", heads_path.display())
        })?;

        let branch_path = self.branch_path(name);
        std::fs::write(&branch_path, &head)
            .with_context(|| format!("Unable to create branch {}", branch_path.display()))?;
        tracing::debug!(branch = %name, target = %head, "created branch");

        Ok(head)
    }

    /// Point HEAD at the raw content of a branch file.
    pub fn switch_branch(&self, name: &BranchName) -> anyhow::Result<String> {
        let raw = self.branch_commit(name)?;
        self.write_head_raw(&raw)?;

        Ok(raw)
    }

    /// Branch files sorted by name; a missing heads directory yields none.
    pub fn list_branches(&self) -> anyhow::Result<Vec<Branch>> {
        let heads_path = self.heads_path();
        if !heads_path.exists() {
            return Ok(Vec::new());
        }

        let mut branches = std::fs::read_dir(&heads_path)
            .with_context(|| format!("Unable to read branches in {}", heads_path.display()))?
            .map(|entry| -> anyhow::Result<Option<Branch>> {
                let entry = entry.with_context(|| {
                    format!("Unable to read branches in {}", heads_path.display())
                })?;
                if entry.file_type()?.is_dir() {
                    return Ok(None);
                }

                let raw = std::fs::read_to_string(entry.path()).with_context(|| {
                    format!("Unable to read branch {}", entry.path().display())
                })?;

                Ok(Some(Branch::new(
                    entry.file_name().to_string_lossy().to_string(),
                    raw,
                )))
            })
            .filter_map(Result::transpose)
            .collect::<anyhow::Result<Vec<_>>>()?;

        branches.sort_by(|left, right| left.name.cmp(&right.name));

        Ok(branches)
    }

    pub fn delete_branch(&self, name: &BranchName) -> anyhow::Result<String> {
        let raw = self.branch_commit(name)?;

        if raw == self.read_head_raw()? {
            return Err(KommitoError::DeleteCurrentBranch(name.to_string()).into());
        }

        let branch_path = self.branch_path(name);
        std::fs::remove_file(&branch_path)
            .with_context(|| format!("Unable to delete branch {}", branch_path.display()))?;
        tracing::debug!(branch = %name, "deleted branch");

        Ok(raw)
    }

    /// First branch (by name) whose raw content equals HEAD.
    pub fn current_branch(&self) -> anyhow::Result<String> {
        let head = self.read_head_raw()?;

        self.list_branches()?
            .into_iter()
            .find(|branch| branch.raw == head)
            .map(|branch| branch.name)
            .ok_or_else(|| KommitoError::NotOnBranch.into())
    }

    /// Raw content of a single branch file.
    pub fn branch_commit(&self, name: &BranchName) -> anyhow::Result<String> {
        let branch_path = self.branch_path(name);
        if !branch_path.is_file() {
            return Err(KommitoError::BranchNotFound(name.to_string()).into());
        }

        std::fs::read_to_string(&branch_path)
            .with_context(|| format!("Unable to read branch {}", branch_path.display()))
    }

    pub fn branch_exists(&self, name: &str) -> bool {
        BranchName::try_parse(name.to_string())
            .map(|name| self.branch_path(&name).is_file())
            .unwrap_or(false)
    }

    /// Follow raw reference content down to a commit hash.
    ///
    /// A symbolic value is looked up in its branch file; a branch that has no
    /// file yet has no commits.
    pub fn resolve(&self, raw: &str, origin: &Path) -> anyhow::Result<ObjectId> {
        let mut raw = raw.to_string();
        let mut origin = origin.to_path_buf();

        for _ in 0..MAX_REF_DEPTH {
            match RefTarget::parse(&raw)? {
                Some(RefTarget::Direct(oid)) => return Ok(oid),
                Some(RefTarget::Symbolic(branch)) => {
                    if !self.branch_path(&branch).is_file() {
                        return Err(KommitoError::NoCommitsYet(branch.to_string()).into());
                    }
                    origin = self.branch_path(&branch);
                    raw = self.branch_commit(&branch)?;
                }
                None => {
                    return Err(KommitoError::MalformedRef {
                        path: origin,
                        content: raw,
                    }
                    .into());
                }
            }
        }

        Err(KommitoError::MalformedRef {
            path: origin,
            content: raw,
        }
        .into())
    }

    /// Commit hash HEAD currently leads to.
    pub fn resolve_head(&self) -> anyhow::Result<ObjectId> {
        self.resolve(&self.read_head_raw()?, &self.head_path())
    }
}
