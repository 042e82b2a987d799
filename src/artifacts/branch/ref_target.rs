//! Value stored in HEAD or in a branch file
//!
//! HEAD starts out symbolic (`ref: refs/heads/main`) and holds a raw commit
//! hash after the first commit or branch switch. Branch files normally hold a
//! raw hash, but a branch created while HEAD was still symbolic holds a copy
//! of the symbolic form, so both files share this representation.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::{SYMREF_PREFIX, SYMREF_REGEX};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefTarget {
    /// Points at a branch by name.
    Symbolic(BranchName),
    /// Points at a commit directly.
    Direct(ObjectId),
}

impl RefTarget {
    /// Interpret raw reference file content.
    ///
    /// Returns `None` for content that is neither form (including empty).
    pub fn parse(raw: &str) -> anyhow::Result<Option<Self>> {
        let content = raw.trim();

        if content.is_empty() {
            return Ok(None);
        }

        let re = regex::Regex::new(SYMREF_REGEX)
            .with_context(|| format!("invalid symref regex: {SYMREF_REGEX}"))?;
        if let Some(captures) = re.captures(content) {
            return Ok(BranchName::try_parse(captures[1].to_string())
                .ok()
                .map(RefTarget::Symbolic));
        }

        Ok(ObjectId::try_parse(content.to_string())
            .ok()
            .map(RefTarget::Direct))
    }

    /// On-disk form, without trailing newline.
    pub fn to_raw(&self) -> String {
        match self {
            RefTarget::Symbolic(branch) => format!("{SYMREF_PREFIX}{branch}"),
            RefTarget::Direct(oid) => oid.to_string(),
        }
    }
}

impl std::fmt::Display for RefTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_raw())
    }
}
