use crate::artifacts::index::FIELD_SEPARATOR;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use std::path::PathBuf;

/// One staged `(digest, path)` observation.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct IndexEntry {
    pub oid: ObjectId,
    pub name: PathBuf,
}

impl IndexEntry {
    /// Parse a single index line (without its newline).
    ///
    /// The first separator splits digest from path, so paths may contain spaces.
    pub fn try_parse(line: &str) -> anyhow::Result<Self> {
        let (oid, name) = line
            .split_once(FIELD_SEPARATOR)
            .ok_or_else(|| anyhow::anyhow!("missing path in index line: {line:?}"))?;

        if name.is_empty() {
            anyhow::bail!("missing path in index line: {line:?}");
        }

        Ok(IndexEntry::new(
            ObjectId::try_parse(oid.to_string())?,
            PathBuf::from(name),
        ))
    }

    /// Serialized line, newline included.
    pub fn to_line(&self) -> String {
        format!("{}{}{}\n", self.oid, FIELD_SEPARATOR, self.name.display())
    }
}
