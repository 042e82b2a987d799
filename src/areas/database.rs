//! Content-addressed object store
//!
//! Objects live in two disjoint namespaces under `.kommito/objects`:
//!
//! - `blobs/<sha>`: raw file content
//! - `commits/<sha>`: JSON commit records
//!
//! The file name is always the SHA-1 digest of the exact stored bytes. Objects
//! are written once and never deleted.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::KommitoError;
use anyhow::Context;
use bytes::Bytes;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn namespace_path(&self, object_type: ObjectType) -> PathBuf {
        self.path.join(object_type.namespace())
    }

    fn object_path(&self, object_type: ObjectType, object_id: &ObjectId) -> PathBuf {
        self.namespace_path(object_type).join(object_id.as_ref())
    }

    /// Persist an object under its digest and return that digest.
    pub fn store(&self, object: &impl Object) -> anyhow::Result<ObjectId> {
        let object_id = object.object_id()?;
        let object_path = self.object_path(object.object_type(), &object_id);

        // write the object to disk unless it already exists
        if !object_path.exists() {
            let object_dir = self.namespace_path(object.object_type());
            std::fs::create_dir_all(&object_dir).with_context(|| {
                format!("Unable to create object directory {}", object_dir.display())
            })?;

            std::fs::write(&object_path, object.serialize()?).with_context(|| {
                format!("Unable to write object file {}", object_path.display())
            })?;

            tracing::debug!(%object_id, kind = %object.object_type(), "stored object");
        }

        Ok(object_id)
    }

    pub fn contains(&self, object_type: ObjectType, object_id: &ObjectId) -> bool {
        self.object_path(object_type, object_id).is_file()
    }

    /// Raw bytes of a stored object; fails with a not-found error if absent.
    pub fn load(&self, object_type: ObjectType, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        if !self.contains(object_type, object_id) {
            return Err(match object_type {
                ObjectType::Blob => KommitoError::BlobNotFound(object_id.clone()),
                ObjectType::Commit => KommitoError::CommitNotFound(object_id.to_string()),
            }
            .into());
        }

        let object_path = self.object_path(object_type, object_id);
        let content = std::fs::read(&object_path).with_context(|| {
            format!("Unable to read object file {}", object_path.display())
        })?;

        Ok(Bytes::from(content))
    }

    pub fn load_blob(&self, object_id: &ObjectId) -> anyhow::Result<Blob> {
        Blob::deserialize(self.load(ObjectType::Blob, object_id)?)
    }

    pub fn load_commit(&self, object_id: &ObjectId) -> anyhow::Result<Commit> {
        Commit::deserialize(self.load(ObjectType::Commit, object_id)?)
            .with_context(|| format!("Unable to parse commit {object_id}"))
    }
}
