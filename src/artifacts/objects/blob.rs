//! Blob object
//!
//! Blobs hold file content only. The path a blob was staged from lives in
//! the index, never in the blob itself.

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    pub fn content(&self) -> &Bytes {
        &self.content
    }
}

impl Packable for Blob {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        // blobs are stored verbatim: no header, no compression
        Ok(self.content.clone())
    }
}

impl Unpackable for Blob {
    fn deserialize(data: Bytes) -> anyhow::Result<Self> {
        Ok(Blob::new(data))
    }
}

impl Object for Blob {
    fn object_type(&self) -> ObjectType {
        ObjectType::Blob
    }

    fn display(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}
