//! Commit object
//!
//! A commit is a flat snapshot: the author, a timestamp, the message and the
//! list of blob hashes read from the index. There is no parent pointer and no
//! tree; commits do not form a history graph.
//!
//! ## Format
//!
//! On disk (pretty printed JSON, two-space indent):
//! ```text
//! {
//!   "author": "<name>",
//!   "timestamp": "<rfc3339>",
//!   "message": "<message>",
//!   "blobs": ["<sha>", ...]
//! }
//! ```

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Serialize};

/// Author used when neither the environment nor the config names one.
pub const DEFAULT_AUTHOR_NAME: &str = "Kommito User";

const AUTHOR_NAME_ENV: &str = "KOMMITO_AUTHOR_NAME";
const AUTHOR_DATE_ENV: &str = "KOMMITO_AUTHOR_DATE";

/// Author name together with the moment the commit is made.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Author {
    name: String,
    timestamp: DateTime<FixedOffset>,
}

impl Author {
    /// Create a new author with the current timestamp
    pub fn new(name: String) -> Self {
        Author {
            name,
            timestamp: chrono::Local::now().fixed_offset(),
        }
    }

    pub fn new_with_timestamp(name: String, timestamp: DateTime<FixedOffset>) -> Self {
        Author { name, timestamp }
    }

    /// Resolve the commit author
    ///
    /// The name comes from `KOMMITO_AUTHOR_NAME`, then from the configured
    /// author, then falls back to [`DEFAULT_AUTHOR_NAME`]. The timestamp comes
    /// from `KOMMITO_AUTHOR_DATE` (RFC 3339) when set and valid, otherwise now.
    pub fn load(configured_name: Option<&str>) -> Self {
        let name = std::env::var(AUTHOR_NAME_ENV)
            .ok()
            .filter(|name| !name.is_empty())
            .or_else(|| {
                configured_name
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| DEFAULT_AUTHOR_NAME.to_string());

        let timestamp = std::env::var(AUTHOR_DATE_ENV)
            .ok()
            .and_then(|date| DateTime::parse_from_rfc3339(&date).ok());

        match timestamp {
            Some(timestamp) => Author::new_with_timestamp(name, timestamp),
            None => Author::new(name),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rfc3339_timestamp(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    author: String,
    timestamp: String,
    message: String,
    blobs: Vec<ObjectId>,
}

impl Commit {
    pub fn new(author: &Author, message: String, blobs: Vec<ObjectId>) -> Self {
        Commit {
            author: author.name().to_string(),
            timestamp: author.rfc3339_timestamp(),
            message,
            blobs,
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }

    /// Blob hashes in index order, duplicates included.
    pub fn blobs(&self) -> &[ObjectId] {
        &self.blobs
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let content = serde_json::to_vec_pretty(self).context("Unable to serialize commit")?;

        Ok(Bytes::from(content))
    }
}

impl Unpackable for Commit {
    fn deserialize(data: Bytes) -> anyhow::Result<Self> {
        serde_json::from_slice(&data).context("Unable to parse commit object")
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn display(&self) -> String {
        let mut lines = vec![
            format!("author {}", self.author),
            format!("timestamp {}", self.timestamp),
        ];
        lines.extend(self.blobs.iter().map(|blob| format!("blob {blob}")));
        lines.push(String::new());
        lines.push(self.message.clone());

        lines.join("\n")
    }
}
