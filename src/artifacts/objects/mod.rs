//! Stored object types
//!
//! The object store keeps two kinds of objects, each in its own namespace:
//!
//! - **Blob**: raw file content, stored byte for byte
//! - **Commit**: a JSON record of author, timestamp, message and blob hashes
//!
//! Both are addressed by the SHA-1 digest of their stored bytes.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
