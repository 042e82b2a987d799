//! Staging index file format
//!
//! The index is a plain text log, one entry per line:
//!
//! ```text
//! <40-hex blob digest> <repository-relative path>\n
//! ```
//!
//! Lines are only ever appended. Staging the same path again adds a second
//! line; readers decide whether the older line still matters.

pub mod index_entry;

/// Separates the digest from the path on an index line
pub const FIELD_SEPARATOR: char = ' ';
