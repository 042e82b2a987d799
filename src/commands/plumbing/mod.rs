//! Plumbing commands (direct object store access)
//!
//! ## Commands
//!
//! - `hash-object`: digest a file and optionally store it as a blob
//! - `cat-file`: print a stored blob or commit
//! - `write_commit`: snapshot the index without validating the message

pub mod cat_file;
pub mod hash_object;
pub mod write_commit;
