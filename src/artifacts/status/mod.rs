//! Working tree status
//!
//! Status compares the index's path-keyed view with the working directory
//! and sorts every path into exactly one of three reports:
//!
//! - staged: tracked and unchanged since it was staged (or no longer on disk)
//! - modified: tracked, but the content on disk hashes differently
//! - untracked: a top-level file the index has never seen

pub mod file_change;
pub mod status_info;
