//! Merge planning and conflict rendering
//!
//! Commits carry no paths, so the path of a blob is recovered from the index:
//! every index line is a historical `(hash, path)` observation. Each side of
//! the merge keeps the lines whose hash belongs to its commit, later lines
//! winning for the same path. Target blobs that never appear in the index have
//! no recoverable path and are reported as unplaced.

pub mod conflict;
pub mod merge_plan;
