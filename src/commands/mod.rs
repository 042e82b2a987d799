//! Command implementations
//!
//! - `plumbing`: low-level access to the object store
//! - `porcelain`: the user-facing workflow (init, add, commit, branch, ...)
//!
//! Porcelain commands are built on the plumbing ones; `commit` validates its
//! message and then delegates to `write_commit`.

pub mod plumbing;
pub mod porcelain;
