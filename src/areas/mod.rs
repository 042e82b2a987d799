//! Stateful on-disk components of a repository
//!
//! - `database`: content-addressed blob and commit store
//! - `index`: append-only staging log
//! - `refs`: HEAD and branch files
//! - `remote`: fetching repositories from an external client
//! - `repository`: ties the areas together with an output writer
//! - `workspace`: the working directory

pub mod database;
pub mod index;
pub mod refs;
pub mod remote;
pub mod repository;
pub mod workspace;
