//! Data structures and algorithms
//!
//! This module contains the plain types and pure algorithms the areas and
//! commands are built from:
//!
//! - `branch`: Branch names and the HEAD/branch reference value
//! - `checkout`: Restoration planning for checkout
//! - `config`: The repository configuration record
//! - `core`: Shared utilities (best-effort batch outcome)
//! - `index`: Staging index entries
//! - `merge`: Merge planning and conflict rendering
//! - `objects`: Stored object types (blob, commit)
//! - `status`: Working tree status report

pub mod branch;
pub mod checkout;
pub mod config;
pub mod core;
pub mod index;
pub mod merge;
pub mod objects;
pub mod status;
