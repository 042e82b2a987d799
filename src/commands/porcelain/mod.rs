//! Porcelain commands (user-facing operations)
//!
//! Each command is an `impl Repository` block writing its report to the
//! repository writer.
//!
//! ## Commands
//!
//! - `init`: lay out a new repository
//! - `add`: stage a file, or every top-level file with `.`
//! - `commit`: snapshot the index
//! - `log`: show the commit HEAD leads to
//! - `status`: staged, modified and untracked files
//! - `branch`: list, create, switch and delete branches
//! - `checkout`: restore the working directory from the index
//! - `merge`: bring another branch's files in, marking conflicts
//! - `clone`: copy a local repository or import a Git remote

pub mod add;
pub mod branch;
pub mod checkout;
pub mod clone;
pub mod commit;
pub mod init;
pub mod log;
pub mod merge;
pub mod status;
