//! Checkout planning
//!
//! Checkout restores the working directory from the *current index*, not from
//! the files recorded by the target commit: the commit only has to exist.
//! The plan is computed up front and then applied by the workspace.

pub mod migration;
