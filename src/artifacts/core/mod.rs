//! Core utilities and shared types
//!
//! This module contains shared types used across the commands.

/// Result of a best-effort batch: every item either succeeded or failed with
/// a reason, and one failing item never aborts the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome<T> {
    succeeded: Vec<T>,
    failed: Vec<(T, String)>,
}

impl<T> Default for BatchOutcome<T> {
    fn default() -> Self {
        BatchOutcome {
            succeeded: Vec::new(),
            failed: Vec::new(),
        }
    }
}

impl<T> BatchOutcome<T> {
    pub fn record_success(&mut self, item: T) {
        self.succeeded.push(item);
    }

    pub fn record_failure(&mut self, item: T, reason: impl std::fmt::Display) {
        self.failed.push((item, reason.to_string()));
    }

    pub fn succeeded(&self) -> &[T] {
        &self.succeeded
    }

    pub fn failed(&self) -> &[(T, String)] {
        &self.failed
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}
