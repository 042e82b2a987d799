//! Error taxonomy
//!
//! Domain failures are raised as [`KommitoError`] values inside an
//! `anyhow::Error`, so they travel through `?` together with the contextual
//! I/O errors produced by the areas. Callers that need to branch on the kind
//! of failure use [`error_kind`].

use crate::artifacts::objects::object_id::ObjectId;
use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of every failure the core can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidArgument,
    Conflict,
    Io,
    ExternalProcess,
}

#[derive(Debug, Error)]
pub enum KommitoError {
    #[error("branch '{0}' does not exist")]
    BranchNotFound(String),

    #[error("commit '{0}' not found")]
    CommitNotFound(String),

    #[error("blob {0} not found")]
    BlobNotFound(ObjectId),

    #[error("your current branch '{0}' does not have any commits yet")]
    NoCommitsYet(String),

    #[error("not a valid Kommito repository: {0}")]
    NotARepository(PathBuf),

    #[error("branch name cannot be empty")]
    EmptyBranchName,

    #[error("invalid branch name '{name}': {reason}")]
    InvalidBranchName { name: String, reason: &'static str },

    #[error("commit message cannot be empty")]
    EmptyCommitMessage,

    #[error("cannot merge branch '{0}' into itself")]
    SelfMerge(String),

    #[error("refusing to stage housekeeping path '{0}'")]
    HousekeepingPath(PathBuf),

    #[error("branch '{0}' already exists")]
    BranchAlreadyExists(String),

    #[error("cannot delete current branch '{0}'")]
    DeleteCurrentBranch(String),

    #[error("not on any branch")]
    NotOnBranch,

    #[error("malformed reference in {path}: {content:?}")]
    MalformedRef { path: PathBuf, content: String },

    #[error("cannot clone {origin} into itself or a directory inside it ({destination})")]
    CloneIntoSource { origin: PathBuf, destination: PathBuf },

    #[error("{program} exited with {status}")]
    ExternalProcess { program: String, status: String },
}

impl KommitoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            KommitoError::BranchNotFound(_)
            | KommitoError::CommitNotFound(_)
            | KommitoError::BlobNotFound(_)
            | KommitoError::NoCommitsYet(_)
            | KommitoError::NotARepository(_) => ErrorKind::NotFound,
            KommitoError::EmptyBranchName
            | KommitoError::InvalidBranchName { .. }
            | KommitoError::EmptyCommitMessage
            | KommitoError::SelfMerge(_)
            | KommitoError::HousekeepingPath(_)
            | KommitoError::CloneIntoSource { .. } => ErrorKind::InvalidArgument,
            KommitoError::BranchAlreadyExists(_) | KommitoError::DeleteCurrentBranch(_) => {
                ErrorKind::Conflict
            }
            // the current branch cannot be determined from the refs on disk
            KommitoError::NotOnBranch => ErrorKind::NotFound,
            KommitoError::MalformedRef { .. } => ErrorKind::Io,
            KommitoError::ExternalProcess { .. } => ErrorKind::ExternalProcess,
        }
    }
}

/// Classify an error chain; anything that is not a [`KommitoError`] is an I/O failure.
pub fn error_kind(error: &anyhow::Error) -> ErrorKind {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<KommitoError>())
        .map(KommitoError::kind)
        .unwrap_or(ErrorKind::Io)
}
