//! Error types for git-branch-cleaner.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::model::{Branch, join_names};
use std::collections::BTreeSet;
use thiserror::Error;

/// Main error type for scan and cleanup operations.
///
/// The three `Branches*` variants carry every offending branch of the failed
/// stage, never just the first one.
#[derive(Error, Debug)]
pub enum CleanerError {
    /// Git could not run, exited non-zero, or printed output we could not parse.
    #[error("Git operation failed: {0}")]
    CommandFailed(String),

    /// Cleanup was asked to delete branches that do not exist locally.
    #[error("branches not found: {}", join_names(.0))]
    BranchesNotFound(BTreeSet<Branch>),

    /// Cleanup refused: the branches still exist on the remote.
    #[error(
        "branches still exist in remote: {}\n\nDelete them from the remote first, then run cleanup again.",
        join_names(.0)
    )]
    BranchesInRemote(BTreeSet<Branch>),

    /// Deletion was issued but the branches are still listed afterwards.
    #[error("branches were not removed: {}", join_names(.0))]
    BranchesNotRemoved(BTreeSet<Branch>),

    /// Configuration could not be parsed or failed validation.
    #[error("{0}")]
    InvalidConfig(String),

    /// Caller input could not be decoded.
    #[error("{0}")]
    InvalidInput(String),
}

impl CleanerError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CleanerError::CommandFailed(_) => exit_codes::GIT_FAILURE,
            CleanerError::BranchesNotFound(_) => exit_codes::USER_ERROR,
            CleanerError::BranchesInRemote(_) => exit_codes::REMOTE_REFUSAL,
            CleanerError::BranchesNotRemoved(_) => exit_codes::GIT_FAILURE,
            CleanerError::InvalidConfig(_) => exit_codes::USER_ERROR,
            CleanerError::InvalidInput(_) => exit_codes::USER_ERROR,
        }
    }

    /// Stable tag identifying the variant, used in serialized error payloads.
    pub fn kind(&self) -> &'static str {
        match self {
            CleanerError::CommandFailed(_) => "commandFailed",
            CleanerError::BranchesNotFound(_) => "branchesNotFound",
            CleanerError::BranchesInRemote(_) => "branchesInRemote",
            CleanerError::BranchesNotRemoved(_) => "branchesNotRemoved",
            CleanerError::InvalidConfig(_) => "invalidConfig",
            CleanerError::InvalidInput(_) => "invalidInput",
        }
    }

    /// Offending branches for the cleanup stage errors, empty otherwise.
    pub fn branches(&self) -> Vec<Branch> {
        match self {
            CleanerError::BranchesNotFound(set)
            | CleanerError::BranchesInRemote(set)
            | CleanerError::BranchesNotRemoved(set) => set.iter().cloned().collect(),
            _ => Vec::new(),
        }
    }
}

/// Result type alias for cleaner operations.
pub type Result<T> = std::result::Result<T, CleanerError>;
