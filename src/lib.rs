//! git-branch-cleaner: find local git branches that already landed in a
//! reference branch and delete them safely.
//!
//! The library is used three ways: from Rust through [`GitBranchCleaner`],
//! from the `git-branch-cleaner` binary, and from foreign hosts through the
//! C ABI in [`ffi`].

pub mod cleaner;
pub mod cleanup;
pub mod cli;
pub mod commands;
pub mod config;
pub mod detection;
pub mod error;
pub mod exit_codes;
pub mod ffi;
pub mod git;
pub mod git_client;
pub mod model;

#[cfg(test)]
mod test_support;

pub use cleaner::GitBranchCleaner;
pub use config::{BranchType, CleanerConfig, MergeMatcher, MergeStrategy};
pub use error::{CleanerError, Result};
pub use git::{GitRunner, SystemGit};
pub use model::{Branch, Commit};
