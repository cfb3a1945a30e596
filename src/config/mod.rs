//! Configuration model for git-branch-cleaner.
//!
//! [`CleanerConfig`] holds the scan settings. It can be built in code, loaded
//! from a YAML file (unknown fields are ignored), and is validated before use.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::CleanerConfig;
pub use types::{BranchType, MergeMatcher, MergeStrategy};
