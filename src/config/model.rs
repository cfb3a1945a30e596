//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Settings for a single scan.
///
/// Construct one per scan; the scan only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanerConfig {
    /// Number of most recent commits fetched per branch (default: 100).
    #[serde(default = "default_branch_max_depth")]
    pub branch_max_depth: u32,

    /// Name of the reference branch (default: "main").
    #[serde(default = "default_ref_branch_name")]
    pub ref_branch_name: String,

    /// Whether the reference branch is local or remote-tracking.
    #[serde(default)]
    pub ref_branch_type: BranchType,

    /// Integration style used for the repository.
    #[serde(default)]
    pub merge_strategy: MergeStrategy,

    /// Active matchers; a branch is merged if any of them matches.
    #[serde(default = "default_merge_matchers")]
    pub merge_matchers: Vec<MergeMatcher>,

    /// Remote alias used to resolve a remote reference branch (default: "origin").
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Glob patterns for local branches that scan never reports.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub protected_branches: Vec<String>,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            branch_max_depth: default_branch_max_depth(),
            ref_branch_name: default_ref_branch_name(),
            ref_branch_type: BranchType::default(),
            merge_strategy: MergeStrategy::default(),
            merge_matchers: default_merge_matchers(),
            remote: default_remote(),
            protected_branches: Vec::new(),
        }
    }
}
