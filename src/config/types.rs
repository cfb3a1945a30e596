//! Configuration enums and defaults for git-branch-cleaner.

use serde::{Deserialize, Serialize};

/// Namespace the reference branch is resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BranchType {
    /// A local branch (`main`).
    #[default]
    Local,
    /// A remote-tracking branch (`origin/main`).
    Remote,
}

impl BranchType {
    /// Parse a branch type from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "local" => Some(Self::Local),
            "remote" => Some(Self::Remote),
            _ => None,
        }
    }
}

/// How branches are integrated into the reference branch.
///
/// Only squash-and-merge is implemented. Other strategies may later narrow
/// which matchers apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum MergeStrategy {
    #[default]
    SquashAndMerge,
}

impl MergeStrategy {
    /// Parse a merge strategy from a string (`squash_and_merge` or `squash-and-merge`).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.replace('-', "_").as_str() {
            "squash_and_merge" => Some(Self::SquashAndMerge),
            _ => None,
        }
    }
}

/// A heuristic deciding whether a branch already landed in the reference branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeMatcher {
    /// A ref-side commit uses git's default merge message for the branch.
    DefaultMergeMessage,
    /// A ref-side commit subject starts with the branch name.
    BranchNamePrefix,
    /// Every branch commit subject shows up on the ref side, as a subject or body bullet.
    SquashedCommitsMessage,
    /// The branch has no commits the reference branch lacks.
    IdenticalHistory,
}

impl MergeMatcher {
    pub const ALL: [MergeMatcher; 4] = [
        MergeMatcher::DefaultMergeMessage,
        MergeMatcher::BranchNamePrefix,
        MergeMatcher::SquashedCommitsMessage,
        MergeMatcher::IdenticalHistory,
    ];

    /// Parse a matcher from its snake_case or kebab-case name.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().replace('-', "_").as_str() {
            "default_merge_message" => Some(Self::DefaultMergeMessage),
            "branch_name_prefix" => Some(Self::BranchNamePrefix),
            "squashed_commits_message" => Some(Self::SquashedCommitsMessage),
            "identical_history" => Some(Self::IdenticalHistory),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::DefaultMergeMessage => "default_merge_message",
            Self::BranchNamePrefix => "branch_name_prefix",
            Self::SquashedCommitsMessage => "squashed_commits_message",
            Self::IdenticalHistory => "identical_history",
        }
    }
}

// Default value functions for serde
pub(crate) fn default_branch_max_depth() -> u32 {
    100
}
pub(crate) fn default_ref_branch_name() -> String {
    "main".to_string()
}
pub(crate) fn default_merge_matchers() -> Vec<MergeMatcher> {
    MergeMatcher::ALL.to_vec()
}
pub(crate) fn default_remote() -> String {
    "origin".to_string()
}
