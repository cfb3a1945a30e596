//! Merge detection engine.
//!
//! Decides, for every local branch, whether it already landed in the reference
//! branch. A plain ancestry check misses squash and rebase merges, so the
//! decision is made by the configured [`MergeMatcher`]s over the two diff logs,
//! after two gates:
//!
//! - branches that still exist on the remote are never reported
//! - the branch's fork point must lie inside the configured depth window of
//!   both the branch log and the reference log

mod matchers;
mod scanner;
mod window;


use crate::config::{CleanerConfig, MergeMatcher};
use crate::error::Result;
use crate::model::{Branch, Commit};

pub use scanner::scan_branches;
pub use window::fork_point_in_window;

/// History fetched for one candidate branch.
#[derive(Debug, Clone, Default)]
pub struct BranchHistory {
    /// Depth-bounded log of the candidate branch.
    pub log: Vec<Commit>,
    /// Depth-bounded log of the reference branch.
    pub ref_log: Vec<Commit>,
    /// Commits reachable from the candidate but not the reference branch.
    pub branch_diff: Vec<Commit>,
    /// Commits reachable from the reference but not the candidate branch.
    pub ref_diff: Vec<Commit>,
}

/// Outcome of evaluating one branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    /// The shared history is not visible within the depth window.
    OutsideDepthWindow,
    NotMerged,
    /// Merged; carries the first configured matcher that agreed.
    Merged(MergeMatcher),
}

impl Detection {
    pub fn is_merged(&self) -> bool {
        matches!(self, Detection::Merged(_))
    }
}

/// Applies the configured matchers to fetched branch history.
#[derive(Debug, Clone, Copy)]
pub struct MergeDetector<'a> {
    matchers: &'a [MergeMatcher],
}

impl<'a> MergeDetector<'a> {
    pub fn new(config: &'a CleanerConfig) -> Self {
        Self {
            matchers: &config.merge_matchers,
        }
    }

    pub fn detect(&self, branch: &Branch, history: &BranchHistory) -> Result<Detection> {
        if !fork_point_in_window(&history.log, &history.ref_log, &history.branch_diff) {
            return Ok(Detection::OutsideDepthWindow);
        }

        for matcher in self.matchers {
            if matcher.matches(branch, &history.ref_diff, &history.branch_diff)? {
                return Ok(Detection::Merged(*matcher));
            }
        }
        Ok(Detection::NotMerged)
    }
}
