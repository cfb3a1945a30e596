//! Typed git queries used by the scanner and the cleanup executor.
//!
//! [`GitClient`] wraps a [`GitRunner`] and turns raw git output into
//! [`Branch`](crate::model::Branch) and [`Commit`](crate::model::Commit) values:
//!
//! - Listing local and remote branches and the checked-out branch
//! - Fetching a depth-bounded log for one branch
//! - Fetching the commits one branch has that another lacks
//! - Force-deleting local branches
//!
//! Malformed output is reported as `CleanerError::CommandFailed`.

mod branches;
mod history;
mod parser;

use crate::git::GitRunner;

pub use parser::{LocalBranchEntry, parse_local_branches, parse_log, parse_remote_branches};

/// `git log` format: abbreviated hash and subject on the first line, then the
/// body indented by two spaces so it cannot be mistaken for the next header.
pub const LOG_FORMAT: &str = "--format=%h %s%n%w(0,2,2)%b";

/// Git queries over an injected runner.
#[derive(Debug, Clone)]
pub struct GitClient<R> {
    runner: R,
}

impl<R: GitRunner> GitClient<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }
}
