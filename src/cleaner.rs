//! Entry point composing branch scanning and cleanup.

use crate::cleanup;
use crate::config::CleanerConfig;
use crate::detection;
use crate::error::Result;
use crate::git::{GitRunner, SystemGit};
use crate::git_client::GitClient;
use crate::model::Branch;
use std::path::Path;

/// Finds merged branches and deletes them.
///
/// Every call re-reads the repository; nothing is cached between calls.
///
/// # Examples
///
/// ```no_run
/// use git_branch_cleaner::{CleanerConfig, GitBranchCleaner};
///
/// let cleaner = GitBranchCleaner::new(".");
/// let merged = cleaner.scan_branches(&CleanerConfig::default())?;
/// cleaner.cleanup_branches(&merged)?;
/// # Ok::<(), git_branch_cleaner::CleanerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GitBranchCleaner<R = SystemGit> {
    client: GitClient<R>,
}

impl GitBranchCleaner<SystemGit> {
    /// Cleaner running the `git` executable inside `project_root`.
    pub fn new<P: AsRef<Path>>(project_root: P) -> Self {
        Self::with_runner(SystemGit::new(project_root))
    }
}

impl<R: GitRunner> GitBranchCleaner<R> {
    pub fn with_runner(runner: R) -> Self {
        Self {
            client: GitClient::new(runner),
        }
    }

    /// Local branches already merged into the configured reference branch.
    pub fn scan_branches(&self, config: &CleanerConfig) -> Result<Vec<Branch>> {
        detection::scan_branches(&self.client, config)
    }

    /// Delete `branches` after checking they exist locally and not remotely.
    pub fn cleanup_branches(&self, branches: &[Branch]) -> Result<()> {
        cleanup::cleanup_branches(&self.client, branches)
    }

    /// The branch checked out in the project root, if any.
    pub fn current_branch(&self) -> Result<Option<Branch>> {
        self.client.current_branch()
    }
}
