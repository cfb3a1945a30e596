//! Branch listing and deletion.

use super::GitClient;
use super::parser::{LocalBranchEntry, parse_local_branches, parse_remote_branches};
use crate::error::{CleanerError, Result};
use crate::git::GitRunner;
use crate::model::Branch;

impl<R: GitRunner> GitClient<R> {
    /// `git branch` entries with their checked-out marker, in listing order.
    pub fn local_branch_entries(&self) -> Result<Vec<LocalBranchEntry>> {
        let output = self.runner.run(&["branch"])?;
        Ok(parse_local_branches(&output))
    }

    /// Local branches in listing order.
    pub fn local_branches(&self) -> Result<Vec<Branch>> {
        Ok(self
            .local_branch_entries()?
            .into_iter()
            .map(|entry| entry.branch)
            .collect())
    }

    /// Remote-tracking branches with the remote alias stripped.
    pub fn remote_branches(&self) -> Result<Vec<Branch>> {
        let output = self.runner.run(&["branch", "-r"])?;
        Ok(parse_remote_branches(&output))
    }

    /// The branch checked out in the current worktree, if HEAD is on a branch.
    pub fn current_branch(&self) -> Result<Option<Branch>> {
        Ok(self
            .local_branch_entries()?
            .into_iter()
            .find(|entry| entry.is_current)
            .map(|entry| entry.branch))
    }

    /// Force-delete a local branch (`git branch -D`).
    pub fn delete_branch(&self, branch: &Branch) -> Result<()> {
        self.runner
            .run(&["branch", "-D", &branch.name])
            .map_err(|e| {
                CleanerError::CommandFailed(format!(
                    "failed to delete branch '{}': {}",
                    branch, e
                ))
            })?;
        Ok(())
    }
}
