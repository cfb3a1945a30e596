//! Cleanup validator and executor.
//!
//! Deletes a caller-supplied list of local branches in four stages:
//!
//! 1. every branch must exist locally
//! 2. no branch may still exist on the remote
//! 3. force-delete each branch in the supplied order
//! 4. no branch may still be listed afterwards
//!
//! Stages 1 and 2 run before anything is deleted. Each failing stage reports
//! every offending branch at once.


use crate::error::{CleanerError, Result};
use crate::git::GitRunner;
use crate::git_client::GitClient;
use crate::model::Branch;
use std::collections::{BTreeSet, HashSet};

/// Delete `branches`, verifying preconditions before and removal after.
///
/// The delete stage is not atomic: if one `git branch -D` fails, branches
/// deleted before it stay deleted and the error is returned without running
/// the removal check.
pub fn cleanup_branches<R: GitRunner>(client: &GitClient<R>, branches: &[Branch]) -> Result<()> {
    let requested = dedup(branches);

    let local: HashSet<Branch> = client.local_branches()?.into_iter().collect();
    let missing = offending(&requested, |b| !local.contains(b));
    if !missing.is_empty() {
        return Err(CleanerError::BranchesNotFound(missing));
    }

    let remote: HashSet<Branch> = client.remote_branches()?.into_iter().collect();
    let in_remote = offending(&requested, |b| remote.contains(b));
    if !in_remote.is_empty() {
        return Err(CleanerError::BranchesInRemote(in_remote));
    }

    for branch in &requested {
        log::info!("Deleting branch '{}'", branch);
        client.delete_branch(branch)?;
    }

    let remaining: HashSet<Branch> = client.local_branches()?.into_iter().collect();
    let not_removed = offending(&requested, |b| remaining.contains(b));
    if !not_removed.is_empty() {
        return Err(CleanerError::BranchesNotRemoved(not_removed));
    }

    log::info!("Removed {} branch(es)", requested.len());
    Ok(())
}

/// Drop repeated names, keeping the first occurrence.
fn dedup(branches: &[Branch]) -> Vec<Branch> {
    let mut seen = HashSet::new();
    branches
        .iter()
        .filter(|b| seen.insert(b.name.as_str()))
        .cloned()
        .collect()
}

fn offending(requested: &[Branch], is_offending: impl Fn(&Branch) -> bool) -> BTreeSet<Branch> {
    requested
        .iter()
        .filter(|b| is_offending(b))
        .cloned()
        .collect()
}
