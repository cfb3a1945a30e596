//! Branch scan: enumerate, fetch history, detect.

use super::{BranchHistory, Detection, MergeDetector};
use crate::config::CleanerConfig;
use crate::error::Result;
use crate::git::GitRunner;
use crate::git_client::GitClient;
use crate::model::Branch;
use std::collections::HashSet;

/// Find local branches that are already merged into the reference branch.
///
/// Results keep the `git branch` listing order. Any git failure aborts the
/// scan; no partial result is returned. A missing reference branch surfaces
/// as the failure of its `git log` once a candidate is evaluated.
pub fn scan_branches<R: GitRunner>(
    client: &GitClient<R>,
    config: &CleanerConfig,
) -> Result<Vec<Branch>> {
    config.validate()?;

    let local_branches = client.local_branches()?;
    let remote_branches: HashSet<Branch> = client.remote_branches()?.into_iter().collect();
    let ref_branch = config.ref_branch();

    let protected = config.protected_globset()?;
    let detector = MergeDetector::new(config);
    let mut merged = Vec::new();

    for branch in local_branches {
        if branch == ref_branch || branch.name == config.ref_branch_name {
            continue;
        }

        if remote_branches.contains(&branch) {
            log::debug!("Skipping '{}': branch still exists in remote", branch);
            continue;
        }

        if protected.is_match(&branch.name) {
            log::debug!("Skipping '{}': branch is protected", branch);
            continue;
        }

        let history = fetch_history(client, &branch, &ref_branch, config.branch_max_depth)?;

        match detector.detect(&branch, &history)? {
            Detection::Merged(matcher) => {
                log::debug!("Branch '{}' is merged ({})", branch, matcher.name());
                merged.push(branch);
            }
            Detection::OutsideDepthWindow => {
                log::debug!(
                    "Branch '{}' forks from '{}' beyond {} commits, skipping",
                    branch,
                    ref_branch,
                    config.branch_max_depth
                );
            }
            Detection::NotMerged => {
                log::debug!("Branch '{}' is not merged", branch);
            }
        }
    }

    log::info!(
        "Found {} merged branch(es) against '{}'",
        merged.len(),
        ref_branch
    );
    Ok(merged)
}

fn fetch_history<R: GitRunner>(
    client: &GitClient<R>,
    branch: &Branch,
    ref_branch: &Branch,
    max_depth: u32,
) -> Result<BranchHistory> {
    Ok(BranchHistory {
        log: client.log(branch, max_depth)?,
        ref_log: client.log(ref_branch, max_depth)?,
        branch_diff: client.log_diff(ref_branch, branch)?,
        ref_diff: client.log_diff(branch, ref_branch)?,
    })
}
