//! Implementation of the `git-branch-cleaner cleanup` command.
//!
//! # Safety
//!
//! - Default behavior is dry-run (prints what would be deleted)
//! - Requires `--yes` to actually delete
//! - Branches that still exist on the remote are refused as a group

use super::resolve_config;
use crate::cleaner::GitBranchCleaner;
use crate::cli::CleanupArgs;
use crate::error::Result;
use crate::git::GitRunner;
use crate::model::Branch;
use std::collections::HashSet;
use std::path::Path;

/// Execute the `cleanup` command.
///
/// Without branch names the scan result is cleaned up. Config flags only
/// matter in that case.
pub fn cmd_cleanup(project_root: &Path, args: CleanupArgs) -> Result<()> {
    run_cleanup(&GitBranchCleaner::new(project_root), &args)
}

pub(super) fn run_cleanup<R: GitRunner>(
    cleaner: &GitBranchCleaner<R>,
    args: &CleanupArgs,
) -> Result<()> {
    let branches: Vec<Branch> = if args.branches.is_empty() {
        let config = resolve_config(&args.config)?;
        cleaner.scan_branches(&config)?
    } else {
        named_branches(&args.branches)
    };

    if branches.is_empty() {
        println!("No branches to clean up.");
        return Ok(());
    }

    println!("{}", render_plan(&branches));

    if !args.yes {
        println!();
        println!("Dry-run mode: no changes made.");
        println!("Run with --yes to delete these branches.");
        return Ok(());
    }

    cleaner.cleanup_branches(&branches)?;

    println!();
    println!("Deleted {} branch(es).", branches.len());
    Ok(())
}

/// Branches in the order given, repeats dropped.
fn named_branches(names: &[String]) -> Vec<Branch> {
    let mut seen = HashSet::new();
    names
        .iter()
        .filter(|name| seen.insert(name.as_str()))
        .map(|name| Branch::new(name.as_str()))
        .collect()
}

pub(super) fn render_plan(branches: &[Branch]) -> String {
    let mut lines = vec![format!("Branches to delete ({}):", branches.len())];
    lines.extend(branches.iter().map(|b| format!("  - {}", b)));
    lines.join("\n")
}
