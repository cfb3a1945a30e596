//! Implementation of the `git-branch-cleaner scan` command.

use super::resolve_config;
use crate::cleaner::GitBranchCleaner;
use crate::cli::ScanArgs;
use crate::error::{CleanerError, Result};
use crate::model::Branch;
use std::path::Path;

/// Execute the `scan` command: print merged branches.
pub fn cmd_scan(project_root: &Path, args: ScanArgs) -> Result<()> {
    println!("{}", scan_output(project_root, &args)?);
    Ok(())
}

pub(super) fn scan_output(project_root: &Path, args: &ScanArgs) -> Result<String> {
    let config = resolve_config(&args.config)?;
    let branches = GitBranchCleaner::new(project_root).scan_branches(&config)?;
    render_branches(&branches, args.json)
}

/// Text output is one name per line; JSON output is `[{"name": ...}]`.
pub(super) fn render_branches(branches: &[Branch], json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(branches).map_err(|e| {
            CleanerError::InvalidInput(format!("failed to encode branch list: {}", e))
        });
    }

    if branches.is_empty() {
        return Ok("No merged branches found.".to_string());
    }

    Ok(branches
        .iter()
        .map(|b| b.name.as_str())
        .collect::<Vec<_>>()
        .join("\n"))
}
