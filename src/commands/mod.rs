//! Command implementations for git-branch-cleaner.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the config resolution shared by all commands.

mod cleanup;
mod scan;


use crate::cli::{Cli, Command, ConfigArgs};
use crate::config::{BranchType, CleanerConfig, MergeMatcher, MergeStrategy};
use crate::error::{CleanerError, Result};

pub use cleanup::cmd_cleanup;
pub use scan::cmd_scan;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Scan(args) => cmd_scan(&cli.project_root, args),
        Command::Cleanup(args) => cmd_cleanup(&cli.project_root, args),
    }
}

/// Build the scan config: the `--config` file (or defaults), then flag overrides.
pub fn resolve_config(args: &ConfigArgs) -> Result<CleanerConfig> {
    let mut config = match &args.config {
        Some(path) => CleanerConfig::load(path)?,
        None => CleanerConfig::default(),
    };

    if let Some(depth) = args.branch_max_depth {
        config.branch_max_depth = depth;
    }

    if let Some(name) = &args.ref_branch {
        config.ref_branch_name = name.clone();
    }

    if let Some(value) = &args.ref_branch_type {
        config.ref_branch_type = BranchType::from_str(value).ok_or_else(|| {
            CleanerError::InvalidConfig(format!(
                "invalid ref branch type '{}'. Valid values: local, remote",
                value
            ))
        })?;
    }

    if let Some(value) = &args.merge_strategy {
        config.merge_strategy = MergeStrategy::from_str(value).ok_or_else(|| {
            CleanerError::InvalidConfig(format!(
                "invalid merge strategy '{}'. Valid values: squash-and-merge",
                value
            ))
        })?;
    }

    if let Some(values) = &args.merge_matchers {
        config.merge_matchers = parse_matchers(values)?;
    }

    if let Some(remote) = &args.remote {
        config.remote = remote.clone();
    }

    config
        .protected_branches
        .extend(args.protect.iter().cloned());

    config.validate()?;
    Ok(config)
}

fn parse_matchers(values: &[String]) -> Result<Vec<MergeMatcher>> {
    let mut matchers = Vec::new();
    for value in values.iter().filter(|v| !v.trim().is_empty()) {
        let matcher = MergeMatcher::from_str(value).ok_or_else(|| {
            let valid: Vec<_> = MergeMatcher::ALL.iter().map(|m| m.name()).collect();
            CleanerError::InvalidConfig(format!(
                "invalid merge matcher '{}'. Valid values: {}",
                value.trim(),
                valid.join(", ")
            ))
        })?;
        if !matchers.contains(&matcher) {
            matchers.push(matcher);
        }
    }
    Ok(matchers)
}
