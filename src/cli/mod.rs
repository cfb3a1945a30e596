//! CLI argument parsing for git-branch-cleaner.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Find and delete local branches that were already merged into a reference branch.
///
/// Merged branches are detected from commit history alone, so squash-merged
/// branches are found too. Branches that still exist on the remote are never
/// deleted.
#[derive(Parser, Debug)]
#[command(name = "git-branch-cleaner")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Repository to operate on.
    #[arg(long, global = true, value_name = "PATH", default_value = ".")]
    pub project_root: PathBuf,

    /// Increase log output (-v for info, -vv for debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List local branches already merged into the reference branch.
    Scan(ScanArgs),

    /// Delete merged branches.
    ///
    /// Without branch names, deletes what `scan` reports. Prints the plan
    /// unless `--yes` is given.
    Cleanup(CleanupArgs),
}

/// Scan settings shared by `scan` and `cleanup`.
///
/// Values from `--config` are loaded first; flags override them.
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigArgs {
    /// YAML config file.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of recent commits inspected per branch.
    #[arg(long, value_name = "N")]
    pub branch_max_depth: Option<u32>,

    /// Reference branch name.
    #[arg(long, value_name = "NAME")]
    pub ref_branch: Option<String>,

    /// Reference branch type (local, remote).
    #[arg(long, value_name = "TYPE")]
    pub ref_branch_type: Option<String>,

    /// Merge strategy (squash-and-merge).
    #[arg(long, value_name = "STRATEGY")]
    pub merge_strategy: Option<String>,

    /// Active matchers, comma separated.
    #[arg(long, value_name = "MATCHERS", value_delimiter = ',')]
    pub merge_matchers: Option<Vec<String>>,

    /// Remote alias used for remote checks.
    #[arg(long, value_name = "NAME")]
    pub remote: Option<String>,

    /// Glob of branches never reported (repeatable).
    #[arg(long = "protect", value_name = "GLOB")]
    pub protect: Vec<String>,
}

/// Arguments for the `scan` command.
#[derive(Args, Debug)]
pub struct ScanArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Print a JSON array instead of one name per line.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `cleanup` command.
#[derive(Args, Debug)]
pub struct CleanupArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Branches to delete. Defaults to the scan result.
    pub branches: Vec<String>,

    /// Delete without asking; otherwise only print the plan.
    #[arg(short, long)]
    pub yes: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_scan_defaults() {
        let cli = Cli::try_parse_from(["git-branch-cleaner", "scan"]).unwrap();
        assert_eq!(cli.project_root, PathBuf::from("."));
        assert_eq!(cli.verbose, 0);
        if let Command::Scan(args) = cli.command {
            assert!(!args.json);
            assert!(args.config.config.is_none());
            assert!(args.config.merge_matchers.is_none());
            assert!(args.config.protect.is_empty());
        } else {
            panic!("Expected Scan command");
        }
    }

    #[test]
    fn parse_scan_full() {
        let cli = Cli::try_parse_from([
            "git-branch-cleaner",
            "-vv",
            "scan",
            "--project-root",
            "/tmp/repo",
            "--json",
            "--branch-max-depth",
            "20",
            "--ref-branch",
            "develop",
            "--ref-branch-type",
            "remote",
            "--merge-matchers",
            "identical-history,branch-name-prefix",
            "--remote",
            "upstream",
            "--protect",
            "release/*",
            "--protect",
            "keep",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.project_root, PathBuf::from("/tmp/repo"));
        if let Command::Scan(args) = cli.command {
            assert!(args.json);
            assert_eq!(args.config.branch_max_depth, Some(20));
            assert_eq!(args.config.ref_branch.as_deref(), Some("develop"));
            assert_eq!(args.config.ref_branch_type.as_deref(), Some("remote"));
            assert_eq!(
                args.config.merge_matchers,
                Some(vec![
                    "identical-history".to_string(),
                    "branch-name-prefix".to_string()
                ])
            );
            assert_eq!(args.config.remote.as_deref(), Some("upstream"));
            assert_eq!(args.config.protect, vec!["release/*", "keep"]);
        } else {
            panic!("Expected Scan command");
        }
    }

    #[test]
    fn parse_cleanup_with_branches() {
        let cli =
            Cli::try_parse_from(["git-branch-cleaner", "cleanup", "feature", "fix/x", "--yes"])
                .unwrap();
        if let Command::Cleanup(args) = cli.command {
            assert_eq!(args.branches, vec!["feature", "fix/x"]);
            assert!(args.yes);
        } else {
            panic!("Expected Cleanup command");
        }
    }

    #[test]
    fn parse_cleanup_defaults_to_dry_run() {
        let cli = Cli::try_parse_from(["git-branch-cleaner", "cleanup"]).unwrap();
        if let Command::Cleanup(args) = cli.command {
            assert!(args.branches.is_empty());
            assert!(!args.yes);
        } else {
            panic!("Expected Cleanup command");
        }
    }

    #[test]
    fn parse_rejects_non_numeric_depth() {
        let result = Cli::try_parse_from(["git-branch-cleaner", "scan", "--branch-max-depth", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_requires_subcommand() {
        assert!(Cli::try_parse_from(["git-branch-cleaner"]).is_err());
    }
}
