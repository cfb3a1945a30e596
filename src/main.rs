//! git-branch-cleaner CLI.
//!
//! Parses arguments, sets up logging, dispatches to the command handler,
//! and maps errors to exit codes.

use git_branch_cleaner::cli::Cli;
use git_branch_cleaner::{commands, exit_codes};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// `RUST_LOG` wins over the `-v` count.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
