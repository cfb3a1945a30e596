//! Git command runner for git-branch-cleaner.
//!
//! Everything that talks to git goes through the [`GitRunner`] trait so that
//! the detection and cleanup logic can be driven by a fake in tests.
//! [`SystemGit`] is the real implementation that spawns the `git` binary.

use crate::error::{CleanerError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Runs a single git command and returns its standard output.
pub trait GitRunner {
    /// Run `git <args>` and return stdout.
    ///
    /// A command that cannot be spawned or exits non-zero is reported as
    /// [`CleanerError::CommandFailed`].
    fn run(&self, args: &[&str]) -> Result<String>;
}

impl<R: GitRunner + ?Sized> GitRunner for &R {
    fn run(&self, args: &[&str]) -> Result<String> {
        (**self).run(args)
    }
}

/// Format a git invocation for logs and error messages.
pub fn command_line(args: &[&str]) -> String {
    format!("git {}", shell_words::join(args))
}

/// Git runner backed by the `git` executable, bound to a working directory.
#[derive(Debug, Clone)]
pub struct SystemGit {
    cwd: PathBuf,
}

impl SystemGit {
    pub fn new<P: AsRef<Path>>(cwd: P) -> Self {
        Self {
            cwd: cwd.as_ref().to_path_buf(),
        }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }
}

impl GitRunner for SystemGit {
    fn run(&self, args: &[&str]) -> Result<String> {
        log::debug!("Running git command: {}", command_line(args));

        let output = Command::new("git")
            .current_dir(&self.cwd)
            // Branch listings must stay parseable even with color.ui=always.
            .args(["-c", "color.ui=never"])
            .args(args)
            .output()
            .map_err(|e| {
                CleanerError::CommandFailed(format!(
                    "failed to execute {}: {} (is git installed?)",
                    command_line(args),
                    e
                ))
            })?;

        check_output(args, &output)
    }
}

fn check_output(args: &[&str], output: &Output) -> Result<String> {
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

    if output.status.success() {
        return Ok(stdout);
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let exit_code = output.status.code().unwrap_or(-1);
    let error_msg = if stderr.trim().is_empty() {
        stdout.trim().to_string()
    } else {
        stderr.trim().to_string()
    };

    Err(CleanerError::CommandFailed(format!(
        "{} failed (exit code {}): {}",
        command_line(args),
        exit_code,
        error_msg
    )))
}
