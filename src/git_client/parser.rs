//! Parsers for `git branch` and `git log` output.

use crate::error::{CleanerError, Result};
use crate::model::{Branch, Commit};

/// A parsed `git branch` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalBranchEntry {
    pub branch: Branch,
    /// Checked out in the current worktree (`*` marker).
    pub is_current: bool,
}

/// Parse `git branch` output, keeping listing order.
///
/// Format: two marker columns followed by the name, e.g. `* main`, `  feature`,
/// or `+ other` for a branch checked out in another worktree. Detached HEAD
/// entries like `* (HEAD detached at 1a2b3c)` are skipped.
pub fn parse_local_branches(output: &str) -> Vec<LocalBranchEntry> {
    let mut entries = Vec::new();

    for line in output.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let (is_current, name) = if let Some(rest) = trimmed.strip_prefix("* ") {
            (true, rest.trim())
        } else if let Some(rest) = trimmed.strip_prefix("+ ") {
            (false, rest.trim())
        } else {
            (false, trimmed)
        };

        if name.starts_with('(') {
            continue;
        }

        entries.push(LocalBranchEntry {
            branch: Branch::new(name),
            is_current,
        });
    }

    entries
}

/// Parse `git branch -r` output into short branch names.
///
/// `origin/feature/x` becomes `feature/x`. Symbolic refs such as
/// `origin/HEAD -> origin/main` are skipped.
pub fn parse_remote_branches(output: &str) -> Vec<Branch> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.contains(" -> "))
        .map(|line| match line.split_once('/') {
            Some((_remote, name)) => Branch::new(name),
            None => Branch::new(line),
        })
        .collect()
}

/// Parse `git log` output produced with [`LOG_FORMAT`](super::LOG_FORMAT).
///
/// Header lines start at column 0 (`<hash> <subject>`); body lines are
/// indented. Body lines starting with a `*` or `-` marker become bullets.
pub fn parse_log(output: &str) -> Result<Vec<Commit>> {
    let mut commits: Vec<Commit> = Vec::new();

    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }

        if line.starts_with(char::is_whitespace) {
            let Some(commit) = commits.last_mut() else {
                return Err(CleanerError::CommandFailed(format!(
                    "unexpected git log output: body line before any commit: '{}'",
                    line.trim()
                )));
            };
            if let Some(bullet) = parse_bullet(line) {
                commit.body_bullets.push(bullet);
            }
            continue;
        }

        commits.push(parse_header(line)?);
    }

    Ok(commits)
}

fn parse_header(line: &str) -> Result<Commit> {
    let (hash, subject) = line.split_once(' ').unwrap_or((line, ""));

    if !hash.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CleanerError::CommandFailed(format!(
            "unexpected git log output: '{}' does not start with a commit hash",
            line
        )));
    }

    Ok(Commit {
        hash: hash.to_string(),
        subject: subject.trim().to_string(),
        body_bullets: Vec::new(),
    })
}

fn parse_bullet(line: &str) -> Option<String> {
    let trimmed = line.trim();
    let rest = trimmed
        .strip_prefix('*')
        .or_else(|| trimmed.strip_prefix('-'))?;
    let bullet = rest.trim();
    if bullet.is_empty() {
        None
    } else {
        Some(bullet.to_string())
    }
}
