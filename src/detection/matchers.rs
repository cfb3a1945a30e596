//! Merge matcher evaluation.
//!
//! Each matcher is a pure function of the branch name and the two diff logs:
//! `ref_diff` (commits only the reference branch has) and `branch_diff`
//! (commits only the candidate branch has).

use crate::config::MergeMatcher;
use crate::error::{CleanerError, Result};
use crate::model::{Branch, Commit};
use regex::Regex;
use std::collections::HashSet;

impl MergeMatcher {
    /// Whether this heuristic considers `branch` merged.
    pub fn matches(
        &self,
        branch: &Branch,
        ref_diff: &[Commit],
        branch_diff: &[Commit],
    ) -> Result<bool> {
        let matched = match self {
            MergeMatcher::DefaultMergeMessage => has_default_merge_message(branch, ref_diff)?,
            MergeMatcher::BranchNamePrefix => has_branch_name_prefix(branch, ref_diff),
            MergeMatcher::SquashedCommitsMessage => {
                has_squashed_commits_message(ref_diff, branch_diff)
            }
            MergeMatcher::IdenticalHistory => branch_diff.is_empty(),
        };
        Ok(matched)
    }
}

/// Git and hosting default merge subjects naming the branch.
fn default_merge_message_regex(branch: &Branch) -> Result<Regex> {
    let name = regex::escape(&branch.name);
    let pattern = format!(
        r"^Merge (?:branch '{name}'(?: of \S+)?(?: into \S+)?|remote-tracking branch '[^'/]+/{name}'(?: into \S+)?|pull request #\d+ from [^/\s]+/{name})$"
    );
    Regex::new(&pattern).map_err(|e| {
        CleanerError::InvalidInput(format!(
            "cannot build merge message pattern for branch '{}': {}",
            branch, e
        ))
    })
}

fn has_default_merge_message(branch: &Branch, ref_diff: &[Commit]) -> Result<bool> {
    let regex = default_merge_message_regex(branch)?;
    Ok(ref_diff.iter().any(|commit| regex.is_match(&commit.subject)))
}

fn has_branch_name_prefix(branch: &Branch, ref_diff: &[Commit]) -> bool {
    let short_name = branch.short_name();
    ref_diff.iter().any(|commit| {
        starts_with_name(&commit.subject, &branch.name)
            || (short_name != branch.name && starts_with_name(&commit.subject, short_name))
    })
}

/// `feature: Add x`, `feature Add x`, `[feature] Add x` all start with `feature`;
/// `feature-flags` does not.
fn starts_with_name(subject: &str, name: &str) -> bool {
    let unwrapped = subject
        .strip_prefix('[')
        .or_else(|| subject.strip_prefix('('))
        .unwrap_or(subject);

    unwrapped
        .strip_prefix(name)
        .and_then(|rest| rest.chars().next())
        .is_some_and(is_separator)
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ':' | ',' | ']' | ')')
}

/// Vacuously true for an empty `branch_diff`.
fn has_squashed_commits_message(ref_diff: &[Commit], branch_diff: &[Commit]) -> bool {
    let ref_messages: HashSet<&str> = ref_diff
        .iter()
        .flat_map(|commit| {
            std::iter::once(commit.subject.as_str())
                .chain(commit.body_bullets.iter().map(String::as_str))
        })
        .collect();

    branch_diff
        .iter()
        .all(|commit| ref_messages.contains(commit.subject.as_str()))
}
