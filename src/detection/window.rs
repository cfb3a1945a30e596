//! Depth window check.

use crate::model::Commit;
use std::collections::HashSet;

/// Whether the branch's fork point is visible in both bounded logs.
///
/// The fork point is the newest commit of `log` that is not unique to the
/// branch. If it is missing from `log` (the branch has more unique commits than
/// the depth) or from `ref_log` (the reference moved on by more than the
/// depth), the branches only share history beyond the window.
pub fn fork_point_in_window(log: &[Commit], ref_log: &[Commit], branch_diff: &[Commit]) -> bool {
    let unique: HashSet<&str> = branch_diff.iter().map(|c| c.hash.as_str()).collect();

    let Some(fork_point) = log.iter().find(|c| !unique.contains(c.hash.as_str())) else {
        return false;
    };

    ref_log.iter().any(|c| c.hash == fork_point.hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commits(hashes: &[&str]) -> Vec<Commit> {
        hashes
            .iter()
            .map(|h| Commit {
                hash: h.to_string(),
                subject: format!("Commit {}", h),
                body_bullets: Vec::new(),
            })
            .collect()
    }

    #[test]
    fn test_fork_point_visible_in_both_logs() {
        let log = commits(&["b2", "a1"]);
        let ref_log = commits(&["c3", "a1"]);
        assert!(fork_point_in_window(&log, &ref_log, &commits(&["b2"])));
    }

    #[test]
    fn test_fork_point_beyond_ref_depth() {
        let log = commits(&["b2", "a1"]);
        let ref_log = commits(&["f6", "e5", "d4", "c3", "x2"]);
        assert!(!fork_point_in_window(&log, &ref_log, &commits(&["b2"])));
    }

    #[test]
    fn test_fork_point_beyond_branch_depth() {
        let log = commits(&["b3", "b2"]);
        let ref_log = commits(&["c3", "a1"]);
        assert!(!fork_point_in_window(&log, &ref_log, &commits(&["b3", "b2", "b1"])));
    }

    #[test]
    fn test_branch_tip_is_fork_point_when_nothing_unique() {
        let log = commits(&["a2", "a1"]);
        let ref_log = commits(&["c3", "a2", "a1"]);
        assert!(fork_point_in_window(&log, &ref_log, &[]));
    }

    #[test]
    fn test_empty_log_is_outside_window() {
        assert!(!fork_point_in_window(&[], &commits(&["a1"]), &[]));
    }
}
