//! Exit code constants for the git-branch-cleaner CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config, unknown branches)
//! - 2: Cleanup refused because a branch still exists on the remote
//! - 3: Git operation failure (command failed, branch survived deletion)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or branches that do not exist.
pub const USER_ERROR: i32 = 1;

/// Safety refusal: requested branches are still present on the remote.
pub const REMOTE_REFUSAL: i32 = 2;

/// Git operation failure: command errors, unparseable output, deletions that did not stick.
pub const GIT_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, REMOTE_REFUSAL, GIT_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
