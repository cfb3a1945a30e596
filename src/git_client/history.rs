//! Commit history queries.

use super::parser::parse_log;
use super::{GitClient, LOG_FORMAT};
use crate::error::Result;
use crate::git::GitRunner;
use crate::model::{Branch, Commit};

impl<R: GitRunner> GitClient<R> {
    /// Up to `max_depth` most recent commits reachable from `branch`, newest first.
    pub fn log(&self, branch: &Branch, max_depth: u32) -> Result<Vec<Commit>> {
        let depth = max_depth.to_string();
        let output = self
            .runner
            .run(&["log", LOG_FORMAT, &branch.name, "-n", &depth, "--"])?;
        parse_log(&output)
    }

    /// Commits reachable from `to` but not from `from` (`git log from..to`).
    ///
    /// Not depth bounded.
    pub fn log_diff(&self, from: &Branch, to: &Branch) -> Result<Vec<Commit>> {
        let range = format!("{}..{}", from.name, to.name);
        let output = self.runner.run(&["log", LOG_FORMAT, &range])?;
        parse_log(&output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CleanerError;
    use crate::git::SystemGit;
    use crate::test_support::{FakeGitRunner, commit_file, create_test_repo, git};

    #[test]
    fn test_log_passes_depth_and_branch() {
        let runner = FakeGitRunner::new();
        runner.answer(
            &format!("log {} feature -n 7 --", LOG_FORMAT),
            "e963c21d1 Commit 1\n\n",
        );
        let client = GitClient::new(&runner);

        let commits = client.log(&Branch::new("feature"), 7).unwrap();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].hash, "e963c21d1");
    }

    #[test]
    fn test_log_diff_uses_range() {
        let runner = FakeGitRunner::new();
        runner.answer(&format!("log {} main..feature", LOG_FORMAT), "");
        let client = GitClient::new(&runner);

        let commits = client
            .log_diff(&Branch::new("main"), &Branch::new("feature"))
            .unwrap();
        assert!(commits.is_empty());
    }

    #[test]
    fn test_malformed_log_is_command_failed() {
        let runner = FakeGitRunner::new();
        runner.answer(&format!("log {} main -n 5 --", LOG_FORMAT), "  * stray\n");
        let client = GitClient::new(&runner);

        let err = client.log(&Branch::new("main"), 5).unwrap_err();
        assert!(matches!(err, CleanerError::CommandFailed(_)));
    }

    #[test]
    fn test_real_repo_log_reads_squash_bullets() {
        let temp_dir = create_test_repo();
        let path = temp_dir.path();
        std::fs::write(path.join("squash.txt"), "squashed\n").unwrap();
        git(path, &["add", "."]);
        git(
            path,
            &["commit", "-m", "Feature (#12)\n\n* Commit A\n\n* Commit B"],
        );

        let client = GitClient::new(SystemGit::new(path));
        let commits = client.log(&Branch::new("main"), 100).unwrap();

        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].subject, "Feature (#12)");
        assert_eq!(commits[0].body_bullets, vec!["Commit A", "Commit B"]);
        assert_eq!(commits[1].subject, "Initial commit");
    }

    #[test]
    fn test_real_repo_log_respects_depth() {
        let temp_dir = create_test_repo();
        let path = temp_dir.path();
        commit_file(path, "two.txt", "Commit 2");
        commit_file(path, "three.txt", "Commit 3");

        let client = GitClient::new(SystemGit::new(path));
        let commits = client.log(&Branch::new("main"), 2).unwrap();
        let subjects: Vec<_> = commits.iter().map(|c| c.subject.as_str()).collect();
        assert_eq!(subjects, vec!["Commit 3", "Commit 2"]);
    }

    #[test]
    fn test_real_repo_log_diff_both_directions() {
        let temp_dir = create_test_repo();
        let path = temp_dir.path();
        git(path, &["checkout", "-b", "feature"]);
        commit_file(path, "feature.txt", "Feature work");
        git(path, &["checkout", "main"]);
        commit_file(path, "main.txt", "Main work");

        let client = GitClient::new(SystemGit::new(path));
        let main = Branch::new("main");
        let feature = Branch::new("feature");

        let only_feature = client.log_diff(&main, &feature).unwrap();
        assert_eq!(only_feature.len(), 1);
        assert_eq!(only_feature[0].subject, "Feature work");

        let only_main = client.log_diff(&feature, &main).unwrap();
        assert_eq!(only_main.len(), 1);
        assert_eq!(only_main[0].subject, "Main work");
    }
}
