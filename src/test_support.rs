use crate::error::{CleanerError, Result};
use crate::git::GitRunner;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

type Answerer = Box<dyn FnMut(&str) -> Option<String>>;

/// In-memory git runner.
///
/// Commands are matched by their arguments joined with single spaces (without
/// the leading `git`). Answerer closures are consulted first, newest first,
/// then the fixed answers. Unanswered commands fail like a broken git would.
#[derive(Default)]
pub(crate) struct FakeGitRunner {
    answers: RefCell<HashMap<String, String>>,
    answerers: RefCell<Vec<Answerer>>,
    commands: RefCell<Vec<String>>,
}

impl FakeGitRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn answer(&self, args: &str, output: &str) {
        self.answers
            .borrow_mut()
            .insert(args.to_string(), output.to_string());
    }

    pub(crate) fn answer_with(&self, answerer: impl FnMut(&str) -> Option<String> + 'static) {
        self.answerers.borrow_mut().push(Box::new(answerer));
    }

    /// Every command run so far, in order.
    pub(crate) fn commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }
}

impl GitRunner for FakeGitRunner {
    fn run(&self, args: &[&str]) -> Result<String> {
        let line = args.join(" ");
        self.commands.borrow_mut().push(line.clone());

        for answerer in self.answerers.borrow_mut().iter_mut().rev() {
            if let Some(output) = answerer(&line) {
                return Ok(output);
            }
        }

        self.answers
            .borrow()
            .get(&line)
            .cloned()
            .ok_or_else(|| CleanerError::CommandFailed(format!("no answer for git {}", line)))
    }
}

pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    // Ensure the repo uses a deterministic default branch name across environments.
    // This sets HEAD to an unborn `main` branch before the first commit.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);

    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "commit.gpgsign", "false"]);

    commit_file(path, "README.md", "Initial commit");

    temp_dir
}

/// Write a file named after the commit and commit it on the current branch.
pub(crate) fn commit_file(repo_dir: &Path, file: &str, message: &str) {
    std::fs::write(repo_dir.join(file), format!("{}\n", message)).unwrap();
    git(repo_dir, &["add", "."]);
    git(repo_dir, &["commit", "-m", message]);
}

pub(crate) fn git(repo_dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }

    String::from_utf8_lossy(&output.stdout).into_owned()
}
