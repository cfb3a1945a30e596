//! Core value types shared by the enumerator, history fetcher and cleaner.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A local branch reference, identified by its name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
}

impl Branch {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Last `/`-separated segment of the name (`feature/id-123` -> `id-123`).
    pub fn short_name(&self) -> &str {
        self.name
            .rsplit_once('/')
            .map(|(_, last)| last)
            .unwrap_or(&self.name)
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for Branch {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A single commit as reported by `git log`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Commit {
    /// Abbreviated hash.
    pub hash: String,
    pub subject: String,
    /// Bullet lines of the body, marker stripped. A squash commit lists the
    /// subjects of the commits it replaced here.
    pub body_bullets: Vec<String>,
}

/// Joins branch names for messages: `feature, refactor`.
pub fn join_names<'a>(branches: impl IntoIterator<Item = &'a Branch>) -> String {
    branches
        .into_iter()
        .map(|b| b.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_name_uses_last_path_segment() {
        assert_eq!(Branch::new("feature/id-123").short_name(), "id-123");
        assert_eq!(Branch::new("team/feature/id-7").short_name(), "id-7");
        assert_eq!(Branch::new("feature").short_name(), "feature");
    }

    #[test]
    fn branches_order_by_name() {
        let mut branches = vec![Branch::new("refactor"), Branch::new("feature")];
        branches.sort();
        assert_eq!(branches, vec![Branch::new("feature"), Branch::new("refactor")]);
    }

    #[test]
    fn branch_serializes_as_object_with_name() {
        let json = serde_json::to_string(&Branch::new("feature")).unwrap();
        assert_eq!(json, r#"{"name":"feature"}"#);
    }

    #[test]
    fn join_names_is_comma_separated() {
        let branches = [Branch::new("a"), Branch::new("b")];
        assert_eq!(join_names(&branches), "a, b");
    }
}
