//! Config loading, validation, and derived values.

use super::model::CleanerConfig;
use super::types::BranchType;
use crate::error::{CleanerError, Result};
use crate::model::Branch;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

impl CleanerConfig {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            CleanerError::InvalidConfig(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        log::debug!("Loaded config from {}", path.display());
        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string and validate it.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: CleanerConfig = serde_yaml::from_str(yaml).map_err(|e| {
            CleanerError::InvalidConfig(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            CleanerError::InvalidConfig(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// - `branch_max_depth` must be positive
    /// - `ref_branch_name` and `remote` must be non-empty
    /// - `protected_branches` entries must be valid globs
    pub fn validate(&self) -> Result<()> {
        if self.branch_max_depth == 0 {
            return Err(CleanerError::InvalidConfig(
                "config validation failed: branch_max_depth must be greater than 0".to_string(),
            ));
        }

        if self.ref_branch_name.trim().is_empty() {
            return Err(CleanerError::InvalidConfig(
                "config validation failed: ref_branch_name must be non-empty".to_string(),
            ));
        }

        if self.remote.trim().is_empty() {
            return Err(CleanerError::InvalidConfig(
                "config validation failed: remote must be non-empty".to_string(),
            ));
        }

        self.protected_globset()?;

        if self.merge_matchers.is_empty() {
            log::warn!("No merge matchers configured; scan will not report any branch");
        }

        Ok(())
    }

    /// The reference branch as git should address it.
    ///
    /// A remote reference is prefixed with the remote alias (`origin/main`).
    pub fn ref_branch(&self) -> Branch {
        match self.ref_branch_type {
            BranchType::Local => Branch::new(self.ref_branch_name.as_str()),
            BranchType::Remote => Branch::new(format!("{}/{}", self.remote, self.ref_branch_name)),
        }
    }

    /// Compile `protected_branches` into a matcher.
    pub fn protected_globset(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();

        for pattern in &self.protected_branches {
            let normalized = pattern.trim();
            if normalized.is_empty() {
                continue;
            }
            let glob = Glob::new(normalized).map_err(|e| {
                CleanerError::InvalidConfig(format!(
                    "config validation failed: invalid protected branch pattern '{}': {}",
                    pattern, e
                ))
            })?;
            builder.add(glob);
        }

        builder.build().map_err(|e| {
            CleanerError::InvalidConfig(format!(
                "config validation failed: invalid protected branch patterns: {}",
                e
            ))
        })
    }
}
