//! JSON payloads exchanged with the host.

use crate::error::{CleanerError, Result};
use crate::model::Branch;
use serde::Serialize;
use std::any::Any;

/// Error description handed to the host.
#[derive(Debug, Serialize)]
pub(super) struct ErrorPayload {
    pub kind: &'static str,
    pub message: String,
    pub branches: Vec<Branch>,
}

impl ErrorPayload {
    pub fn from_error(err: &CleanerError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
            branches: err.branches(),
        }
    }

    pub fn from_panic(panic: &(dyn Any + Send)) -> Self {
        let detail = panic
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());

        Self {
            kind: "internalError",
            message: format!("internal error: {}", detail),
            branches: Vec::new(),
        }
    }

    pub fn to_json(&self) -> String {
        // Serializing plain strings and branch names cannot fail.
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"kind":"{}","message":"","branches":[]}}"#, self.kind)
        })
    }
}

pub(super) fn encode_branches(branches: &[Branch]) -> Result<String> {
    serde_json::to_string(branches)
        .map_err(|e| CleanerError::InvalidInput(format!("failed to encode branch list: {}", e)))
}

pub(super) fn decode_branches(json: &str) -> Result<Vec<Branch>> {
    serde_json::from_str(json)
        .map_err(|e| CleanerError::InvalidInput(format!("failed to decode branch list: {}", e)))
}
