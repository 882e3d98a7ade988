// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Error types for the Watson SDK

use reqwest::header::HeaderMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatsonError {
    #[error("Invalid argument: {0}")]
    Validation(String),

    #[error("Invalid service URL: {0}")]
    InvalidServiceUrl(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("HTTP {status}: {message}")]
    Http {
        status: u16,
        message: String,
        headers: HeaderMap,
        body: String,
    },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WatsonError {
    /// Shorthand for a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// HTTP status code, if the error came from a non-2xx response
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, WatsonError>;

/// Fail when a required string field is empty
pub(crate) fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(WatsonError::validation(format!(
            "{} must not be empty",
            field
        )));
    }
    Ok(())
}

/// Fail when a required list field is empty
pub(crate) fn require_non_empty<T>(field: &str, value: &[T]) -> Result<()> {
    if value.is_empty() {
        return Err(WatsonError::validation(format!(
            "{} must contain at least one element",
            field
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_rejects_blank() {
        let err = require("workspace_id", "  ").unwrap_err();
        assert!(err.to_string().contains("workspace_id must not be empty"));
        assert!(require("workspace_id", "abc").is_ok());
    }

    #[test]
    fn test_http_error_status_code() {
        let err = WatsonError::Http {
            status: 404,
            message: "Resource not found".to_string(),
            headers: HeaderMap::new(),
            body: String::new(),
        };
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.to_string(), "HTTP 404: Resource not found");
        assert_eq!(WatsonError::validation("x").status_code(), None);
    }
}
