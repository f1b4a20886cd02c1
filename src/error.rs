//! Error types for sentinel-audit
//!
//! Uses `thiserror` for library errors. Audit findings never surface here:
//! a missing or undersized project file is a recorded check, not an error.
//! Only the tool's own plumbing (config, report destination) can fail.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for audit operations
pub type AuditResult<T> = Result<T, AuditError>;

/// Main error type for sentinel-audit operations
#[derive(Error, Debug)]
pub enum AuditError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid tool configuration (audit.toml)
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Report destination directory does not exist
    #[error("report destination directory does not exist: {path}")]
    ReportDestination { path: PathBuf },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_invalid_config() {
        let err = AuditError::InvalidConfig {
            file: PathBuf::from("audit.toml"),
            message: "expected a table".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config in audit.toml: expected a table"
        );
    }

    #[test]
    fn test_error_display_report_destination() {
        let err = AuditError::ReportDestination {
            path: PathBuf::from("tests"),
        };
        assert_eq!(
            err.to_string(),
            "report destination directory does not exist: tests"
        );
    }
}
