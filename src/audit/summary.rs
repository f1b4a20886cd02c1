//! Persisted validation summary
//!
//! The JSON record written at the end of a run. Created once from the
//! in-memory report and immutable afterwards; writing it is the run's only
//! durable side effect.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AuditError, AuditResult};

use super::report::AuditReport;

/// Overall outcome of a run: PASS iff zero errors were recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditStatus {
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "FAIL")]
    Fail,
}

impl std::fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditStatus::Pass => write!(f, "PASS"),
            AuditStatus::Fail => write!(f, "FAIL"),
        }
    }
}

/// Structured summary of one audit run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub timestamp: DateTime<Utc>,
    pub project_name: String,
    pub total_checks: usize,
    pub successful_checks: usize,
    pub success_rate: String,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub status: AuditStatus,
}

impl ValidationSummary {
    /// Derive the summary from a finished report.
    ///
    /// Warnings are listed but excluded from the check counts, so
    /// `total_checks == successful_checks + errors.len()` always holds.
    pub fn from_report(report: &AuditReport, project_name: &str) -> Self {
        let total = report.total_checks();
        let successful = report.passes();
        let rate = if total > 0 {
            successful as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        Self {
            timestamp: Utc::now(),
            project_name: project_name.to_string(),
            total_checks: total,
            successful_checks: successful,
            success_rate: format!("{:.1}%", rate),
            errors: report.error_messages(),
            warnings: report.warning_messages(),
            status: if report.is_success() {
                AuditStatus::Pass
            } else {
                AuditStatus::Fail
            },
        }
    }

    pub fn is_pass(&self) -> bool {
        self.status == AuditStatus::Pass
    }

    /// Write the summary as pretty-printed JSON.
    ///
    /// A missing destination directory is a fatal error, unlike the recorded
    /// findings the summary itself carries.
    pub fn write_to(&self, path: &Path) -> AuditResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(AuditError::ReportDestination {
                    path: parent.to_path_buf(),
                });
            }
        }

        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
