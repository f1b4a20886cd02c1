//! sentinel-audit - deployment integrity auditor
//!
//! sentinel-audit runs a fixed battery of existence, size, and configuration
//! checks against a NovelForge Sentinel Pro project tree, then writes a
//! structured JSON report. The audited artifacts (edge functions, SQL files,
//! documentation, frontend assets) are treated as opaque filesystem objects.

pub mod audit;
pub mod config;
pub mod error;

// Re-exports for convenience
pub use audit::{
    run_audit, run_audit_with_callback, AuditCheck, AuditReport, AuditSink, AuditStatus,
    CheckStatus, ValidationSummary,
};
pub use config::{AuditConfig, ConfigWarning};
pub use error::{AuditError, AuditResult};
