//! Audit engine
//!
//! Runs the fixed check battery against a project root:
//! - Structure: required directories and files exist
//! - Edge Functions: each function entry point exists and is non-trivial
//! - Database: table and migration SQL files exist and are non-empty
//! - Security Fixes: fixed bucket scripts exist; risky originals are flagged
//! - Documentation / Frontend Assets: content files meet size floors
//! - Configuration: supabase/config.json carries the required sections

mod checks;
mod report;
mod summary;
mod types;

pub use report::{run_audit, run_audit_with_callback, AuditReport, AuditSink};
pub use summary::{AuditStatus, ValidationSummary};
pub use types::{AuditCheck, CheckStatus};

/// Directories the project tree must contain (existence only)
pub const REQUIRED_DIRS: &[&str] = &[
    "docs",
    "novelforge-sentinel-pro",
    "novelforge-sentinel-pro/css",
    "novelforge-sentinel-pro/js",
    "novelforge-sentinel-pro/images",
    "novelforge-sentinel-pro/data",
    "supabase",
    "supabase/functions",
    "supabase/tables",
    "supabase/migrations",
    "supabase/cron_jobs",
    "tests",
];

/// Files the project tree must contain (existence only)
pub const REQUIRED_FILES: &[&str] = &[
    "todo.md",
    "deploy_url.txt",
    "novelforge-sentinel-pro/index.html",
    "novelforge-sentinel-pro/admin.html",
    "supabase/config.json",
];

/// Edge functions expected under supabase/functions/<name>/index.ts
pub const EXPECTED_FUNCTIONS: &[&str] = &[
    "admin-setup",
    "ai-proxy",
    "device-verification",
    "file-upload",
    "license-management",
    "security-monitoring",
    "security-scan-cron",
    "create-bucket-novel-documents-temp",
    "create-bucket-user-avatars-temp",
];

/// Storage bucket functions that must carry a fixed (non-public) variant
pub const BUCKET_FUNCTIONS: &[&str] = &[
    "create-bucket-novel-documents-temp",
    "create-bucket-user-avatars-temp",
];

/// Table definitions expected under supabase/tables/
pub const EXPECTED_TABLES: &[&str] = &[
    "ai_usage_logs.sql",
    "audit_logs.sql",
    "device_bindings.sql",
    "licenses.sql",
    "novels.sql",
    "profiles.sql",
    "security_events.sql",
    "system_notifications.sql",
];

/// Migrations expected under supabase/migrations/
pub const EXPECTED_MIGRATIONS: &[&str] = &[
    "1754354212_setup_indexes_and_rls.sql",
    "1754354231_create_rls_policies.sql",
    "1754354248_create_audit_triggers.sql",
];

/// Documents expected under docs/
pub const REQUIRED_DOCS: &[&str] = &[
    "technical_research_report.md",
    "system_architecture_design.md",
    "technology_stack_recommendation.md",
    "security_analysis_report.md",
    "implementation_suggestion.md",
    "novelforge_sentinel_pro_api_documentation.md",
    "novelforge_sentinel_pro_completion_report.md",
    "novelforge_sentinel_pro_deployment_guide.md",
    "research_plan_NovelForge_Sentinel_Pro.md",
    "security_fixes_and_improvements.md",
    "updated_deployment_guide.md",
];

/// Stylesheets expected under novelforge-sentinel-pro/css/
pub const CSS_FILES: &[&str] = &["styles.css", "admin.css"];

/// Scripts expected under novelforge-sentinel-pro/js/
pub const JS_FILES: &[&str] = &["main.js", "admin.js"];

/// Images expected under novelforge-sentinel-pro/images/
pub const IMAGE_FILES: &[&str] = &[
    "ai-neural.jpg",
    "bg-main.jpg",
    "data-flow.jpg",
    "panel-bg.jpg",
    "writing-space.jpg",
];

/// Top-level sections required in supabase/config.json
pub const REQUIRED_CONFIG_KEYS: &[&str] =
    &["project", "supabase", "security", "ai_models", "client"];

/// Size floors per content category (bytes)
pub(crate) const MIN_DOC_BYTES: u64 = 500;
pub(crate) const MIN_STYLESHEET_BYTES: u64 = 1000;
pub(crate) const MIN_SCRIPT_BYTES: u64 = 1000;
pub(crate) const MIN_IMAGE_BYTES: u64 = 5000;

/// Function entry points must be strictly larger than this
pub(crate) const FUNCTION_ENTRY_FLOOR_BYTES: u64 = 100;

/// Substrings that together mark an unsafe public bucket configuration
pub(crate) const RISKY_BUCKET_MARKERS: (&str, &str) = ("public: true", "Public Access");
