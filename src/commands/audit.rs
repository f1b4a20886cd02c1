//! Audit command implementation

use std::path::PathBuf;

use anyhow::Result;

use sentinel_audit::audit::{run_audit_with_callback, CheckStatus, ValidationSummary};
use sentinel_audit::config::AuditConfig;

use crate::ui::icon::Icon;
use crate::ui::UiContext;

pub fn cmd_audit(
    project_root: Option<PathBuf>,
    report_override: Option<PathBuf>,
    no_report: bool,
    strict_warnings: bool,
    json: bool,
    _verbose: u8,
) -> Result<()> {
    let project_root = match project_root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    let (config, config_warnings) = AuditConfig::load_or_default(&project_root)?;
    let ui = UiContext::new();

    if json {
        let mut out = std::io::stdout().lock();
        let _ = crate::ui::json::write_event(
            &mut out,
            &serde_json::json!({
                "event": "start",
                "command": "audit",
                "project": config.project.name,
                "root": project_root.display().to_string(),
            }),
        );
        for warning in &config_warnings {
            let _ = crate::ui::json::write_event(
                &mut out,
                &serde_json::json!({
                    "event": "config_warning",
                    "command": "audit",
                    "key": warning.key,
                    "file": warning.file.display().to_string(),
                }),
            );
        }
    } else {
        println!(
            "{} Sentinel Audit",
            Icon::Audit.colored(ui.color, ui.unicode)
        );
        println!("Project: {}", config.project.name);
        println!("Root: {}", project_root.display());
        for warning in &config_warnings {
            println!(
                "{} unknown config key '{}' in {}",
                Icon::Warning.colored(ui.color, ui.unicode),
                warning.key,
                warning.file.display()
            );
        }
        println!();
    }

    let report = if json {
        let mut out = std::io::stdout().lock();
        run_audit_with_callback(&project_root, |check| {
            let status = match check.status {
                CheckStatus::Pass => "pass",
                CheckStatus::Warning => "warning",
                CheckStatus::Error => "error",
            };
            let _ = crate::ui::json::write_event(
                &mut out,
                &serde_json::json!({
                    "event": "check",
                    "command": "audit",
                    "category": check.category,
                    "name": check.name,
                    "status": status,
                    "message": check.message,
                    "recommendation": check.recommendation,
                }),
            );
        })
    } else {
        run_audit_with_callback(&project_root, |check| {
            let icon = match check.status {
                CheckStatus::Pass => Icon::Success,
                CheckStatus::Warning => Icon::Warning,
                CheckStatus::Error => Icon::Error,
            }
            .colored(ui.color, ui.unicode);
            println!(
                "{} [{}] {}: {}",
                icon, check.category, check.name, check.message
            );
            if let Some(rec) = &check.recommendation {
                println!("  {} {}", Icon::Arrow.colored(ui.color, ui.unicode), rec);
            }
        })
    };

    let summary = ValidationSummary::from_report(&report, &config.project.name);

    let report_path = if no_report {
        None
    } else {
        Some(match report_override {
            Some(path) if path.is_absolute() => path,
            Some(path) => project_root.join(path),
            None => config.report_path(&project_root),
        })
    };

    // A missing report destination is the one fatal failure of a run.
    if let Some(path) = &report_path {
        summary.write_to(path)?;
    }

    let has_issues = report.errors() > 0 || (strict_warnings && report.warnings() > 0);

    if json {
        let mut out = std::io::stdout().lock();
        let _ = crate::ui::json::write_event(
            &mut out,
            &serde_json::json!({
                "event": "complete",
                "command": "audit",
                "project": summary.project_name,
                "total_checks": summary.total_checks,
                "successful_checks": summary.successful_checks,
                "success_rate": summary.success_rate,
                "warnings": report.warnings(),
                "errors": report.errors(),
                "status": summary.status.to_string(),
                "report": report_path.as_ref().map(|p| p.display().to_string()),
                "success": !has_issues,
            }),
        );
    } else {
        println!();
        println!(
            "Result: {} passed, {} warnings, {} errors",
            report.passes(),
            report.warnings(),
            report.errors()
        );
        println!("Success rate: {}", summary.success_rate);
        if let Some(path) = &report_path {
            println!(
                "{} Report written to {}",
                Icon::Report.colored(ui.color, ui.unicode),
                path.display()
            );
        }

        println!();
        if has_issues {
            println!(
                "{} Audit FAILED - project integrity issues detected",
                Icon::Error.colored(ui.color, ui.unicode)
            );
        } else {
            println!(
                "{} Audit PASSED",
                Icon::Success.colored(ui.color, ui.unicode)
            );
        }
    }

    if has_issues {
        std::process::exit(1);
    }

    Ok(())
}
