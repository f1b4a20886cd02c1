//! Audit report accumulator and entry functions

use std::path::Path;

use super::checks;
use super::types::{AuditCheck, CheckStatus};

/// Helper function to create an AuditCheck
fn make_check(
    category: &str,
    name: &str,
    status: CheckStatus,
    message: &str,
    recommendation: Option<&str>,
) -> AuditCheck {
    AuditCheck {
        category: category.to_string(),
        name: name.to_string(),
        status,
        message: message.to_string(),
        recommendation: recommendation.map(String::from),
    }
}

pub trait AuditSink {
    fn add_check(&mut self, check: AuditCheck);

    fn add_pass(&mut self, category: &str, name: &str, message: &str) {
        self.add_check(make_check(category, name, CheckStatus::Pass, message, None));
    }

    fn add_warning(
        &mut self,
        category: &str,
        name: &str,
        message: &str,
        recommendation: Option<&str>,
    ) {
        self.add_check(make_check(
            category,
            name,
            CheckStatus::Warning,
            message,
            recommendation,
        ));
    }

    fn add_error(
        &mut self,
        category: &str,
        name: &str,
        message: &str,
        recommendation: Option<&str>,
    ) {
        self.add_check(make_check(
            category,
            name,
            CheckStatus::Error,
            message,
            recommendation,
        ));
    }
}

/// Audit run results
#[derive(Debug, Clone, Default)]
pub struct AuditReport {
    pub checks: Vec<AuditCheck>,
}

impl AuditReport {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    pub fn passes(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| c.status == CheckStatus::Pass)
            .count()
    }

    pub fn warnings(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| c.status == CheckStatus::Warning)
            .count()
    }

    pub fn errors(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| c.status == CheckStatus::Error)
            .count()
    }

    /// Total pass/fail checks. Warnings are advisory and excluded.
    pub fn total_checks(&self) -> usize {
        self.passes() + self.errors()
    }

    pub fn is_success(&self) -> bool {
        self.errors() == 0
    }

    /// Failed checks formatted as `category: message`, in recorded order.
    pub fn error_messages(&self) -> Vec<String> {
        self.checks
            .iter()
            .filter(|c| c.status == CheckStatus::Error)
            .map(|c| format!("{}: {}", c.category, c.message))
            .collect()
    }

    /// Warning checks formatted as `category: message`, in recorded order.
    pub fn warning_messages(&self) -> Vec<String> {
        self.checks
            .iter()
            .filter(|c| c.status == CheckStatus::Warning)
            .map(|c| format!("{}: {}", c.category, c.message))
            .collect()
    }
}

impl AuditSink for AuditReport {
    fn add_check(&mut self, check: AuditCheck) {
        self.checks.push(check);
    }
}

/// Run the full audit battery against a project root.
///
/// Never fails for missing project files; every finding is a recorded check.
pub fn run_audit(project_root: &Path) -> AuditReport {
    let mut report = AuditReport::new();
    run_audit_into(project_root, &mut report);
    report
}

/// Run the full battery, invoking `on_check` as each check is recorded.
pub fn run_audit_with_callback(
    project_root: &Path,
    mut on_check: impl FnMut(&AuditCheck),
) -> AuditReport {
    struct CallbackSink<F> {
        report: AuditReport,
        on_check: F,
    }

    impl<F: FnMut(&AuditCheck)> AuditSink for CallbackSink<F> {
        fn add_check(&mut self, check: AuditCheck) {
            (self.on_check)(&check);
            self.report.checks.push(check);
        }
    }

    let mut sink = CallbackSink {
        report: AuditReport::new(),
        on_check: |check: &AuditCheck| on_check(check),
    };
    run_audit_into(project_root, &mut sink);
    sink.report
}

fn run_audit_into(project_root: &Path, sink: &mut impl AuditSink) {
    checks::check_structure(project_root, sink);
    checks::check_edge_functions(project_root, sink);
    checks::check_database(project_root, sink);
    checks::check_security_fixes(project_root, sink);
    checks::check_documentation(project_root, sink);
    checks::check_frontend_assets(project_root, sink);
    checks::check_configuration(project_root, sink);
}
