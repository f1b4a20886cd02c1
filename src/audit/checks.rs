//! Audit check battery
//!
//! Each check_xxx function is a stateless pass over one category of project
//! artifacts. A missing or undersized path is recorded through the sink,
//! never raised. The path and threshold tables live in the module root.

use std::path::Path;

use super::report::AuditSink;
use super::{
    BUCKET_FUNCTIONS, CSS_FILES, EXPECTED_FUNCTIONS, EXPECTED_MIGRATIONS, EXPECTED_TABLES,
    FUNCTION_ENTRY_FLOOR_BYTES, IMAGE_FILES, JS_FILES, MIN_DOC_BYTES, MIN_IMAGE_BYTES,
    MIN_SCRIPT_BYTES, MIN_STYLESHEET_BYTES, REQUIRED_CONFIG_KEYS, REQUIRED_DIRS, REQUIRED_DOCS,
    REQUIRED_FILES, RISKY_BUCKET_MARKERS,
};

/// Size of a regular file, or None if it does not exist or is not a file.
fn file_size(path: &Path) -> Option<u64> {
    let meta = std::fs::metadata(path).ok()?;
    meta.is_file().then(|| meta.len())
}

pub fn check_structure(root: &Path, sink: &mut impl AuditSink) {
    let category = "Structure";

    for dir in REQUIRED_DIRS {
        if root.join(dir).is_dir() {
            sink.add_pass(category, "dir", &format!("{} present", dir));
        } else {
            sink.add_error(
                category,
                "dir",
                &format!("{} missing", dir),
                Some("Restore the directory from the project scaffold"),
            );
        }
    }

    for file in REQUIRED_FILES {
        if root.join(file).is_file() {
            sink.add_pass(category, "file", &format!("{} present", file));
        } else {
            sink.add_error(category, "file", &format!("{} missing", file), None);
        }
    }
}

pub fn check_edge_functions(root: &Path, sink: &mut impl AuditSink) {
    let category = "Edge Functions";
    let functions_dir = root.join("supabase/functions");

    for func in EXPECTED_FUNCTIONS {
        let entry = functions_dir.join(func).join("index.ts");
        match file_size(&entry) {
            Some(size) if size > FUNCTION_ENTRY_FLOOR_BYTES => {
                sink.add_pass(category, "function", &format!("{} complete", func));
            }
            Some(size) => {
                sink.add_error(
                    category,
                    "function",
                    &format!("{} entry point too small ({} bytes)", func, size),
                    Some("Redeploy the function source"),
                );
            }
            None => {
                sink.add_error(category, "function", &format!("{} missing", func), None);
            }
        }
    }
}

pub fn check_database(root: &Path, sink: &mut impl AuditSink) {
    let category = "Database";
    let tables_dir = root.join("supabase/tables");
    let migrations_dir = root.join("supabase/migrations");

    for table in EXPECTED_TABLES {
        match file_size(&tables_dir.join(table)) {
            Some(size) if size > 0 => {
                sink.add_pass(category, "table", &format!("{} present", table));
            }
            _ => {
                sink.add_error(
                    category,
                    "table",
                    &format!("{} missing or empty", table),
                    None,
                );
            }
        }
    }

    for migration in EXPECTED_MIGRATIONS {
        match file_size(&migrations_dir.join(migration)) {
            Some(size) if size > 0 => {
                sink.add_pass(category, "migration", &format!("{} present", migration));
            }
            _ => {
                sink.add_error(
                    category,
                    "migration",
                    &format!("{} missing or empty", migration),
                    None,
                );
            }
        }
    }
}

pub fn check_security_fixes(root: &Path, sink: &mut impl AuditSink) {
    let category = "Security Fixes";
    let functions_dir = root.join("supabase/functions");

    for func in BUCKET_FUNCTIONS {
        let original = functions_dir.join(func).join("index.ts");
        let fixed = functions_dir.join(func).join("index.ts.fixed");

        if fixed.is_file() {
            sink.add_pass(category, "fixed_variant", &format!("{} fixed variant present", func));

            // The marker scan only runs when a fixed sibling exists; it flags
            // an unsafe original left in place and never fails the audit.
            if let Ok(content) = std::fs::read_to_string(&original) {
                let (marker_a, marker_b) = RISKY_BUCKET_MARKERS;
                if content.contains(marker_a) && content.contains(marker_b) {
                    sink.add_warning(
                        category,
                        "risky_config",
                        &format!("{} original still configures a public bucket", func),
                        Some("Replace index.ts with the fixed variant before deploying"),
                    );
                }
            }
        } else {
            sink.add_error(
                category,
                "fixed_variant",
                &format!("{} fixed variant missing", func),
                Some("Apply the bucket security fix and commit index.ts.fixed"),
            );
        }
    }

    let security_doc = root.join("docs/security_fixes_and_improvements.md");
    if security_doc.is_file() {
        sink.add_pass(category, "security_doc", "security fixes document present");
    } else {
        sink.add_error(
            category,
            "security_doc",
            "security fixes document missing",
            None,
        );
    }
}

pub fn check_documentation(root: &Path, sink: &mut impl AuditSink) {
    let category = "Documentation";
    let docs_dir = root.join("docs");

    for doc in REQUIRED_DOCS {
        match file_size(&docs_dir.join(doc)) {
            Some(size) if size >= MIN_DOC_BYTES => {
                sink.add_pass(category, "doc", &format!("{} present with content", doc));
            }
            Some(size) => {
                sink.add_error(
                    category,
                    "doc",
                    &format!("{} too small ({} bytes)", doc, size),
                    None,
                );
            }
            None => {
                sink.add_error(category, "doc", &format!("{} missing", doc), None);
            }
        }
    }
}

pub fn check_frontend_assets(root: &Path, sink: &mut impl AuditSink) {
    let category = "Frontend Assets";
    let app_dir = root.join("novelforge-sentinel-pro");

    check_sized_files(&app_dir.join("css"), CSS_FILES, MIN_STYLESHEET_BYTES, category, "css", sink);
    check_sized_files(&app_dir.join("js"), JS_FILES, MIN_SCRIPT_BYTES, category, "js", sink);
    check_sized_files(
        &app_dir.join("images"),
        IMAGE_FILES,
        MIN_IMAGE_BYTES,
        category,
        "image",
        sink,
    );
}

fn check_sized_files(
    dir: &Path,
    files: &[&str],
    min_bytes: u64,
    category: &str,
    name: &str,
    sink: &mut impl AuditSink,
) {
    for file in files {
        match file_size(&dir.join(file)) {
            Some(size) if size >= min_bytes => {
                sink.add_pass(category, name, &format!("{} present", file));
            }
            _ => {
                sink.add_error(
                    category,
                    name,
                    &format!("{} missing or too small", file),
                    None,
                );
            }
        }
    }
}

pub fn check_configuration(root: &Path, sink: &mut impl AuditSink) {
    let category = "Configuration";
    let config_file = root.join("supabase/config.json");

    let content = match std::fs::read_to_string(&config_file) {
        Ok(content) => content,
        Err(_) => {
            let message = if config_file.exists() {
                "config.json unreadable"
            } else {
                "config.json missing"
            };
            sink.add_error(category, "config", message, None);
            return;
        }
    };

    // Malformed content (including a non-object root) is a single recorded
    // failure for the category, not a propagated error.
    let parsed: serde_json::Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(_) => {
            sink.add_error(
                category,
                "config",
                "config.json is not valid JSON",
                Some("Fix the JSON syntax or regenerate the file"),
            );
            return;
        }
    };

    let Some(object) = parsed.as_object() else {
        sink.add_error(
            category,
            "config",
            "config.json root is not an object",
            Some("Fix the JSON syntax or regenerate the file"),
        );
        return;
    };

    for key in REQUIRED_CONFIG_KEYS {
        if object.contains_key(*key) {
            sink.add_pass(category, "config_key", &format!("{} section present", key));
        } else {
            sink.add_error(
                category,
                "config_key",
                &format!("{} section missing", key),
                None,
            );
        }
    }
}
