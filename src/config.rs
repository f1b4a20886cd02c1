//! Tool configuration
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority, applied by the command layer)
//! 2. Environment variables (SENTINEL_*)
//! 3. Project config (<root>/audit.toml)
//! 4. Built-in defaults (lowest priority)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AuditError, AuditResult};

/// Config file name looked up at the project root
pub const CONFIG_FILE_NAME: &str = "audit.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
}

/// Tool configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AuditConfig {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

/// Identity of the audited project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectConfig {
    #[serde(default = "default_project_name")]
    pub name: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_project_name(),
        }
    }
}

fn default_project_name() -> String {
    "NovelForge Sentinel Pro".to_string()
}

/// Report output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportConfig {
    /// Report destination, relative to the project root unless absolute
    #[serde(default = "default_report_path")]
    pub path: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path: default_report_path(),
        }
    }
}

fn default_report_path() -> PathBuf {
    PathBuf::from("tests/validation_report.json")
}

impl AuditConfig {
    /// Load from a config file path.
    pub fn load(path: &Path) -> AuditResult<Self> {
        Ok(Self::load_with_warnings(path)?.0)
    }

    /// Load and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> AuditResult<(Self, Vec<ConfigWarning>)> {
        let content = std::fs::read_to_string(path)?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let config: AuditConfig = serde_ignored::deserialize(deserializer, |p| {
            unknown_paths.push(p.to_string());
        })
        .map_err(|e| AuditError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|path_str| {
                let key = path_str
                    .split('.')
                    .next_back()
                    .unwrap_or(path_str.as_str())
                    .to_string();
                ConfigWarning {
                    key,
                    file: path.to_path_buf(),
                }
            })
            .collect();

        Ok((config, warnings))
    }

    /// Load from `<root>/audit.toml` or fall back to defaults.
    ///
    /// A present but malformed file is a hard error: it is the tool's own
    /// config, not an audited artifact.
    pub fn load_or_default(project_root: &Path) -> AuditResult<(Self, Vec<ConfigWarning>)> {
        let config_path = project_root.join(CONFIG_FILE_NAME);
        let (config, warnings) = if config_path.is_file() {
            Self::load_with_warnings(&config_path)?
        } else {
            (Self::default(), Vec::new())
        };
        Ok((with_env_overrides(config), warnings))
    }

    /// Resolve the report destination against the project root.
    pub fn report_path(&self, project_root: &Path) -> PathBuf {
        if self.report.path.is_absolute() {
            self.report.path.clone()
        } else {
            project_root.join(&self.report.path)
        }
    }
}

/// Apply environment variable overrides (SENTINEL_* prefix)
fn with_env_overrides(mut config: AuditConfig) -> AuditConfig {
    if let Ok(name) = std::env::var("SENTINEL_PROJECT_NAME") {
        if !name.trim().is_empty() {
            config.project.name = name;
        }
    }

    if let Ok(path) = std::env::var("SENTINEL_REPORT_PATH") {
        if !path.trim().is_empty() {
            config.report.path = PathBuf::from(path);
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_project_scaffold() {
        let config = AuditConfig::default();
        assert_eq!(config.project.name, "NovelForge Sentinel Pro");
        assert_eq!(
            config.report.path,
            PathBuf::from("tests/validation_report.json")
        );
    }

    #[test]
    fn load_reads_project_and_report_sections() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            r#"
[project]
name = "Staging Sentinel"

[report]
path = "out/report.json"
"#,
        )
        .unwrap();

        let config = AuditConfig::load(&path).unwrap();
        assert_eq!(config.project.name, "Staging Sentinel");
        assert_eq!(config.report.path, PathBuf::from("out/report.json"));
    }

    #[test]
    fn load_with_warnings_flags_unknown_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            r#"
[project]
name = "Sentinel"
nmae = "typo"
"#,
        )
        .unwrap();

        let (_, warnings) = AuditConfig::load_with_warnings(&path).unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].key, "nmae");
    }

    #[test]
    fn load_rejects_malformed_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[project\nname = ").unwrap();

        let err = AuditConfig::load(&path).unwrap_err();
        assert!(matches!(err, AuditError::InvalidConfig { .. }));
    }

    #[test]
    fn load_or_default_without_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let (config, warnings) = AuditConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config, with_env_overrides(AuditConfig::default()));
        assert!(warnings.is_empty());
    }

    #[test]
    fn report_path_resolves_relative_to_root() {
        let config = AuditConfig::default();
        let resolved = config.report_path(Path::new("/srv/project"));
        assert_eq!(
            resolved,
            PathBuf::from("/srv/project/tests/validation_report.json")
        );
    }

    #[test]
    fn report_path_keeps_absolute_paths() {
        let mut config = AuditConfig::default();
        config.report.path = PathBuf::from("/var/reports/audit.json");
        let resolved = config.report_path(Path::new("/srv/project"));
        assert_eq!(resolved, PathBuf::from("/var/reports/audit.json"));
    }
}
