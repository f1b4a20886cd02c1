use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// sentinel-audit - deployment integrity auditor for NovelForge Sentinel Pro
#[derive(Parser, Debug)]
#[command(name = "sentinel-audit")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'sentinel-audit' without arguments to audit the current directory.")]
pub struct Cli {
    /// Output format for CI (NDJSON event stream)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full check battery and write the validation report
    Audit {
        /// Project root to audit
        #[arg(short, long)]
        project_root: Option<PathBuf>,

        /// Report destination (overrides audit.toml)
        #[arg(long)]
        report: Option<PathBuf>,

        /// Skip writing the report file
        #[arg(long)]
        no_report: bool,

        /// Fail on warnings too (CI mode)
        #[arg(long)]
        strict_warnings: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_subcommand() {
        let cli = Cli::try_parse_from(["sentinel-audit"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_audit() {
        let cli = Cli::try_parse_from(["sentinel-audit", "audit"]).unwrap();
        if let Some(Commands::Audit {
            project_root,
            report,
            no_report,
            strict_warnings,
        }) = cli.command
        {
            assert_eq!(project_root, None);
            assert_eq!(report, None);
            assert!(!no_report);
            assert!(!strict_warnings);
        } else {
            panic!("Expected Audit command");
        }
    }

    #[test]
    fn test_cli_parse_audit_with_args() {
        let cli = Cli::try_parse_from([
            "sentinel-audit",
            "audit",
            "--project-root",
            "/srv/project",
            "--report",
            "out/report.json",
            "--strict-warnings",
        ])
        .unwrap();

        if let Some(Commands::Audit {
            project_root,
            report,
            strict_warnings,
            ..
        }) = cli.command
        {
            assert_eq!(project_root, Some(PathBuf::from("/srv/project")));
            assert_eq!(report, Some(PathBuf::from("out/report.json")));
            assert!(strict_warnings);
        } else {
            panic!("Expected Audit command");
        }
    }

    #[test]
    fn test_cli_parse_audit_no_report() {
        let cli = Cli::try_parse_from(["sentinel-audit", "audit", "--no-report"]).unwrap();
        if let Some(Commands::Audit { no_report, .. }) = cli.command {
            assert!(no_report);
        } else {
            panic!("Expected Audit command");
        }
    }

    #[test]
    fn test_cli_json_flag() {
        let cli = Cli::try_parse_from(["sentinel-audit", "--json", "audit"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Some(Commands::Audit { .. })));
    }

    #[test]
    fn test_cli_json_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["sentinel-audit", "audit", "--json"]).unwrap();
        assert!(cli.json);
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["sentinel-audit", "-vvv", "audit"]).unwrap();
        assert_eq!(cli.verbose, 3);
    }
}
