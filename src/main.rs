//! sentinel-audit CLI - deployment integrity auditor
//!
//! Usage: sentinel-audit [audit] [OPTIONS]
//!
//! Runs the fixed check battery against a project tree, mirrors each check
//! on the console (or as NDJSON with --json), writes the validation report,
//! and exits non-zero when errors were recorded.

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Audit {
            project_root,
            report,
            no_report,
            strict_warnings,
        }) => commands::audit::cmd_audit(
            project_root,
            report,
            no_report,
            strict_warnings,
            cli.json,
            cli.verbose,
        ),
        // No subcommand: audit the current directory with defaults.
        None => commands::audit::cmd_audit(None, None, false, false, cli.json, cli.verbose),
    }
}
