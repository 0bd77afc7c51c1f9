//! GATECHECK — rule-driven sign-off checking CLI.
//!
//! Loads a TOML checker configuration, runs the selected checkers against
//! the filesystem, and prints a log-style or JSON report.
//!
//! Usage:
//!   gatecheck run --config signoff.toml
//!   gatecheck run --config signoff.toml --checker tool-version --format json
//!   gatecheck list --config signoff.toml

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use gatecheck_contracts::error::GatecheckResult;
use gatecheck_parse::reader::FsFileReader;

mod render;

use render::{render_json, render_log, CheckOutcome, ConfigFailure};

// ── CLI definition ────────────────────────────────────────────────────────────

/// GATECHECK — rule-driven verification of EDA tool logs and reports.
#[derive(Parser)]
#[command(
    name = "gatecheck",
    about = "Rule-driven sign-off checking for EDA tool logs and reports",
    long_about = "Parses EDA tool log/report files, validates extracted values against\n\
                  configured requirements, applies waiver policies, and emits auditable\n\
                  PASS/FAIL reports with full provenance."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run configured checkers and print the report.
    Run {
        /// Path to the TOML checker configuration.
        #[arg(long)]
        config: PathBuf,
        /// Run only the named checker instead of all of them.
        #[arg(long)]
        checker: Option<String>,
        /// Report format.
        #[arg(long, value_enum, default_value_t = Format::Log)]
        format: Format,
    },
    /// List the checkers a configuration declares, without running them.
    List {
        /// Path to the TOML checker configuration.
        #[arg(long)]
        config: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Log,
    Json,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    // Structured logging; set RUST_LOG=debug for per-stage tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Run {
            config,
            checker,
            format,
        } => run(&config, checker.as_deref(), format),
        Command::List { config } => list(&config),
    };

    match result {
        Ok(all_passed) => {
            if all_passed {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("gatecheck: {e}");
            ExitCode::FAILURE
        }
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn run(config: &PathBuf, only: Option<&str>, format: Format) -> GatecheckResult<bool> {
    let checkers = gatecheck_config::load_file(config)?;

    let selected: Vec<_> = match only {
        Some(name) => {
            let matched: Vec<_> = checkers.into_iter().filter(|c| c.name == name).collect();
            if matched.is_empty() {
                return Err(gatecheck_contracts::error::GatecheckError::Config {
                    reason: format!("no checker named '{name}' in '{}'", config.display()),
                });
            }
            matched
        }
        None => checkers,
    };

    let reader = FsFileReader::new();
    let outcomes: Vec<CheckOutcome> = selected
        .iter()
        .map(|checker| match checker.run(&reader) {
            Ok(report) => CheckOutcome::Completed(report),
            // A checker that cannot run is reported, not fatal for the rest.
            Err(e) => CheckOutcome::ConfigFailure(ConfigFailure::new(
                checker.name.clone(),
                e.to_string(),
            )),
        })
        .collect();

    match format {
        Format::Log => print!("{}", render_log(&outcomes)),
        Format::Json => println!("{}", render_json(&outcomes)),
    }

    Ok(outcomes.iter().all(CheckOutcome::passed))
}

fn list(config: &PathBuf) -> GatecheckResult<bool> {
    let checkers = gatecheck_config::load_file(config)?;

    for checker in &checkers {
        println!(
            "{:<24} {:?}  {} input(s)  — {}",
            checker.name,
            checker.kind,
            checker.input_files.len(),
            checker.description
        );
    }

    Ok(true)
}
