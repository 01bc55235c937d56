#![allow(missing_docs)]

//! notetag CLI: rebuild the tag index of a notes README.
//!
//! With no arguments, scans `<year>/<MM>` of today's date and rewrites the
//! tag region of `./README.md`.
//!
//! Logging: set `RUST_LOG=notetag=debug` (or `warn`) to adjust stderr output.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use notetag_index::{IndexConfig, RunMode, RunReport, load_settings, run};

#[derive(Parser, Debug)]
#[command(
    name = "notetag",
    about = "Collect **Tags:** lines from dated notes into a README tag index"
)]
struct Cli {
    /// Notes root directory (default: `<year>/<MM>` of the run month).
    #[arg(long, short = 'r', value_name = "DIR")]
    root: Option<PathBuf>,

    /// Index document to update (default: README.md).
    #[arg(long, short = 'd', value_name = "FILE")]
    document: Option<PathBuf>,

    /// Override config home directory (replaces `PRJ_CONFIG_HOME`).
    #[arg(long, value_name = "DIR")]
    conf: Option<PathBuf>,

    /// Month used for the default notes root instead of today.
    #[arg(long, value_name = "YYYY-MM", value_parser = parse_month)]
    month: Option<NaiveDate>,

    /// Print the updated document to stdout instead of writing it.
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Print a run summary (with the full tag index) to stdout.
    #[arg(long, short = 'o', value_enum)]
    output: Option<OutputFormat>,

    /// Debug-level logging.
    #[arg(long, short = 'v', default_value_t = false)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

fn parse_month(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(&format!("{}-01", raw.trim()), "%Y-%m-%d")
        .map_err(|error| format!("expected YYYY-MM, got {raw:?}: {error}"))
}

fn emit<T: Serialize>(value: &T, output: OutputFormat) -> Result<()> {
    let rendered = match output {
        OutputFormat::Json => serde_json::to_string(value),
        OutputFormat::Pretty => serde_json::to_string_pretty(value),
    }
    .context("failed to serialize CLI output as JSON")?;
    println!("{rendered}");
    Ok(())
}

fn resolve_config(cli: &Cli) -> IndexConfig {
    let settings = load_settings(cli.conf.as_deref());
    let today = cli.month.unwrap_or_else(|| Local::now().date_naive());
    let mut config = IndexConfig::from_settings(&settings, today);
    if let Some(root) = &cli.root {
        config.notes_root.clone_from(root);
    }
    if let Some(document) = &cli.document {
        config.document.clone_from(document);
    }
    config
}

fn summary(config: &IndexConfig, report: &RunReport) -> serde_json::Value {
    json!({
        "notes_root": config.notes_root.display().to_string(),
        "document": config.document.display().to_string(),
        "notes": report.note_count,
        "tags": report.tag_count,
        "placement": report.placement,
        "synthesized": report.synthesized,
        "written": report.written,
        "index": report.index,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG overrides; --verbose => debug; else info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose {
            "notetag=debug,notetag_index=debug,notetag_scanner=debug,notetag_io=debug"
        } else {
            "notetag=info,notetag_index=info,notetag_scanner=info,notetag_io=info"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = resolve_config(&cli);
    tracing::info!(
        notes_root = %config.notes_root.display(),
        document = %config.document.display(),
        "starting tag index run"
    );

    let mode = if cli.dry_run {
        RunMode::DryRun
    } else {
        RunMode::Write
    };
    let report = run(&config, mode).with_context(|| {
        format!(
            "failed to rebuild tag index for {}",
            config.document.display()
        )
    })?;

    tracing::info!(
        notes = report.note_count,
        tags = report.tag_count,
        written = report.written,
        "tag index run finished"
    );

    if let Some(output) = cli.output {
        emit(&summary(&config, &report), output)?;
    } else if cli.dry_run {
        print!("{}", report.document);
    }
    Ok(())
}
