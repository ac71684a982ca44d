//! `axe-earl`: converts an axe-core JSON result into a WCAG-EM / EARL
//! JSON-LD conformance report.
//!
//! **Usage:**
//! ```
//! axe-earl [--input <file>|-] [--out <file>] [--rule-groups <file>]
//!          [--compact] [--fail-on-violation] [--log-level <level>]
//! ```
//!
//! Reads stdin and writes stdout by default. The outcome summary and logs go
//! to stderr. `RUST_LOG` overrides `--log-level`.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use earl_catalog::{RuleGroupTable, WcagCatalog};
use earl_reporter::{create_earl_report_with, AxeResults};
use tracing_subscriber::EnvFilter;

/// Convert axe-core results to an EARL report.
#[derive(Parser)]
#[command(
    name = "axe-earl",
    about = "Convert axe-core results into a WCAG-EM / EARL JSON-LD report"
)]
struct Args {
    /// axe-core JSON result file (`-` for stdin).
    #[arg(long, default_value = "-")]
    input: PathBuf,

    /// Output file for the report (default: stdout).
    #[arg(long)]
    out: Option<PathBuf>,

    /// JSON rule-group table replacing the bundled axe-core 4.4 table.
    #[arg(long)]
    rule_groups: Option<PathBuf>,

    /// Write compact JSON instead of pretty-printed JSON.
    #[arg(long)]
    compact: bool,

    /// Exit non-zero if any criterion failed.
    #[arg(long)]
    fail_on_violation: bool,

    /// Log level used when `RUST_LOG` is unset.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let input = read_input(&args.input)?;
    let results = AxeResults::from_json(&input)
        .with_context(|| format!("Failed to parse axe-core results from {}", args.input.display()))?;

    let custom;
    let catalog = match &args.rule_groups {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let table = RuleGroupTable::from_json(&json)
                .with_context(|| format!("Invalid rule-group table in {}", path.display()))?;
            tracing::info!(groups = table.len(), path = %path.display(), "loaded rule groups");
            custom = WcagCatalog::with_rule_groups(table);
            &custom
        }
        None => WcagCatalog::full(),
    };

    let report = create_earl_report_with(&results, catalog)
        .context("Failed to build EARL report")?;

    let json = if args.compact {
        serde_json::to_string(&report)
    } else {
        serde_json::to_string_pretty(&report)
    }
    .context("Failed to serialize EARL report")?;

    match &args.out {
        Some(path) => {
            fs::write(path, &json).with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("  Written: {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}").context("Failed to write report to stdout")?;
        }
    }

    let summary = report.outcome_summary();
    eprintln!("Summary: {summary}");

    if args.fail_on_violation && summary.failed > 0 {
        eprintln!("Accessibility check FAILED: {} criterion(s) failed.", summary.failed);
        process::exit(1);
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read axe-core results from stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }
}
