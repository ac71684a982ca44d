//! `wcag-catalog`: prints the bundled WCAG criterion inventory or the
//! axe-core rule-group table.
//!
//! **Usage:**
//! ```
//! wcag-catalog [--version <2.0|2.1|2.2>] [--rule-groups]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use anyhow::{Context, Result};
use clap::Parser;
use earl_catalog::{WcagCatalog, WcagVersion};

/// Inspect the bundled WCAG catalog.
#[derive(Parser)]
#[command(name = "wcag-catalog", about = "Print the bundled WCAG catalog")]
struct Args {
    /// Only list criteria of this WCAG version.
    #[arg(long)]
    version: Option<WcagVersion>,

    /// Print the rule-group table as JSON instead of the criteria.
    #[arg(long)]
    rule_groups: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let catalog = WcagCatalog::full();

    if args.rule_groups {
        let json = serde_json::to_string_pretty(catalog.rule_groups.groups())
            .context("Failed to serialize rule groups")?;
        println!("{json}");
        return Ok(());
    }

    println!(
        "WCAG catalog: {} criteria, {} rule groups",
        catalog.criterion_count(),
        catalog.rule_groups.len()
    );

    for group in &catalog.groups {
        if args.version.is_some_and(|v| v != group.version) {
            continue;
        }
        println!();
        println!("WCAG {} ({} criteria)", group.version, group.criteria.len());
        for criterion in group.criteria {
            println!(
                "  {:<7} {:<3} {}",
                criterion.num,
                criterion.level.as_str(),
                group.test_id(criterion)
            );
        }
    }

    Ok(())
}
