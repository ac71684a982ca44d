//! axe-core results to WCAG-EM / EARL JSON-LD.
//!
//! The `earl-reporter` crate turns one axe-core run into a conformance report
//! holding one `earl:Assertion` per WCAG 2.0, 2.1 and 2.2 success criterion.
//! Each rule result is routed to criteria through its WCAG tags and its
//! documentation URL, and the first definitive outcome a criterion receives
//! is kept.
//!
//! # Entry Point
//!
//! ```
//! use earl_reporter::{create_earl_report, AxeResults, Outcome};
//!
//! let results = AxeResults::from_json(r#"{
//!     "url": "https://example.com/",
//!     "timestamp": "2021-06-28T00:00:00.000Z",
//!     "violations": [{
//!         "id": "image-alt",
//!         "helpUrl": "https://dequeuniversity.com/rules/axe/4.4/image-alt?application=axeAPI",
//!         "tags": ["wcag2a", "wcag111"],
//!         "nodes": []
//!     }]
//! }"#).unwrap();
//!
//! let report = create_earl_report(&results).unwrap();
//! let sample = report.sample("WCAG20:text-equiv-all").unwrap();
//! assert_eq!(sample.outcome(), Outcome::Failed);
//! assert_eq!(report.outcome_summary().failed, 1);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod aggregate;
pub mod axe;
pub mod context;
pub mod error;
pub mod outcome;
pub mod report;
pub mod sample;
pub mod wcag_id;

pub use aggregate::{aggregate, describe_result};
pub use axe::{AxeResults, AxeRule, CheckResult, NodeResult, RawResult, ResultStatus, Target};
pub use earl_catalog::{Level, WcagCatalog, WcagVersion};
pub use error::ReportError;
pub use outcome::Outcome;
pub use report::{assemble, EarlReport, OutcomeSummary};
pub use sample::{AuditSample, SampleSet, SubjectContext};
pub use wcag_id::CriterionIdExtractor;

/// Builds a report from axe-core results using the bundled catalog.
///
/// # Errors
///
/// Returns [`ReportError::InvalidUrl`] if a WCAG-tagged result carries a
/// documentation URL that cannot be parsed.
pub fn create_earl_report(results: &AxeResults) -> Result<EarlReport, ReportError> {
    create_earl_report_with(results, WcagCatalog::full())
}

/// Builds a report from axe-core results against `catalog`.
///
/// # Errors
///
/// Returns [`ReportError::InvalidUrl`] if a WCAG-tagged result carries a
/// documentation URL that cannot be parsed.
pub fn create_earl_report_with(
    results: &AxeResults,
    catalog: &WcagCatalog,
) -> Result<EarlReport, ReportError> {
    let samples = SampleSet::initialize(catalog, &SubjectContext::from(results));
    let samples = aggregate(
        samples,
        results.raw_results(),
        &CriterionIdExtractor::new(catalog),
    )?;
    let report = assemble(results, samples.into_samples());

    let summary = report.outcome_summary();
    tracing::info!(
        url = %results.url,
        rules = results.rule_count(),
        passed = summary.passed,
        failed = summary.failed,
        inapplicable = summary.inapplicable,
        untested = summary.untested,
        "EARL report assembled"
    );
    Ok(report)
}
