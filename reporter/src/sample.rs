//! EARL assertions ("audit samples"), one per WCAG success criterion.
//!
//! [`SampleSet::initialize`] builds the full skeleton every report carries:
//! one untested sample per catalog criterion, in catalog order, plus a
//! slug index used by aggregation to find a criterion's sample.

use std::collections::HashMap;

use earl_catalog::WcagCatalog;
use serde::Serialize;

use crate::axe::AxeResults;
use crate::outcome::Outcome;

/// Page and run metadata shared by every sample of one report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubjectContext {
    /// URL of the tested page.
    pub url: String,
    /// ISO-8601 timestamp of the scan.
    pub timestamp: String,
}

impl From<&AxeResults> for SubjectContext {
    fn from(results: &AxeResults) -> Self {
        Self {
            url: results.url.clone(),
            timestamp: results.timestamp.clone(),
        }
    }
}

/// An `earl:Assertion` about one WCAG criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditSample {
    /// Always `"Assertion"`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Scan timestamp.
    pub date: String,
    /// Always automatic.
    pub mode: TestMode,
    /// The page under test.
    pub subject: TestSubject,
    /// The WCAG criterion.
    pub test: TestCriterion,
    /// Aggregated outcome and description.
    pub result: TestResult,
}

/// The `earl:mode` node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestMode {
    /// Always `"TestMode"`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Always `"earl:automatic"`.
    #[serde(rename = "@value")]
    pub value: &'static str,
}

impl TestMode {
    /// The automatic test mode used for every axe-derived assertion.
    pub const AUTOMATIC: TestMode = TestMode {
        kind: "TestMode",
        value: "earl:automatic",
    };
}

/// The `earl:subject` node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestSubject {
    /// Blank-node id shared by all samples.
    pub id: &'static str,
    /// `["TestSubject", "Website"]`.
    #[serde(rename = "type")]
    pub types: [&'static str; 2],
    /// Scan timestamp.
    pub date: String,
    /// Always empty.
    pub description: String,
    /// The page URL.
    pub title: String,
}

/// The `earl:test` node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCriterion {
    /// Criterion id, `WCAG<ver-no-dot>:<slug>`.
    pub id: String,
    /// `["TestCriterion", "TestRequirement"]`.
    #[serde(rename = "type")]
    pub types: [&'static str; 2],
    /// Scan timestamp.
    pub date: String,
}

/// The `earl:result` node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestResult {
    /// Always `"TestResult"`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Scan timestamp.
    pub date: String,
    /// Accumulated findings text.
    pub description: String,
    /// Aggregated outcome.
    pub outcome: Outcome,
}

impl AuditSample {
    /// Creates an untested sample for `test_id`.
    #[must_use]
    pub fn untested(test_id: String, subject: &SubjectContext) -> Self {
        let date = subject.timestamp.clone();
        Self {
            kind: "Assertion",
            date: date.clone(),
            mode: TestMode::AUTOMATIC,
            subject: TestSubject {
                id: "_:subject_1",
                types: ["TestSubject", "Website"],
                date: date.clone(),
                description: String::new(),
                title: subject.url.clone(),
            },
            test: TestCriterion {
                id: test_id,
                types: ["TestCriterion", "TestRequirement"],
                date: date.clone(),
            },
            result: TestResult {
                kind: "TestResult",
                date,
                description: String::new(),
                outcome: Outcome::Untested,
            },
        }
    }

    /// Returns the criterion slug (the part of the test id after `:`).
    #[must_use]
    pub fn slug(&self) -> &str {
        self.test
            .id
            .split_once(':')
            .map_or(self.test.id.as_str(), |(_, slug)| slug)
    }

    /// Returns the aggregated outcome.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.result.outcome
    }
}

/// The working set of samples for one report, indexed by criterion slug.
#[derive(Debug, Clone)]
pub struct SampleSet {
    samples: Vec<AuditSample>,
    by_slug: HashMap<String, usize>,
}

impl SampleSet {
    /// Creates one untested sample per catalog criterion, in catalog order.
    ///
    /// The slug index points at the first sample carrying a slug, so a slug
    /// shared by several versions (WCAG 2.1 and 2.2 reuse most of them)
    /// resolves to its earliest catalog entry.
    #[must_use]
    pub fn initialize(catalog: &WcagCatalog, subject: &SubjectContext) -> Self {
        let samples: Vec<AuditSample> = catalog
            .all_criteria()
            .map(|(version, criterion)| {
                AuditSample::untested(
                    format!("{}:{}", version.id_prefix(), criterion.id),
                    subject,
                )
            })
            .collect();
        let mut by_slug = HashMap::with_capacity(samples.len());
        for (i, sample) in samples.iter().enumerate() {
            by_slug.entry(sample.slug().to_owned()).or_insert(i);
        }
        Self { samples, by_slug }
    }

    /// Returns the sample for a criterion slug.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&AuditSample> {
        self.by_slug.get(slug).map(|&i| &self.samples[i])
    }

    /// Returns the sample for a criterion slug, mutably.
    pub fn get_mut(&mut self, slug: &str) -> Option<&mut AuditSample> {
        let i = *self.by_slug.get(slug)?;
        self.samples.get_mut(i)
    }

    /// Returns the samples in catalog order.
    #[must_use]
    pub fn samples(&self) -> &[AuditSample] {
        &self.samples
    }

    /// Consumes the set, returning the samples in catalog order.
    #[must_use]
    pub fn into_samples(self) -> Vec<AuditSample> {
        self.samples
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if there are no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn subject() -> SubjectContext {
        SubjectContext {
            url: "https://example.com/".to_owned(),
            timestamp: "2021-06-28T00:00:00.000Z".to_owned(),
        }
    }

    #[test]
    fn one_sample_per_criterion_in_catalog_order() {
        let catalog = WcagCatalog::full();
        let set = SampleSet::initialize(catalog, &subject());
        assert_eq!(set.len(), catalog.criterion_count());
        let expected: Vec<String> = catalog
            .all_criteria()
            .map(|(v, c)| format!("{}:{}", v.id_prefix(), c.id))
            .collect();
        let actual: Vec<&str> = set.samples().iter().map(|s| s.test.id.as_str()).collect();
        assert_eq!(actual, expected);
        assert!(set.samples().iter().all(|s| s.outcome() == Outcome::Untested));
        assert!(set.samples().iter().all(|s| s.result.description.is_empty()));
    }

    #[test]
    fn shared_slugs_resolve_to_first_catalog_entry() {
        let set = SampleSet::initialize(WcagCatalog::full(), &subject());
        let sample = set.get("non-text-content").map(|s| s.test.id.as_str());
        assert_eq!(sample, Some("WCAG21:non-text-content"));
        let sample = set.get("target-size-minimum").map(|s| s.test.id.as_str());
        assert_eq!(sample, Some("WCAG22:target-size-minimum"));
        assert!(set.get("no-such-criterion").is_none());
    }

    #[test]
    fn sample_serializes_to_earl_assertion() {
        let sample = AuditSample::untested("WCAG21:orientation".to_owned(), &subject());
        let value = serde_json::to_value(&sample).expect("serializable");
        let date = "2021-06-28T00:00:00.000Z";
        assert_eq!(
            value,
            json!({
                "type": "Assertion",
                "date": date,
                "mode": { "type": "TestMode", "@value": "earl:automatic" },
                "subject": {
                    "id": "_:subject_1",
                    "type": ["TestSubject", "Website"],
                    "date": date,
                    "description": "",
                    "title": "https://example.com/"
                },
                "test": {
                    "id": "WCAG21:orientation",
                    "type": ["TestCriterion", "TestRequirement"],
                    "date": date
                },
                "result": {
                    "type": "TestResult",
                    "date": date,
                    "description": "",
                    "outcome": { "id": "earl:untested", "type": ["OutcomeValue", "NotTested"] }
                }
            })
        );
    }

    #[test]
    fn slug_is_the_part_after_the_colon() {
        let sample = AuditSample::untested("WCAG20:text-equiv-all".to_owned(), &subject());
        assert_eq!(sample.slug(), "text-equiv-all");
    }
}
