//! The EARL report document and its assembly.
//!
//! [`assemble`] wraps the aggregated samples in the WCAG-EM boilerplate
//! (`defineScope`, `exploreTarget`, `selectSample`, `reportFindings`) and
//! derives the conformance target and WCAG version from the input tags.

use std::collections::BTreeSet;
use std::fmt;

use earl_catalog::{Level, WcagVersion};
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::axe::AxeResults;
use crate::context::earl_context;
use crate::outcome::Outcome;
use crate::sample::AuditSample;
use crate::wcag_id::wcag_versions_from_tags;

/// Technologies listed under `exploreTarget`.
pub const TECHNOLOGIES_RELIED_UPON: &[&str] = &["HTML", "CSS", "JavaScript", "axe core"];

/// Evaluator name recorded under `reportFindings`.
pub const EVALUATOR: &str = "Testevaluator";

/// A complete WCAG-EM evaluation report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EarlReport {
    /// JSON-LD context.
    #[serde(rename = "@context")]
    pub context: Value,
    /// Always `"en"`.
    pub language: &'static str,
    /// Always `"Evaluation"`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// WCAG-EM step 1.
    pub define_scope: DefineScope,
    /// WCAG-EM step 2.
    pub explore_target: ExploreTarget,
    /// WCAG-EM step 3.
    pub select_sample: SelectSample,
    /// WCAG-EM step 4: one assertion per WCAG criterion.
    pub audit_sample: Vec<AuditSample>,
    /// WCAG-EM step 5.
    pub report_findings: ReportFindings,
}

/// Evaluation scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefineScope {
    /// Always `"_:defineScope"`.
    pub id: &'static str,
    /// Title and description of the evaluated scope.
    pub scope: Scope,
    /// Best conformance level found in the tags; `""` when none.
    #[serde(serialize_with = "or_empty")]
    pub conformance_target: Option<Level>,
    /// Always empty.
    pub accessibility_support_baseline: String,
    /// Always empty.
    pub additional_evaluation_requirements: String,
    /// Reported WCAG version; `""` when no result carried a WCAG tag.
    #[serde(serialize_with = "or_empty")]
    pub wcag_version: Option<WcagVersion>,
}

/// Scope title and description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scope {
    /// `"Axe Report for <url>"`.
    pub title: String,
    /// Always empty.
    pub description: String,
}

/// Exploration metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExploreTarget {
    /// Always `"_:exploreTarget"`.
    pub id: &'static str,
    /// Always empty.
    pub essential_functionality: String,
    /// Always empty.
    pub page_type_variety: String,
    /// [`TECHNOLOGIES_RELIED_UPON`].
    pub technologies_relied_upon: &'static [&'static str],
}

/// Sample selection; automated runs select no pages explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectSample {
    /// Always `"_:selectSample"`.
    pub id: &'static str,
    /// Always empty.
    pub structured_sample: Vec<String>,
    /// Always empty.
    pub random_sample: Vec<String>,
}

/// Report findings metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFindings {
    /// Report date.
    pub date: NoteDatetime,
    /// Always empty.
    pub title: String,
    /// Always empty.
    pub summary: String,
    /// Always empty.
    pub commissioner: String,
    /// [`EVALUATOR`].
    pub evaluator: &'static str,
    /// References to the preceding WCAG-EM steps.
    pub document_steps: Vec<DocumentStep>,
    /// Always empty.
    pub evaluation_specifics: String,
}

/// A typed `NOTE-datetime` literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteDatetime {
    /// Always `"http://www.w3.org/TR/NOTE-datetime"`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// The timestamp.
    #[serde(rename = "@value")]
    pub value: String,
}

/// A reference to a report section by blank-node id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentStep {
    /// Blank-node id (e.g. `"_:defineScope"`).
    pub id: &'static str,
}

fn or_empty<T: Serialize, S: Serializer>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => v.serialize(serializer),
        None => serializer.serialize_str(""),
    }
}

/// Returns the conformance target announced by a tag set.
///
/// Tags are checked in the order `wcag2a`, `wcag2aa`, `wcag2aaa` and the
/// first present wins; only literal tag presence counts.
pub fn conformance_target<'t, I>(tags: I) -> Option<Level>
where
    I: IntoIterator<Item = &'t str>,
{
    let tags: BTreeSet<&str> = tags.into_iter().collect();
    [Level::A, Level::AA, Level::AAA]
        .into_iter()
        .find(|level| tags.contains(level.axe_tag()))
}

/// Returns the WCAG version reported for a tag set: the first version
/// [`wcag_versions_from_tags`] detects, so 2.1 is preferred over 2.0.
pub fn reported_wcag_version<I, S>(tags: I) -> Option<WcagVersion>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    wcag_versions_from_tags(tags).first().copied()
}

/// Wraps aggregated samples in the report boilerplate.
#[must_use]
pub fn assemble(results: &AxeResults, samples: Vec<AuditSample>) -> EarlReport {
    let tags = results.tag_set();
    EarlReport {
        context: earl_context(),
        language: "en",
        kind: "Evaluation",
        define_scope: DefineScope {
            id: "_:defineScope",
            scope: Scope {
                title: format!("Axe Report for {}", results.url),
                description: String::new(),
            },
            conformance_target: conformance_target(tags.iter().copied()),
            accessibility_support_baseline: String::new(),
            additional_evaluation_requirements: String::new(),
            wcag_version: reported_wcag_version(&tags),
        },
        explore_target: ExploreTarget {
            id: "_:exploreTarget",
            essential_functionality: String::new(),
            page_type_variety: String::new(),
            technologies_relied_upon: TECHNOLOGIES_RELIED_UPON,
        },
        select_sample: SelectSample {
            id: "_:selectSample",
            structured_sample: Vec::new(),
            random_sample: Vec::new(),
        },
        audit_sample: samples,
        report_findings: ReportFindings {
            date: NoteDatetime {
                kind: "http://www.w3.org/TR/NOTE-datetime",
                value: results.timestamp.clone(),
            },
            title: String::new(),
            summary: String::new(),
            commissioner: String::new(),
            evaluator: EVALUATOR,
            document_steps: ["_:about", "_:defineScope", "_:exploreTarget", "_:selectSample"]
                .into_iter()
                .map(|id| DocumentStep { id })
                .collect(),
            evaluation_specifics: String::new(),
        },
    }
}

impl EarlReport {
    /// Returns the conformance target, if any tag announced one.
    #[must_use]
    pub fn conformance_target(&self) -> Option<Level> {
        self.define_scope.conformance_target
    }

    /// Returns the reported WCAG version, if any result was WCAG-tagged.
    #[must_use]
    pub fn wcag_version(&self) -> Option<WcagVersion> {
        self.define_scope.wcag_version
    }

    /// Returns the sample for an EARL test id (e.g. `"WCAG20:text-equiv-all"`).
    #[must_use]
    pub fn sample(&self, test_id: &str) -> Option<&AuditSample> {
        self.audit_sample.iter().find(|s| s.test.id == test_id)
    }

    /// Counts samples per outcome.
    #[must_use]
    pub fn outcome_summary(&self) -> OutcomeSummary {
        let mut summary = OutcomeSummary::default();
        for sample in &self.audit_sample {
            match sample.outcome() {
                Outcome::Passed => summary.passed += 1,
                Outcome::Failed => summary.failed += 1,
                Outcome::Inapplicable => summary.inapplicable += 1,
                Outcome::Untested => summary.untested += 1,
            }
        }
        summary
    }
}

/// Sample counts per outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeSummary {
    /// Samples with `earl:passed`.
    pub passed: usize,
    /// Samples with `earl:failed`.
    pub failed: usize,
    /// Samples with `earl:inapplicable`.
    pub inapplicable: usize,
    /// Samples with `earl:untested`.
    pub untested: usize,
}

impl OutcomeSummary {
    /// Returns the total number of samples counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.inapplicable + self.untested
    }
}

impl fmt::Display for OutcomeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} passed, {} failed, {} inapplicable, {} untested",
            self.passed, self.failed, self.inapplicable, self.untested
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::axe::AxeRule;

    fn tagged(tags: &[&str]) -> AxeRule {
        AxeRule {
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            ..AxeRule::default()
        }
    }

    #[test]
    fn conformance_target_precedence() {
        assert_eq!(conformance_target(["wcag2a", "wcag111"]), Some(Level::A));
        assert_eq!(conformance_target(["wcag2aa", "wcag143"]), Some(Level::AA));
        assert_eq!(conformance_target(["wcag2aaa"]), Some(Level::AAA));
        assert_eq!(conformance_target(["wcag2aa", "wcag2a"]), Some(Level::A));
        assert_eq!(conformance_target(["wcag2aaa", "wcag2aa"]), Some(Level::AA));
        assert_eq!(conformance_target(["wcag21aa", "best-practice"]), None);
        assert_eq!(conformance_target(std::iter::empty()), None);
    }

    #[test]
    fn reported_version_prefers_wcag21() {
        assert_eq!(reported_wcag_version(["wcag2a"]), Some(WcagVersion::V2_0));
        assert_eq!(
            reported_wcag_version(["wcag2a", "wcag21aa"]),
            Some(WcagVersion::V2_1)
        );
        assert_eq!(reported_wcag_version(["best-practice"]), None);
    }

    #[test]
    fn tags_from_all_groups_count() {
        let results = AxeResults {
            url: "https://example.com/".to_owned(),
            timestamp: "2021-06-28T00:00:00.000Z".to_owned(),
            inapplicable: vec![tagged(&["wcag2aa"])],
            incomplete: vec![tagged(&["wcag21aa"])],
            ..AxeResults::default()
        };
        let report = assemble(&results, Vec::new());
        assert_eq!(report.conformance_target(), Some(Level::AA));
        assert_eq!(report.wcag_version(), Some(WcagVersion::V2_1));
    }

    #[test]
    fn boilerplate_shape() {
        let results = AxeResults {
            url: "https://example.com/".to_owned(),
            timestamp: "2021-06-28T00:00:00.000Z".to_owned(),
            ..AxeResults::default()
        };
        let value = serde_json::to_value(assemble(&results, Vec::new())).expect("serializable");
        assert_eq!(value["language"], "en");
        assert_eq!(value["type"], "Evaluation");
        assert_eq!(
            value["defineScope"],
            json!({
                "id": "_:defineScope",
                "scope": { "title": "Axe Report for https://example.com/", "description": "" },
                "conformanceTarget": "",
                "accessibilitySupportBaseline": "",
                "additionalEvaluationRequirements": "",
                "wcagVersion": ""
            })
        );
        assert_eq!(
            value["exploreTarget"]["technologiesReliedUpon"],
            json!(["HTML", "CSS", "JavaScript", "axe core"])
        );
        assert_eq!(
            value["selectSample"],
            json!({ "id": "_:selectSample", "structuredSample": [], "randomSample": [] })
        );
        assert_eq!(
            value["reportFindings"],
            json!({
                "date": {
                    "type": "http://www.w3.org/TR/NOTE-datetime",
                    "@value": "2021-06-28T00:00:00.000Z"
                },
                "title": "",
                "summary": "",
                "commissioner": "",
                "evaluator": "Testevaluator",
                "documentSteps": [
                    { "id": "_:about" },
                    { "id": "_:defineScope" },
                    { "id": "_:exploreTarget" },
                    { "id": "_:selectSample" }
                ],
                "evaluationSpecifics": ""
            })
        );
        assert_eq!(value["auditSample"], json!([]));
        assert!(value["@context"].is_object());
    }

    #[test]
    fn computed_scope_fields_serialize_as_strings() {
        let results = AxeResults {
            passes: vec![tagged(&["wcag2aa", "wcag21aa"])],
            ..AxeResults::default()
        };
        let value = serde_json::to_value(assemble(&results, Vec::new())).expect("serializable");
        assert_eq!(value["defineScope"]["conformanceTarget"], "AA");
        assert_eq!(value["defineScope"]["wcagVersion"], "2.1");
    }

    #[test]
    fn summary_display() {
        let summary = OutcomeSummary {
            passed: 3,
            failed: 1,
            inapplicable: 2,
            untested: 4,
        };
        assert_eq!(summary.total(), 10);
        assert_eq!(
            summary.to_string(),
            "3 passed, 1 failed, 2 inapplicable, 4 untested"
        );
    }
}
