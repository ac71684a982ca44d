//! axe-core result model.
//!
//! Mirrors the JSON an axe-core run produces (`axe.run()` with the default
//! `v1`/`v2` reporters). Only the fields the EARL conversion reads are
//! modelled; unknown fields are ignored and missing lists default to empty.

use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;

use crate::error::ReportError;

/// Top-level result of one axe-core run against one page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxeResults {
    /// URL of the tested page.
    #[serde(default)]
    pub url: String,
    /// ISO-8601 timestamp of the run.
    #[serde(default)]
    pub timestamp: String,
    /// Rules with at least one failing node.
    #[serde(default)]
    pub violations: Vec<AxeRule>,
    /// Rules whose nodes all passed.
    #[serde(default)]
    pub passes: Vec<AxeRule>,
    /// Rules needing manual review.
    #[serde(default)]
    pub incomplete: Vec<AxeRule>,
    /// Rules that matched no element.
    #[serde(default)]
    pub inapplicable: Vec<AxeRule>,
}

impl AxeResults {
    /// Parses axe-core JSON output.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Input`] if the document is not valid JSON or
    /// a present field has the wrong shape.
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Flattens the four result groups into raw results, in the order
    /// violations, passes, incomplete, inapplicable.
    pub fn raw_results(&self) -> impl Iterator<Item = RawResult<'_>> + '_ {
        with_status(&self.violations, ResultStatus::Failed)
            .chain(with_status(&self.passes, ResultStatus::Passed))
            .chain(with_status(&self.incomplete, ResultStatus::Incomplete))
            .chain(with_status(&self.inapplicable, ResultStatus::Inapplicable))
    }

    /// Returns the distinct tags used by any rule in any group.
    #[must_use]
    pub fn tag_set(&self) -> BTreeSet<&str> {
        self.raw_results()
            .flat_map(|r| r.rule.tags.iter().map(String::as_str))
            .collect()
    }

    /// Returns the total number of rules across all groups.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.violations.len() + self.passes.len() + self.incomplete.len() + self.inapplicable.len()
    }
}

fn with_status(rules: &[AxeRule], status: ResultStatus) -> impl Iterator<Item = RawResult<'_>> {
    rules.iter().map(move |rule| RawResult { rule, status })
}

/// One rule evaluated against the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxeRule {
    /// Rule identifier (e.g. `"image-alt"`).
    #[serde(default)]
    pub id: String,
    /// What the rule checks.
    #[serde(default)]
    pub description: String,
    /// Short help text.
    #[serde(default)]
    pub help: String,
    /// Documentation URL.
    #[serde(default)]
    pub help_url: String,
    /// Classification tags (`"wcag2a"`, `"wcag111"`, `"best-practice"`, ...).
    #[serde(default)]
    pub tags: Vec<String>,
    /// Per-element findings in document order.
    #[serde(default)]
    pub nodes: Vec<NodeResult>,
}

/// Findings for one element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NodeResult {
    /// Selector path to the element.
    #[serde(default)]
    pub target: Target,
    /// Checks that must all pass.
    #[serde(default)]
    pub all: Vec<CheckResult>,
    /// Checks of which one must pass.
    #[serde(default)]
    pub any: Vec<CheckResult>,
    /// Checks that must all fail.
    #[serde(default)]
    pub none: Vec<CheckResult>,
}

impl NodeResult {
    /// Iterates the `all`, `any` and `none` checks in that order.
    pub fn checks(&self) -> impl Iterator<Item = &CheckResult> {
        self.all.iter().chain(&self.any).chain(&self.none)
    }
}

/// One check evaluated on an element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CheckResult {
    /// Check identifier.
    #[serde(default)]
    pub id: String,
    /// Human-readable outcome message.
    #[serde(default)]
    pub message: String,
}

/// A node target: a bare selector or a selector list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Target {
    /// A single CSS selector.
    Selector(String),
    /// A list of selectors, one per frame or shadow-root boundary.
    List(Vec<Selector>),
}

impl Default for Target {
    fn default() -> Self {
        Target::List(Vec::new())
    }
}

/// One entry of a [`Target::List`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Selector {
    /// A CSS selector.
    Css(String),
    /// Selectors crossing shadow-DOM boundaries.
    Shadow(Vec<String>),
}

/// Selectors are joined with `,` at every nesting level.
impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Selector(s) => f.write_str(s),
            Target::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    match item {
                        Selector::Css(s) => f.write_str(s)?,
                        Selector::Shadow(parts) => f.write_str(&parts.join(","))?,
                    }
                }
                Ok(())
            }
        }
    }
}

/// The group a rule was reported in, as an EARL-style status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultStatus {
    /// Reported under `violations`.
    Failed,
    /// Reported under `passes`.
    Passed,
    /// Reported under `incomplete`.
    Incomplete,
    /// Reported under `inapplicable`.
    Inapplicable,
}

impl ResultStatus {
    /// Returns the lowercase status name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ResultStatus::Failed => "failed",
            ResultStatus::Passed => "passed",
            ResultStatus::Incomplete => "incomplete",
            ResultStatus::Inapplicable => "inapplicable",
        }
    }
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rule paired with the status implied by its result group.
#[derive(Debug, Clone, Copy)]
pub struct RawResult<'a> {
    /// The rule as reported by axe-core.
    pub rule: &'a AxeRule,
    /// Status derived from the group the rule appeared in.
    pub status: ResultStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_groups_default_to_empty() {
        let results = AxeResults::from_json(r#"{ "url": "https://example.com/" }"#)
            .expect("valid input");
        assert_eq!(results.rule_count(), 0);
        assert_eq!(results.timestamp, "");
        assert_eq!(results.raw_results().count(), 0);
    }

    #[test]
    fn raw_results_follow_group_order() {
        let rule = |id: &str| AxeRule {
            id: id.to_owned(),
            ..AxeRule::default()
        };
        let results = AxeResults {
            violations: vec![rule("a")],
            passes: vec![rule("b"), rule("c")],
            incomplete: vec![rule("d")],
            inapplicable: vec![rule("e")],
            ..AxeResults::default()
        };
        let seen: Vec<(&str, ResultStatus)> = results
            .raw_results()
            .map(|r| (r.rule.id.as_str(), r.status))
            .collect();
        assert_eq!(
            seen,
            vec![
                ("a", ResultStatus::Failed),
                ("b", ResultStatus::Passed),
                ("c", ResultStatus::Passed),
                ("d", ResultStatus::Incomplete),
                ("e", ResultStatus::Inapplicable),
            ]
        );
    }

    #[test]
    fn targets_accept_all_axe_shapes() {
        let json = r##"{
            "violations": [{
                "id": "x",
                "nodes": [
                    { "target": "#a" },
                    { "target": ["#b", "#c"] },
                    { "target": [["my-el", "#inner"], "#d"] },
                    {}
                ]
            }]
        }"##;
        let results = AxeResults::from_json(json).expect("valid input");
        let targets: Vec<String> = results.violations[0]
            .nodes
            .iter()
            .map(|n| n.target.to_string())
            .collect();
        assert_eq!(targets, ["#a", "#b,#c", "my-el,#inner,#d", ""]);
    }

    #[test]
    fn checks_are_ordered_all_any_none() {
        let check = |m: &str| CheckResult {
            id: String::new(),
            message: m.to_owned(),
        };
        let node = NodeResult {
            target: Target::Selector("img".to_owned()),
            all: vec![check("all")],
            any: vec![check("any")],
            none: vec![check("none")],
        };
        let messages: Vec<&str> = node.checks().map(|c| c.message.as_str()).collect();
        assert_eq!(messages, ["all", "any", "none"]);
    }

    #[test]
    fn tag_set_is_distinct() {
        fn rule(tags: &[&str]) -> AxeRule {
            AxeRule {
                tags: tags.iter().map(|t| (*t).to_owned()).collect(),
                ..AxeRule::default()
            }
        }
        let results = AxeResults {
            violations: vec![rule(&["wcag2a", "wcag111"])],
            inapplicable: vec![rule(&["wcag2a", "best-practice"])],
            ..AxeResults::default()
        };
        let tags: Vec<&str> = results.tag_set().into_iter().collect();
        assert_eq!(tags, ["best-practice", "wcag111", "wcag2a"]);
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert!(matches!(
            AxeResults::from_json(r#"{ "violations": {} }"#),
            Err(ReportError::Input(_))
        ));
    }
}
