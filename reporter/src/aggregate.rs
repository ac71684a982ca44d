//! Folding axe-core rule results onto audit samples.

use crate::axe::RawResult;
use crate::error::ReportError;
use crate::outcome::Outcome;
use crate::sample::SampleSet;
use crate::wcag_id::{wcag_versions_from_tags, CriterionIdExtractor};

/// Separator between node blocks, and between successive result blocks
/// appended to one sample.
const DIVIDER: &str = "\n---\n";

/// Folds `results` onto `samples` in input order and returns the updated set.
///
/// For every result whose tags name a WCAG version, each criterion id its
/// documentation URL maps to selects a sample by slug. The sample's outcome
/// is combined with the result's (see [`Outcome::combine`]) and the result's
/// findings are appended to the sample description, even when the outcome
/// stays unchanged. Results without WCAG tags, pages without a rule group and
/// ids without a sample contribute nothing.
///
/// # Errors
///
/// Returns [`ReportError::InvalidUrl`] as soon as a WCAG-tagged result has a
/// documentation URL that cannot be parsed; the partially folded set is
/// dropped.
pub fn aggregate<'r, I>(
    mut samples: SampleSet,
    results: I,
    extractor: &CriterionIdExtractor<'_>,
) -> Result<SampleSet, ReportError>
where
    I: IntoIterator<Item = RawResult<'r>>,
{
    for result in results {
        let versions = wcag_versions_from_tags(&result.rule.tags);
        if versions.is_empty() {
            tracing::debug!(rule = %result.rule.id, "no WCAG tags, skipping");
            continue;
        }

        let mut ids = Vec::new();
        for version in versions {
            ids.extend(extractor.criterion_ids(&result.rule.help_url, version)?);
        }

        let outcome = Outcome::from(result.status);
        let block = describe_result(&result);
        for id in &ids {
            let slug = id.split_once(':').map_or(id.as_str(), |(_, slug)| slug);
            let Some(sample) = samples.get_mut(slug) else {
                tracing::debug!(rule = %result.rule.id, id = %id, "no sample for criterion");
                continue;
            };
            sample.result.outcome = sample.result.outcome.combine(outcome);
            append_block(&mut sample.result.description, &block);
        }
    }
    Ok(samples)
}

/// Renders a result's node findings as text.
///
/// Each node contributes a `**<status>**` line, its target selector and one
/// `- <message>` line per check (`all`, then `any`, then `none`). A node
/// without checks keeps an empty line in place of its messages. Node blocks
/// are separated by a `---` line and trailing whitespace is trimmed. A
/// result without nodes renders empty.
#[must_use]
pub fn describe_result(result: &RawResult<'_>) -> String {
    let rendered = result
        .rule
        .nodes
        .iter()
        .map(|node| {
            let messages = node
                .checks()
                .map(|check| format!("- {}", check.message))
                .collect::<Vec<_>>()
                .join("\n");
            format!("**{}**\n{}\n{}", result.status, node.target, messages.trim())
        })
        .collect::<Vec<_>>()
        .join(DIVIDER);
    rendered.trim_end().to_owned()
}

fn append_block(description: &mut String, block: &str) {
    if block.is_empty() {
        return;
    }
    if !description.is_empty() {
        description.push_str(DIVIDER);
    }
    description.push_str(block);
}

#[cfg(test)]
mod tests {
    use earl_catalog::WcagCatalog;

    use super::*;
    use crate::axe::{AxeResults, AxeRule, CheckResult, NodeResult, ResultStatus, Target};
    use crate::sample::SubjectContext;

    const IMAGE_ALT: &str = "https://dequeuniversity.com/rules/axe/4.4/image-alt?application=axeAPI";
    const AUTOCOMPLETE: &str =
        "https://dequeuniversity.com/rules/axe/4.4/autocomplete-valid?application=axeAPI";

    fn node(target: &str, messages: &[&str]) -> NodeResult {
        NodeResult {
            target: Target::Selector(target.to_owned()),
            any: messages
                .iter()
                .map(|m| CheckResult {
                    id: String::new(),
                    message: (*m).to_owned(),
                })
                .collect(),
            ..NodeResult::default()
        }
    }

    fn rule(id: &str, help_url: &str, tags: &[&str], nodes: Vec<NodeResult>) -> AxeRule {
        AxeRule {
            id: id.to_owned(),
            help_url: help_url.to_owned(),
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            nodes,
            ..AxeRule::default()
        }
    }

    fn run(results: &AxeResults) -> Result<SampleSet, ReportError> {
        let catalog = WcagCatalog::full();
        let samples = SampleSet::initialize(catalog, &SubjectContext::from(results));
        aggregate(
            samples,
            results.raw_results(),
            &CriterionIdExtractor::new(catalog),
        )
    }

    #[test]
    fn failed_image_alt_marks_wcag20_sample() {
        let results = AxeResults {
            violations: vec![rule(
                "image-alt",
                IMAGE_ALT,
                &["cat.text-alternatives", "wcag2a", "wcag111"],
                vec![node("img.hero", &["Element does not have an alt attribute"])],
            )],
            ..AxeResults::default()
        };
        let set = run(&results).expect("aggregation succeeds");
        let sample = set.get("text-equiv-all").expect("sample exists");
        assert_eq!(sample.test.id, "WCAG20:text-equiv-all");
        assert_eq!(sample.outcome(), Outcome::Failed);
        assert_eq!(
            sample.result.description,
            "**failed**\nimg.hero\n- Element does not have an alt attribute"
        );
        let wcag21 = set.get("non-text-content").expect("sample exists");
        assert_eq!(wcag21.outcome(), Outcome::Untested);
    }

    #[test]
    fn wcag21_tags_fan_out_to_both_versions() {
        let results = AxeResults {
            passes: vec![rule(
                "autocomplete-valid",
                AUTOCOMPLETE,
                &["cat.forms", "wcag21aa", "wcag135"],
                vec![node("#email", &["the autocomplete attribute is correctly formatted"])],
            )],
            ..AxeResults::default()
        };
        let set = run(&results).expect("aggregation succeeds");
        assert_eq!(
            set.get("identify-input-purpose").map(|s| s.outcome()),
            Some(Outcome::Passed)
        );
        let touched = set
            .samples()
            .iter()
            .filter(|s| s.outcome() != Outcome::Untested)
            .count();
        assert_eq!(touched, 1);
    }

    #[test]
    fn sticky_outcome_still_appends_description() {
        let results = AxeResults {
            violations: vec![rule(
                "image-alt",
                IMAGE_ALT,
                &["wcag2a"],
                vec![node("img", &["missing alt"])],
            )],
            passes: vec![rule(
                "role-img-alt",
                "https://dequeuniversity.com/rules/axe/4.4/role-img-alt",
                &["wcag2a"],
                vec![node("[role=img]", &["has a label"])],
            )],
            ..AxeResults::default()
        };
        let set = run(&results).expect("aggregation succeeds");
        let sample = set.get("text-equiv-all").expect("sample exists");
        assert_eq!(sample.outcome(), Outcome::Failed);
        assert_eq!(
            sample.result.description,
            "**failed**\nimg\n- missing alt\n---\n**passed**\n[role=img]\n- has a label"
        );
    }

    #[test]
    fn inapplicable_does_not_downgrade_passed() {
        let results = AxeResults {
            passes: vec![rule("image-alt", IMAGE_ALT, &["wcag2a"], vec![node("img", &[])])],
            inapplicable: vec![rule(
                "object-alt",
                "https://dequeuniversity.com/rules/axe/4.4/object-alt",
                &["wcag2a"],
                vec![],
            )],
            ..AxeResults::default()
        };
        let set = run(&results).expect("aggregation succeeds");
        let sample = set.get("text-equiv-all").expect("sample exists");
        assert_eq!(sample.outcome(), Outcome::Passed);
        assert_eq!(sample.result.description, "**passed**\nimg");
    }

    #[test]
    fn inapplicable_is_replaced_by_later_pass() {
        let object_alt = rule(
            "object-alt",
            "https://dequeuniversity.com/rules/axe/4.4/object-alt",
            &["wcag2a"],
            vec![],
        );
        let image_alt = rule("image-alt", IMAGE_ALT, &["wcag2a"], vec![node("img", &[])]);
        let ordered = vec![
            RawResult {
                rule: &object_alt,
                status: ResultStatus::Inapplicable,
            },
            RawResult {
                rule: &image_alt,
                status: ResultStatus::Passed,
            },
        ];
        let catalog = WcagCatalog::full();
        let samples = SampleSet::initialize(catalog, &SubjectContext::default());
        let set = aggregate(samples, ordered, &CriterionIdExtractor::new(catalog))
            .expect("aggregation succeeds");
        assert_eq!(
            set.get("text-equiv-all").map(|s| s.outcome()),
            Some(Outcome::Passed)
        );
    }

    #[test]
    fn incomplete_results_leave_untested() {
        let results = AxeResults {
            incomplete: vec![rule(
                "color-contrast",
                "https://dequeuniversity.com/rules/axe/4.4/color-contrast",
                &["wcag2aa", "wcag143"],
                vec![node("p", &["could not determine background"])],
            )],
            ..AxeResults::default()
        };
        let set = run(&results).expect("aggregation succeeds");
        let sample = set
            .get("visual-audio-contrast-contrast")
            .expect("sample exists");
        assert_eq!(sample.outcome(), Outcome::Untested);
        assert!(sample.result.description.starts_with("**incomplete**\np"));
    }

    #[test]
    fn untagged_results_are_dropped_before_url_parsing() {
        let results = AxeResults {
            violations: vec![rule("region", "not a url", &["best-practice"], vec![node("div", &[])])],
            ..AxeResults::default()
        };
        let set = run(&results).expect("aggregation succeeds");
        assert!(set.samples().iter().all(|s| s.outcome() == Outcome::Untested));
        assert!(set.samples().iter().all(|s| s.result.description.is_empty()));
    }

    #[test]
    fn invalid_help_url_aborts() {
        let results = AxeResults {
            violations: vec![rule("image-alt", "image-alt.html", &["wcag2a"], vec![])],
            ..AxeResults::default()
        };
        assert!(matches!(run(&results), Err(ReportError::InvalidUrl { .. })));
    }

    #[test]
    fn node_without_checks_keeps_blank_line() {
        let image_alt = rule(
            "image-alt",
            IMAGE_ALT,
            &["wcag2a"],
            vec![node("img.a", &[]), node("img.b", &["m"]), node("img.c", &[])],
        );
        let raw = RawResult {
            rule: &image_alt,
            status: ResultStatus::Passed,
        };
        assert_eq!(
            describe_result(&raw),
            "**passed**\nimg.a\n\n---\n**passed**\nimg.b\n- m\n---\n**passed**\nimg.c"
        );
    }

    #[test]
    fn describe_multiple_nodes() {
        let link_name = rule(
            "link-name",
            "https://dequeuniversity.com/rules/axe/4.4/link-name",
            &["wcag2a"],
            vec![node("a.one", &["first", "second"]), node("a.two", &["third"])],
        );
        let raw = RawResult {
            rule: &link_name,
            status: ResultStatus::Failed,
        };
        assert_eq!(
            describe_result(&raw),
            "**failed**\na.one\n- first\n- second\n---\n**failed**\na.two\n- third"
        );
    }
}
