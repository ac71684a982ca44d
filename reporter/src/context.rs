//! JSON-LD `@context` for WCAG-EM evaluation reports.
//!
//! Maps the short report keys (`defineScope`, `auditSample`, `outcome`, ...)
//! onto the WCAG-EM, EARL and Dublin Core vocabularies, so that a JSON-LD
//! processor expands the report into EARL assertions.

use serde_json::{json, Map, Value};

/// WCAG-EM methodology namespace.
pub const WCAGEM: &str = "http://www.w3.org/TR/WCAG-EM/#";
/// EARL namespace.
pub const EARL: &str = "http://www.w3.org/ns/earl#";
/// Dublin Core terms namespace.
pub const DCTERMS: &str = "http://purl.org/dc/terms/";

/// Builds the `@context` object embedded in every report.
#[must_use]
pub fn earl_context() -> Value {
    let mut ctx = Map::new();

    // Prefixes
    ctx.insert("reporter".to_owned(), json!("https://github.com/w3c/wcag-em-report-tool/"));
    ctx.insert("wcagem".to_owned(), json!(WCAGEM));

    // WCAG-EM steps
    for (term, step) in [
        ("Evaluation", "procedure"),
        ("defineScope", "step1"),
        ("scope", "step1a"),
    ] {
        ctx.insert(term.to_owned(), json!(format!("wcagem:{step}")));
    }
    ctx.insert(
        "step1b".to_owned(),
        json!({ "@id": "wcagem:step1b", "@type": "@id" }),
    );
    ctx.insert("conformanceTarget".to_owned(), json!("step1b"));
    for (term, step) in [
        ("accessibilitySupportBaseline", "step1c"),
        ("additionalEvaluationRequirements", "step1d"),
        ("exploreTarget", "step2"),
        ("essentialFunctionality", "step2b"),
        ("pageTypeVariety", "step2c"),
        ("technologiesReliedUpon", "step2d"),
        ("selectSample", "step3"),
        ("structuredSample", "step3a"),
        ("randomSample", "step3b"),
        ("Website", "website"),
        ("Webpage", "webpage"),
        ("auditSample", "step4"),
        ("reportFindings", "step5"),
        ("documentSteps", "step5a"),
        ("commissioner", "commissioner"),
        ("evaluator", "evaluator"),
        ("evaluationSpecifics", "evaluationSpecifics"),
    ] {
        ctx.insert(term.to_owned(), json!(format!("wcagem:{step}")));
    }

    // WCAG documents and conformance levels
    ctx.insert("WCAG".to_owned(), json!("http://www.w3.org/TR/WCAG/#"));
    ctx.insert("WCAG20".to_owned(), json!("http://www.w3.org/TR/WCAG20/#"));
    ctx.insert("WCAG21".to_owned(), json!("https://www.w3.org/TR/WCAG21/#"));
    ctx.insert("WCAG22".to_owned(), json!("https://www.w3.org/TR/WCAG22/#"));
    ctx.insert("WAI".to_owned(), json!("http://www.w3.org/WAI/"));
    ctx.insert("A".to_owned(), json!("WAI:WCAG2A-Conformance"));
    ctx.insert("AA".to_owned(), json!("WAI:WCAG2AA-Conformance"));
    ctx.insert("AAA".to_owned(), json!("WAI:WCAG2AAA-Conformance"));
    ctx.insert(
        "wcagVersion".to_owned(),
        json!("WAI:standards-guidelines/wcag/#versions"),
    );

    // EARL
    ctx.insert("earl".to_owned(), json!(EARL));
    for term in [
        "Assertion",
        "TestMode",
        "TestCriterion",
        "TestCase",
        "TestRequirement",
        "TestSubject",
        "TestResult",
        "OutcomeValue",
        "Pass",
        "Fail",
        "CannotTell",
        "NotApplicable",
        "NotTested",
        "assertedBy",
        "mode",
        "result",
        "subject",
        "test",
        "outcome",
    ] {
        ctx.insert(term.to_owned(), json!(format!("earl:{term}")));
    }

    // Dublin Core
    ctx.insert("dcterms".to_owned(), json!(DCTERMS));
    for term in ["title", "description", "summary", "date", "hasPart", "isPartOf"] {
        ctx.insert(term.to_owned(), json!(format!("dcterms:{term}")));
    }

    // JSON-LD keyword aliases
    ctx.insert("id".to_owned(), json!("@id"));
    ctx.insert("type".to_owned(), json!("@type"));
    ctx.insert("language".to_owned(), json!("@language"));

    Value::Object(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_defines_every_report_key() {
        let ctx = earl_context();
        for key in [
            "defineScope",
            "scope",
            "conformanceTarget",
            "wcagVersion",
            "exploreTarget",
            "technologiesReliedUpon",
            "selectSample",
            "auditSample",
            "reportFindings",
            "documentSteps",
            "evaluator",
            "mode",
            "subject",
            "test",
            "result",
            "outcome",
            "date",
            "title",
            "description",
            "id",
            "type",
            "language",
        ] {
            assert!(!ctx[key].is_null(), "Missing term '{key}' in @context");
        }
    }

    #[test]
    fn every_test_id_prefix_is_defined() {
        let ctx = earl_context();
        for version in earl_catalog::WcagVersion::ALL {
            assert!(
                ctx[version.id_prefix()].is_string(),
                "Missing prefix '{}' in @context",
                version.id_prefix()
            );
        }
    }

    #[test]
    fn earl_terms_expand_into_earl_namespace() {
        let ctx = earl_context();
        assert_eq!(ctx["earl"], EARL);
        assert_eq!(ctx["outcome"], "earl:outcome");
        assert_eq!(ctx["NotTested"], "earl:NotTested");
        assert_eq!(ctx["step1b"]["@type"], "@id");
    }
}
