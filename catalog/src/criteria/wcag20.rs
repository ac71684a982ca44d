//! WCAG 2.0 success criteria.
//!
//! Identifiers are the fragment ids of <https://www.w3.org/TR/WCAG20/>, which
//! predate the descriptive slugs introduced with WCAG 2.1.

use crate::model::{Criterion, CriterionGroup, Level::*, WcagVersion};

/// Returns the WCAG 2.0 criterion group.
#[must_use]
pub fn group() -> CriterionGroup {
    CriterionGroup {
        version: WcagVersion::V2_0,
        criteria: CRITERIA,
    }
}

const CRITERIA: &[Criterion] = &[
    Criterion::new("1.1.1", "text-equiv-all", A),
    Criterion::new("1.2.1", "media-equiv-av-only-alt", A),
    Criterion::new("1.2.2", "media-equiv-captions", A),
    Criterion::new("1.2.3", "media-equiv-audio-desc", A),
    Criterion::new("1.2.4", "media-equiv-real-time-captions", AA),
    Criterion::new("1.2.5", "media-equiv-audio-desc-only", AA),
    Criterion::new("1.2.6", "media-equiv-sign", AAA),
    Criterion::new("1.2.7", "media-equiv-extended-ad", AAA),
    Criterion::new("1.2.8", "media-equiv-text-doc", AAA),
    Criterion::new("1.2.9", "media-equiv-live-audio-only", AAA),
    Criterion::new("1.3.1", "content-structure-separation-programmatic", A),
    Criterion::new("1.3.2", "content-structure-separation-sequence", A),
    Criterion::new("1.3.3", "content-structure-separation-understanding", A),
    Criterion::new("1.4.1", "visual-audio-contrast-without-color", A),
    Criterion::new("1.4.2", "visual-audio-contrast-dis-audio", A),
    Criterion::new("1.4.3", "visual-audio-contrast-contrast", AA),
    Criterion::new("1.4.4", "visual-audio-contrast-scale", AA),
    Criterion::new("1.4.5", "visual-audio-contrast-text-presentation", AA),
    Criterion::new("1.4.6", "visual-audio-contrast7", AAA),
    Criterion::new("1.4.7", "visual-audio-contrast-noaudio", AAA),
    Criterion::new("1.4.8", "visual-audio-contrast-visual-presentation", AAA),
    Criterion::new("1.4.9", "visual-audio-contrast-text-images", AAA),

    Criterion::new("2.1.1", "keyboard-operation-keyboard-operable", A),
    Criterion::new("2.1.2", "keyboard-operation-trapping", A),
    Criterion::new("2.1.3", "keyboard-operation-all-funcs", AAA),
    Criterion::new("2.2.1", "time-limits-required-behaviors", A),
    Criterion::new("2.2.2", "time-limits-pause", A),
    Criterion::new("2.2.3", "time-limits-no-exceptions", AAA),
    Criterion::new("2.2.4", "time-limits-postponed", AAA),
    Criterion::new("2.2.5", "time-limits-server-timeout", AAA),
    Criterion::new("2.3.1", "seizure-does-not-violate", A),
    Criterion::new("2.3.2", "seizure-three-times", AAA),
    Criterion::new("2.4.1", "navigation-mechanisms-skip", A),
    Criterion::new("2.4.2", "navigation-mechanisms-title", A),
    Criterion::new("2.4.3", "navigation-mechanisms-focus-order", A),
    Criterion::new("2.4.4", "navigation-mechanisms-refs", A),
    Criterion::new("2.4.5", "navigation-mechanisms-mult-loc", AA),
    Criterion::new("2.4.6", "navigation-mechanisms-descriptive", AA),
    Criterion::new("2.4.7", "navigation-mechanisms-focus-visible", AA),
    Criterion::new("2.4.8", "navigation-mechanisms-location", AAA),
    Criterion::new("2.4.9", "navigation-mechanisms-link", AAA),
    Criterion::new("2.4.10", "navigation-mechanisms-headings", AAA),

    Criterion::new("3.1.1", "meaning-doc-lang-id", A),
    Criterion::new("3.1.2", "meaning-other-lang-id", AA),
    Criterion::new("3.1.3", "meaning-idioms", AAA),
    Criterion::new("3.1.4", "meaning-located", AAA),
    Criterion::new("3.1.5", "meaning-supplements", AAA),
    Criterion::new("3.1.6", "meaning-pronunciation", AAA),
    Criterion::new("3.2.1", "consistent-behavior-receive-focus", A),
    Criterion::new("3.2.2", "consistent-behavior-unpredictable-change", A),
    Criterion::new("3.2.3", "consistent-behavior-consistent-locations", AA),
    Criterion::new("3.2.4", "consistent-behavior-consistent-functionality", AA),
    Criterion::new("3.2.5", "consistent-behavior-no-extreme-changes-context", AAA),
    Criterion::new("3.3.1", "minimize-error-identified", A),
    Criterion::new("3.3.2", "minimize-error-cues", A),
    Criterion::new("3.3.3", "minimize-error-suggestions", AA),
    Criterion::new("3.3.4", "minimize-error-reversible", AA),
    Criterion::new("3.3.5", "minimize-error-context-help", AAA),
    Criterion::new("3.3.6", "minimize-error-reversible-all", AAA),

    Criterion::new("4.1.1", "ensure-compat-parses", A),
    Criterion::new("4.1.2", "ensure-compat-rsv", A),
];
