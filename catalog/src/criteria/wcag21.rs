//! WCAG 2.1 success criteria, keyed by the fragment ids of
//! <https://www.w3.org/TR/WCAG21/>.

use crate::model::{Criterion, CriterionGroup, Level::*, WcagVersion};

/// Returns the WCAG 2.1 criterion group.
#[must_use]
pub fn group() -> CriterionGroup {
    CriterionGroup {
        version: WcagVersion::V2_1,
        criteria: CRITERIA,
    }
}

const CRITERIA: &[Criterion] = &[
    Criterion::new("1.1.1", "non-text-content", A),
    Criterion::new("1.2.1", "audio-only-and-video-only-prerecorded", A),
    Criterion::new("1.2.2", "captions-prerecorded", A),
    Criterion::new("1.2.3", "audio-description-or-media-alternative-prerecorded", A),
    Criterion::new("1.2.4", "captions-live", AA),
    Criterion::new("1.2.5", "audio-description-prerecorded", AA),
    Criterion::new("1.2.6", "sign-language-prerecorded", AAA),
    Criterion::new("1.2.7", "extended-audio-description-prerecorded", AAA),
    Criterion::new("1.2.8", "media-alternative-prerecorded", AAA),
    Criterion::new("1.2.9", "audio-only-live", AAA),
    Criterion::new("1.3.1", "info-and-relationships", A),
    Criterion::new("1.3.2", "meaningful-sequence", A),
    Criterion::new("1.3.3", "sensory-characteristics", A),
    Criterion::new("1.3.4", "orientation", AA),
    Criterion::new("1.3.5", "identify-input-purpose", AA),
    Criterion::new("1.3.6", "identify-purpose", AAA),
    Criterion::new("1.4.1", "use-of-color", A),
    Criterion::new("1.4.2", "audio-control", A),
    Criterion::new("1.4.3", "contrast-minimum", AA),
    Criterion::new("1.4.4", "resize-text", AA),
    Criterion::new("1.4.5", "images-of-text", AA),
    Criterion::new("1.4.6", "contrast-enhanced", AAA),
    Criterion::new("1.4.7", "low-or-no-background-audio", AAA),
    Criterion::new("1.4.8", "visual-presentation", AAA),
    Criterion::new("1.4.9", "images-of-text-no-exception", AAA),
    Criterion::new("1.4.10", "reflow", AA),
    Criterion::new("1.4.11", "non-text-contrast", AA),
    Criterion::new("1.4.12", "text-spacing", AA),
    Criterion::new("1.4.13", "content-on-hover-or-focus", AA),

    Criterion::new("2.1.1", "keyboard", A),
    Criterion::new("2.1.2", "no-keyboard-trap", A),
    Criterion::new("2.1.3", "keyboard-no-exception", AAA),
    Criterion::new("2.1.4", "character-key-shortcuts", A),
    Criterion::new("2.2.1", "timing-adjustable", A),
    Criterion::new("2.2.2", "pause-stop-hide", A),
    Criterion::new("2.2.3", "no-timing", AAA),
    Criterion::new("2.2.4", "interruptions", AAA),
    Criterion::new("2.2.5", "re-authenticating", AAA),
    Criterion::new("2.2.6", "timeouts", AAA),
    Criterion::new("2.3.1", "three-flashes-or-below-threshold", A),
    Criterion::new("2.3.2", "three-flashes", AAA),
    Criterion::new("2.3.3", "animation-from-interactions", AAA),
    Criterion::new("2.4.1", "bypass-blocks", A),
    Criterion::new("2.4.2", "page-titled", A),
    Criterion::new("2.4.3", "focus-order", A),
    Criterion::new("2.4.4", "link-purpose-in-context", A),
    Criterion::new("2.4.5", "multiple-ways", AA),
    Criterion::new("2.4.6", "headings-and-labels", AA),
    Criterion::new("2.4.7", "focus-visible", AA),
    Criterion::new("2.4.8", "location", AAA),
    Criterion::new("2.4.9", "link-purpose-link-only", AAA),
    Criterion::new("2.4.10", "section-headings", AAA),
    Criterion::new("2.5.1", "pointer-gestures", A),
    Criterion::new("2.5.2", "pointer-cancellation", A),
    Criterion::new("2.5.3", "label-in-name", A),
    Criterion::new("2.5.4", "motion-actuation", A),
    Criterion::new("2.5.5", "target-size", AAA),
    Criterion::new("2.5.6", "concurrent-input-mechanisms", AAA),

    Criterion::new("3.1.1", "language-of-page", A),
    Criterion::new("3.1.2", "language-of-parts", AA),
    Criterion::new("3.1.3", "unusual-words", AAA),
    Criterion::new("3.1.4", "abbreviations", AAA),
    Criterion::new("3.1.5", "reading-level", AAA),
    Criterion::new("3.1.6", "pronunciation", AAA),
    Criterion::new("3.2.1", "on-focus", A),
    Criterion::new("3.2.2", "on-input", A),
    Criterion::new("3.2.3", "consistent-navigation", AA),
    Criterion::new("3.2.4", "consistent-identification", AA),
    Criterion::new("3.2.5", "change-on-request", AAA),
    Criterion::new("3.3.1", "error-identification", A),
    Criterion::new("3.3.2", "labels-or-instructions", A),
    Criterion::new("3.3.3", "error-suggestion", AA),
    Criterion::new("3.3.4", "error-prevention-legal-financial-data", AA),
    Criterion::new("3.3.5", "help", AAA),
    Criterion::new("3.3.6", "error-prevention-all", AAA),

    Criterion::new("4.1.1", "parsing", A),
    Criterion::new("4.1.2", "name-role-value", A),
    Criterion::new("4.1.3", "status-messages", AA),
];
