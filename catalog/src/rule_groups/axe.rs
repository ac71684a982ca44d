//! Bundled rule groups for axe-core 4.4.
//!
//! Each entry maps a Deque University rule page to the WCAG 2.0 and WCAG 2.1
//! documents it tests. Rules tagged `best-practice` only have no entry.

use super::RuleGroup;
use crate::model::WcagVersion;

macro_rules! rule_page {
    ($rule:literal) => {
        concat!("https://dequeuniversity.com/rules/axe/4.4/", $rule)
    };
}

macro_rules! wcag20 {
    ($fragment:literal) => {
        concat!("https://www.w3.org/TR/WCAG20/#", $fragment)
    };
}

macro_rules! wcag21 {
    ($fragment:literal) => {
        concat!("https://www.w3.org/TR/WCAG21/#", $fragment)
    };
}

struct StaticRuleGroup {
    page: &'static str,
    wcag20: &'static [&'static str],
    wcag21: &'static [&'static str],
}

/// Returns the bundled axe-core 4.4 rule groups in declaration order.
pub(crate) fn rule_groups() -> Vec<RuleGroup> {
    AXE_4_4
        .iter()
        .map(|group| {
            RuleGroup::new(group.page)
                .with_rule_set(WcagVersion::V2_0, group.wcag20)
                .with_rule_set(WcagVersion::V2_1, group.wcag21)
        })
        .collect()
}

const AXE_4_4: &[StaticRuleGroup] = &[
    StaticRuleGroup {
        page: rule_page!("area-alt"),
        wcag20: &[
            wcag20!("text-equiv-all"),
            wcag20!("navigation-mechanisms-refs"),
            wcag20!("ensure-compat-rsv"),
        ],
        wcag21: &[
            wcag21!("non-text-content"),
            wcag21!("link-purpose-in-context"),
            wcag21!("name-role-value"),
        ],
    },
    StaticRuleGroup {
        page: rule_page!("aria-allowed-attr"),
        wcag20: &[wcag20!("ensure-compat-rsv")],
        wcag21: &[wcag21!("name-role-value")],
    },
    StaticRuleGroup {
        page: rule_page!("aria-command-name"),
        wcag20: &[wcag20!("ensure-compat-rsv")],
        wcag21: &[wcag21!("name-role-value")],
    },
    StaticRuleGroup {
        page: rule_page!("aria-hidden-body"),
        wcag20: &[wcag20!("ensure-compat-rsv")],
        wcag21: &[wcag21!("name-role-value")],
    },
    StaticRuleGroup {
        page: rule_page!("aria-hidden-focus"),
        wcag20: &[
            wcag20!("ensure-compat-rsv"),
            wcag20!("content-structure-separation-programmatic"),
        ],
        wcag21: &[wcag21!("name-role-value"), wcag21!("info-and-relationships")],
    },
    StaticRuleGroup {
        page: rule_page!("aria-input-field-name"),
        wcag20: &[wcag20!("ensure-compat-rsv")],
        wcag21: &[wcag21!("name-role-value")],
    },
    StaticRuleGroup {
        page: rule_page!("aria-meter-name"),
        wcag20: &[wcag20!("text-equiv-all")],
        wcag21: &[wcag21!("non-text-content")],
    },
    StaticRuleGroup {
        page: rule_page!("aria-progressbar-name"),
        wcag20: &[wcag20!("text-equiv-all")],
        wcag21: &[wcag21!("non-text-content")],
    },
    StaticRuleGroup {
        page: rule_page!("aria-required-attr"),
        wcag20: &[wcag20!("ensure-compat-rsv")],
        wcag21: &[wcag21!("name-role-value")],
    },
    StaticRuleGroup {
        page: rule_page!("aria-required-children"),
        wcag20: &[wcag20!("content-structure-separation-programmatic")],
        wcag21: &[wcag21!("info-and-relationships")],
    },
    StaticRuleGroup {
        page: rule_page!("aria-required-parent"),
        wcag20: &[wcag20!("content-structure-separation-programmatic")],
        wcag21: &[wcag21!("info-and-relationships")],
    },
    StaticRuleGroup {
        page: rule_page!("aria-roles"),
        wcag20: &[wcag20!("ensure-compat-rsv")],
        wcag21: &[wcag21!("name-role-value")],
    },
    StaticRuleGroup {
        page: rule_page!("aria-toggle-field-name"),
        wcag20: &[wcag20!("ensure-compat-rsv")],
        wcag21: &[wcag21!("name-role-value")],
    },
    StaticRuleGroup {
        page: rule_page!("aria-tooltip-name"),
        wcag20: &[wcag20!("ensure-compat-rsv")],
        wcag21: &[wcag21!("name-role-value")],
    },
    StaticRuleGroup {
        page: rule_page!("aria-valid-attr-value"),
        wcag20: &[wcag20!("ensure-compat-rsv")],
        wcag21: &[wcag21!("name-role-value")],
    },
    StaticRuleGroup {
        page: rule_page!("aria-valid-attr"),
        wcag20: &[wcag20!("ensure-compat-rsv")],
        wcag21: &[wcag21!("name-role-value")],
    },
    StaticRuleGroup {
        page: rule_page!("autocomplete-valid"),
        wcag20: &[],
        wcag21: &[wcag21!("identify-input-purpose")],
    },
    StaticRuleGroup {
        page: rule_page!("avoid-inline-spacing"),
        wcag20: &[],
        wcag21: &[wcag21!("text-spacing")],
    },
    StaticRuleGroup {
        page: rule_page!("blink"),
        wcag20: &[wcag20!("time-limits-pause")],
        wcag21: &[wcag21!("pause-stop-hide")],
    },
    StaticRuleGroup {
        page: rule_page!("button-name"),
        wcag20: &[wcag20!("ensure-compat-rsv")],
        wcag21: &[wcag21!("name-role-value")],
    },
    StaticRuleGroup {
        page: rule_page!("bypass"),
        wcag20: &[wcag20!("navigation-mechanisms-skip")],
        wcag21: &[wcag21!("bypass-blocks")],
    },
    StaticRuleGroup {
        page: rule_page!("color-contrast"),
        wcag20: &[wcag20!("visual-audio-contrast-contrast")],
        wcag21: &[wcag21!("contrast-minimum")],
    },
    StaticRuleGroup {
        page: rule_page!("css-orientation-lock"),
        wcag20: &[],
        wcag21: &[wcag21!("orientation")],
    },
    StaticRuleGroup {
        page: rule_page!("definition-list"),
        wcag20: &[wcag20!("content-structure-separation-programmatic")],
        wcag21: &[wcag21!("info-and-relationships")],
    },
    StaticRuleGroup {
        page: rule_page!("dlitem"),
        wcag20: &[wcag20!("content-structure-separation-programmatic")],
        wcag21: &[wcag21!("info-and-relationships")],
    },
    StaticRuleGroup {
        page: rule_page!("document-title"),
        wcag20: &[wcag20!("navigation-mechanisms-title")],
        wcag21: &[wcag21!("page-titled")],
    },
    StaticRuleGroup {
        page: rule_page!("duplicate-id-active"),
        wcag20: &[wcag20!("ensure-compat-parses")],
        wcag21: &[wcag21!("parsing")],
    },
    StaticRuleGroup {
        page: rule_page!("duplicate-id-aria"),
        wcag20: &[wcag20!("ensure-compat-parses")],
        wcag21: &[wcag21!("parsing")],
    },
    StaticRuleGroup {
        page: rule_page!("duplicate-id"),
        wcag20: &[wcag20!("ensure-compat-parses")],
        wcag21: &[wcag21!("parsing")],
    },
    StaticRuleGroup {
        page: rule_page!("form-field-multiple-labels"),
        wcag20: &[wcag20!("minimize-error-cues")],
        wcag21: &[wcag21!("labels-or-instructions")],
    },
    StaticRuleGroup {
        page: rule_page!("frame-focusable-content"),
        wcag20: &[wcag20!("keyboard-operation-keyboard-operable")],
        wcag21: &[wcag21!("keyboard")],
    },
    StaticRuleGroup {
        page: rule_page!("frame-title"),
        wcag20: &[wcag20!("ensure-compat-rsv")],
        wcag21: &[wcag21!("name-role-value")],
    },
    StaticRuleGroup {
        page: rule_page!("html-has-lang"),
        wcag20: &[wcag20!("meaning-doc-lang-id")],
        wcag21: &[wcag21!("language-of-page")],
    },
    StaticRuleGroup {
        page: rule_page!("html-lang-valid"),
        wcag20: &[wcag20!("meaning-doc-lang-id")],
        wcag21: &[wcag21!("language-of-page")],
    },
    StaticRuleGroup {
        page: rule_page!("html-xml-lang-mismatch"),
        wcag20: &[wcag20!("meaning-doc-lang-id")],
        wcag21: &[wcag21!("language-of-page")],
    },
    StaticRuleGroup {
        page: rule_page!("image-alt"),
        wcag20: &[wcag20!("text-equiv-all")],
        wcag21: &[wcag21!("non-text-content")],
    },
    StaticRuleGroup {
        page: rule_page!("input-button-name"),
        wcag20: &[wcag20!("ensure-compat-rsv")],
        wcag21: &[wcag21!("name-role-value")],
    },
    StaticRuleGroup {
        page: rule_page!("input-image-alt"),
        wcag20: &[wcag20!("text-equiv-all"), wcag20!("ensure-compat-rsv")],
        wcag21: &[wcag21!("non-text-content"), wcag21!("name-role-value")],
    },
    StaticRuleGroup {
        page: rule_page!("label"),
        wcag20: &[
            wcag20!("ensure-compat-rsv"),
            wcag20!("content-structure-separation-programmatic"),
            "https://www.w3.org/WAI/WCAG20/quickref/#qr-content-structure-separation-programmatic",
        ],
        wcag21: &[
            wcag21!("name-role-value"),
            wcag21!("info-and-relationships"),
            "https://www.w3.org/WAI/WCAG21/Techniques/html/H44",
        ],
    },
    StaticRuleGroup {
        page: rule_page!("link-in-text-block"),
        wcag20: &[wcag20!("visual-audio-contrast-without-color")],
        wcag21: &[wcag21!("use-of-color")],
    },
    StaticRuleGroup {
        page: rule_page!("link-name"),
        wcag20: &[
            wcag20!("ensure-compat-rsv"),
            wcag20!("navigation-mechanisms-refs"),
        ],
        wcag21: &[wcag21!("name-role-value"), wcag21!("link-purpose-in-context")],
    },
    StaticRuleGroup {
        page: rule_page!("list"),
        wcag20: &[wcag20!("content-structure-separation-programmatic")],
        wcag21: &[wcag21!("info-and-relationships")],
    },
    StaticRuleGroup {
        page: rule_page!("listitem"),
        wcag20: &[wcag20!("content-structure-separation-programmatic")],
        wcag21: &[wcag21!("info-and-relationships")],
    },
    StaticRuleGroup {
        page: rule_page!("marquee"),
        wcag20: &[wcag20!("time-limits-pause")],
        wcag21: &[wcag21!("pause-stop-hide")],
    },
    StaticRuleGroup {
        page: rule_page!("meta-refresh"),
        wcag20: &[
            wcag20!("time-limits-required-behaviors"),
            wcag20!("time-limits-postponed"),
            wcag20!("consistent-behavior-no-extreme-changes-context"),
        ],
        wcag21: &[
            wcag21!("timing-adjustable"),
            wcag21!("interruptions"),
            wcag21!("change-on-request"),
        ],
    },
    StaticRuleGroup {
        page: rule_page!("meta-viewport"),
        wcag20: &[wcag20!("visual-audio-contrast-scale")],
        wcag21: &[wcag21!("resize-text")],
    },
    StaticRuleGroup {
        page: rule_page!("nested-interactive"),
        wcag20: &[wcag20!("ensure-compat-rsv")],
        wcag21: &[wcag21!("name-role-value")],
    },
    StaticRuleGroup {
        page: rule_page!("no-autoplay-audio"),
        wcag20: &[wcag20!("visual-audio-contrast-dis-audio")],
        wcag21: &[wcag21!("audio-control")],
    },
    StaticRuleGroup {
        page: rule_page!("object-alt"),
        wcag20: &[wcag20!("text-equiv-all")],
        wcag21: &[wcag21!("non-text-content")],
    },
    StaticRuleGroup {
        page: rule_page!("role-img-alt"),
        wcag20: &[wcag20!("text-equiv-all")],
        wcag21: &[wcag21!("non-text-content")],
    },
    StaticRuleGroup {
        page: rule_page!("scrollable-region-focusable"),
        wcag20: &[wcag20!("keyboard-operation-keyboard-operable")],
        wcag21: &[wcag21!("keyboard")],
    },
    StaticRuleGroup {
        page: rule_page!("select-name"),
        wcag20: &[wcag20!("ensure-compat-rsv")],
        wcag21: &[wcag21!("name-role-value")],
    },
    StaticRuleGroup {
        page: rule_page!("server-side-image-map"),
        wcag20: &[wcag20!("keyboard-operation-keyboard-operable")],
        wcag21: &[wcag21!("keyboard")],
    },
    StaticRuleGroup {
        page: rule_page!("svg-img-alt"),
        wcag20: &[wcag20!("text-equiv-all")],
        wcag21: &[wcag21!("non-text-content")],
    },
    StaticRuleGroup {
        page: rule_page!("td-headers-attr"),
        wcag20: &[wcag20!("content-structure-separation-programmatic")],
        wcag21: &[wcag21!("info-and-relationships")],
    },
    StaticRuleGroup {
        page: rule_page!("th-has-data-cells"),
        wcag20: &[wcag20!("content-structure-separation-programmatic")],
        wcag21: &[wcag21!("info-and-relationships")],
    },
    StaticRuleGroup {
        page: rule_page!("valid-lang"),
        wcag20: &[wcag20!("meaning-other-lang-id")],
        wcag21: &[wcag21!("language-of-parts")],
    },
    StaticRuleGroup {
        page: rule_page!("video-caption"),
        wcag20: &[wcag20!("media-equiv-captions")],
        wcag21: &[wcag21!("captions-prerecorded")],
    },
];
