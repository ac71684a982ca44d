//! Errors raised while loading rule-group tables.

use thiserror::Error;

/// Failure to build a catalog from external data.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The rule-group document is not valid JSON of the expected shape.
    #[error("malformed rule-group table: {0}")]
    Json(#[from] serde_json::Error),

    /// A rule page key is not an absolute URL.
    #[error("rule page {page:?} is not an absolute URL: {source}")]
    InvalidRulePage {
        /// The offending key.
        page: String,
        /// The underlying parse failure.
        #[source]
        source: url::ParseError,
    },

    /// A rule-set key does not name a WCAG version.
    #[error("rule page {page:?} has unknown rule set {key:?}")]
    UnknownRuleSet {
        /// The rule page carrying the key.
        page: String,
        /// The unrecognized key.
        key: String,
    },

    /// The same rule page appears twice.
    #[error("rule page {0:?} is listed more than once")]
    DuplicateRulePage(String),

    /// A version string is not a known WCAG version.
    #[error("unknown WCAG version {0:?} (expected 2.0, 2.1 or 2.2)")]
    UnknownVersion(String),
}
