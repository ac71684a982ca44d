//! Report-generation errors.

use thiserror::Error;

/// Failure to produce an EARL report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A rule's documentation URL could not be parsed. Aborts the whole
    /// report; no partial output is produced.
    #[error("invalid helpUrl {url:?}: {source}")]
    InvalidUrl {
        /// The offending URL as reported by axe-core.
        url: String,
        /// The underlying parse failure.
        #[source]
        source: url::ParseError,
    },

    /// The axe-core input could not be decoded.
    #[error("malformed axe-core results: {0}")]
    Input(#[from] serde_json::Error),
}
