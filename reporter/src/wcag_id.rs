//! Mapping from axe-core rule metadata to WCAG criterion ids.
//!
//! Two inputs decide which criteria a rule result speaks for: its tags pick
//! the WCAG versions, and its documentation URL picks the rule group whose
//! WCAG URLs are turned into `WCAG<ver>:<slug>` ids.

use earl_catalog::{WcagCatalog, WcagVersion};
use url::Url;

use crate::error::ReportError;

/// Detects the WCAG versions a rule's tags refer to.
///
/// `"2.1"` is reported when any tag starts with `wcag21`, `"2.0"` when any
/// tag starts with `wcag2`. A `wcag21aa` tag therefore yields both, with 2.1
/// first. Tags such as `best-practice` yield nothing.
pub fn wcag_versions_from_tags<I, S>(tags: I) -> Vec<WcagVersion>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let (mut has_wcag21, mut has_wcag2) = (false, false);
    for tag in tags {
        let tag = tag.as_ref();
        has_wcag21 |= tag.starts_with("wcag21");
        has_wcag2 |= tag.starts_with("wcag2");
    }
    let mut versions = Vec::with_capacity(2);
    if has_wcag21 {
        versions.push(WcagVersion::V2_1);
    }
    if has_wcag2 {
        versions.push(WcagVersion::V2_0);
    }
    versions
}

/// Normalizes a documentation URL to origin + path.
///
/// # Errors
///
/// Returns [`ReportError::InvalidUrl`] if `doc_url` is not an absolute URL.
pub fn normalize_doc_url(doc_url: &str) -> Result<String, ReportError> {
    let url = Url::parse(doc_url).map_err(|source| ReportError::InvalidUrl {
        url: doc_url.to_owned(),
        source,
    })?;
    Ok(format!("{}{}", url.origin().ascii_serialization(), url.path()))
}

/// Turns a WCAG document URL into a criterion id.
///
/// `https://www.w3.org/TR/WCAG21/#non-text-content` becomes
/// `WCAG21:non-text-content`: the version token is the path segment after
/// `TR`, the slug is the fragment. URLs whose composed id does not start with
/// `WCAG` (technique and quick-reference pages) yield `None`.
#[must_use]
pub fn criterion_id_from_wcag_url(wcag_url: &str) -> Option<String> {
    let url = Url::parse(wcag_url).ok()?;
    let mut segments = url.path_segments()?;
    segments.find(|s| *s == "TR")?;
    let version = segments.next().filter(|s| !s.is_empty())?;
    let id = format!("{version}:{}", url.fragment().unwrap_or_default());
    id.starts_with("WCAG").then_some(id)
}

/// Resolves documentation URLs to criterion ids through a catalog.
#[derive(Debug, Clone, Copy)]
pub struct CriterionIdExtractor<'c> {
    catalog: &'c WcagCatalog,
}

impl<'c> CriterionIdExtractor<'c> {
    /// Creates an extractor backed by `catalog`.
    #[must_use]
    pub fn new(catalog: &'c WcagCatalog) -> Self {
        Self { catalog }
    }

    /// Returns the criterion ids `doc_url` maps to under `version`, in table
    /// order. A page without a rule group yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidUrl`] if `doc_url` cannot be parsed.
    pub fn criterion_ids(
        &self,
        doc_url: &str,
        version: WcagVersion,
    ) -> Result<Vec<String>, ReportError> {
        let page = normalize_doc_url(doc_url)?;
        let urls = self.catalog.find_criterion_urls(&page, version);
        if urls.is_empty() {
            tracing::debug!(page = %page, version = %version, "no rule group for page");
        }
        Ok(urls
            .iter()
            .filter_map(|wcag_url| {
                let id = criterion_id_from_wcag_url(wcag_url);
                if id.is_none() {
                    tracing::debug!(url = %wcag_url, "discarding non-criterion WCAG url");
                }
                id
            })
            .collect())
    }
}
