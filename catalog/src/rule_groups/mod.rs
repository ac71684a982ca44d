//! Rule-group lookup tables: documentation page → WCAG document URLs.
//!
//! A rule group ties one axe-core documentation page (the rule's `helpUrl`
//! with query and fragment removed) to the WCAG URLs it tests, per WCAG
//! version. The JSON form used for override tables is:
//!
//! ```json
//! [
//!   {
//!     "rulePage": "https://dequeuniversity.com/rules/axe/4.4/image-alt",
//!     "ruleSets": { "WCAG 2.0": ["https://www.w3.org/TR/WCAG20/#text-equiv-all"] }
//!   }
//! ]
//! ```

mod axe;

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::CatalogError;
use crate::model::WcagVersion;

/// One documentation page and the WCAG URLs it maps to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleGroup {
    /// Normalized documentation page URL (origin + path).
    pub rule_page: String,
    /// WCAG URLs keyed by rule-set name (`"WCAG 2.0"`, `"WCAG 2.1"`, ...).
    #[serde(default)]
    pub rule_sets: BTreeMap<String, Vec<String>>,
}

impl RuleGroup {
    /// Creates a rule group with no rule sets.
    pub fn new(rule_page: impl Into<String>) -> Self {
        Self {
            rule_page: rule_page.into(),
            rule_sets: BTreeMap::new(),
        }
    }

    /// Adds the WCAG URLs for `version`. Empty lists are not recorded.
    #[must_use]
    pub fn with_rule_set<S: AsRef<str>>(mut self, version: WcagVersion, urls: &[S]) -> Self {
        if !urls.is_empty() {
            self.rule_sets.insert(
                version.rule_set_key().to_owned(),
                urls.iter().map(|u| u.as_ref().to_owned()).collect(),
            );
        }
        self
    }

    /// Returns the WCAG URLs recorded for `version`.
    #[must_use]
    pub fn urls_for(&self, version: WcagVersion) -> &[String] {
        self.rule_sets
            .get(version.rule_set_key())
            .map_or(&[], Vec::as_slice)
    }
}

/// An indexed, immutable collection of rule groups.
#[derive(Debug, Clone, Default)]
pub struct RuleGroupTable {
    groups: Vec<RuleGroup>,
    by_page: HashMap<String, usize>,
}

impl RuleGroupTable {
    /// Returns the bundled axe-core 4.4 table.
    #[must_use]
    pub fn bundled() -> Self {
        let groups = axe::rule_groups();
        let by_page = groups
            .iter()
            .enumerate()
            .map(|(i, g)| (g.rule_page.clone(), i))
            .collect();
        Self { groups, by_page }
    }

    /// Builds a table from rule groups, validating every page and rule-set key.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidRulePage`] when a page is not an absolute
    /// URL, [`CatalogError::UnknownRuleSet`] when a rule-set key names no WCAG
    /// version, and [`CatalogError::DuplicateRulePage`] when a page repeats.
    pub fn from_groups(groups: Vec<RuleGroup>) -> Result<Self, CatalogError> {
        let mut by_page = HashMap::with_capacity(groups.len());
        for (i, group) in groups.iter().enumerate() {
            Url::parse(&group.rule_page).map_err(|source| CatalogError::InvalidRulePage {
                page: group.rule_page.clone(),
                source,
            })?;
            if let Some(key) = group
                .rule_sets
                .keys()
                .find(|k| WcagVersion::from_rule_set_key(k).is_none())
            {
                return Err(CatalogError::UnknownRuleSet {
                    page: group.rule_page.clone(),
                    key: key.clone(),
                });
            }
            if by_page.insert(group.rule_page.clone(), i).is_some() {
                return Err(CatalogError::DuplicateRulePage(group.rule_page.clone()));
            }
        }
        tracing::debug!(groups = groups.len(), "rule-group table loaded");
        Ok(Self { groups, by_page })
    }

    /// Parses a JSON rule-group table.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] for malformed JSON, otherwise the
    /// validation errors of [`RuleGroupTable::from_groups`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let groups: Vec<RuleGroup> = serde_json::from_str(json)?;
        Self::from_groups(groups)
    }

    /// Returns the WCAG URLs mapped to `rule_page` for `version`.
    ///
    /// The page must already be normalized; matching is exact. A miss yields
    /// an empty slice.
    #[must_use]
    pub fn find(&self, rule_page: &str, version: WcagVersion) -> &[String] {
        self.by_page
            .get(rule_page)
            .map_or(&[], |&i| self.groups[i].urls_for(version))
    }

    /// Returns all groups in declaration order.
    #[must_use]
    pub fn groups(&self) -> &[RuleGroup] {
        &self.groups
    }

    /// Returns the number of rule groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if the table has no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
