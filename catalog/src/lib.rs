//! WCAG catalog encoded as typed Rust data.
//!
//! The `earl-catalog` crate provides the fixed datasets an EARL reporter
//! needs: every WCAG 2.0, 2.1 and 2.2 success criterion in document order,
//! and the table mapping axe-core rule documentation pages to the WCAG
//! documents each rule tests.
//!
//! # Entry Point
//!
//! ```
//! use earl_catalog::{WcagCatalog, WcagVersion};
//!
//! let catalog = WcagCatalog::full();
//! assert_eq!(catalog.criterion_count(), 225);
//!
//! let urls = catalog.find_criterion_urls(
//!     "https://dequeuniversity.com/rules/axe/4.4/image-alt",
//!     WcagVersion::V2_0,
//! );
//! assert_eq!(urls, ["https://www.w3.org/TR/WCAG20/#text-equiv-all"]);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod criteria;
pub mod error;
pub mod model;
pub mod rule_groups;

pub use error::CatalogError;
pub use model::{Criterion, CriterionGroup, Level, WcagVersion};
pub use rule_groups::{RuleGroup, RuleGroupTable};

/// The criterion catalog together with its rule-group lookup table.
#[derive(Debug, Clone)]
pub struct WcagCatalog {
    /// Criterion groups in catalog order (2.0, 2.1, 2.2).
    pub groups: Vec<CriterionGroup>,
    /// Documentation page → WCAG URL lookup table.
    pub rule_groups: RuleGroupTable,
}

impl WcagCatalog {
    /// Returns the bundled catalog: all criteria plus the axe-core 4.4
    /// rule-group table. Built once per process.
    #[must_use]
    pub fn full() -> &'static WcagCatalog {
        static CATALOG: std::sync::OnceLock<WcagCatalog> = std::sync::OnceLock::new();
        CATALOG.get_or_init(|| WcagCatalog::with_rule_groups(RuleGroupTable::bundled()))
    }

    /// Returns the bundled criteria paired with a caller-supplied rule-group
    /// table.
    #[must_use]
    pub fn with_rule_groups(rule_groups: RuleGroupTable) -> Self {
        Self {
            groups: criteria::groups(),
            rule_groups,
        }
    }

    /// Iterates every `(version, criterion)` pair: version groups in catalog
    /// order, criteria within a group in document order.
    pub fn all_criteria(&self) -> impl Iterator<Item = (WcagVersion, &Criterion)> + '_ {
        self.groups
            .iter()
            .flat_map(|g| g.criteria.iter().map(move |c| (g.version, c)))
    }

    /// Returns the WCAG URLs mapped to a normalized documentation page for
    /// `version`. Unknown pages yield an empty slice.
    #[must_use]
    pub fn find_criterion_urls(&self, normalized_url: &str, version: WcagVersion) -> &[String] {
        self.rule_groups.find(normalized_url, version)
    }

    /// Looks up a criterion by its EARL test id (e.g. `"WCAG21:orientation"`).
    #[must_use]
    pub fn find_by_test_id(&self, test_id: &str) -> Option<(WcagVersion, &Criterion)> {
        let (prefix, id) = test_id.split_once(':')?;
        let group = self.groups.iter().find(|g| g.version.id_prefix() == prefix)?;
        group
            .criteria
            .iter()
            .find(|c| c.id == id)
            .map(|c| (group.version, c))
    }

    /// Returns the total number of criteria across all versions.
    #[must_use]
    pub fn criterion_count(&self) -> usize {
        self.groups.iter().map(|g| g.criteria.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criterion_count() {
        assert_eq!(WcagCatalog::full().criterion_count(), 61 + 78 + 86);
    }

    #[test]
    fn all_criteria_follow_catalog_order() {
        let catalog = WcagCatalog::full();
        let pairs: Vec<_> = catalog.all_criteria().collect();
        assert_eq!(pairs.len(), catalog.criterion_count());
        assert_eq!(pairs[0].0, WcagVersion::V2_0);
        assert_eq!(pairs[0].1.id, "text-equiv-all");
        assert_eq!(pairs[61].0, WcagVersion::V2_1);
        assert_eq!(pairs[61].1.id, "non-text-content");
        let last = pairs[pairs.len() - 1];
        assert_eq!(last.0, WcagVersion::V2_2);
        assert_eq!(last.1.id, "status-messages");
        assert!(pairs.windows(2).all(|w| w[0].0 <= w[1].0));
    }

    #[test]
    fn find_by_test_id() {
        let catalog = WcagCatalog::full();
        let found = catalog.find_by_test_id("WCAG21:orientation");
        assert_eq!(
            found.map(|(v, c)| (v, c.num, c.level)),
            Some((WcagVersion::V2_1, "1.3.4", Level::AA))
        );
        assert!(catalog.find_by_test_id("WCAG20:orientation").is_none());
        assert!(catalog.find_by_test_id("orientation").is_none());
    }

    #[test]
    fn override_table_replaces_bundled_rules() {
        let table = RuleGroupTable::from_groups(vec![RuleGroup::new(
            "https://example.com/rules/custom",
        )
        .with_rule_set(
            WcagVersion::V2_1,
            &["https://www.w3.org/TR/WCAG21/#reflow"],
        )])
        .expect("valid table");
        let catalog = WcagCatalog::with_rule_groups(table);
        assert_eq!(catalog.criterion_count(), WcagCatalog::full().criterion_count());
        assert_eq!(
            catalog.find_criterion_urls("https://example.com/rules/custom", WcagVersion::V2_1),
            ["https://www.w3.org/TR/WCAG21/#reflow"]
        );
        assert!(catalog
            .find_criterion_urls(
                "https://dequeuniversity.com/rules/axe/4.4/image-alt",
                WcagVersion::V2_0
            )
            .is_empty());
    }
}
