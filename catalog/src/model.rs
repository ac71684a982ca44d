//! Core catalog model types.
//!
//! WCAG versions, conformance levels and success criteria as typed Rust
//! data. Criterion tables are `'static` slices; the top-level entry point is
//! [`WcagCatalog::full()`](crate::WcagCatalog::full).

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::CatalogError;

/// A published WCAG version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WcagVersion {
    /// WCAG 2.0 (2008).
    V2_0,
    /// WCAG 2.1 (2018).
    V2_1,
    /// WCAG 2.2 (2023).
    V2_2,
}

impl WcagVersion {
    /// All versions in catalog order.
    pub const ALL: [WcagVersion; 3] = [WcagVersion::V2_0, WcagVersion::V2_1, WcagVersion::V2_2];

    /// Returns the dotted version string (e.g. `"2.1"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            WcagVersion::V2_0 => "2.0",
            WcagVersion::V2_1 => "2.1",
            WcagVersion::V2_2 => "2.2",
        }
    }

    /// Returns the test-id prefix used for this version (e.g. `"WCAG21"`).
    #[must_use]
    pub fn id_prefix(self) -> &'static str {
        match self {
            WcagVersion::V2_0 => "WCAG20",
            WcagVersion::V2_1 => "WCAG21",
            WcagVersion::V2_2 => "WCAG22",
        }
    }

    /// Returns the rule-set key used in rule-group tables (e.g. `"WCAG 2.1"`).
    #[must_use]
    pub fn rule_set_key(self) -> &'static str {
        match self {
            WcagVersion::V2_0 => "WCAG 2.0",
            WcagVersion::V2_1 => "WCAG 2.1",
            WcagVersion::V2_2 => "WCAG 2.2",
        }
    }

    /// Parses a rule-set key (`"WCAG 2.0"`) back into a version.
    #[must_use]
    pub fn from_rule_set_key(key: &str) -> Option<WcagVersion> {
        WcagVersion::ALL
            .into_iter()
            .find(|v| v.rule_set_key() == key)
    }
}

impl fmt::Display for WcagVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WcagVersion {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WcagVersion::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownVersion(s.to_owned()))
    }
}

impl Serialize for WcagVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// WCAG conformance level of a success criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Level A.
    A,
    /// Level AA.
    AA,
    /// Level AAA.
    AAA,
}

impl Level {
    /// Returns the level name as used in reports (`"A"`, `"AA"`, `"AAA"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Level::A => "A",
            Level::AA => "AA",
            Level::AAA => "AAA",
        }
    }

    /// Returns the axe-core tag announcing this level (e.g. `"wcag2aa"`).
    #[must_use]
    pub fn axe_tag(self) -> &'static str {
        match self {
            Level::A => "wcag2a",
            Level::AA => "wcag2aa",
            Level::AAA => "wcag2aaa",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A single WCAG success criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Criterion {
    /// Success-criterion number (e.g. `"1.1.1"`).
    pub num: &'static str,
    /// Stable fragment identifier in the version's TR document
    /// (e.g. `"non-text-content"` in WCAG 2.1, `"text-equiv-all"` in WCAG 2.0).
    pub id: &'static str,
    /// Conformance level.
    pub level: Level,
}

impl Criterion {
    /// Builds a criterion entry; usable in `const` tables.
    #[must_use]
    pub const fn new(num: &'static str, id: &'static str, level: Level) -> Self {
        Self { num, id, level }
    }
}

/// The ordered criteria published for one WCAG version.
#[derive(Debug, Clone)]
pub struct CriterionGroup {
    /// The WCAG version this group belongs to.
    pub version: WcagVersion,
    /// Criteria in document order.
    pub criteria: &'static [Criterion],
}

impl CriterionGroup {
    /// Formats the EARL test id of a criterion in this group
    /// (e.g. `"WCAG21:non-text-content"`).
    #[must_use]
    pub fn test_id(&self, criterion: &Criterion) -> String {
        format!("{}:{}", self.version.id_prefix(), criterion.id)
    }
}
