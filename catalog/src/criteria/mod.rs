//! Success-criterion tables, one module per WCAG version.
//!
//! Each module exposes `group()` returning its criteria in document order.
//! [`groups`] lists them in catalog order: 2.0, 2.1, 2.2.

pub mod wcag20;
pub mod wcag21;
pub mod wcag22;

use crate::model::CriterionGroup;

/// Returns every criterion group in catalog order.
#[must_use]
pub fn groups() -> Vec<CriterionGroup> {
    vec![wcag20::group(), wcag21::group(), wcag22::group()]
}
