//! EARL outcome values and the rule for combining them.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::axe::ResultStatus;

/// An EARL outcome value.
///
/// Serializes to the EARL outcome node, e.g.
/// `{"id": "earl:failed", "type": ["OutcomeValue", "Fail"], "title": "Failed"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    /// `earl:untested`: no applicable result was folded in.
    #[default]
    Untested,
    /// `earl:passed`.
    Passed,
    /// `earl:failed`.
    Failed,
    /// `earl:inapplicable`.
    Inapplicable,
}

impl Outcome {
    /// Maps a raw status string to an outcome. Unknown statuses, including
    /// `"incomplete"`, map to [`Outcome::Untested`].
    #[must_use]
    pub fn from_status(status: &str) -> Outcome {
        match status {
            "passed" => Outcome::Passed,
            "failed" => Outcome::Failed,
            "inapplicable" => Outcome::Inapplicable,
            _ => Outcome::Untested,
        }
    }

    /// Combines the outcome recorded so far with a newly observed one.
    ///
    /// Passed and failed are sticky: once recorded, `self` is returned
    /// unchanged, so the first definitive outcome wins. Otherwise `next`
    /// replaces `self`.
    #[must_use]
    pub fn combine(self, next: Outcome) -> Outcome {
        if self.is_definitive() {
            self
        } else {
            next
        }
    }

    /// Returns true for passed and failed.
    #[must_use]
    pub fn is_definitive(self) -> bool {
        matches!(self, Outcome::Passed | Outcome::Failed)
    }

    /// Returns the EARL identifier (e.g. `"earl:passed"`).
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Outcome::Untested => "earl:untested",
            Outcome::Passed => "earl:passed",
            Outcome::Failed => "earl:failed",
            Outcome::Inapplicable => "earl:inapplicable",
        }
    }

    /// Returns the JSON-LD type pair.
    #[must_use]
    pub fn types(self) -> [&'static str; 2] {
        let kind = match self {
            Outcome::Untested => "NotTested",
            Outcome::Passed => "Pass",
            Outcome::Failed => "Fail",
            Outcome::Inapplicable => "NotApplicable",
        };
        ["OutcomeValue", kind]
    }

    /// Returns the display title, present only for passed and failed.
    #[must_use]
    pub fn title(self) -> Option<&'static str> {
        match self {
            Outcome::Passed => Some("Passed"),
            Outcome::Failed => Some("Failed"),
            Outcome::Untested | Outcome::Inapplicable => None,
        }
    }
}

impl From<ResultStatus> for Outcome {
    fn from(status: ResultStatus) -> Self {
        Outcome::from_status(status.as_str())
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let title = self.title();
        let len = if title.is_some() { 3 } else { 2 };
        let mut node = serializer.serialize_struct("Outcome", len)?;
        node.serialize_field("id", self.id())?;
        node.serialize_field("type", &self.types())?;
        if let Some(title) = title {
            node.serialize_field("title", title)?;
        }
        node.end()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const ALL: [Outcome; 4] = [
        Outcome::Untested,
        Outcome::Passed,
        Outcome::Failed,
        Outcome::Inapplicable,
    ];

    #[test]
    fn status_mapping() {
        assert_eq!(Outcome::from_status("passed"), Outcome::Passed);
        assert_eq!(Outcome::from_status("failed"), Outcome::Failed);
        assert_eq!(Outcome::from_status("inapplicable"), Outcome::Inapplicable);
        assert_eq!(Outcome::from_status("incomplete"), Outcome::Untested);
        assert_eq!(Outcome::from_status(""), Outcome::Untested);
        assert_eq!(Outcome::from(ResultStatus::Incomplete), Outcome::Untested);
        assert_eq!(Outcome::default(), Outcome::Untested);
    }

    #[test]
    fn definitive_outcomes_are_sticky() {
        for next in ALL {
            assert_eq!(Outcome::Passed.combine(next), Outcome::Passed);
            assert_eq!(Outcome::Failed.combine(next), Outcome::Failed);
        }
    }

    #[test]
    fn non_definitive_outcomes_are_replaced() {
        for prev in [Outcome::Untested, Outcome::Inapplicable] {
            for next in ALL {
                assert_eq!(prev.combine(next), next);
            }
        }
    }

    #[test]
    fn first_definitive_outcome_wins() {
        let folded = [Outcome::Inapplicable, Outcome::Passed, Outcome::Failed]
            .into_iter()
            .fold(Outcome::Untested, Outcome::combine);
        assert_eq!(folded, Outcome::Passed);
    }

    #[test]
    fn serializes_to_earl_outcome_node() {
        let value = serde_json::to_value(Outcome::Failed).expect("serializable");
        assert_eq!(
            value,
            json!({ "id": "earl:failed", "type": ["OutcomeValue", "Fail"], "title": "Failed" })
        );
        let value = serde_json::to_value(Outcome::Inapplicable).expect("serializable");
        assert_eq!(
            value,
            json!({ "id": "earl:inapplicable", "type": ["OutcomeValue", "NotApplicable"] })
        );
    }
}
