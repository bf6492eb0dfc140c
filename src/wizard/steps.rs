//! Wizard step definitions.
//!
//! The step list is fixed and ordered; navigation is strictly sequential
//! along it.

use serde::{Deserialize, Serialize};

/// Identifies one step of the salary calculation wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKey {
    /// Orientation and current-profile review.
    GettingStarted,
    /// Requested gross salary entry.
    Salary,
    /// Minister's Housing Allowance entry.
    HousingAllowance,
    /// Max-allowable / split-cap election.
    MaxAllowable,
    /// Review, contact info, and submit.
    Review,
}

impl StepKey {
    /// The fixed, ordered step list.
    pub const ORDERED: [StepKey; 5] = [
        StepKey::GettingStarted,
        StepKey::Salary,
        StepKey::HousingAllowance,
        StepKey::MaxAllowable,
        StepKey::Review,
    ];

    /// The label shown for this step in the progress drawer.
    pub fn label(&self) -> &'static str {
        match self {
            StepKey::GettingStarted => "Getting Started",
            StepKey::Salary => "Salary",
            StepKey::HousingAllowance => "Housing Allowance",
            StepKey::MaxAllowable => "Max Allowable",
            StepKey::Review => "Review & Submit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_list_starts_and_ends_correctly() {
        assert_eq!(StepKey::ORDERED.first(), Some(&StepKey::GettingStarted));
        assert_eq!(StepKey::ORDERED.last(), Some(&StepKey::Review));
    }

    #[test]
    fn test_labels_are_nonempty_and_unique() {
        let labels: Vec<&str> = StepKey::ORDERED.iter().map(|k| k.label()).collect();
        for label in &labels {
            assert!(!label.is_empty());
        }
        let mut deduped = labels.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), labels.len());
    }

    #[test]
    fn test_step_key_serialization() {
        assert_eq!(
            serde_json::to_string(&StepKey::HousingAllowance).unwrap(),
            "\"housing_allowance\""
        );
    }
}
