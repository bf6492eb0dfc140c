//! Progressive approval tier model.
//!
//! The tier is a tagged union rather than a bundle of boolean flags so that
//! every consumer matches exhaustively on the escalation level.

use serde::{Deserialize, Serialize};

use crate::config::{TierKey, TierRule};

/// The escalation level assigned to a salary request.
///
/// Division Head is informational only: the request is flagged but no
/// approval workflow is required. Any higher tier requires the approval
/// workflow, carrying the approver's name and decision SLA.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ApprovalTier {
    /// The request is within all applicable caps.
    NoApprovalNeeded,
    /// Over cap within the division-head band; informational, no escalation.
    DivisionHead {
        /// Display name of the division head.
        approver: String,
        /// SLA for review, in days.
        timeframe_days: u32,
    },
    /// Over cap beyond the division-head band; approval workflow required.
    Escalated {
        /// Which rung of the ladder the request escalated to.
        key: TierKey,
        /// Display name of the approver.
        approver: String,
        /// SLA for a decision, in days.
        timeframe_days: u32,
    },
}

impl ApprovalTier {
    /// Builds a tier from a matched configuration rule.
    pub fn from_rule(rule: &TierRule) -> Self {
        match rule.key {
            TierKey::DivisionHead => ApprovalTier::DivisionHead {
                approver: rule.approver.clone(),
                timeframe_days: rule.timeframe_days,
            },
            key => ApprovalTier::Escalated {
                key,
                approver: rule.approver.clone(),
                timeframe_days: rule.timeframe_days,
            },
        }
    }

    /// Returns true when the approval workflow is required.
    ///
    /// Division Head is treated as informational; only higher tiers
    /// require escalation.
    pub fn requires_approval(&self) -> bool {
        matches!(self, ApprovalTier::Escalated { .. })
    }

    /// Returns the approver's display name, if any tier applies.
    pub fn approver(&self) -> Option<&str> {
        match self {
            ApprovalTier::NoApprovalNeeded => None,
            ApprovalTier::DivisionHead { approver, .. }
            | ApprovalTier::Escalated { approver, .. } => Some(approver),
        }
    }

    /// Returns the decision SLA in days, if any tier applies.
    pub fn timeframe_days(&self) -> Option<u32> {
        match self {
            ApprovalTier::NoApprovalNeeded => None,
            ApprovalTier::DivisionHead { timeframe_days, .. }
            | ApprovalTier::Escalated { timeframe_days, .. } => Some(*timeframe_days),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn division_head_rule() -> TierRule {
        TierRule {
            key: TierKey::DivisionHead,
            approver: "Division Head".to_string(),
            timeframe_days: 5,
            max_overage: Some(dec!(5000)),
        }
    }

    fn vice_president_rule() -> TierRule {
        TierRule {
            key: TierKey::VicePresident,
            approver: "Vice President".to_string(),
            timeframe_days: 10,
            max_overage: None,
        }
    }

    #[test]
    fn test_no_approval_needed_requires_no_approval() {
        assert!(!ApprovalTier::NoApprovalNeeded.requires_approval());
    }

    #[test]
    fn test_division_head_is_informational() {
        let tier = ApprovalTier::from_rule(&division_head_rule());
        assert!(!tier.requires_approval());
        assert_eq!(tier.approver(), Some("Division Head"));
        assert_eq!(tier.timeframe_days(), Some(5));
    }

    #[test]
    fn test_escalated_tier_requires_approval() {
        let tier = ApprovalTier::from_rule(&vice_president_rule());
        assert!(tier.requires_approval());
        assert_eq!(tier.approver(), Some("Vice President"));
        assert_eq!(tier.timeframe_days(), Some(10));
    }

    #[test]
    fn test_from_rule_maps_division_head_variant() {
        let tier = ApprovalTier::from_rule(&division_head_rule());
        assert!(matches!(tier, ApprovalTier::DivisionHead { .. }));
    }

    #[test]
    fn test_serialization_is_tagged() {
        let json = serde_json::to_string(&ApprovalTier::NoApprovalNeeded).unwrap();
        assert!(json.contains("\"status\":\"no_approval_needed\""));

        let tier = ApprovalTier::from_rule(&vice_president_rule());
        let json = serde_json::to_string(&tier).unwrap();
        assert!(json.contains("\"status\":\"escalated\""));
        assert!(json.contains("\"key\":\"vice_president\""));
    }
}
