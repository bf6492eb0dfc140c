//! Configuration type definitions.
//!
//! These types mirror the YAML plan configuration files: plan metadata,
//! the cap schedule, and the progressive-approval tier table.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Metadata about the salary plan configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanMetadata {
    /// Short plan code (e.g. "sp_2026").
    pub code: String,
    /// Human-readable plan name.
    pub name: String,
    /// The plan year the caps apply to.
    pub plan_year: i32,
    /// Where the cap schedule was sourced from.
    pub source_url: String,
}

/// The cap schedule and statutory fractions for a plan year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapSchedule {
    /// Default per-person maximum allowable salary before exceptions.
    pub individual_cap: Decimal,
    /// Hard ceiling on a couple's combined caps under a split-cap election.
    pub combined_cap_ceiling: Decimal,
    /// SECA tax estimate as a fraction of base salary.
    pub seca_rate: Decimal,
    /// 403(b) contribution fraction used in the retirement estimate.
    pub retirement_403b_fraction: Decimal,
}

/// Identifies an escalation level in the approval ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierKey {
    /// First escalation level; informational, no approval workflow.
    DivisionHead,
    /// Requires the vice-president approval workflow.
    VicePresident,
    /// Requires the president approval workflow.
    President,
}

/// One rung of the progressive-approval ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierRule {
    /// Which escalation level this rule defines.
    pub key: TierKey,
    /// Display name of the approver for this tier.
    pub approver: String,
    /// SLA for a decision, in days.
    pub timeframe_days: u32,
    /// Largest over-cap amount this tier handles; `None` means unbounded.
    #[serde(default)]
    pub max_overage: Option<Decimal>,
}

/// Wrapper matching the top-level `tiers:` key in tiers.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierTable {
    /// Tier rules ordered from lowest to highest escalation.
    pub tiers: Vec<TierRule>,
}

/// The complete, loaded plan configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanConfig {
    metadata: PlanMetadata,
    caps: CapSchedule,
    tiers: Vec<TierRule>,
}

impl PlanConfig {
    /// Assembles a plan configuration from its parts.
    pub fn new(metadata: PlanMetadata, caps: CapSchedule, tiers: Vec<TierRule>) -> Self {
        Self {
            metadata,
            caps,
            tiers,
        }
    }

    /// Returns the plan metadata.
    pub fn metadata(&self) -> &PlanMetadata {
        &self.metadata
    }

    /// Returns the cap schedule.
    pub fn caps(&self) -> &CapSchedule {
        &self.caps
    }

    /// Returns the tier rules, ordered from lowest to highest escalation.
    pub fn tiers(&self) -> &[TierRule] {
        &self.tiers
    }

    /// Finds the tier rule that handles the given over-cap amount.
    ///
    /// Returns `None` when the overage is zero or negative (no escalation).
    /// Rules are matched in order; a rule with `max_overage: None` catches
    /// everything above the previous rule's limit.
    pub fn tier_for_overage(&self, overage: Decimal) -> Option<&TierRule> {
        if overage <= Decimal::ZERO {
            return None;
        }
        self.tiers
            .iter()
            .find(|rule| rule.max_overage.is_none_or(|limit| overage <= limit))
    }
}
