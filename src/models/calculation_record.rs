//! Salary calculation record models.
//!
//! The [`SalaryCalculationRecord`] is the mutable draft being edited by the
//! wizard. Every field write round-trips through the autosave commit
//! pipeline before it is considered persisted; the `calculations` and
//! `spouse_calculations` sub-objects are derived server-side and never
//! patched directly.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::approval_tier::ApprovalTier;

/// Server-derived calculation results for one person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonCalculations {
    /// Maximum allowable salary after any board-approved exception
    /// or split-cap election.
    pub effective_cap: Decimal,
    /// Estimated SECA tax on the requested salary.
    pub seca_estimate: Decimal,
    /// Estimated 403(b) contribution on the requested salary.
    pub retirement_403b_amount: Decimal,
    /// The progressive approval tier assigned to this person's request.
    pub approval_tier: ApprovalTier,
}

/// The mutable salary calculation draft edited by the wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryCalculationRecord {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// The household profile aggregate this record belongs to.
    pub household_id: Uuid,
    /// The staff member's requested gross salary.
    pub requested_gross: Decimal,
    /// The spouse's requested gross salary, when a spouse is on staff.
    #[serde(default)]
    pub spouse_requested_gross: Option<Decimal>,
    /// The staff member's requested MHA amount.
    pub mha_requested: Decimal,
    /// The spouse's requested MHA amount.
    #[serde(default)]
    pub spouse_mha_requested: Option<Decimal>,
    /// Whether the couple elected to split the combined family cap unevenly.
    #[serde(default)]
    pub split_cap_elected: bool,
    /// Under a split-cap election, the staff member's chosen cap share.
    #[serde(default)]
    pub split_primary_cap: Option<Decimal>,
    /// Under a split-cap election, the spouse's chosen cap share.
    #[serde(default)]
    pub split_spouse_cap: Option<Decimal>,
    /// Contact phone for approval follow-up.
    #[serde(default)]
    pub contact_phone: Option<String>,
    /// Contact email for approval follow-up.
    #[serde(default)]
    pub contact_email: Option<String>,
    /// Server-derived calculations for the staff member.
    #[serde(default)]
    pub calculations: Option<PersonCalculations>,
    /// Server-derived calculations for the spouse.
    #[serde(default)]
    pub spouse_calculations: Option<PersonCalculations>,
    /// Set when the record has been submitted for approval.
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    /// Last time any field was confirmed by the backend.
    pub updated_at: DateTime<Utc>,
}

impl SalaryCalculationRecord {
    /// Total requested gross across the household; absent spouse counts as 0.
    pub fn combined_gross(&self) -> Decimal {
        self.requested_gross + self.spouse_requested_gross.unwrap_or(Decimal::ZERO)
    }

    /// Total requested MHA across the household; absent spouse counts as 0.
    pub fn combined_mha_requested(&self) -> Decimal {
        self.mha_requested + self.spouse_mha_requested.unwrap_or(Decimal::ZERO)
    }

    /// Returns true once the record has been submitted for approval.
    pub fn is_submitted(&self) -> bool {
        self.submitted_at.is_some()
    }
}
