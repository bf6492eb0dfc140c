//! Approval tier derivation and recomputation of the per-person
//! calculation aggregates.
//!
//! The wizard consumes the `calculations` sub-objects as already-resolved
//! values; this module is where the engine produces them — effective cap,
//! SECA estimate, 403(b) amount, and the progressive approval tier —
//! whenever a commit lands.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PlanConfig;
use crate::format::round_half_up;
use crate::models::{
    ApprovalTier, HouseholdProfiles, PersonCalculations, SalaryCalculationRecord, StaffProfile,
};

/// Assigns the approval tier for one person's request.
///
/// A request at or under the effective cap needs no approval. Otherwise
/// the overage is matched against the configured tier ladder.
pub fn derive_tier(
    requested: Decimal,
    effective_cap: Decimal,
    config: &PlanConfig,
) -> ApprovalTier {
    let overage = requested - effective_cap;
    match config.tier_for_overage(overage) {
        Some(rule) => ApprovalTier::from_rule(rule),
        None => ApprovalTier::NoApprovalNeeded,
    }
}

/// Computes one person's effective cap.
///
/// Under a split-cap election the chosen share replaces the default
/// individual cap; a board-approved exception raises the result when it
/// is higher.
pub fn effective_cap(
    profile: &StaffProfile,
    split_share: Option<Decimal>,
    split_elected: bool,
    config: &PlanConfig,
) -> Decimal {
    let base = match (split_elected, split_share) {
        (true, Some(share)) => share,
        _ => config.caps().individual_cap,
    };
    match profile.exception_cap {
        Some(exception) => base.max(exception),
        None => base,
    }
}

fn person_calculations(
    requested: Decimal,
    profile: &StaffProfile,
    split_share: Option<Decimal>,
    split_elected: bool,
    config: &PlanConfig,
) -> PersonCalculations {
    let cap = effective_cap(profile, split_share, split_elected, config);
    PersonCalculations {
        effective_cap: cap,
        seca_estimate: round_half_up(requested * config.caps().seca_rate),
        retirement_403b_amount: round_half_up(
            requested * config.caps().retirement_403b_fraction,
        ),
        approval_tier: derive_tier(requested, cap, config),
    }
}

/// Recomputes both parties' calculation aggregates for the current record.
///
/// The spouse aggregate is produced only when a spouse profile is present;
/// an absent spouse request counts as zero.
pub fn recompute_calculations(
    record: &SalaryCalculationRecord,
    household: &HouseholdProfiles,
    config: &PlanConfig,
) -> (Option<PersonCalculations>, Option<PersonCalculations>) {
    let primary = person_calculations(
        record.requested_gross,
        &household.primary,
        record.split_primary_cap,
        record.split_cap_elected,
        config,
    );

    let spouse = household.spouse.as_ref().map(|profile| {
        person_calculations(
            record.spouse_requested_gross.unwrap_or(Decimal::ZERO),
            profile,
            record.split_spouse_cap,
            record.split_cap_elected,
            config,
        )
    });

    (Some(primary), spouse)
}

/// Whether the approval workflow is required for the household.
///
/// `None` while the calculation aggregates are not yet available. True
/// when either party's tier is escalated beyond Division Head.
pub fn approval_required(
    record: &SalaryCalculationRecord,
    household: &HouseholdProfiles,
) -> Option<bool> {
    let primary = record.calculations.as_ref()?;
    let spouse_requires = match &household.spouse {
        Some(_) => record
            .spouse_calculations
            .as_ref()?
            .approval_tier
            .requires_approval(),
        None => false,
    };
    Some(primary.approval_tier.requires_approval() || spouse_requires)
}

/// Conditional approval copy for one tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalNotice {
    /// Who reviews the request.
    pub approver: String,
    /// SLA for a decision, in days.
    pub timeframe_days: u32,
    /// The sentence shown to the staff member.
    pub message: String,
}

/// Builds the approval copy for a tier; `None` when no tier applies.
pub fn approval_notice(tier: &ApprovalTier) -> Option<ApprovalNotice> {
    match tier {
        ApprovalTier::NoApprovalNeeded => None,
        ApprovalTier::DivisionHead {
            approver,
            timeframe_days,
        } => Some(ApprovalNotice {
            approver: approver.clone(),
            timeframe_days: *timeframe_days,
            message: format!(
                "Your {} will be notified of this request; no further action is needed",
                approver
            ),
        }),
        ApprovalTier::Escalated {
            approver,
            timeframe_days,
            ..
        } => Some(ApprovalNotice {
            approver: approver.clone(),
            timeframe_days: *timeframe_days,
            message: format!(
                "This request requires {} approval; expect a decision within {} days",
                approver, timeframe_days
            ),
        }),
    }
}
