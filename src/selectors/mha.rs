//! MHA request derivations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format::format_percent;
use crate::models::{HouseholdProfiles, SalaryCalculationRecord};

/// Derived MHA totals and progress for the household.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MhaRequestData {
    /// Total MHA requested across the household.
    pub total_requested: Decimal,
    /// Total board-approved MHA across the household.
    pub board_approved_total: Decimal,
    /// `total_requested / board_approved_total * 100`, unclamped.
    ///
    /// Values above 100 signal over-commitment; display layers decide
    /// whether to clamp.
    pub progress_percent: Decimal,
    /// Convenience flag so callers need not compare the raw percentage.
    pub is_over_approved: bool,
    /// The progress percentage formatted for display.
    pub progress_display: String,
}

/// Derives MHA totals and progress from the loaded aggregates.
///
/// Returns `None` when the household has no board-approved MHA at all —
/// the no-MHA messaging branch applies instead, and a progress fraction
/// over a zero denominator is meaningless.
pub fn mha_request_data(
    household: &HouseholdProfiles,
    record: &SalaryCalculationRecord,
) -> Option<MhaRequestData> {
    let board_approved_total = household.primary.board_approved_mha
        + household
            .spouse
            .as_ref()
            .map_or(Decimal::ZERO, |s| s.board_approved_mha);

    if board_approved_total <= Decimal::ZERO {
        return None;
    }

    let total_requested = record.combined_mha_requested();
    let progress_percent = total_requested / board_approved_total * Decimal::ONE_HUNDRED;

    Some(MhaRequestData {
        total_requested,
        board_approved_total,
        progress_percent,
        is_over_approved: total_requested > board_approved_total,
        progress_display: format_percent(progress_percent),
    })
}
