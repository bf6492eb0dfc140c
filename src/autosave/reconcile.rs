//! Pure optimistic-merge and rollback transforms.
//!
//! The cached record is never mutated in place. An optimistic merge
//! produces the next record value from the current one and a patch; a
//! rollback restores the last confirmed value. Both are pure functions,
//! testable without any cache or transport.

use crate::models::SalaryCalculationRecord;

use super::patch::RecordPatch;

/// Applies a patch on top of the current record, producing the next value.
///
/// Only keys present in the patch are overwritten; everything else is
/// carried over, including the server-derived `calculations` sub-objects
/// (which are reconciled separately when the backend responds).
pub fn apply_optimistic(
    current: &SalaryCalculationRecord,
    patch: &RecordPatch,
) -> SalaryCalculationRecord {
    let mut next = current.clone();
    if let Some(value) = patch.requested_gross {
        next.requested_gross = value;
    }
    if let Some(value) = patch.spouse_requested_gross {
        next.spouse_requested_gross = Some(value);
    }
    if let Some(value) = patch.mha_requested {
        next.mha_requested = value;
    }
    if let Some(value) = patch.spouse_mha_requested {
        next.spouse_mha_requested = Some(value);
    }
    if let Some(value) = patch.split_cap_elected {
        next.split_cap_elected = value;
    }
    if let Some(value) = patch.split_primary_cap {
        next.split_primary_cap = Some(value);
    }
    if let Some(value) = patch.split_spouse_cap {
        next.split_spouse_cap = Some(value);
    }
    if let Some(value) = &patch.contact_phone {
        next.contact_phone = Some(value.clone());
    }
    if let Some(value) = &patch.contact_email {
        next.contact_email = Some(value.clone());
    }
    next
}

/// Reverts a failed optimistic merge to the last confirmed record value.
///
/// The rejected value is discarded entirely; the result is exactly the
/// last known-good state.
pub fn rollback(
    _rejected: &SalaryCalculationRecord,
    last_confirmed: &SalaryCalculationRecord,
) -> SalaryCalculationRecord {
    last_confirmed.clone()
}
