//! The autosave commit pipeline.
//!
//! Ordering is fixed: validate first (an invalid value never reaches the
//! wire), then diff against the loaded record (an unchanged value never
//! generates traffic), then produce the changed-keys-only patch together
//! with the optimistically merged record.

use crate::error::{EngineError, EngineResult};
use crate::models::SalaryCalculationRecord;
use crate::validation::RecordSchema;

use super::patch::RecordPatch;
use super::reconcile::apply_optimistic;

/// The result of preparing a commit.
#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome {
    /// Every present key already holds the record's value; no write issued.
    Skipped,
    /// The patch changes the record; the write should be issued.
    Committed {
        /// The patch reduced to its changed keys.
        patch: RecordPatch,
        /// The record with the patch optimistically merged in.
        optimistic: SalaryCalculationRecord,
    },
}

/// Runs the commit pipeline for a pending patch.
///
/// # Errors
///
/// - [`EngineError::RecordNotLoaded`] when `record` is `None`: the bound
///   controls are disabled and writes are suppressed, never queued.
/// - [`EngineError::ValidationFailed`] when any pending value fails the
///   schema: the write is withheld entirely.
pub fn prepare_commit(
    record: Option<&SalaryCalculationRecord>,
    patch: &RecordPatch,
    schema: &RecordSchema,
) -> EngineResult<CommitOutcome> {
    let Some(record) = record else {
        let field = patch
            .fields_present()
            .first()
            .map(|f| f.name())
            .unwrap_or("record");
        return Err(EngineError::RecordNotLoaded {
            field: field.to_string(),
        });
    };

    schema.validate_patch(patch)?;

    let changed = patch.retain_changed(record);
    if changed.is_empty() {
        tracing::debug!(record_id = %record.id, "commit skipped: no changed keys");
        return Ok(CommitOutcome::Skipped);
    }

    let optimistic = apply_optimistic(record, &changed);
    Ok(CommitOutcome::Committed {
        patch: changed,
        optimistic,
    })
}
