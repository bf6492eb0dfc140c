//! Autosave field bindings and the commit pipeline.
//!
//! This module implements persistence without an explicit Save action:
//! per-control edit state with dirty checking, patch diffing that skips
//! no-op writes, validation gating, and the pure optimistic-merge and
//! rollback transforms used to keep the cached record consistent.

mod commit;
mod field_edit;
mod patch;
mod reconcile;

pub use commit::{CommitOutcome, prepare_commit};
pub use field_edit::{CommitTrigger, FieldEdit};
pub use patch::{RecordField, RecordPatch};
pub use reconcile::{apply_optimistic, rollback};
