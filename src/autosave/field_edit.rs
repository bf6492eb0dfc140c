//! Per-control field edit state.
//!
//! A [`FieldEdit`] binds one editable value to one form control: it tracks
//! the pending value, the last committed value, and any inline validation
//! error, and decides when a commit should fire. Text-style controls defer
//! the commit to blur; discrete controls (checkbox, autocomplete) commit
//! immediately on change.

use super::patch::RecordField;

/// The event that releases a pending value to the commit pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitTrigger {
    /// Commit when the control loses focus (text fields).
    Blur,
    /// Commit immediately on change (checkbox, autocomplete).
    Change,
}

/// Edit state for one autosave-bound control.
///
/// Created when the control mounts, synced against the loaded record, and
/// discarded on unmount. While the backing record is not loaded the binding
/// is disabled: pending input is dropped, never queued.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEdit<T> {
    field: RecordField,
    trigger: CommitTrigger,
    enabled: bool,
    pending: Option<T>,
    last_committed: Option<T>,
    validation_error: Option<String>,
}

impl<T: Clone + PartialEq> FieldEdit<T> {
    /// Creates a text-style binding (commits on blur).
    pub fn text(field: RecordField) -> Self {
        Self::with_trigger(field, CommitTrigger::Blur)
    }

    /// Creates a discrete binding (commits on change).
    pub fn discrete(field: RecordField) -> Self {
        Self::with_trigger(field, CommitTrigger::Change)
    }

    fn with_trigger(field: RecordField, trigger: CommitTrigger) -> Self {
        Self {
            field,
            trigger,
            enabled: false,
            pending: None,
            last_committed: None,
            validation_error: None,
        }
    }

    /// Returns the field this binding edits.
    pub fn field(&self) -> RecordField {
        self.field
    }

    /// Syncs the binding against the loaded record value.
    ///
    /// `None` means the record is not loaded: the control is disabled and
    /// any pending input is dropped. A confirmed value enables the control
    /// and becomes the new committed baseline.
    pub fn sync(&mut self, loaded: Option<T>) {
        match loaded {
            Some(value) => {
                self.enabled = true;
                self.last_committed = Some(value);
            }
            None => {
                self.enabled = false;
                self.pending = None;
                self.last_committed = None;
                self.validation_error = None;
            }
        }
    }

    /// Returns whether the control is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Records a pending value from the control. Ignored while disabled.
    pub fn set_pending(&mut self, value: T) {
        if self.enabled {
            self.pending = Some(value);
        }
    }

    /// Returns the pending value, if any.
    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref()
    }

    /// Returns true when the pending value differs from the committed one.
    pub fn is_dirty(&self) -> bool {
        match &self.pending {
            Some(pending) => self.last_committed.as_ref() != Some(pending),
            None => false,
        }
    }

    /// Decides whether a commit should fire for the given trigger.
    ///
    /// A commit fires only when the control is enabled, the trigger matches
    /// the binding's style, the pending value is dirty, and no validation
    /// error is outstanding.
    pub fn should_commit(&self, trigger: CommitTrigger) -> bool {
        self.enabled && trigger == self.trigger && self.validation_error.is_none() && self.is_dirty()
    }

    /// Confirms the pending value as committed.
    pub fn mark_committed(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.last_committed = Some(pending);
        }
    }

    /// Surfaces an inline validation error; the pending value is kept so
    /// the user can correct it.
    pub fn set_validation_error(&mut self, message: impl Into<String>) {
        self.validation_error = Some(message.into());
    }

    /// Clears the inline validation error.
    pub fn clear_validation_error(&mut self) {
        self.validation_error = None;
    }

    /// Returns the inline validation error, if any.
    pub fn validation_error(&self) -> Option<&str> {
        self.validation_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn loaded_binding(value: Decimal) -> FieldEdit<Decimal> {
        let mut edit = FieldEdit::text(RecordField::RequestedGross);
        edit.sync(Some(value));
        edit
    }

    /// FE-001: disabled while the record is unloaded, input dropped not queued
    #[test]
    fn test_disabled_when_unloaded() {
        let mut edit: FieldEdit<Decimal> = FieldEdit::text(RecordField::RequestedGross);
        assert!(!edit.is_enabled());

        edit.set_pending(dec!(50000));
        assert!(edit.pending().is_none());
        assert!(!edit.should_commit(CommitTrigger::Blur));
    }

    /// FE-002: unloading drops pending input
    #[test]
    fn test_unloading_drops_pending_input() {
        let mut edit = loaded_binding(dec!(50000));
        edit.set_pending(dec!(51000));
        assert!(edit.is_dirty());

        edit.sync(None);
        assert!(!edit.is_enabled());
        assert!(edit.pending().is_none());
    }

    /// FE-003: clean pending value never commits
    #[test]
    fn test_unchanged_pending_does_not_commit() {
        let mut edit = loaded_binding(dec!(50000));
        edit.set_pending(dec!(50000));
        assert!(!edit.is_dirty());
        assert!(!edit.should_commit(CommitTrigger::Blur));
    }

    /// FE-004: dirty value commits on the binding's trigger only
    #[test]
    fn test_commit_fires_on_matching_trigger_only() {
        let mut text = loaded_binding(dec!(50000));
        text.set_pending(dec!(51000));
        assert!(text.should_commit(CommitTrigger::Blur));
        assert!(!text.should_commit(CommitTrigger::Change));

        let mut discrete: FieldEdit<bool> = FieldEdit::discrete(RecordField::SplitCapElected);
        discrete.sync(Some(false));
        discrete.set_pending(true);
        assert!(discrete.should_commit(CommitTrigger::Change));
        assert!(!discrete.should_commit(CommitTrigger::Blur));
    }

    /// FE-005: second commit of the same value is a no-op
    #[test]
    fn test_mark_committed_makes_value_clean() {
        let mut edit = loaded_binding(dec!(50000));
        edit.set_pending(dec!(51000));
        assert!(edit.should_commit(CommitTrigger::Blur));

        edit.mark_committed();
        assert!(!edit.is_dirty());

        // Re-entering the identical value stays clean.
        edit.set_pending(dec!(51000));
        assert!(!edit.should_commit(CommitTrigger::Blur));
    }

    /// FE-006: outstanding validation error blocks the commit
    #[test]
    fn test_validation_error_blocks_commit() {
        let mut edit = loaded_binding(dec!(50000));
        edit.set_pending(dec!(-1));
        edit.set_validation_error("must not be negative");
        assert!(!edit.should_commit(CommitTrigger::Blur));
        assert_eq!(edit.validation_error(), Some("must not be negative"));

        edit.set_pending(dec!(51000));
        edit.clear_validation_error();
        assert!(edit.should_commit(CommitTrigger::Blur));
    }
}
