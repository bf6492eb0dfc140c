//! Property-based tests for the wizard state machine and the autosave
//! pipeline invariants.

use chrono::Utc;
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use salary_wizard::autosave::{CommitOutcome, RecordPatch, apply_optimistic, prepare_commit, rollback};
use salary_wizard::format::{Currency, Locale, format_currency, parse_amount, round_half_up};
use salary_wizard::models::{HouseholdProfiles, SalaryCalculationRecord, StaffProfile};
use salary_wizard::validation::record_schema;
use salary_wizard::wizard::WizardSession;
use salary_wizard::config::CapSchedule;

// =============================================================================
// Helpers and strategies
// =============================================================================

fn amount() -> impl Strategy<Value = Decimal> {
    // Dollar amounts in cents, up to $1M
    (0i64..=100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn household() -> HouseholdProfiles {
    HouseholdProfiles {
        primary: StaffProfile {
            id: Uuid::new_v4(),
            display_name: "Jordan".to_string(),
            board_approved_mha: Decimal::new(100_000_000, 2),
            ibs_course_eligible: true,
            exception_cap: None,
        },
        spouse: None,
    }
}

fn caps() -> CapSchedule {
    CapSchedule {
        individual_cap: Decimal::new(9_000_000, 2),
        combined_cap_ceiling: Decimal::new(18_000_000, 2),
        seca_rate: Decimal::new(765, 4),
        retirement_403b_fraction: Decimal::new(10, 2),
    }
}

fn empty_record() -> SalaryCalculationRecord {
    SalaryCalculationRecord {
        id: Uuid::new_v4(),
        household_id: Uuid::new_v4(),
        requested_gross: Decimal::ZERO,
        spouse_requested_gross: None,
        mha_requested: Decimal::ZERO,
        spouse_mha_requested: None,
        split_cap_elected: false,
        split_primary_cap: None,
        split_spouse_cap: None,
        contact_phone: None,
        contact_email: None,
        calculations: None,
        spouse_calculations: None,
        submitted_at: None,
        updated_at: Utc::now(),
    }
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Advance,
    Back,
    Goto(usize),
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Advance),
        Just(Action::Back),
        (0usize..8).prop_map(Action::Goto),
    ]
}

// =============================================================================
// Wizard invariants
// =============================================================================

proptest! {
    /// Exactly one step is current after any navigation sequence.
    #[test]
    fn exactly_one_current_step(actions in prop::collection::vec(action(), 0..40)) {
        let mut session = WizardSession::new();
        for act in actions {
            match act {
                Action::Advance => { session.advance(); }
                Action::Back => { session.back(); }
                Action::Goto(index) => { session.go_to_step(index); }
            }
            let current = session.steps().iter().filter(|s| s.current).count();
            prop_assert_eq!(current, 1);
        }
    }

    /// Progress is always in 20..=100 and tracks the current index.
    #[test]
    fn percent_tracks_position(actions in prop::collection::vec(action(), 0..40)) {
        let mut session = WizardSession::new();
        for act in actions {
            match act {
                Action::Advance => { session.advance(); }
                Action::Back => { session.back(); }
                Action::Goto(index) => { session.go_to_step(index); }
            }
            let percent = session.percent_complete();
            prop_assert!((20..=100).contains(&percent));
            let expected = ((session.current_index() + 1) as f64
                / session.steps().len() as f64
                * 100.0)
                .round() as u8;
            prop_assert_eq!(percent, expected);
        }
    }

    /// Out-of-bounds targets never change the session.
    #[test]
    fn out_of_bounds_goto_is_noop(index in 5usize..100) {
        let mut session = WizardSession::new();
        session.advance();
        let before = session.clone();
        session.go_to_step(index);
        prop_assert_eq!(session, before);
    }
}

// =============================================================================
// Autosave invariants
// =============================================================================

proptest! {
    /// Committing the same patch twice never issues a second write.
    #[test]
    fn commit_is_idempotent(gross in amount(), mha in amount()) {
        let household = household();
        let caps = caps();
        let schema = record_schema(&household, &caps);
        let record = empty_record();

        let patch = RecordPatch {
            requested_gross: Some(gross),
            mha_requested: Some(mha),
            ..RecordPatch::default()
        };

        match prepare_commit(Some(&record), &patch, &schema).unwrap() {
            CommitOutcome::Committed { optimistic, .. } => {
                // Replaying against the confirmed state is a no-op
                let replay = prepare_commit(Some(&optimistic), &patch, &schema).unwrap();
                prop_assert_eq!(replay, CommitOutcome::Skipped);
            }
            CommitOutcome::Skipped => {
                // Only possible when the patch matches the empty record
                prop_assert_eq!(gross, Decimal::ZERO);
                prop_assert_eq!(mha, Decimal::ZERO);
            }
        }
    }

    /// A merge followed by a rollback restores the confirmed state.
    #[test]
    fn rollback_restores_confirmed_state(gross in amount(), mha in amount()) {
        let confirmed = empty_record();
        let patch = RecordPatch {
            requested_gross: Some(gross),
            mha_requested: Some(mha),
            ..RecordPatch::default()
        };

        let optimistic = apply_optimistic(&confirmed, &patch);
        let restored = rollback(&optimistic, &confirmed);
        prop_assert_eq!(restored, confirmed);
    }

    /// The optimistic merge touches only the patched keys.
    #[test]
    fn merge_preserves_unpatched_keys(gross in amount()) {
        let confirmed = empty_record();
        let patch = RecordPatch {
            requested_gross: Some(gross),
            ..RecordPatch::default()
        };

        let optimistic = apply_optimistic(&confirmed, &patch);
        prop_assert_eq!(optimistic.requested_gross, gross);
        prop_assert_eq!(optimistic.mha_requested, confirmed.mha_requested);
        prop_assert_eq!(optimistic.contact_phone, confirmed.contact_phone);
        prop_assert_eq!(optimistic.id, confirmed.id);
    }
}

// =============================================================================
// Formatting round trips
// =============================================================================

proptest! {
    /// Parsing a formatted amount recovers the rounded value.
    #[test]
    fn parse_recovers_formatted_amount(value in amount()) {
        let formatted = format_currency(value, Currency::default(), Locale::default());
        let parsed = parse_amount(&formatted).unwrap();
        prop_assert_eq!(parsed, round_half_up(value));
    }
}
