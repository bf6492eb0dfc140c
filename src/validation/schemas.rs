//! Per-section schema builders.
//!
//! Builders are pure functions of their runtime bounds. A schema embeds the
//! formatted bound in its messages at construction time, so callers must
//! rebuild schemas whenever the bounds change — a stale schema carries a
//! stale cap.

use rust_decimal::Decimal;

use crate::autosave::{RecordField, RecordPatch};
use crate::config::CapSchedule;
use crate::format::{Currency, Locale, format_currency};
use crate::models::HouseholdProfiles;

use super::rules::{AmountSchema, FieldError, TextSchema};

/// Builds the schema for a requested-gross salary field.
///
/// Salary may exceed the cap (that is what the approval tiers are for), so
/// the only hard rule is non-negativity.
pub fn salary_schema(field: RecordField) -> AmountSchema {
    AmountSchema::new(field).non_negative("Requested salary must not be negative")
}

/// Builds the schema for an MHA request field, bounded by the person's
/// board-approved overall amount.
///
/// The error message embeds the exact formatted approved amount.
pub fn mha_schema(
    field: RecordField,
    approved: Decimal,
    currency: Currency,
    locale: Locale,
) -> AmountSchema {
    let formatted = format_currency(approved, currency, locale);
    AmountSchema::new(field)
        .non_negative("Requested housing allowance must not be negative")
        .max(
            approved,
            format!(
                "Requested housing allowance must not exceed the board-approved {}",
                formatted
            ),
        )
}

/// Builds the schema for one person's cap share under a split-cap election.
pub fn split_cap_schema(
    field: RecordField,
    ceiling: Decimal,
    currency: Currency,
    locale: Locale,
) -> AmountSchema {
    let formatted = format_currency(ceiling, currency, locale);
    AmountSchema::new(field)
        .non_negative("Cap share must not be negative")
        .max(
            ceiling,
            format!("Cap share must not exceed the combined cap ceiling of {}", formatted),
        )
}

/// Builds the schema for the contact phone field.
pub fn contact_phone_schema() -> TextSchema {
    TextSchema::new(RecordField::ContactPhone).non_empty("Contact phone is required")
}

/// Builds the schema for the contact email field.
pub fn contact_email_schema() -> TextSchema {
    TextSchema::new(RecordField::ContactEmail)
        .non_empty("Contact email is required")
        .email("Contact email must be a valid email address")
}

/// The inline alert raised by the cross-field split-cap check.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedCapAlert {
    /// Message shown in the Max-Allowable section.
    pub message: String,
}

/// Cross-field rule for the Max-Allowable section.
///
/// The entered combined amount is `primary_cap + spouse_cap`; when it
/// exceeds the combined cap ceiling an inline alert is returned. This is a
/// presentation-level check in addition to the per-field max validators,
/// not a replacement for them.
pub fn combined_split_alert(
    primary_cap: Decimal,
    spouse_cap: Decimal,
    ceiling: Decimal,
    currency: Currency,
    locale: Locale,
) -> Option<CombinedCapAlert> {
    let entered = primary_cap + spouse_cap;
    if entered <= ceiling {
        return None;
    }
    Some(CombinedCapAlert {
        message: format!(
            "The combined caps entered ({}) exceed the allowed combined cap of {}",
            format_currency(entered, currency, locale),
            format_currency(ceiling, currency, locale),
        ),
    })
}

/// The full per-record schema set used by the commit pipeline.
///
/// Built fresh from the currently loaded profiles and cap schedule on every
/// commit, so the bounds are never stale.
#[derive(Debug, Clone)]
pub struct RecordSchema {
    paired: bool,
    amounts: Vec<AmountSchema>,
    texts: Vec<TextSchema>,
}

impl RecordSchema {
    /// Validates every key present in a patch; the first failure wins.
    ///
    /// Spouse-scoped keys are rejected outright when the household has no
    /// spouse — those fields do not exist for a single record.
    pub fn validate_patch(&self, patch: &RecordPatch) -> Result<(), FieldError> {
        for field in patch.fields_present() {
            if !self.paired && is_spouse_field(field) {
                return Err(FieldError {
                    field,
                    message: "No spouse on this record".to_string(),
                });
            }
        }

        for schema in &self.amounts {
            if let Some(value) = amount_for(patch, schema.field()) {
                schema.validate(value)?;
            }
        }
        for schema in &self.texts {
            if let Some(value) = text_for(patch, schema.field()) {
                schema.validate(value)?;
            }
        }
        Ok(())
    }
}

fn is_spouse_field(field: RecordField) -> bool {
    matches!(
        field,
        RecordField::SpouseRequestedGross
            | RecordField::SpouseMhaRequested
            | RecordField::SplitSpouseCap
    )
}

fn amount_for(patch: &RecordPatch, field: RecordField) -> Option<Decimal> {
    match field {
        RecordField::RequestedGross => patch.requested_gross,
        RecordField::SpouseRequestedGross => patch.spouse_requested_gross,
        RecordField::MhaRequested => patch.mha_requested,
        RecordField::SpouseMhaRequested => patch.spouse_mha_requested,
        RecordField::SplitPrimaryCap => patch.split_primary_cap,
        RecordField::SplitSpouseCap => patch.split_spouse_cap,
        _ => None,
    }
}

fn text_for(patch: &RecordPatch, field: RecordField) -> Option<&str> {
    match field {
        RecordField::ContactPhone => patch.contact_phone.as_deref(),
        RecordField::ContactEmail => patch.contact_email.as_deref(),
        _ => None,
    }
}

/// Builds the full record schema from the loaded profiles and cap schedule.
///
/// MHA bounds come from each person's board-approved amount; split-cap
/// bounds come from the combined ceiling. Spouse schemas are only included
/// when a spouse is present.
pub fn record_schema(household: &HouseholdProfiles, caps: &CapSchedule) -> RecordSchema {
    let currency = Currency::default();
    let locale = Locale::default();

    let mut amounts = vec![
        salary_schema(RecordField::RequestedGross),
        mha_schema(
            RecordField::MhaRequested,
            household.primary.board_approved_mha,
            currency,
            locale,
        ),
        split_cap_schema(
            RecordField::SplitPrimaryCap,
            caps.combined_cap_ceiling,
            currency,
            locale,
        ),
    ];

    if let Some(spouse) = &household.spouse {
        amounts.push(salary_schema(RecordField::SpouseRequestedGross));
        amounts.push(mha_schema(
            RecordField::SpouseMhaRequested,
            spouse.board_approved_mha,
            currency,
            locale,
        ));
        amounts.push(split_cap_schema(
            RecordField::SplitSpouseCap,
            caps.combined_cap_ceiling,
            currency,
            locale,
        ));
    }

    RecordSchema {
        paired: household.is_paired(),
        amounts,
        texts: vec![contact_phone_schema(), contact_email_schema()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use crate::models::StaffProfile;

    fn profile(name: &str, approved_mha: Decimal) -> StaffProfile {
        StaffProfile {
            id: Uuid::new_v4(),
            display_name: name.to_string(),
            board_approved_mha: approved_mha,
            ibs_course_eligible: true,
            exception_cap: None,
        }
    }

    fn caps() -> CapSchedule {
        CapSchedule {
            individual_cap: dec!(90000),
            combined_cap_ceiling: dec!(180000),
            seca_rate: dec!(0.0765),
            retirement_403b_fraction: dec!(0.10),
        }
    }

    fn paired_household() -> HouseholdProfiles {
        HouseholdProfiles {
            primary: profile("Jordan", dec!(12000)),
            spouse: Some(profile("Casey", dec!(8000))),
        }
    }

    fn single_household() -> HouseholdProfiles {
        HouseholdProfiles {
            primary: profile("Jordan", dec!(12000)),
            spouse: None,
        }
    }

    /// VS-001: MHA over the approved bound is rejected with the formatted bound
    #[test]
    fn test_mha_over_bound_rejected_with_formatted_amount() {
        let schema = record_schema(&paired_household(), &caps());
        let patch = RecordPatch {
            mha_requested: Some(dec!(12000.01)),
            ..Default::default()
        };

        let err = schema.validate_patch(&patch).unwrap_err();
        assert_eq!(err.field, RecordField::MhaRequested);
        assert!(err.message.contains("$12,000.00"), "got: {}", err.message);
    }

    /// VS-002: MHA at the bound for both parties passes
    #[test]
    fn test_mha_at_bound_for_both_parties_passes() {
        let schema = record_schema(&paired_household(), &caps());
        let patch = RecordPatch {
            mha_requested: Some(dec!(12000)),
            spouse_mha_requested: Some(dec!(8000)),
            ..Default::default()
        };
        assert!(schema.validate_patch(&patch).is_ok());
    }

    /// VS-003: spouse bound is the spouse's own approved amount
    #[test]
    fn test_spouse_mha_bound_uses_spouse_amount() {
        let schema = record_schema(&paired_household(), &caps());
        let patch = RecordPatch {
            spouse_mha_requested: Some(dec!(8500)),
            ..Default::default()
        };

        let err = schema.validate_patch(&patch).unwrap_err();
        assert_eq!(err.field, RecordField::SpouseMhaRequested);
        assert!(err.message.contains("$8,000.00"));
    }

    /// VS-004: spouse fields are rejected for a single household
    #[test]
    fn test_spouse_fields_rejected_when_single() {
        let schema = record_schema(&single_household(), &caps());
        let patch = RecordPatch {
            spouse_requested_gross: Some(dec!(40000)),
            ..Default::default()
        };

        let err = schema.validate_patch(&patch).unwrap_err();
        assert_eq!(err.field, RecordField::SpouseRequestedGross);
        assert_eq!(err.message, "No spouse on this record");
    }

    /// VS-005: rebuilt schema picks up a new bound
    #[test]
    fn test_rebuilt_schema_uses_fresh_bound() {
        let mut household = paired_household();
        let patch = RecordPatch {
            mha_requested: Some(dec!(13000)),
            ..Default::default()
        };

        let stale = record_schema(&household, &caps());
        assert!(stale.validate_patch(&patch).is_err());

        household.primary.board_approved_mha = dec!(15000);
        let fresh = record_schema(&household, &caps());
        assert!(fresh.validate_patch(&patch).is_ok());
    }

    #[test]
    fn test_negative_salary_rejected() {
        let schema = record_schema(&single_household(), &caps());
        let patch = RecordPatch {
            requested_gross: Some(dec!(-1)),
            ..Default::default()
        };
        assert!(schema.validate_patch(&patch).is_err());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let schema = record_schema(&single_household(), &caps());
        let patch = RecordPatch {
            contact_email: Some("not-an-email".to_string()),
            ..Default::default()
        };
        let err = schema.validate_patch(&patch).unwrap_err();
        assert_eq!(err.field, RecordField::ContactEmail);
    }

    /// VS-006: cross-field split alert fires above the ceiling only
    #[test]
    fn test_combined_split_alert() {
        let currency = Currency::default();
        let locale = Locale::default();

        assert!(
            combined_split_alert(dec!(90000), dec!(90000), dec!(180000), currency, locale)
                .is_none()
        );

        let alert =
            combined_split_alert(dec!(100000), dec!(90000), dec!(180000), currency, locale)
                .unwrap();
        assert!(alert.message.contains("$190,000.00"));
        assert!(alert.message.contains("$180,000.00"));
    }
}
