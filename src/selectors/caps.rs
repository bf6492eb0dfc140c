//! Cap summary derivations.
//!
//! Pure functions of the loaded profiles and calculation record. Derived
//! on every call from current state; nothing here is cached. An absent
//! calculation aggregate means "not yet available" and yields `None`
//! rather than a partial summary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format::{Currency, Locale, format_currency};
use crate::models::{HouseholdProfiles, SalaryCalculationRecord};

/// The household's standing relative to the caps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CapStatus {
    /// The pair (or single) is within every applicable cap.
    WithinCaps {
        /// Combined cap total minus combined gross.
        remaining: Decimal,
        /// The remaining amount, formatted for display.
        remaining_display: String,
    },
    /// The pair is jointly within the combined cap but one individual
    /// exceeds their own. Names exactly the over-cap person.
    IndividualOverCap {
        /// Display name of the over-cap person.
        name: String,
        /// That person's requested salary, formatted for display.
        requested_display: String,
    },
    /// The combined request exceeds the combined cap.
    CombinedOverCap {
        /// Amount over the combined cap.
        overage: Decimal,
        /// The overage, formatted for display.
        overage_display: String,
    },
}

/// Derived cap totals and status for the household.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapSummary {
    /// Sum of both parties' requested gross (absent spouse counts as 0).
    pub combined_gross: Decimal,
    /// Sum of both parties' effective caps.
    pub combined_cap: Decimal,
    /// Whether the staff member exceeds their own effective cap.
    pub primary_over_cap: bool,
    /// Whether the spouse exceeds their own effective cap.
    pub spouse_over_cap: bool,
    /// The messaging branch to render.
    pub status: CapStatus,
}

/// Derives the cap summary from the loaded aggregates.
///
/// Returns `None` while any required calculation aggregate is absent:
/// the staff member's always, and the spouse's whenever a spouse profile
/// is present. Callers render a placeholder state in that case.
///
/// Branch precedence: combined overage wins for a pair; otherwise the staff
/// member is checked before the spouse, so at most one person is "the"
/// over-cap individual. For a single household the combined totals collapse
/// to the individual ones, so the combined branch never applies and a lone
/// over-cap staff member is always named individually.
pub fn cap_summary(
    household: &HouseholdProfiles,
    record: &SalaryCalculationRecord,
) -> Option<CapSummary> {
    let currency = Currency::default();
    let locale = Locale::default();

    let primary_calc = record.calculations.as_ref()?;
    let spouse_calc = match &household.spouse {
        Some(_) => Some(record.spouse_calculations.as_ref()?),
        None => None,
    };

    let combined_gross = record.combined_gross();
    let combined_cap = primary_calc.effective_cap
        + spouse_calc.map_or(Decimal::ZERO, |c| c.effective_cap);

    let primary_over_cap = record.requested_gross > primary_calc.effective_cap;
    let spouse_requested = record.spouse_requested_gross.unwrap_or(Decimal::ZERO);
    let spouse_over_cap =
        spouse_calc.is_some_and(|calc| spouse_requested > calc.effective_cap);

    let combined_over = household.spouse.is_some() && combined_gross > combined_cap;

    let status = if combined_over {
        let overage = combined_gross - combined_cap;
        CapStatus::CombinedOverCap {
            overage,
            overage_display: format_currency(overage, currency, locale),
        }
    } else if primary_over_cap {
        CapStatus::IndividualOverCap {
            name: household.primary.display_name.clone(),
            requested_display: format_currency(record.requested_gross, currency, locale),
        }
    } else if spouse_over_cap {
        // spouse_over_cap implies a spouse profile is present
        let name = household
            .spouse
            .as_ref()
            .map(|s| s.display_name.clone())
            .unwrap_or_default();
        CapStatus::IndividualOverCap {
            name,
            requested_display: format_currency(spouse_requested, currency, locale),
        }
    } else {
        let remaining = combined_cap - combined_gross;
        CapStatus::WithinCaps {
            remaining,
            remaining_display: format_currency(remaining, currency, locale),
        }
    };

    Some(CapSummary {
        combined_gross,
        combined_cap,
        primary_over_cap,
        spouse_over_cap,
        status,
    })
}

/// Selects the "Combined X" vs "Your X" label modifier.
///
/// With a spouse present, totals are household totals; without one, the
/// copy addresses the staff member directly.
pub fn modifier_label(base: &str, paired: bool) -> String {
    if paired {
        format!("Combined {}", base)
    } else {
        format!("Your {}", base)
    }
}
