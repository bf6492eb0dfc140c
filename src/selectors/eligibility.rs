//! Eligibility coverage and messaging derivations.
//!
//! Two independent predicates apply to each party: whether the board has
//! approved any MHA for them, and whether they meet the IBS course
//! requirement. Each predicate collapses into a four-way coverage sum type
//! that downstream copy matches exhaustively — no ad hoc boolean pairs.

use serde::{Deserialize, Serialize};

use crate::models::HouseholdProfiles;

/// Which of the two parties fail a per-person predicate.
///
/// For a single household the spouse slot is vacuously eligible, so only
/// `BothEligible` and `SelfIneligible` can occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartyCoverage {
    /// Every present party passes the predicate.
    BothEligible,
    /// Only the staff member fails.
    SelfIneligible,
    /// Only the spouse fails.
    SpouseIneligible,
    /// Both parties fail.
    BothIneligible,
}

fn coverage(primary_ok: bool, spouse_ok: bool) -> PartyCoverage {
    match (primary_ok, spouse_ok) {
        (true, true) => PartyCoverage::BothEligible,
        (false, true) => PartyCoverage::SelfIneligible,
        (true, false) => PartyCoverage::SpouseIneligible,
        (false, false) => PartyCoverage::BothIneligible,
    }
}

/// Coverage for the "has any board-approved MHA" predicate.
pub fn mha_approval_coverage(household: &HouseholdProfiles) -> PartyCoverage {
    let primary_ok = household.primary.has_approved_mha();
    let spouse_ok = household
        .spouse
        .as_ref()
        .is_none_or(|s| s.has_approved_mha());
    coverage(primary_ok, spouse_ok)
}

/// Coverage for the IBS course requirement predicate.
pub fn course_eligibility_coverage(household: &HouseholdProfiles) -> PartyCoverage {
    let primary_ok = household.primary.ibs_course_eligible;
    let spouse_ok = household
        .spouse
        .as_ref()
        .is_none_or(|s| s.ibs_course_eligible);
    coverage(primary_ok, spouse_ok)
}

/// Names of the failing parties: `"X"` or `"X and Y"`. `None` when no one fails.
pub fn ineligible_names(
    household: &HouseholdProfiles,
    coverage: PartyCoverage,
) -> Option<String> {
    let primary = &household.primary.display_name;
    match (coverage, &household.spouse) {
        (PartyCoverage::BothEligible, _) => None,
        (PartyCoverage::SelfIneligible, _) => Some(primary.clone()),
        (PartyCoverage::SpouseIneligible, Some(spouse)) => Some(spouse.display_name.clone()),
        (PartyCoverage::BothIneligible, Some(spouse)) => {
            Some(format!("{} and {}", primary, spouse.display_name))
        }
        // Spouse-side coverage cannot occur without a spouse profile.
        (PartyCoverage::SpouseIneligible | PartyCoverage::BothIneligible, None) => None,
    }
}

/// Builds the no-MHA notice, singular or plural to match the name list.
///
/// Returns `None` when every present party has an approved MHA.
pub fn no_mha_notice(household: &HouseholdProfiles) -> Option<String> {
    let coverage = mha_approval_coverage(household);
    let names = ineligible_names(household, coverage)?;
    let verb = match coverage {
        PartyCoverage::BothIneligible => "have",
        _ => "has",
    };
    Some(format!(
        "{} {} no board-approved housing allowance",
        names, verb
    ))
}

/// Builds the 403(b) course-eligibility notice.
///
/// Returns `None` when every present party meets the IBS requirement.
pub fn course_ineligibility_notice(household: &HouseholdProfiles) -> Option<String> {
    let coverage = course_eligibility_coverage(household);
    let names = ineligible_names(household, coverage)?;
    let verb = match coverage {
        PartyCoverage::BothIneligible => "are",
        _ => "is",
    };
    Some(format!(
        "{} {} not eligible for 403(b) contributions until the IBS course requirement is met",
        names, verb
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use crate::models::StaffProfile;

    fn profile(name: &str, approved: Decimal, course_ok: bool) -> StaffProfile {
        StaffProfile {
            id: Uuid::new_v4(),
            display_name: name.to_string(),
            board_approved_mha: approved,
            ibs_course_eligible: course_ok,
            exception_cap: None,
        }
    }

    fn household(primary: StaffProfile, spouse: Option<StaffProfile>) -> HouseholdProfiles {
        HouseholdProfiles { primary, spouse }
    }

    /// EL-001: both eligible yields no notice
    #[test]
    fn test_both_eligible_yields_no_notice() {
        let h = household(
            profile("Jordan", dec!(10000), true),
            Some(profile("Casey", dec!(8000), true)),
        );
        assert_eq!(mha_approval_coverage(&h), PartyCoverage::BothEligible);
        assert!(no_mha_notice(&h).is_none());
        assert!(course_ineligibility_notice(&h).is_none());
    }

    /// EL-002: singular notice names only the failing party
    #[test]
    fn test_singular_no_mha_notice() {
        let h = household(
            profile("Jordan", Decimal::ZERO, true),
            Some(profile("Casey", dec!(8000), true)),
        );
        assert_eq!(mha_approval_coverage(&h), PartyCoverage::SelfIneligible);
        assert_eq!(
            no_mha_notice(&h).unwrap(),
            "Jordan has no board-approved housing allowance"
        );
    }

    /// EL-003: spouse-only failure names the spouse
    #[test]
    fn test_spouse_only_failure_names_spouse() {
        let h = household(
            profile("Jordan", dec!(10000), true),
            Some(profile("Casey", Decimal::ZERO, true)),
        );
        assert_eq!(mha_approval_coverage(&h), PartyCoverage::SpouseIneligible);
        assert_eq!(
            no_mha_notice(&h).unwrap(),
            "Casey has no board-approved housing allowance"
        );
    }

    /// EL-004: both failing pluralizes "X and Y have"
    #[test]
    fn test_plural_no_mha_notice() {
        let h = household(
            profile("Jordan", Decimal::ZERO, true),
            Some(profile("Casey", Decimal::ZERO, true)),
        );
        assert_eq!(mha_approval_coverage(&h), PartyCoverage::BothIneligible);
        assert_eq!(
            no_mha_notice(&h).unwrap(),
            "Jordan and Casey have no board-approved housing allowance"
        );
    }

    /// EL-005: course notice pluralizes independently of the MHA predicate
    #[test]
    fn test_course_notice_plural() {
        let h = household(
            profile("Jordan", dec!(10000), false),
            Some(profile("Casey", dec!(8000), false)),
        );
        let notice = course_ineligibility_notice(&h).unwrap();
        assert!(notice.starts_with("Jordan and Casey are not eligible"));
    }

    /// EL-006: single household can only be BothEligible or SelfIneligible
    #[test]
    fn test_single_household_coverage() {
        let ok = household(profile("Jordan", dec!(10000), true), None);
        assert_eq!(mha_approval_coverage(&ok), PartyCoverage::BothEligible);

        let not_ok = household(profile("Jordan", Decimal::ZERO, false), None);
        assert_eq!(mha_approval_coverage(&not_ok), PartyCoverage::SelfIneligible);
        assert_eq!(
            course_ineligibility_notice(&not_ok).unwrap(),
            "Jordan is not eligible for 403(b) contributions until the IBS course requirement is met"
        );
    }
}
