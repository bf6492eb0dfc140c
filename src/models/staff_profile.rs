//! Staff profile (HCM) models.
//!
//! Profiles are read-only from the wizard's perspective; they are hydrated
//! from the human-capital-management system and never patched by autosave.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A staff member's profile as supplied by the HCM system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffProfile {
    /// Unique identifier for the staff member.
    pub id: Uuid,
    /// Name shown in messaging (e.g. over-cap copy).
    pub display_name: String,
    /// Board-approved overall MHA amount. Zero means no approved MHA.
    pub board_approved_mha: Decimal,
    /// Whether the staff member has completed the IBS course requirement.
    pub ibs_course_eligible: bool,
    /// Board-approved exception raising this person's individual cap.
    #[serde(default)]
    pub exception_cap: Option<Decimal>,
}

impl StaffProfile {
    /// Returns true when the board has approved any MHA for this person.
    pub fn has_approved_mha(&self) -> bool {
        self.board_approved_mha > Decimal::ZERO
    }
}

/// The loaded profile aggregate: the staff member and optional spouse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseholdProfiles {
    /// The staff member driving the wizard.
    pub primary: StaffProfile,
    /// The spouse, when both are on staff.
    #[serde(default)]
    pub spouse: Option<StaffProfile>,
}

impl HouseholdProfiles {
    /// Returns true when a spouse profile is present.
    pub fn is_paired(&self) -> bool {
        self.spouse.is_some()
    }
}
