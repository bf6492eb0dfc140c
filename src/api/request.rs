//! Request types for the salary wizard API.
//!
//! This module defines the JSON request structures for the household,
//! session, and record endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::StaffProfile;

/// Request body for `POST /households`.
///
/// Seeds a household (staff member plus optional spouse) and its empty
/// salary calculation record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateHouseholdRequest {
    /// The staff member's profile.
    pub primary: StaffProfileRequest,
    /// The spouse's profile, when both are on staff.
    #[serde(default)]
    pub spouse: Option<StaffProfileRequest>,
}

/// Staff profile data in a household request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffProfileRequest {
    /// Name shown in messaging.
    pub display_name: String,
    /// Board-approved overall MHA amount; zero means none.
    pub board_approved_mha: Decimal,
    /// Whether the IBS course requirement is met.
    pub ibs_course_eligible: bool,
    /// Board-approved exception raising the individual cap.
    #[serde(default)]
    pub exception_cap: Option<Decimal>,
}

impl From<StaffProfileRequest> for StaffProfile {
    fn from(req: StaffProfileRequest) -> Self {
        StaffProfile {
            id: Uuid::new_v4(),
            display_name: req.display_name,
            board_approved_mha: req.board_approved_mha,
            ibs_course_eligible: req.ibs_course_eligible,
            exception_cap: req.exception_cap,
        }
    }
}

/// Request body for `POST /sessions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartSessionRequest {
    /// The record the wizard will edit.
    pub record_id: Uuid,
}

/// Request body for `POST /sessions/:id/navigate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum NavigateRequest {
    /// Move to the next step ("Continue").
    Advance,
    /// Move to the previous step ("Back").
    Back,
    /// Jump directly to a step index.
    Goto {
        /// Target step index.
        index: usize,
    },
    /// Flip the progress drawer.
    ToggleDrawer,
}

/// Request body for `POST /records/:id/submit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitRequest {
    /// The wizard session performing the submit; must be on the final step.
    pub session_id: Uuid,
}
