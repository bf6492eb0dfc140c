//! Response types for the salary wizard API.
//!
//! This module defines the success bodies and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::SalaryCalculationRecord;
use crate::selectors::{ApprovalNotice, CapSummary, MhaRequestData};
use crate::wizard::{Navigation, StepKey, WizardStep};

/// Response body for `POST /households`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateHouseholdResponse {
    /// Id of the seeded household.
    pub household_id: Uuid,
    /// Id of the empty calculation record created alongside it.
    pub record_id: Uuid,
}

/// A wizard session as returned by the session endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    /// The session id.
    pub session_id: Uuid,
    /// The record this session edits.
    pub record_id: Uuid,
    /// The ordered step list with current/complete flags.
    pub steps: Vec<WizardStep>,
    /// Key of the active step.
    pub current_step: StepKey,
    /// `round((current + 1) / total * 100)`.
    pub percent_complete: u8,
    /// Whether the progress drawer is open.
    pub drawer_open: bool,
}

/// Response body for `POST /sessions/:id/navigate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigateResponse {
    /// What the navigation request did.
    pub navigation: Navigation,
    /// The session after the request was applied.
    pub session: SessionView,
}

/// Whether a commit issued a write or was skipped as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitStatus {
    /// The patch changed the record and was persisted.
    Saved,
    /// Every key already held its value; no write occurred.
    Skipped,
}

/// Response body for `POST /records/:id/commit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitResponse {
    /// Whether a write occurred.
    pub status: CommitStatus,
    /// The confirmed record, with recomputed calculation aggregates.
    pub record: SalaryCalculationRecord,
}

/// One person's column of the summary table.
///
/// The spouse column is omitted entirely for a single household.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonSummary {
    /// Display name.
    pub name: String,
    /// Requested gross salary, formatted.
    pub requested_display: String,
    /// Effective cap, formatted.
    pub effective_cap_display: String,
    /// SECA estimate, formatted.
    pub seca_display: String,
    /// 403(b) estimate, formatted.
    pub retirement_display: String,
    /// Approval copy for this person's tier, when one applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval: Option<ApprovalNotice>,
}

/// Response body for `GET /records/:id/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSummaryResponse {
    /// "Combined X" / "Your X" label for the gross total row.
    pub gross_label: String,
    /// Cap totals and messaging branch; absent until calculations load.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caps: Option<CapSummary>,
    /// MHA totals and progress; absent when no MHA is approved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mha: Option<MhaRequestData>,
    /// Whether the approval workflow is required; absent until calculations load.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_required: Option<bool>,
    /// No-MHA notice, when any present party lacks an approved MHA.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_mha_notice: Option<String>,
    /// 403(b) course-eligibility notice, when any present party fails it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_notice: Option<String>,
    /// The staff member's column.
    pub primary: PersonSummary,
    /// The spouse's column; omitted (not empty) for a single household.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spouse: Option<PersonSummary>,
}

/// Response body for `POST /records/:id/submit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    /// When the record was submitted.
    pub submitted_at: DateTime<Utc>,
    /// Approval copy for the highest applicable tier, when one applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval: Option<ApprovalNotice>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::RecordNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new(
                    "RECORD_NOT_FOUND",
                    format!("Salary calculation record not found: {}", id),
                ),
            },
            EngineError::SessionNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new(
                    "SESSION_NOT_FOUND",
                    format!("Wizard session not found: {}", id),
                ),
            },
            EngineError::RecordNotLoaded { field } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "RECORD_NOT_LOADED",
                    format!("Record not loaded; write to '{}' suppressed", field),
                    "Writes are suppressed, never queued, while the record is unloaded",
                ),
            },
            EngineError::ValidationFailed { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Validation failed for '{}': {}", field, message),
                    "The pending value was withheld and no write occurred",
                ),
            },
            EngineError::MutationFailed { id, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "MUTATION_FAILED",
                    format!("Mutation failed for record {}", id),
                    message,
                ),
            },
            EngineError::SubmitBlocked { message } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("SUBMIT_BLOCKED", format!("Submit blocked: {}", message)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_validation_error_maps_to_400() {
        let engine_error = EngineError::ValidationFailed {
            field: "mha_requested".to_string(),
            message: "must not exceed $12,000.00".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "VALIDATION_ERROR");
        assert!(api_error.error.message.contains("$12,000.00"));
    }

    #[test]
    fn test_record_not_found_maps_to_404() {
        let api_error: ApiErrorResponse = EngineError::RecordNotFound { id: Uuid::nil() }.into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.code, "RECORD_NOT_FOUND");
    }

    #[test]
    fn test_mutation_failed_maps_to_500() {
        let api_error: ApiErrorResponse = EngineError::MutationFailed {
            id: Uuid::nil(),
            message: "write rejected by the backing store".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "MUTATION_FAILED");
        assert_eq!(
            api_error.error.details.as_deref(),
            Some("write rejected by the backing store")
        );
    }

    #[test]
    fn test_submit_blocked_maps_to_409() {
        let api_error: ApiErrorResponse = EngineError::SubmitBlocked {
            message: "wizard is on step 2 of 5".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::CONFLICT);
        assert_eq!(api_error.error.code, "SUBMIT_BLOCKED");
    }

    #[test]
    fn test_commit_status_serialization() {
        assert_eq!(
            serde_json::to_string(&CommitStatus::Skipped).unwrap(),
            "\"skipped\""
        );
        assert_eq!(
            serde_json::to_string(&CommitStatus::Saved).unwrap(),
            "\"saved\""
        );
    }
}
