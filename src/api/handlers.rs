//! HTTP request handlers for the salary wizard API.
//!
//! This module contains the handler functions for the household, session,
//! and record endpoints, plus the router wiring them together.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::autosave::{CommitOutcome, RecordPatch, prepare_commit};
use crate::error::EngineError;
use crate::format::{Currency, Locale, format_currency};
use crate::models::{HouseholdProfiles, PersonCalculations, SalaryCalculationRecord, StaffProfile};
use crate::selectors::{
    approval_notice, approval_required, cap_summary, course_ineligibility_notice,
    mha_request_data, modifier_label, no_mha_notice, recompute_calculations,
};
use crate::validation::{contact_email_schema, contact_phone_schema, record_schema};
use crate::wizard::{Navigation, WizardSession};

use super::request::{CreateHouseholdRequest, NavigateRequest, StartSessionRequest, SubmitRequest};
use super::response::{
    ApiError, ApiErrorResponse, CommitResponse, CommitStatus, CreateHouseholdResponse,
    NavigateResponse, PersonSummary, RecordSummaryResponse, SessionView, SubmitResponse,
};
use super::state::{AppState, SessionEntry};

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/households", post(create_household_handler))
        .route("/sessions", post(start_session_handler))
        .route("/sessions/:id", get(get_session_handler))
        .route("/sessions/:id/navigate", post(navigate_handler))
        .route("/records/:id/commit", post(commit_handler))
        .route("/records/:id/summary", get(summary_handler))
        .route("/records/:id/submit", post(submit_handler))
        .with_state(state)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(err: EngineError) -> Response {
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, &api_error.error)
}

/// Unwraps a JSON payload, turning axum rejections into 400 responses.
fn decode_json<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err(json_response(StatusCode::BAD_REQUEST, &error))
        }
    }
}

fn session_view(session_id: Uuid, entry: &SessionEntry) -> SessionView {
    SessionView {
        session_id,
        record_id: entry.record_id,
        steps: entry.session.steps().to_vec(),
        current_step: entry.session.current_step().key,
        percent_complete: entry.session.percent_complete(),
        drawer_open: entry.session.drawer_open(),
    }
}

/// Handler for POST /households.
///
/// Seeds the household profiles and an empty calculation record with the
/// derived aggregates already resolved.
async fn create_household_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateHouseholdRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match decode_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let household_id = Uuid::new_v4();
    let household = HouseholdProfiles {
        primary: StaffProfile::from(request.primary),
        spouse: request.spouse.map(StaffProfile::from),
    };
    let paired = household.is_paired();

    let mut record = SalaryCalculationRecord {
        id: Uuid::new_v4(),
        household_id,
        requested_gross: Decimal::ZERO,
        spouse_requested_gross: paired.then_some(Decimal::ZERO),
        mha_requested: Decimal::ZERO,
        spouse_mha_requested: paired.then_some(Decimal::ZERO),
        split_cap_elected: false,
        split_primary_cap: None,
        split_spouse_cap: None,
        contact_phone: None,
        contact_email: None,
        calculations: None,
        spouse_calculations: None,
        submitted_at: None,
        updated_at: Utc::now(),
    };
    let (calculations, spouse_calculations) =
        recompute_calculations(&record, &household, state.config().config());
    record.calculations = calculations;
    record.spouse_calculations = spouse_calculations;

    let response = CreateHouseholdResponse {
        household_id,
        record_id: record.id,
    };

    info!(
        correlation_id = %correlation_id,
        household_id = %household_id,
        record_id = %record.id,
        paired = paired,
        "Household seeded"
    );

    state.with_store_mut(|store| {
        store.households.insert(household_id, household);
        store.records.insert(record.id, record);
    });

    json_response(StatusCode::CREATED, &response)
}

/// Handler for POST /sessions.
///
/// Starts a wizard session positioned on the first step.
async fn start_session_handler(
    State(state): State<AppState>,
    payload: Result<Json<StartSessionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match decode_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let session_id = Uuid::new_v4();
    let result = state.with_store_mut(|store| {
        if !store.records.contains_key(&request.record_id) {
            return Err(EngineError::RecordNotFound {
                id: request.record_id,
            });
        }
        let entry = SessionEntry {
            record_id: request.record_id,
            session: WizardSession::new(),
        };
        let view = session_view(session_id, &entry);
        store.sessions.insert(session_id, entry);
        Ok(view)
    });

    match result {
        Ok(view) => {
            info!(
                correlation_id = %correlation_id,
                session_id = %session_id,
                record_id = %request.record_id,
                "Wizard session started"
            );
            json_response(StatusCode::CREATED, &view)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Session start failed");
            engine_error_response(err)
        }
    }
}

/// Handler for GET /sessions/:id.
async fn get_session_handler(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Response {
    let result = state.with_store(|store| {
        store
            .sessions
            .get(&session_id)
            .map(|entry| session_view(session_id, entry))
            .ok_or(EngineError::SessionNotFound { id: session_id })
    });

    match result {
        Ok(view) => json_response(StatusCode::OK, &view),
        Err(err) => engine_error_response(err),
    }
}

/// Handler for POST /sessions/:id/navigate.
///
/// Applies one navigation action. No-op outcomes (out of bounds, terminal
/// advance, back on the first step) still return 200 with the unchanged
/// session.
async fn navigate_handler(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    payload: Result<Json<NavigateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match decode_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let result = state.with_store_mut(|store| {
        let entry = store
            .sessions
            .get_mut(&session_id)
            .ok_or(EngineError::SessionNotFound { id: session_id })?;

        let navigation = match request {
            NavigateRequest::Advance => entry.session.advance(),
            NavigateRequest::Back => entry.session.back(),
            NavigateRequest::Goto { index } => entry.session.go_to_step(index),
            NavigateRequest::ToggleDrawer => {
                entry.session.toggle_drawer();
                Navigation::DrawerToggled
            }
        };

        Ok(NavigateResponse {
            navigation,
            session: session_view(session_id, entry),
        })
    });

    match result {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                session_id = %session_id,
                navigation = ?response.navigation,
                percent_complete = response.session.percent_complete,
                "Navigation applied"
            );
            json_response(StatusCode::OK, &response)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Navigation failed");
            engine_error_response(err)
        }
    }
}

/// Handler for POST /records/:id/commit.
///
/// Runs the autosave pipeline on the posted patch: validate, diff against
/// the stored record, skip when nothing changed, otherwise merge the patch
/// and recompute the derived aggregates. Submitted records are frozen and
/// reject further commits.
async fn commit_handler(
    State(state): State<AppState>,
    Path(record_id): Path<Uuid>,
    payload: Result<Json<RecordPatch>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let patch = match decode_json(payload, correlation_id) {
        Ok(patch) => patch,
        Err(response) => return response,
    };

    let config = state.config().config().clone();
    let result = state.with_store_mut(|store| {
        let record = store
            .records
            .get(&record_id)
            .ok_or(EngineError::RecordNotFound { id: record_id })?;
        // A submitted record is frozen; its approval tier must not be
        // recomputed away after the fact.
        if record.is_submitted() {
            return Err(EngineError::SubmitBlocked {
                message: "the record has already been submitted".to_string(),
            });
        }
        let household = store
            .households
            .get(&record.household_id)
            .ok_or(EngineError::RecordNotFound { id: record_id })?;

        let schema = record_schema(household, config.caps());
        match prepare_commit(Some(record), &patch, &schema)? {
            CommitOutcome::Skipped => Ok(CommitResponse {
                status: CommitStatus::Skipped,
                record: record.clone(),
            }),
            CommitOutcome::Committed {
                patch: changed,
                mut optimistic,
            } => {
                let (calculations, spouse_calculations) =
                    recompute_calculations(&optimistic, household, &config);
                optimistic.calculations = calculations;
                optimistic.spouse_calculations = spouse_calculations;
                optimistic.updated_at = Utc::now();

                info!(
                    correlation_id = %correlation_id,
                    record_id = %record_id,
                    changed_keys = changed.fields_present().len(),
                    "Commit saved"
                );
                store.records.insert(record_id, optimistic.clone());
                Ok(CommitResponse {
                    status: CommitStatus::Saved,
                    record: optimistic,
                })
            }
        }
    });

    match result {
        Ok(response) => json_response(StatusCode::OK, &response),
        Err(err) => {
            warn!(correlation_id = %correlation_id, record_id = %record_id, error = %err, "Commit rejected");
            engine_error_response(err)
        }
    }
}

fn person_summary(
    profile: &StaffProfile,
    requested: Decimal,
    calculations: Option<&PersonCalculations>,
    currency: Currency,
    locale: Locale,
) -> PersonSummary {
    PersonSummary {
        name: profile.display_name.clone(),
        requested_display: format_currency(requested, currency, locale),
        effective_cap_display: calculations
            .map(|c| format_currency(c.effective_cap, currency, locale))
            .unwrap_or_default(),
        seca_display: calculations
            .map(|c| format_currency(c.seca_estimate, currency, locale))
            .unwrap_or_default(),
        retirement_display: calculations
            .map(|c| format_currency(c.retirement_403b_amount, currency, locale))
            .unwrap_or_default(),
        approval: calculations.and_then(|c| approval_notice(&c.approval_tier)),
    }
}

/// Handler for GET /records/:id/summary.
///
/// Derives the review-step summary: cap status, MHA progress, eligibility
/// notices, and the per-person columns. The spouse column is omitted, not
/// emptied, for a single household.
async fn summary_handler(State(state): State<AppState>, Path(record_id): Path<Uuid>) -> Response {
    let currency = Currency::default();
    let locale = Locale::default();

    let result = state.with_store(|store| {
        let record = store
            .records
            .get(&record_id)
            .ok_or(EngineError::RecordNotFound { id: record_id })?;
        let household = store
            .households
            .get(&record.household_id)
            .ok_or(EngineError::RecordNotFound { id: record_id })?;

        let paired = household.is_paired();
        Ok(RecordSummaryResponse {
            gross_label: modifier_label("gross salary", paired),
            caps: cap_summary(household, record),
            mha: mha_request_data(household, record),
            approval_required: approval_required(record, household),
            no_mha_notice: no_mha_notice(household),
            course_notice: course_ineligibility_notice(household),
            primary: person_summary(
                &household.primary,
                record.requested_gross,
                record.calculations.as_ref(),
                currency,
                locale,
            ),
            spouse: household.spouse.as_ref().map(|profile| {
                person_summary(
                    profile,
                    record.spouse_requested_gross.unwrap_or(Decimal::ZERO),
                    record.spouse_calculations.as_ref(),
                    currency,
                    locale,
                )
            }),
        })
    });

    match result {
        Ok(response) => json_response(StatusCode::OK, &response),
        Err(err) => engine_error_response(err),
    }
}

/// Handler for POST /records/:id/submit.
///
/// Requires the wizard session to sit on the final step and the contact
/// fields to be filled and valid. Stamps `submitted_at` exactly once.
async fn submit_handler(
    State(state): State<AppState>,
    Path(record_id): Path<Uuid>,
    payload: Result<Json<SubmitRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match decode_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let result = state.with_store_mut(|store| {
        let session = store
            .sessions
            .get(&request.session_id)
            .ok_or(EngineError::SessionNotFound {
                id: request.session_id,
            })?;
        if session.record_id != record_id {
            return Err(EngineError::SubmitBlocked {
                message: "the session is editing a different record".to_string(),
            });
        }
        if !session.session.is_terminal() {
            return Err(EngineError::SubmitBlocked {
                message: format!(
                    "the wizard is on step {} of {}; submit is only available from the review step",
                    session.session.current_index() + 1,
                    session.session.steps().len()
                ),
            });
        }

        let record = store
            .records
            .get_mut(&record_id)
            .ok_or(EngineError::RecordNotFound { id: record_id })?;
        if record.is_submitted() {
            return Err(EngineError::SubmitBlocked {
                message: "the record has already been submitted".to_string(),
            });
        }

        let phone = record.contact_phone.as_deref().unwrap_or("");
        contact_phone_schema()
            .validate(phone)
            .map_err(EngineError::from)?;
        let email = record.contact_email.as_deref().unwrap_or("");
        contact_email_schema()
            .validate(email)
            .map_err(EngineError::from)?;

        let submitted_at = Utc::now();
        record.submitted_at = Some(submitted_at);
        record.updated_at = submitted_at;

        let primary_notice = record
            .calculations
            .as_ref()
            .and_then(|c| approval_notice(&c.approval_tier));
        let spouse_notice = record
            .spouse_calculations
            .as_ref()
            .and_then(|c| approval_notice(&c.approval_tier));
        let primary_escalates = record
            .calculations
            .as_ref()
            .is_some_and(|c| c.approval_tier.requires_approval());
        let approval = if primary_escalates {
            primary_notice
        } else {
            spouse_notice
                .filter(|_| {
                    record
                        .spouse_calculations
                        .as_ref()
                        .is_some_and(|c| c.approval_tier.requires_approval())
                })
                .or(primary_notice)
        };

        Ok(SubmitResponse {
            submitted_at,
            approval,
        })
    });

    match result {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                record_id = %record_id,
                session_id = %request.session_id,
                approval_required = response.approval.is_some(),
                "Record submitted"
            );
            json_response(StatusCode::OK, &response)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, record_id = %record_id, error = %err, "Submit blocked");
            engine_error_response(err)
        }
    }
}
