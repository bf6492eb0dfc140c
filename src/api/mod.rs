//! HTTP API module for the salary wizard engine.
//!
//! This module provides the REST endpoints for seeding households,
//! driving wizard sessions, committing autosave patches, and submitting
//! finished records.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CreateHouseholdRequest, NavigateRequest, StartSessionRequest, SubmitRequest};
pub use response::{
    ApiError, CommitResponse, CommitStatus, CreateHouseholdResponse, NavigateResponse,
    PersonSummary, RecordSummaryResponse, SessionView, SubmitResponse,
};
pub use state::AppState;
