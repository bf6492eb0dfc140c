//! Error types for the salary wizard engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur in the wizard and autosave flows.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the salary wizard engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use salary_wizard::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/plan.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/plan.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No salary calculation record exists for the given id.
    #[error("Salary calculation record not found: {id}")]
    RecordNotFound {
        /// The record id that was not found.
        id: Uuid,
    },

    /// No wizard session exists for the given id.
    ///
    /// Raised when session state is accessed outside its lifetime —
    /// a caller bug, surfaced loudly rather than silently defaulted.
    #[error("Wizard session not found: {id}")]
    SessionNotFound {
        /// The session id that was not found.
        id: Uuid,
    },

    /// A field write was attempted while the backing record is not loaded.
    ///
    /// Writes against an unloaded record are suppressed, never queued.
    #[error("Record not loaded; write to '{field}' suppressed")]
    RecordNotLoaded {
        /// The field whose write was suppressed.
        field: String,
    },

    /// A pending field value failed its validation schema.
    ///
    /// The write is withheld entirely; no network traffic occurs.
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed {
        /// The field that failed validation.
        field: String,
        /// The schema's error message, with any bound already formatted in.
        message: String,
    },

    /// The backend rejected a patch mutation.
    ///
    /// The optimistic merge must be rolled back to the last confirmed value.
    #[error("Mutation failed for record {id}: {message}")]
    MutationFailed {
        /// The record the patch targeted.
        id: Uuid,
        /// A description of the failure.
        message: String,
    },

    /// A submit was attempted before the wizard reached its final step.
    #[error("Submit blocked: {message}")]
    SubmitBlocked {
        /// Why the submit was refused.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
