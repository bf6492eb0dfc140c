//! Salary calculation wizard engine.
//!
//! This crate implements the backend for a multi-step salary calculation
//! wizard: a sequential step state machine, an autosave commit pipeline
//! with validation gating and per-key diffing, derived cap and MHA
//! selectors, and a REST API over shared in-memory state.

#![warn(missing_docs)]

pub mod api;
pub mod autosave;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod selectors;
pub mod validation;
pub mod wizard;
