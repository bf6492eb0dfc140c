//! Validation schema builders for the salary wizard.
//!
//! Per-section declarative rules (non-negative, min, max, cross-field)
//! parameterized by runtime bounds. Construction is pure and side-effect
//! free; schemas must be rebuilt whenever their bounds change.

mod rules;
mod schemas;

pub use rules::{AmountRule, AmountSchema, FieldError, TextRule, TextSchema};
pub use schemas::{
    CombinedCapAlert, RecordSchema, combined_split_alert, contact_email_schema,
    contact_phone_schema, mha_schema, record_schema, salary_schema, split_cap_schema,
};
