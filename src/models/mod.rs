//! Core data models for the salary wizard engine.
//!
//! This module contains the domain models used throughout the engine:
//! the read-only staff profiles, the mutable salary calculation record,
//! and the progressive approval tier.

mod approval_tier;
mod calculation_record;
mod staff_profile;

pub use approval_tier::ApprovalTier;
pub use calculation_record::{PersonCalculations, SalaryCalculationRecord};
pub use staff_profile::{HouseholdProfiles, StaffProfile};
