//! Configuration loading and management for the salary wizard engine.
//!
//! This module provides functionality to load the salary plan configuration
//! from YAML files, including plan metadata, the cap schedule, and the
//! progressive-approval tier table.
//!
//! # Example
//!
//! ```no_run
//! use salary_wizard::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/salary_plan").unwrap();
//! println!("Loaded plan: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CapSchedule, PlanConfig, PlanMetadata, TierKey, TierRule, TierTable};
