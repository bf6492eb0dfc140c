//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the salary
//! plan configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{CapSchedule, PlanConfig, PlanMetadata, TierTable};

/// Loads and provides access to the salary plan configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides access to the cap schedule and approval-tier table.
///
/// # Directory Structure
///
/// ```text
/// config/salary_plan/
/// ├── plan.yaml   # Plan metadata
/// ├── caps.yaml   # Cap schedule and statutory fractions
/// └── tiers.yaml  # Progressive approval tier table
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_wizard::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/salary_plan").unwrap();
/// println!("Loaded plan: {}", loader.metadata().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PlanConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/salary_plan")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<PlanMetadata>(&path.join("plan.yaml"))?;
        let caps = Self::load_yaml::<CapSchedule>(&path.join("caps.yaml"))?;
        let tier_table = Self::load_yaml::<TierTable>(&path.join("tiers.yaml"))?;

        if tier_table.tiers.is_empty() {
            return Err(EngineError::ConfigParseError {
                path: path.join("tiers.yaml").display().to_string(),
                message: "tier table is empty".to_string(),
            });
        }

        Ok(Self {
            config: PlanConfig::new(metadata, caps, tier_table.tiers),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying plan configuration.
    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    /// Returns the plan metadata.
    pub fn metadata(&self) -> &PlanMetadata {
        self.config.metadata()
    }

    /// Returns the cap schedule.
    pub fn caps(&self) -> &CapSchedule {
        self.config.caps()
    }
}
