//! Application state for the salary wizard API.
//!
//! Shared across all request handlers: the loaded plan configuration and
//! the in-memory stores for households, calculation records, and wizard
//! sessions.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::config::ConfigLoader;
use crate::models::{HouseholdProfiles, SalaryCalculationRecord};
use crate::wizard::WizardSession;

/// A wizard session bound to the record it is editing.
#[derive(Debug, Clone)]
pub struct SessionEntry {
    /// The record this session edits.
    pub record_id: Uuid,
    /// The session state machine.
    pub session: WizardSession,
}

/// The in-memory backing store.
#[derive(Debug, Default)]
pub struct Store {
    /// Households keyed by id.
    pub households: HashMap<Uuid, HouseholdProfiles>,
    /// Calculation records keyed by id.
    pub records: HashMap<Uuid, SalaryCalculationRecord>,
    /// Wizard sessions keyed by id.
    pub sessions: HashMap<Uuid, SessionEntry>,
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    store: Arc<RwLock<Store>>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(RwLock::new(Store::default())),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Runs `f` with read access to the store.
    pub fn with_store<R>(&self, f: impl FnOnce(&Store) -> R) -> R {
        let guard = self.store.read().expect("store lock poisoned");
        f(&guard)
    }

    /// Runs `f` with write access to the store.
    pub fn with_store_mut<R>(&self, f: impl FnOnce(&mut Store) -> R) -> R {
        let mut guard = self.store.write().expect("store lock poisoned");
        f(&mut guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Required for axum state
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_the_store() {
        let config = ConfigLoader::load("./config/salary_plan").expect("Failed to load config");
        let state = AppState::new(config);
        let other = state.clone();

        let id = Uuid::new_v4();
        state.with_store_mut(|store| {
            store.sessions.insert(
                id,
                SessionEntry {
                    record_id: Uuid::new_v4(),
                    session: WizardSession::new(),
                },
            );
        });

        assert!(other.with_store(|store| store.sessions.contains_key(&id)));
    }
}
