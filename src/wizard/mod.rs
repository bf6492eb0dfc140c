//! Wizard session state machine for the salary calculator.
//!
//! Tracks which step is active, computes completion and progress, and
//! exposes the navigation operations. Navigation is strictly sequential
//! along the fixed step list; out-of-bounds requests are no-ops.

mod session;
mod steps;

pub use session::{Navigation, WizardSession, WizardStep};
pub use steps::StepKey;
