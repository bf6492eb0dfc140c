//! Wizard session state machine.
//!
//! A [`WizardSession`] owns the current step, per-step completion
//! bookkeeping, and the progress drawer flag. It is an explicit value
//! passed by handle, never ambient global state.
//!
//! Invariant: exactly one step is current at all times.

use serde::{Deserialize, Serialize};

use super::steps::StepKey;

/// One entry of the ordered step list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardStep {
    /// Which wizard step this is.
    pub key: StepKey,
    /// Label shown in the progress drawer.
    pub label: String,
    /// Whether this is the active step.
    pub current: bool,
    /// Whether this step has been completed.
    pub complete: bool,
}

/// The outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum Navigation {
    /// The current step changed.
    Moved {
        /// Step index navigated from.
        from: usize,
        /// Step index navigated to.
        to: usize,
    },
    /// The requested index is outside the step list; state unchanged.
    OutOfBounds,
    /// Advance was requested on the final step; state unchanged.
    AtTerminalStep,
    /// Back was requested on the first step; state unchanged.
    AtFirstStep,
    /// The progress drawer was flipped; the current step is unchanged.
    DrawerToggled,
}

/// The wizard session state machine.
///
/// Created on wizard start, mutated only by the navigation operations,
/// discarded when the wizard ends.
///
/// # Example
///
/// ```
/// use salary_wizard::wizard::WizardSession;
///
/// let mut session = WizardSession::new();
/// assert_eq!(session.percent_complete(), 20);
/// session.advance();
/// assert_eq!(session.current_index(), 1);
/// assert_eq!(session.percent_complete(), 40);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardSession {
    steps: Vec<WizardStep>,
    drawer_open: bool,
}

impl WizardSession {
    /// Creates a session positioned on the first step, drawer closed.
    pub fn new() -> Self {
        let steps = StepKey::ORDERED
            .iter()
            .enumerate()
            .map(|(i, key)| WizardStep {
                key: *key,
                label: key.label().to_string(),
                current: i == 0,
                complete: false,
            })
            .collect();
        Self {
            steps,
            drawer_open: false,
        }
    }

    /// Returns the ordered step list.
    pub fn steps(&self) -> &[WizardStep] {
        &self.steps
    }

    /// Returns the index of the active step.
    pub fn current_index(&self) -> usize {
        self.steps
            .iter()
            .position(|s| s.current)
            .unwrap_or_default()
    }

    /// Returns the active step.
    pub fn current_step(&self) -> &WizardStep {
        &self.steps[self.current_index()]
    }

    /// Returns true when the active step is the final one.
    pub fn is_terminal(&self) -> bool {
        self.current_index() == self.steps.len() - 1
    }

    /// Navigates directly to the given step index.
    ///
    /// Out-of-bounds indices are a no-op. Moving forward marks the departed
    /// step complete; moving backward revokes the departed step's
    /// provisional completion. Exactly one step is current afterward.
    pub fn go_to_step(&mut self, index: usize) -> Navigation {
        if index >= self.steps.len() {
            return Navigation::OutOfBounds;
        }
        let from = self.current_index();
        if index > from {
            self.steps[from].complete = true;
        } else if index < from {
            self.steps[from].complete = false;
        }
        self.steps[from].current = false;
        self.steps[index].current = true;
        Navigation::Moved { from, to: index }
    }

    /// Moves to the next step ("Continue"/"Submit").
    ///
    /// Advancing on the terminal step is an explicit no-op so callers can
    /// disable the triggering control.
    pub fn advance(&mut self) -> Navigation {
        if self.is_terminal() {
            return Navigation::AtTerminalStep;
        }
        let from = self.current_index();
        self.go_to_step(from + 1)
    }

    /// Moves to the previous step ("Back").
    pub fn back(&mut self) -> Navigation {
        let from = self.current_index();
        if from == 0 {
            return Navigation::AtFirstStep;
        }
        self.go_to_step(from - 1)
    }

    /// Progress through the wizard: `round((current + 1) / total * 100)`.
    pub fn percent_complete(&self) -> u8 {
        let total = self.steps.len();
        let position = self.current_index() + 1;
        ((position as f64 / total as f64) * 100.0).round() as u8
    }

    /// Flips the progress drawer; no effect on wizard progress.
    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    /// Returns whether the progress drawer is open.
    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}
