//! Wizard step state machine
//!
//! Five linear steps; the last one shows the generated preview. The
//! controller only tracks position; validity gating stays with callers,
//! the same split the form makes between navigation buttons and the
//! validators that enable them. The machine is cyclic: "try again" on the
//! preview step resets back to the start.

use std::fmt;

/// The wizard screens, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    /// Step 1: pick a website type
    WebsiteType,
    /// Step 2: enter the content
    Content,
    /// Step 3: pick a style template
    Style,
    /// Step 4: API token, terms, optional photo
    Credentials,
    /// Step 5: preview and deploy the result
    Preview,
}

impl WizardStep {
    /// 1-based step number
    pub fn index(&self) -> u8 {
        match self {
            WizardStep::WebsiteType => 1,
            WizardStep::Content => 2,
            WizardStep::Style => 3,
            WizardStep::Credentials => 4,
            WizardStep::Preview => 5,
        }
    }

    /// Step for a 1-based number, if in range
    pub fn from_index(index: u8) -> Option<WizardStep> {
        match index {
            1 => Some(WizardStep::WebsiteType),
            2 => Some(WizardStep::Content),
            3 => Some(WizardStep::Style),
            4 => Some(WizardStep::Credentials),
            5 => Some(WizardStep::Preview),
            _ => None,
        }
    }

    /// All steps in order
    pub fn all() -> &'static [WizardStep] {
        &[
            WizardStep::WebsiteType,
            WizardStep::Content,
            WizardStep::Style,
            WizardStep::Credentials,
            WizardStep::Preview,
        ]
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardStep::WebsiteType => write!(f, "website type"),
            WizardStep::Content => write!(f, "content"),
            WizardStep::Style => write!(f, "style"),
            WizardStep::Credentials => write!(f, "credentials"),
            WizardStep::Preview => write!(f, "preview"),
        }
    }
}

/// Presentational phase of a step relative to the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPhase {
    /// Behind the current step
    Completed,
    /// The single visible step
    Active,
    /// Ahead of the current step
    Pending,
}

/// Tracks the active wizard step.
///
/// Exactly one step is active at a time; steps behind it are completed and
/// steps ahead are pending. The controller does not enforce field validity
/// before `advance`; callers gate navigation on a [`ValidationResult`]
/// first.
///
/// [`ValidationResult`]: crate::wizard::ValidationResult
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepController {
    current: WizardStep,
}

impl StepController {
    /// Start on step 1
    pub fn new() -> Self {
        Self {
            current: WizardStep::WebsiteType,
        }
    }

    /// The active step
    pub fn current(&self) -> WizardStep {
        self.current
    }

    /// Jump to a step. This is the general primitive; `advance`, `retreat`
    /// and `reset` are conveniences over it.
    pub fn go_to(&mut self, step: WizardStep) {
        self.current = step;
    }

    /// Jump to a 1-based step number. Out-of-range numbers are rejected
    /// with no state change.
    pub fn go_to_index(&mut self, index: u8) -> bool {
        match WizardStep::from_index(index) {
            Some(step) => {
                self.go_to(step);
                true
            }
            None => false,
        }
    }

    /// Move one step forward; false when already on the last step
    pub fn advance(&mut self) -> bool {
        self.go_to_index(self.current.index() + 1)
    }

    /// Move one step back; false when already on the first step
    pub fn retreat(&mut self) -> bool {
        match self.current.index().checked_sub(1) {
            Some(index) => self.go_to_index(index),
            None => false,
        }
    }

    /// Return to step 1. Owners of downstream state (selections, preview
    /// surface) clear it alongside this call.
    pub fn reset(&mut self) {
        self.go_to(WizardStep::WebsiteType);
    }

    /// Phase of a given step relative to the current one
    pub fn phase_of(&self, step: WizardStep) -> StepPhase {
        if step.index() < self.current.index() {
            StepPhase::Completed
        } else if step == self.current {
            StepPhase::Active
        } else {
            StepPhase::Pending
        }
    }

    /// Phases of every step, in order (the progress-bar view)
    pub fn phases(&self) -> Vec<(WizardStep, StepPhase)> {
        WizardStep::all()
            .iter()
            .map(|step| (*step, self.phase_of(*step)))
            .collect()
    }
}

impl Default for StepController {
    fn default() -> Self {
        Self::new()
    }
}
