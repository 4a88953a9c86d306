//! Wizard state: the current step and the configuration accumulated so far.

pub mod checklist;
pub mod step;
pub mod store_config;

pub use checklist::{Checklist, ChecklistItem};
pub use step::WizardStep;
pub use store_config::{
    BusinessDetails, ContentSettings, IntegrationGroup, Integrations, LaunchSettings, StoreConfig,
};

/// Current step plus the shared configuration every step reads and writes
#[derive(Debug, Clone, Default)]
pub struct WizardState {
    pub current_step: WizardStep,
    pub config: StoreConfig,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume with an existing configuration at step 1
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            current_step: WizardStep::Business,
            config,
        }
    }

    /// Advance one step. Returns false on the last step.
    pub fn next(&mut self) -> bool {
        match self.current_step.next() {
            Some(step) => {
                tracing::debug!(from = self.current_step.number(), to = step.number(), "Wizard step");
                self.current_step = step;
                true
            }
            None => false,
        }
    }

    /// Go back one step. Returns false on the first step.
    pub fn previous(&mut self) -> bool {
        match self.current_step.previous() {
            Some(step) => {
                tracing::debug!(from = self.current_step.number(), to = step.number(), "Wizard step");
                self.current_step = step;
                true
            }
            None => false,
        }
    }

    /// Previous is disabled on the first step
    pub fn can_go_back(&self) -> bool {
        !self.current_step.is_first()
    }

    /// The last step offers "Launch Store" instead of "Next Step"
    pub fn is_last_step(&self) -> bool {
        self.current_step.is_last()
    }

    pub fn checklist(&self) -> Checklist {
        Checklist::evaluate(&self.config)
    }
}
