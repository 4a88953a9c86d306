//! Store launch: remote validation, deployment, status polling, and the
//! bookkeeping done once the store is live.

pub mod flow;
pub mod monitor;
pub mod record;
pub mod success;

pub use flow::{LaunchFlow, LaunchOutcome, LAUNCH_FAILED_MESSAGE, VALIDATION_FAILED_MESSAGE};
pub use monitor::{DeploymentMonitor, MonitorHandle, MonitorOutcome};
pub use record::LaunchRecord;
pub use success::SuccessSummary;

use crate::types::{DeploymentStatus, ValidationResult};

/// Progress reported while a launch runs
#[derive(Debug, Clone, PartialEq)]
pub enum LaunchEvent {
    /// Remote validation returned
    Validated(ValidationResult),
    /// Latest deployment status, overwriting the previous one
    Status(DeploymentStatus),
    /// The launch ended
    Finished(LaunchOutcome),
}
