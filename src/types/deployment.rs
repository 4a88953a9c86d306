//! Deployment status record reported by the launch endpoints.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stage of a store deployment.
///
/// The backend reports intermediate stages beyond `deploying`; any stage this
/// client does not know is kept verbatim and treated as in progress.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeployPhase {
    #[default]
    Idle,
    Validating,
    Deploying,
    Configuring,
    Testing,
    Finalizing,
    Completed,
    Failed,
    /// Stage name not known to this client
    Other(String),
}

impl DeployPhase {
    pub fn as_str(&self) -> &str {
        match self {
            DeployPhase::Idle => "idle",
            DeployPhase::Validating => "validating",
            DeployPhase::Deploying => "deploying",
            DeployPhase::Configuring => "configuring",
            DeployPhase::Testing => "testing",
            DeployPhase::Finalizing => "finalizing",
            DeployPhase::Completed => "completed",
            DeployPhase::Failed => "failed",
            DeployPhase::Other(stage) => stage,
        }
    }

    /// `completed` and `failed` end the poll loop
    pub fn is_terminal(&self) -> bool {
        matches!(self, DeployPhase::Completed | DeployPhase::Failed)
    }

    /// Whether a deployment is underway (anything between idle and terminal)
    pub fn is_in_progress(&self) -> bool {
        !self.is_terminal() && *self != DeployPhase::Idle
    }
}

impl From<String> for DeployPhase {
    fn from(value: String) -> Self {
        match value.as_str() {
            "idle" => DeployPhase::Idle,
            "validating" => DeployPhase::Validating,
            "deploying" => DeployPhase::Deploying,
            "configuring" => DeployPhase::Configuring,
            "testing" => DeployPhase::Testing,
            "finalizing" => DeployPhase::Finalizing,
            "completed" => DeployPhase::Completed,
            "failed" => DeployPhase::Failed,
            _ => DeployPhase::Other(value),
        }
    }
}

impl From<DeployPhase> for String {
    fn from(phase: DeployPhase) -> Self {
        phase.as_str().to_string()
    }
}

impl fmt::Display for DeployPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Local copy of a deployment's progress, overwritten by every poll
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeploymentStatus {
    #[serde(default)]
    pub deployment_id: String,
    #[serde(default)]
    pub status: DeployPhase,
    /// Percent complete, 0-100
    #[serde(default)]
    pub progress: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_url: Option<String>,
    /// Store id used for the launch notification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl DeploymentStatus {
    /// Record for a deployment that was just triggered
    pub fn deploying(deployment_id: impl Into<String>) -> Self {
        Self {
            deployment_id: deployment_id.into(),
            status: DeployPhase::Deploying,
            ..Default::default()
        }
    }

    /// Record for a launch that failed before or during deployment
    pub fn failed(deployment_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            deployment_id: deployment_id.into(),
            status: DeployPhase::Failed,
            message: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// One-line summary for progress output
    pub fn summary(&self) -> String {
        match &self.message {
            Some(message) => format!("{} {}% - {}", self.status, self.progress, message),
            None => format!("{} {}%", self.status, self.progress),
        }
    }
}
