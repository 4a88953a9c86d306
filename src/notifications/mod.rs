//! Local notifications for launch events.
//!
//! Events are dispatched through `NotificationService` to every enabled
//! integration. The only integration today is the OS notification center.

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "linux")]
pub mod linux;

mod integration;
mod os_integration;
mod service;

pub use integration::NotificationIntegration;
pub use os_integration::OsIntegration;
pub use service::NotificationService;

/// Send a notification using the platform-specific implementation.
pub fn send_os_notification(title: &str, subtitle: &str, message: &str, sound: bool) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        macos::send_notification(title, subtitle, message, sound)
    }

    #[cfg(target_os = "linux")]
    {
        linux::send_notification(title, subtitle, message, sound)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        let _ = sound;
        tracing::info!("Notification: {} - {} - {}", title, subtitle, message);
        Ok(())
    }
}

/// Launch events that can be dispatched to integrations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", content = "data")]
pub enum NotificationEvent {
    /// Deployment finished and the store is live
    #[serde(rename = "store.launched")]
    StoreLaunched {
        business_name: String,
        deployment_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        store_url: Option<String>,
    },

    /// Deployment could not be started or reported failure
    #[serde(rename = "store.launch_failed")]
    LaunchFailed {
        business_name: String,
        message: String,
    },
}

impl NotificationEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            NotificationEvent::StoreLaunched { .. } => "store.launched",
            NotificationEvent::LaunchFailed { .. } => "store.launch_failed",
        }
    }

    /// Format for OS notification display.
    /// Returns (title, subtitle, message).
    pub fn to_os_notification(&self) -> (String, String, String) {
        match self {
            NotificationEvent::StoreLaunched {
                business_name,
                deployment_id,
                store_url,
            } => (
                "Store Launched".to_string(),
                format!("{} - Now Live!", business_name),
                store_url
                    .clone()
                    .unwrap_or_else(|| format!("Deployment {}", deployment_id)),
            ),
            NotificationEvent::LaunchFailed {
                business_name,
                message,
            } => (
                "Launch Failed".to_string(),
                business_name.clone(),
                message.clone(),
            ),
        }
    }
}
