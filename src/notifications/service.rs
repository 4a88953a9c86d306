//! Central notification service that dispatches events to all integrations.

use std::sync::Arc;

use super::integration::NotificationIntegration;
use super::os_integration::OsIntegration;
use super::NotificationEvent;
use crate::config::Config;

/// Dispatches events to every enabled integration.
#[derive(Clone)]
pub struct NotificationService {
    integrations: Vec<Arc<dyn NotificationIntegration>>,
    enabled: bool,
}

impl NotificationService {
    pub fn from_config(config: &Config) -> Self {
        let integrations: Vec<Arc<dyn NotificationIntegration>> =
            vec![Arc::new(OsIntegration::new(&config.notifications))];

        Self {
            integrations,
            enabled: config.notifications.enabled,
        }
    }

    pub fn with_integrations(integrations: Vec<Arc<dyn NotificationIntegration>>) -> Self {
        Self {
            integrations,
            enabled: true,
        }
    }

    pub fn disabled() -> Self {
        Self {
            integrations: Vec::new(),
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Deliver an event to all enabled integrations.
    ///
    /// Errors are logged, never propagated.
    pub async fn notify(&self, event: NotificationEvent) {
        if !self.enabled {
            return;
        }

        for integration in &self.integrations {
            if !integration.is_enabled() {
                continue;
            }
            if let Err(e) = integration.send(&event).await {
                tracing::warn!(
                    integration = %integration.name(),
                    event = %event.event_type(),
                    error = %e,
                    "Notification delivery failed"
                );
            }
        }
    }
}
