//! Notification integration trait definition.

use anyhow::Result;
use async_trait::async_trait;

use super::NotificationEvent;

/// A destination for launch notifications.
#[async_trait]
pub trait NotificationIntegration: Send + Sync {
    /// Integration name (for logging)
    fn name(&self) -> &str;

    fn is_enabled(&self) -> bool;

    /// Send a notification event.
    ///
    /// Fire-and-forget: implementations log delivery problems themselves.
    async fn send(&self, event: &NotificationEvent) -> Result<()>;
}
