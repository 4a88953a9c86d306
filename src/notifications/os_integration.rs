//! OS-native notification integration (macOS/Linux).

use anyhow::Result;
use async_trait::async_trait;

use super::integration::NotificationIntegration;
use super::NotificationEvent;
use crate::config::NotificationsConfig;

/// Desktop notifications through the platform notification center:
/// `mac-notification-sys` on macOS, `notify-rust` on Linux.
pub struct OsIntegration {
    enabled: bool,
}

impl OsIntegration {
    pub fn new(config: &NotificationsConfig) -> Self {
        Self {
            enabled: config.desktop,
        }
    }
}

#[async_trait]
impl NotificationIntegration for OsIntegration {
    fn name(&self) -> &str {
        "os"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    async fn send(&self, event: &NotificationEvent) -> Result<()> {
        let (title, subtitle, message) = event.to_os_notification();

        if let Err(e) = super::send_os_notification(&title, &subtitle, &message, true) {
            tracing::warn!(
                integration = "os",
                event = %event.event_type(),
                error = %e,
                "Failed to send OS notification"
            );
        }

        Ok(())
    }
}
