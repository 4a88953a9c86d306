//! Deployment status polling.
//!
//! Re-queries the status endpoint on a fixed interval until the deployment
//! reaches a terminal state, the optional poll cap is hit, or the monitor is
//! cancelled. A failed request is logged and the next tick tries again.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, instrument, warn};

use super::LaunchEvent;
use crate::api::LaunchApi;
use crate::types::DeploymentStatus;

/// Default poll interval (2 seconds)
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Shortest interval the timer accepts
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// How a monitor run ended
#[derive(Debug, Clone, PartialEq)]
pub enum MonitorOutcome {
    /// Last status received, `completed` or `failed`
    Finished(DeploymentStatus),
    Cancelled,
}

pub struct DeploymentMonitor {
    api: Arc<dyn LaunchApi>,
    deployment_id: String,
    poll_interval: Duration,
    /// Give up after this many polls; `None` polls until terminal
    max_polls: Option<u32>,
    event_tx: mpsc::UnboundedSender<LaunchEvent>,
    shutdown_rx: Option<mpsc::Receiver<()>>,
}

impl DeploymentMonitor {
    pub fn new(
        api: Arc<dyn LaunchApi>,
        deployment_id: impl Into<String>,
        event_tx: mpsc::UnboundedSender<LaunchEvent>,
    ) -> Self {
        Self {
            api,
            deployment_id: deployment_id.into(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_polls: None,
            event_tx,
            shutdown_rx: None,
        }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval.max(MIN_POLL_INTERVAL);
        self
    }

    pub fn with_max_polls(mut self, max_polls: Option<u32>) -> Self {
        self.max_polls = max_polls;
        self
    }

    pub fn with_shutdown(mut self, rx: mpsc::Receiver<()>) -> Self {
        self.shutdown_rx = Some(rx);
        self
    }

    /// Poll until terminal or cancelled
    #[instrument(skip(self), fields(deployment_id = %self.deployment_id))]
    pub async fn run(mut self) -> MonitorOutcome {
        info!(
            "Deployment monitor started, poll interval: {:?}",
            self.poll_interval
        );

        // First query one interval after deploy, not immediately
        let mut interval = interval_at(Instant::now() + self.poll_interval, self.poll_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut polls: u32 = 0;

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    polls += 1;
                    if let Some(status) = self.poll_once().await {
                        if status.is_terminal() {
                            info!(status = %status.status, "Deployment finished");
                            return MonitorOutcome::Finished(status);
                        }
                    }
                    if self.max_polls.is_some_and(|max| polls >= max) {
                        let status = DeploymentStatus::failed(
                            self.deployment_id.clone(),
                            format!("Deployment status timed out after {} polls", polls),
                        );
                        warn!(polls, "Giving up on deployment status");
                        let _ = self.event_tx.send(LaunchEvent::Status(status.clone()));
                        return MonitorOutcome::Finished(status);
                    }
                }
                _ = async {
                    if let Some(ref mut rx) = self.shutdown_rx {
                        rx.recv().await
                    } else {
                        std::future::pending::<Option<()>>().await
                    }
                } => {
                    info!("Deployment monitor cancelled");
                    return MonitorOutcome::Cancelled;
                }
            }
        }
    }

    /// Query once and forward the status. `None` when the request failed.
    async fn poll_once(&self) -> Option<DeploymentStatus> {
        match self.api.deployment_status(&self.deployment_id).await {
            Ok(status) => {
                debug!(
                    status = %status.status,
                    progress = status.progress,
                    "Deployment status"
                );
                let _ = self.event_tx.send(LaunchEvent::Status(status.clone()));
                Some(status)
            }
            Err(e) => {
                warn!("Status polling error: {}", e);
                None
            }
        }
    }

    /// Run on a background task
    pub fn spawn(self) -> MonitorHandle {
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);
        let task = tokio::spawn(self.with_shutdown(shutdown_rx).run());
        MonitorHandle {
            shutdown_tx,
            task: Some(task),
        }
    }
}

/// Owner of a spawned monitor. Dropping the handle stops the poll loop.
pub struct MonitorHandle {
    shutdown_tx: mpsc::Sender<()>,
    task: Option<JoinHandle<MonitorOutcome>>,
}

impl MonitorHandle {
    /// Ask the loop to stop at its next wake-up
    pub fn cancel(&self) {
        let _ = self.shutdown_tx.try_send(());
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Wait for the loop to end
    pub async fn join(mut self) -> MonitorOutcome {
        match self.task.take() {
            Some(task) => task.await.unwrap_or(MonitorOutcome::Cancelled),
            None => MonitorOutcome::Cancelled,
        }
    }
}

impl Drop for MonitorHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
