//! Validate, deploy, and follow a store launch to completion.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use super::monitor::{DeploymentMonitor, MonitorOutcome};
use super::record::LaunchRecord;
use super::LaunchEvent;
use crate::api::LaunchApi;
use crate::config::Config;
use crate::notifications::{NotificationEvent, NotificationService};
use crate::types::{
    DeployPhase, DeployResponse, DeploymentStatus, LaunchRequest, NotifyRequest,
    ValidationResult,
};
use crate::wizard::StoreConfig;

pub const VALIDATION_FAILED_MESSAGE: &str =
    "Store validation failed. Please complete all required steps.";
pub const LAUNCH_FAILED_MESSAGE: &str = "Launch failed. Please try again.";

/// How a launch attempt ended
#[derive(Debug, Clone, PartialEq)]
pub enum LaunchOutcome {
    /// Store is live; the record has been built (and saved when possible)
    Completed(LaunchRecord),
    /// Validation did not pass or could not be performed
    Rejected(ValidationResult),
    /// Deploy call failed or the deployment reported `failed`
    Failed(DeploymentStatus),
    Cancelled,
}

impl LaunchOutcome {
    /// Message for the blocking alert, if this outcome needs one
    pub fn alert(&self) -> Option<&'static str> {
        match self {
            LaunchOutcome::Rejected(_) => Some(VALIDATION_FAILED_MESSAGE),
            LaunchOutcome::Failed(_) => Some(LAUNCH_FAILED_MESSAGE),
            _ => None,
        }
    }
}

/// Drives a single launch against the backend
#[derive(Clone)]
pub struct LaunchFlow {
    api: Arc<dyn LaunchApi>,
    notifications: NotificationService,
    poll_interval: Duration,
    max_polls: Option<u32>,
    record_path: PathBuf,
    default_session_id: String,
}

impl LaunchFlow {
    pub fn new(api: Arc<dyn LaunchApi>, config: &Config) -> Self {
        Self {
            api,
            notifications: NotificationService::from_config(config),
            poll_interval: config.poll_interval(),
            max_polls: config.launch.max_polls,
            record_path: config.launch_record_path(),
            default_session_id: config.launch.session_id.clone(),
        }
    }

    pub fn with_notifications(mut self, notifications: NotificationService) -> Self {
        self.notifications = notifications;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_record_path(mut self, path: PathBuf) -> Self {
        self.record_path = path;
        self
    }

    /// Body for validate and deploy
    pub fn request_for(&self, store: &StoreConfig) -> LaunchRequest {
        let session_id = match store.get_str(crate::wizard::store_config::KEY_SESSION_ID) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => self.default_session_id.clone(),
        };
        LaunchRequest {
            session_id,
            store_config: store.to_value(),
            launch_settings: store.launch_settings().to_value(),
        }
    }

    /// Remote validation. A failed request counts as invalid.
    pub async fn validate(&self, store: &StoreConfig) -> ValidationResult {
        match self.api.validate(&self.request_for(store)).await {
            Ok(result) => {
                info!(
                    valid = result.valid,
                    errors = result.errors.len(),
                    warnings = result.warnings.len(),
                    "Store validation"
                );
                result
            }
            Err(e) => {
                warn!("Validation error: {}", e);
                ValidationResult::default()
            }
        }
    }

    /// Run a launch to its end.
    ///
    /// Validation is skipped when `cached` already holds a passing result.
    /// Progress goes to `events`; the loop stops early when `shutdown` fires.
    pub async fn run(
        &self,
        store: &StoreConfig,
        cached: Option<&ValidationResult>,
        events: &mpsc::UnboundedSender<LaunchEvent>,
        shutdown: Option<mpsc::Receiver<()>>,
    ) -> LaunchOutcome {
        let validation = match cached.filter(|v| v.valid) {
            Some(valid) => valid.clone(),
            None => {
                let result = self.validate(store).await;
                let _ = events.send(LaunchEvent::Validated(result.clone()));
                if !result.valid {
                    return LaunchOutcome::Rejected(result);
                }
                result
            }
        };

        let _ = events.send(LaunchEvent::Status(DeploymentStatus::deploying("")));

        let deploy = match self.api.deploy(&self.request_for(store)).await {
            Ok(deploy) => deploy,
            Err(e) => {
                error!("Launch error: {}", e);
                let status = DeploymentStatus::failed("", LAUNCH_FAILED_MESSAGE);
                let _ = events.send(LaunchEvent::Status(status.clone()));
                self.notify_failure(store, LAUNCH_FAILED_MESSAGE).await;
                return LaunchOutcome::Failed(status);
            }
        };
        info!(
            deployment_id = %deploy.deployment_id,
            estimated_time = ?deploy.estimated_time,
            "Deployment started"
        );
        let _ = events.send(LaunchEvent::Status(DeploymentStatus::deploying(
            deploy.deployment_id.clone(),
        )));

        let mut monitor =
            DeploymentMonitor::new(self.api.clone(), deploy.deployment_id.clone(), events.clone())
                .with_poll_interval(self.poll_interval)
                .with_max_polls(self.max_polls);
        if let Some(rx) = shutdown {
            monitor = monitor.with_shutdown(rx);
        }

        match monitor.run().await {
            MonitorOutcome::Cancelled => LaunchOutcome::Cancelled,
            MonitorOutcome::Finished(status) if status.status == DeployPhase::Completed => {
                let record = self.complete(store, &validation, &deploy, &status).await;
                LaunchOutcome::Completed(record)
            }
            MonitorOutcome::Finished(status) => {
                let message = status
                    .message
                    .clone()
                    .unwrap_or_else(|| LAUNCH_FAILED_MESSAGE.to_string());
                self.notify_failure(store, &message).await;
                LaunchOutcome::Failed(status)
            }
        }
    }

    /// Completion bookkeeping: remote notification, config update, record
    async fn complete(
        &self,
        store: &StoreConfig,
        validation: &ValidationResult,
        deploy: &DeployResponse,
        status: &DeploymentStatus,
    ) -> LaunchRecord {
        let deployment_id = if status.deployment_id.is_empty() {
            deploy.deployment_id.clone()
        } else {
            status.deployment_id.clone()
        };
        let store_url = status.store_url.clone().or_else(|| deploy.store_url.clone());

        if store.launch_settings().send_notifications {
            let store_id = status
                .store_id
                .clone()
                .or_else(|| deploy.store_id.clone())
                .or_else(|| validation.store_id.clone());
            match store_id {
                Some(store_id) => {
                    if let Err(e) = self.api.notify(&NotifyRequest::launch(store_id)).await {
                        warn!("Notification error: {}", e);
                    }
                }
                None => warn!("No store id known, skipping launch notification"),
            }
        }

        let mut store_data = store.clone();
        store_data.mark_launched(store_url.as_deref(), &deployment_id);

        let record = LaunchRecord::new(store_url.clone(), deployment_id.clone(), store_data);
        if let Err(e) = record.save(&self.record_path) {
            error!("Failed to save launch record: {:#}", e);
        }

        self.notifications
            .notify(NotificationEvent::StoreLaunched {
                business_name: business_label(store),
                deployment_id,
                store_url,
            })
            .await;

        record
    }

    async fn notify_failure(&self, store: &StoreConfig, message: &str) {
        self.notifications
            .notify(NotificationEvent::LaunchFailed {
                business_name: business_label(store),
                message: message.to_string(),
            })
            .await;
    }
}

fn business_label(store: &StoreConfig) -> String {
    store.business_name().unwrap_or("My Store").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::ScriptedApi;
    use serde_json::json;
    use std::sync::atomic::Ordering;
    use tempfile::TempDir;

    const FAST: Duration = Duration::from_millis(10);

    fn store() -> StoreConfig {
        StoreConfig::from_value(json!({
            "businessName": "Acme",
            "selectedTheme": "modern",
            "products": [{"id": "product-1"}, {"id": "product-2"}, {"id": "product-3"}]
        }))
        .unwrap()
    }

    fn valid() -> ValidationResult {
        ValidationResult {
            valid: true,
            store_id: Some("store_1234abcd".to_string()),
            ..Default::default()
        }
    }

    fn deploy_response() -> DeployResponse {
        DeployResponse {
            deployment_id: "deploy_ab12cd34".to_string(),
            store_id: Some("store_1234abcd".to_string()),
            store_url: Some("https://store_1234abcd.nextbasket.com".to_string()),
            status: "deploying".to_string(),
            estimated_time: Some(120),
            message: None,
        }
    }

    fn completed() -> DeploymentStatus {
        DeploymentStatus {
            deployment_id: "deploy_ab12cd34".to_string(),
            status: DeployPhase::Completed,
            progress: 100,
            store_url: Some("https://store_deploy_a.nextbasket.com".to_string()),
            ..Default::default()
        }
    }

    fn flow(api: Arc<ScriptedApi>, temp_dir: &TempDir) -> LaunchFlow {
        LaunchFlow::new(api, &Config::default())
            .with_notifications(NotificationService::disabled())
            .with_poll_interval(FAST)
            .with_record_path(temp_dir.path().join("launch.json"))
    }

    #[tokio::test]
    async fn test_successful_launch() {
        let temp_dir = TempDir::new().unwrap();
        let api = Arc::new(ScriptedApi {
            validation: Some(valid()),
            deploy: Some(deploy_response()),
            ..ScriptedApi::with_statuses(vec![Ok(completed())])
        });
        let (tx, mut rx) = mpsc::unbounded_channel();

        let outcome = flow(api.clone(), &temp_dir).run(&store(), None, &tx, None).await;

        let LaunchOutcome::Completed(record) = outcome else {
            panic!("expected completion");
        };
        assert_eq!(record.deployment_id, "deploy_ab12cd34");
        assert_eq!(
            record.store_url.as_deref(),
            Some("https://store_deploy_a.nextbasket.com")
        );
        assert_eq!(record.store_data.get_str("launchStatus"), Some("completed"));

        // Notification uses the store id from the deploy response
        let notified = api.notify_calls.lock().unwrap().clone();
        assert_eq!(notified, vec![NotifyRequest::launch("store_1234abcd")]);

        let saved = LaunchRecord::load(&temp_dir.path().join("launch.json"))
            .unwrap()
            .unwrap();
        assert_eq!(saved.deployment_id, record.deployment_id);

        let first = rx.try_recv().unwrap();
        assert!(matches!(first, LaunchEvent::Validated(ref v) if v.valid));
    }

    #[tokio::test]
    async fn test_cached_valid_result_skips_validation() {
        let temp_dir = TempDir::new().unwrap();
        let api = Arc::new(ScriptedApi {
            deploy: Some(deploy_response()),
            ..ScriptedApi::with_statuses(vec![Ok(completed())])
        });
        let (tx, _rx) = mpsc::unbounded_channel();

        let outcome = flow(api.clone(), &temp_dir)
            .run(&store(), Some(&valid()), &tx, None)
            .await;

        assert!(matches!(outcome, LaunchOutcome::Completed(_)));
        assert_eq!(api.validate_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_cached_invalid_result_revalidates() {
        let temp_dir = TempDir::new().unwrap();
        let api = Arc::new(ScriptedApi {
            validation: Some(ValidationResult {
                valid: false,
                errors: vec!["Missing required field: selectedTheme".to_string()],
                ..Default::default()
            }),
            ..Default::default()
        });
        let (tx, _rx) = mpsc::unbounded_channel();
        let stale = ValidationResult::default();

        let outcome = flow(api.clone(), &temp_dir)
            .run(&store(), Some(&stale), &tx, None)
            .await;

        assert_eq!(api.validate_calls.load(Ordering::SeqCst), 1);
        assert_eq!(api.deploy_calls.load(Ordering::SeqCst), 0);
        assert_eq!(outcome.alert(), Some(VALIDATION_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn test_validation_request_failure_rejects() {
        let temp_dir = TempDir::new().unwrap();
        let api = Arc::new(ScriptedApi::default());
        let (tx, _rx) = mpsc::unbounded_channel();

        let outcome = flow(api.clone(), &temp_dir).run(&store(), None, &tx, None).await;

        assert!(matches!(outcome, LaunchOutcome::Rejected(ref v) if !v.valid));
        assert_eq!(api.deploy_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_deploy_failure() {
        let temp_dir = TempDir::new().unwrap();
        let api = Arc::new(ScriptedApi {
            validation: Some(valid()),
            ..Default::default()
        });
        let (tx, _rx) = mpsc::unbounded_channel();

        let outcome = flow(api.clone(), &temp_dir).run(&store(), None, &tx, None).await;

        let LaunchOutcome::Failed(status) = outcome.clone() else {
            panic!("expected failure");
        };
        assert_eq!(status.message.as_deref(), Some(LAUNCH_FAILED_MESSAGE));
        assert_eq!(status.progress, 0);
        assert_eq!(outcome.alert(), Some(LAUNCH_FAILED_MESSAGE));
        assert_eq!(api.status_calls.load(Ordering::SeqCst), 0);
        assert!(!temp_dir.path().join("launch.json").exists());
    }

    #[tokio::test]
    async fn test_reported_failure_does_not_save_record() {
        let temp_dir = TempDir::new().unwrap();
        let failed = DeploymentStatus::failed("deploy_ab12cd34", "Provisioning error");
        let api = Arc::new(ScriptedApi {
            validation: Some(valid()),
            deploy: Some(deploy_response()),
            ..ScriptedApi::with_statuses(vec![Ok(failed.clone())])
        });
        let (tx, _rx) = mpsc::unbounded_channel();

        let outcome = flow(api.clone(), &temp_dir).run(&store(), None, &tx, None).await;

        assert_eq!(outcome, LaunchOutcome::Failed(failed));
        assert!(api.notify_calls.lock().unwrap().is_empty());
        assert!(!temp_dir.path().join("launch.json").exists());
    }

    #[tokio::test]
    async fn test_notifications_disabled_in_launch_settings() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = store();
        config.set("launchSettings", json!({"sendNotifications": false}));
        let api = Arc::new(ScriptedApi {
            validation: Some(valid()),
            deploy: Some(deploy_response()),
            ..ScriptedApi::with_statuses(vec![Ok(completed())])
        });
        let (tx, _rx) = mpsc::unbounded_channel();

        let outcome = flow(api.clone(), &temp_dir).run(&config, None, &tx, None).await;

        assert!(matches!(outcome, LaunchOutcome::Completed(_)));
        assert!(api.notify_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_cancellation() {
        let temp_dir = TempDir::new().unwrap();
        let api = Arc::new(ScriptedApi {
            validation: Some(valid()),
            deploy: Some(deploy_response()),
            ..ScriptedApi::with_statuses(vec![Ok(DeploymentStatus::deploying("deploy_ab12cd34"))])
        });
        let (tx, _rx) = mpsc::unbounded_channel();
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);

        let flow = flow(api.clone(), &temp_dir);
        let store = store();
        let task = tokio::spawn(async move { flow.run(&store, None, &tx, Some(shutdown_rx)).await });
        tokio::time::sleep(FAST * 3).await;
        shutdown_tx.send(()).await.unwrap();

        assert_eq!(task.await.unwrap(), LaunchOutcome::Cancelled);
    }

    #[test]
    fn test_request_uses_session_and_launch_settings() {
        let temp_dir = TempDir::new().unwrap();
        let flow = flow(Arc::new(ScriptedApi::default()), &temp_dir);

        let request = flow.request_for(&store());
        assert_eq!(request.session_id, "default");
        assert_eq!(request.store_config["businessName"], "Acme");
        assert_eq!(request.launch_settings["selectedPlatform"], "nextbasket");

        let mut with_session = store();
        with_session.set("sessionId", "sess-1");
        assert_eq!(flow.request_for(&with_session).session_id, "sess-1");
    }
}
