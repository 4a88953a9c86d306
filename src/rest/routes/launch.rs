//! Launch endpoints: validation, deployment, status and notification.
//!
//! Deployments advance one stage per status request until they complete.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rest::error::ApiError;
use crate::rest::state::MockState;
use crate::types::{
    DeployPhase, DeployResponse, DeploymentStatus, LaunchRequest, NotifyRequest, ValidationResult,
};

/// Fields a store needs before it can launch
pub const REQUIRED_FIELDS: &[&str] = &["businessName", "products", "selectedTheme"];

pub const MIN_PRODUCTS: usize = 3;

/// Seconds the deploy response advertises
const ESTIMATED_DEPLOY_SECS: u64 = 120;

/// Stages reported by successive status requests, with their progress
const STAGES: &[(DeployPhase, u8)] = &[
    (DeployPhase::Deploying, 20),
    (DeployPhase::Configuring, 40),
    (DeployPhase::Testing, 60),
    (DeployPhase::Finalizing, 80),
    (DeployPhase::Completed, 100),
];

#[derive(Debug, Serialize, Deserialize)]
pub struct NotifyResponse {
    pub status: String,
    pub store_id: String,
}

/// Empty, zero, false and null values count as missing
fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(map)) => map.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
    }
}

fn short_hex() -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    id[..8].to_string()
}

fn provider_group_is_empty(store_config: &Value, group: &str) -> bool {
    store_config
        .get("integrations")
        .and_then(|integrations| integrations.get(group))
        .and_then(Value::as_array)
        .map_or(true, Vec::is_empty)
}

/// Check a store configuration against the launch rules
pub fn validate_store(store_config: &Value) -> ValidationResult {
    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| is_blank(store_config.get(**field)))
        .map(|field| format!("Missing required field: {}", field))
        .collect();

    // Product count is only checked once every required field is present
    if !missing.is_empty() {
        return ValidationResult {
            valid: false,
            errors: missing,
            warnings: Vec::new(),
            store_id: None,
        };
    }

    let product_count = store_config
        .get("products")
        .and_then(Value::as_array)
        .map_or(0, Vec::len);
    if product_count < MIN_PRODUCTS {
        return ValidationResult {
            valid: false,
            errors: vec![format!(
                "Minimum {} products required for launch",
                MIN_PRODUCTS
            )],
            warnings: Vec::new(),
            store_id: None,
        };
    }

    let mut warnings = Vec::new();
    if provider_group_is_empty(store_config, "payment") {
        warnings.push("No payment providers configured".to_string());
    }
    if provider_group_is_empty(store_config, "shipping") {
        warnings.push("No shipping providers configured".to_string());
    }

    ValidationResult {
        valid: true,
        errors: Vec::new(),
        warnings,
        store_id: Some(format!("store_{}", short_hex())),
    }
}

/// Status reported for the `polls`-th request of a deployment
fn staged_status(deployment_id: &str, store_id: Option<String>, polls: usize) -> DeploymentStatus {
    let (phase, progress) = STAGES[polls.min(STAGES.len() - 1)].clone();

    if phase == DeployPhase::Completed {
        return completed_status(deployment_id, store_id);
    }

    DeploymentStatus {
        deployment_id: deployment_id.to_string(),
        message: Some(format!("Store deployment {}", phase)),
        status: phase,
        progress,
        store_id,
        ..Default::default()
    }
}

fn completed_status(deployment_id: &str, store_id: Option<String>) -> DeploymentStatus {
    let prefix: String = deployment_id.chars().take(8).collect();
    DeploymentStatus {
        deployment_id: deployment_id.to_string(),
        status: DeployPhase::Completed,
        progress: 100,
        store_url: Some(format!("https://store_{}.nextbasket.com", prefix)),
        store_id,
        message: Some("Store deployment completed successfully".to_string()),
        ..Default::default()
    }
}

pub async fn validate(Json(request): Json<LaunchRequest>) -> Json<ValidationResult> {
    let result = validate_store(&request.store_config);
    tracing::info!(
        session_id = %request.session_id,
        valid = result.valid,
        errors = result.errors.len(),
        "Validated store configuration"
    );
    Json(result)
}

pub async fn deploy(
    State(state): State<MockState>,
    Json(request): Json<LaunchRequest>,
) -> Result<Json<DeployResponse>, ApiError> {
    let validation = validate_store(&request.store_config);
    let store_id = match validation.store_id {
        Some(store_id) if validation.valid => store_id,
        _ => {
            return Err(ApiError::ValidationFailed(
                "Store validation failed".to_string(),
            ))
        }
    };

    let deployment_id = format!("deploy_{}", short_hex());
    state.register(&deployment_id, &store_id).await;
    tracing::info!(%deployment_id, %store_id, "Started mock deployment");

    Ok(Json(DeployResponse {
        store_url: Some(format!("https://{}.nextbasket.com", store_id)),
        store_id: Some(store_id),
        deployment_id,
        status: DeployPhase::Deploying.to_string(),
        estimated_time: Some(ESTIMATED_DEPLOY_SECS),
        message: Some("Store deployment started successfully".to_string()),
    }))
}

pub async fn status(
    State(state): State<MockState>,
    Path(deployment_id): Path<String>,
) -> Json<DeploymentStatus> {
    let status = match state.advance(&deployment_id).await {
        Some(deployment) => staged_status(&deployment_id, Some(deployment.store_id), deployment.polls),
        None => completed_status(&deployment_id, None),
    };
    tracing::debug!(%deployment_id, status = %status.status, progress = status.progress, "Reported deployment status");
    Json(status)
}

pub async fn notify(Json(request): Json<NotifyRequest>) -> Json<NotifyResponse> {
    tracing::info!(
        store_id = %request.store_id,
        notification_type = %request.notification_type,
        "Launch notification sent"
    );
    Json(NotifyResponse {
        status: "sent".to_string(),
        store_id: request.store_id,
    })
}
