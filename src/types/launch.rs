//! Request and response bodies of the wizard launch endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::product::GeneratedProduct;

/// Body shared by the validate and deploy calls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRequest {
    pub session_id: String,
    pub store_config: Value,
    #[serde(default)]
    pub launch_settings: Value,
}

/// Outcome of remote configuration validation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
}

/// Response of the deploy call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeployResponse {
    pub deployment_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_url: Option<String>,
    #[serde(default)]
    pub status: String,
    /// Estimated seconds until the store is live
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body of the launch notification call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifyRequest {
    pub store_id: String,
    pub notification_type: String,
}

impl NotifyRequest {
    pub fn launch(store_id: impl Into<String>) -> Self {
        Self {
            store_id: store_id.into(),
            notification_type: "launch".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductGenerationRequest {
    pub categories: Vec<String>,
    pub count: usize,
}

impl ProductGenerationRequest {
    /// Three products per selected category
    pub fn for_categories(categories: &[String]) -> Self {
        Self {
            categories: categories.to_vec(),
            count: categories.len() * 3,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductGenerationResponse {
    #[serde(default)]
    pub products: Vec<GeneratedProduct>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generation_count_is_three_per_category() {
        let request =
            ProductGenerationRequest::for_categories(&["electronics".to_string(), "books".to_string()]);
        assert_eq!(request.count, 6);
    }

    #[test]
    fn test_launch_request_wire_names() {
        let request = LaunchRequest {
            session_id: "default".to_string(),
            store_config: json!({"businessName": "Acme"}),
            launch_settings: json!({"autoLaunch": true}),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["session_id"], "default");
        assert_eq!(value["store_config"]["businessName"], "Acme");
        assert_eq!(value["launch_settings"]["autoLaunch"], true);
    }

    #[test]
    fn test_validation_result_defaults() {
        let result: ValidationResult = serde_json::from_str(r#"{"valid": false}"#).unwrap();
        assert!(!result.valid);
        assert!(result.errors.is_empty());
        assert!(result.store_id.is_none());
    }

    #[test]
    fn test_notify_request_type() {
        let value = serde_json::to_value(NotifyRequest::launch("store_1")).unwrap();
        assert_eq!(value, json!({"store_id": "store_1", "notification_type": "launch"}));
    }
}
