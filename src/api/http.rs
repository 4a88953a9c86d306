//! reqwest implementation of [`LaunchApi`]

use async_trait::async_trait;
use reqwest::{Client, IntoUrl, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use super::{ApiError, LaunchApi};
use crate::config::ApiConfig;
use crate::types::{
    DeployResponse, DeploymentStatus, GeneratedProduct, LaunchRequest, NotifyRequest, Platform,
    PlatformList, ProductGenerationRequest, ProductGenerationResponse, ValidationResult,
};

/// HTTP client for the wizard backend
#[derive(Debug, Clone)]
pub struct HttpLaunchApi {
    client: Client,
    base_url: String,
    status_timeout: Duration,
}

impl HttpLaunchApi {
    pub fn new(
        base_url: &str,
        request_timeout: Duration,
        status_timeout: Duration,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            status_timeout,
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::new(
            &config.base_url,
            Duration::from_secs(config.request_timeout_secs),
            Duration::from_secs(config.status_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Status URL with the deployment id escaped as a single path segment
    fn status_url(&self, deployment_id: &str) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.url("/api/v1/wizard/launch/status"))
            .map_err(|e| ApiError::Client(format!("Invalid base URL {}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|()| ApiError::Client(format!("Invalid base URL {}", self.base_url)))?
            .push(deployment_id);
        Ok(url)
    }

    /// Map non-success statuses to [`ApiError::Http`], keeping the body as message
    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(ApiError::Http {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<R: DeserializeOwned>(response: Response) -> Result<R, ApiError> {
        Self::check(response)
            .await?
            .json::<R>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get_json<U: IntoUrl + Send, R: DeserializeOwned>(
        &self,
        url: U,
        timeout: Option<Duration>,
    ) -> Result<R, ApiError> {
        let mut request = self.client.get(url);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }
        let response = request.send().await?;
        Self::decode(response).await
    }

    async fn post_json<T: Serialize + Sync, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<R, ApiError> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }
}

#[async_trait]
impl LaunchApi for HttpLaunchApi {
    async fn list_platforms(&self) -> Result<Vec<Platform>, ApiError> {
        let list: PlatformList = self
            .get_json(self.url("/api/v1/integrations/platforms"), None)
            .await?;
        Ok(list.platforms)
    }

    async fn generate_products(
        &self,
        request: &ProductGenerationRequest,
    ) -> Result<Vec<GeneratedProduct>, ApiError> {
        let response: ProductGenerationResponse = self
            .post_json("/api/v1/wizard/llm/generate-products", request)
            .await?;
        Ok(response.products)
    }

    async fn validate(&self, request: &LaunchRequest) -> Result<ValidationResult, ApiError> {
        self.post_json("/api/v1/wizard/launch/validate", request)
            .await
    }

    async fn deploy(&self, request: &LaunchRequest) -> Result<DeployResponse, ApiError> {
        self.post_json("/api/v1/wizard/launch/deploy", request).await
    }

    async fn deployment_status(
        &self,
        deployment_id: &str,
    ) -> Result<DeploymentStatus, ApiError> {
        let url = self.status_url(deployment_id)?;
        self.get_json(url, Some(self.status_timeout)).await
    }

    async fn notify(&self, request: &NotifyRequest) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url("/api/v1/wizard/launch/notify"))
            .json(request)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DeployPhase;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client(server: &MockServer) -> HttpLaunchApi {
        HttpLaunchApi::new(
            &server.base_url(),
            Duration::from_secs(5),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    fn launch_request() -> LaunchRequest {
        LaunchRequest {
            session_id: "default".to_string(),
            store_config: json!({"businessName": "Acme"}),
            launch_settings: json!({"selectedPlatform": "nextbasket"}),
        }
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let api = HttpLaunchApi::new(
            "http://localhost:9020/",
            Duration::from_secs(1),
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(api.base_url(), "http://localhost:9020");
    }

    #[test]
    fn test_status_url_escapes_deployment_id() {
        let api = HttpLaunchApi::new(
            "http://localhost:9020",
            Duration::from_secs(1),
            Duration::from_secs(1),
        )
        .unwrap();

        let url = api.status_url("deploy_ab12cd34").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:9020/api/v1/wizard/launch/status/deploy_ab12cd34"
        );

        let url = api.status_url("deploy 1/x?y").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:9020/api/v1/wizard/launch/status/deploy%201%2Fx%3Fy"
        );
    }

    #[tokio::test]
    async fn test_list_platforms() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v1/integrations/platforms");
                then.status(200).json_body(json!({
                    "platforms": [{"id": "shopify", "name": "Shopify", "features": []}]
                }));
            })
            .await;

        let platforms = client(&server).list_platforms().await.unwrap();
        mock.assert_async().await;
        assert_eq!(platforms.len(), 1);
        assert_eq!(platforms[0].name, "Shopify");
    }

    #[tokio::test]
    async fn test_generate_products_sends_count() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v1/wizard/llm/generate-products")
                    .json_body(json!({"categories": ["books", "toys"], "count": 6}));
                then.status(200).json_body(json!({"products": []}));
            })
            .await;

        let request =
            ProductGenerationRequest::for_categories(&["books".to_string(), "toys".to_string()]);
        let products = client(&server).generate_products(&request).await.unwrap();
        mock.assert_async().await;
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_deploy_rejection_maps_to_http_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/v1/wizard/launch/deploy");
                then.status(400)
                    .json_body(json!({"detail": "Store validation failed"}));
            })
            .await;

        let err = client(&server).deploy(&launch_request()).await.unwrap_err();
        assert_eq!(err.status(), Some(400));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/v1/wizard/launch/validate");
                then.status(200).body("not json");
            })
            .await;

        let err = client(&server)
            .validate(&launch_request())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_deployment_status_path() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v1/wizard/launch/status/deploy_ab12cd34");
                then.status(200).json_body(json!({
                    "deployment_id": "deploy_ab12cd34",
                    "status": "configuring",
                    "progress": 40,
                    "message": "Store deployment configuring"
                }));
            })
            .await;

        let status = client(&server)
            .deployment_status("deploy_ab12cd34")
            .await
            .unwrap();
        assert_eq!(status.status, DeployPhase::Configuring);
        assert_eq!(status.progress, 40);
    }

    #[tokio::test]
    async fn test_notify_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v1/wizard/launch/notify")
                    .json_body(json!({"store_id": "store_1", "notification_type": "launch"}));
                then.status(200).json_body(json!({"status": "sent"}));
            })
            .await;

        client(&server)
            .notify(&NotifyRequest::launch("store_1"))
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        // Port 9 (discard) is not expected to accept HTTP connections
        let api = HttpLaunchApi::new(
            "http://127.0.0.1:9",
            Duration::from_secs(2),
            Duration::from_secs(2),
        )
        .unwrap();
        let err = api.list_platforms().await.unwrap_err();
        assert!(err.is_unreachable());
    }
}
