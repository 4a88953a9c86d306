//! Client side of the wizard backend.
//!
//! `LaunchApi` is the seam between the wizard and the backend: the HTTP
//! implementation talks to the real service, tests substitute their own.

pub mod error;
pub mod http;

pub use error::ApiError;
pub use http::HttpLaunchApi;

use async_trait::async_trait;

use crate::catalog;
use crate::types::{
    DeployResponse, DeploymentStatus, GeneratedProduct, LaunchRequest, NotifyRequest, Platform,
    ProductGenerationRequest, ValidationResult,
};

/// Operations the wizard needs from its backend
#[async_trait]
pub trait LaunchApi: Send + Sync {
    /// `GET /api/v1/integrations/platforms`
    async fn list_platforms(&self) -> Result<Vec<Platform>, ApiError>;

    /// `POST /api/v1/wizard/llm/generate-products`
    async fn generate_products(
        &self,
        request: &ProductGenerationRequest,
    ) -> Result<Vec<GeneratedProduct>, ApiError>;

    /// `POST /api/v1/wizard/launch/validate`
    async fn validate(&self, request: &LaunchRequest) -> Result<ValidationResult, ApiError>;

    /// `POST /api/v1/wizard/launch/deploy`
    async fn deploy(&self, request: &LaunchRequest) -> Result<DeployResponse, ApiError>;

    /// `GET /api/v1/wizard/launch/status/{id}`
    async fn deployment_status(&self, deployment_id: &str)
        -> Result<DeploymentStatus, ApiError>;

    /// `POST /api/v1/wizard/launch/notify`
    async fn notify(&self, request: &NotifyRequest) -> Result<(), ApiError>;
}

/// Where a list shown to the user came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Remote,
    Fallback,
}

/// Platform list, substituting the built-in list when the call fails
pub async fn platforms_or_fallback(api: &dyn LaunchApi) -> (Vec<Platform>, DataSource) {
    match api.list_platforms().await {
        Ok(platforms) => (platforms, DataSource::Remote),
        Err(e) => {
            tracing::warn!("Failed to load platforms, using defaults: {}", e);
            (catalog::fallback_platforms(), DataSource::Fallback)
        }
    }
}

/// Generated products, substituting the offline generator when the call fails
pub async fn products_or_fallback(
    api: &dyn LaunchApi,
    categories: &[String],
) -> (Vec<GeneratedProduct>, DataSource) {
    let request = ProductGenerationRequest::for_categories(categories);
    match api.generate_products(&request).await {
        Ok(products) => (products, DataSource::Remote),
        Err(e) => {
            tracing::warn!(
                categories = categories.len(),
                "Product generation failed, using mock catalog: {}",
                e
            );
            (
                catalog::generate_mock_products(categories),
                DataSource::Fallback,
            )
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted `LaunchApi` for unit tests

    use super::*;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct ScriptedApi {
        pub platforms: Option<Vec<Platform>>,
        pub products: Option<Vec<GeneratedProduct>>,
        pub validation: Option<ValidationResult>,
        pub deploy: Option<DeployResponse>,
        /// Status responses returned in order; the last one repeats
        pub statuses: Mutex<VecDeque<Result<DeploymentStatus, ApiError>>>,
        pub validate_calls: AtomicUsize,
        pub deploy_calls: AtomicUsize,
        pub status_calls: AtomicUsize,
        pub notify_calls: Mutex<Vec<NotifyRequest>>,
    }

    impl ScriptedApi {
        pub fn with_statuses(statuses: Vec<Result<DeploymentStatus, ApiError>>) -> Self {
            Self {
                statuses: Mutex::new(statuses.into()),
                ..Default::default()
            }
        }

        fn down() -> ApiError {
            ApiError::Unreachable("connection refused".to_string())
        }
    }

    #[async_trait]
    impl LaunchApi for ScriptedApi {
        async fn list_platforms(&self) -> Result<Vec<Platform>, ApiError> {
            self.platforms.clone().ok_or_else(Self::down)
        }

        async fn generate_products(
            &self,
            _request: &ProductGenerationRequest,
        ) -> Result<Vec<GeneratedProduct>, ApiError> {
            self.products.clone().ok_or_else(Self::down)
        }

        async fn validate(&self, _request: &LaunchRequest) -> Result<ValidationResult, ApiError> {
            self.validate_calls.fetch_add(1, Ordering::SeqCst);
            self.validation.clone().ok_or_else(Self::down)
        }

        async fn deploy(&self, _request: &LaunchRequest) -> Result<DeployResponse, ApiError> {
            self.deploy_calls.fetch_add(1, Ordering::SeqCst);
            self.deploy.clone().ok_or_else(Self::down)
        }

        async fn deployment_status(
            &self,
            _deployment_id: &str,
        ) -> Result<DeploymentStatus, ApiError> {
            self.status_calls.fetch_add(1, Ordering::SeqCst);
            let mut statuses = self.statuses.lock().unwrap();
            if statuses.len() > 1 {
                statuses.pop_front().unwrap()
            } else {
                statuses.front().cloned().unwrap_or_else(|| Err(Self::down()))
            }
        }

        async fn notify(&self, request: &NotifyRequest) -> Result<(), ApiError> {
            self.notify_calls.lock().unwrap().push(request.clone());
            Ok(())
        }
    }
}
