//! In-memory deployment tracking for the mock backend.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

/// A deployment started through the mock deploy endpoint
#[derive(Debug, Clone)]
pub struct MockDeployment {
    pub store_id: String,
    /// Status requests answered so far
    pub polls: usize,
}

/// Shared state for the mock backend
#[derive(Clone, Default)]
pub struct MockState {
    pub deployments: Arc<RwLock<HashMap<String, MockDeployment>>>,
}

impl MockState {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn register(&self, deployment_id: &str, store_id: &str) {
        let mut deployments = self.deployments.write().await;
        deployments.insert(
            deployment_id.to_string(),
            MockDeployment {
                store_id: store_id.to_string(),
                polls: 0,
            },
        );
    }

    /// Count one status request and return the deployment as it was before it.
    /// `None` for ids this server never issued.
    pub async fn advance(&self, deployment_id: &str) -> Option<MockDeployment> {
        let mut deployments = self.deployments.write().await;
        let deployment = deployments.get_mut(deployment_id)?;
        let snapshot = deployment.clone();
        deployment.polls += 1;
        Some(snapshot)
    }

    pub async fn deployment_count(&self) -> usize {
        self.deployments.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_advance_counts_polls() {
        let state = MockState::new();
        state.register("deploy_1", "store_1").await;

        assert_eq!(state.advance("deploy_1").await.unwrap().polls, 0);
        assert_eq!(state.advance("deploy_1").await.unwrap().polls, 1);
        assert_eq!(state.deployment_count().await, 1);
    }

    #[tokio::test]
    async fn test_advance_unknown_deployment() {
        let state = MockState::new();
        assert!(state.advance("deploy_missing").await.is_none());
    }
}
