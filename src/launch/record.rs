//! Persisted result of a completed launch, read by the success view.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::wizard::StoreConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchRecord {
    #[serde(default)]
    pub store_url: Option<String>,
    pub deployment_id: String,
    /// Full wizard configuration, including the launch fields
    pub store_data: StoreConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launched_at: Option<DateTime<Utc>>,
}

impl LaunchRecord {
    pub fn new(store_url: Option<String>, deployment_id: String, store_data: StoreConfig) -> Self {
        Self {
            store_url,
            deployment_id,
            store_data,
            launched_at: Some(Utc::now()),
        }
    }

    /// Load the record at `path`, `None` when no launch has completed yet
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read launch record {}", path.display()))?;
        let record = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse launch record {}", path.display()))?;
        Ok(Some(record))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create state directory")?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write launch record {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn record() -> LaunchRecord {
        let mut config = StoreConfig::from_value(json!({
            "businessName": "Acme",
            "selectedTheme": "warm"
        }))
        .unwrap();
        config.mark_launched(Some("https://store_deploy_a.nextbasket.com"), "deploy_ab12cd34");
        LaunchRecord::new(
            Some("https://store_deploy_a.nextbasket.com".to_string()),
            "deploy_ab12cd34".to_string(),
            config,
        )
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("launch.json");

        let original = record();
        original.save(&path).unwrap();
        let loaded = LaunchRecord::load(&path).unwrap().unwrap();

        assert_eq!(loaded, original);
        assert_eq!(loaded.store_data.get_str("launchStatus"), Some("completed"));
    }

    #[test]
    fn test_load_missing_is_none() {
        let temp_dir = TempDir::new().unwrap();
        assert!(LaunchRecord::load(&temp_dir.path().join("launch.json"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_camel_case_on_disk() {
        let value = serde_json::to_value(record()).unwrap();
        assert!(value.get("storeUrl").is_some());
        assert!(value.get("deploymentId").is_some());
        assert_eq!(value["storeData"]["businessName"], "Acme");
    }

    #[test]
    fn test_load_corrupt_file_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("launch.json");
        fs::write(&path, "{").unwrap();
        assert!(LaunchRecord::load(&path).is_err());
    }
}
