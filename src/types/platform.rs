//! E-commerce platforms a store can be deployed to.

use serde::{Deserialize, Serialize};

/// A deployment target offered on the launch step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub setup_time: String,
    #[serde(default)]
    pub monthly_cost: String,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Platform {
    /// First two features plus a "+N more" marker, as shown in the platform list
    pub fn feature_preview(&self) -> String {
        let mut preview = self
            .features
            .iter()
            .take(2)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        if self.features.len() > 2 {
            preview.push_str(&format!(" +{} more", self.features.len() - 2));
        }
        preview
    }
}

/// Response body of the platform listing endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformList {
    #[serde(default)]
    pub platforms: Vec<Platform>,
}
