//! The accumulated wizard configuration.
//!
//! Stored as an open JSON object so keys written by one step, by the launch
//! flow, or by a saved file this client does not know about all survive a
//! save/load round trip. Typed views below read a step's fields with its
//! defaults and write them back as a merge.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::GeneratedProduct;

pub const KEY_BUSINESS_NAME: &str = "businessName";
pub const KEY_INDUSTRY: &str = "industry";
pub const KEY_SELECTED_CATEGORIES: &str = "selectedCategories";
pub const KEY_PRODUCTS: &str = "products";
pub const KEY_SELECTED_THEME: &str = "selectedTheme";
pub const KEY_COLOR_SCHEME: &str = "colorScheme";
pub const KEY_INTEGRATIONS: &str = "integrations";
pub const KEY_CONTENT_SETTINGS: &str = "contentSettings";
pub const KEY_LAUNCH_SETTINGS: &str = "launchSettings";
pub const KEY_STORE_URL: &str = "storeUrl";
pub const KEY_DEPLOYMENT_ID: &str = "deploymentId";
pub const KEY_LAUNCH_STATUS: &str = "launchStatus";
pub const KEY_SESSION_ID: &str = "sessionId";

/// Open key-value configuration built up across the wizard steps
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreConfig(Map<String, Value>);

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON value, which must be an object
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Write a single field; last write wins
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Shallow-merge an object into the configuration
    pub fn merge(&mut self, fields: Map<String, Value>) {
        for (key, value) in fields {
            self.0.insert(key, value);
        }
    }

    /// Merge a serializable form. Non-object forms are ignored.
    pub fn merge_form<T: Serialize>(&mut self, form: &T) {
        match serde_json::to_value(form) {
            Ok(Value::Object(fields)) => self.merge(fields),
            Ok(_) => {}
            Err(e) => tracing::warn!("Failed to serialize form: {}", e),
        }
    }

    /// Store a form under a single key
    pub fn set_form<T: Serialize>(&mut self, key: &str, form: &T) {
        match serde_json::to_value(form) {
            Ok(value) => self.set(key, value),
            Err(e) => tracing::warn!(key, "Failed to serialize form: {}", e),
        }
    }

    /// Read a nested object, falling back to defaults when missing or malformed
    fn read_nested<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.0.get(key) {
            Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|e| {
                tracing::warn!(key, "Ignoring malformed config section: {}", e);
                T::default()
            }),
            None => T::default(),
        }
    }

    /// Session id forwarded to the backend, `"default"` when unset
    pub fn session_id(&self) -> String {
        self.get_str(KEY_SESSION_ID)
            .filter(|s| !s.is_empty())
            .unwrap_or("default")
            .to_string()
    }

    pub fn business_name(&self) -> Option<&str> {
        self.get_str(KEY_BUSINESS_NAME).filter(|s| !s.is_empty())
    }

    pub fn business(&self) -> BusinessDetails {
        let text = |key: &str, default: &str| {
            self.get_str(key)
                .filter(|s| !s.is_empty())
                .unwrap_or(default)
                .to_string()
        };
        BusinessDetails {
            business_name: text(KEY_BUSINESS_NAME, ""),
            industry: text(KEY_INDUSTRY, ""),
            business_type: text("businessType", "b2c"),
            target_market: text("targetMarket", ""),
            experience_level: text("experienceLevel", "beginner"),
        }
    }

    pub fn selected_categories(&self) -> Vec<String> {
        self.read_nested(KEY_SELECTED_CATEGORIES)
    }

    pub fn products(&self) -> Vec<GeneratedProduct> {
        self.read_nested(KEY_PRODUCTS)
    }

    /// Number of products, counting entries this client cannot parse
    pub fn product_count(&self) -> usize {
        self.get(KEY_PRODUCTS)
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    pub fn set_products(&mut self, categories: &[String], products: &[GeneratedProduct]) {
        self.set_form(KEY_SELECTED_CATEGORIES, &categories);
        self.set_form(KEY_PRODUCTS, &products);
    }

    pub fn selected_theme(&self) -> Option<&str> {
        self.get_str(KEY_SELECTED_THEME).filter(|s| !s.is_empty())
    }

    pub fn color_scheme(&self) -> &str {
        self.get_str(KEY_COLOR_SCHEME)
            .filter(|s| !s.is_empty())
            .unwrap_or("blue")
    }

    pub fn integrations(&self) -> Integrations {
        self.read_nested(KEY_INTEGRATIONS)
    }

    pub fn content_settings(&self) -> ContentSettings {
        self.read_nested(KEY_CONTENT_SETTINGS)
    }

    pub fn launch_settings(&self) -> LaunchSettings {
        self.read_nested(KEY_LAUNCH_SETTINGS)
    }

    pub fn store_url(&self) -> Option<&str> {
        self.get_str(KEY_STORE_URL)
    }

    /// Record a completed launch
    pub fn mark_launched(&mut self, store_url: Option<&str>, deployment_id: &str) {
        self.set(
            KEY_STORE_URL,
            store_url.map_or(Value::Null, |url| Value::String(url.to_string())),
        );
        self.set(KEY_DEPLOYMENT_ID, deployment_id);
        self.set(KEY_LAUNCH_STATUS, "completed");
    }
}

impl From<Map<String, Value>> for StoreConfig {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Business step form, stored as top-level keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDetails {
    pub business_name: String,
    pub industry: String,
    /// `b2c` or `b2b`
    pub business_type: String,
    pub target_market: String,
    pub experience_level: String,
}

impl Default for BusinessDetails {
    fn default() -> Self {
        Self {
            business_name: String::new(),
            industry: String::new(),
            business_type: "b2c".to_string(),
            target_market: String::new(),
            experience_level: "beginner".to_string(),
        }
    }
}

/// Provider group of the integrations step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationGroup {
    Payment,
    Shipping,
    Marketing,
}

impl IntegrationGroup {
    pub fn all() -> &'static [IntegrationGroup] {
        &[
            IntegrationGroup::Payment,
            IntegrationGroup::Shipping,
            IntegrationGroup::Marketing,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            IntegrationGroup::Payment => "Payment Providers",
            IntegrationGroup::Shipping => "Shipping Providers",
            IntegrationGroup::Marketing => "Marketing Tools",
        }
    }
}

/// Selected providers, written as a whole under `integrations`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Integrations {
    #[serde(default)]
    pub payment: Vec<String>,
    #[serde(default)]
    pub shipping: Vec<String>,
    #[serde(default)]
    pub marketing: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Integrations {
    pub fn group(&self, group: IntegrationGroup) -> &[String] {
        match group {
            IntegrationGroup::Payment => &self.payment,
            IntegrationGroup::Shipping => &self.shipping,
            IntegrationGroup::Marketing => &self.marketing,
        }
    }

    fn group_mut(&mut self, group: IntegrationGroup) -> &mut Vec<String> {
        match group {
            IntegrationGroup::Payment => &mut self.payment,
            IntegrationGroup::Shipping => &mut self.shipping,
            IntegrationGroup::Marketing => &mut self.marketing,
        }
    }

    pub fn is_selected(&self, group: IntegrationGroup, provider_id: &str) -> bool {
        self.group(group).iter().any(|p| p == provider_id)
    }

    /// Add the provider if absent, remove it if present
    pub fn toggle(&mut self, group: IntegrationGroup, provider_id: &str) {
        let providers = self.group_mut(group);
        if let Some(pos) = providers.iter().position(|p| p == provider_id) {
            providers.remove(pos);
        } else {
            providers.push(provider_id.to_string());
        }
    }
}

/// Content step form, stored under `contentSettings`.
///
/// Content type toggles are keyed by content type id and live in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSettings {
    #[serde(default = "default_true")]
    pub generate_descriptions: bool,
    #[serde(default = "default_true")]
    pub generate_marketing_copy: bool,
    #[serde(rename = "optimizeSEO", default = "default_true")]
    pub optimize_seo: bool,
    #[serde(default)]
    pub keyword_research: bool,
    #[serde(default)]
    pub generate_meta_tags: bool,
    #[serde(default = "default_tone")]
    pub tone: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_true() -> bool {
    true
}

fn default_tone() -> String {
    "professional".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            generate_descriptions: true,
            generate_marketing_copy: true,
            optimize_seo: true,
            keyword_research: false,
            generate_meta_tags: false,
            tone: default_tone(),
            language: default_language(),
            extra: Map::new(),
        }
    }
}

impl ContentSettings {
    /// Content types are enabled unless explicitly switched off
    pub fn content_type_enabled(&self, content_type: &str) -> bool {
        self.extra.get(content_type) != Some(&Value::Bool(false))
    }

    pub fn toggle_content_type(&mut self, content_type: &str) {
        let enabled = self.content_type_enabled(content_type);
        self.extra
            .insert(content_type.to_string(), Value::Bool(!enabled));
    }

    /// Read an SEO switch by its config key
    pub fn seo_option(&self, key: &str) -> bool {
        match key {
            "optimizeSEO" => self.optimize_seo,
            "keywordResearch" => self.keyword_research,
            "generateMetaTags" => self.generate_meta_tags,
            _ => false,
        }
    }

    pub fn toggle_seo_option(&mut self, key: &str) {
        match key {
            "optimizeSEO" => self.optimize_seo = !self.optimize_seo,
            "keywordResearch" => self.keyword_research = !self.keyword_research,
            "generateMetaTags" => self.generate_meta_tags = !self.generate_meta_tags,
            _ => {}
        }
    }
}

/// Launch step form, stored under `launchSettings`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchSettings {
    #[serde(default = "default_true")]
    pub auto_launch: bool,
    #[serde(default = "default_true")]
    pub send_notifications: bool,
    #[serde(default = "default_true")]
    pub create_backup: bool,
    #[serde(default = "default_platform")]
    pub selected_platform: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_platform() -> String {
    "nextbasket".to_string()
}

impl Default for LaunchSettings {
    fn default() -> Self {
        Self {
            auto_launch: true,
            send_notifications: true,
            create_backup: true,
            selected_platform: default_platform(),
            extra: Map::new(),
        }
    }
}

impl LaunchSettings {
    /// Switches shown on the launch step as (config key, label)
    pub const SWITCHES: &'static [(&'static str, &'static str)] = &[
        ("autoLaunch", "Auto-launch when ready"),
        ("sendNotifications", "Send launch notifications"),
        ("createBackup", "Create backup before launch"),
    ];

    pub fn switch(&self, key: &str) -> bool {
        match key {
            "autoLaunch" => self.auto_launch,
            "sendNotifications" => self.send_notifications,
            "createBackup" => self.create_backup,
            _ => false,
        }
    }

    pub fn toggle_switch(&mut self, key: &str) {
        match key {
            "autoLaunch" => self.auto_launch = !self.auto_launch,
            "sendNotifications" => self.send_notifications = !self.send_notifications,
            "createBackup" => self.create_backup = !self.create_backup,
            _ => {}
        }
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| Value::Object(Map::new()))
    }
}
