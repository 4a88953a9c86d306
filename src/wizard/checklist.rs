//! Launch readiness checklist.

use serde_json::Value;

use super::store_config::{
    StoreConfig, KEY_CONTENT_SETTINGS, KEY_INTEGRATIONS, KEY_PRODUCTS,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub id: &'static str,
    pub label: &'static str,
    pub completed: bool,
}

/// Readiness of a configuration for launch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checklist {
    pub items: Vec<ChecklistItem>,
}

impl Checklist {
    pub fn evaluate(config: &StoreConfig) -> Self {
        let item = |id, label, completed| ChecklistItem {
            id,
            label,
            completed,
        };

        let products = config
            .get(KEY_PRODUCTS)
            .and_then(Value::as_array)
            .is_some_and(|p| !p.is_empty());
        let integrations = config
            .get(KEY_INTEGRATIONS)
            .and_then(Value::as_object)
            .is_some_and(|i| !i.is_empty());
        let content = config
            .get(KEY_CONTENT_SETTINGS)
            .is_some_and(|c| !c.is_null());
        let seo = config
            .get(KEY_CONTENT_SETTINGS)
            .and_then(|c| c.get("optimizeSEO"))
            .and_then(Value::as_bool)
            .unwrap_or(false);

        Self {
            items: vec![
                item(
                    "business-setup",
                    "Business information configured",
                    config.business_name().is_some(),
                ),
                item("products", "Product catalog created", products),
                item(
                    "design",
                    "Store theme selected",
                    config.selected_theme().is_some(),
                ),
                item("integrations", "Payment & shipping configured", integrations),
                item("content", "Marketing content generated", content),
                item("seo", "SEO optimization completed", seo),
            ],
        }
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|i| i.completed).count()
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn percent(&self) -> u16 {
        if self.items.is_empty() {
            return 0;
        }
        (self.completed_count() * 100 / self.total()) as u16
    }

    pub fn is_complete(&self) -> bool {
        self.completed_count() == self.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn completed_ids(checklist: &Checklist) -> Vec<&'static str> {
        checklist
            .items
            .iter()
            .filter(|i| i.completed)
            .map(|i| i.id)
            .collect()
    }

    #[test]
    fn test_empty_config_has_nothing_completed() {
        let checklist = Checklist::evaluate(&StoreConfig::new());
        assert_eq!(checklist.total(), 6);
        assert_eq!(checklist.completed_count(), 0);
        assert_eq!(checklist.percent(), 0);
        assert!(!checklist.is_complete());
    }

    #[test]
    fn test_complete_config() {
        let config = StoreConfig::from_value(json!({
            "businessName": "Acme",
            "products": [{"id": "product-1"}],
            "selectedTheme": "modern",
            "integrations": {"payment": []},
            "contentSettings": {"optimizeSEO": true}
        }))
        .unwrap();
        let checklist = Checklist::evaluate(&config);
        assert!(checklist.is_complete());
        assert_eq!(checklist.percent(), 100);
    }

    #[test]
    fn test_empty_values_do_not_count() {
        let config = StoreConfig::from_value(json!({
            "businessName": "",
            "products": [],
            "selectedTheme": "",
            "integrations": {},
            "contentSettings": {"optimizeSEO": false}
        }))
        .unwrap();
        let checklist = Checklist::evaluate(&config);
        assert_eq!(completed_ids(&checklist), vec!["content"]);
        assert_eq!(checklist.percent(), 16);
    }

    #[test]
    fn test_integrations_with_any_key_counts() {
        let config =
            StoreConfig::from_value(json!({"integrations": {"marketing": ["mailchimp"]}})).unwrap();
        assert_eq!(completed_ids(&Checklist::evaluate(&config)), vec!["integrations"]);
    }
}
