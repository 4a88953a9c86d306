//! Read-only summary shown once a store is live.

use crate::catalog::{self, MARKETING_PROVIDERS, PAYMENT_PROVIDERS, SHIPPING_PROVIDERS, THEMES};
use crate::wizard::IntegrationGroup;

use super::LaunchRecord;

/// Follow-up suggestions as (title, detail)
pub const NEXT_STEPS: &[(&str, &str)] = &[
    (
        "Share Your Store",
        "Share your store URL with customers and promote it on social media platforms",
    ),
    (
        "Monitor Analytics",
        "Track visitor behavior, sales performance, and conversion rates",
    ),
    (
        "Optimize & Scale",
        "Add more products, optimize for better performance, and scale your business",
    ),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessSummary {
    pub business_name: Option<String>,
    pub industry: Option<String>,
    pub theme: Option<String>,
    pub product_count: usize,
    pub platform: String,
    /// Provider display names per group, in group order
    pub integrations: Vec<(IntegrationGroup, Vec<String>)>,
    pub store_url: String,
    pub deployment_id: String,
}

impl SuccessSummary {
    pub fn from_record(record: &LaunchRecord) -> Self {
        let data = &record.store_data;
        let integrations = data.integrations();

        let integrations = IntegrationGroup::all()
            .iter()
            .map(|group| {
                let options = match group {
                    IntegrationGroup::Payment => PAYMENT_PROVIDERS,
                    IntegrationGroup::Shipping => SHIPPING_PROVIDERS,
                    IntegrationGroup::Marketing => MARKETING_PROVIDERS,
                };
                let names = integrations
                    .group(*group)
                    .iter()
                    .map(|id| catalog::label_for(options, id))
                    .collect();
                (*group, names)
            })
            .collect();

        Self {
            business_name: data.business_name().map(str::to_string),
            industry: data
                .get_str(crate::wizard::store_config::KEY_INDUSTRY)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            theme: data
                .selected_theme()
                .map(|id| catalog::label_for(THEMES, id)),
            product_count: data.product_count(),
            platform: data.launch_settings().selected_platform,
            integrations,
            store_url: record
                .store_url
                .clone()
                .or_else(|| data.store_url().map(str::to_string))
                .unwrap_or_default(),
            deployment_id: record.deployment_id.clone(),
        }
    }

    pub fn share_title(&self) -> String {
        format!(
            "{} - Now Live!",
            self.business_name.as_deref().unwrap_or("My Store")
        )
    }

    pub fn share_text(&self) -> String {
        format!("Check out my new online store: {}", self.store_url)
    }

    /// Plain-text rendering for the `success` subcommand
    pub fn to_text(&self) -> String {
        let or_dash = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
        let mut out = String::new();

        out.push_str("Store Successfully Launched!\n\n");
        out.push_str(&format!("Store URL:     {}\n", self.store_url));
        out.push_str(&format!("Deployment ID: {}\n\n", self.deployment_id));

        out.push_str("Store Overview\n");
        out.push_str(&format!("  Business: {}\n", or_dash(&self.business_name)));
        out.push_str(&format!("  Industry: {}\n", or_dash(&self.industry)));
        out.push_str(&format!("  Theme:    {}\n", or_dash(&self.theme)));
        out.push_str(&format!("  Products: {}\n", self.product_count));
        out.push_str(&format!("  Platform: {}\n\n", self.platform));

        out.push_str("Active Integrations\n");
        for (group, names) in &self.integrations {
            let list = if names.is_empty() {
                "none".to_string()
            } else {
                names.join(", ")
            };
            out.push_str(&format!("  {}: {}\n", group.label(), list));
        }

        out.push_str("\nWhat's Next?\n");
        for (title, detail) in NEXT_STEPS {
            out.push_str(&format!("  - {}: {}\n", title, detail));
        }

        out.push_str(&format!("\n{}\n{}\n", self.share_title(), self.share_text()));
        out
    }
}
