//! Type definitions for the wizard screen

use crate::catalog::{
    self, CatalogOption, CONTENT_TYPES, MARKETING_PROVIDERS, PAYMENT_PROVIDERS, SEO_OPTIONS,
    SHIPPING_PROVIDERS, TONES,
};
use crate::wizard::{IntegrationGroup, LaunchSettings, StoreConfig};

/// Result of wizard screen actions, acted on by the app loop
#[derive(Debug, Clone, PartialEq)]
pub enum WizardResult {
    /// Stay on the wizard
    Continue,
    /// Generate products for these category ids
    Generate(Vec<String>),
    /// Validate this configuration remotely
    Validate(StoreConfig),
    /// Start a launch of this configuration
    Launch(StoreConfig),
}

/// Which list has focus on the design step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DesignSection {
    #[default]
    Theme,
    ColorScheme,
}

impl DesignSection {
    pub fn toggle(self) -> Self {
        match self {
            DesignSection::Theme => DesignSection::ColorScheme,
            DesignSection::ColorScheme => DesignSection::Theme,
        }
    }
}

/// Provider options of a group
pub fn providers_for(group: IntegrationGroup) -> &'static [CatalogOption] {
    match group {
        IntegrationGroup::Payment => PAYMENT_PROVIDERS,
        IntegrationGroup::Shipping => SHIPPING_PROVIDERS,
        IntegrationGroup::Marketing => MARKETING_PROVIDERS,
    }
}

/// Every provider row of the integrations step, grouped in order
pub fn integration_rows() -> Vec<(IntegrationGroup, CatalogOption)> {
    IntegrationGroup::all()
        .iter()
        .flat_map(|group| providers_for(*group).iter().map(move |option| (*group, *option)))
        .collect()
}

/// A row of the content step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentRow {
    ContentType(CatalogOption),
    Tone(CatalogOption),
    /// (config key, label)
    Seo(&'static str, &'static str),
}

pub fn content_rows() -> Vec<ContentRow> {
    CONTENT_TYPES
        .iter()
        .map(|o| ContentRow::ContentType(*o))
        .chain(TONES.iter().map(|o| ContentRow::Tone(*o)))
        .chain(SEO_OPTIONS.iter().map(|&(key, label)| ContentRow::Seo(key, label)))
        .collect()
}

/// A row of the launch step: a platform (by index) or a settings switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchRow {
    Platform(usize),
    /// (config key, label)
    Switch(&'static str, &'static str),
}

pub fn launch_rows(platform_count: usize) -> Vec<LaunchRow> {
    (0..platform_count)
        .map(LaunchRow::Platform)
        .chain(
            LaunchSettings::SWITCHES
                .iter()
                .map(|&(key, label)| LaunchRow::Switch(key, label)),
        )
        .collect()
}

/// Display name of a category id
pub fn category_name(id: &str) -> String {
    catalog::label_for(catalog::CATEGORIES, id)
}
