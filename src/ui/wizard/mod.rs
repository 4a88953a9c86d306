//! Six-step store launch wizard screen

use crossterm::event::KeyCode;
use ratatui::{widgets::ListState, Frame};

use crate::api::DataSource;
use crate::catalog::{self, BUSINESS_TYPES, CATEGORIES, COLOR_SCHEMES, EXPERIENCE_LEVELS, THEMES};
use crate::launch::{LaunchEvent, LaunchOutcome, LaunchRecord};
use crate::types::{DeployPhase, DeploymentStatus, GeneratedProduct, Platform, ValidationResult};
use crate::ui::dialogs::AlertDialog;
use crate::ui::form_field::{Form, FormEntry, FormField};
use crate::wizard::store_config::{
    KEY_COLOR_SCHEME, KEY_CONTENT_SETTINGS, KEY_INTEGRATIONS, KEY_LAUNCH_SETTINGS,
    KEY_SELECTED_CATEGORIES, KEY_SELECTED_THEME,
};
use crate::wizard::{StoreConfig, WizardState, WizardStep};

pub mod steps;
pub mod types;

pub use types::*;

#[cfg(test)]
mod tests;

pub const NO_CATEGORY_MESSAGE: &str = "Please select at least one category";

/// Wizard screen: shared configuration plus per-step cursor state
pub struct WizardScreen {
    pub state: WizardState,
    /// Business step form, written to the config on every change
    pub(crate) business: Form,
    pub(crate) category_state: ListState,
    /// Generation request in flight
    pub generating: bool,
    /// Where the current product list came from
    pub product_source: Option<DataSource>,
    pub(crate) design_section: DesignSection,
    pub(crate) theme_state: ListState,
    pub(crate) color_state: ListState,
    pub(crate) integration_state: ListState,
    pub(crate) content_state: ListState,
    pub(crate) launch_state: ListState,
    pub platforms: Vec<Platform>,
    /// `None` until the platform list has been loaded
    pub platform_source: Option<DataSource>,
    pub validation: Option<ValidationResult>,
    pub validating: bool,
    /// Latest deployment status, overwritten by every poll
    pub deployment: DeploymentStatus,
    pub launching: bool,
    pub alert: AlertDialog,
    /// Set once the store is live
    pub launch_record: Option<LaunchRecord>,
}

fn first_selected() -> ListState {
    let mut state = ListState::default();
    state.select(Some(0));
    state
}

fn business_form(config: &StoreConfig) -> Form {
    let business = config.business();
    Form::new(vec![
        FormEntry {
            key: "businessName",
            label: "Business Name",
            field: FormField::text(&business.business_name, "Enter your business name"),
        },
        FormEntry {
            key: "industry",
            label: "Industry",
            field: FormField::select_labels(catalog::INDUSTRIES, &business.industry),
        },
        FormEntry {
            key: "businessType",
            label: "Business Type",
            field: FormField::select(BUSINESS_TYPES, &business.business_type),
        },
        FormEntry {
            key: "experienceLevel",
            label: "E-commerce Experience",
            field: FormField::select(EXPERIENCE_LEVELS, &business.experience_level),
        },
        FormEntry {
            key: "targetMarket",
            label: "Target Market",
            field: FormField::text_area(
                &business.target_market,
                "Describe your target customers...",
            ),
        },
    ])
}

/// Wrap-around list movement
fn step_list(state: &mut ListState, len: usize, forward: bool) {
    if len == 0 {
        return;
    }
    let i = if forward {
        state.selected().map_or(0, |i| (i + 1) % len)
    } else {
        state
            .selected()
            .map_or(0, |i| if i == 0 { len - 1 } else { i - 1 })
    };
    state.select(Some(i));
}

impl WizardScreen {
    pub fn new(config: StoreConfig) -> Self {
        let business = business_form(&config);
        Self {
            state: WizardState::with_config(config),
            business,
            category_state: first_selected(),
            generating: false,
            product_source: None,
            design_section: DesignSection::Theme,
            theme_state: first_selected(),
            color_state: first_selected(),
            integration_state: first_selected(),
            content_state: first_selected(),
            launch_state: first_selected(),
            platforms: Vec::new(),
            platform_source: None,
            validation: None,
            validating: false,
            deployment: DeploymentStatus::default(),
            launching: false,
            alert: AlertDialog::new(),
            launch_record: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.state.current_step
    }

    pub fn config(&self) -> &StoreConfig {
        &self.state.config
    }

    fn config_mut(&mut self) -> &mut StoreConfig {
        &mut self.state.config
    }

    fn commit_business(&mut self) {
        let values = self.business.values();
        self.state.config.merge(values);
    }

    /// Write the current step's form with its defaults into the config.
    ///
    /// Integrations and content are only written by a toggle, so an
    /// untouched step leaves its checklist items open.
    fn commit_step(&mut self) {
        match self.step() {
            WizardStep::Business => self.commit_business(),
            WizardStep::Products | WizardStep::Integrations | WizardStep::Content => {}
            WizardStep::Design => {
                let scheme = self.config().color_scheme().to_string();
                self.config_mut().set(KEY_COLOR_SCHEME, scheme);
            }
            WizardStep::Launch => {
                let settings = self.config().launch_settings();
                self.config_mut().set_form(KEY_LAUNCH_SETTINGS, &settings);
            }
        }
    }

    /// Next step, or launch on the last step (Enter key)
    pub fn confirm(&mut self) -> WizardResult {
        self.commit_step();
        if self.state.is_last_step() {
            return self.launch();
        }
        self.state.next();
        WizardResult::Continue
    }

    /// Previous step (Esc key). Does nothing on the first step.
    pub fn go_back(&mut self) -> WizardResult {
        if !self.state.can_go_back() {
            return WizardResult::Continue;
        }
        self.commit_step();
        self.state.previous();
        WizardResult::Continue
    }

    /// Whether typed characters go into a text field
    pub fn is_editing_text(&self) -> bool {
        self.step() == WizardStep::Business
            && matches!(
                self.business.entries.get(self.business.focused_index),
                Some(FormEntry {
                    field: FormField::TextInput { .. } | FormField::TextArea { .. },
                    ..
                })
            )
    }

    /// Give a key to the focused business field. Returns true if consumed.
    pub fn handle_field_key(&mut self, key: KeyCode) -> bool {
        if self.step() != WizardStep::Business {
            return false;
        }
        let consumed = self
            .business
            .focused_field_mut()
            .is_some_and(|field| field.handle_key(key));
        if consumed {
            self.commit_business();
        }
        consumed
    }

    /// Move to next item in list
    pub fn select_next(&mut self) {
        self.move_selection(true);
    }

    /// Move to previous item in list
    pub fn select_prev(&mut self) {
        self.move_selection(false);
    }

    fn move_selection(&mut self, forward: bool) {
        match self.step() {
            WizardStep::Business => {
                if forward {
                    self.business.next_field();
                } else {
                    self.business.prev_field();
                }
            }
            WizardStep::Products => step_list(&mut self.category_state, CATEGORIES.len(), forward),
            WizardStep::Design => match self.design_section {
                DesignSection::Theme => step_list(&mut self.theme_state, THEMES.len(), forward),
                DesignSection::ColorScheme => {
                    step_list(&mut self.color_state, COLOR_SCHEMES.len(), forward);
                }
            },
            WizardStep::Integrations => {
                step_list(&mut self.integration_state, integration_rows().len(), forward);
            }
            WizardStep::Content => {
                step_list(&mut self.content_state, content_rows().len(), forward);
            }
            WizardStep::Launch => {
                let len = launch_rows(self.platforms.len()).len();
                step_list(&mut self.launch_state, len, forward);
            }
        }
    }

    /// Switch between the theme and color lists (Tab key)
    pub fn switch_section(&mut self) {
        match self.step() {
            WizardStep::Design => self.design_section = self.design_section.toggle(),
            WizardStep::Business => self.business.next_field(),
            _ => {}
        }
    }

    /// Toggle or pick the highlighted item (Space key)
    pub fn toggle_selection(&mut self) {
        match self.step() {
            WizardStep::Business => {}
            WizardStep::Products => {
                if let Some(option) = self.category_state.selected().and_then(|i| CATEGORIES.get(i)) {
                    let mut categories = self.config().selected_categories();
                    if let Some(pos) = categories.iter().position(|c| c == option.id) {
                        categories.remove(pos);
                    } else {
                        categories.push(option.id.to_string());
                    }
                    self.config_mut().set_form(KEY_SELECTED_CATEGORIES, &categories);
                }
            }
            WizardStep::Design => match self.design_section {
                DesignSection::Theme => {
                    if let Some(theme) = self.theme_state.selected().and_then(|i| THEMES.get(i)) {
                        self.config_mut().set(KEY_SELECTED_THEME, theme.id);
                    }
                }
                DesignSection::ColorScheme => {
                    if let Some(scheme) =
                        self.color_state.selected().and_then(|i| COLOR_SCHEMES.get(i))
                    {
                        self.config_mut().set(KEY_COLOR_SCHEME, scheme.id);
                    }
                }
            },
            WizardStep::Integrations => {
                let rows = integration_rows();
                if let Some((group, option)) =
                    self.integration_state.selected().and_then(|i| rows.get(i))
                {
                    let mut integrations = self.config().integrations();
                    integrations.toggle(*group, option.id);
                    self.config_mut().set_form(KEY_INTEGRATIONS, &integrations);
                }
            }
            WizardStep::Content => {
                let rows = content_rows();
                if let Some(row) = self.content_state.selected().and_then(|i| rows.get(i)) {
                    let mut settings = self.config().content_settings();
                    match row {
                        ContentRow::ContentType(option) => settings.toggle_content_type(option.id),
                        ContentRow::Tone(option) => settings.tone = option.id.to_string(),
                        ContentRow::Seo(key, _) => settings.toggle_seo_option(key),
                    }
                    self.config_mut().set_form(KEY_CONTENT_SETTINGS, &settings);
                }
            }
            WizardStep::Launch => {
                let rows = launch_rows(self.platforms.len());
                if let Some(row) = self.launch_state.selected().and_then(|i| rows.get(i)) {
                    let mut settings = self.config().launch_settings();
                    match row {
                        LaunchRow::Platform(index) => {
                            if let Some(platform) = self.platforms.get(*index) {
                                settings.selected_platform = platform.id.clone();
                            }
                        }
                        LaunchRow::Switch(key, _) => settings.toggle_switch(key),
                    }
                    self.config_mut().set_form(KEY_LAUNCH_SETTINGS, &settings);
                }
            }
        }
    }

    /// Generate is available with at least one category and nothing in flight
    pub fn can_generate(&self) -> bool {
        !self.generating && !self.config().selected_categories().is_empty()
    }

    /// Ask for product generation (g key on the products step)
    pub fn request_generation(&mut self) -> WizardResult {
        if self.step() != WizardStep::Products || self.generating {
            return WizardResult::Continue;
        }
        let categories = self.config().selected_categories();
        if categories.is_empty() {
            self.alert.show(NO_CATEGORY_MESSAGE);
            return WizardResult::Continue;
        }
        self.generating = true;
        WizardResult::Generate(categories)
    }

    /// Store generated products together with the categories they came from
    pub fn apply_products(
        &mut self,
        categories: &[String],
        products: &[GeneratedProduct],
        source: DataSource,
    ) {
        self.generating = false;
        self.product_source = Some(source);
        self.config_mut().set_products(categories, products);
    }

    pub fn set_platforms(&mut self, platforms: Vec<Platform>, source: DataSource) {
        self.platforms = platforms;
        self.platform_source = Some(source);
    }

    /// Ask for remote validation (v key on the launch step)
    pub fn request_validation(&mut self) -> WizardResult {
        if self.step() != WizardStep::Launch || self.validating || self.launching {
            return WizardResult::Continue;
        }
        self.commit_step();
        self.validating = true;
        WizardResult::Validate(self.config().clone())
    }

    pub fn apply_validation(&mut self, result: ValidationResult) {
        self.validating = false;
        self.validation = Some(result);
    }

    /// Launch is offered with a complete checklist and no launch underway.
    /// A failed launch may be retried.
    pub fn can_launch(&self) -> bool {
        !self.launching
            && self.launch_record.is_none()
            && matches!(self.deployment.status, DeployPhase::Idle | DeployPhase::Failed)
            && self.state.checklist().is_complete()
    }

    /// Start a launch (l key, or Enter on the last step)
    pub fn launch(&mut self) -> WizardResult {
        if self.step() != WizardStep::Launch || !self.can_launch() {
            return WizardResult::Continue;
        }
        self.commit_step();
        self.launching = true;
        self.deployment = DeploymentStatus::default();
        WizardResult::Launch(self.config().clone())
    }

    /// Fold progress from a running launch into the screen
    pub fn apply_launch_event(&mut self, event: LaunchEvent) {
        match event {
            LaunchEvent::Validated(result) => self.validation = Some(result),
            LaunchEvent::Status(status) => self.deployment = status,
            LaunchEvent::Finished(outcome) => {
                self.launching = false;
                if let Some(message) = outcome.alert() {
                    self.alert.show(message);
                }
                match outcome {
                    LaunchOutcome::Completed(record) => {
                        self.state.config = record.store_data.clone();
                        self.launch_record = Some(record);
                    }
                    LaunchOutcome::Failed(status) => self.deployment = status,
                    LaunchOutcome::Rejected(result) => {
                        self.validation = Some(result);
                        self.deployment = DeploymentStatus::default();
                    }
                    LaunchOutcome::Cancelled => {}
                }
            }
        }
    }

    /// Render the wizard screen
    pub fn render(&mut self, frame: &mut Frame) {
        let (body, footer) = self.render_chrome(frame);

        match self.step() {
            WizardStep::Business => self.render_business_step(frame, body),
            WizardStep::Products => self.render_products_step(frame, body),
            WizardStep::Design => self.render_design_step(frame, body),
            WizardStep::Integrations => self.render_integrations_step(frame, body),
            WizardStep::Content => self.render_content_step(frame, body),
            WizardStep::Launch => self.render_launch_step(frame, body),
        }

        self.render_footer(frame, footer);
        self.alert.render(frame);
    }
}
