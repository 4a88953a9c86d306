//! Tests for the wizard screen

use super::types::*;
use super::{WizardScreen, NO_CATEGORY_MESSAGE};
use crate::api::DataSource;
use crate::catalog::{self, fallback_platforms, generate_mock_products};
use crate::launch::{LaunchEvent, LaunchOutcome, LaunchRecord, LAUNCH_FAILED_MESSAGE};
use crate::types::{DeployPhase, DeploymentStatus, ValidationResult};
use crate::wizard::{StoreConfig, WizardStep};
use crossterm::event::KeyCode;

fn type_text(screen: &mut WizardScreen, text: &str) {
    for c in text.chars() {
        assert!(screen.handle_field_key(KeyCode::Char(c)));
    }
}

/// Walk a fresh screen through every step with valid input, ending on Launch
fn completed_screen() -> WizardScreen {
    let mut screen = WizardScreen::new(StoreConfig::new());
    type_text(&mut screen, "Acme Outfitters");
    screen.confirm();

    // Products: electronics
    screen.toggle_selection();
    let categories = vec!["electronics".to_string()];
    assert_eq!(screen.request_generation(), WizardResult::Generate(categories.clone()));
    screen.apply_products(
        &categories,
        &generate_mock_products(&categories),
        DataSource::Fallback,
    );
    screen.confirm();

    // Design: first theme
    screen.toggle_selection();
    screen.confirm();

    // Integrations: stripe
    screen.toggle_selection();
    screen.confirm();

    // Content: friendly tone
    for _ in 0..(catalog::CONTENT_TYPES.len() + 1) {
        screen.select_next();
    }
    screen.toggle_selection();
    screen.confirm();

    screen.set_platforms(fallback_platforms(), DataSource::Remote);
    screen
}

#[test]
fn test_new_screen_starts_on_business() {
    let screen = WizardScreen::new(StoreConfig::new());
    assert_eq!(screen.step(), WizardStep::Business);
    assert!(!screen.state.can_go_back());
    assert!(screen.platform_source.is_none());
    assert_eq!(screen.deployment.status, DeployPhase::Idle);
}

#[test]
fn test_esc_on_first_step_keeps_business_details() {
    let mut screen = WizardScreen::new(StoreConfig::new());
    type_text(&mut screen, "Acme");
    assert_eq!(screen.go_back(), WizardResult::Continue);
    assert_eq!(screen.step(), WizardStep::Business);
    assert_eq!(screen.config().business_name(), Some("Acme"));
}

#[test]
fn test_business_typing_writes_config_immediately() {
    let mut screen = WizardScreen::new(StoreConfig::new());
    type_text(&mut screen, "Acme");

    assert_eq!(screen.config().business_name(), Some("Acme"));
    // Defaults of the other fields are written with it
    assert_eq!(screen.config().get_str("businessType"), Some("b2c"));
    assert_eq!(screen.config().get_str("experienceLevel"), Some("beginner"));
    assert_eq!(screen.config().get_str("industry"), Some("Fashion & Apparel"));
}

#[test]
fn test_business_select_changes_with_arrows() {
    let mut screen = WizardScreen::new(StoreConfig::new());
    screen.select_next(); // industry
    assert!(!screen.is_editing_text());
    assert!(screen.handle_field_key(KeyCode::Right));
    assert_eq!(screen.config().get_str("industry"), Some("Electronics"));
}

#[test]
fn test_text_field_leaves_enter_to_navigation() {
    let mut screen = WizardScreen::new(StoreConfig::new());
    assert!(screen.is_editing_text());
    assert!(!screen.handle_field_key(KeyCode::Enter));
    assert!(!screen.handle_field_key(KeyCode::Esc));
}

#[test]
fn test_fields_persist_across_navigation() {
    let mut screen = WizardScreen::new(StoreConfig::new());
    type_text(&mut screen, "Acme");
    screen.confirm();
    assert_eq!(screen.step(), WizardStep::Products);

    screen.toggle_selection();
    screen.confirm();
    assert_eq!(screen.go_back(), WizardResult::Continue);
    assert_eq!(screen.go_back(), WizardResult::Continue);
    assert_eq!(screen.step(), WizardStep::Business);

    assert_eq!(screen.config().business_name(), Some("Acme"));
    assert_eq!(screen.config().selected_categories(), vec!["electronics"]);
}

#[test]
fn test_revisiting_business_shows_previous_values() {
    let mut config = StoreConfig::new();
    config.set("businessName", "Saved Shop");
    config.set("businessType", "b2b");

    let screen = WizardScreen::new(config);
    assert_eq!(
        screen.business.field("businessName").map(|f| f.value()),
        Some("Saved Shop".to_string())
    );
    assert_eq!(
        screen.business.field("businessType").map(|f| f.value()),
        Some("b2b".to_string())
    );
}

#[test]
fn test_generate_without_categories_alerts() {
    let mut screen = WizardScreen::new(StoreConfig::new());
    screen.confirm();

    assert!(!screen.can_generate());
    assert_eq!(screen.request_generation(), WizardResult::Continue);
    assert!(screen.alert.visible);
    assert_eq!(screen.alert.message, NO_CATEGORY_MESSAGE);
    assert!(!screen.generating);
}

#[test]
fn test_generate_disabled_while_generating() {
    let mut screen = WizardScreen::new(StoreConfig::new());
    screen.confirm();
    screen.toggle_selection();

    assert!(matches!(screen.request_generation(), WizardResult::Generate(_)));
    assert!(screen.generating);
    assert!(!screen.can_generate());
    assert_eq!(screen.request_generation(), WizardResult::Continue);
}

#[test]
fn test_generated_products_are_stored() {
    let mut screen = WizardScreen::new(StoreConfig::new());
    screen.confirm();
    screen.toggle_selection();
    screen.select_next();
    screen.toggle_selection();

    let categories = vec!["electronics".to_string(), "fashion".to_string()];
    assert_eq!(screen.request_generation(), WizardResult::Generate(categories.clone()));
    screen.apply_products(
        &categories,
        &generate_mock_products(&categories),
        DataSource::Fallback,
    );

    assert!(!screen.generating);
    assert_eq!(screen.product_source, Some(DataSource::Fallback));
    assert_eq!(screen.config().product_count(), 6);
}

#[test]
fn test_category_toggle_removes() {
    let mut screen = WizardScreen::new(StoreConfig::new());
    screen.confirm();
    screen.toggle_selection();
    screen.toggle_selection();
    assert!(screen.config().selected_categories().is_empty());
}

#[test]
fn test_design_selects_theme_and_color() {
    let mut screen = WizardScreen::new(StoreConfig::new());
    screen.state.current_step = WizardStep::Design;

    screen.select_next();
    screen.toggle_selection();
    assert_eq!(screen.config().selected_theme(), Some(catalog::THEMES[1].id));

    screen.switch_section();
    screen.select_prev();
    screen.toggle_selection();
    assert_eq!(screen.config().color_scheme(), "orange");
}

#[test]
fn test_leaving_design_writes_default_color() {
    let mut screen = WizardScreen::new(StoreConfig::new());
    screen.state.current_step = WizardStep::Design;
    screen.confirm();
    assert_eq!(screen.config().get_str("colorScheme"), Some("blue"));
    assert!(screen.config().selected_theme().is_none());
}

#[test]
fn test_integration_toggle_writes_whole_object() {
    let mut screen = WizardScreen::new(StoreConfig::new());
    screen.state.current_step = WizardStep::Integrations;

    screen.toggle_selection();
    let value = screen.config().get("integrations").cloned().unwrap();
    assert_eq!(value["payment"], serde_json::json!(["stripe"]));
    assert_eq!(value["shipping"], serde_json::json!([]));
    assert_eq!(value["marketing"], serde_json::json!([]));

    screen.toggle_selection();
    assert!(screen.config().integrations().payment.is_empty());
}

#[test]
fn test_content_rows_update_settings() {
    let mut screen = WizardScreen::new(StoreConfig::new());
    screen.state.current_step = WizardStep::Content;

    // First content type switches off
    screen.toggle_selection();
    assert!(!screen
        .config()
        .content_settings()
        .content_type_enabled("product-descriptions"));

    // Move to the "friendly" tone
    for _ in 0..(catalog::CONTENT_TYPES.len() + 1) {
        screen.select_next();
    }
    screen.toggle_selection();
    assert_eq!(screen.config().content_settings().tone, "friendly");
}

#[test]
fn test_skipping_integrations_and_content_leaves_items_open() {
    let mut screen = WizardScreen::new(StoreConfig::new());
    screen.state.current_step = WizardStep::Integrations;
    screen.confirm();
    assert_eq!(screen.step(), WizardStep::Content);
    screen.confirm();
    assert_eq!(screen.step(), WizardStep::Launch);

    assert!(screen.config().get("integrations").is_none());
    assert!(screen.config().get("contentSettings").is_none());
    let checklist = screen.state.checklist();
    let open: Vec<&str> = checklist
        .items
        .iter()
        .filter(|item| !item.completed)
        .map(|item| item.id)
        .collect();
    assert!(open.contains(&"integrations"), "{:?}", open);
    assert!(open.contains(&"content"), "{:?}", open);
    assert!(open.contains(&"seo"), "{:?}", open);
}

#[test]
fn test_launch_step_platform_and_switches() {
    let mut screen = completed_screen();
    assert_eq!(screen.step(), WizardStep::Launch);

    screen.select_next(); // shopify
    screen.toggle_selection();
    assert_eq!(screen.config().launch_settings().selected_platform, "shopify");

    screen.select_next();
    screen.select_next(); // autoLaunch
    screen.toggle_selection();
    assert!(!screen.config().launch_settings().auto_launch);
}

#[test]
fn test_checklist_completes_after_walkthrough() {
    let screen = completed_screen();
    let checklist = screen.state.checklist();
    assert!(checklist.is_complete(), "{:?}", checklist.items);
    assert!(screen.can_launch());
}

#[test]
fn test_launch_blocked_with_incomplete_checklist() {
    let mut screen = WizardScreen::new(StoreConfig::new());
    screen.state.current_step = WizardStep::Launch;
    assert!(!screen.can_launch());
    assert_eq!(screen.launch(), WizardResult::Continue);
    assert!(!screen.launching);
}

#[test]
fn test_enter_on_last_step_launches() {
    let mut screen = completed_screen();
    match screen.confirm() {
        WizardResult::Launch(config) => {
            assert_eq!(config.business_name(), Some("Acme Outfitters"));
            assert!(config.get("launchSettings").is_some());
        }
        other => panic!("expected launch, got {:?}", other),
    }
    assert!(screen.launching);
    assert!(!screen.can_launch());
    assert_eq!(screen.launch(), WizardResult::Continue);
}

#[test]
fn test_validation_request_and_result() {
    let mut screen = completed_screen();
    assert!(matches!(screen.request_validation(), WizardResult::Validate(_)));
    assert!(screen.validating);
    assert_eq!(screen.request_validation(), WizardResult::Continue);

    screen.apply_validation(ValidationResult {
        valid: true,
        warnings: vec!["No shipping providers configured".to_string()],
        ..Default::default()
    });
    assert!(!screen.validating);
    assert!(screen.validation.as_ref().is_some_and(|v| v.valid));
}

#[test]
fn test_status_events_overwrite_record() {
    let mut screen = completed_screen();
    screen.launch();

    let mut status = DeploymentStatus::deploying("deploy_1");
    status.progress = 20;
    screen.apply_launch_event(LaunchEvent::Status(status));
    let mut status = DeploymentStatus::deploying("deploy_1");
    status.status = DeployPhase::Testing;
    status.progress = 60;
    screen.apply_launch_event(LaunchEvent::Status(status));

    assert_eq!(screen.deployment.status, DeployPhase::Testing);
    assert_eq!(screen.deployment.progress, 60);
    assert!(screen.launching);
}

#[test]
fn test_completed_launch_keeps_record() {
    let mut screen = completed_screen();
    let WizardResult::Launch(config) = screen.launch() else {
        panic!("launch not started");
    };

    let mut store_data = config;
    store_data.mark_launched(Some("https://store_deploy_1.nextbasket.com"), "deploy_1");
    let record = LaunchRecord::new(
        Some("https://store_deploy_1.nextbasket.com".to_string()),
        "deploy_1".to_string(),
        store_data,
    );
    screen.apply_launch_event(LaunchEvent::Finished(LaunchOutcome::Completed(record)));

    assert!(!screen.launching);
    assert!(!screen.alert.visible);
    assert!(screen.launch_record.is_some());
    assert_eq!(screen.config().get_str("launchStatus"), Some("completed"));
    assert!(!screen.can_launch());
}

#[test]
fn test_failed_launch_alerts_and_allows_retry() {
    let mut screen = completed_screen();
    screen.launch();

    let status = DeploymentStatus::failed("", LAUNCH_FAILED_MESSAGE);
    screen.apply_launch_event(LaunchEvent::Finished(LaunchOutcome::Failed(status)));

    assert!(screen.alert.visible);
    assert_eq!(screen.alert.message, LAUNCH_FAILED_MESSAGE);
    assert_eq!(screen.deployment.status, DeployPhase::Failed);
    assert!(screen.can_launch());
}

#[test]
fn test_rejected_launch_shows_errors() {
    let mut screen = completed_screen();
    screen.launch();

    let result = ValidationResult {
        valid: false,
        errors: vec!["Minimum 3 products required for launch".to_string()],
        ..Default::default()
    };
    screen.apply_launch_event(LaunchEvent::Finished(LaunchOutcome::Rejected(result)));

    assert!(screen.alert.visible);
    assert_eq!(screen.deployment.status, DeployPhase::Idle);
    assert_eq!(screen.validation.as_ref().map(|v| v.errors.len()), Some(1));
}
