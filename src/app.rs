use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::{self, DataSource, LaunchApi};
use crate::config::Config;
use crate::launch::{LaunchEvent, LaunchFlow, LaunchOutcome, SuccessSummary};
use crate::types::{GeneratedProduct, Platform, ValidationResult};
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::{SuccessView, WizardResult, WizardScreen};
use crate::wizard::{StoreConfig, WizardStep};

/// Results of background backend calls, drained by the event loop
#[derive(Debug)]
enum AppEvent {
    Platforms(Vec<Platform>, DataSource),
    Products {
        categories: Vec<String>,
        products: Vec<GeneratedProduct>,
        source: DataSource,
    },
    Validated(ValidationResult),
}

/// A launch running in the background
struct LaunchTask {
    shutdown_tx: mpsc::Sender<()>,
    handle: JoinHandle<()>,
}

impl LaunchTask {
    fn stop(self) {
        let _ = self.shutdown_tx.try_send(());
        self.handle.abort();
    }
}

pub struct App {
    config: Config,
    api: Arc<dyn LaunchApi>,
    flow: LaunchFlow,
    screen: WizardScreen,
    success_view: SuccessView,
    should_quit: bool,
    events_tx: mpsc::UnboundedSender<AppEvent>,
    events_rx: mpsc::UnboundedReceiver<AppEvent>,
    launch_tx: mpsc::UnboundedSender<LaunchEvent>,
    launch_rx: mpsc::UnboundedReceiver<LaunchEvent>,
    launch_task: Option<LaunchTask>,
}

impl App {
    pub fn new(config: Config, api: Arc<dyn LaunchApi>) -> Self {
        let flow = LaunchFlow::new(api.clone(), &config);
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (launch_tx, launch_rx) = mpsc::unbounded_channel();

        Self {
            config,
            api,
            flow,
            screen: WizardScreen::new(StoreConfig::new()),
            success_view: SuccessView::new(),
            should_quit: false,
            events_tx,
            events_rx,
            launch_tx,
            launch_rx,
            launch_task: None,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let _guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        self.load_platforms();

        let tick_rate = Duration::from_millis(self.config.ui.refresh_rate_ms);

        while !self.should_quit {
            terminal.draw(|f| {
                self.screen.render(f);
                self.success_view.render(f);
            })?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            self.drain_events();
        }

        if let Some(task) = self.launch_task.take() {
            tracing::info!("Stopping launch in progress");
            task.stop();
        }
        terminal.show_cursor()?;

        Ok(())
    }

    fn load_platforms(&self) {
        let api = self.api.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let (platforms, source) = api::platforms_or_fallback(api.as_ref()).await;
            let _ = tx.send(AppEvent::Platforms(platforms, source));
        });
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                AppEvent::Platforms(platforms, source) => {
                    tracing::debug!(count = platforms.len(), ?source, "Platforms loaded");
                    self.screen.set_platforms(platforms, source);
                }
                AppEvent::Products {
                    categories,
                    products,
                    source,
                } => {
                    tracing::info!(count = products.len(), ?source, "Products generated");
                    self.screen.apply_products(&categories, &products, source);
                }
                AppEvent::Validated(result) => self.screen.apply_validation(result),
            }
        }

        while let Ok(event) = self.launch_rx.try_recv() {
            if let LaunchEvent::Finished(outcome) = &event {
                self.launch_task = None;
                if let LaunchOutcome::Completed(record) = outcome {
                    self.success_view.show(SuccessSummary::from_record(record));
                }
            }
            self.screen.apply_launch_event(event);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // Alert takes priority and swallows the key
        if self.screen.alert.visible {
            self.screen.alert.hide();
            return;
        }

        if self.success_view.visible {
            match key.code {
                KeyCode::Esc => self.success_view.hide(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        // Focused business field gets first pick
        if self.screen.handle_field_key(key.code) {
            return;
        }

        match key.code {
            KeyCode::Enter | KeyCode::Right => {
                let result = self.screen.confirm();
                self.dispatch(result);
            }
            KeyCode::Esc | KeyCode::Left => {
                let result = self.screen.go_back();
                self.dispatch(result);
            }
            KeyCode::Up | KeyCode::Char('k') => self.screen.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.screen.select_next(),
            KeyCode::Tab => self.screen.switch_section(),
            KeyCode::Char(' ') => self.screen.toggle_selection(),
            KeyCode::Char('g') => {
                let result = self.screen.request_generation();
                self.dispatch(result);
            }
            KeyCode::Char('v') => {
                let result = self.screen.request_validation();
                self.dispatch(result);
            }
            KeyCode::Char('l') if self.screen.step() == WizardStep::Launch => {
                let result = self.screen.launch();
                self.dispatch(result);
            }
            KeyCode::Char('s') => {
                if let Some(record) = &self.screen.launch_record {
                    self.success_view.show(SuccessSummary::from_record(record));
                }
            }
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn dispatch(&mut self, result: WizardResult) {
        match result {
            WizardResult::Continue => {}
            WizardResult::Generate(categories) => {
                let api = self.api.clone();
                let tx = self.events_tx.clone();
                tokio::spawn(async move {
                    let (products, source) =
                        api::products_or_fallback(api.as_ref(), &categories).await;
                    let _ = tx.send(AppEvent::Products {
                        categories,
                        products,
                        source,
                    });
                });
            }
            WizardResult::Validate(store) => {
                let flow = self.flow.clone();
                let tx = self.events_tx.clone();
                tokio::spawn(async move {
                    let result = flow.validate(&store).await;
                    let _ = tx.send(AppEvent::Validated(result));
                });
            }
            WizardResult::Launch(store) => self.start_launch(store),
        }
    }

    fn start_launch(&mut self, store: StoreConfig) {
        if let Some(task) = self.launch_task.take() {
            task.stop();
        }

        let flow = self.flow.clone();
        let events = self.launch_tx.clone();
        let cached = self.screen.validation.clone();
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);

        tracing::info!(
            business_name = store.business_name().unwrap_or_default(),
            "Launching store"
        );
        let handle = tokio::spawn(async move {
            let outcome = flow
                .run(&store, cached.as_ref(), &events, Some(shutdown_rx))
                .await;
            let _ = events.send(LaunchEvent::Finished(outcome));
        });

        self.launch_task = Some(LaunchTask {
            shutdown_tx,
            handle,
        });
    }
}
