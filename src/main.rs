use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc;

use store_wizard::api::{self, DataSource, HttpLaunchApi, LaunchApi};
use store_wizard::app::App;
use store_wizard::config::Config;
use store_wizard::launch::{LaunchEvent, LaunchFlow, LaunchOutcome, LaunchRecord, SuccessSummary};
use store_wizard::types::ValidationResult;
use store_wizard::ui::terminal_guard::install_panic_hook;
use store_wizard::wizard::StoreConfig;
use store_wizard::{logging, rest};

#[derive(Parser)]
#[command(name = "store-wizard")]
#[command(about = "Configure and launch an online store from the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Backend base URL (overrides api.base_url)
    #[arg(long)]
    api_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch a saved wizard configuration without the TUI
    Launch {
        /// JSON file holding the wizard configuration object
        #[arg(short, long)]
        from: PathBuf,

        /// Skip remote validation before deploying
        #[arg(long)]
        no_validate: bool,
    },

    /// Show the summary of the last launched store
    Success,

    /// List the platforms a store can be deployed to
    Platforms,

    /// Run the mock backend
    MockServer {
        /// Port to listen on (default: 9020)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the effective configuration
    Config {
        /// Write it to .store-wizard/config.toml
        #[arg(long)]
        save: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (needed for logging setup)
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    // Determine if we're running in TUI mode (no subcommand)
    let is_tui_mode = cli.command.is_none();

    // Initialize logging (file-based for TUI, stderr for CLI)
    let logging_handle = logging::init_logging(&config, is_tui_mode, cli.debug)?;

    match cli.command {
        Some(Commands::Launch { from, no_validate }) => {
            cmd_launch(&config, &from, no_validate).await?;
        }
        Some(Commands::Success) => {
            cmd_success(&config)?;
        }
        Some(Commands::Platforms) => {
            cmd_platforms(&config).await?;
        }
        Some(Commands::MockServer { port }) => {
            cmd_mock_server(port).await?;
        }
        Some(Commands::Config { save }) => {
            cmd_config(&config, save)?;
        }
        None => {
            run_tui(config, logging_handle.log_file_path).await?;
        }
    }

    Ok(())
}

fn build_api(config: &Config) -> Result<Arc<dyn LaunchApi>> {
    let api = HttpLaunchApi::from_config(&config.api).context("Failed to build HTTP client")?;
    tracing::debug!(base_url = %api.base_url(), "Backend configured");
    Ok(Arc::new(api))
}

async fn run_tui(config: Config, log_file_path: Option<PathBuf>) -> Result<()> {
    install_panic_hook();

    let api = build_api(&config)?;
    let mut app = App::new(config, api);
    let result = app.run().await;

    // Print log file path on exit if logs were written
    if let Some(log_path) = log_file_path {
        logging::report_log_file(&log_path);
    }

    result
}

fn read_store_config(path: &Path) -> Result<StoreConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    match StoreConfig::from_value(value) {
        Some(store) => Ok(store),
        None => bail!("{} must contain a JSON object", path.display()),
    }
}

async fn cmd_launch(config: &Config, from: &Path, no_validate: bool) -> Result<()> {
    let store = read_store_config(from)?;
    let flow = LaunchFlow::new(build_api(config)?, config);

    let skip = no_validate.then(|| ValidationResult {
        valid: true,
        ..Default::default()
    });

    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let (shutdown_tx, shutdown_rx) = mpsc::channel(1);

    println!(
        "Launching {}",
        store.business_name().unwrap_or("store configuration")
    );

    let task = tokio::spawn(async move {
        flow.run(&store, skip.as_ref(), &events_tx, Some(shutdown_rx))
            .await
    });

    let outcome = loop {
        tokio::select! {
            event = events_rx.recv() => match event {
                Some(LaunchEvent::Validated(result)) => {
                    for error in &result.errors {
                        println!("  error:   {}", error);
                    }
                    for warning in &result.warnings {
                        println!("  warning: {}", warning);
                    }
                }
                Some(LaunchEvent::Status(status)) => println!("  {}", status.summary()),
                Some(LaunchEvent::Finished(_)) => {}
                None => break task.await.context("Launch task failed")?,
            },
            _ = tokio::signal::ctrl_c() => {
                let _ = shutdown_tx.try_send(());
                println!("Cancelling...");
            }
        }
    };

    match outcome {
        LaunchOutcome::Completed(record) => {
            println!();
            print!("{}", SuccessSummary::from_record(&record).to_text());
            Ok(())
        }
        LaunchOutcome::Cancelled => bail!("Launch cancelled"),
        other => {
            let message = other.alert().unwrap_or("Launch did not complete");
            bail!("{}", message)
        }
    }
}

fn cmd_success(config: &Config) -> Result<()> {
    let path = config.launch_record_path();
    let Some(record) = LaunchRecord::load(&path)? else {
        bail!(
            "No launched store found ({} does not exist). Launch a store first.",
            path.display()
        );
    };

    print!("{}", SuccessSummary::from_record(&record).to_text());
    Ok(())
}

async fn cmd_platforms(config: &Config) -> Result<()> {
    let api = build_api(config)?;
    let (platforms, source) = api::platforms_or_fallback(api.as_ref()).await;

    if source == DataSource::Fallback {
        println!("Backend unreachable, showing built-in platforms");
        println!();
    }

    for platform in &platforms {
        println!("{} ({})", platform.name, platform.id);
        println!("  {}", platform.description);
        println!(
            "  Setup: {}  Cost: {}",
            platform.setup_time, platform.monthly_cost
        );
        for feature in &platform.features {
            println!("  - {}", feature);
        }
        println!();
    }

    Ok(())
}

async fn cmd_mock_server(port: Option<u16>) -> Result<()> {
    let port = port.unwrap_or(rest::DEFAULT_PORT);
    println!("Mock backend on http://localhost:{}", port);
    rest::serve(rest::MockState::new(), port).await
}

fn cmd_config(config: &Config, save: bool) -> Result<()> {
    if save {
        config.save()?;
        println!("Saved {}", Config::local_config_path().display());
    } else {
        print!(
            "{}",
            toml::to_string_pretty(config).context("Failed to serialize config")?
        );
    }
    Ok(())
}
