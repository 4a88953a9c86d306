//! Logging initialization for the wizard.
//!
//! TUI mode: logs to `<state>/logs/store-wizard-{datetime}.log`
//! CLI mode: logs to stderr

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Result of logging initialization
pub struct LoggingHandle {
    /// Guard that must be kept alive for the duration of the program.
    /// When dropped, ensures all buffered logs are flushed.
    pub _guard: Option<WorkerGuard>,

    /// Path to the log file (only set in TUI mode with file logging enabled)
    pub log_file_path: Option<PathBuf>,
}

/// Build the log file name for a session started now
fn log_file_name() -> String {
    let timestamp = chrono::Utc::now().format("%Y%m%dT%H%M%SZ");
    format!("store-wizard-{}.log", timestamp)
}

/// Resolve the effective filter directive.
///
/// `--debug` wins over the configured level; `RUST_LOG` wins over both.
fn filter_directive(config: &Config, debug_override: bool) -> String {
    let log_level = if debug_override {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    };
    std::env::var("RUST_LOG").unwrap_or(log_level)
}

/// Initialize logging based on mode and configuration.
///
/// The terminal UI owns stdout/stderr, so TUI mode writes to a file under the
/// state directory. Subcommands log to stderr.
pub fn init_logging(
    config: &Config,
    is_tui_mode: bool,
    debug_override: bool,
) -> Result<LoggingHandle> {
    let filter = tracing_subscriber::EnvFilter::new(filter_directive(config, debug_override));

    if is_tui_mode && config.logging.to_file {
        let logs_dir = config.logs_path();
        std::fs::create_dir_all(&logs_dir)?;

        let log_filename = log_file_name();
        let log_file_path = logs_dir.join(&log_filename);

        let file_appender = tracing_appender::rolling::never(&logs_dir, &log_filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false) // No ANSI codes in log files
                    .with_writer(non_blocking),
            )
            .init();

        Ok(LoggingHandle {
            _guard: Some(guard),
            log_file_path: Some(log_file_path),
        })
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();

        Ok(LoggingHandle {
            _guard: None,
            log_file_path: None,
        })
    }
}

/// Print the session log location if anything was written to it
pub fn report_log_file(log_path: &Path) {
    if let Ok(metadata) = log_path.metadata() {
        if metadata.len() > 0 {
            eprintln!("Session log: {}", log_path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_config(temp_dir: &TempDir) -> Config {
        let mut config = Config::default();
        config.paths.state = temp_dir.path().to_string_lossy().to_string();
        config
    }

    #[test]
    fn test_logs_path_under_state_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        let logs_dir = config.logs_path();
        assert!(logs_dir.ends_with("logs"));
        assert!(logs_dir.starts_with(temp_dir.path()));
    }

    #[test]
    fn test_log_file_name_format() {
        let name = log_file_name();
        assert!(name.starts_with("store-wizard-"));
        assert!(name.ends_with(".log"));
    }

    #[test]
    fn test_debug_override_sets_debug_level() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);
        assert_eq!(filter_directive(&config, true), "debug");
        assert_eq!(filter_directive(&config, false), "info");
    }

    #[test]
    fn test_tui_mode_with_file_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = test_config(&temp_dir);
        config.logging.to_file = false;

        // Even in TUI mode, if to_file is false, no log file should be created
        let is_tui_mode = true;
        assert!(!(is_tui_mode && config.logging.to_file));
    }
}
