use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub launch: LaunchConfig,
    pub notifications: NotificationsConfig,
    pub paths: PathsConfig,
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the wizard backend (default: http://localhost:9020)
    pub base_url: String,
    /// Timeout for regular requests in seconds (default: 30)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// Timeout for deployment status checks in seconds (default: 10)
    #[serde(default = "default_status_timeout")]
    pub status_timeout_secs: u64,
}

fn default_request_timeout() -> u64 {
    30
}

fn default_status_timeout() -> u64 {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchConfig {
    /// Interval between deployment status polls (default: 2000)
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
    /// Give up after this many polls. Unset polls until a terminal status.
    #[serde(default)]
    pub max_polls: Option<u32>,
    /// Session id forwarded to the backend when the wizard has none
    #[serde(default = "default_session_id")]
    pub session_id: String,
}

fn default_poll_interval() -> u64 {
    2000 // 2 seconds
}

fn default_session_id() -> String {
    "default".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    pub enabled: bool,
    /// Show a desktop notification when the store goes live or fails
    #[serde(default = "default_true")]
    pub desktop: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for logs and the persisted launch record
    pub state: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub refresh_rate_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to log to file in TUI mode (false = stderr for debugging)
    #[serde(default = "default_log_to_file")]
    pub to_file: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_to_file() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            to_file: default_log_to_file(),
        }
    }
}

impl Config {
    /// Path to the project-local config file
    pub fn local_config_path() -> PathBuf {
        PathBuf::from(".store-wizard/config.toml")
    }

    pub fn load(config_path: Option<&str>) -> Result<Self> {
        // Start with embedded defaults so the wizard works without config files
        let defaults = Config::default();
        let defaults_json =
            serde_json::to_string(&defaults).context("Failed to serialize default config")?;

        let mut builder = config::Config::builder().add_source(config::File::from_str(
            &defaults_json,
            config::FileFormat::Json,
        ));

        let local_config = Self::local_config_path();
        if local_config.exists() {
            builder = builder.add_source(config::File::from(local_config));
        }

        // User config in ~/.config/store-wizard/ (optional global overrides)
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("store-wizard").join("config.toml");
            if user_config.exists() {
                builder = builder.add_source(config::File::from(user_config));
            }
        }

        // Explicit config file (CLI override)
        if let Some(path) = config_path {
            builder = builder.add_source(config::File::with_name(path));
        }

        // Environment variables, e.g. STORE_WIZARD__API__BASE_URL
        builder = builder.add_source(
            config::Environment::with_prefix("STORE_WIZARD")
                .separator("__")
                .try_parsing(true),
        );

        let config: Config = builder
            .build()
            .context("Failed to load configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the launch flow cannot run with
    fn validate(&self) -> Result<()> {
        if self.launch.poll_interval_ms == 0 {
            bail!("launch.poll_interval_ms must be greater than 0");
        }
        Ok(())
    }

    /// Save config to .store-wizard/config.toml
    pub fn save(&self) -> Result<()> {
        let config_path = Self::local_config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let toml_str =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        std::fs::write(&config_path, toml_str).context("Failed to write config file")?;

        Ok(())
    }

    /// Get absolute path to state directory
    pub fn state_path(&self) -> PathBuf {
        let path = PathBuf::from(&self.paths.state);
        if path.is_absolute() {
            path
        } else {
            std::env::current_dir().unwrap_or_default().join(path)
        }
    }

    /// Get absolute path to logs directory
    pub fn logs_path(&self) -> PathBuf {
        self.state_path().join("logs")
    }

    /// Path of the persisted launch record read by the success view
    pub fn launch_record_path(&self) -> PathBuf {
        self.state_path().join("launch.json")
    }

    /// Status poll interval, never shorter than 1ms
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.launch.poll_interval_ms.max(1))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:9020".to_string(),
                request_timeout_secs: default_request_timeout(),
                status_timeout_secs: default_status_timeout(),
            },
            launch: LaunchConfig {
                poll_interval_ms: default_poll_interval(),
                max_polls: None,
                session_id: default_session_id(),
            },
            notifications: NotificationsConfig {
                enabled: true,
                desktop: true,
            },
            paths: PathsConfig {
                state: ".store-wizard".to_string(), // Relative to cwd
            },
            ui: UiConfig {
                refresh_rate_ms: 100,
            },
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_poll_interval_is_two_seconds() {
        let config = Config::default();
        assert_eq!(config.poll_interval(), Duration::from_secs(2));
        assert!(config.launch.max_polls.is_none());
    }

    #[test]
    fn test_default_api_base_url() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:9020");
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.api.status_timeout_secs, 10);
    }

    #[test]
    fn test_launch_record_path_under_state() {
        let mut config = Config::default();
        config.paths.state = "/tmp/wizard-state".to_string();
        assert_eq!(
            config.launch_record_path(),
            PathBuf::from("/tmp/wizard-state/launch.json")
        );
        assert_eq!(config.logs_path(), PathBuf::from("/tmp/wizard-state/logs"));
    }

    #[test]
    fn test_relative_state_path_is_resolved() {
        let config = Config::default();
        assert!(config.state_path().is_absolute());
        assert!(config.state_path().ends_with(".store-wizard"));
    }

    #[test]
    fn test_load_with_explicit_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("wizard.toml");
        std::fs::write(
            &path,
            "[launch]\npoll_interval_ms = 500\nmax_polls = 10\n\n[api]\nbase_url = \"http://example.test\"\n",
        )
        .unwrap();

        let config = Config::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.launch.poll_interval_ms, 500);
        assert_eq!(config.launch.max_polls, Some(10));
        assert_eq!(config.api.base_url, "http://example.test");
        // Untouched sections keep defaults
        assert!(config.notifications.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_rejects_zero_poll_interval() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("wizard.toml");
        std::fs::write(&path, "[launch]\npoll_interval_ms = 0\n").unwrap();

        let err = Config::load(Some(path.to_str().unwrap())).unwrap_err();
        assert!(err.to_string().contains("poll_interval_ms"), "{:#}", err);
    }

    #[test]
    fn test_zero_poll_interval_is_clamped() {
        let mut config = Config::default();
        config.launch.poll_interval_ms = 0;
        assert_eq!(config.poll_interval(), Duration::from_millis(1));
    }

    #[test]
    fn test_toml_roundtrip_of_defaults() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.launch.session_id, "default");
        assert_eq!(parsed.ui.refresh_rate_ms, 100);
    }
}
