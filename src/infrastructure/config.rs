//! Configuration infrastructure
//!
//! Built-in defaults, optionally overlaid by a settings file (TOML, JSON or
//! YAML, picked by extension). Command line flags are applied on top by the
//! caller.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::infrastructure::grader_error::{GraderError, GraderResult};

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Settings for URL mode fetches
    pub http: HttpSettings,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    /// Request timeout in seconds, 0 = wait indefinitely
    pub timeout_seconds: u64,

    /// User agent string
    pub user_agent: String,

    /// Whether to follow redirects
    pub follow_redirects: bool,

    /// Redirect hop limit when following redirects
    pub max_redirects: usize,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_seconds: defaults::REQUEST_TIMEOUT_SECONDS,
            user_agent: defaults::USER_AGENT.to_string(),
            follow_redirects: true,
            max_redirects: defaults::MAX_REDIRECTS,
        }
    }
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "error", "warn", "info", "debug", "trace"
    pub level: String,

    /// Enable JSON formatted logs
    pub json_format: bool,

    /// Write logs to standard error
    pub console_output: bool,

    /// Also write logs to this file
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json_format: false,
            console_output: true,
            file: None,
        }
    }
}

pub mod defaults {
    pub const REQUEST_TIMEOUT_SECONDS: u64 = 30;
    pub const MAX_REDIRECTS: usize = 10;
    pub const USER_AGENT: &str = concat!("html-grader/", env!("CARGO_PKG_VERSION"));
}

impl AppConfig {
    /// Load defaults, overlaid by `settings_file` when given.
    pub fn load(settings_file: Option<&Path>) -> GraderResult<Self> {
        let Some(path) = settings_file else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Err(GraderError::missing_resource(path));
        }

        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?)
            .add_source(config::File::from(path))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        info!("Loaded settings from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> GraderResult<()> {
        if self.http.follow_redirects && self.http.max_redirects == 0 {
            return Err(GraderError::Config {
                message: "http.max_redirects must be greater than 0 when following redirects"
                    .to_string(),
            });
        }

        if self.http.user_agent.trim().is_empty() {
            return Err(GraderError::Config {
                message: "http.user_agent must not be empty".to_string(),
            });
        }

        if !self.logging.console_output && self.logging.file.is_none() {
            return Err(GraderError::Config {
                message: "No logging output configured".to_string(),
            });
        }

        Ok(())
    }
}
