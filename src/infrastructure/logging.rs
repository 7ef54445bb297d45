//! Logging system configuration and initialization
//!
//! - Console output goes to standard error; standard output is reserved
//!   for the JSON report
//! - Optional file output through a non-blocking appender
//! - Optional JSON formatted records
//! - `RUST_LOG` overrides the configured level

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Result, anyhow};
use chrono::Local;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, time::FormatTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

pub use crate::infrastructure::config::LoggingConfig;

/// Local time with milliseconds and UTC offset
struct LocalTimeFormatter;

impl FormatTime for LocalTimeFormatter {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", Local::now().format("%Y-%m-%d %H:%M:%S%.3f %:z"))
    }
}

/// Keeps the file writer alive; flushes pending records on drop.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Build the level filter. `RUST_LOG` wins when set.
pub fn build_env_filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let mut filter =
        EnvFilter::try_new(level).map_err(|e| anyhow!("Invalid log level '{}': {}", level, e))?;

    // Dependency internals only show up on TRACE
    if !level.to_lowercase().contains("trace") {
        for directive in ["reqwest=warn", "hyper=warn", "hyper_util=warn", "html5ever=error", "selectors=warn"] {
            filter = filter.add_directive(directive.parse()?);
        }
    }

    Ok(filter)
}

/// Initialize logging with custom configuration
pub fn init_logging_with_config(config: LoggingConfig) -> Result<LoggingGuard> {
    if !config.console_output && config.file.is_none() {
        return Err(anyhow!("No logging output configured"));
    }

    let env_filter = build_env_filter(&config.level)?;

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();
    let mut file_guard = None;

    if let Some(path) = &config.file {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| std::path::PathBuf::from("."), std::path::Path::to_path_buf);
        let file_name = path
            .file_name()
            .ok_or_else(|| anyhow!("Log file path has no file name: {}", path.display()))?;

        std::fs::create_dir_all(&dir)
            .map_err(|e| anyhow!("Failed to create log directory {}: {}", dir.display(), e))?;

        let (writer, guard) = non_blocking(rolling::never(&dir, file_name));
        file_guard = Some(guard);

        let layer = fmt::Layer::new()
            .with_writer(writer)
            .with_timer(LocalTimeFormatter)
            .with_ansi(false);
        layers.push(if config.json_format {
            layer.json().with_target(true).with_file(true).with_line_number(true).boxed()
        } else {
            layer.with_target(false).boxed()
        });
    }

    if config.console_output {
        let layer = fmt::Layer::new()
            .with_writer(std::io::stderr)
            .with_timer(LocalTimeFormatter)
            .with_target(false);
        layers.push(if config.json_format {
            layer.json().boxed()
        } else {
            layer.boxed()
        });
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))?;

    tracing::debug!(
        level = %config.level,
        json = config.json_format,
        file = ?config.file,
        "Logging system initialized"
    );

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}
