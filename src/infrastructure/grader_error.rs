//! Error types for the grading pipeline
//!
//! Every fallible step of a run (loading checks, obtaining the document,
//! compiling selectors) reports through [`GraderError`]. Each variant knows
//! which process exit code it maps to.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraderError {
    #[error("{} does not exist. Exiting.", path.display())]
    MissingResource { path: PathBuf },

    #[error("Malformed checks file {}: {source}", path.display())]
    MalformedChecks {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid CSS selector: {selector} - {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("HTTP request failed for {url}: {message}")]
    FetchFailed { url: String, message: String },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP client setup failed: {message}")]
    HttpClient { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

pub type GraderResult<T> = Result<T, GraderError>;

impl GraderError {
    pub fn missing_resource(path: impl AsRef<Path>) -> Self {
        Self::MissingResource {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn invalid_selector(selector: &str, reason: impl ToString) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn fetch_failed(url: &str, message: impl ToString) -> Self {
        Self::FetchFailed {
            url: url.to_string(),
            message: message.to_string(),
        }
    }

    /// Process exit status for this error.
    ///
    /// A missing input file always exits with 1.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::MissingResource { .. } | Self::Io { .. } | Self::HttpClient { .. } => 1,
            Self::MalformedChecks { .. }
            | Self::InvalidSelector { .. }
            | Self::InvalidUrl { .. }
            | Self::Config { .. } => 2,
            Self::FetchFailed { .. } => 3,
        }
    }
}

impl From<config::ConfigError> for GraderError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config {
            message: err.to_string(),
        }
    }
}
