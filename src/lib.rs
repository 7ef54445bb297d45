//! HTML Grader - presence checks for CSS selectors
//!
//! Given an HTML document (local file or remote URL) and a JSON list of
//! selectors, reports for each selector whether at least one element
//! matches.

// Module declarations
pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

pub use application::{check_html_file, check_html_url};
pub use cli::Cli;
pub use domain::{CheckReport, SelectorSet};
pub use infrastructure::{AppConfig, GraderError, GraderResult};

use application::GradingUseCase;

/// Run one grading invocation as described by the command line.
pub async fn run(cli: &Cli, config: &AppConfig) -> GraderResult<CheckReport> {
    let source = cli.document_input().into_source(&config.http)?;
    GradingUseCase::new(source).execute(&cli.checks).await
}
