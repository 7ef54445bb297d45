//! Command line surface

use clap::Parser;
use std::path::PathBuf;

use crate::infrastructure::checks_loader::CHECKS_FILE_DEFAULT;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::document_source::{DocumentInput, HTML_FILE_DEFAULT};

/// Check an HTML document for the presence of CSS selectors and print the
/// result as JSON.
#[derive(Parser, Debug, Clone)]
#[command(name = "html-grader", author, version, about, long_about = None)]
pub struct Cli {
    /// Path to checks.json (a JSON array of selectors)
    #[arg(short, long = "checks", value_name = "CHECK_FILE", default_value = CHECKS_FILE_DEFAULT)]
    pub checks: PathBuf,

    /// Path to index.html
    #[arg(short, long = "file", value_name = "HTML_FILE", default_value = HTML_FILE_DEFAULT)]
    pub file: PathBuf,

    /// Website URL; takes precedence over --file
    #[arg(short, long = "url", value_name = "WEB_URL")]
    pub url: Option<String>,

    /// Settings file (TOML, JSON or YAML)
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Request timeout in seconds for --url, 0 waits indefinitely
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn document_input(&self) -> DocumentInput {
        DocumentInput::resolve(self.url.clone(), &self.file)
    }

    /// Apply flags that override settings file values
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(timeout) = self.timeout {
            config.http.timeout_seconds = timeout;
        }
        if self.verbose {
            config.logging.level = "debug".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["html-grader"]).unwrap();
        assert_eq!(cli.checks, PathBuf::from("checks.json"));
        assert_eq!(cli.file, PathBuf::from("index.html"));
        assert!(cli.url.is_none());
        assert_eq!(cli.document_input(), DocumentInput::File(PathBuf::from("index.html")));
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from(["html-grader", "-c", "c.json", "-f", "page.html"]).unwrap();
        assert_eq!(cli.checks, PathBuf::from("c.json"));
        assert_eq!(cli.file, PathBuf::from("page.html"));
    }

    #[test]
    fn test_url_wins_over_file() {
        let cli = Cli::try_parse_from([
            "html-grader",
            "--file",
            "page.html",
            "--url",
            "https://example.com",
        ])
        .unwrap();
        assert_eq!(
            cli.document_input(),
            DocumentInput::Url("https://example.com".to_string())
        );
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from(["html-grader", "--timeout", "0", "-v"]).unwrap();
        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.http.timeout_seconds, 0);
        assert_eq!(config.logging.level, "debug");
    }
}
