//! Grading use case
//!
//! Load checks, obtain the document, parse it once, evaluate every selector
//! in order.

use std::path::Path;
use tracing::{debug, info};

use crate::domain::{CheckReport, SelectorSet};
use crate::infrastructure::checks_loader::load_checks;
use crate::infrastructure::document_source::{DocumentSource, LocalFileSource, RemoteUrlSource};
use crate::infrastructure::grader_error::GraderResult;
use crate::infrastructure::markup::{CompiledSelector, MarkupTree};
use crate::infrastructure::simple_http_client::HttpClient;

/// Evaluate every selector against `tree`, in set order.
///
/// All selectors are compiled before the first query; one bad selector
/// fails the whole run and nothing is reported. A blank selector matches
/// nothing and is recorded as `false`.
pub fn evaluate(tree: &MarkupTree, selectors: &SelectorSet) -> GraderResult<CheckReport> {
    let compiled = selectors
        .iter()
        .map(CompiledSelector::parse)
        .collect::<GraderResult<Vec<_>>>()?;

    let mut report = CheckReport::with_capacity(compiled.len());
    for selector in &compiled {
        let matches = tree.count(selector);
        debug!("{} -> {} match(es)", selector.source(), matches);
        report.record(selector.source(), matches > 0);
    }

    Ok(report)
}

/// Runs the pipeline for one document source
pub struct GradingUseCase {
    source: Box<dyn DocumentSource>,
}

impl GradingUseCase {
    pub fn new(source: Box<dyn DocumentSource>) -> Self {
        Self { source }
    }

    pub async fn execute(&self, checks_path: &Path) -> GraderResult<CheckReport> {
        let selectors = load_checks(checks_path)?;
        let text = self.source.load().await?;
        let report = grade_text(&text, &selectors)?;

        info!(
            "Graded {}: {}/{} selectors present",
            self.source.origin(),
            report.present_count(),
            report.len()
        );
        Ok(report)
    }
}

/// Parse `html` and evaluate `selectors` against it
pub fn grade_text(html: &str, selectors: &SelectorSet) -> GraderResult<CheckReport> {
    let tree = MarkupTree::parse(html);
    if tree.recovered_errors() > 0 {
        debug!("HTML parser recovered from {} error(s)", tree.recovered_errors());
    }
    evaluate(&tree, selectors)
}

/// Grade a local HTML file against the selectors in `checks_path`.
pub fn check_html_file(html_path: &Path, checks_path: &Path) -> GraderResult<CheckReport> {
    let selectors = load_checks(checks_path)?;
    let text = LocalFileSource::new(html_path).read_local()?;
    grade_text(&text, &selectors)
}

/// Grade the page at `url` against the selectors in `checks_path`.
pub async fn check_html_url(
    url: &str,
    checks_path: &Path,
    client: &HttpClient,
) -> GraderResult<CheckReport> {
    let selectors = load_checks(checks_path)?;
    let text = RemoteUrlSource::new(url, client.clone())?.fetch_remote().await?;
    grade_text(&text, &selectors)
}
