//! Parsed HTML document and selector queries
//!
//! Parsing follows the browser's lenient HTML5 rules (via `scraper` /
//! html5ever): broken or partial markup still yields a tree, unknown
//! constructs are kept as inert nodes.

use scraper::{Html, Selector};

use crate::infrastructure::grader_error::{GraderError, GraderResult};

/// A compiled CSS selector together with its source text
#[derive(Debug, Clone)]
pub struct CompiledSelector {
    source: String,
    /// `None` for a blank selector, which matches nothing
    selector: Option<Selector>,
}

impl CompiledSelector {
    pub fn parse(source: &str) -> GraderResult<Self> {
        let selector = if source.trim().is_empty() {
            None
        } else {
            Some(Selector::parse(source).map_err(|e| GraderError::invalid_selector(source, e))?)
        };
        Ok(Self {
            source: source.to_string(),
            selector,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Read-only tree for one HTML document
pub struct MarkupTree {
    html: Html,
}

impl MarkupTree {
    /// Build the tree. Never fails; parse errors are recorded, not raised.
    pub fn parse(text: &str) -> Self {
        Self {
            html: Html::parse_document(text),
        }
    }

    /// Number of elements matching `selector`
    pub fn count(&self, selector: &CompiledSelector) -> usize {
        selector
            .selector
            .as_ref()
            .map_or(0, |s| self.html.select(s).count())
    }

    /// Parse errors html5ever recovered from
    pub fn recovered_errors(&self) -> usize {
        self.html.errors.len()
    }
}

impl std::fmt::Debug for MarkupTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkupTree")
            .field("recovered_errors", &self.recovered_errors())
            .finish_non_exhaustive()
    }
}
