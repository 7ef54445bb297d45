//! Sorted, duplicate-free list of CSS selectors to check

use serde::Deserialize;

/// Selectors in canonical order.
///
/// Built from the raw list in the checks file. Ordering uses `str`
/// comparison so the same input always produces the same sequence, no
/// matter how the file listed them. Duplicates carry no extra information
/// (presence is a boolean) and are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct SelectorSet {
    selectors: Vec<String>,
}

impl SelectorSet {
    pub fn new<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selectors: Vec<String> = raw.into_iter().map(Into::into).collect();
        selectors.sort();
        selectors.dedup();
        Self { selectors }
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.selectors.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.selectors
    }
}

impl From<Vec<String>> for SelectorSet {
    fn from(raw: Vec<String>) -> Self {
        Self::new(raw)
    }
}
