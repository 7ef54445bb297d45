//! Ordered selector → presence results of one grading run

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Presence result for a single selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub selector: String,
    pub present: bool,
}

/// Results in evaluation order.
///
/// Serializes as a JSON object whose keys keep the insertion order. An entry
/// is written once and never replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    outcomes: Vec<CheckOutcome>,
}

impl CheckReport {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            outcomes: Vec::with_capacity(capacity),
        }
    }

    /// Record the result for `selector`. Returns `false` (and keeps the
    /// existing entry) if the selector was already recorded.
    pub fn record(&mut self, selector: impl Into<String>, present: bool) -> bool {
        let selector = selector.into();
        if self.get(&selector).is_some() {
            return false;
        }
        self.outcomes.push(CheckOutcome { selector, present });
        true
    }

    pub fn get(&self, selector: &str) -> Option<bool> {
        self.outcomes
            .iter()
            .find(|o| o.selector == selector)
            .map(|o| o.present)
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    pub fn present_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.present).count()
    }
}

impl Serialize for CheckReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.outcomes.len()))?;
        for outcome in &self.outcomes {
            map.serialize_entry(&outcome.selector, &outcome.present)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_first_value() {
        let mut report = CheckReport::default();
        assert!(report.record("h1", true));
        assert!(!report.record("h1", false));
        assert_eq!(report.get("h1"), Some(true));
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_serializes_in_insertion_order() {
        let mut report = CheckReport::with_capacity(3);
        report.record("b", true);
        report.record("a", false);
        report.record("c", true);

        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"b":true,"a":false,"c":true}"#);
        assert_eq!(report.present_count(), 2);
    }

    #[test]
    fn test_empty_report_is_empty_object() {
        let report = CheckReport::default();
        assert_eq!(serde_json::to_string(&report).unwrap(), "{}");
    }
}
