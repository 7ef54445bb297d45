//! Domain layer module
//!
//! Plain data for a grading run: the selectors to check and their results.

pub mod check_report;
pub mod selector_set;

pub use check_report::{CheckOutcome, CheckReport};
pub use selector_set::SelectorSet;
