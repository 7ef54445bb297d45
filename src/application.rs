//! Application layer module
//!
//! Use cases that drive the grading pipeline and render its output.

pub mod grading_use_case;
pub mod report_renderer;

pub use grading_use_case::{GradingUseCase, check_html_file, check_html_url, evaluate, grade_text};
pub use report_renderer::{print_report, render, write_report};
