//! Infrastructure layer for input loading, HTML parsing, and external integrations
//!
//! Checks file loading, local and remote document sources, the HTML tree,
//! configuration, and logging.

pub mod checks_loader;
pub mod config;
pub mod document_source;
pub mod grader_error;
pub mod logging;
pub mod markup;
pub mod simple_http_client;

pub use checks_loader::{CHECKS_FILE_DEFAULT, load_checks};
pub use self::config::AppConfig;
pub use document_source::{DocumentInput, DocumentSource, HTML_FILE_DEFAULT, LocalFileSource, RemoteUrlSource};
pub use grader_error::{GraderError, GraderResult};
pub use logging::init_logging_with_config;
pub use markup::{CompiledSelector, MarkupTree};
pub use simple_http_client::{HttpClient, HttpClientConfig};
