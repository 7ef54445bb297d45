//! Loading the list of selectors to check
//!
//! The checks file is a JSON array of selector strings, e.g.
//! `["h1", "title", "a[href]"]`.

use std::path::Path;
use tracing::debug;

use crate::domain::SelectorSet;
use crate::infrastructure::grader_error::{GraderError, GraderResult};

/// Default checks file name, relative to the working directory
pub const CHECKS_FILE_DEFAULT: &str = "checks.json";

/// Read and parse a checks file into a sorted [`SelectorSet`].
pub fn load_checks(path: impl AsRef<Path>) -> GraderResult<SelectorSet> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(GraderError::missing_resource(path));
    }

    let content = std::fs::read_to_string(path).map_err(|e| GraderError::io(path, e))?;
    let checks = parse_checks(&content).map_err(|source| GraderError::MalformedChecks {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Loaded {} selectors from {}", checks.len(), path.display());
    Ok(checks)
}

/// Parse checks from JSON text
pub fn parse_checks(content: &str) -> Result<SelectorSet, serde_json::Error> {
    serde_json::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn checks_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_sorts_selectors() {
        let file = checks_file(r#"["title", "h1", "a[href]"]"#);
        let checks = load_checks(file.path()).unwrap();
        assert_eq!(checks.as_slice(), ["a[href]", "h1", "title"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("checks.json");

        let err = load_checks(&missing).unwrap_err();
        assert!(matches!(err, GraderError::MissingResource { .. }));
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("checks.json"));
    }

    #[test]
    fn test_load_malformed_json() {
        let file = checks_file(r#"["h1", "title""#);
        let err = load_checks(file.path()).unwrap_err();
        assert!(matches!(err, GraderError::MalformedChecks { .. }));
    }

    #[test]
    fn test_non_string_entries_are_malformed() {
        assert!(parse_checks("[1, 2]").is_err());
        assert!(parse_checks(r#"{"h1": true}"#).is_err());
    }

    #[test]
    fn test_empty_array() {
        assert!(parse_checks("[]").unwrap().is_empty());
    }
}
