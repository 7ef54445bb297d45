//! Where the HTML to grade comes from
//!
//! Two interchangeable sources behind [`DocumentSource`]: a local file,
//! read synchronously, and a remote URL, fetched with a single GET.

use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;
use url::Url;

use crate::infrastructure::config::HttpSettings;
use crate::infrastructure::grader_error::{GraderError, GraderResult};
use crate::infrastructure::simple_http_client::HttpClient;

/// Default HTML file name, relative to the working directory
pub const HTML_FILE_DEFAULT: &str = "index.html";

/// Produces the raw text of one HTML document
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn load(&self) -> GraderResult<String>;

    /// Human readable origin, for logs
    fn origin(&self) -> String;
}

/// Document read from the local filesystem
#[derive(Debug, Clone)]
pub struct LocalFileSource {
    path: PathBuf,
}

impl LocalFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the whole file. The existence check comes first so the error
    /// names the missing path.
    pub fn read_local(&self) -> GraderResult<String> {
        if !self.path.exists() {
            return Err(GraderError::missing_resource(&self.path));
        }
        let bytes = std::fs::read(&self.path).map_err(|e| GraderError::io(&self.path, e))?;
        debug!("Read {} bytes from {}", bytes.len(), self.path.display());
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[async_trait]
impl DocumentSource for LocalFileSource {
    async fn load(&self) -> GraderResult<String> {
        self.read_local()
    }

    fn origin(&self) -> String {
        self.path.display().to_string()
    }
}

/// Document fetched over HTTP(S)
#[derive(Debug, Clone)]
pub struct RemoteUrlSource {
    url: Url,
    client: HttpClient,
}

impl RemoteUrlSource {
    pub fn new(url: &str, client: HttpClient) -> GraderResult<Self> {
        Ok(Self {
            url: parse_url(url)?,
            client,
        })
    }

    pub async fn fetch_remote(&self) -> GraderResult<String> {
        self.client.fetch_html_string(self.url.as_str()).await
    }
}

#[async_trait]
impl DocumentSource for RemoteUrlSource {
    async fn load(&self) -> GraderResult<String> {
        self.fetch_remote().await
    }

    fn origin(&self) -> String {
        self.url.to_string()
    }
}

/// Accept only absolute http/https URLs
pub fn parse_url(raw: &str) -> GraderResult<Url> {
    let url = Url::parse(raw).map_err(|e| GraderError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(GraderError::InvalidUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

/// Which document a run grades. Exactly one per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentInput {
    File(PathBuf),
    Url(String),
}

impl DocumentInput {
    /// A URL, when present, wins over the file path.
    pub fn resolve(url: Option<String>, file: impl Into<PathBuf>) -> Self {
        match url {
            Some(url) => Self::Url(url),
            None => Self::File(file.into()),
        }
    }

    /// Build the source. The HTTP client is only created for a URL, so
    /// file mode never depends on the `[http]` settings.
    pub fn into_source(self, http: &HttpSettings) -> GraderResult<Box<dyn DocumentSource>> {
        let source: Box<dyn DocumentSource> = match self {
            Self::File(path) => Box::new(LocalFileSource::new(path)),
            Self::Url(raw) => {
                let url = parse_url(&raw)?;
                let client = HttpClient::from_settings(http)?;
                Box::new(RemoteUrlSource { url, client })
            }
        };
        Ok(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    #[tokio::test]
    async fn test_local_file_source_reads_text() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"<html><title>t</title></html>").unwrap();

        let source = LocalFileSource::new(file.path());
        let text = source.load().await.unwrap();
        assert_eq!(text, "<html><title>t</title></html>");
    }

    #[tokio::test]
    async fn test_local_file_source_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let source = LocalFileSource::new(dir.path().join("index.html"));

        let err = source.load().await.unwrap_err();
        assert!(matches!(err, GraderError::MissingResource { .. }));
        assert!(err.to_string().contains("index.html"));
    }

    #[test]
    fn test_invalid_utf8_is_read_lossily() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"<p>caf\xe9</p>").unwrap();

        let text = LocalFileSource::new(file.path()).read_local().unwrap();
        assert!(text.starts_with("<p>caf"));
    }

    #[rstest]
    #[case("http://example.com", true)]
    #[case("https://example.com/path?q=1", true)]
    #[case("ftp://example.com/file", false)]
    #[case("example.com", false)]
    #[case("not a url", false)]
    fn test_parse_url(#[case] raw: &str, #[case] ok: bool) {
        assert_eq!(parse_url(raw).is_ok(), ok, "{raw}");
    }

    #[test]
    fn test_url_takes_precedence() {
        let input = DocumentInput::resolve(Some("http://example.com".to_string()), "index.html");
        assert_eq!(input, DocumentInput::Url("http://example.com".to_string()));

        let input = DocumentInput::resolve(None, "page.html");
        assert_eq!(input, DocumentInput::File(PathBuf::from("page.html")));
    }

    #[test]
    fn test_into_source_origin() {
        let http = HttpSettings::default();

        let source = DocumentInput::Url("https://example.com/".to_string())
            .into_source(&http)
            .unwrap();
        assert_eq!(source.origin(), "https://example.com/");

        let source = DocumentInput::File(PathBuf::from("index.html"))
            .into_source(&http)
            .unwrap();
        assert_eq!(source.origin(), "index.html");

        let err = DocumentInput::Url("mailto:a@b".to_string()).into_source(&http);
        assert!(matches!(err, Err(GraderError::InvalidUrl { .. })));
    }

    #[test]
    fn test_file_mode_ignores_http_settings() {
        let http = HttpSettings {
            user_agent: "bad\nagent".to_string(),
            ..HttpSettings::default()
        };

        let source = DocumentInput::File(PathBuf::from("index.html")).into_source(&http);
        assert!(source.is_ok());

        let err = DocumentInput::Url("https://example.com/".to_string()).into_source(&http);
        assert!(matches!(err, Err(GraderError::HttpClient { .. })));
    }
}
