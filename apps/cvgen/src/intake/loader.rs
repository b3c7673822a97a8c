use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::intake::normalize::normalize_imported_json;
use crate::models::PartialResumeRecord;

// ────────────────────────────────────────────────────────────────────────────
// Trait
// ────────────────────────────────────────────────────────────────────────────

/// A one-shot source of import JSON. Each load reads once, with no retry.
#[async_trait]
pub trait TemplateSource: Send + Sync {
    /// Raw JSON as delivered by the source.
    async fn fetch_json(&self) -> Result<Value, AppError>;

    /// Fetches and normalizes.
    async fn load(&self) -> Result<PartialResumeRecord, AppError> {
        let raw = self.fetch_json().await?;
        normalize_imported_json(&raw)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Local file
// ────────────────────────────────────────────────────────────────────────────

pub struct FileSource {
    pub path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TemplateSource for FileSource {
    async fn fetch_json(&self) -> Result<Value, AppError> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        debug!(path = %self.path.display(), bytes = text.len(), "template file read");
        Ok(serde_json::from_str(&text)?)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Remote URL
// ────────────────────────────────────────────────────────────────────────────

pub struct UrlSource {
    client: reqwest::Client,
    pub url: String,
}

impl UrlSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl TemplateSource for UrlSource {
    async fn fetch_json(&self) -> Result<Value, AppError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Fetch {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let text = response.text().await?;
        info!(url = %self.url, bytes = text.len(), "template fetched");
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_json(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_file_source_normalizes() {
        let file = temp_json(r#"{ "personal": { "name": "Ada" }, "skills": { "Lang": "Rust, Go" } }"#);
        let partial = FileSource::new(file.path()).load().await.unwrap();
        assert_eq!(partial.personal.unwrap().name.as_deref(), Some("Ada"));
        assert_eq!(partial.skills.unwrap().get("Lang").unwrap(), ["Rust", "Go"]);
    }

    #[tokio::test]
    async fn test_file_source_rejects_malformed_json() {
        let file = temp_json("{ not json");
        let err = FileSource::new(file.path()).load().await.unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
        assert!(err.to_string().starts_with("Invalid JSON file"));
    }

    #[tokio::test]
    async fn test_file_source_rejects_non_object() {
        let file = temp_json("[1, 2, 3]");
        let err = FileSource::new(file.path()).load().await.unwrap_err();
        assert!(matches!(err, AppError::InvalidFormat));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileSource::new(dir.path().join("absent.json"))
            .load()
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    /// Serves one canned HTTP response on a loopback port and returns its URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });
        format!("http://{addr}/template.json")
    }

    #[tokio::test]
    async fn test_url_source_non_success_status() {
        let url = serve_once("404 Not Found", "").await;
        let err = UrlSource::new(url, Duration::from_secs(5))
            .unwrap()
            .load()
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Fetch { status: 404, .. }));
        assert_eq!(err.to_string(), "Failed to fetch template: 404 Not Found");
    }

    #[tokio::test]
    async fn test_url_source_loads_json_body() {
        let url = serve_once("200 OK", r##"{"themeColor":"#0d9488"}"##).await;
        let partial = UrlSource::new(url, Duration::from_secs(5))
            .unwrap()
            .load()
            .await
            .unwrap();
        assert_eq!(partial.theme_color.as_deref(), Some("#0d9488"));
    }

    #[tokio::test]
    async fn test_url_source_connection_failure_is_http_error() {
        // Port 9 on loopback is the discard port and is not expected to be listening.
        let source = UrlSource::new("http://127.0.0.1:9/template.json", Duration::from_secs(2)).unwrap();
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, AppError::Http(_)));
    }
}
