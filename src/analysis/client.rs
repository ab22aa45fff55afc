//! HTTP client for the transcript analysis service.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, info, warn};
use url::Url;

use super::error::AnalysisError;
use super::types::{AnalysisResult, ServiceHealth, TranscriptSubmission};
use super::TranscriptAnalyzer;
use crate::config::AnalysisConfig;

/// Default path of the transcript endpoint.
pub const DEFAULT_TRANSCRIPT_PATH: &str = "/api/v1/transcript";

/// Default path of the health endpoint.
pub const DEFAULT_HEALTH_PATH: &str = "/health";

/// HTTP client for the analysis API.
///
/// # Example
///
/// ```rust,no_run
/// use incident_console::analysis::{AnalysisClient, TranscriptAnalyzer, TranscriptSubmission};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AnalysisClient::new("http://localhost:8000")?;
/// let result = client
///     .analyze(&TranscriptSubmission::new("Resident fell in the lounge.", None))
///     .await?;
/// println!("{} emails drafted", result.emails.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    base_url: Url,
    transcript_path: String,
    health_path: String,
    http: reqwest::Client,
}

/// Error body returned by the service (`{"detail": ...}`).
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

impl AnalysisClient {
    /// Create a client with default paths and a default `reqwest` client.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, AnalysisError> {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a client with a custom `reqwest` client.
    pub fn with_client(
        base_url: impl AsRef<str>,
        http: reqwest::Client,
    ) -> Result<Self, AnalysisError> {
        Ok(Self {
            base_url: normalize_base(base_url.as_ref())?,
            transcript_path: DEFAULT_TRANSCRIPT_PATH.to_string(),
            health_path: DEFAULT_HEALTH_PATH.to_string(),
            http,
        })
    }

    /// Build a client from configuration, applying the request timeout.
    pub fn from_config(config: &AnalysisConfig) -> Result<Self, AnalysisError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self::with_client(&config.base_url, http)?
            .with_paths(&config.transcript_path, &config.health_path))
    }

    /// Override the endpoint paths.
    #[must_use]
    pub fn with_paths(mut self, transcript: &str, health: &str) -> Self {
        self.transcript_path = transcript.to_string();
        self.health_path = health.to_string();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url, AnalysisError> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, AnalysisError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".into());
        let message = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(ErrorBody {
                detail: serde_json::Value::String(detail),
            }) => detail,
            Ok(ErrorBody { detail }) => detail.to_string(),
            Err(_) => body,
        };
        Err(AnalysisError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// Parse the base URL and make sure relative joins keep any path prefix.
fn normalize_base(base_url: &str) -> Result<Url, AnalysisError> {
    let mut url = Url::parse(base_url.trim())?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Multipart form the transcript endpoint expects.
fn build_form(submission: &TranscriptSubmission) -> Result<Form, AnalysisError> {
    let mut form = Form::new().text("text", submission.text.clone());
    if let Some(file) = &submission.file {
        let part = Part::bytes(file.bytes.to_vec())
            .file_name(file.name.clone())
            .mime_str(&file.content_type)?;
        form = form.part("file", part);
    }
    Ok(form)
}

#[async_trait]
impl TranscriptAnalyzer for AnalysisClient {
    async fn analyze(
        &self,
        submission: &TranscriptSubmission,
    ) -> Result<AnalysisResult, AnalysisError> {
        let url = self.url(&self.transcript_path)?;
        let form = build_form(submission)?;

        debug!(
            url = %url,
            text_length = submission.text.len(),
            file = ?submission.file.as_ref().map(|f| &f.name),
            "Submitting transcript"
        );

        let started = Instant::now();
        let response = self.http.post(url).multipart(form).send().await?;
        let result = Self::handle_response::<AnalysisResult>(response).await;

        match &result {
            Ok(analysis) => info!(
                name: "analysis.request.completed",
                elapsed_ms = started.elapsed().as_millis() as u64,
                emails = analysis.emails.len(),
                policies = analysis.full_policy_texts.len(),
                policy_ids = ?analysis.policy_ids,
                "Transcript analysis completed"
            ),
            Err(e) => warn!(
                name: "analysis.request.failed",
                elapsed_ms = started.elapsed().as_millis() as u64,
                error = %e,
                "Transcript analysis failed"
            ),
        }
        result
    }

    async fn health(&self) -> Result<ServiceHealth, AnalysisError> {
        let response = self.http.get(self.url(&self.health_path)?).send().await?;
        Self::handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_keeps_prefix() {
        let client = AnalysisClient::new("http://analysis.local/svc").unwrap();
        assert_eq!(
            client.url(DEFAULT_TRANSCRIPT_PATH).unwrap().as_str(),
            "http://analysis.local/svc/api/v1/transcript"
        );

        let client = AnalysisClient::new("http://localhost:8000").unwrap();
        assert_eq!(
            client.url(DEFAULT_HEALTH_PATH).unwrap().as_str(),
            "http://localhost:8000/health"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            AnalysisClient::new("not a url"),
            Err(AnalysisError::InvalidUrl(_))
        ));
    }
}
