/// Match client: the single point of contact with the external resume matching service.
///
/// The service owns parsing, scoring and ranking. This module only ships the upload form
/// and decodes the answer. One attempt per submission, no retry.
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::analysis::AnalysisResult;
use crate::models::upload::UploadRequest;

#[cfg(test)]
pub mod testing;

const UPLOAD_PATH: &str = "/upload";

/// Shown when the service gives no usable error text.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to process resumes. Please try again.";

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Matching service error (status {status}): {}", .message.as_deref().unwrap_or("no details"))]
    Api {
        status: u16,
        message: Option<String>,
    },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl MatchError {
    /// Text for the inline error banner: the service's own words when it sent any.
    pub fn user_message(&self) -> String {
        match self {
            MatchError::Api {
                message: Some(message),
                ..
            } => message.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ServiceError {
    error: String,
}

/// Seam between the upload page and the matching service.
///
/// Carried in `AppState` as `Arc<dyn MatchService>`.
#[async_trait]
pub trait MatchService: Send + Sync {
    async fn analyze(&self, request: UploadRequest) -> Result<AnalysisResult, MatchError>;
}

/// `MatchService` backed by `POST <base_url>/upload`.
#[derive(Clone)]
pub struct HttpMatchClient {
    client: Client,
    base_url: String,
}

impl HttpMatchClient {
    /// No request timeout is set; the call waits for the transport to give up.
    pub fn new(base_url: impl Into<String>) -> Result<Self, MatchError> {
        Ok(Self::with_client(Client::builder().build()?, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn upload_url(&self) -> String {
        format!("{}{}", self.base_url, UPLOAD_PATH)
    }
}

#[async_trait]
impl MatchService for HttpMatchClient {
    async fn analyze(&self, request: UploadRequest) -> Result<AnalysisResult, MatchError> {
        let file_count = request.files.len();
        let form = build_form(request)?;

        debug!("posting {} resume(s) to {}", file_count, self.upload_url());

        let response = self
            .client
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ServiceError>(&body)
                .ok()
                .map(|e| e.error)
                .filter(|m| !m.trim().is_empty());
            warn!("matching service returned {}: {}", status, body);
            return Err(MatchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let result: AnalysisResult = serde_json::from_str(&body)?;
        debug!(
            "matching service processed {} resume(s), returned {} candidate(s)",
            result.total_processed,
            result.candidates.len()
        );
        Ok(result)
    }
}

/// Lays the request out as the service expects: `files` repeated, then one part per field.
fn build_form(request: UploadRequest) -> Result<Form, MatchError> {
    let mut form = Form::new();
    for file in request.files {
        let content_type = file.content_type();
        let length = file.bytes.len() as u64;
        let part = Part::stream_with_length(file.bytes, length)
            .file_name(file.file_name)
            .mime_str(content_type)?;
        form = form.part("files", part);
    }

    Ok(form
        .text("job_description", request.job_description)
        .text("roles_responsibilities", request.roles_responsibilities)
        .text("skills_requirement", request.skills_requirement)
        .text("cutoff_percentage", request.cutoff_percentage.to_string())
        .text("required_candidates", request.required_candidates.to_string()))
}
