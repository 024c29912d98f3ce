//! The analysis exchange: one multipart POST, one JSON answer.

use std::sync::Arc;

use log::{debug, warn};
use reqwest::multipart::Form;
use reqwest::StatusCode;
use url::Url;

use crate::config::ANALYZE_PATH;
use crate::error_handling::{categorize_reqwest_error, AnalysisError};
use crate::models::{AnalysisRequest, AnalysisResponse};

/// Client bound to one analysis service.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: Arc<reqwest::Client>,
    endpoint: Url,
}

impl AnalysisClient {
    /// Creates a client posting to `<origin of base_url>/api/analyze`.
    ///
    /// The analysis path is absolute, so any path on `base_url` is replaced.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidEndpoint` if `base_url` is not a URL.
    pub fn new(http: Arc<reqwest::Client>, base_url: &str) -> Result<Self, AnalysisError> {
        let endpoint = Url::parse(base_url)?.join(ANALYZE_PATH)?;
        Ok(Self { http, endpoint })
    }

    /// The full URL requests are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Submits one request and decodes the answer.
    ///
    /// Only status 200 counts as success. The whole exchange is bounded by
    /// the HTTP client's timeout; nothing is retried.
    ///
    /// # Errors
    ///
    /// - `Transport` if the request could not be sent or the body not read
    /// - `Status` for any status other than 200
    /// - `MalformedBody` if a 200 body is not a JSON object with `data`
    pub async fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> Result<AnalysisResponse, AnalysisError> {
        debug!(
            "Submitting {} analysis ({} bytes of code, {} bytes of input) to {}",
            request.mode,
            request.code.len(),
            request.input.len(),
            self.endpoint
        );

        let response = self
            .http
            .post(self.endpoint.clone())
            .multipart(build_form(request))
            .send()
            .await
            .map_err(|e| {
                warn!("{} for {}: {}", categorize_reqwest_error(&e), self.endpoint, e);
                AnalysisError::Transport(e)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Analysis service at {} answered {}", self.endpoint, status);
            return Err(AnalysisError::Status(status));
        }

        let body = response.text().await?;
        let decoded = AnalysisResponse::from_json(&body)?;
        debug!(
            "Received {} report ({} bytes)",
            if decoded.is_report() { "colored" } else { "plain" },
            decoded.data.len()
        );
        Ok(decoded)
    }
}

/// Builds the multipart payload, one text part per request field.
pub fn build_form(request: &AnalysisRequest) -> Form {
    request
        .fields()
        .into_iter()
        .fold(Form::new(), |form, (name, value)| form.text(name, value))
}
