//! taint_analyze library: client for the EVM taint analysis service
//!
//! Submits Solidity sources or runtime bytecode together with call data to the
//! service's `/api/analyze` endpoint and renders the overflow report it sends
//! back, either into an HTML result region or as plain text.
//!
//! # Example
//!
//! ```no_run
//! use taint_analyze::{run_analysis, Config, Mode};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     mode: Mode::Bytecode,
//!     code: Some("6080604052".to_string()),
//!     input: "b79e70ed".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_analysis(config).await?;
//! println!("{:?}: {}", report.state, report.text.unwrap_or_default());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod client;
pub mod config;
pub mod display;
pub mod error_handling;
pub mod initialization;
pub mod models;
pub mod render;
pub mod session;

// Re-export public API
pub use client::AnalysisClient;
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use display::{PageVariant, ResultPanel};
pub use error_handling::{AnalysisError, ErrorKind, InitializationError};
pub use models::{AnalysisForm, AnalysisRequest, AnalysisResponse, Mode};
pub use run::{run_analysis, AnalysisReport};
pub use session::{AnalysisSession, ResubmitPolicy, SubmissionState};

// Internal run module (one submission driven from a configuration)
mod run {
    use std::time::Instant;

    use anyhow::{bail, Context, Result};
    use log::info;

    use crate::client::AnalysisClient;
    use crate::config::{Config, DEMO_CODE, DEMO_INPUT};
    use crate::display::{PageVariant, ResultPanel};
    use crate::initialization::init_client;
    use crate::models::AnalysisRequest;
    use crate::render::render_plain_text;
    use crate::session::{AnalysisSession, ResubmitPolicy, SubmissionState};

    /// Result of one analysis run.
    #[derive(Debug, Clone)]
    pub struct AnalysisReport {
        /// Terminal state of the submission
        pub state: SubmissionState,
        /// Result region HTML after completion (the placeholder if nothing rendered)
        pub html: String,
        /// Plain text rendition of the report, when one was rendered
        pub text: Option<String>,
        /// Title sent by the service, if any
        pub title: Option<String>,
        /// Whether the service flagged the analysis as failed
        pub service_failure: bool,
        /// Alerts raised during the run
        pub alerts: Vec<String>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Builds the request described by `config`.
    ///
    /// # Errors
    ///
    /// Fails if no code source is given or the code file cannot be read.
    pub(crate) fn request_from_config(config: &Config) -> Result<AnalysisRequest> {
        let request = if config.demo {
            AnalysisRequest::new(config.mode, DEMO_CODE, DEMO_INPUT)
        } else {
            let code = match (&config.code, &config.code_file) {
                (Some(code), _) => code.clone(),
                (None, Some(path)) => std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read code file {}", path.display()))?,
                (None, None) => bail!("No code given: use --code, --code-file or --demo"),
            };
            AnalysisRequest::new(config.mode, code, config.input.clone())
        };

        Ok(match &config.name {
            Some(name) => request.with_contract_name(name.clone()),
            None => request,
        })
    }

    /// Runs one analysis with the provided configuration.
    ///
    /// Submits the request described by `config`, waits for it to finish and
    /// reports what the result region ended up showing.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built, the HTTP client or
    /// endpoint cannot be initialized, or the submission task panics. A
    /// failed exchange is not an error: it ends in `Alerted` or `Faulted`.
    pub async fn run_analysis(config: Config) -> Result<AnalysisReport> {
        let start = Instant::now();
        let request = request_from_config(&config)?;

        let http = init_client(&config).context("Failed to initialize HTTP client")?;
        let client = AnalysisClient::new(http, &config.endpoint)
            .with_context(|| format!("Invalid endpoint {}", config.endpoint))?;
        info!("Analyzing {} with {}", config.mode, client.endpoint());

        let session = AnalysisSession::new(
            client,
            ResultPanel::new(PageVariant::Plain),
            ResubmitPolicy::default(),
        );

        let state = session
            .submit(request)
            .await
            .context("Analysis task failed")?;
        let panel = session.snapshot();

        let (text, title, service_failure) = match state {
            SubmissionState::Rendered => {
                let response = panel
                    .last_response()
                    .context("Rendered submission left no response")?;
                (
                    Some(render_plain_text(response)),
                    response.title.clone(),
                    response.is_failure(),
                )
            }
            _ => (None, None, false),
        };

        Ok(AnalysisReport {
            state,
            html: panel.result_html().to_string(),
            text,
            title,
            service_failure,
            alerts: panel.alerts().to_vec(),
            elapsed_seconds: start.elapsed().as_secs_f64(),
        })
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::models::Mode;
        use std::io::Write;

        #[test]
        fn test_request_from_demo() {
            let config = Config {
                demo: true,
                ..Default::default()
            };
            let request = request_from_config(&config).unwrap();
            assert_eq!(request.mode, Mode::Bytecode);
            assert!(request.code.starts_with("6080604052"));
            assert!(request.input.starts_with("b79e70ed"));
            assert_eq!(request.input.len(), 8 + 2 * 64);
        }

        #[test]
        fn test_request_from_code_file() {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            write!(file, "pragma solidity ^0.4.24;\ncontract A {{}}\n").unwrap();
            let config = Config {
                mode: Mode::Solidity,
                code_file: Some(file.path().to_path_buf()),
                input: "00".to_string(),
                name: Some("A".to_string()),
                ..Default::default()
            };
            let request = request_from_config(&config).unwrap();
            assert_eq!(request.code, "pragma solidity ^0.4.24;\ncontract A {}\n");
            assert_eq!(request.input, "00");
            assert_eq!(request.contract_name.as_deref(), Some("A"));
        }

        #[test]
        fn test_request_without_code_fails() {
            let error = request_from_config(&Config::default()).unwrap_err();
            assert!(error.to_string().contains("No code given"));
        }

        #[test]
        fn test_request_from_missing_file_fails() {
            let config = Config {
                code_file: Some("/nonexistent/contract.bin".into()),
                ..Default::default()
            };
            let error = request_from_config(&config).unwrap_err();
            assert!(error.to_string().contains("Failed to read code file"));
        }
    }
}
