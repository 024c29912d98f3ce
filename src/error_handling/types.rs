//! Error type definitions.
//!
//! This module defines all error types used throughout the client.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failure of a single analysis exchange.
///
/// Every variant is terminal for its submission: nothing is retried, the user
/// resubmits by hand.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The request never produced a response (connect, timeout, body).
    #[error("Analysis request failed: {0}")]
    Transport(#[from] ReqwestError),

    /// The service answered with anything other than 200.
    #[error("Analysis service returned {0}")]
    Status(StatusCode),

    /// A 200 response whose body is not the expected JSON object.
    #[error("Malformed analysis response: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// A form element the submission reads from does not exist.
    #[error("Missing form element: {0}")]
    MissingElement(String),

    /// The configured base URL cannot be joined with the analysis path.
    #[error("Invalid analysis endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

/// Coarse classification of an [`AnalysisError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorKind {
    Transport,
    Status,
    MalformedBody,
    MissingElement,
    InvalidEndpoint,
}

impl AnalysisError {
    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::Transport(_) => ErrorKind::Transport,
            AnalysisError::Status(_) => ErrorKind::Status,
            AnalysisError::MalformedBody(_) => ErrorKind::MalformedBody,
            AnalysisError::MissingElement(_) => ErrorKind::MissingElement,
            AnalysisError::InvalidEndpoint(_) => ErrorKind::InvalidEndpoint,
        }
    }

    /// Whether the page would answer this failure with the blocking alert.
    ///
    /// Only a finished exchange that was not a 200 (or never completed) takes
    /// the alert branch. A bad body or a missing element faults silently.
    pub fn raises_alert(&self) -> bool {
        matches!(self.kind(), ErrorKind::Transport | ErrorKind::Status)
    }
}

/// Transport-level failure categories, used for log messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum TransportErrorType {
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestRequestError,
    HttpRequestOtherError,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Transport => "transport error",
            ErrorKind::Status => "unexpected status",
            ErrorKind::MalformedBody => "malformed response body",
            ErrorKind::MissingElement => "missing form element",
            ErrorKind::InvalidEndpoint => "invalid endpoint",
        }
    }
}

impl std::fmt::Display for TransportErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TransportErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportErrorType::HttpRequestBuilderError => "HTTP request builder error",
            TransportErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            TransportErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            TransportErrorType::HttpRequestConnectError => "HTTP request connect error",
            TransportErrorType::HttpRequestBodyError => "HTTP request body error",
            TransportErrorType::HttpRequestDecodeError => "HTTP request decode error",
            TransportErrorType::HttpRequestRequestError => "HTTP request error",
            TransportErrorType::HttpRequestOtherError => "HTTP request other error",
        }
    }
}
