//! Transport error categorization.

use super::types::TransportErrorType;

/// Categorizes a `reqwest::Error` into a `TransportErrorType`.
///
/// Status errors never reach this function: the client checks the status
/// code itself and reports it as [`AnalysisError::Status`](super::AnalysisError::Status).
pub fn categorize_reqwest_error(error: &reqwest::Error) -> TransportErrorType {
    if error.is_builder() {
        TransportErrorType::HttpRequestBuilderError
    } else if error.is_redirect() {
        TransportErrorType::HttpRequestRedirectError
    } else if error.is_timeout() {
        TransportErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        TransportErrorType::HttpRequestConnectError
    } else if error.is_body() {
        TransportErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        TransportErrorType::HttpRequestDecodeError
    } else if error.is_request() {
        TransportErrorType::HttpRequestRequestError
    } else {
        TransportErrorType::HttpRequestOtherError
    }
}
