//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization and analysis exchanges
//! - Error kind classification (which failures alert, which fault silently)
//! - Transport error categorization from reqwest error chains

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{AnalysisError, ErrorKind, InitializationError, TransportErrorType};
