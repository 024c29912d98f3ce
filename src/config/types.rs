//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, ENDPOINT_ENV_VAR};
use crate::models::Mode;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How the final report is written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Title and report text with markup stripped
    Text,
    /// The HTML fragment the result region would hold
    Html,
}

/// Client configuration.
///
/// Parsed from the command line by the binary, or built programmatically
/// with `..Default::default()`.
///
/// # Examples
///
/// ```no_run
/// use taint_analyze::{Config, Mode};
///
/// let config = Config {
///     mode: Mode::Bytecode,
///     code: Some("6080604052".to_string()),
///     input: "b79e70ed".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taint_analyze",
    version,
    about = "Submit a contract to the taint analysis service and print the overflow report"
)]
pub struct Config {
    /// What the code argument holds
    #[arg(long, value_enum, default_value_t = Mode::Bytecode)]
    pub mode: Mode,

    /// Solidity source or runtime bytecode (hex)
    #[arg(long, conflicts_with_all = ["code_file", "demo"])]
    pub code: Option<String>,

    /// Read the code from a file instead
    #[arg(long, conflicts_with = "demo")]
    pub code_file: Option<PathBuf>,

    /// Call data passed to the contract (hex, selector first)
    #[arg(long, default_value = "", conflicts_with = "demo")]
    pub input: String,

    /// Contract name to pick from the compiled Solidity source
    #[arg(long)]
    pub name: Option<String>,

    /// Analyze the bundled overflow demo contract
    #[arg(long)]
    pub demo: bool,

    /// Base URL of the analysis service
    #[arg(long, env = ENDPOINT_ENV_VAR, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Report output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::Bytecode,
            code: None,
            code_file: None,
            input: String::new(),
            name: None,
            demo: false,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            output: OutputFormat::Text,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
