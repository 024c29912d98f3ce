//! Tests for CLI argument parsing.

use clap::Parser;
use std::path::PathBuf;
use taint_analyze::{Config, LogFormat, LogLevel, Mode, OutputFormat};

#[test]
fn test_cli_defaults() {
    let config = Config::try_parse_from(["taint_analyze", "--demo"]).expect("Should parse --demo");

    assert!(config.demo);
    assert_eq!(config.mode, Mode::Bytecode);
    assert_eq!(config.output, OutputFormat::Text);
    assert_eq!(config.timeout_seconds, 60);
    // LogLevel doesn't implement PartialEq, so compare via conversion
    assert_eq!(
        log::LevelFilter::from(config.log_level.clone()),
        log::LevelFilter::from(LogLevel::Info)
    );
    match config.log_format {
        LogFormat::Plain => {}
        LogFormat::Json => panic!("Should be Plain format"),
    }
}

#[test]
fn test_cli_full_options() {
    let args = vec![
        "taint_analyze",
        "--mode",
        "solidity",
        "--code-file",
        "contracts/Token.sol",
        "--input",
        "a9059cbb",
        "--name",
        "Token",
        "--endpoint",
        "https://taint.example.org",
        "--timeout-seconds",
        "120",
        "--output",
        "html",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ];
    let config = Config::try_parse_from(args).expect("Should parse all options");

    assert_eq!(config.mode, Mode::Solidity);
    assert_eq!(config.code_file, Some(PathBuf::from("contracts/Token.sol")));
    assert_eq!(config.input, "a9059cbb");
    assert_eq!(config.name.as_deref(), Some("Token"));
    assert_eq!(config.endpoint, "https://taint.example.org");
    assert_eq!(config.timeout_seconds, 120);
    assert_eq!(config.output, OutputFormat::Html);
    assert_eq!(
        log::LevelFilter::from(config.log_level.clone()),
        log::LevelFilter::Debug
    );
    assert!(matches!(config.log_format, LogFormat::Json));
}

#[test]
fn test_cli_empty_input_is_accepted() {
    let config = Config::try_parse_from(["taint_analyze", "--code", "", "--input", ""])
        .expect("Empty values are forwarded, not rejected");
    assert_eq!(config.code.as_deref(), Some(""));
    assert_eq!(config.input, "");
}

#[test]
fn test_cli_code_and_code_file_conflict() {
    let result =
        Config::try_parse_from(["taint_analyze", "--code", "60", "--code-file", "a.bin"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_demo_and_input_conflict() {
    let result = Config::try_parse_from(["taint_analyze", "--demo", "--input", "00"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_invalid_timeout() {
    let result = Config::try_parse_from(["taint_analyze", "--demo", "--timeout-seconds", "soon"]);
    assert!(result.is_err());
}
