//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `taint_analyze` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::process;

use taint_analyze::initialization::init_logger_with;
use taint_analyze::{run_analysis, Config, OutputFormat, SubmissionState};

#[tokio::main]
async fn main() -> Result<()> {
    // The endpoint can come from TAINT_ANALYZE_ENDPOINT in a .env file, looked
    // up in the current directory first, then next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let output = config.output;
    match run_analysis(config).await {
        Ok(report) => match report.state {
            SubmissionState::Rendered => {
                match output {
                    OutputFormat::Html => println!("{}", report.html),
                    OutputFormat::Text => print!("{}", report.text.unwrap_or_default()),
                }
                if report.service_failure {
                    eprintln!(
                        "{} the service could not analyze this input ({:.1}s)",
                        "warning:".yellow().bold(),
                        report.elapsed_seconds
                    );
                } else {
                    eprintln!(
                        "{} {} ({:.1}s)",
                        "done:".green().bold(),
                        report.title.as_deref().unwrap_or("report received"),
                        report.elapsed_seconds
                    );
                }
                Ok(())
            }
            state => {
                for alert in &report.alerts {
                    eprintln!("{} {}", "alert:".red().bold(), alert);
                }
                if report.alerts.is_empty() {
                    eprintln!(
                        "{} analysis ended without a report ({:?})",
                        "error:".red().bold(),
                        state
                    );
                }
                process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("taint_analyze error: {:#}", e);
            process::exit(1);
        }
    }
}
