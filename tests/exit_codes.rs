//! Exit codes and output of the CLI binary.

use std::process::{Command, Output};
use std::time::Duration;

use httptest::Server;

mod helpers;
use helpers::expect_answer;

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_taint_analyze"))
        .args(args)
        .env_remove("TAINT_ANALYZE_ENDPOINT")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run taint_analyze binary")
}

#[test]
fn test_rendered_report_exits_zero() {
    let server = Server::run();
    expect_answer(
        &server,
        "6080",
        200,
        r##"{"data":"<strong>result</strong>: safe\nSafe\n","title":"Safe","color":"#5eb95e"}"##,
        Duration::ZERO,
    );
    let endpoint = server.url("/").to_string();

    let output = run_cli(&["--code", "6080", "--endpoint", &endpoint, "--log-level", "error"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "Safe\n\nresult: safe\nSafe\n");
}

#[test]
fn test_html_output() {
    let server = Server::run();
    expect_answer(&server, "6080", 200, r#"{"data":"a\nb"}"#, Duration::ZERO);
    let endpoint = server.url("/").to_string();

    let output = run_cli(&[
        "--code",
        "6080",
        "--endpoint",
        &endpoint,
        "--output",
        "html",
        "--log-level",
        "error",
    ]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<p>a<br>b</p>"));
}

#[test]
fn test_alert_exits_one() {
    let server = Server::run();
    expect_answer(&server, "6080", 500, "", Duration::ZERO);
    let endpoint = server.url("/").to_string();

    let output = run_cli(&["--code", "6080", "--endpoint", &endpoint, "--log-level", "error"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Problem retrieving XML data"));
}

#[test]
fn test_missing_code_exits_one() {
    let output = run_cli(&["--endpoint", "http://127.0.0.1:1"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No code given"));
}

#[test]
fn test_invalid_arguments_exit_two() {
    // clap reports usage errors with exit code 2
    let output = run_cli(&["--mode", "vyper"]);
    assert_eq!(output.status.code(), Some(2));
}
