// Shared test helpers for mock analysis services.
//
// Every expectation matches on the `code` multipart field so a test can tell
// overlapping submissions apart on the server side.

use std::sync::Arc;
use std::time::Duration;

use httptest::{all_of, matchers::*, responders::*, Expectation, Server};
use taint_analyze::AnalysisClient;

/// Builds a client posting to the mock server.
#[allow(dead_code)] // Used by other test files
pub fn client_for(server: &Server) -> AnalysisClient {
    let base = server.url("/").to_string();
    AnalysisClient::new(Arc::new(reqwest::Client::new()), &base)
        .expect("mock server URL should be a valid base")
}

/// Regex matching a text multipart part with exactly this value.
pub fn part_pattern(name: &str, value: &str) -> String {
    format!(
        "name=\"{}\"\r\n\r\n{}\r\n",
        regex::escape(name),
        regex::escape(value)
    )
}

/// Expects one POST carrying `code` and answers it after `delay`.
#[allow(dead_code)] // Not every test file answers with a delay
pub fn expect_answer(server: &Server, code: &str, status: u16, body: &str, delay: Duration) {
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/api/analyze"),
            request::body(matches(part_pattern("code", code))),
        ])
        .times(1)
        .respond_with(delay_and_then(
            delay,
            status_code(status)
                .insert_header("Content-Type", "application/json")
                .body(body.to_string()),
        )),
    );
}
