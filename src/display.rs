//! The page state a submission writes to: the result region, the status
//! labels of the submit controls, and the alerts raised so far.

use std::collections::HashMap;

use log::error;
use strum::IntoEnumIterator;

use crate::config::{ALERT_MESSAGE, ANALYZING_TEXT, DEFAULT_LABEL_TEXT};
use crate::error_handling::AnalysisError;
use crate::models::{AnalysisResponse, Mode};
use crate::render::{analyzing_placeholder, render_response};
use crate::session::SubmissionState;

/// Which page behavior the panel follows while a request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageVariant {
    /// The result region shows the placeholder until a report replaces it.
    /// Labels are never touched.
    #[default]
    Plain,
    /// The submitting mode's label shows the placeholder text and gets its
    /// original text back once no request for that mode is left in flight.
    Report,
}

#[derive(Debug, Clone)]
struct StatusLabel {
    original: String,
    current: String,
    in_flight: usize,
}

impl StatusLabel {
    fn new(text: &str) -> Self {
        Self {
            original: text.to_string(),
            current: text.to_string(),
            in_flight: 0,
        }
    }
}

/// In-memory rendition of the display region and its labels.
///
/// Writes are unconditional: whichever completion is applied last owns the
/// region.
#[derive(Debug, Clone)]
pub struct ResultPanel {
    variant: PageVariant,
    result_html: String,
    last_response: Option<AnalysisResponse>,
    labels: HashMap<Mode, StatusLabel>,
    alerts: Vec<String>,
}

impl ResultPanel {
    /// An empty region with every mode's label reading "Analyze".
    pub fn new(variant: PageVariant) -> Self {
        Self {
            variant,
            result_html: String::new(),
            last_response: None,
            labels: Mode::iter()
                .map(|mode| (mode, StatusLabel::new(DEFAULT_LABEL_TEXT)))
                .collect(),
            alerts: Vec::new(),
        }
    }

    /// Replaces the original text of `mode`'s label.
    pub fn with_label(mut self, mode: Mode, text: &str) -> Self {
        self.labels.insert(mode, StatusLabel::new(text));
        self
    }

    pub fn variant(&self) -> PageVariant {
        self.variant
    }

    /// Current HTML of the result region.
    pub fn result_html(&self) -> &str {
        &self.result_html
    }

    /// The response currently rendered in the region, if any.
    pub fn last_response(&self) -> Option<&AnalysisResponse> {
        self.last_response.as_ref()
    }

    /// Current text of `mode`'s status label.
    pub fn label_text(&self, mode: Mode) -> &str {
        self.labels
            .get(&mode)
            .map(|label| label.current.as_str())
            .unwrap_or_default()
    }

    /// Messages of every alert raised, oldest first.
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Writes the in-flight placeholder for a new `mode` submission.
    pub fn begin(&mut self, mode: Mode) {
        match self.variant {
            PageVariant::Plain => {
                self.result_html = analyzing_placeholder();
                self.last_response = None;
            }
            PageVariant::Report => {
                let label = self.label_mut(mode);
                label.current = ANALYZING_TEXT.to_string();
                label.in_flight += 1;
            }
        }
    }

    /// Applies the outcome of a finished `mode` submission.
    ///
    /// A response is rendered into the region. A transport or status failure
    /// raises the alert and leaves the region as it is. Any other failure is
    /// logged and otherwise leaves no trace.
    pub fn finish(
        &mut self,
        mode: Mode,
        outcome: Result<AnalysisResponse, AnalysisError>,
    ) -> SubmissionState {
        self.release(mode);
        match outcome {
            Ok(response) => {
                self.result_html = render_response(&response);
                self.last_response = Some(response);
                SubmissionState::Rendered
            }
            Err(e) if e.raises_alert() => {
                self.alert(ALERT_MESSAGE);
                SubmissionState::Alerted
            }
            Err(e) => {
                error!("{} submission faulted: {}", mode, e);
                SubmissionState::Faulted
            }
        }
    }

    /// Drops a submission that will never complete (superseded), without
    /// touching the region.
    pub fn abandon(&mut self, mode: Mode) {
        self.release(mode);
    }

    /// Raises a blocking alert.
    pub fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn release(&mut self, mode: Mode) {
        if self.variant != PageVariant::Report {
            return;
        }
        let label = self.label_mut(mode);
        label.in_flight = label.in_flight.saturating_sub(1);
        if label.in_flight == 0 {
            label.current = label.original.clone();
        }
    }

    fn label_mut(&mut self, mode: Mode) -> &mut StatusLabel {
        self.labels
            .entry(mode)
            .or_insert_with(|| StatusLabel::new(DEFAULT_LABEL_TEXT))
    }
}

impl Default for ResultPanel {
    fn default() -> Self {
        Self::new(PageVariant::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn ok(data: &str) -> Result<AnalysisResponse, AnalysisError> {
        Ok(AnalysisResponse::from_json(&serde_json::json!({ "data": data }).to_string()).unwrap())
    }

    #[test]
    fn test_plain_begin_writes_placeholder() {
        let mut panel = ResultPanel::new(PageVariant::Plain);
        panel.begin(Mode::Bytecode);
        assert_eq!(panel.result_html(), analyzing_placeholder());
        assert_eq!(panel.label_text(Mode::Bytecode), "Analyze");
    }

    #[test]
    fn test_plain_success_renders() {
        let mut panel = ResultPanel::new(PageVariant::Plain);
        panel.begin(Mode::Bytecode);
        let state = panel.finish(Mode::Bytecode, ok("line1\nline2"));
        assert_eq!(state, SubmissionState::Rendered);
        assert!(panel.result_html().contains("line1<br>line2"));
        assert!(panel.alerts().is_empty());
    }

    #[test]
    fn test_plain_failure_keeps_placeholder() {
        let mut panel = ResultPanel::new(PageVariant::Plain);
        panel.begin(Mode::Solidity);
        let state = panel.finish(
            Mode::Solidity,
            Err(AnalysisError::Status(StatusCode::INTERNAL_SERVER_ERROR)),
        );
        assert_eq!(state, SubmissionState::Alerted);
        assert_eq!(panel.alerts(), ["Problem retrieving XML data"]);
        assert_eq!(panel.result_html(), analyzing_placeholder());
    }

    #[test]
    fn test_report_variant_sets_and_restores_label() {
        let mut panel = ResultPanel::new(PageVariant::Report).with_label(Mode::Solidity, "Go");
        panel.begin(Mode::Solidity);
        assert_eq!(panel.label_text(Mode::Solidity), "Analyzing");
        assert_eq!(panel.label_text(Mode::Bytecode), "Analyze");
        assert_eq!(panel.result_html(), "");

        panel.finish(
            Mode::Solidity,
            Err(AnalysisError::Status(StatusCode::NOT_FOUND)),
        );
        assert_eq!(panel.label_text(Mode::Solidity), "Go");
        assert_eq!(panel.alerts().len(), 1);
    }

    #[test]
    fn test_report_label_waits_for_last_in_flight() {
        let mut panel = ResultPanel::new(PageVariant::Report);
        panel.begin(Mode::Bytecode);
        panel.begin(Mode::Bytecode);
        panel.finish(Mode::Bytecode, ok("first"));
        assert_eq!(panel.label_text(Mode::Bytecode), "Analyzing");
        panel.abandon(Mode::Bytecode);
        assert_eq!(panel.label_text(Mode::Bytecode), "Analyze");
    }

    #[test]
    fn test_malformed_body_faults_silently() {
        let mut panel = ResultPanel::new(PageVariant::Plain);
        panel.begin(Mode::Bytecode);
        let parse_error = serde_json::from_str::<AnalysisResponse>("nope").unwrap_err();
        let state = panel.finish(Mode::Bytecode, Err(parse_error.into()));
        assert_eq!(state, SubmissionState::Faulted);
        assert!(panel.alerts().is_empty());
        assert_eq!(panel.result_html(), analyzing_placeholder());
    }

    #[test]
    fn test_last_write_wins() {
        let mut panel = ResultPanel::default();
        panel.begin(Mode::Bytecode);
        panel.begin(Mode::Bytecode);
        panel.finish(Mode::Bytecode, ok("second"));
        panel.finish(Mode::Bytecode, ok("first"));
        assert!(panel.result_html().contains("<p>first</p>"));
    }
}
