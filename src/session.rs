//! Submissions and their lifecycle.
//!
//! A submission moves `Idle -> Submitted -> {Rendered | Alerted | Faulted |
//! Superseded}`. The placeholder is written before `submit` returns; the
//! exchange runs on a spawned task that applies its outcome to the shared
//! panel when it completes.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, info};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::client::AnalysisClient;
use crate::display::ResultPanel;
use crate::error_handling::AnalysisError;
use crate::models::{AnalysisForm, AnalysisRequest, Mode};

/// Where a submission stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitted,
    /// The response was rendered into the result region.
    Rendered,
    /// The exchange failed and the alert was raised.
    Alerted,
    /// The answer could not be used (bad body); nothing was shown.
    Faulted,
    /// A newer submission cancelled this one before it completed.
    Superseded,
}

impl SubmissionState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SubmissionState::Idle | SubmissionState::Submitted)
    }
}

/// What a new submission does to one still in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResubmitPolicy {
    /// Let both run; the completion applied last owns the panel.
    #[default]
    LastResponseWins,
    /// Cancel the older request; only the newest can reach the panel.
    CancelPrevious,
}

/// Submits analysis requests and applies their outcomes to one panel.
pub struct AnalysisSession {
    client: Arc<AnalysisClient>,
    panel: Arc<Mutex<ResultPanel>>,
    policy: ResubmitPolicy,
    in_flight: Mutex<Option<CancellationToken>>,
}

impl AnalysisSession {
    pub fn new(client: AnalysisClient, panel: ResultPanel, policy: ResubmitPolicy) -> Self {
        Self {
            client: Arc::new(client),
            panel: Arc::new(Mutex::new(panel)),
            policy,
            in_flight: Mutex::new(None),
        }
    }

    /// Shared handle to the panel this session writes to.
    pub fn panel(&self) -> Arc<Mutex<ResultPanel>> {
        Arc::clone(&self.panel)
    }

    /// Snapshot of the panel.
    pub fn snapshot(&self) -> ResultPanel {
        lock(&self.panel).clone()
    }

    /// Submits `code` and `input` for `mode`.
    ///
    /// Must be called within a Tokio runtime.
    pub fn submit_analysis(
        &self,
        mode: Mode,
        code: impl Into<String>,
        input: impl Into<String>,
    ) -> JoinHandle<SubmissionState> {
        self.submit(AnalysisRequest::new(mode, code, input))
    }

    /// Reads `mode`'s fields from the form and submits them.
    ///
    /// The placeholder is written before the form is read, so a missing
    /// element leaves it in place. A status label raised for the attempt is
    /// released again, since nothing will complete it.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::MissingElement` if a field is absent; nothing is
    /// sent in that case.
    pub fn submit_form(
        &self,
        mode: Mode,
        form: &AnalysisForm,
    ) -> Result<JoinHandle<SubmissionState>, AnalysisError> {
        lock(&self.panel).begin(mode);
        let request = AnalysisRequest::from_form(mode, form).map_err(|e| {
            lock(&self.panel).abandon(mode);
            e
        })?;
        Ok(self.dispatch(request))
    }

    /// Submits a prepared request.
    pub fn submit(&self, request: AnalysisRequest) -> JoinHandle<SubmissionState> {
        lock(&self.panel).begin(request.mode);
        self.dispatch(request)
    }

    fn dispatch(&self, request: AnalysisRequest) -> JoinHandle<SubmissionState> {
        let token = CancellationToken::new();
        if self.policy == ResubmitPolicy::CancelPrevious {
            let previous = lock(&self.in_flight).replace(token.clone());
            if let Some(previous) = previous {
                previous.cancel();
            }
        }

        let client = Arc::clone(&self.client);
        let panel = Arc::clone(&self.panel);
        info!("Submitted {} analysis to {}", request.mode, client.endpoint());

        tokio::spawn(async move {
            let mode = request.mode;
            let outcome = tokio::select! {
                _ = token.cancelled() => None,
                outcome = client.analyze(&request) => Some(outcome),
            };

            let mut panel = lock(&panel);
            match outcome {
                Some(outcome) if !token.is_cancelled() => {
                    let state = panel.finish(mode, outcome);
                    info!("{} analysis finished: {:?}", mode, state);
                    state
                }
                _ => {
                    debug!("{} analysis superseded by a newer submission", mode);
                    panel.abandon(mode);
                    SubmissionState::Superseded
                }
            }
        })
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
