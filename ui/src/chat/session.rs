//! Query session controller: one request per submission, failures folded into
//! the transcript.

use api::{ApiError, VisualizationResponse, VisualizationService};
use once_cell::sync::Lazy;
use regex::Regex;

use super::transcript::{ChatTurn, Transcript};

/// Assistant reply appended for any failed submission.
pub const FALLBACK_REPLY: &str = "Sorry, there was an error processing your request.";

static CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```.*?```").expect("valid code fence pattern"));

/// Remove fenced code blocks and surrounding whitespace from a reply.
pub fn strip_code_fences(message: &str) -> String {
    CODE_FENCE.replace_all(message, "").trim().to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuerySession {
    transcript: Transcript,
    input: String,
    in_flight: usize,
    last_error: Option<String>,
}

impl QuerySession {
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn phase(&self) -> Phase {
        if self.in_flight == 0 {
            Phase::Idle
        } else {
            Phase::Submitting
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase() == Phase::Submitting
    }

    /// Detail of the most recent failure, shown outside the transcript.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// True when the current input would start a request.
    pub fn can_submit(&self) -> bool {
        !self.input.trim().is_empty()
    }

    /// Start a submission. Blank input is a no-op and returns `None`; otherwise
    /// the user turn is appended immediately and the query to send is returned.
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.last_error = None;
        self.transcript.push(ChatTurn::user(self.input.trim()));
        self.in_flight += 1;
        tracing::debug!(turns = self.transcript.len(), "Submission started");
        Some(self.input.clone())
    }

    /// Finish a submission started with [`Self::begin_submit`].
    pub fn complete(&mut self, outcome: Result<VisualizationResponse, ApiError>) {
        match outcome.and_then(VisualizationResponse::into_result) {
            Ok(response) => {
                let html = Some(response.html_snippet).filter(|h| !h.trim().is_empty());
                self.transcript
                    .push(ChatTurn::assistant(strip_code_fences(&response.message), html));
            }
            Err(err) => {
                tracing::warn!(error = %err, "Visualization query failed");
                self.transcript.push(ChatTurn::assistant(FALLBACK_REPLY, None));
                self.last_error = Some(err.to_string());
            }
        }
        self.in_flight = self.in_flight.saturating_sub(1);
        self.input.clear();
    }

    /// Submit the current input through `service`. Returns `false` when the
    /// input was blank and nothing was sent.
    pub async fn submit<S>(&mut self, service: &S) -> bool
    where
        S: VisualizationService + ?Sized,
    {
        let Some(query) = self.begin_submit() else {
            return false;
        };
        let outcome = service.visualize(&query).await;
        self.complete(outcome);
        true
    }
}
