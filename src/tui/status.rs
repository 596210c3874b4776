//! Status bar: endpoint, requests in flight, and the last outcome.

use crate::playback::PlayOutcome;

/// Status information for the TUI status bar.
#[derive(Debug, Clone, Default)]
pub struct StatusInfo {
    pub endpoint: String,
    pub in_flight: usize,
    pub sent: u64,
    pub last_outcome: Option<PlayOutcome>,
}

impl StatusInfo {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// "IDLE", "SENDING" or "SENDING x3".
    pub fn activity_display(&self) -> String {
        match self.in_flight {
            0 => "IDLE".to_string(),
            1 => "SENDING".to_string(),
            n => format!("SENDING x{n}"),
        }
    }

    /// Label of the most recent outcome, "--" before the first one.
    pub fn outcome_display(&self) -> &'static str {
        self.last_outcome.as_ref().map_or("--", PlayOutcome::label)
    }

    pub fn request_sent(&mut self) {
        self.in_flight += 1;
        self.sent += 1;
    }

    pub fn request_finished(&mut self, outcome: PlayOutcome) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.last_outcome = Some(outcome);
    }
}
