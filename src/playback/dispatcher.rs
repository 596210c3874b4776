//! Playback dispatcher: snapshot → request → one POST → classified outcome.
//!
//! Stateless between calls. Whether a sound is already playing is decided by
//! the backend (status 429); the dispatcher only reports it.

use super::outcome::{classify, PlayFailure, PlayOutcome};
use super::request::PlaybackRequest;
use super::transport::{HttpTransport, Transport, TransportError};
use crate::params::ParameterStore;

/// Endpoint of a backend running on the local machine.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080/play_sound";

pub struct PlaybackDispatcher {
    endpoint: String,
    transport: Box<dyn Transport>,
}

impl PlaybackDispatcher {
    pub fn new(endpoint: impl Into<String>, transport: impl Transport + 'static) -> Self {
        Self {
            endpoint: endpoint.into(),
            transport: Box::new(transport),
        }
    }

    /// Dispatcher backed by a real HTTP client.
    pub fn http(endpoint: impl Into<String>) -> Result<Self, TransportError> {
        Ok(Self::new(endpoint, HttpTransport::new()?))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build a request from `store` and send it.
    pub fn play(&self, store: &ParameterStore) -> PlayOutcome {
        self.send(&PlaybackRequest::from_store(store))
    }

    /// Send an already-assembled request. Never panics and never returns an
    /// error: every problem becomes [`PlayOutcome::Failure`].
    pub fn send(&self, request: &PlaybackRequest) -> PlayOutcome {
        let body = match request.to_json() {
            Ok(body) => body,
            Err(e) => {
                log::error!("failed to encode play request: {e}");
                return PlayOutcome::Failure(PlayFailure::Encode(e.to_string()));
            }
        };

        log::debug!("POST {} {}", self.endpoint, body);

        let outcome = match self.transport.post_json(&self.endpoint, &body) {
            Ok(response) => classify(response.status, &response.body),
            Err(e) => PlayOutcome::Failure(PlayFailure::Transport(e.0)),
        };

        match &outcome {
            PlayOutcome::Success(body) => log::info!("play accepted: {body}"),
            PlayOutcome::AlreadyPlaying => log::info!("backend is already playing a sound"),
            PlayOutcome::Failure(e) => log::error!("error playing sound: {e}"),
        }

        outcome
    }
}

impl std::fmt::Debug for PlaybackDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackDispatcher")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}
