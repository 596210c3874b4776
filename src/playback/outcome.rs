//! Play outcomes: how a response (or the lack of one) is reported back.

use std::fmt;

/// Status the backend answers with when the sound was accepted.
pub const STATUS_OK: u16 = 200;
/// Status the backend answers with while another sound is still playing.
pub const STATUS_TOO_MANY_REQUESTS: u16 = 429;

/// The result of one play request.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayOutcome {
    /// The backend accepted the request. Carries the decoded response body
    /// (`Null` for an empty body).
    Success(serde_json::Value),
    /// The backend is busy with another sound. Informational, not an error.
    AlreadyPlaying,
    /// Anything else.
    Failure(PlayFailure),
}

impl PlayOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, PlayOutcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, PlayOutcome::Failure(_))
    }

    /// Short label for status bars.
    pub fn label(&self) -> &'static str {
        match self {
            PlayOutcome::Success(_) => "OK",
            PlayOutcome::AlreadyPlaying => "BUSY",
            PlayOutcome::Failure(_) => "ERR",
        }
    }
}

impl fmt::Display for PlayOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayOutcome::Success(body) if body.is_null() => write!(f, "played"),
            PlayOutcome::Success(body) => write!(f, "played: {body}"),
            PlayOutcome::AlreadyPlaying => write!(f, "already playing a sound"),
            PlayOutcome::Failure(e) => write!(f, "play failed: {e}"),
        }
    }
}

/// Why a play request failed.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayFailure {
    /// No response: connection refused, DNS, timeout, and so on.
    Transport(String),
    /// The backend answered with a status other than 200 or 429.
    Status { code: u16, body: String },
    /// A 200 response whose body is not JSON.
    MalformedBody(String),
    /// The request could not be encoded.
    Encode(String),
}

impl fmt::Display for PlayFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayFailure::Transport(e) => write!(f, "transport error: {e}"),
            PlayFailure::Status { code, body } if body.is_empty() => {
                write!(f, "unexpected status {code}")
            }
            PlayFailure::Status { code, body } => write!(f, "unexpected status {code}: {body}"),
            PlayFailure::MalformedBody(e) => write!(f, "malformed response body: {e}"),
            PlayFailure::Encode(e) => write!(f, "could not encode request: {e}"),
        }
    }
}

impl std::error::Error for PlayFailure {}

/// Classify a completed HTTP exchange.
pub fn classify(status: u16, body: &str) -> PlayOutcome {
    match status {
        STATUS_OK => {
            if body.trim().is_empty() {
                return PlayOutcome::Success(serde_json::Value::Null);
            }
            match serde_json::from_str(body) {
                Ok(value) => PlayOutcome::Success(value),
                Err(e) => PlayOutcome::Failure(PlayFailure::MalformedBody(e.to_string())),
            }
        }
        STATUS_TOO_MANY_REQUESTS => PlayOutcome::AlreadyPlaying,
        code => PlayOutcome::Failure(PlayFailure::Status {
            code,
            body: body.to_string(),
        }),
    }
}
