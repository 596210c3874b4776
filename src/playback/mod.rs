//! Playback: turns the current parameters into one request to the synthesis
//! backend and classifies what comes back.

pub mod dispatcher;
pub mod outcome;
pub mod request;
pub mod transport;
pub mod worker;

pub use dispatcher::{PlaybackDispatcher, DEFAULT_ENDPOINT};
pub use outcome::{classify, PlayFailure, PlayOutcome};
pub use request::{Adsr, PlaybackRequest};
pub use transport::{HttpResponse, HttpTransport, Transport, TransportError};
pub use worker::{playback_channel, spawn_play, PlaybackEvent, PlaybackReceiver, PlaybackSender};
