//! Background play: runs each request on its own thread and reports back over
//! an mpsc channel, so the UI loop never waits on the network.
//!
//! Every play carries a ticket. Outcomes arrive in completion order, which may
//! differ from the order the plays were issued.

use std::sync::mpsc;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use super::dispatcher::PlaybackDispatcher;
use super::outcome::PlayOutcome;
use crate::params::ParameterStore;

/// A finished play request.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackEvent {
    pub ticket: u64,
    pub outcome: PlayOutcome,
}

/// Sender half: moved into worker threads.
pub type PlaybackSender = mpsc::Sender<PlaybackEvent>;

/// Receiver half: held by the UI loop.
pub struct PlaybackReceiver {
    rx: mpsc::Receiver<PlaybackEvent>,
}

impl PlaybackReceiver {
    /// Drain all finished plays.
    pub fn drain(&self) -> Vec<PlaybackEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }
        events
    }
}

/// Create a new playback channel pair.
pub fn playback_channel() -> (PlaybackSender, PlaybackReceiver) {
    let (tx, rx) = mpsc::channel();
    (tx, PlaybackReceiver { rx })
}

/// Play `snapshot` on a new thread and send the outcome to `tx`.
///
/// The snapshot is owned by the thread, so edits made to the live store while
/// the request is in flight do not change what is sent.
pub fn spawn_play(
    dispatcher: Arc<PlaybackDispatcher>,
    snapshot: ParameterStore,
    ticket: u64,
    tx: PlaybackSender,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let outcome = dispatcher.play(&snapshot);
        // The receiver is gone only when the UI has shut down.
        let _ = tx.send(PlaybackEvent { ticket, outcome });
    })
}
