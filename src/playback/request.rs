//! Play request payload: assembled fresh from a store snapshot for every play.

use serde::Serialize;

use crate::params::{ids, ParameterStore, Waveform};

/// Attack-Decay-Sustain-Release envelope.
///
/// Times are in seconds. Sustain is a level (0.0–1.0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Adsr {
    pub attack: f64,
    pub decay: f64,
    pub sustain: f64,
    pub release: f64,
}

impl Default for Adsr {
    fn default() -> Self {
        Self {
            attack: ids::DEFAULT_ATTACK,
            decay: ids::DEFAULT_DECAY,
            sustain: ids::DEFAULT_SUSTAIN,
            release: ids::DEFAULT_RELEASE,
        }
    }
}

/// The JSON body POSTed to the synthesis endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackRequest {
    pub sample_rate: u32,
    pub frequency: f64,
    pub duration: f64,
    pub waveform: Waveform,
    pub adsr: Adsr,
}

impl PlaybackRequest {
    /// Read the well-known dials from `store`. Any dial that is missing falls
    /// back to its documented default; a present dial is used as-is, zero
    /// included.
    pub fn from_store(store: &ParameterStore) -> Self {
        let read = |id: &str, default: f64| store.value(id).unwrap_or(default);

        let sample_rate = store
            .value(ids::SAMPLE_RATE)
            .map(|hz| hz.round().clamp(0.0, u32::MAX as f64) as u32)
            .unwrap_or(ids::DEFAULT_SAMPLE_RATE);

        Self {
            sample_rate,
            frequency: read(ids::FREQUENCY, ids::DEFAULT_FREQUENCY),
            duration: read(ids::DURATION, ids::DEFAULT_DURATION),
            waveform: store.waveform(),
            adsr: Adsr {
                attack: read(ids::ATTACK, ids::DEFAULT_ATTACK),
                decay: read(ids::DECAY, ids::DEFAULT_DECAY),
                sustain: read(ids::SUSTAIN, ids::DEFAULT_SUSTAIN),
                release: read(ids::RELEASE, ids::DEFAULT_RELEASE),
            },
        }
    }

    /// Serialize to the JSON value sent over the wire.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl Default for PlaybackRequest {
    fn default() -> Self {
        Self {
            sample_rate: ids::DEFAULT_SAMPLE_RATE,
            frequency: ids::DEFAULT_FREQUENCY,
            duration: ids::DEFAULT_DURATION,
            waveform: Waveform::default(),
            adsr: Adsr::default(),
        }
    }
}
