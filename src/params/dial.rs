//! Dial definitions: bounded, steppable numeric parameters and the built-in seed.

use serde::{Deserialize, Serialize};

use super::ids;
use super::store::StoreError;

/// How far off the step grid a value may drift before it is snapped back.
const STEP_TOLERANCE: f64 = 1e-6;

/// A single tunable parameter.
///
/// Invariant once seeded: `min <= value <= max` and `(value - min)` is a
/// whole number of `step`s within [`STEP_TOLERANCE`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dial {
    pub id: String,
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Current setting. Accepts `default:` in config files.
    #[serde(alias = "default")]
    pub value: f64,
}

impl Dial {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        (min, max): (f64, f64),
        step: f64,
        value: f64,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            min,
            max,
            step,
            value,
        }
    }

    /// Check bounds and step. Used when a seed is loaded into a store.
    pub fn validate(&self) -> Result<(), StoreError> {
        let invalid = |reason: &str| StoreError::InvalidDial {
            id: self.id.clone(),
            reason: reason.to_string(),
        };
        if self.id.is_empty() {
            return Err(invalid("empty id"));
        }
        if !self.min.is_finite() || !self.max.is_finite() || !self.value.is_finite() {
            return Err(invalid("non-finite bound or value"));
        }
        if self.min > self.max {
            return Err(invalid("min is greater than max"));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(invalid("step must be positive"));
        }
        Ok(())
    }

    /// Bring `value` into this dial's domain.
    ///
    /// Clamps to `[min, max]`. Values already on the step grid (within
    /// tolerance) are returned unchanged; off-grid values snap to the nearest
    /// step. Non-finite input keeps the current value.
    pub fn conform(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.value;
        }
        let clamped = value.clamp(self.min, self.max);
        let steps = (clamped - self.min) / self.step;
        if (steps - steps.round()).abs() <= STEP_TOLERANCE {
            clamped
        } else {
            round_nano(self.min + steps.round() * self.step).clamp(self.min, self.max)
        }
    }

    /// The value `steps` grid positions away from the current one, clamped.
    pub fn nudged(&self, steps: i32) -> f64 {
        let current = ((self.value - self.min) / self.step).round();
        let target = self.min + (current + steps as f64) * self.step;
        round_nano(target).clamp(self.min, self.max)
    }

    /// Position of the value within the range, 0.0–1.0.
    pub fn normalized(&self) -> f64 {
        if self.max > self.min {
            ((self.value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// Strip accumulated float noise from step arithmetic (0.1 * 3 and friends).
fn round_nano(v: f64) -> f64 {
    (v * 1e9).round() / 1e9
}

/// The built-in dial seed, in display order.
pub fn default_seed() -> Vec<Dial> {
    vec![
        Dial::new(
            ids::SAMPLE_RATE,
            "Sample Rate",
            (8000.0, 96000.0),
            100.0,
            ids::DEFAULT_SAMPLE_RATE as f64,
        ),
        Dial::new(
            ids::FREQUENCY,
            "Frequency",
            (20.0, 2000.0),
            1.0,
            ids::DEFAULT_FREQUENCY,
        ),
        Dial::new(
            ids::DURATION,
            "Duration",
            (0.1, 10.0),
            0.1,
            ids::DEFAULT_DURATION,
        ),
        Dial::new(ids::ATTACK, "Attack", (0.0, 2.0), 0.01, ids::DEFAULT_ATTACK),
        Dial::new(ids::DECAY, "Decay", (0.0, 2.0), 0.01, ids::DEFAULT_DECAY),
        Dial::new(ids::SUSTAIN, "Sustain", (0.0, 1.0), 0.01, ids::DEFAULT_SUSTAIN),
        Dial::new(ids::RELEASE, "Release", (0.0, 5.0), 0.01, ids::DEFAULT_RELEASE),
    ]
}
