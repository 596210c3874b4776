//! Waveform selection: the fixed set of oscillator shapes the backend accepts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Available waveform shapes. Serialized by variant name ("Sine", "Square", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Waveform {
    #[default]
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

impl Waveform {
    pub fn all() -> &'static [Waveform] {
        &[
            Waveform::Sine,
            Waveform::Square,
            Waveform::Triangle,
            Waveform::Sawtooth,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Waveform::Sine => "Sine",
            Waveform::Square => "Square",
            Waveform::Triangle => "Triangle",
            Waveform::Sawtooth => "Sawtooth",
        }
    }

    pub fn next(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|w| w == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn prev(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|w| w == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A waveform name outside the fixed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWaveformError {
    pub name: String,
}

impl fmt::Display for ParseWaveformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown waveform '{}' (expected Sine, Square, Triangle or Sawtooth)",
            self.name
        )
    }
}

impl std::error::Error for ParseWaveformError {}

impl FromStr for Waveform {
    type Err = ParseWaveformError;

    /// Case-insensitive match on the variant name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|w| w.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseWaveformError {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_sine() {
        assert_eq!(Waveform::default(), Waveform::Sine);
    }

    #[test]
    fn next_cycles_through_all() {
        let mut w = Waveform::Sine;
        for _ in 0..Waveform::all().len() {
            w = w.next();
        }
        assert_eq!(w, Waveform::Sine);
        assert_eq!(Waveform::Sine.next(), Waveform::Square);
        assert_eq!(Waveform::Sawtooth.next(), Waveform::Sine);
    }

    #[test]
    fn prev_wraps() {
        assert_eq!(Waveform::Sine.prev(), Waveform::Sawtooth);
        assert_eq!(Waveform::Square.prev(), Waveform::Sine);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("square".parse::<Waveform>(), Ok(Waveform::Square));
        assert_eq!("TRIANGLE".parse::<Waveform>(), Ok(Waveform::Triangle));
        assert_eq!(" Sawtooth ".parse::<Waveform>(), Ok(Waveform::Sawtooth));
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "Saw".parse::<Waveform>().unwrap_err();
        assert_eq!(err.name, "Saw");
        assert!(err.to_string().contains("unknown waveform"));
    }

    #[test]
    fn serializes_as_variant_name() {
        assert_eq!(serde_json::to_string(&Waveform::Square).unwrap(), "\"Square\"");
        let parsed: Waveform = serde_json::from_str("\"Triangle\"").unwrap();
        assert_eq!(parsed, Waveform::Triangle);
    }
}
