//! Well-known dial IDs and the fallback values used when a dial is absent.
//!
//! The play pipeline reads these dials by ID from the current store. A missing
//! dial is never an error: the matching `DEFAULT_*` constant is sent instead.

/// Output sample rate in Hz (default: 44100).
pub const SAMPLE_RATE: &str = "v1SampleRate";

/// Oscillator frequency in Hz (default: 440.0).
pub const FREQUENCY: &str = "v3Frequency";

/// Note duration in seconds (default: 2.0).
pub const DURATION: &str = "v4Duration";

/// Envelope attack time in seconds (default: 0.1).
pub const ATTACK: &str = "v6Attack";

/// Envelope decay time in seconds (default: 0.2).
pub const DECAY: &str = "v7Decay";

/// Envelope sustain level 0.0–1.0 (default: 0.7).
pub const SUSTAIN: &str = "v8Sustain";

/// Envelope release time in seconds (default: 0.5).
pub const RELEASE: &str = "v9Release";

pub const DEFAULT_SAMPLE_RATE: u32 = 44100;
pub const DEFAULT_FREQUENCY: f64 = 440.0;
pub const DEFAULT_DURATION: f64 = 2.0;
pub const DEFAULT_ATTACK: f64 = 0.1;
pub const DEFAULT_DECAY: f64 = 0.2;
pub const DEFAULT_SUSTAIN: f64 = 0.7;
pub const DEFAULT_RELEASE: f64 = 0.5;

/// Every ID the play pipeline reads, in payload order.
pub const ALL: [&str; 7] = [
    SAMPLE_RATE,
    FREQUENCY,
    DURATION,
    ATTACK,
    DECAY,
    SUSTAIN,
    RELEASE,
];
