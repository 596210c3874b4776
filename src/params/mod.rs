//! Parameters: dial definitions, waveform selection, and the immutable store
//! the control surface edits.

pub mod dial;
pub mod ids;
pub mod store;
pub mod waveform;

pub use dial::{default_seed, Dial};
pub use store::{ParameterStore, StoreError};
pub use waveform::{ParseWaveformError, Waveform};
