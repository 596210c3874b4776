//! Parameter store: the current dial values and waveform selection.
//!
//! The store is an immutable value: every update returns a new store. Dials
//! are held behind `Arc`, so an update copies one dial and shares the rest
//! with the previous store. A clone is therefore a cheap, independent
//! snapshot that later edits cannot reach.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::dial::{default_seed, Dial};
use super::waveform::{ParseWaveformError, Waveform};

/// Errors raised while building or updating a store.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Two seed entries share an id.
    DuplicateDial(String),
    /// A seed entry has unusable bounds, step, or value.
    InvalidDial { id: String, reason: String },
    /// A waveform name outside the fixed set.
    UnknownWaveform(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::DuplicateDial(id) => write!(f, "duplicate dial id '{id}'"),
            StoreError::InvalidDial { id, reason } => write!(f, "invalid dial '{id}': {reason}"),
            StoreError::UnknownWaveform(name) => write!(f, "unknown waveform '{name}'"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<ParseWaveformError> for StoreError {
    fn from(e: ParseWaveformError) -> Self {
        StoreError::UnknownWaveform(e.name)
    }
}

/// Dial values plus the selected waveform.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterStore {
    dials: Vec<Arc<Dial>>,
    /// id → position in `dials`. Ids never change after seeding, so the index
    /// is shared by every store derived from the same seed.
    index: Arc<HashMap<String, usize>>,
    waveform: Waveform,
}

impl ParameterStore {
    /// Build a store from a seed. Ids must be unique; each dial is validated
    /// and its initial value conformed into its domain.
    pub fn new(seed: Vec<Dial>) -> Result<Self, StoreError> {
        let mut index = HashMap::with_capacity(seed.len());
        let mut dials = Vec::with_capacity(seed.len());
        for (pos, mut dial) in seed.into_iter().enumerate() {
            dial.validate()?;
            if index.insert(dial.id.clone(), pos).is_some() {
                return Err(StoreError::DuplicateDial(dial.id));
            }
            dial.value = dial.conform(dial.value);
            dials.push(Arc::new(dial));
        }
        Ok(Self {
            dials,
            index: Arc::new(index),
            waveform: Waveform::default(),
        })
    }

    /// A store seeded with the built-in dial set and a Sine waveform.
    pub fn seeded() -> Self {
        let dials: Vec<Arc<Dial>> = default_seed().into_iter().map(Arc::new).collect();
        let index = dials
            .iter()
            .enumerate()
            .map(|(pos, d)| (d.id.clone(), pos))
            .collect();
        Self {
            dials,
            index: Arc::new(index),
            waveform: Waveform::default(),
        }
    }

    /// All dials in seed order.
    pub fn dials(&self) -> impl Iterator<Item = &Dial> {
        self.dials.iter().map(|d| d.as_ref())
    }

    /// Look up a dial by id.
    pub fn get(&self, id: &str) -> Option<&Dial> {
        self.index.get(id).map(|&pos| self.dials[pos].as_ref())
    }

    /// Current value of a dial, if present.
    pub fn value(&self, id: &str) -> Option<f64> {
        self.get(id).map(|d| d.value)
    }

    /// Dial at a display position.
    pub fn dial_at(&self, pos: usize) -> Option<&Dial> {
        self.dials.get(pos).map(|d| d.as_ref())
    }

    pub fn len(&self) -> usize {
        self.dials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dials.is_empty()
    }

    /// Return a store with dial `id` set to `value` (conformed to the dial's
    /// domain). All other dials are shared with `self`. An unknown id returns
    /// an equal store.
    pub fn update_value(&self, id: &str, value: f64) -> Self {
        let Some(&pos) = self.index.get(id) else {
            return self.clone();
        };
        let mut dials = self.dials.clone();
        let current = &self.dials[pos];
        let mut updated = Dial::clone(current);
        updated.value = current.conform(value);
        dials[pos] = Arc::new(updated);
        Self {
            dials,
            index: Arc::clone(&self.index),
            waveform: self.waveform,
        }
    }

    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    /// Return a store with a different waveform selection.
    pub fn with_waveform(&self, waveform: Waveform) -> Self {
        Self {
            waveform,
            ..self.clone()
        }
    }

    /// Select a waveform by name. Unknown names are rejected; `self` is left
    /// as the current selection.
    pub fn with_waveform_name(&self, name: &str) -> Result<Self, StoreError> {
        let waveform: Waveform = name.parse()?;
        Ok(self.with_waveform(waveform))
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::seeded()
    }
}
