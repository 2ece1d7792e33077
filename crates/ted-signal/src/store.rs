//! Storage boundary for sampled and time-encoded signals
//!
//! The encode/decode engine treats storage purely as a source/sink of
//! plain numeric arrays and their scalar parameters; any persistent
//! backend lives behind the [`SignalStore`] trait. The in-memory
//! implementation here is the only backend shipped.

use crate::{Result, SignalError};
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Metadata record stored alongside a signal array
///
/// `b`, `d` and `k` are present only for time-encoded signals, and only
/// the ones meaningful for the encoder family that produced the train.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SignalMeta {
    /// Free-form description
    pub comment: String,
    /// Signal bandwidth (rad/s)
    pub bw: f64,
    /// Sampling interval (s)
    pub dt: f64,
    /// Encoder bias, if the array is a spike train
    pub b: Option<f64>,
    /// Encoder threshold, if the array is a spike train
    pub d: Option<f64>,
    /// Encoder integration constant, if the array is a spike train
    pub k: Option<f64>,
}

/// Interface to a named-signal store
///
/// Writes are append-only; reads are random-access over blocks. The
/// engine never depends on the storage format behind this trait.
pub trait SignalStore {
    /// Register a new named signal with its metadata
    fn create(&mut self, name: &str, meta: SignalMeta) -> Result<()>;

    /// Append a block of samples to a signal
    fn append(&mut self, name: &str, block: &[f64]) -> Result<()>;

    /// Read `len` samples starting at `offset`
    fn read_block(&self, name: &str, offset: usize, len: usize) -> Result<Vec<f64>>;

    /// Metadata of a signal
    fn meta(&self, name: &str) -> Result<SignalMeta>;

    /// Number of samples stored for a signal
    fn len(&self, name: &str) -> Result<usize>;

    /// Whether a signal holds no samples yet
    fn is_empty(&self, name: &str) -> Result<bool> {
        Ok(self.len(name)? == 0)
    }
}

/// In-memory signal store
#[derive(Debug, Default)]
pub struct MemoryStore {
    signals: HashMap<String, (SignalMeta, Vec<f64>)>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of all stored signals
    pub fn names(&self) -> Vec<&str> {
        self.signals.keys().map(String::as_str).collect()
    }
}

impl SignalStore for MemoryStore {
    fn create(&mut self, name: &str, meta: SignalMeta) -> Result<()> {
        if self.signals.contains_key(name) {
            return Err(SignalError::duplicate_signal(name));
        }
        log::debug!("creating signal `{}` (bw={}, dt={})", name, meta.bw, meta.dt);
        self.signals.insert(name.to_string(), (meta, Vec::new()));
        Ok(())
    }

    fn append(&mut self, name: &str, block: &[f64]) -> Result<()> {
        let (_, data) = self
            .signals
            .get_mut(name)
            .ok_or_else(|| SignalError::no_such_signal(name))?;
        data.extend_from_slice(block);
        Ok(())
    }

    fn read_block(&self, name: &str, offset: usize, len: usize) -> Result<Vec<f64>> {
        let (_, data) = self
            .signals
            .get(name)
            .ok_or_else(|| SignalError::no_such_signal(name))?;
        let end = offset.checked_add(len).filter(|&e| e <= data.len()).ok_or(
            SignalError::BlockOutOfRange {
                offset,
                len,
                available: data.len(),
            },
        )?;
        Ok(data[offset..end].to_vec())
    }

    fn meta(&self, name: &str) -> Result<SignalMeta> {
        self.signals
            .get(name)
            .map(|(meta, _)| meta.clone())
            .ok_or_else(|| SignalError::no_such_signal(name))
    }

    fn len(&self, name: &str) -> Result<usize> {
        self.signals
            .get(name)
            .map(|(_, data)| data.len())
            .ok_or_else(|| SignalError::no_such_signal(name))
    }
}
