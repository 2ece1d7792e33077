//! Signal plumbing for time encoding machines
//!
//! This crate carries everything around the encode/decode engine that is
//! not the engine itself: the sampled-signal type, the storage boundary
//! (named signal arrays plus a small metadata record, append-only writes
//! and random-access block reads), band-limited resampling used by the
//! encoder, and a reproducible band-limited test-signal generator.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod gen;
pub mod interp;
pub mod store;

mod error;

pub use error::{Result, SignalError};
pub use gen::TestSignal;
pub use interp::resample_sinc;
pub use store::{MemoryStore, SignalMeta, SignalStore};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A uniformly sampled real signal
///
/// Semantically a discretized band-limited function of time; the sample
/// at index `i` corresponds to time `i * dt` seconds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SampledSignal {
    /// Signal samples
    pub samples: Vec<f64>,
    /// Sampling interval (s)
    pub dt: f64,
}

impl SampledSignal {
    /// Create a new sampled signal
    pub fn new(samples: Vec<f64>, dt: f64) -> Self {
        Self { samples, dt }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the signal holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Signal duration (s)
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 * self.dt
    }

    /// Peak absolute amplitude, 0 for an empty signal
    pub fn peak(&self) -> f64 {
        self.samples.iter().fold(0.0_f64, |m, &x| m.max(x.abs()))
    }

    /// Time axis of the signal
    pub fn times(&self) -> Vec<f64> {
        (0..self.samples.len()).map(|i| i as f64 * self.dt).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampled_signal_accessors() {
        let s = SampledSignal::new(vec![0.5, -2.0, 1.0], 0.25);
        assert_eq!(s.len(), 3);
        assert!(!s.is_empty());
        assert_eq!(s.duration(), 0.75);
        assert_eq!(s.peak(), 2.0);
        assert_eq!(s.times(), vec![0.0, 0.25, 0.5]);
    }

    #[test]
    fn test_empty_signal() {
        let s = SampledSignal::new(Vec::new(), 1e-6);
        assert!(s.is_empty());
        assert_eq!(s.peak(), 0.0);
        assert_eq!(s.duration(), 0.0);
    }
}
