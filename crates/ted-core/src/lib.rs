//! Time encoding and decoding machines for band-limited signals
//!
//! This crate implements time encoding with the integrate-and-fire
//! neuron model and the matching family of time decoding machines:
//! the dense sinc-basis decoder, a fast frequency-bin approximation,
//! a population decoder fusing several encoders' trains, and the
//! Vandermonde/Björck-Pereyra decoders used block-wise by real-time
//! variants.
//!
//! The decoders assume the encoder parameters handed to them are the
//! ones the train was produced with; this is deliberately not validated.
//! Callers are likewise expected to check [`iaf_recoverable`] before
//! relying on perfect reconstruction.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod decode;
pub mod encode;
pub mod recover;

mod error;
mod params;

pub use decode::{
    asdm_decode_vander, asdm_decode_vander_ins, iaf_decode, iaf_decode_fast, iaf_decode_pop,
    iaf_decode_vander,
};
pub use encode::{iaf_encode, iaf_encode_with_state, IntegratorState};
pub use error::{Result, TedError};
pub use params::{FirstSpike, IafParams, QuadratureMethod};
pub use recover::{iaf_recoverable, iaf_recoverable_peak};

// Re-export the signal plumbing the engine is used together with
pub use ted_signal::{SampledSignal, SignalMeta, SignalStore, TestSignal};

/// Default singular-value cutoff ratio for the pseudoinverse solves
///
/// Threaded explicitly into every decode call; this constant is only a
/// conventional starting point, not hidden global state.
pub const DEFAULT_RCOND: f64 = 1e-8;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_integration() {
        let p = IafParams::new(3.5, 0.7, 10.0, 0.01).unwrap();
        assert!(p.is_leaky());

        let u = TestSignal::new(200.0).generate(0.01, 1e-4, 1).unwrap();
        let s = iaf_encode(&u.samples, u.dt, &p, QuadratureMethod::ExponentialEuler).unwrap();
        assert!(!s.is_empty());
    }
}
