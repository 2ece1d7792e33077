//! Band-limited test-signal generation
//!
//! Synthetic signals for validating encode/decode round trips: a sum of
//! random-phase sinusoids with frequencies strictly inside the requested
//! bandwidth, normalized to a requested peak amplitude. Seedable so test
//! runs are reproducible.

use crate::{Result, SampledSignal, SignalError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

/// Band-limited test-signal generator
#[derive(Debug, Clone)]
pub struct TestSignal {
    /// Signal bandwidth (rad/s); all components lie strictly below it
    pub bw: f64,
    /// Number of sinusoidal components
    pub components: usize,
    /// Target peak amplitude after normalization
    pub peak: f64,
}

impl TestSignal {
    /// Create a generator for signals of bandwidth `bw` rad/s
    pub fn new(bw: f64) -> Self {
        Self {
            bw,
            components: 8,
            peak: 1.0,
        }
    }

    /// Set the number of sinusoidal components
    pub fn components(mut self, n: usize) -> Self {
        self.components = n;
        self
    }

    /// Set the target peak amplitude
    pub fn peak(mut self, peak: f64) -> Self {
        self.peak = peak;
        self
    }

    /// Generate `dur / dt` samples from the given seed
    pub fn generate(&self, dur: f64, dt: f64, seed: u64) -> Result<SampledSignal> {
        if self.bw <= 0.0 {
            return Err(SignalError::invalid_parameter(
                "bw",
                self.bw.to_string(),
                "> 0.0",
            ));
        }
        if dt <= 0.0 {
            return Err(SignalError::invalid_parameter(
                "dt",
                dt.to_string(),
                "> 0.0",
            ));
        }
        if self.components == 0 {
            return Err(SignalError::invalid_parameter(
                "components",
                "0",
                ">= 1",
            ));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let n = (dur / dt).round() as usize;

        // Frequencies strictly inside the band; keep them away from DC
        // so every component contributes visible structure
        let comps: Vec<(f64, f64, f64)> = (0..self.components)
            .map(|_| {
                let w = self.bw * rng.gen_range(0.05..0.95);
                let a = rng.gen_range(0.2..1.0);
                let phi = rng.gen_range(0.0..2.0 * PI);
                (w, a, phi)
            })
            .collect();

        let mut samples: Vec<f64> = (0..n)
            .map(|i| {
                let t = i as f64 * dt;
                comps.iter().map(|&(w, a, phi)| a * (w * t + phi).sin()).sum()
            })
            .collect();

        let max = samples.iter().fold(0.0_f64, |m, &x| m.max(x.abs()));
        if max > 0.0 {
            let scale = self.peak / max;
            for x in &mut samples {
                *x *= scale;
            }
        }

        Ok(SampledSignal::new(samples, dt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_and_peak() {
        let sig = TestSignal::new(2.0 * PI * 32.0)
            .peak(0.8)
            .generate(0.1, 1e-4, 42)
            .unwrap();
        assert_eq!(sig.len(), 1000);
        assert!((sig.peak() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_deterministic_for_seed() {
        let g = TestSignal::new(100.0);
        let a = g.generate(0.05, 1e-4, 7).unwrap();
        let b = g.generate(0.05, 1e-4, 7).unwrap();
        assert_eq!(a, b);
        let c = g.generate(0.05, 1e-4, 8).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(TestSignal::new(-1.0).generate(0.1, 1e-4, 0).is_err());
        assert!(TestSignal::new(100.0).generate(0.1, -1.0, 0).is_err());
        assert!(TestSignal::new(100.0)
            .components(0)
            .generate(0.1, 1e-4, 0)
            .is_err());
    }
}
