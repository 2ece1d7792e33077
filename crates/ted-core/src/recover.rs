//! Closed-form recoverability check
//!
//! Decides, without encoding anything, whether a signal of a given peak
//! amplitude can be perfectly recovered from the spike train an
//! integrate-and-fire neuron with the given parameters would produce.
//! This is a sufficient condition for the dense decoder; callers are
//! expected to check it before encoding. Nothing downstream enforces it.

use crate::error::{Result, TedError};
use crate::params::IafParams;
use std::f64::consts::PI;

/// Check the recoverability condition for a signal
///
/// `u` is the signal (only its peak amplitude enters the condition) and
/// `bw` its bandwidth in rad/s. Errors identify which part of the
/// condition failed; `Ok(())` means the dense decoder is guaranteed to
/// reconstruct the signal perfectly.
pub fn iaf_recoverable(u: &[f64], bw: f64, params: &IafParams) -> Result<()> {
    let peak = u.iter().fold(0.0_f64, |m, &x| m.max(x.abs()));
    iaf_recoverable_peak(peak, bw, params)
}

/// Recoverability condition in terms of the peak amplitude alone
pub fn iaf_recoverable_peak(peak: f64, bw: f64, params: &IafParams) -> Result<()> {
    let (b, d) = (params.b, params.d);
    if peak >= b {
        return Err(TedError::BiasTooLow { peak, bias: b });
    }

    let (rate, bound) = if params.is_leaky() {
        let r = params.r;
        // ln argument turns non-positive exactly when the rate
        // expression leaves the real line
        let arg = 1.0 - d / (d - (b - peak) * r);
        if arg <= 0.0 {
            return Err(TedError::NonRealRate);
        }
        let e = d / ((b - peak) * r);
        (params.rc() * arg.ln() * bw / PI, (1.0 - e) / (1.0 + e))
    } else {
        // Ideal integrator: the R -> infinity limit of the leaky
        // expressions, C*d*bw / ((b - peak) * pi) against a bound of 1
        (params.c * d * bw / ((b - peak) * PI), 1.0)
    };

    if rate >= bound {
        return Err(TedError::ReconstructionConditionViolated { rate, bound });
    }
    Ok(())
}
