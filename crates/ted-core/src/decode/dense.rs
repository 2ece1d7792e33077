//! Dense time decoding machine
//!
//! Builds the full reconstruction matrix from closed-form inner products
//! of the sinc kernel against spike windows, solves the system with a
//! rank-truncated pseudoinverse and reconstructs on the requested grid.
//! Cost is `O(n^2)` for the matrix and `O(n^3)` for the solve, with `n`
//! the number of spike midpoints.

use super::{
    iaf_quanta, leaky_g_entry, leaky_log_const, midpoints, sinc_accumulate, spike_times, time_grid,
};
use crate::error::{Result, TedError};
use crate::params::IafParams;
use nalgebra::{DMatrix, DVector};
use std::f64::consts::PI;
use ted_math::{pinv, si};

/// Decode a spike train produced by a single integrate-and-fire neuron
///
/// `s` holds the inter-spike intervals, `dur` and `dt` define the output
/// grid, `bw` is the signal bandwidth in rad/s and `params` must match
/// the encoder that produced the train (this is not validated). `rcond`
/// is the singular-value cutoff ratio of the pseudoinverse.
pub fn iaf_decode(
    s: &[f64],
    dur: f64,
    dt: f64,
    bw: f64,
    params: &IafParams,
    rcond: f64,
) -> Result<Vec<f64>> {
    if s.len() < 2 {
        return Err(TedError::insufficient_spikes(2, s.len()));
    }

    let ts = spike_times(s);
    let tsh = midpoints(&ts);
    let nsh = tsh.len();

    let mut g = DMatrix::<f64>::zeros(nsh, nsh);
    if params.is_leaky() {
        let rc = params.rc();
        let lc = leaky_log_const(rc * bw);
        for i in 0..nsh {
            for j in 0..nsh {
                g[(i, j)] = leaky_g_entry(ts[i], ts[i + 1], tsh[j], rc, bw, lc);
            }
        }
    } else {
        // Each column needs the sine integral at every spike time; the
        // matrix entry is the difference of consecutive values
        for j in 0..nsh {
            let si_col: Vec<f64> = ts.iter().map(|&t| si(bw * (t - tsh[j])) / PI).collect();
            for i in 0..nsh {
                g[(i, j)] = si_col[i + 1] - si_col[i];
            }
        }
    }

    let q = DVector::from_vec(iaf_quanta(s, params));

    let (g_pinv, report) = pinv(&g, rcond)?;
    if report.truncated > 0 {
        log::warn!(
            "dense decode: {} of {} singular values truncated; \
             reconstruction accuracy is degraded",
            report.truncated,
            nsh
        );
    }
    log::debug!("dense decode: {} midpoints, rank {}", nsh, report.rank);

    let c = g_pinv * q;

    let t = time_grid(dur, dt);
    let mut u = vec![0.0; t.len()];
    sinc_accumulate(&mut u, &t, &tsh, c.as_slice(), bw);
    Ok(u)
}
