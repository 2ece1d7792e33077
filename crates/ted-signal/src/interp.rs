//! Band-limited resampling
//!
//! The encoder can integrate at a finer resolution than the input
//! signal's sampling step; the input is then interpolated onto the finer
//! grid first. Interpolation is done with the sinc kernel so the
//! band-limited structure of the signal is preserved.

use crate::{Result, SignalError};

fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        let px = std::f64::consts::PI * x;
        px.sin() / px
    }
}

/// Upsample a signal by an integer factor using sinc interpolation
///
/// Output sample `j` sits at input coordinate `j / factor`. Existing
/// samples are reproduced exactly. Cost is `O(n_out * n_in)`, which is
/// acceptable for the short blocks the encoder resamples.
pub fn resample_sinc(u: &[f64], factor: usize) -> Result<Vec<f64>> {
    if factor == 0 {
        return Err(SignalError::invalid_parameter(
            "factor",
            "0",
            ">= 1",
        ));
    }
    if factor == 1 || u.is_empty() {
        return Ok(u.to_vec());
    }
    let n_out = u.len() * factor;
    let mut out = Vec::with_capacity(n_out);
    for j in 0..n_out {
        let t = j as f64 / factor as f64;
        if j % factor == 0 {
            out.push(u[j / factor]);
            continue;
        }
        let mut acc = 0.0;
        for (i, &ui) in u.iter().enumerate() {
            acc += ui * sinc(t - i as f64);
        }
        out.push(acc);
    }
    Ok(out)
}
