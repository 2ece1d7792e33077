//! Time decoding machines
//!
//! All decoders consume a complete, finite spike train (the sequence of
//! inter-spike intervals) together with the parameters of the encoder
//! that produced it, and return the reconstructed signal on a uniform
//! time grid. Matrices and vectors live only for the duration of a
//! decode call; no state is shared between calls.

mod dense;
mod fast;
mod pop;
mod vander;

pub use dense::iaf_decode;
pub use fast::iaf_decode_fast;
pub use pop::iaf_decode_pop;
pub use vander::{asdm_decode_vander, asdm_decode_vander_ins, iaf_decode_vander};

use crate::params::IafParams;
use std::f64::consts::PI;
use ted_math::{ei, sinc, Complex64};

/// Absolute spike times: the cumulative sum of the intervals
pub(crate) fn spike_times(s: &[f64]) -> Vec<f64> {
    let mut acc = 0.0;
    s.iter()
        .map(|&iv| {
            acc += iv;
            acc
        })
        .collect()
}

/// Midpoints between consecutive spike times
pub(crate) fn midpoints(ts: &[f64]) -> Vec<f64> {
    ts.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect()
}

/// Uniform reconstruction grid of `round(dur / dt)` samples starting at 0
///
/// Rounding, not ceiling: `dur / dt` can land a few ulps above the
/// integer it represents, and the grid must agree sample-for-sample
/// with a signal sampled at the same `dt` over the same duration.
pub(crate) fn time_grid(dur: f64, dt: f64) -> Vec<f64> {
    let n = (dur / dt).round() as usize;
    (0..n).map(|i| i as f64 * dt).collect()
}

/// Charge quantum represented by each interval after the first
///
/// The first interval anchors the start time but contributes no
/// reconstruction equation.
pub(crate) fn iaf_quanta(s: &[f64], params: &IafParams) -> Vec<f64> {
    if params.is_leaky() {
        let rc = params.rc();
        s[1..]
            .iter()
            .map(|&iv| params.c * (params.d + params.b * params.r * ((-iv / rc).exp() - 1.0)))
            .collect()
    } else {
        s[1..]
            .iter()
            .map(|&iv| params.c * params.d - params.b * iv)
            .collect()
    }
}

/// Sum of weighted sinc kernels centered at the spike midpoints
pub(crate) fn sinc_accumulate(u: &mut [f64], t: &[f64], tsh: &[f64], coeffs: &[f64], bw: f64) {
    let bwpi = bw / PI;
    for (&tm, &c) in tsh.iter().zip(coeffs) {
        let w = bwpi * c;
        for (uk, &tk) in u.iter_mut().zip(t) {
            *uk += sinc(bwpi * (tk - tm)) * w;
        }
    }
}

/// Branch-correction constant shared by every leaky matrix entry of one
/// encoder; depends only on `RC * bw`
pub(crate) fn leaky_log_const(rcbw: f64) -> Complex64 {
    let i = Complex64::new(0.0, 1.0);
    let dm = Complex64::new(rcbw, -1.0); // RC*bw - j
    let dp = Complex64::new(rcbw, 1.0); // RC*bw + j
    Complex64::new(-1.0, -rcbw).ln() + Complex64::new(1.0, -rcbw).ln()
        - Complex64::new(-1.0, rcbw).ln()
        - Complex64::new(1.0, rcbw).ln()
        + (-i / dm).ln()
        - (i / dm).ln()
        + (-i / dp).ln()
        - (i / dp).ln()
}

/// Closed-form reconstruction matrix entry for a leaky neuron
///
/// Equals the integral over `[t0, t1]` of the bandwidth-normalized sinc
/// kernel centered at `tm`, weighted by the neuron's exponential decay,
/// expressed through the complex exponential integral instead of
/// numerical quadrature. The combination splits on whether the kernel
/// center lies inside the integration window, where the integrand's
/// antiderivative crosses a branch cut.
pub(crate) fn leaky_g_entry(
    t0: f64,
    t1: f64,
    tm: f64,
    rc: f64,
    bw: f64,
    log_const: Complex64,
) -> f64 {
    let rcbw = rc * bw;
    let wm = Complex64::new(1.0, -rcbw); // 1 - j*RC*bw
    let wp = Complex64::new(1.0, rcbw); // 1 + j*RC*bw
    let em0 = ei(wm * ((t0 - tm) / rc));
    let em1 = ei(wm * ((t1 - tm) / rc));
    let ep0 = ei(wp * ((t0 - tm) / rc));
    let ep1 = ei(wp * ((t1 - tm) / rc));
    let decay = ((tm - t1) / rc).exp();
    let v = if t0 < tm && tm < t1 {
        Complex64::new(0.0, -0.25)
            * decay
            * ((em0 - em1 - ep0 + ep1) * 2.0 + log_const)
            / PI
    } else {
        Complex64::new(0.0, -0.5) * decay * (em0 - em1 - ep0 + ep1) / PI
    };
    v.re
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spike_times_and_midpoints() {
        let s = [0.1, 0.2, 0.3];
        let ts = spike_times(&s);
        assert_eq!(ts.len(), 3);
        assert!((ts[2] - 0.6).abs() < 1e-15);
        let tsh = midpoints(&ts);
        assert_eq!(tsh.len(), 2);
        assert!((tsh[0] - 0.2).abs() < 1e-15);
        assert!((tsh[1] - 0.45).abs() < 1e-15);
    }

    #[test]
    fn test_time_grid_excludes_duration() {
        let t = time_grid(0.1, 0.025);
        assert_eq!(t.len(), 4);
        assert!((t[3] - 0.075).abs() < 1e-15);
    }

    #[test]
    fn test_time_grid_matches_generated_signal_length() {
        // 0.1 / 1e-6 evaluates a few ulps above 100000 in f64; the
        // decode grid must still line up with a signal sampled at the
        // same resolution over the same duration
        let (dur, dt) = (0.1, 1e-6);
        assert!(dur / dt > 100_000.0);
        let u = ted_signal::TestSignal::new(2.0 * PI * 32.0)
            .generate(dur, dt, 0)
            .unwrap();
        assert_eq!(time_grid(dur, dt).len(), u.len());
    }

    #[test]
    fn test_quanta_leaky_limit() {
        // As R grows the leaky quanta approach the ideal ones
        let s = [0.01, 0.012, 0.009];
        let ideal = IafParams::new(3.5, 0.7, f64::INFINITY, 0.01).unwrap();
        let near_ideal = IafParams::new(3.5, 0.7, 1e9, 0.01).unwrap();
        let qi = iaf_quanta(&s, &ideal);
        let ql = iaf_quanta(&s, &near_ideal);
        for (a, b) in qi.iter().zip(&ql) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn test_leaky_entry_matches_quadrature() {
        // Compare the closed form against a trapezoid-rule integral of
        // sinc(bw/pi (t - tm)) * bw/pi * exp((t1 - t)/-RC)
        let (rc, bw) = (0.1, 2.0 * PI * 32.0);
        let lc = leaky_log_const(rc * bw);
        let bwpi = bw / PI;
        for (t0, t1, tm) in [
            (0.010, 0.013, 0.0115), // center inside the window
            (0.010, 0.013, 0.020),  // center outside the window
            (0.040, 0.0405, 0.008),
        ] {
            let closed = leaky_g_entry(t0, t1, tm, rc, bw, lc);
            let n = 20_000;
            let h = (t1 - t0) / n as f64;
            let f = |t: f64| sinc(bwpi * (t - tm)) * bwpi * ((t1 - t) / -rc).exp();
            let mut quad = (f(t0) + f(t1)) / 2.0;
            for k in 1..n {
                quad += f(t0 + k as f64 * h);
            }
            quad *= h;
            assert!(
                (closed - quad).abs() < 1e-6,
                "t0={} t1={} tm={}: closed={} quad={}",
                t0,
                t1,
                tm,
                closed,
                quad
            );
        }
    }
}
