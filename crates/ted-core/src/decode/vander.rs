//! Vandermonde-system time decoding machines
//!
//! Alternative decoding path used block-wise by real-time decoders:
//! the reconstruction is phrased as a generalized Vandermonde system
//! over nodes on the unit circle and solved with the Björck-Pereyra
//! elimination, which stays accurate where the raw matrix's conditioning
//! would destroy a generic solve. Because the compensation principle
//! works on differences between spikes, the last spike is dropped.
//!
//! Three variants: two for spike trains of an asynchronous sigma-delta
//! modulator (one of them insensitive to the decoding threshold) and one
//! for integrate-and-fire trains.

use super::{iaf_quanta, spike_times, time_grid};
use crate::error::{Result, TedError};
use crate::params::{FirstSpike, IafParams};
use ted_math::{bpa_solve, Complex64};

/// Nodes, phases and degree shared by all three variants
struct VanderSystem {
    /// Unit-circle nodes `exp(j 2 bw t_i / n)`
    nodes: Vec<Complex64>,
    /// Diagonal phase factors `exp(j bw t_i)`
    phases: Vec<Complex64>,
    /// Effective polynomial degree `len(s) - 2`
    n: f64,
    /// System size `len(s) - 1`
    ns: usize,
}

fn vander_system(s: &[f64], bw: f64) -> Result<VanderSystem> {
    // Dropping the last spike costs one equation, and the node spacing
    // divides by ns - 1, so three intervals are the minimum
    if s.len() < 3 {
        return Err(TedError::insufficient_spikes(3, s.len()));
    }
    let ts = spike_times(s);
    let ns = s.len() - 1;
    let n = (ns - 1) as f64;
    let nodes = ts[..ns]
        .iter()
        .map(|&t| Complex64::new(0.0, 2.0 * bw * t / n).exp())
        .collect();
    let phases = ts[..ns]
        .iter()
        .map(|&t| Complex64::new(0.0, bw * t).exp())
        .collect();
    Ok(VanderSystem {
        nodes,
        phases,
        n,
        ns,
    })
}

/// Right-hand side `D P q`: phase-corrected suffix sums of the quanta
fn phased_suffix_sums(sys: &VanderSystem, q: &[f64]) -> Vec<Complex64> {
    let mut rhs = vec![Complex64::new(0.0, 0.0); sys.ns];
    let mut acc = 0.0;
    for i in (0..sys.ns).rev() {
        acc += q[i];
        rhs[i] = sys.phases[i] * acc;
    }
    rhs
}

/// Sum of weighted decaying complex exponentials over the time grid
fn exp_reconstruct(
    coeffs: &[Complex64],
    sys: &VanderSystem,
    dur: f64,
    dt: f64,
    bw: f64,
) -> Vec<f64> {
    let t = time_grid(dur, dt);
    let mut u = vec![0.0; t.len()];
    for (i, &di) in coeffs.iter().enumerate() {
        let c = Complex64::new(0.0, bw - i as f64 * 2.0 * bw / sys.n);
        let w = c * di;
        for (uk, &tk) in u.iter_mut().zip(&t) {
            *uk += (w * (-c * tk).exp()).re;
        }
    }
    u
}

/// Alternating quantum signs for an ASDM train
fn asdm_parity(sign: FirstSpike, i: usize) -> f64 {
    let flip = match sign {
        FirstSpike::Negative => i,
        FirstSpike::Positive => i + 1,
    };
    if flip % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

/// Decode an ASDM spike train through the Vandermonde formulation
///
/// `b`, `d` and `k` are the modulator's bias, threshold and integration
/// constant; `sign` is the sign of the train's first spike.
pub fn asdm_decode_vander(
    s: &[f64],
    dur: f64,
    dt: f64,
    bw: f64,
    b: f64,
    d: f64,
    k: f64,
    sign: FirstSpike,
) -> Result<Vec<f64>> {
    let sys = vander_system(s, bw)?;
    let q: Vec<f64> = (0..sys.ns)
        .map(|i| asdm_parity(sign, i) * (2.0 * k * d - b * s[i + 1]))
        .collect();
    let rhs = phased_suffix_sums(&sys, &q);
    let coeffs = bpa_solve(&sys.nodes, &rhs)?;
    log::debug!("asdm vander decode: {} nodes", sys.ns);
    Ok(exp_reconstruct(&coeffs, &sys, dur, dt, bw))
}

/// Threshold-insensitive ASDM Vandermonde decoder
///
/// Solves two auxiliary systems and projects out the component that
/// depends on the decoding threshold, so only the bias is needed.
pub fn asdm_decode_vander_ins(
    s: &[f64],
    dur: f64,
    dt: f64,
    bw: f64,
    b: f64,
    sign: FirstSpike,
) -> Result<Vec<f64>> {
    let sys = vander_system(s, bw)?;
    let ns = sys.ns;

    // Selector of every second interval, counted from the end
    let mut a = vec![0.0; ns];
    let mut idx = ns as isize - 1;
    while idx >= 0 {
        a[idx as usize] = 1.0;
        idx -= 2;
    }

    // Interval signs; note the convention is inverted relative to the
    // quanta of the plain variant
    let r: Vec<f64> = (0..ns)
        .map(|i| -asdm_parity(sign, i) * s[i + 1])
        .collect();

    // (P - a e_last^T) r: suffix sums with the last entry's contribution
    // removed on the selected rows
    let r_last = r[ns - 1];
    let mut rhs_x = vec![Complex64::new(0.0, 0.0); ns];
    let mut acc = 0.0;
    for i in (0..ns).rev() {
        acc += r[i];
        rhs_x[i] = sys.phases[i] * (acc - a[i] * r_last);
    }
    let x = bpa_solve(&sys.nodes, &rhs_x)?;

    let rhs_y: Vec<Complex64> = (0..ns).map(|i| sys.phases[i] * a[i]).collect();
    let y = bpa_solve(&sys.nodes, &rhs_y)?;

    // Project the threshold-dependent direction out of x
    let yh_x: Complex64 = y.iter().zip(&x).map(|(yi, xi)| yi.conj() * xi).sum();
    let yh_y: f64 = y.iter().map(|yi| yi.norm_sqr()).sum();
    let proj = yh_x / yh_y;
    let coeffs: Vec<Complex64> = x
        .iter()
        .zip(&y)
        .map(|(xi, yi)| (xi - yi * proj) * b)
        .collect();

    log::debug!("asdm vander decode (threshold-insensitive): {} nodes", ns);
    Ok(exp_reconstruct(&coeffs, &sys, dur, dt, bw))
}

/// Decode an integrate-and-fire spike train through the Vandermonde
/// formulation
pub fn iaf_decode_vander(
    s: &[f64],
    dur: f64,
    dt: f64,
    bw: f64,
    params: &IafParams,
) -> Result<Vec<f64>> {
    let sys = vander_system(s, bw)?;
    let q = iaf_quanta(s, params);
    let rhs = phased_suffix_sums(&sys, &q);
    let coeffs = bpa_solve(&sys.nodes, &rhs)?;
    log::debug!("iaf vander decode: {} nodes", sys.ns);
    Ok(exp_reconstruct(&coeffs, &sys, dur, dt, bw))
}
