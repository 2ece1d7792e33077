//! Population time decoding machine
//!
//! Fuses the spike trains of several differently-parameterized encoders
//! watching the same signal into one block-structured reconstruction
//! system. Each `(l, m)` block couples encoder `l`'s spike windows with
//! encoder `m`'s midpoints; the leak status and time constant of the
//! row encoder select the closed form for the block's entries. Encoders
//! may contribute different numbers of spikes.

use super::{
    iaf_quanta, leaky_g_entry, leaky_log_const, midpoints, sinc_accumulate, spike_times, time_grid,
};
use crate::error::{Result, TedError};
use crate::params::IafParams;
use nalgebra::{DMatrix, DVector};
use std::f64::consts::PI;
use ted_math::{pinv, si};

/// Decode a signal jointly encoded by an ensemble of neurons
///
/// `trains[l]` holds the inter-spike intervals of encoder `l` with
/// parameters `params[l]`. Recoverability of the individual encoders is
/// the caller's obligation and is not checked here.
pub fn iaf_decode_pop(
    trains: &[Vec<f64>],
    dur: f64,
    dt: f64,
    bw: f64,
    params: &[IafParams],
    rcond: f64,
) -> Result<Vec<f64>> {
    if trains.is_empty() {
        return Err(TedError::NoSpikeData);
    }
    if params.len() != trains.len() {
        return Err(TedError::invalid_parameter(
            "params",
            params.len().to_string(),
            format!("one parameter set per train ({})", trains.len()),
        ));
    }
    for s in trains {
        if s.len() < 2 {
            return Err(TedError::insufficient_spikes(2, s.len()));
        }
    }

    let ts_list: Vec<Vec<f64>> = trains.iter().map(|s| spike_times(s)).collect();
    let tsh_list: Vec<Vec<f64>> = ts_list.iter().map(|ts| midpoints(ts)).collect();
    let nsh_list: Vec<usize> = tsh_list.iter().map(Vec::len).collect();

    let offsets: Vec<usize> = nsh_list
        .iter()
        .scan(0, |acc, &n| {
            let o = *acc;
            *acc += n;
            Some(o)
        })
        .collect();
    let total: usize = nsh_list.iter().sum();

    let mut g = DMatrix::<f64>::zeros(total, total);
    let mut q = DVector::<f64>::zeros(total);

    for (l, pl) in params.iter().enumerate() {
        let ts = &ts_list[l];
        // Row block of encoder l against every encoder's midpoints; the
        // closed form follows encoder l's leak status
        if pl.is_leaky() {
            let rc = pl.rc();
            let lc = leaky_log_const(rc * bw);
            for (m, tsh) in tsh_list.iter().enumerate() {
                for n in 0..nsh_list[l] {
                    let (t0, t1) = (ts[n], ts[n + 1]);
                    for (k, &tm) in tsh.iter().enumerate() {
                        g[(offsets[l] + n, offsets[m] + k)] =
                            leaky_g_entry(t0, t1, tm, rc, bw, lc);
                    }
                }
            }
        } else {
            for (m, tsh) in tsh_list.iter().enumerate() {
                for (k, &tm) in tsh.iter().enumerate() {
                    let si_col: Vec<f64> = ts.iter().map(|&t| si(bw * (t - tm)) / PI).collect();
                    for n in 0..nsh_list[l] {
                        g[(offsets[l] + n, offsets[m] + k)] = si_col[n + 1] - si_col[n];
                    }
                }
            }
        }

        for (n, qv) in iaf_quanta(&trains[l], pl).into_iter().enumerate() {
            q[offsets[l] + n] = qv;
        }
    }

    let (g_pinv, report) = pinv(&g, rcond)?;
    if report.truncated > 0 {
        log::warn!(
            "population decode: {} of {} singular values truncated",
            report.truncated,
            total
        );
    }
    log::debug!(
        "population decode: {} encoders, {} total midpoints, rank {}",
        trains.len(),
        total,
        report.rank
    );

    let c = g_pinv * q;

    let t = time_grid(dur, dt);
    let mut u = vec![0.0; t.len()];
    for (m, tsh) in tsh_list.iter().enumerate() {
        let block = &c.as_slice()[offsets[m]..offsets[m] + nsh_list[m]];
        sinc_accumulate(&mut u, &t, tsh, block, bw);
    }
    Ok(u)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_population() {
        assert!(matches!(
            iaf_decode_pop(&[], 0.1, 1e-3, 100.0, &[], 1e-8),
            Err(TedError::NoSpikeData)
        ));
    }

    #[test]
    fn test_short_train_rejected() {
        let p = IafParams::ideal(2.0, 0.5).unwrap();
        let trains = vec![vec![0.01; 6], vec![0.02]];
        assert!(matches!(
            iaf_decode_pop(&trains, 0.1, 1e-3, 100.0, &[p, p], 1e-8),
            Err(TedError::InsufficientSpikes { got: 1, .. })
        ));
    }

    #[test]
    fn test_parameter_count_mismatch() {
        let p = IafParams::ideal(2.0, 0.5).unwrap();
        let trains = vec![vec![0.01; 6]];
        assert!(matches!(
            iaf_decode_pop(&trains, 0.1, 1e-3, 100.0, &[p, p], 1e-8),
            Err(TedError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_single_encoder_matches_dense() {
        // With one encoder the population system reduces to the dense one
        let p = IafParams::ideal(2.0, 0.5).unwrap();
        let s = vec![0.011, 0.009, 0.012, 0.01, 0.008, 0.013];
        let pop = iaf_decode_pop(&[s.clone()], 0.06, 1e-3, 100.0, &[p], 1e-8).unwrap();
        let dense = super::super::iaf_decode(&s, 0.06, 1e-3, 100.0, &p, 1e-8).unwrap();
        for (a, b) in pop.iter().zip(&dense) {
            assert!((a - b).abs() < 1e-9);
        }
    }
}
