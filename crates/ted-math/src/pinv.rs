//! Rank-truncated pseudoinverse
//!
//! The reconstruction systems solved by the time decoding machines are
//! numerically rank deficient by construction, so every solve goes
//! through an SVD pseudoinverse with an explicit singular-value cutoff
//! ratio (`rcond`) rather than a direct inverse. Truncation is reported
//! back to the caller and logged as a quality warning, never raised as
//! an error.

use crate::{Complex64, MathError, Result};
use nalgebra::{DMatrix, DVector};

/// Outcome of a pseudoinverse computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinvReport {
    /// Numerical rank retained after truncation
    pub rank: usize,
    /// Number of singular values zeroed by the `rcond` cutoff
    pub truncated: usize,
}

/// Moore-Penrose pseudoinverse of a real matrix
///
/// Singular values below `rcond * sigma_max` are zeroed. Returns the
/// pseudoinverse together with a truncation report.
pub fn pinv(a: &DMatrix<f64>, rcond: f64) -> Result<(DMatrix<f64>, PinvReport)> {
    let (rows, cols) = a.shape();
    let svd = a.clone().svd(true, true);
    let u = svd.u.ok_or(MathError::SvdFailed { rows, cols })?;
    let v_t = svd.v_t.ok_or(MathError::SvdFailed { rows, cols })?;
    let (inv_s, report) = invert_singular_values(&svd.singular_values, rcond);
    let p = v_t.transpose() * DMatrix::from_diagonal(&inv_s) * u.transpose();
    Ok((p, report))
}

/// Moore-Penrose pseudoinverse of a complex matrix
///
/// Same truncation semantics as [`pinv`].
pub fn pinv_complex(
    a: &DMatrix<Complex64>,
    rcond: f64,
) -> Result<(DMatrix<Complex64>, PinvReport)> {
    let (rows, cols) = a.shape();
    let svd = a.clone().svd(true, true);
    let u = svd.u.ok_or(MathError::SvdFailed { rows, cols })?;
    let v_t = svd.v_t.ok_or(MathError::SvdFailed { rows, cols })?;
    let (inv_s, report) = invert_singular_values(&svd.singular_values, rcond);
    let inv_s = inv_s.map(|x| Complex64::new(x, 0.0));
    let p = v_t.adjoint() * DMatrix::from_diagonal(&inv_s) * u.adjoint();
    Ok((p, report))
}

fn invert_singular_values(s: &DVector<f64>, rcond: f64) -> (DVector<f64>, PinvReport) {
    let sigma_max = s.iter().cloned().fold(0.0_f64, f64::max);
    let cutoff = rcond * sigma_max;
    let mut rank = 0;
    let inv = s.map(|sv| {
        if sv > cutoff && sv > 0.0 {
            rank += 1;
            1.0 / sv
        } else {
            0.0
        }
    });
    let truncated = s.len() - rank;
    if truncated > 0 {
        log::debug!(
            "pseudoinverse truncated {} of {} singular values (rcond={:e})",
            truncated,
            s.len(),
            rcond
        );
    }
    (inv, PinvReport { rank, truncated })
}
