//! Special functions used to build decoding matrices in closed form
//!
//! The dense time decoding machines need the sine integral (ideal
//! integrate-and-fire neurons) and the exponential integral with complex
//! argument (leaky neurons) to evaluate inner products of the sinc
//! reconstruction kernel against spike windows without numerical
//! quadrature.
//!
//! Numerical ranges: the Maclaurin series are used for small arguments
//! (|z| <= 10, extended to |z| < 20 in the left half plane where the
//! continued fraction degrades) and a 120-step backward continued
//! fraction elsewhere. Absolute accuracy is better than 1e-12 over the
//! argument ranges produced by the decoders (|z| up to a few hundred).

use crate::{Complex64, EULER_GAMMA};
use std::f64::consts::{FRAC_PI_2, PI};

/// Normalized sinc function `sin(pi x)/(pi x)` with `sinc(0) = 1`
pub fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        let px = PI * x;
        px.sin() / px
    }
}

/// Sine integral `Si(x) = int_0^x sin(t)/t dt`
///
/// Odd in `x`. Small arguments use the Maclaurin series; large arguments
/// use `Si(x) = pi/2 + Im E1(ix)`.
pub fn si(x: f64) -> f64 {
    if x < 0.0 {
        return -si(-x);
    }
    if x == 0.0 {
        return 0.0;
    }
    if x <= 10.0 {
        si_series(x)
    } else {
        FRAC_PI_2 + e1_cf(Complex64::new(0.0, x)).im
    }
}

/// Cosine integral `Ci(x) = gamma + ln x + int_0^x (cos(t)-1)/t dt` for `x > 0`
///
/// Returns NaN for non-positive arguments.
pub fn ci(x: f64) -> f64 {
    if x <= 0.0 {
        return f64::NAN;
    }
    if x <= 10.0 {
        ci_series(x)
    } else {
        -e1_cf(Complex64::new(0.0, x)).re
    }
}

/// Exponential integral `E1(z)` on the principal branch
///
/// The branch cut lies on the negative real axis; the value there is the
/// limit from above.
pub fn e1(z: Complex64) -> Complex64 {
    let a0 = z.norm();
    if a0 == 0.0 {
        return Complex64::new(f64::INFINITY, 0.0);
    }
    if a0 <= 10.0 || (z.re < 0.0 && a0 < 20.0) {
        e1_series(z)
    } else {
        e1_cf(z)
    }
}

/// Exponential integral `Ei(z)` for complex arguments
///
/// Evaluated through `E1` with a branch correction that stays accurate on
/// both sides of the cut:
/// `Ei(z) = -E1(-z) + (Log z - Log(1/z))/2 - Log(-z)`.
/// For real positive `z` this reduces to the usual real `Ei`.
pub fn ei(z: Complex64) -> Complex64 {
    -e1(-z) + (z.ln() - z.inv().ln()) * 0.5 - (-z).ln()
}

/// Maclaurin series for `Si`, accurate for `x <= 10`
fn si_series(x: f64) -> f64 {
    let x2 = x * x;
    let mut term = x;
    let mut sum = x;
    let mut k = 1u32;
    loop {
        let kf = k as f64;
        // term_k = term_{k-1} * (-x^2) (2k-1) / ((2k)(2k+1)^2)
        term *= -x2 * (2.0 * kf - 1.0) / ((2.0 * kf) * (2.0 * kf + 1.0) * (2.0 * kf + 1.0));
        sum += term;
        k += 1;
        if term.abs() < 1e-17 * sum.abs() || k > 60 {
            break;
        }
    }
    sum
}

/// Maclaurin series for `Ci`, accurate for `0 < x <= 10`
fn ci_series(x: f64) -> f64 {
    let x2 = x * x;
    let mut term = -x2 / 4.0;
    let mut sum = term;
    let mut k = 2u32;
    loop {
        let kf = k as f64;
        // term_k = term_{k-1} * (-x^2) (2k-2) / ((2k-1)(2k)^2)
        term *= -x2 * (2.0 * kf - 2.0) / ((2.0 * kf - 1.0) * (2.0 * kf) * (2.0 * kf));
        sum += term;
        k += 1;
        if term.abs() < 1e-17 * sum.abs().max(1.0) || k > 60 {
            break;
        }
    }
    EULER_GAMMA + x.ln() + sum
}

/// Power series for `E1(z)`:
/// `-gamma - Log z + sum_{k>=1} (-1)^{k+1} z^k / (k k!)`
fn e1_series(z: Complex64) -> Complex64 {
    let mut term = z;
    let mut sum = z;
    for k in 2..=200u32 {
        let kf = k as f64;
        term *= -z * (kf - 1.0) / (kf * kf);
        sum += term;
        if term.norm() < 1e-17 * sum.norm() {
            break;
        }
    }
    -EULER_GAMMA - z.ln() + sum
}

/// Backward continued-fraction evaluation of `E1(z)` for large `|z|`
fn e1_cf(z: Complex64) -> Complex64 {
    let mut zc = Complex64::new(0.0, 0.0);
    for k in (1..=120u32).rev() {
        let kf = k as f64;
        zc = kf / (1.0 + kf / (z + zc));
    }
    let mut v = (-z).exp() / (z + zc);
    // Principal-branch limit from above on the negative real axis
    if z.re <= 0.0 && z.im == 0.0 {
        v -= Complex64::new(0.0, PI);
    }
    v
}
