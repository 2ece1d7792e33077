//! Numerical kernels for time encoding machines
//!
//! This crate provides the special functions and structured linear-algebra
//! routines that the time decoding machines in `ted-core` are built on:
//! closed-form sine/exponential integrals, a rank-truncated pseudoinverse,
//! and a Björck-Pereyra solver for ill-conditioned Vandermonde systems.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod bpa;
pub mod pinv;
pub mod special;

mod error;

pub use bpa::bpa_solve;
pub use error::{MathError, Result};
pub use pinv::{pinv, pinv_complex, PinvReport};
pub use special::{e1, ei, si, sinc};

/// Complex scalar type used throughout the decoding machinery
pub type Complex64 = num_complex::Complex<f64>;

/// Euler-Mascheroni constant
pub const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;
