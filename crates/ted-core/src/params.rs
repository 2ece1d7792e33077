//! Encoder parameter types

use crate::error::{Result, TedError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Integration rule used by the encoder
///
/// Ideal (non-leaky) neurons integrate with rectangular or trapezoidal
/// quadrature; leaky neurons always use the exponential Euler rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum QuadratureMethod {
    /// Rectangular quadrature (ideal neuron)
    Rectangular,
    /// Trapezoidal quadrature (ideal neuron); consumes one look-ahead sample
    Trapezoidal,
    /// Exponential Euler decay-and-forcing step (leaky neuron)
    ExponentialEuler,
}

/// Sign of the leading spike of an ASDM spike train
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FirstSpike {
    /// The train starts with a negative spike
    Negative,
    /// The train starts with a positive spike
    Positive,
}

/// Parameters of an integrate-and-fire neuron
///
/// `r = f64::INFINITY` denotes the ideal (non-leaky) integrator; any
/// finite positive `r` makes the neuron leaky.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IafParams {
    /// Bias added to the input before integration
    pub b: f64,
    /// Firing threshold
    pub d: f64,
    /// Membrane resistance; infinite for the ideal integrator
    pub r: f64,
    /// Membrane capacitance
    pub c: f64,
}

impl IafParams {
    /// Create parameters with validation
    pub fn new(b: f64, d: f64, r: f64, c: f64) -> Result<Self> {
        if !(r > 0.0) {
            return Err(TedError::invalid_parameter("r", r.to_string(), "> 0.0"));
        }
        if !(c > 0.0 && c.is_finite()) {
            return Err(TedError::invalid_parameter(
                "c",
                c.to_string(),
                "finite and > 0.0",
            ));
        }
        if !(d > 0.0 && d.is_finite()) {
            return Err(TedError::invalid_parameter(
                "d",
                d.to_string(),
                "finite and > 0.0",
            ));
        }
        if !b.is_finite() {
            return Err(TedError::invalid_parameter("b", b.to_string(), "finite"));
        }
        Ok(Self { b, d, r, c })
    }

    /// Ideal integrate-and-fire neuron with unit capacitance
    pub fn ideal(b: f64, d: f64) -> Result<Self> {
        Self::new(b, d, f64::INFINITY, 1.0)
    }

    /// Whether the neuron leaks charge between spikes
    pub fn is_leaky(&self) -> bool {
        self.r.is_finite()
    }

    /// Membrane time constant `R * C`; infinite for the ideal neuron
    pub fn rc(&self) -> f64 {
        self.r * self.c
    }
}
