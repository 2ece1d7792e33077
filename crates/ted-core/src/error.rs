//! Error types for the encode/decode engine
//!
//! Every error is a precondition violation detected before or during a
//! computation; calls abort immediately with no partial result and are
//! never retried, since rerunning a deterministic numeric computation on
//! the same bad input cannot succeed.

use crate::params::QuadratureMethod;
use thiserror::Error;

/// Result type for encode/decode operations
pub type Result<T> = std::result::Result<T, TedError>;

/// Errors that can occur while encoding or decoding
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TedError {
    /// The encoder bias does not dominate the signal peak
    #[error("Bias too low: peak amplitude {peak} >= bias {bias}")]
    BiasTooLow {
        /// Peak absolute signal amplitude
        peak: f64,
        /// Encoder bias
        bias: f64,
    },

    /// The recoverability rate expression is not real for these parameters
    #[error("Spike rate is not real; the reconstruction condition cannot hold")]
    NonRealRate,

    /// The closed-form sufficient condition for perfect recovery fails
    #[error(
        "Reconstruction condition violated: rate {rate} >= bound {bound}; \
         try raising b or reducing d"
    )]
    ReconstructionConditionViolated {
        /// Normalized spike rate
        rate: f64,
        /// Admissible bound `(1-e)/(1+e)`
        bound: f64,
    },

    /// Encoder resampling resolution is negative or coarser than the input
    #[error("Encoding resolution {dte} must lie in [0, {dt}]")]
    Resolution {
        /// Requested encoding resolution (s)
        dte: f64,
        /// Input sampling resolution (s)
        dt: f64,
    },

    /// Quadrature method incompatible with the neuron's leak configuration
    #[error("Unrecognized quadrature method {method:?} for this neuron")]
    UnrecognizedQuadratureMethod {
        /// Offending method tag
        method: QuadratureMethod,
    },

    /// Too few inter-spike intervals to build a reconstruction system
    #[error("Spike train must contain at least {required} intervals, got {got}")]
    InsufficientSpikes {
        /// Minimum interval count for this decoder
        required: usize,
        /// Interval count actually supplied
        got: usize,
    },

    /// The population decoder received no spike trains at all
    #[error("No spike data given")]
    NoSpikeData,

    /// Invalid parameter value
    #[error("Invalid parameter {parameter}: {value} (expected {constraint})")]
    InvalidParameter {
        /// Parameter name
        parameter: String,
        /// Invalid value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Numerical kernel failure
    #[error(transparent)]
    Math(#[from] ted_math::MathError),

    /// Signal layer failure
    #[error(transparent)]
    Signal(#[from] ted_signal::SignalError),
}

impl TedError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(
        parameter: impl Into<String>,
        value: impl Into<String>,
        constraint: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.into(),
            constraint: constraint.into(),
        }
    }

    /// Create an insufficient-spikes error
    pub fn insufficient_spikes(required: usize, got: usize) -> Self {
        Self::InsufficientSpikes { required, got }
    }
}
