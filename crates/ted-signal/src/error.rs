//! Error types for the signal layer

use thiserror::Error;

/// Result type for signal operations
pub type Result<T> = std::result::Result<T, SignalError>;

/// Errors that can occur in the signal layer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SignalError {
    /// No signal registered under the given name
    #[error("No signal named `{name}`")]
    NoSuchSignal {
        /// Requested signal name
        name: String,
    },

    /// A signal with the given name already exists
    #[error("Signal `{name}` already exists")]
    DuplicateSignal {
        /// Conflicting signal name
        name: String,
    },

    /// A block read past the end of a stored signal
    #[error("Block [{offset}, {offset}+{len}) out of range for signal of length {available}")]
    BlockOutOfRange {
        /// Requested block offset
        offset: usize,
        /// Requested block length
        len: usize,
        /// Stored signal length
        available: usize,
    },

    /// Invalid generator or resampler parameter
    #[error("Invalid parameter {parameter}: {value} (expected {constraint})")]
    InvalidParameter {
        /// Parameter name
        parameter: String,
        /// Invalid value
        value: String,
        /// Constraint description
        constraint: String,
    },
}

impl SignalError {
    /// Create a no-such-signal error
    pub fn no_such_signal(name: impl Into<String>) -> Self {
        Self::NoSuchSignal { name: name.into() }
    }

    /// Create a duplicate-signal error
    pub fn duplicate_signal(name: impl Into<String>) -> Self {
        Self::DuplicateSignal { name: name.into() }
    }

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
}
