//! Error types for the numerical kernels

use thiserror::Error;

/// Result type for math operations
pub type Result<T> = std::result::Result<T, MathError>;

/// Errors that can occur in the numerical kernels
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Operand dimensions do not agree
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected dimension
        expected: usize,
        /// Dimension actually supplied
        got: usize,
    },

    /// Two Vandermonde nodes coincide, so the system is singular
    #[error("Coincident Vandermonde nodes at indices {first} and {second}")]
    CoincidentNodes {
        /// Index of the first node of the coincident pair
        first: usize,
        /// Index of the second node of the coincident pair
        second: usize,
    },

    /// Singular value decomposition did not converge
    #[error("SVD failed to converge for a {rows}x{cols} matrix")]
    SvdFailed {
        /// Number of matrix rows
        rows: usize,
        /// Number of matrix columns
        cols: usize,
    },
}

impl MathError {
    /// Create a dimension mismatch error
    pub fn dimension_mismatch(expected: usize, got: usize) -> Self {
        Self::DimensionMismatch { expected, got }
    }

    /// Create a coincident-nodes error
    pub fn coincident_nodes(first: usize, second: usize) -> Self {
        Self::CoincidentNodes { first, second }
    }
}
