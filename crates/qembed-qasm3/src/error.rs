//! Error types for the QASM3 emitter.

use thiserror::Error;

/// Errors that can occur while emitting QASM.
#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum EmitError {
    /// A resolved parameter is NaN or infinite and has no QASM literal.
    #[error("Gate '{gate}' has non-finite parameter {value}")]
    NonFiniteParameter {
        /// Gate being emitted.
        gate: String,
        /// The offending value.
        value: f64,
    },

    /// Input vector name cannot be declared in QASM.
    #[error("Input vector name '{0}' is not a valid QASM identifier")]
    InvalidIdentifier(String),

    /// Operation arrived before the register was declared.
    #[error("Operation '{0}' emitted before register declaration")]
    Undeclared(String),
}

/// Result type for emitter operations.
pub type EmitResult<T> = Result<T, EmitError>;
