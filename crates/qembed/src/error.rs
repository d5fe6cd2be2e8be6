//! Error types for embedding schemes.

use qembed_ir::IrError;
use thiserror::Error;

/// Errors that can occur while configuring or building an embedding.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EmbedError {
    /// Invalid scheme configuration (qubit count, gate kinds, selector).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input vector length does not match the scheme's expected length.
    #[error("Dimension mismatch in {scheme} embedding: expected {expected} entries, got {got}")]
    Dimension {
        /// Scheme that rejected the input.
        scheme: &'static str,
        /// Length computed from the configuration.
        expected: usize,
        /// Length supplied.
        got: usize,
    },

    /// Malformed configuration document.
    #[error("Failed to parse scheme configuration: {0}")]
    Parse(String),

    /// Configuration file could not be read.
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// Program assembly failed.
    #[error(transparent)]
    Ir(#[from] IrError),
}

/// Result type for embedding operations.
pub type EmbedResult<T> = Result<T, EmbedError>;
