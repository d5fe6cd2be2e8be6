//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur while assembling a gate program.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit index lies outside the declared register.
    #[error("Qubit {qubit} out of range for {num_qubits}-qubit program{}", format_gate_context(.gate_name))]
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Declared qubit count.
        num_qubits: u32,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Gate requires a different number of qubits.
    #[error("Gate '{gate_name}' requires {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Name of the gate.
        gate_name: String,
        /// Expected number of qubits.
        expected: u32,
        /// Actual number of qubits provided.
        got: u32,
    },

    /// Duplicate qubit in operation.
    #[error("Duplicate qubit {qubit} in operation{}", format_gate_context(.gate_name))]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Parameter references a feature the program does not declare.
    #[error("Feature index {index} does not resolve in input vector '{vector}' of length {len}")]
    UnresolvedFeature {
        /// Referenced feature index.
        index: usize,
        /// Name of the declared input vector.
        vector: String,
        /// Length of the declared input vector.
        len: usize,
    },

    /// A parameter vector with this name was already allocated.
    #[error("Parameter vector '{0}' is already allocated")]
    DuplicateParameter(String),

    /// Vector name is not an identifier (`[A-Za-z_][A-Za-z0-9_]*`).
    #[error("Invalid parameter vector name '{0}': expected an identifier")]
    InvalidVectorName(String),

    /// Program declared with zero qubits.
    #[error("Program '{0}' must declare at least one qubit")]
    EmptyRegister(String),

    /// Binding values of the wrong length.
    #[error("Cannot bind {got} values to input vector of length {expected}")]
    BindingLengthMismatch {
        /// Declared input length.
        expected: usize,
        /// Number of values supplied.
        got: usize,
    },
}

/// Helper function to format optional gate context.
#[allow(clippy::ref_option)]
fn format_gate_context(gate_name: &Option<String>) -> String {
    match gate_name {
        Some(name) => format!(" (gate: {name})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
