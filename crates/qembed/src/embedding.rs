//! The common interface of all embedding schemes.

use std::fmt;

use qembed_ir::{CircuitProgram, FeatureVector, ParameterTable};
use tracing::debug;

use crate::error::{EmbedError, EmbedResult};

/// Name of the input vector allocated by [`Embedding::build`].
pub const DEFAULT_INPUT_NAME: &str = "x";

/// A deterministic mapping from a feature vector to a gate program.
///
/// Implementations hold only their frozen configuration. Every call returns a
/// fresh [`CircuitProgram`], so one embedding can serve many threads at once.
pub trait Embedding: fmt::Debug + Send + Sync {
    /// Short scheme name, e.g. `"angle"`.
    fn name(&self) -> &'static str;

    /// Number of qubits the program acts on.
    fn num_qubits(&self) -> u32;

    /// Exact input length this embedding consumes.
    fn input_len(&self) -> usize;

    /// Build the program for a declared input vector.
    ///
    /// Fails with [`EmbedError::Dimension`] before emitting anything if the
    /// vector length differs from [`input_len`](Embedding::input_len).
    fn embed(&self, inputs: &FeatureVector) -> EmbedResult<CircuitProgram>;

    /// Allocate a symbolic input vector named `vector` in `table` and build
    /// the program against it.
    fn build_into(&self, table: &mut ParameterTable, vector: &str) -> EmbedResult<CircuitProgram> {
        let inputs = table.allocate_vector(vector, self.input_len())?;
        debug!(
            scheme = self.name(),
            vector,
            slots = inputs.len(),
            "allocated input parameters"
        );
        self.embed(&inputs)
    }

    /// Build against a fresh parameter table, returned alongside the program.
    fn build(&self) -> EmbedResult<(CircuitProgram, ParameterTable)> {
        let mut table = ParameterTable::new();
        let program = self.build_into(&mut table, DEFAULT_INPUT_NAME)?;
        Ok((program, table))
    }

    /// Build for concrete feature values.
    fn embed_values(&self, values: &[f64]) -> EmbedResult<CircuitProgram> {
        self.embed(&FeatureVector::from_values(
            DEFAULT_INPUT_NAME,
            values.iter().copied(),
        ))
    }
}

/// Reject an empty register.
pub(crate) fn check_num_qubits(scheme: &str, num_qubits: u32) -> EmbedResult<()> {
    if num_qubits == 0 {
        return Err(EmbedError::Configuration(format!(
            "{scheme} embedding requires a positive qubit count"
        )));
    }
    Ok(())
}

/// Reject an input vector of the wrong length.
pub(crate) fn check_dimension(
    scheme: &'static str,
    expected: usize,
    inputs: &FeatureVector,
) -> EmbedResult<()> {
    if inputs.len() != expected {
        return Err(EmbedError::Dimension {
            scheme,
            expected,
            got: inputs.len(),
        });
    }
    Ok(())
}
