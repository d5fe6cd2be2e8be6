//! Basis embedding: one X rotation by `π·x[i]` per qubit.
//!
//! Features in {0, 1} push each qubit to a computational basis state. Other
//! values are not clamped; they yield valid but non-basis rotations.

use qembed_ir::{CircuitProgram, FeatureVector, ParameterExpression, QubitId};
use tracing::{debug, instrument};

use crate::embedding::{Embedding, check_dimension, check_num_qubits};
use crate::error::EmbedResult;

/// Basis-state embedding over `num_qubits` qubits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasisEmbedding {
    num_qubits: u32,
}

impl BasisEmbedding {
    /// Scheme name.
    pub const NAME: &'static str = "basis";

    /// Create a basis embedding.
    pub fn new(num_qubits: u32) -> EmbedResult<Self> {
        check_num_qubits(Self::NAME, num_qubits)?;
        Ok(Self { num_qubits })
    }

    /// Input length for `num_qubits` qubits.
    pub fn expected_length(num_qubits: u32) -> usize {
        num_qubits as usize
    }
}

impl Embedding for BasisEmbedding {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    fn input_len(&self) -> usize {
        Self::expected_length(self.num_qubits)
    }

    #[instrument(level = "debug", skip_all, fields(num_qubits = self.num_qubits))]
    fn embed(&self, inputs: &FeatureVector) -> EmbedResult<CircuitProgram> {
        check_dimension(Self::NAME, self.input_len(), inputs)?;

        let mut program = CircuitProgram::with_capacity(
            Self::NAME,
            self.num_qubits,
            inputs.clone(),
            self.input_len(),
        )?;
        for (i, qubit) in (0..self.num_qubits).enumerate() {
            program.basis_rx(ParameterExpression::pi_times_feature(i), QubitId(qubit))?;
        }

        debug!(ops = program.len(), "basis embedding built");
        Ok(program)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EmbedError;
    use qembed_ir::EmbeddingGate;
    use std::f64::consts::PI;

    #[test]
    fn test_one_rotation_per_qubit() {
        let embedding = BasisEmbedding::new(3).unwrap();
        let (program, table) = embedding.build().unwrap();

        assert_eq!(program.len(), 3);
        assert_eq!(table.len(), 3);
        for (i, op) in program.operations().iter().enumerate() {
            assert_eq!(op.qubits, vec![QubitId(i as u32)]);
            assert_eq!(
                op.gate,
                EmbeddingGate::BasisRx(ParameterExpression::pi_times_feature(i))
            );
        }
    }

    #[test]
    fn test_numeric_values() {
        let embedding = BasisEmbedding::new(2).unwrap();
        let program = embedding.embed_values(&[1.0, 0.0]).unwrap();
        let angles: Vec<_> = program
            .operations()
            .iter()
            .map(|op| program.evaluate(op.gate.parameters()[0]).unwrap())
            .collect();
        assert_eq!(angles, vec![PI, 0.0]);
    }

    #[test]
    fn test_out_of_range_value_not_clamped() {
        let program = BasisEmbedding::new(1).unwrap().embed_values(&[0.5]).unwrap();
        let theta = program.evaluate(program.operations()[0].gate.parameters()[0]);
        assert_eq!(theta, Some(PI / 2.0));
    }

    #[test]
    fn test_zero_qubits_rejected() {
        assert!(matches!(
            BasisEmbedding::new(0),
            Err(EmbedError::Configuration(_))
        ));
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = BasisEmbedding::new(3)
            .unwrap()
            .embed_values(&[1.0, 0.0])
            .unwrap_err();
        assert!(matches!(
            err,
            EmbedError::Dimension {
                scheme: "basis",
                expected: 3,
                got: 2
            }
        ));
    }
}
