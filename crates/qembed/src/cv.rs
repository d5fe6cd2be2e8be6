//! Displacement and squeezing embeddings.
//!
//! One continuous-variable gate per qubit. Either the magnitude or the angle
//! of each gate is read from the input; the other is held at
//! [`FIXED_PARAMETER`].

use qembed_ir::{CircuitProgram, CvGateKind, CvParams, FeatureVector, ParameterExpression, QubitId};
use tracing::{debug, instrument};

use crate::embedding::{Embedding, check_dimension, check_num_qubits};
use crate::error::EmbedResult;

/// Value of the gate parameter that is not read from the input.
pub const FIXED_PARAMETER: f64 = 0.1;

/// Per-qubit CV gate embedding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CvEmbedding {
    kind: CvGateKind,
    num_qubits: u32,
    parameterize_amplitude: bool,
}

impl CvEmbedding {
    /// Create a CV embedding of the given kind.
    ///
    /// With `parameterize_amplitude` qubit `i` gets `(x[i], 0.1)`, otherwise
    /// `(0.1, x[i])`.
    pub fn new(kind: CvGateKind, num_qubits: u32, parameterize_amplitude: bool) -> EmbedResult<Self> {
        check_num_qubits(kind.name(), num_qubits)?;
        Ok(Self {
            kind,
            num_qubits,
            parameterize_amplitude,
        })
    }

    /// Displacement embedding.
    pub fn displacement(num_qubits: u32, parameterize_amplitude: bool) -> EmbedResult<Self> {
        Self::new(CvGateKind::Displacement, num_qubits, parameterize_amplitude)
    }

    /// Squeezing embedding.
    pub fn squeezing(num_qubits: u32, parameterize_amplitude: bool) -> EmbedResult<Self> {
        Self::new(CvGateKind::Squeezing, num_qubits, parameterize_amplitude)
    }

    /// Input length for `num_qubits` qubits.
    pub fn expected_length(num_qubits: u32) -> usize {
        num_qubits as usize
    }

    /// Gate kind applied on every qubit.
    pub fn kind(&self) -> CvGateKind {
        self.kind
    }

    /// Whether the magnitude (rather than the angle) is read from the input.
    pub fn parameterize_amplitude(&self) -> bool {
        self.parameterize_amplitude
    }

    fn params(&self, index: usize) -> CvParams {
        let feature = ParameterExpression::feature(index);
        if self.parameterize_amplitude {
            CvParams::new(feature, FIXED_PARAMETER)
        } else {
            CvParams::new(FIXED_PARAMETER, feature)
        }
    }
}

impl Embedding for CvEmbedding {
    fn name(&self) -> &'static str {
        self.kind.name()
    }

    fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    fn input_len(&self) -> usize {
        Self::expected_length(self.num_qubits)
    }

    #[instrument(
        level = "debug",
        skip_all,
        fields(kind = %self.kind, num_qubits = self.num_qubits)
    )]
    fn embed(&self, inputs: &FeatureVector) -> EmbedResult<CircuitProgram> {
        check_dimension(self.kind.name(), self.input_len(), inputs)?;

        let mut program = CircuitProgram::with_capacity(
            self.kind.name(),
            self.num_qubits,
            inputs.clone(),
            self.input_len(),
        )?;
        for (i, qubit) in (0..self.num_qubits).enumerate() {
            program.cv(self.kind, self.params(i), QubitId(qubit))?;
        }

        debug!(
            ops = program.len(),
            parameterize_amplitude = self.parameterize_amplitude,
            "cv embedding built"
        );
        Ok(program)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EmbedError;
    use qembed_ir::EmbeddingGate;

    #[test]
    fn test_amplitude_parameterized() {
        let embedding = CvEmbedding::displacement(3, true).unwrap();
        let (program, _) = embedding.build().unwrap();

        assert_eq!(program.name(), "displacement");
        assert_eq!(program.len(), 3);
        for (i, op) in program.operations().iter().enumerate() {
            assert_eq!(op.qubits, vec![QubitId(i as u32)]);
            assert_eq!(
                op.gate,
                EmbeddingGate::Displacement(CvParams::new(
                    ParameterExpression::feature(i),
                    FIXED_PARAMETER
                ))
            );
        }
    }

    #[test]
    fn test_angle_parameterized() {
        let embedding = CvEmbedding::squeezing(3, false).unwrap();
        let (program, _) = embedding.build().unwrap();

        assert_eq!(program.count_ops("squeezing"), 3);
        for (i, op) in program.operations().iter().enumerate() {
            assert_eq!(
                op.gate,
                EmbeddingGate::Squeezing(CvParams::new(
                    FIXED_PARAMETER,
                    ParameterExpression::feature(i)
                ))
            );
        }
    }

    #[test]
    fn test_numeric_gate_matrix() {
        let program = CvEmbedding::displacement(1, true)
            .unwrap()
            .embed_values(&[0.5])
            .unwrap();
        let gate = program.operations()[0]
            .gate
            .cv_gate(&|i| program.inputs().value(i))
            .unwrap();
        assert_eq!(gate.magnitude, 0.5);
        assert_eq!(gate.angle, FIXED_PARAMETER);
        assert_eq!(gate.matrix().shape(), &[3, 3]);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            CvEmbedding::squeezing(0, true),
            Err(EmbedError::Configuration(_))
        ));
        let err = CvEmbedding::displacement(2, false)
            .unwrap()
            .embed_values(&[0.1, 0.2, 0.3])
            .unwrap_err();
        assert!(matches!(
            err,
            EmbedError::Dimension {
                scheme: "displacement",
                expected: 2,
                got: 3
            }
        ));
    }
}
