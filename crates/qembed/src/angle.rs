//! Angle embedding: layers of single-axis rotations, one gate per qubit per layer.

use std::fmt;
use std::str::FromStr;

use qembed_ir::{CircuitProgram, FeatureVector, ParameterExpression, QubitId};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::embedding::{Embedding, check_dimension, check_num_qubits};
use crate::error::{EmbedError, EmbedResult};

/// Rotation axis of one angle-embedding layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationAxis {
    /// `RX`
    #[serde(rename = "RX")]
    X,
    /// `RY`
    #[serde(rename = "RY")]
    Y,
    /// `RZ`
    #[serde(rename = "RZ")]
    Z,
}

impl RotationAxis {
    /// Layer name as written in a gate sequence.
    pub fn as_str(self) -> &'static str {
        match self {
            RotationAxis::X => "RX",
            RotationAxis::Y => "RY",
            RotationAxis::Z => "RZ",
        }
    }
}

impl fmt::Display for RotationAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RotationAxis {
    type Err = EmbedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RX" => Ok(RotationAxis::X),
            "RY" => Ok(RotationAxis::Y),
            "RZ" => Ok(RotationAxis::Z),
            other => Err(EmbedError::Configuration(format!(
                "invalid gate kind '{other}', expected one of RX, RY, RZ"
            ))),
        }
    }
}

/// Multi-layer rotation embedding.
///
/// Layers are applied in declared order, qubits ascending within a layer.
/// Without `repeat_parameters` each gate consumes the next input entry; with it
/// every layer reuses `x[qubit]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AngleEmbedding {
    gate_sequence: Vec<RotationAxis>,
    num_qubits: u32,
    repeat_parameters: bool,
}

impl AngleEmbedding {
    /// Scheme name.
    pub const NAME: &'static str = "angle";

    /// Create an angle embedding from typed axes.
    pub fn new(
        gate_sequence: Vec<RotationAxis>,
        num_qubits: u32,
        repeat_parameters: bool,
    ) -> EmbedResult<Self> {
        if gate_sequence.is_empty() {
            return Err(EmbedError::Configuration(
                "angle embedding requires at least one gate kind".into(),
            ));
        }
        check_num_qubits(Self::NAME, num_qubits)?;
        Ok(Self {
            gate_sequence,
            num_qubits,
            repeat_parameters,
        })
    }

    /// Create an angle embedding from gate names such as `["RY", "RZ"]`.
    pub fn from_names<S: AsRef<str>>(
        names: &[S],
        num_qubits: u32,
        repeat_parameters: bool,
    ) -> EmbedResult<Self> {
        let gate_sequence = names
            .iter()
            .map(|name| name.as_ref().parse())
            .collect::<EmbedResult<Vec<_>>>()?;
        Self::new(gate_sequence, num_qubits, repeat_parameters)
    }

    /// Input length for a configuration.
    pub fn expected_length(sequence_len: usize, num_qubits: u32, repeat_parameters: bool) -> usize {
        if repeat_parameters {
            num_qubits as usize
        } else {
            num_qubits as usize * sequence_len
        }
    }

    /// Declared layer axes.
    pub fn gate_sequence(&self) -> &[RotationAxis] {
        &self.gate_sequence
    }

    /// Whether every layer reuses `x[qubit]`.
    pub fn repeat_parameters(&self) -> bool {
        self.repeat_parameters
    }
}

impl Embedding for AngleEmbedding {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    fn input_len(&self) -> usize {
        Self::expected_length(
            self.gate_sequence.len(),
            self.num_qubits,
            self.repeat_parameters,
        )
    }

    #[instrument(
        level = "debug",
        skip_all,
        fields(num_qubits = self.num_qubits, layers = self.gate_sequence.len())
    )]
    fn embed(&self, inputs: &FeatureVector) -> EmbedResult<CircuitProgram> {
        check_dimension(Self::NAME, self.input_len(), inputs)?;

        let mut program = CircuitProgram::with_capacity(
            Self::NAME,
            self.num_qubits,
            inputs.clone(),
            self.gate_sequence.len() * self.num_qubits as usize,
        )?;
        let mut next = 0;
        for &axis in &self.gate_sequence {
            for qubit in 0..self.num_qubits {
                let index = if self.repeat_parameters {
                    qubit as usize
                } else {
                    next += 1;
                    next - 1
                };
                let theta = ParameterExpression::feature(index);
                let qubit = QubitId(qubit);
                match axis {
                    RotationAxis::X => program.rx(theta, qubit)?,
                    RotationAxis::Y => program.ry(theta, qubit)?,
                    RotationAxis::Z => program.rz(theta, qubit)?,
                };
            }
        }

        debug!(ops = program.len(), "angle embedding built");
        Ok(program)
    }
}
