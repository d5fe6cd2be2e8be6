//! Ordered gate programs produced by embedding schemes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::cv::CvGateKind;
use crate::error::{IrError, IrResult};
use crate::feature::FeatureVector;
use crate::gate::{CvParams, EmbeddingGate};
use crate::parameter::ParameterExpression;
use crate::qubit::QubitId;

/// A gate together with the qubits it acts on.
///
/// For controlled gates the control comes first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateOperation {
    /// The gate.
    pub gate: EmbeddingGate,
    /// Target qubits.
    pub qubits: Vec<QubitId>,
}

impl GateOperation {
    /// Create an operation.
    pub fn new(gate: EmbeddingGate, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            gate,
            qubits: qubits.into_iter().collect(),
        }
    }

    /// Name of the underlying gate.
    pub fn name(&self) -> &'static str {
        self.gate.name()
    }
}

/// An ordered list of gate operations over a declared register.
///
/// Operation order is execution order. Every operation is validated when it
/// is pushed: its qubits lie inside the register, its arity matches the gate,
/// and every feature reference resolves in the declared input vector.
/// Deserialized programs go through the same checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProgram")]
pub struct CircuitProgram {
    name: String,
    num_qubits: u32,
    inputs: FeatureVector,
    operations: Vec<GateOperation>,
}

/// Unvalidated wire form of a [`CircuitProgram`].
#[derive(Deserialize)]
struct RawProgram {
    name: String,
    num_qubits: u32,
    inputs: FeatureVector,
    operations: Vec<GateOperation>,
}

impl TryFrom<RawProgram> for CircuitProgram {
    type Error = IrError;

    fn try_from(raw: RawProgram) -> IrResult<Self> {
        let mut program =
            Self::with_capacity(raw.name, raw.num_qubits, raw.inputs, raw.operations.len())?;
        for operation in raw.operations {
            program.push(operation)?;
        }
        Ok(program)
    }
}

impl CircuitProgram {
    /// Create an empty program over `num_qubits` qubits reading `inputs`.
    pub fn new(name: impl Into<String>, num_qubits: u32, inputs: FeatureVector) -> IrResult<Self> {
        let name = name.into();
        if num_qubits == 0 {
            return Err(IrError::EmptyRegister(name));
        }
        Ok(Self {
            name,
            num_qubits,
            inputs,
            operations: vec![],
        })
    }

    /// Create a program with room for `capacity` operations.
    pub fn with_capacity(
        name: impl Into<String>,
        num_qubits: u32,
        inputs: FeatureVector,
        capacity: usize,
    ) -> IrResult<Self> {
        let mut program = Self::new(name, num_qubits, inputs)?;
        program.operations.reserve(capacity);
        Ok(program)
    }

    /// Name of the program.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Declared input vector.
    pub fn inputs(&self) -> &FeatureVector {
        &self.inputs
    }

    /// Operations in execution order.
    pub fn operations(&self) -> &[GateOperation] {
        &self.operations
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Check if the program has no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Append a validated operation.
    pub fn push(&mut self, operation: GateOperation) -> IrResult<&mut Self> {
        self.validate(&operation)?;
        self.operations.push(operation);
        Ok(self)
    }

    fn validate(&self, operation: &GateOperation) -> IrResult<()> {
        let gate_name = operation.name();
        let expected = operation.gate.num_qubits();
        let got = u32::try_from(operation.qubits.len()).unwrap_or(u32::MAX);
        if expected != got {
            return Err(IrError::QubitCountMismatch {
                gate_name: gate_name.to_string(),
                expected,
                got,
            });
        }

        for (i, &qubit) in operation.qubits.iter().enumerate() {
            if qubit.0 >= self.num_qubits {
                return Err(IrError::QubitOutOfRange {
                    qubit,
                    num_qubits: self.num_qubits,
                    gate_name: Some(gate_name.to_string()),
                });
            }
            if operation.qubits[..i].contains(&qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate_name: Some(gate_name.to_string()),
                });
            }
        }

        for param in operation.gate.parameters() {
            if let Some(&index) = param.features().iter().find(|&&i| i >= self.inputs.len()) {
                return Err(IrError::UnresolvedFeature {
                    index,
                    vector: self.inputs.name().to_string(),
                    len: self.inputs.len(),
                });
            }
        }

        Ok(())
    }

    // =========================================================================
    // Builder helpers
    // =========================================================================

    /// Apply Rx rotation gate.
    pub fn rx(
        &mut self,
        theta: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.push(GateOperation::new(EmbeddingGate::Rx(theta.into()), [qubit]))
    }

    /// Apply Ry rotation gate.
    pub fn ry(
        &mut self,
        theta: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.push(GateOperation::new(EmbeddingGate::Ry(theta.into()), [qubit]))
    }

    /// Apply Rz rotation gate.
    pub fn rz(
        &mut self,
        theta: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.push(GateOperation::new(EmbeddingGate::Rz(theta.into()), [qubit]))
    }

    /// Apply controlled-Rx gate.
    pub fn crx(
        &mut self,
        theta: impl Into<ParameterExpression>,
        control: QubitId,
        target: QubitId,
    ) -> IrResult<&mut Self> {
        self.push(GateOperation::new(
            EmbeddingGate::CRx(theta.into()),
            [control, target],
        ))
    }

    /// Apply basis-state Rx gate.
    pub fn basis_rx(
        &mut self,
        theta: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.push(GateOperation::new(
            EmbeddingGate::BasisRx(theta.into()),
            [qubit],
        ))
    }

    /// Apply a continuous-variable gate.
    pub fn cv(
        &mut self,
        kind: CvGateKind,
        params: CvParams,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        let gate = match kind {
            CvGateKind::Displacement => EmbeddingGate::Displacement(params),
            CvGateKind::Squeezing => EmbeddingGate::Squeezing(params),
        };
        self.push(GateOperation::new(gate, [qubit]))
    }

    // =========================================================================
    // Derived programs and introspection
    // =========================================================================

    /// The adjoint program: operations reversed, each gate inverted.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            name: format!("{}_dg", self.name),
            num_qubits: self.num_qubits,
            inputs: self.inputs.clone(),
            operations: self
                .operations
                .iter()
                .rev()
                .map(|op| GateOperation::new(op.gate.inverse(), op.qubits.iter().copied()))
                .collect(),
        }
    }

    /// Bind numeric values to the declared input vector.
    pub fn bind(&self, values: &[f64]) -> IrResult<Self> {
        if values.len() != self.inputs.len() {
            return Err(IrError::BindingLengthMismatch {
                expected: self.inputs.len(),
                got: values.len(),
            });
        }
        Ok(Self {
            name: self.name.clone(),
            num_qubits: self.num_qubits,
            inputs: FeatureVector::from_values(self.inputs.name(), values.iter().copied()),
            operations: self
                .operations
                .iter()
                .map(|op| GateOperation::new(op.gate.bind(values), op.qubits.iter().copied()))
                .collect(),
        })
    }

    /// Every feature index referenced by any operation.
    pub fn feature_indices(&self) -> BTreeSet<usize> {
        self.operations
            .iter()
            .flat_map(|op| op.gate.parameters())
            .flat_map(ParameterExpression::features)
            .collect()
    }

    /// Count operations by gate name.
    pub fn count_ops(&self, name: &str) -> usize {
        self.operations.iter().filter(|op| op.name() == name).count()
    }

    /// Evaluate a parameter against the declared inputs.
    pub fn evaluate(&self, param: &ParameterExpression) -> Option<f64> {
        param.evaluate_with(&|i| self.inputs.value(i))
    }
}
