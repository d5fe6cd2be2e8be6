//! Lowering programs into an external circuit host.
//!
//! The host owns the executable circuit representation; this crate only hands
//! it a declared register and the operations in order.

use ndarray::Array2;

use crate::cv::CvGateKind;
use crate::feature::FeatureVector;
use crate::gate::{CvParams, EmbeddingGate};
use crate::parameter::ParameterExpression;
use crate::program::CircuitProgram;
use crate::qubit::QubitId;

/// A parameter as seen by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum HostParameter {
    /// Fully resolved numeric value.
    Value(f64),
    /// Symbolic expression over the input slot names.
    Expression(String),
}

impl HostParameter {
    /// Numeric value, if resolved.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            HostParameter::Value(v) => Some(*v),
            HostParameter::Expression(_) => None,
        }
    }
}

/// A continuous-variable operation handed to the host as an opaque block.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomGateCall {
    /// Which transform.
    pub kind: CvGateKind,
    /// Amplitude / squeezing radius.
    pub magnitude: HostParameter,
    /// Phase angle.
    pub angle: HostParameter,
    /// 3×3 phase-space matrix, present once both parameters are numeric.
    pub matrix: Option<Array2<f64>>,
}

/// The operation set a circuit host must accept.
pub trait CircuitHost {
    /// Error raised by the host.
    type Error;

    /// Declare the register and the input vector before any operation.
    fn declare(&mut self, num_qubits: u32, inputs: &FeatureVector) -> Result<(), Self::Error>;

    /// Single-qubit X rotation.
    fn rx(&mut self, theta: HostParameter, qubit: QubitId) -> Result<(), Self::Error>;

    /// Single-qubit Y rotation.
    fn ry(&mut self, theta: HostParameter, qubit: QubitId) -> Result<(), Self::Error>;

    /// Single-qubit Z rotation.
    fn rz(&mut self, theta: HostParameter, qubit: QubitId) -> Result<(), Self::Error>;

    /// Controlled X rotation.
    fn crx(
        &mut self,
        theta: HostParameter,
        control: QubitId,
        target: QubitId,
    ) -> Result<(), Self::Error>;

    /// Opaque continuous-variable block on one qubit.
    fn custom(&mut self, call: CustomGateCall, qubit: QubitId) -> Result<(), Self::Error>;
}

impl CircuitProgram {
    /// Hand this program to `host`, operation by operation.
    pub fn lower<H: CircuitHost>(&self, host: &mut H) -> Result<(), H::Error> {
        let inputs = self.inputs();
        host.declare(self.num_qubits(), inputs)?;

        let resolve = |i: usize| inputs.value(i);
        let param = |p: &ParameterExpression| match p.evaluate_with(&resolve) {
            Some(v) => HostParameter::Value(v),
            None => HostParameter::Expression(p.render(&|i| inputs.entry_name(i))),
        };

        for op in self.operations() {
            let q = &op.qubits;
            match &op.gate {
                EmbeddingGate::Rx(theta) | EmbeddingGate::BasisRx(theta) => {
                    host.rx(param(theta), q[0])?;
                }
                EmbeddingGate::Ry(theta) => host.ry(param(theta), q[0])?,
                EmbeddingGate::Rz(theta) => host.rz(param(theta), q[0])?,
                EmbeddingGate::CRx(theta) => host.crx(param(theta), q[0], q[1])?,
                EmbeddingGate::Displacement(cv) => {
                    host.custom(custom_call(CvGateKind::Displacement, cv, &param), q[0])?;
                }
                EmbeddingGate::Squeezing(cv) => {
                    host.custom(custom_call(CvGateKind::Squeezing, cv, &param), q[0])?;
                }
            }
        }
        Ok(())
    }
}

fn custom_call<F>(kind: CvGateKind, cv: &CvParams, param: &F) -> CustomGateCall
where
    F: Fn(&ParameterExpression) -> HostParameter,
{
    let magnitude = param(&cv.magnitude);
    let angle = param(&cv.angle);
    let matrix = match (magnitude.as_f64(), angle.as_f64()) {
        (Some(m), Some(a)) => Some(kind.matrix(m, a)),
        _ => None,
    };
    CustomGateCall {
        kind,
        magnitude,
        angle,
        matrix,
    }
}
