//! Embedding gate kinds.

use serde::{Deserialize, Serialize};

use crate::cv::{CvGate, CvGateKind, shift_by_pi};
use crate::parameter::ParameterExpression;

/// Parameters of a continuous-variable operation inside a program.
///
/// Either parameter may reference an input feature; the operation becomes a
/// concrete [`CvGate`] once both resolve to numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvParams {
    /// Amplitude / squeezing radius.
    pub magnitude: ParameterExpression,
    /// Phase angle in radians.
    pub angle: ParameterExpression,
}

impl CvParams {
    /// Create a parameter pair.
    pub fn new(
        magnitude: impl Into<ParameterExpression>,
        angle: impl Into<ParameterExpression>,
    ) -> Self {
        Self {
            magnitude: magnitude.into(),
            angle: angle.into(),
        }
    }

    /// Parameters of the inverse operation.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let angle = match self.angle.as_f64() {
            Some(v) => ParameterExpression::Constant(shift_by_pi(v)),
            // The matrices are 2π-periodic in the angle, so the symbolic
            // shift needs no explicit wrap.
            None => self.angle.clone() + ParameterExpression::Pi,
        };
        Self {
            magnitude: self.magnitude.clone(),
            angle,
        }
    }

    fn bind(&self, values: &[f64]) -> Self {
        Self {
            magnitude: self.magnitude.bind(values),
            angle: self.angle.bind(values),
        }
    }
}

/// A gate emitted by an embedding scheme.
///
/// Every variant is lowered to the host through an exhaustive match; there is
/// no name-based dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EmbeddingGate {
    /// Rotation around X.
    Rx(ParameterExpression),
    /// Rotation around Y.
    Ry(ParameterExpression),
    /// Rotation around Z.
    Rz(ParameterExpression),
    /// Controlled rotation around X (control, target).
    CRx(ParameterExpression),
    /// X rotation that pushes a qubit towards a basis state.
    BasisRx(ParameterExpression),
    /// Continuous-variable displacement.
    Displacement(CvParams),
    /// Continuous-variable squeezing.
    Squeezing(CvParams),
}

impl EmbeddingGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            EmbeddingGate::Rx(_) | EmbeddingGate::BasisRx(_) => "rx",
            EmbeddingGate::Ry(_) => "ry",
            EmbeddingGate::Rz(_) => "rz",
            EmbeddingGate::CRx(_) => "crx",
            EmbeddingGate::Displacement(_) => CvGateKind::Displacement.name(),
            EmbeddingGate::Squeezing(_) => CvGateKind::Squeezing.name(),
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            EmbeddingGate::CRx(_) => 2,
            EmbeddingGate::Rx(_)
            | EmbeddingGate::Ry(_)
            | EmbeddingGate::Rz(_)
            | EmbeddingGate::BasisRx(_) => 1,
            EmbeddingGate::Displacement(_) | EmbeddingGate::Squeezing(_) => CvGate::NUM_QUBITS,
        }
    }

    /// Get parameters of this gate.
    pub fn parameters(&self) -> Vec<&ParameterExpression> {
        match self {
            EmbeddingGate::Rx(p)
            | EmbeddingGate::Ry(p)
            | EmbeddingGate::Rz(p)
            | EmbeddingGate::CRx(p)
            | EmbeddingGate::BasisRx(p) => vec![p],
            EmbeddingGate::Displacement(cv) | EmbeddingGate::Squeezing(cv) => {
                vec![&cv.magnitude, &cv.angle]
            }
        }
    }

    /// Check if any parameter references an input feature.
    pub fn is_parameterized(&self) -> bool {
        self.parameters().iter().any(|p| p.is_symbolic())
    }

    /// The continuous-variable kind, for CV operations.
    pub fn cv_kind(&self) -> Option<CvGateKind> {
        match self {
            EmbeddingGate::Displacement(_) => Some(CvGateKind::Displacement),
            EmbeddingGate::Squeezing(_) => Some(CvGateKind::Squeezing),
            _ => None,
        }
    }

    /// Resolve a CV operation into a concrete gate.
    ///
    /// Returns `None` for rotation gates or when a parameter does not resolve.
    pub fn cv_gate<F>(&self, resolve: &F) -> Option<CvGate>
    where
        F: Fn(usize) -> Option<f64>,
    {
        match self {
            EmbeddingGate::Displacement(cv) | EmbeddingGate::Squeezing(cv) => {
                let kind = self.cv_kind()?;
                Some(CvGate::new(
                    kind,
                    cv.magnitude.evaluate_with(resolve)?,
                    cv.angle.evaluate_with(resolve)?,
                ))
            }
            _ => None,
        }
    }

    /// Compute the inverse of this gate.
    ///
    /// - Rotations (plain, controlled, basis): `R(θ)† = R(-θ)`
    /// - CV gates: angle shifted by π, magnitude unchanged
    #[must_use]
    pub fn inverse(&self) -> Self {
        match self {
            EmbeddingGate::Rx(p) => EmbeddingGate::Rx(negate_param(p)),
            EmbeddingGate::Ry(p) => EmbeddingGate::Ry(negate_param(p)),
            EmbeddingGate::Rz(p) => EmbeddingGate::Rz(negate_param(p)),
            EmbeddingGate::CRx(p) => EmbeddingGate::CRx(negate_param(p)),
            EmbeddingGate::BasisRx(p) => EmbeddingGate::BasisRx(negate_param(p)),
            EmbeddingGate::Displacement(cv) => EmbeddingGate::Displacement(cv.inverse()),
            EmbeddingGate::Squeezing(cv) => EmbeddingGate::Squeezing(cv.inverse()),
        }
    }

    /// Substitute feature values into every parameter.
    #[must_use]
    pub fn bind(&self, values: &[f64]) -> Self {
        match self {
            EmbeddingGate::Rx(p) => EmbeddingGate::Rx(p.bind(values)),
            EmbeddingGate::Ry(p) => EmbeddingGate::Ry(p.bind(values)),
            EmbeddingGate::Rz(p) => EmbeddingGate::Rz(p.bind(values)),
            EmbeddingGate::CRx(p) => EmbeddingGate::CRx(p.bind(values)),
            EmbeddingGate::BasisRx(p) => EmbeddingGate::BasisRx(p.bind(values)),
            EmbeddingGate::Displacement(cv) => EmbeddingGate::Displacement(cv.bind(values)),
            EmbeddingGate::Squeezing(cv) => EmbeddingGate::Squeezing(cv.bind(values)),
        }
    }
}

/// Negate a parameter expression, folding constants.
fn negate_param(param: &ParameterExpression) -> ParameterExpression {
    match param.as_f64() {
        Some(v) => ParameterExpression::Constant(-v),
        None => -param.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_gate_properties() {
        let rx = EmbeddingGate::Rx(ParameterExpression::feature(0));
        assert_eq!(rx.name(), "rx");
        assert_eq!(rx.num_qubits(), 1);
        assert!(rx.is_parameterized());

        let crx = EmbeddingGate::CRx(ParameterExpression::pi());
        assert_eq!(crx.num_qubits(), 2);
        assert!(!crx.is_parameterized());

        let d = EmbeddingGate::Displacement(CvParams::new(ParameterExpression::feature(1), 0.1));
        assert_eq!(d.name(), "displacement");
        assert_eq!(d.parameters().len(), 2);
        assert_eq!(d.cv_kind(), Some(CvGateKind::Displacement));
    }

    #[test]
    fn test_inverse_rotation() {
        let ry = EmbeddingGate::Ry(ParameterExpression::constant(PI / 4.0));
        match ry.inverse() {
            EmbeddingGate::Ry(p) => assert!((p.as_f64().unwrap() + PI / 4.0).abs() < 1e-10),
            other => panic!("Expected Ry, got {other:?}"),
        }

        let sym = EmbeddingGate::Rz(ParameterExpression::feature(2));
        assert_eq!(
            sym.inverse(),
            EmbeddingGate::Rz(-ParameterExpression::feature(2))
        );
    }

    #[test]
    fn test_inverse_cv_numeric_and_symbolic() {
        let numeric = EmbeddingGate::Squeezing(CvParams::new(ParameterExpression::feature(0), 0.1));
        match numeric.inverse() {
            EmbeddingGate::Squeezing(cv) => {
                assert_eq!(cv.magnitude, ParameterExpression::feature(0));
                assert!((cv.angle.as_f64().unwrap() - (0.1 + PI)).abs() < 1e-12);
            }
            other => panic!("Expected Squeezing, got {other:?}"),
        }

        let symbolic = EmbeddingGate::Displacement(CvParams::new(0.1, ParameterExpression::feature(0)));
        match symbolic.inverse() {
            EmbeddingGate::Displacement(cv) => {
                let v = cv.angle.evaluate(&[0.25]).unwrap();
                assert!((v - (0.25 + PI)).abs() < 1e-12);
            }
            other => panic!("Expected Displacement, got {other:?}"),
        }
    }

    #[test]
    fn test_cv_gate_resolution() {
        let gate = EmbeddingGate::Displacement(CvParams::new(ParameterExpression::feature(1), 0.1));
        assert!(gate.cv_gate(&|_| None).is_none());

        let values = [0.0, 0.7];
        let resolved = gate.cv_gate(&|i| values.get(i).copied()).unwrap();
        assert_eq!(resolved, CvGate::displacement(0.7, 0.1));

        let rx = EmbeddingGate::Rx(ParameterExpression::constant(1.0));
        assert!(rx.cv_gate(&|_| Some(0.0)).is_none());
    }

    #[test]
    fn test_bind() {
        let gate = EmbeddingGate::BasisRx(ParameterExpression::pi_times_feature(0));
        let bound = gate.bind(&[1.0]);
        assert!(!bound.is_parameterized());
        assert_eq!(bound, EmbeddingGate::BasisRx(ParameterExpression::Constant(PI)));
    }
}
