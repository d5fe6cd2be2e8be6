//! Continuous-variable gate definitions.
//!
//! Displacement and squeezing are described by their linearized phase-space
//! action: a 3×3 real matrix over `(1, x, p)`, where the first row and column
//! anchor the affine part. These matrices are handed to the host as opaque
//! single-qubit blocks. They are not 2×2 unitaries and are reproduced exactly
//! as derived.

use ndarray::{Array2, array};
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};
use std::fmt;

/// Which continuous-variable transform a gate applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CvGateKind {
    /// Phase-space displacement by `magnitude · e^{i·angle}`.
    Displacement,
    /// Single-mode squeezing with squeezing parameter `magnitude` along `angle`.
    Squeezing,
}

impl CvGateKind {
    /// Gate name as registered with a host.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            CvGateKind::Displacement => "displacement",
            CvGateKind::Squeezing => "squeezing",
        }
    }

    /// Build the phase-space matrix for this kind.
    pub fn matrix(self, magnitude: f64, angle: f64) -> Array2<f64> {
        match self {
            CvGateKind::Displacement => displacement_matrix(magnitude, angle),
            CvGateKind::Squeezing => squeezing_matrix(magnitude, angle),
        }
    }
}

impl fmt::Display for CvGateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Displacement matrix:
///
/// ```text
/// [ 1            0  0 ]
/// [ 2r·cos(φ)    1  0 ]
/// [ 2r·sin(φ)    0  1 ]
/// ```
pub fn displacement_matrix(magnitude: f64, angle: f64) -> Array2<f64> {
    array![
        [1.0, 0.0, 0.0],
        [2.0 * magnitude * angle.cos(), 1.0, 0.0],
        [2.0 * magnitude * angle.sin(), 0.0, 1.0],
    ]
}

/// Squeezing matrix:
///
/// ```text
/// [ 1  0                      0                     ]
/// [ 0  cosh r − cos φ·sinh r  −sin φ·sinh r         ]
/// [ 0  −sin φ·sinh r          cosh r + cos φ·sinh r ]
/// ```
pub fn squeezing_matrix(magnitude: f64, angle: f64) -> Array2<f64> {
    let (ch, sh) = (magnitude.cosh(), magnitude.sinh());
    let (c, s) = (angle.cos(), angle.sin());
    array![
        [1.0, 0.0, 0.0],
        [0.0, ch - c * sh, -s * sh],
        [0.0, -s * sh, ch + c * sh],
    ]
}

/// A concrete two-parameter continuous-variable gate on one qubit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CvGate {
    /// Transform kind.
    pub kind: CvGateKind,
    /// Amplitude / squeezing radius.
    pub magnitude: f64,
    /// Phase angle in radians.
    pub angle: f64,
}

impl CvGate {
    /// Number of target qubits.
    pub const NUM_QUBITS: u32 = 1;

    /// Create a gate of the given kind.
    pub fn new(kind: CvGateKind, magnitude: f64, angle: f64) -> Self {
        Self {
            kind,
            magnitude,
            angle,
        }
    }

    /// Create a displacement gate.
    pub fn displacement(magnitude: f64, angle: f64) -> Self {
        Self::new(CvGateKind::Displacement, magnitude, angle)
    }

    /// Create a squeezing gate.
    pub fn squeezing(magnitude: f64, angle: f64) -> Self {
        Self::new(CvGateKind::Squeezing, magnitude, angle)
    }

    /// Gate name.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// The 3×3 phase-space matrix of this gate.
    pub fn matrix(&self) -> Array2<f64> {
        self.kind.matrix(self.magnitude, self.angle)
    }

    /// The inverse gate: same magnitude, angle shifted by π into `[0, 2π)`.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            kind: self.kind,
            magnitude: self.magnitude,
            angle: shift_by_pi(self.angle),
        }
    }
}

/// `(angle + π) mod 2π`, normalized to `[0, 2π)`.
pub fn shift_by_pi(angle: f64) -> f64 {
    let shifted = (angle + PI).rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if shifted >= TAU { 0.0 } else { shifted }
}
