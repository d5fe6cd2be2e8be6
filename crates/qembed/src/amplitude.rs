//! Amplitude embedding: a binary tree of uniformly controlled rotations.
//!
//! The value vector is read level by level. Level `k` (for `k` in `0..n`)
//! targets qubit `t = n - 1 - k` and is controlled by qubits `t + 1 ..= n - 1`.
//! Each level stores `2^k` Y angles followed by `2^k` Z phases, so the whole
//! vector holds `2 * (2^n - 1)` values.
//!
//! Levels above the root are laid out as Gray-code walks: after the `i`-th
//! rotation a CRX from qubit `t + 1 + b(i)` flips the target, where `b(i)` is
//! the bit that differs between `g(i)` and `g(i + 1)`. The last CRX of a walk
//! closes the cycle and always spans to the most significant qubit `n - 1`.
//!
//! CRX angles are always exactly `0` or `π`:
//!
//! | Block | CRX angle |
//! |-------|-----------|
//! | Y rotations | `π` |
//! | Z rotations, some phase non-zero or symbolic | `π` |
//! | Z rotations, every phase numerically zero | `0`, except the cycle-closing CRX at `π` |
//!
//! In a collapsed Z block only the cycle-closing CRX keeps `π`. From level 2
//! on, the walk also crosses qubit `n - 1` mid-cycle (level 2 of a 3-qubit
//! tree has controls `1, 2, 1, 2`); those mid-cycle CRX collapse to `0`.

use std::f64::consts::PI;
use std::ops::Range;

use qembed_ir::{CircuitProgram, FeatureEntry, FeatureVector, ParameterExpression, QubitId};
use tracing::{debug, instrument};

use crate::embedding::{Embedding, check_dimension, check_num_qubits};
use crate::error::{EmbedError, EmbedResult};

/// Largest register the value tree can address.
pub const MAX_AMPLITUDE_QUBITS: u32 = 24;

/// Phases within this distance of zero count as zero.
pub const EPSILON: f64 = 1e-10;

/// Tree-structured amplitude embedding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmplitudeEmbedding {
    num_qubits: u32,
}

impl AmplitudeEmbedding {
    /// Scheme name.
    pub const NAME: &'static str = "amplitude";

    /// Create an amplitude embedding.
    pub fn new(num_qubits: u32) -> EmbedResult<Self> {
        check_num_qubits(Self::NAME, num_qubits)?;
        if num_qubits > MAX_AMPLITUDE_QUBITS {
            return Err(EmbedError::Configuration(format!(
                "amplitude embedding supports at most {MAX_AMPLITUDE_QUBITS} qubits, got {num_qubits}"
            )));
        }
        Ok(Self { num_qubits })
    }

    /// Value-vector length for `num_qubits` qubits: `2 * (2^n - 1)`.
    pub fn expected_length(num_qubits: u32) -> usize {
        2 * ((1_usize << num_qubits) - 1)
    }

    /// Qubit targeted by `level`.
    pub fn target_of(&self, level: u32) -> QubitId {
        QubitId(self.num_qubits - 1 - level)
    }

    /// Positions of the Y angles of `level` in the value vector.
    pub fn angle_range(level: u32) -> Range<usize> {
        let start = 2 * ((1_usize << level) - 1);
        start..start + (1 << level)
    }

    /// Positions of the Z phases of `level` in the value vector.
    pub fn phase_range(level: u32) -> Range<usize> {
        let angles = Self::angle_range(level);
        angles.end..angles.end + (1 << level)
    }

    /// Emit one uniformly controlled rotation block for `level >= 1`.
    fn emit_block(
        &self,
        program: &mut CircuitProgram,
        level: u32,
        values: Range<usize>,
        axis: Axis,
        collapse: bool,
    ) -> EmbedResult<()> {
        let target = self.target_of(level);
        let steps = values.len();
        for (i, index) in values.enumerate() {
            let theta = ParameterExpression::feature(index);
            match axis {
                Axis::Y => program.ry(theta, target)?,
                Axis::Z => program.rz(theta, target)?,
            };

            let closing = i + 1 == steps;
            let control = QubitId(target.0 + 1 + gray_flip(i, level));
            let angle = if collapse && !closing {
                ParameterExpression::constant(0.0)
            } else {
                ParameterExpression::pi()
            };
            program.crx(angle, control, target)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum Axis {
    Y,
    Z,
}

/// Bit that changes between Gray codes `g(i)` and `g((i + 1) mod 2^level)`.
fn gray_flip(i: usize, level: u32) -> u32 {
    let next = i + 1;
    if next < 1 << level {
        next.trailing_zeros()
    } else {
        level - 1
    }
}

/// True when every entry in `range` is a numeric zero.
fn all_zero(inputs: &FeatureVector, mut range: Range<usize>) -> bool {
    range.all(|i| {
        matches!(inputs.get(i), Some(FeatureEntry::Value(v)) if v.abs() < EPSILON)
    })
}

impl Embedding for AmplitudeEmbedding {
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

        // Per level k >= 1: 2^k rotations and 2^k CRX in each of two blocks.
        let capacity = 2 + 4 * (self.input_len() / 2 - 1);
        let mut program =
            CircuitProgram::with_capacity(Self::NAME, self.num_qubits, inputs.clone(), capacity)?;

        let root = self.target_of(0);
        program.ry(ParameterExpression::feature(Self::angle_range(0).start), root)?;
        program.rz(ParameterExpression::feature(Self::phase_range(0).start), root)?;

        let mut collapsed = 0;
        for level in 1..self.num_qubits {
            let phases = Self::phase_range(level);
            let collapse = all_zero(inputs, phases.clone());
            if collapse {
                collapsed += 1;
            }
            self.emit_block(&mut program, level, Self::angle_range(level), Axis::Y, false)?;
            self.emit_block(&mut program, level, phases, Axis::Z, collapse)?;
        }

        debug!(
            ops = program.len(),
            crx = program.count_ops("crx"),
            collapsed,
            "amplitude embedding built"
        );
        Ok(program)
    }
}

/// Constant CRX angle, if the expression is one of the two allowed values.
pub fn crx_angle(param: &ParameterExpression) -> Option<f64> {
    param
        .as_f64()
        .filter(|v| *v == 0.0 || (*v - PI).abs() < EPSILON)
}
