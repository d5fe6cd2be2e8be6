//! Property tests for continuous-variable gate definitions.

use std::f64::consts::{PI, TAU};

use proptest::prelude::*;
use qembed_ir::{CvGate, CvGateKind};

fn arb_kind() -> impl Strategy<Value = CvGateKind> {
    prop_oneof![Just(CvGateKind::Displacement), Just(CvGateKind::Squeezing)]
}

/// Distance between two angles on the circle.
fn circular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(TAU);
    d.min(TAU - d)
}

proptest! {
    /// Inverting twice returns the original angle (mod 2π) and never touches
    /// the magnitude.
    #[test]
    fn test_inverse_is_involution(
        kind in arb_kind(),
        magnitude in -5.0_f64..5.0,
        angle in -50.0_f64..50.0,
    ) {
        let gate = CvGate::new(kind, magnitude, angle);
        let inv = gate.inverse();
        prop_assert_eq!(inv.magnitude, magnitude);
        prop_assert_eq!(inv.kind, kind);
        prop_assert!((0.0..TAU).contains(&inv.angle));
        prop_assert!(circular_distance(inv.angle, angle + PI) < 1e-9);

        let back = inv.inverse();
        prop_assert_eq!(back.magnitude, magnitude);
        prop_assert!(circular_distance(back.angle, angle) < 1e-9);
    }

    /// Row 0 of every matrix is the affine anchor `[1, 0, 0]`.
    #[test]
    fn test_anchor_row(
        kind in arb_kind(),
        magnitude in -3.0_f64..3.0,
        angle in -10.0_f64..10.0,
    ) {
        let m = CvGate::new(kind, magnitude, angle).matrix();
        prop_assert_eq!(m.shape(), &[3, 3]);
        prop_assert_eq!(m.row(0).to_vec(), vec![1.0, 0.0, 0.0]);
    }

    /// The squeezing block is symmetric with determinant 1 (symplectic).
    #[test]
    fn test_squeezing_block_symplectic(
        magnitude in -3.0_f64..3.0,
        angle in -10.0_f64..10.0,
    ) {
        let m = CvGate::squeezing(magnitude, angle).matrix();
        prop_assert_eq!(m[[1, 2]], m[[2, 1]]);
        let det = m[[1, 1]] * m[[2, 2]] - m[[1, 2]] * m[[2, 1]];
        prop_assert!((det - 1.0).abs() < 1e-6 * magnitude.cosh().powi(2));
    }
}
