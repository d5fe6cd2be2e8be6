//! qembed gate-program intermediate representation
//!
//! This crate provides the data structures that embedding schemes emit and
//! circuit hosts consume.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] addresses a position in the program's register
//! - **Inputs**: [`FeatureVector`] is the declared input vector;
//!   [`ParameterTable`] allocates its symbolic slots without aliasing
//! - **Parameters**: [`ParameterExpression`] references feature entries or literals
//! - **Gates**: [`EmbeddingGate`] is the closed set of emitted operations;
//!   [`CvGate`] is the two-parameter continuous-variable gate definition
//! - **Programs**: [`CircuitProgram`] is an ordered, validated list of [`GateOperation`]s
//! - **Hosts**: [`CircuitHost`] is the operation set a program is lowered into
//!
//! # Example: a two-qubit program
//!
//! ```rust
//! use qembed_ir::{CircuitProgram, ParameterExpression, ParameterTable, QubitId};
//! use std::f64::consts::PI;
//!
//! let mut table = ParameterTable::new();
//! let x = table.allocate_vector("x", 2).unwrap();
//!
//! let mut program = CircuitProgram::new("demo", 2, x).unwrap();
//! program.ry(ParameterExpression::feature(0), QubitId(0)).unwrap();
//! program.crx(PI, QubitId(0), QubitId(1)).unwrap();
//!
//! assert_eq!(program.len(), 2);
//! assert_eq!(program.feature_indices().len(), 1);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Parameters |
//! |------|--------|------------|
//! | `Rx`, `Ry`, `Rz` | 1 | angle |
//! | `BasisRx` | 1 | angle (lowered as `rx`) |
//! | `CRx` | 2 | angle |
//! | `Displacement`, `Squeezing` | 1 | magnitude, angle |

pub mod cv;
pub mod error;
pub mod feature;
pub mod gate;
pub mod host;
pub mod parameter;
pub mod program;
pub mod qubit;
pub mod table;

pub use cv::{CvGate, CvGateKind, displacement_matrix, squeezing_matrix};
pub use error::{IrError, IrResult};
pub use feature::{FeatureEntry, FeatureVector};
pub use gate::{CvParams, EmbeddingGate};
pub use host::{CircuitHost, CustomGateCall, HostParameter};
pub use parameter::ParameterExpression;
pub use program::{CircuitProgram, GateOperation};
pub use qubit::QubitId;
pub use table::{ParameterSlot, ParameterTable, is_identifier};
