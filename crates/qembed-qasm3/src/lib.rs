//! `OpenQASM` 3 emitter for qembed
//!
//! Renders a [`CircuitProgram`](qembed_ir::CircuitProgram) as `OpenQASM` 3.0
//! source. The [`Emitter`] is itself a [`CircuitHost`](qembed_ir::CircuitHost),
//! so emission goes through the same lowering path as any other host.
//!
//! | Program feature | QASM3 rendering |
//! |-----------------|-----------------|
//! | Register | `qubit[n] q;` (`qreg` if the input vector is named `q`) |
//! | Symbolic input vector | `input array[float[64], L] x;` |
//! | Rotations | `rx(…) q[i];`, `crx(…) q[c], q[t];` |
//! | CV gates | call by name plus `// @pragma opaque` header line |
//!
//! # Example
//!
//! ```rust
//! use qembed_ir::{CircuitProgram, ParameterExpression, ParameterTable, QubitId};
//! use qembed_qasm3::emit;
//!
//! let mut table = ParameterTable::new();
//! let x = table.allocate_vector("x", 1).unwrap();
//! let mut program = CircuitProgram::new("demo", 1, x).unwrap();
//! program.ry(ParameterExpression::feature(0), QubitId(0)).unwrap();
//!
//! let qasm = emit(&program).unwrap();
//! assert!(qasm.contains("ry(x[0]) q[0];"));
//! ```

pub mod emitter;
pub mod error;

pub use emitter::{Emitter, FALLBACK_REGISTER, REGISTER, emit};
pub use error::{EmitError, EmitResult};
