//! Quantum feature embeddings
//!
//! Compiles classical feature vectors into parameterized gate programs that
//! serve as the input layer of a quantum machine-learning model. Every scheme
//! is a frozen configuration implementing [`Embedding`]; building it yields a
//! fresh [`CircuitProgram`](qembed_ir::CircuitProgram) that any
//! [`CircuitHost`](qembed_ir::CircuitHost) can materialize.
//!
//! # Schemes
//!
//! | Scheme | Input length | Emitted gates |
//! |--------|--------------|---------------|
//! | [`BasisEmbedding`] | `n` | `rx(π·x[i])` on qubit `i` |
//! | [`AngleEmbedding`] | `n·layers`, or `n` when repeating | one `rx`/`ry`/`rz` per qubit per layer |
//! | [`AmplitudeEmbedding`] | `2·(2^n − 1)` | tree of `ry`/`rz` with `crx(0 or π)` |
//! | [`CvEmbedding`] (displacement, squeezing) | `n` | one CV gate per qubit |
//!
//! # Example
//!
//! ```rust
//! use qembed::{AngleEmbedding, Embedding};
//!
//! let embedding = AngleEmbedding::from_names(&["RY", "RZ"], 2, false).unwrap();
//! let (program, table) = embedding.build().unwrap();
//!
//! assert_eq!(program.len(), 4);
//! assert_eq!(table.len(), embedding.input_len());
//!
//! // Concrete values produce a fully numeric program.
//! let bound = program.bind(&[0.1, 0.2, 0.3, 0.4]).unwrap();
//! assert!(bound.operations().iter().all(|op| !op.gate.is_parameterized()));
//! ```
//!
//! # Configuration
//!
//! ```rust
//! use qembed::SchemeConfig;
//!
//! let config = SchemeConfig::from_yaml("scheme: displacement\nnum_qubits: 3\n").unwrap();
//! let embedding = config.into_embedding().unwrap();
//! assert_eq!(embedding.name(), "displacement");
//! ```

pub mod amplitude;
pub mod angle;
pub mod basis;
pub mod config;
pub mod cv;
pub mod embedding;
pub mod error;

pub use amplitude::AmplitudeEmbedding;
pub use angle::{AngleEmbedding, RotationAxis};
pub use basis::BasisEmbedding;
pub use config::SchemeConfig;
pub use cv::{CvEmbedding, FIXED_PARAMETER};
pub use embedding::{DEFAULT_INPUT_NAME, Embedding};
pub use error::{EmbedError, EmbedResult};
