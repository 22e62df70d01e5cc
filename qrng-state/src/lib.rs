//! State-vector simulation core for quantum random number generation
//!
//! This crate provides a small dense state-vector simulator:
//!
//! - **State vector**: the 2^n complex amplitudes of an n-qubit register
//! - **Gate application**: single-qubit unitaries (Hadamard, X, Z) applied as
//!   pure transforms that return a fresh, renormalized state
//! - **Measurement**: one Born-rule draw from an explicitly passed random
//!   source, projected onto the requested qubits
//!
//! Qubit 0 is the most significant bit of a basis index.
//!
//! # Example
//!
//! ```
//! use qrng_state::{hadamard_all, measure, ApplyOptions, StateVector};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(2024);
//!
//! let state = StateVector::new(4).unwrap();
//! let uniform = hadamard_all(&state, &ApplyOptions::default()).unwrap();
//! let result = measure(uniform, None, &mut rng).unwrap();
//!
//! assert!(result.to_u64().unwrap() < 16);
//! ```

pub mod applicator;
pub mod error;
pub mod gates;
pub mod kernels;
pub mod measurement;
pub mod register;
pub mod state_vector;
pub mod validation;

pub use applicator::{
    apply_gate, apply_gate_with, apply_hadamard, hadamard_all, ApplyOptions,
    DEFAULT_PARALLEL_THRESHOLD,
};
pub use error::{Result, StateError};
pub use gates::{GateDescriptor, Matrix2x2, SingleQubitGate};
pub use measurement::{measure, sample_counts, MeasurementResult, SamplingResult};
pub use register::Register;
pub use state_vector::{StateVector, MAX_QUBITS};
pub use validation::NORM_TOLERANCE;
