//! Gate application as a pure state transform
//!
//! Every function here borrows its input [`StateVector`] and returns a new
//! one. The output buffer is rescaled by its Euclidean norm so rounding drift
//! never accumulates across gates.
//!
//! # Example
//!
//! ```
//! use qrng_state::{apply_hadamard, StateVector};
//!
//! let zero = StateVector::new(1).unwrap();
//! let plus = apply_hadamard(&zero, 0).unwrap();
//! assert!((plus.probability(0) - 0.5).abs() < 1e-12);
//!
//! // Hadamard is self-inverse
//! let back = apply_hadamard(&plus, 0).unwrap();
//! assert!((back.probability(0) - 1.0).abs() < 1e-12);
//! ```

use crate::error::Result;
use crate::gates::GateDescriptor;
use crate::kernels;
use crate::state_vector::StateVector;
use crate::validation::{ensure_normalized, NORM_TOLERANCE};
use tracing::trace;

/// Buffer size (in amplitudes) at which gates switch to the rayon kernel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1 << 14;

/// Tuning knobs for gate application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyOptions {
    /// Minimum state dimension for parallel execution
    pub parallel_threshold: usize,
}

impl Default for ApplyOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ApplyOptions {
    /// Set the parallel threshold
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}

/// Apply a gate with default options
///
/// # Errors
/// Returns `InvalidQubitIndex` if the target qubit is outside the register
pub fn apply_gate(state: &StateVector, gate: GateDescriptor) -> Result<StateVector> {
    apply_gate_with(state, gate, &ApplyOptions::default())
}

/// Apply a gate, returning the renormalized output state
pub fn apply_gate_with(
    state: &StateVector,
    gate: GateDescriptor,
    options: &ApplyOptions,
) -> Result<StateVector> {
    let mask = state.qubit_mask(gate.qubit)?;

    trace!(gate = %gate, num_qubits = state.num_qubits(), "applying gate");

    let buffer = kernels::apply_single_qubit(
        state.amplitudes(),
        gate.gate.matrix(),
        mask,
        options.parallel_threshold,
    );

    let mut next = StateVector::from_buffer(state.num_qubits(), buffer);
    next.normalize()?;
    debug_assert!(
        ensure_normalized(next.amplitudes(), NORM_TOLERANCE).is_ok(),
        "{} left the state unnormalized",
        gate
    );
    Ok(next)
}

/// Apply the Hadamard transform to one qubit
pub fn apply_hadamard(state: &StateVector, qubit: usize) -> Result<StateVector> {
    apply_gate(state, GateDescriptor::hadamard(qubit))
}

/// Apply Hadamard to every qubit in index order
///
/// On |0...0⟩ this yields the uniform superposition, every amplitude equal
/// to `2^(-n/2)`.
pub fn hadamard_all(state: &StateVector, options: &ApplyOptions) -> Result<StateVector> {
    let mut current = apply_gate_with(state, GateDescriptor::hadamard(0), options)?;
    for qubit in 1..state.num_qubits() {
        current = apply_gate_with(&current, GateDescriptor::hadamard(qubit), options)?;
    }
    Ok(current)
}
