//! Register session: initialize, apply gates, measure once
//!
//! [`Register`] wraps the pure transforms in a small stateful API. Each gate
//! swaps in the fresh state produced by the applicator, and measuring
//! consumes the register, so a prepared state is observed at most once.
//!
//! # Example
//!
//! ```
//! use qrng_state::Register;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(11);
//! let mut register = Register::new();
//! register.initialize(2)?.hadamard(0)?.hadamard(1)?;
//!
//! let result = register.measure(None, &mut rng)?;
//! assert_eq!(result.as_bitstring().len(), 2);
//! # Ok::<(), qrng_state::StateError>(())
//! ```

use crate::applicator::{apply_gate_with, ApplyOptions};
use crate::error::{Result, StateError};
use crate::gates::GateDescriptor;
use crate::measurement::{measure, MeasurementResult};
use crate::state_vector::StateVector;
use rand::Rng;

/// A quantum register that may not have been initialized yet
#[derive(Debug, Clone, Default)]
pub struct Register {
    state: Option<StateVector>,
    options: ApplyOptions,
}

impl Register {
    /// Create an uninitialized register
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an uninitialized register with custom gate options
    pub fn with_options(options: ApplyOptions) -> Self {
        Self {
            state: None,
            options,
        }
    }

    /// Prepare |0...0⟩ on `num_qubits` qubits, replacing any previous state
    pub fn initialize(&mut self, num_qubits: usize) -> Result<&mut Self> {
        self.state = Some(StateVector::new(num_qubits)?);
        Ok(self)
    }

    /// Whether [`Register::initialize`] has been called
    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    /// Number of qubits, if initialized
    pub fn num_qubits(&self) -> Option<usize> {
        self.state.as_ref().map(StateVector::num_qubits)
    }

    /// Borrow the current state
    pub fn state(&self) -> Result<&StateVector> {
        self.state.as_ref().ok_or(StateError::UninitializedState)
    }

    /// Apply a gate to the current state
    pub fn apply(&mut self, gate: GateDescriptor) -> Result<&mut Self> {
        let next = apply_gate_with(self.state()?, gate, &self.options)?;
        self.state = Some(next);
        Ok(self)
    }

    /// Apply the Hadamard transform to `qubit`
    pub fn hadamard(&mut self, qubit: usize) -> Result<&mut Self> {
        self.apply(GateDescriptor::hadamard(qubit))
    }

    /// Measure the register, consuming it
    pub fn measure<R: Rng + ?Sized>(
        self,
        qubits: Option<&[usize]>,
        rng: &mut R,
    ) -> Result<MeasurementResult> {
        let state = self.state.ok_or(StateError::UninitializedState)?;
        measure(state, qubits, rng)
    }

    /// Take the state out of the register
    pub fn into_state(self) -> Result<StateVector> {
        self.state.ok_or(StateError::UninitializedState)
    }
}
