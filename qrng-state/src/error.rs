//! Error types for state vector operations

use thiserror::Error;

/// Errors that can occur during state vector operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// Register must hold at least one qubit
    #[error("Invalid state dimension: {num_qubits} qubits requested, at least 1 required")]
    InvalidDimension { num_qubits: usize },

    /// Register would exceed the supported amplitude buffer size
    #[error("Too many qubits: {num_qubits} requested, max supported is {max_qubits}")]
    TooManyQubits { num_qubits: usize, max_qubits: usize },

    /// Invalid qubit index
    #[error("Invalid qubit index {index} for {num_qubits}-qubit state")]
    InvalidQubitIndex { index: usize, num_qubits: usize },

    /// Gate or measurement on a register that was never initialized
    #[error("Quantum state not initialized")]
    UninitializedState,

    /// State not normalized
    #[error("State vector not normalized, norm = {norm}")]
    NotNormalized { norm: f64 },

    /// Dimension mismatch
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

impl StateError {
    /// Create an invalid qubit index error
    pub fn invalid_qubit(index: usize, num_qubits: usize) -> Self {
        Self::InvalidQubitIndex { index, num_qubits }
    }
}

/// Result type for state vector operations
pub type Result<T> = std::result::Result<T, StateError>;
