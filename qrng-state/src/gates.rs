//! Single-qubit gate matrices and gate descriptors
//!
//! Only single-qubit unitaries are modelled. Each gate here is its own
//! inverse, so applying it twice in a row restores the input state.

use num_complex::Complex64;
use std::fmt;

/// Row-major 2×2 complex matrix
pub type Matrix2x2 = [[Complex64; 2]; 2];

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);

const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Hadamard gate matrix
/// H = 1/√2 * [[1,  1],
///             [1, -1]]
pub const HADAMARD: Matrix2x2 = [
    [Complex64::new(INV_SQRT2, 0.0), Complex64::new(INV_SQRT2, 0.0)],
    [Complex64::new(INV_SQRT2, 0.0), Complex64::new(-INV_SQRT2, 0.0)],
];

/// Pauli-X gate matrix (NOT gate)
/// X = [[0, 1],
///      [1, 0]]
pub const PAULI_X: Matrix2x2 = [[ZERO, ONE], [ONE, ZERO]];

/// Pauli-Z gate matrix
/// Z = [[1,  0],
///      [0, -1]]
pub const PAULI_Z: Matrix2x2 = [[ONE, ZERO], [ZERO, NEG_ONE]];

/// Supported single-qubit gates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SingleQubitGate {
    /// Hadamard transform, maps |0⟩ to (|0⟩ + |1⟩)/√2
    Hadamard,
    /// Bit flip
    PauliX,
    /// Phase flip
    PauliZ,
}

impl SingleQubitGate {
    /// Matrix representation of the gate
    pub fn matrix(&self) -> &'static Matrix2x2 {
        match self {
            SingleQubitGate::Hadamard => &HADAMARD,
            SingleQubitGate::PauliX => &PAULI_X,
            SingleQubitGate::PauliZ => &PAULI_Z,
        }
    }

    /// Short gate name
    pub fn name(&self) -> &'static str {
        match self {
            SingleQubitGate::Hadamard => "H",
            SingleQubitGate::PauliX => "X",
            SingleQubitGate::PauliZ => "Z",
        }
    }
}

impl fmt::Display for SingleQubitGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A gate bound to its target qubit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GateDescriptor {
    /// Gate to apply
    pub gate: SingleQubitGate,
    /// Target qubit index
    pub qubit: usize,
}

impl GateDescriptor {
    /// Create a descriptor for `gate` on `qubit`
    pub fn new(gate: SingleQubitGate, qubit: usize) -> Self {
        Self { gate, qubit }
    }

    /// Hadamard on `qubit`
    pub fn hadamard(qubit: usize) -> Self {
        Self::new(SingleQubitGate::Hadamard, qubit)
    }
}

impl fmt::Display for GateDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.gate, self.qubit)
    }
}
