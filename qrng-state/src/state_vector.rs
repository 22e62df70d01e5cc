//! State vector representation for an n-qubit register
//!
//! Basis index `i` encodes one classical bit per qubit. Qubit 0 is the most
//! significant bit of the index, so the zero-padded binary rendering of `i`
//! lists the qubits in index order.

use crate::error::{Result, StateError};
use num_complex::Complex64;

/// Largest register the simulator will allocate
///
/// A state of `n` qubits is `2^n * 16` bytes (16 GiB at 30), and applying a
/// gate keeps the input alive next to the fresh output, so the peak during
/// gate application is twice that.
pub const MAX_QUBITS: usize = 30;

/// Quantum state vector in the computational basis
///
/// Holds `2^num_qubits` complex amplitudes. A `StateVector` is always
/// initialized; gate application produces a fresh vector rather than
/// mutating the input.
///
/// # Example
///
/// ```
/// use qrng_state::StateVector;
///
/// // Create a 2-qubit state (4 amplitudes)
/// let state = StateVector::new(2).unwrap();
/// assert_eq!(state.num_qubits(), 2);
/// assert_eq!(state.dimension(), 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StateVector {
    /// Number of qubits
    num_qubits: usize,

    /// Amplitude buffer, length 2^num_qubits
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// Create a new state vector initialized to |0...0⟩
    ///
    /// # Errors
    /// Returns `InvalidDimension` for zero qubits and `TooManyQubits` above
    /// [`MAX_QUBITS`].
    ///
    /// # Example
    /// ```
    /// use qrng_state::StateVector;
    /// use num_complex::Complex64;
    ///
    /// let state = StateVector::new(3).unwrap();
    /// assert_eq!(state.amplitudes()[0], Complex64::new(1.0, 0.0));
    /// ```
    pub fn new(num_qubits: usize) -> Result<Self> {
        check_qubit_count(num_qubits)?;

        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1 << num_qubits];
        amplitudes[0] = Complex64::new(1.0, 0.0);

        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Create a state vector from raw amplitude data
    ///
    /// The amplitudes are taken as given; call [`StateVector::normalize`] if
    /// they are not already unit-norm.
    ///
    /// # Errors
    /// Returns error if the qubit count is out of range or the slice length
    /// is not `2^num_qubits`
    pub fn from_amplitudes(num_qubits: usize, amplitudes: &[Complex64]) -> Result<Self> {
        check_qubit_count(num_qubits)?;

        let dimension = 1 << num_qubits;
        if amplitudes.len() != dimension {
            return Err(StateError::DimensionMismatch {
                expected: dimension,
                actual: amplitudes.len(),
            });
        }

        Ok(Self {
            num_qubits,
            amplitudes: amplitudes.to_vec(),
        })
    }

    /// Wrap a buffer produced by a gate kernel. Length must already be checked.
    pub(crate) fn from_buffer(num_qubits: usize, amplitudes: Vec<Complex64>) -> Self {
        debug_assert_eq!(amplitudes.len(), 1 << num_qubits);
        Self {
            num_qubits,
            amplitudes,
        }
    }

    /// Get the number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the state dimension (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Get a reference to the state amplitudes
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Consume the state and return its amplitude buffer
    pub fn into_amplitudes(self) -> Vec<Complex64> {
        self.amplitudes
    }

    /// Check that `qubit` addresses this register
    #[inline]
    pub fn check_qubit(&self, qubit: usize) -> Result<()> {
        if qubit >= self.num_qubits {
            return Err(StateError::invalid_qubit(qubit, self.num_qubits));
        }
        Ok(())
    }

    /// Bit mask selecting `qubit` within a basis index
    ///
    /// # Errors
    /// Returns `InvalidQubitIndex` if the qubit is out of range
    #[inline]
    pub fn qubit_mask(&self, qubit: usize) -> Result<usize> {
        self.check_qubit(qubit)?;
        Ok(1 << (self.num_qubits - 1 - qubit))
    }

    /// Value (0 or 1) of `qubit` in basis index `index`
    #[inline]
    pub fn bit_of(&self, index: usize, qubit: usize) -> Result<u8> {
        let mask = self.qubit_mask(qubit)?;
        Ok(u8::from(index & mask != 0))
    }

    /// Compute the L2 norm of the state vector
    pub fn norm(&self) -> f64 {
        self.total_probability().sqrt()
    }

    /// Sum of `|amplitude|^2` over all basis states
    pub fn total_probability(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Normalize the state vector in place
    ///
    /// # Errors
    /// Returns `NotNormalized` if the norm is zero or not finite, since such a
    /// buffer cannot be rescaled to unit length
    pub fn normalize(&mut self) -> Result<()> {
        let norm = self.norm();
        if !norm.is_finite() || norm < 1e-12 {
            return Err(StateError::NotNormalized { norm });
        }

        let inv_norm = 1.0 / norm;
        for amplitude in &mut self.amplitudes {
            *amplitude *= inv_norm;
        }
        Ok(())
    }

    /// Check if the state is normalized within `epsilon`
    ///
    /// Compares the total probability (squared norm) against 1.
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.total_probability() - 1.0).abs() < epsilon
    }

    /// Born-rule probability of every basis state
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Born-rule probability of a single basis state
    ///
    /// Out-of-range indices have probability zero.
    pub fn probability(&self, index: usize) -> f64 {
        self.amplitudes
            .get(index)
            .map(|a| a.norm_sqr())
            .unwrap_or(0.0)
    }
}

fn check_qubit_count(num_qubits: usize) -> Result<()> {
    if num_qubits < 1 {
        return Err(StateError::InvalidDimension { num_qubits });
    }
    if num_qubits > MAX_QUBITS {
        return Err(StateError::TooManyQubits {
            num_qubits,
            max_qubits: MAX_QUBITS,
        });
    }
    Ok(())
}
