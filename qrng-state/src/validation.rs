//! Normalization and unitarity checks

use crate::error::{Result, StateError};
use crate::gates::Matrix2x2;
use approx::abs_diff_eq;
use num_complex::Complex64;

/// Tolerance for the `sum |a_i|^2 == 1` invariant
pub const NORM_TOLERANCE: f64 = 1e-9;

/// Diagnostics for a probability distribution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbabilityCheck {
    /// Sum of the probabilities
    pub total: f64,
    /// `|total - 1|`
    pub error: f64,
}

impl ProbabilityCheck {
    /// Whether the distribution sums to 1 within `tolerance`
    pub fn is_valid(&self, tolerance: f64) -> bool {
        self.error < tolerance
    }
}

/// Sum a probability vector and report its deviation from 1
pub fn check_probabilities(probabilities: &[f64]) -> ProbabilityCheck {
    let total: f64 = probabilities.iter().sum();
    ProbabilityCheck {
        total,
        error: (total - 1.0).abs(),
    }
}

/// Check if amplitudes contain NaN or infinity
pub fn check_finite(amplitudes: &[Complex64]) -> bool {
    amplitudes
        .iter()
        .all(|a| a.re.is_finite() && a.im.is_finite())
}

/// Fail with `NotNormalized` unless the amplitudes are finite and unit-norm
pub fn ensure_normalized(amplitudes: &[Complex64], tolerance: f64) -> Result<()> {
    if !check_finite(amplitudes) {
        return Err(StateError::NotNormalized { norm: f64::NAN });
    }

    let total: f64 = amplitudes.iter().map(|a| a.norm_sqr()).sum();
    if (total - 1.0).abs() >= tolerance {
        return Err(StateError::NotNormalized { norm: total.sqrt() });
    }
    Ok(())
}

/// Validate that a 2×2 matrix is unitary (U†U = I)
pub fn validate_unitary_2x2(matrix: &Matrix2x2, tolerance: f64) -> bool {
    for i in 0..2 {
        for j in 0..2 {
            let mut sum = Complex64::new(0.0, 0.0);
            for k in 0..2 {
                sum += matrix[k][i].conj() * matrix[k][j];
            }

            let expected = if i == j { 1.0 } else { 0.0 };
            if !abs_diff_eq!(sum.re, expected, epsilon = tolerance)
                || !abs_diff_eq!(sum.im, 0.0, epsilon = tolerance)
            {
                return false;
            }
        }
    }

    true
}
