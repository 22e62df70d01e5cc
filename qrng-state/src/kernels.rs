//! Single-qubit gate kernels
//!
//! Both kernels read an input amplitude slice and write a fresh output
//! buffer. `mask` selects the target qubit bit in a basis index.
//!
//! # Algorithm
//! For a basis index `i` let `i0 = i & !mask` and `i1 = i | mask`, and let
//! `b` be the target bit of `i`. The gate moves `m[0][b] * a[i]` into
//! `out[i0]` and `m[1][b] * a[i]` into `out[i1]`. The scatter kernel does this
//! literally; the gather kernel computes each output as the sum of its two
//! contributions, which gives the same values and parallelises cleanly.

use crate::gates::Matrix2x2;
use num_complex::Complex64;
use rayon::prelude::*;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);

/// Apply a 2×2 matrix by scattering every input amplitude into its two
/// destination indices
///
/// Complexity: O(2^n) time, one output buffer of the same size.
pub fn apply_scatter(input: &[Complex64], matrix: &Matrix2x2, mask: usize) -> Vec<Complex64> {
    let mut output = vec![ZERO; input.len()];

    for (i, &amp) in input.iter().enumerate() {
        let bit = usize::from(i & mask != 0);
        let i0 = i & !mask;
        let i1 = i | mask;

        output[i0] += matrix[0][bit] * amp;
        output[i1] += matrix[1][bit] * amp;
    }

    output
}

/// Apply a 2×2 matrix by gathering both contributions for each output
/// index, in parallel over the output buffer
pub fn apply_gather_parallel(
    input: &[Complex64],
    matrix: &Matrix2x2,
    mask: usize,
) -> Vec<Complex64> {
    let mut output = vec![ZERO; input.len()];

    output.par_iter_mut().enumerate().for_each(|(i, out)| {
        let row = usize::from(i & mask != 0);
        let i0 = i & !mask;
        let i1 = i | mask;

        *out = matrix[row][0] * input[i0] + matrix[row][1] * input[i1];
    });

    output
}

/// Apply a 2×2 matrix, choosing the parallel kernel once the buffer holds
/// at least `parallel_threshold` amplitudes
#[inline]
pub fn apply_single_qubit(
    input: &[Complex64],
    matrix: &Matrix2x2,
    mask: usize,
    parallel_threshold: usize,
) -> Vec<Complex64> {
    if input.len() >= parallel_threshold {
        apply_gather_parallel(input, matrix, mask)
    } else {
        apply_scatter(input, matrix, mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates::{HADAMARD, PAULI_X};
    use approx::assert_relative_eq;

    #[test]
    fn test_scatter_hadamard() {
        let state = vec![Complex64::new(1.0, 0.0), ZERO];

        let out = apply_scatter(&state, &HADAMARD, 1);

        let inv_sqrt2 = 1.0 / 2.0_f64.sqrt();
        assert_relative_eq!(out[0].re, inv_sqrt2, epsilon = 1e-12);
        assert_relative_eq!(out[1].re, inv_sqrt2, epsilon = 1e-12);
    }

    #[test]
    fn test_scatter_hadamard_on_one_flips_sign() {
        let state = vec![ZERO, Complex64::new(1.0, 0.0)];

        let out = apply_scatter(&state, &HADAMARD, 1);

        let inv_sqrt2 = 1.0 / 2.0_f64.sqrt();
        assert_relative_eq!(out[0].re, inv_sqrt2, epsilon = 1e-12);
        assert_relative_eq!(out[1].re, -inv_sqrt2, epsilon = 1e-12);
    }

    #[test]
    fn test_scatter_leaves_input_untouched() {
        let state = vec![Complex64::new(1.0, 0.0), ZERO, ZERO, ZERO];
        let before = state.clone();

        let _ = apply_scatter(&state, &PAULI_X, 0b10);

        assert_eq!(state, before);
    }

    #[test]
    fn test_pauli_x_moves_amplitude() {
        // |00⟩ with X on the high bit -> |10⟩
        let state = vec![Complex64::new(1.0, 0.0), ZERO, ZERO, ZERO];
        let out = apply_scatter(&state, &PAULI_X, 0b10);
        assert_eq!(out[0b10], Complex64::new(1.0, 0.0));
        assert_eq!(out[0], ZERO);
    }

    #[test]
    fn test_scatter_vs_gather() {
        let state = vec![
            Complex64::new(0.5, 0.1),
            Complex64::new(0.3, -0.2),
            Complex64::new(0.2, 0.4),
            Complex64::new(0.1, 0.3),
            Complex64::new(-0.2, 0.2),
            Complex64::new(0.0, -0.1),
            Complex64::new(0.4, 0.0),
            Complex64::new(0.1, 0.1),
        ];

        for mask in [0b001, 0b010, 0b100] {
            let scatter = apply_scatter(&state, &HADAMARD, mask);
            let gather = apply_gather_parallel(&state, &HADAMARD, mask);

            for (s, g) in scatter.iter().zip(gather.iter()) {
                assert_relative_eq!(s.re, g.re, epsilon = 1e-12);
                assert_relative_eq!(s.im, g.im, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_dispatch_threshold() {
        let state = vec![Complex64::new(1.0, 0.0), ZERO, ZERO, ZERO];
        let serial = apply_single_qubit(&state, &HADAMARD, 0b01, usize::MAX);
        let parallel = apply_single_qubit(&state, &HADAMARD, 0b01, 1);
        for (s, p) in serial.iter().zip(parallel.iter()) {
            assert_relative_eq!(s.re, p.re, epsilon = 1e-12);
        }
    }
}
