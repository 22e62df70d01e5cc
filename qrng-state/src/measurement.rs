//! Born-rule measurement in the computational basis
//!
//! This module provides:
//! - Single-shot measurement that consumes the state (one random draw)
//! - Multi-shot sampling of a prepared state without collapse
//! - Projection of the drawn basis index onto a requested list of qubits
//!
//! The random source is always passed in by the caller, so a seeded
//! generator reproduces the same outcomes.

use crate::error::{Result, StateError};
use crate::state_vector::StateVector;
use crate::validation::{check_probabilities, NORM_TOLERANCE};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use std::collections::HashMap;
use std::fmt;
use tracing::warn;

/// Result of a single measurement
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementResult {
    /// Drawn basis state index
    pub outcome: usize,

    /// Born probability of the drawn basis state
    pub probability: f64,

    /// Measured qubits, in the order requested
    pub qubits: Vec<usize>,

    /// Bit value (0 or 1) of each measured qubit
    pub bits: Vec<u8>,
}

impl MeasurementResult {
    /// Get the outcome as a bitstring, one character per measured qubit
    pub fn as_bitstring(&self) -> String {
        self.bits
            .iter()
            .map(|&bit| if bit == 1 { '1' } else { '0' })
            .collect()
    }

    /// Interpret the measured bits as a base-2 unsigned integer, first
    /// measured qubit most significant
    ///
    /// Returns `None` if more than 64 bits were measured.
    pub fn to_u64(&self) -> Option<u64> {
        if self.bits.len() > 64 {
            return None;
        }
        Some(
            self.bits
                .iter()
                .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit)),
        )
    }

    /// Bit measured for `qubit`, if it was part of the measurement
    pub fn get_qubit(&self, qubit: usize) -> Option<u8> {
        self.qubits
            .iter()
            .position(|&q| q == qubit)
            .map(|pos| self.bits[pos])
    }
}

impl fmt::Display for MeasurementResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_bitstring())
    }
}

/// Sampling result containing counts from multiple measurement shots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplingResult {
    /// Map from basis state index to count
    pub counts: HashMap<usize, usize>,

    /// Total number of shots
    pub shots: usize,
}

impl SamplingResult {
    /// Create an empty sampling result
    pub fn new(shots: usize) -> Self {
        Self {
            counts: HashMap::new(),
            shots,
        }
    }

    /// Add a measurement outcome
    pub fn add_outcome(&mut self, outcome: usize) {
        *self.counts.entry(outcome).or_insert(0) += 1;
    }

    /// Get the count for a specific outcome
    pub fn get_count(&self, outcome: usize) -> usize {
        self.counts.get(&outcome).copied().unwrap_or(0)
    }

    /// Get the observed frequency of an outcome (count / shots)
    pub fn get_probability(&self, outcome: usize) -> f64 {
        if self.shots == 0 {
            return 0.0;
        }
        self.get_count(outcome) as f64 / self.shots as f64
    }

    /// Get all outcomes sorted by count (descending), ties by index
    pub fn sorted_outcomes(&self) -> Vec<(usize, usize)> {
        let mut outcomes: Vec<_> = self.counts.iter().map(|(&k, &v)| (k, v)).collect();
        outcomes.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        outcomes
    }

    /// Convert counts to bitstring keys
    pub fn to_bitstring_counts(&self, num_qubits: usize) -> HashMap<String, usize> {
        self.counts
            .iter()
            .map(|(&outcome, &count)| (format!("{:0width$b}", outcome, width = num_qubits), count))
            .collect()
    }
}

/// Measure the state with one random draw
///
/// `qubits` selects which qubits to report, in order; `None` measures every
/// qubit in index order. The state is consumed: a register is measured once.
///
/// # Errors
/// - `InvalidQubitIndex` if a requested qubit is outside the register
/// - `NotNormalized` if the state carries no usable probability mass
///
/// # Example
/// ```
/// use qrng_state::{measure, StateVector};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let state = StateVector::new(3).unwrap();
/// let result = measure(state, None, &mut rng).unwrap();
/// assert_eq!(result.as_bitstring(), "000");
/// ```
pub fn measure<R: Rng + ?Sized>(
    state: StateVector,
    qubits: Option<&[usize]>,
    rng: &mut R,
) -> Result<MeasurementResult> {
    let qubits: Vec<usize> = match qubits {
        Some(requested) => requested.to_vec(),
        None => (0..state.num_qubits()).collect(),
    };
    for &qubit in &qubits {
        state.check_qubit(qubit)?;
    }

    let total = state.total_probability();
    if !total.is_finite() || total <= 0.0 {
        return Err(StateError::NotNormalized { norm: total.sqrt() });
    }
    if (total - 1.0).abs() >= NORM_TOLERANCE {
        warn!(total, "probabilities drifted from 1, renormalizing before sampling");
    }

    // Scaling the draw by the total is equivalent to renormalizing.
    let target = rng.gen::<f64>() * total;
    let (outcome, weight) = select_outcome(&state, target);

    let n = state.num_qubits();
    let bits = qubits
        .iter()
        .map(|&q| ((outcome >> (n - 1 - q)) & 1) as u8)
        .collect();

    Ok(MeasurementResult {
        outcome,
        probability: weight / total,
        qubits,
        bits,
    })
}

/// Draw `shots` independent outcomes from the state's distribution
///
/// The state is left untouched; each shot is equivalent to measuring a fresh
/// copy of the same preparation.
pub fn sample_counts<R: Rng + ?Sized>(
    state: &StateVector,
    shots: usize,
    rng: &mut R,
) -> Result<SamplingResult> {
    if shots == 0 {
        return Ok(SamplingResult::new(0));
    }

    let probabilities = state.probabilities();
    let check = check_probabilities(&probabilities);
    if !check.is_valid(NORM_TOLERANCE) {
        warn!(total = check.total, "probabilities drifted from 1, renormalizing before sampling");
    }

    let distribution = WeightedIndex::new(&probabilities).map_err(|_| StateError::NotNormalized {
        norm: check.total.sqrt(),
    })?;

    let mut result = SamplingResult::new(shots);
    for _ in 0..shots {
        result.add_outcome(distribution.sample(rng));
    }

    Ok(result)
}

/// Walk the cumulative distribution until it passes `target`
fn select_outcome(state: &StateVector, target: f64) -> (usize, f64) {
    let mut cumulative = 0.0;
    let mut last_nonzero = (0, 0.0);

    for (idx, amp) in state.amplitudes().iter().enumerate() {
        let prob = amp.norm_sqr();
        if prob > 0.0 {
            cumulative += prob;
            last_nonzero = (idx, prob);
            if target < cumulative {
                return (idx, prob);
            }
        }
    }

    // Rounding can leave the cumulative sum just short of the total
    last_nonzero
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::applicator::apply_hadamard;
    use approx::assert_relative_eq;
    use num_complex::Complex64;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_measurement_result() {
        let result = MeasurementResult {
            outcome: 5,
            probability: 0.25,
            qubits: vec![0, 1, 2],
            bits: vec![1, 0, 1],
        };
        assert_eq!(result.as_bitstring(), "101");
        assert_eq!(result.to_string(), "101");
        assert_eq!(result.to_u64(), Some(5));
        assert_eq!(result.get_qubit(0), Some(1));
        assert_eq!(result.get_qubit(1), Some(0));
        assert_eq!(result.get_qubit(3), None);
    }

    #[test]
    fn test_fresh_state_measures_zero() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in 1..=8 {
            let result = measure(StateVector::new(n).unwrap(), None, &mut rng).unwrap();
            assert_eq!(result.outcome, 0);
            assert_eq!(result.as_bitstring(), "0".repeat(n));
            assert_relative_eq!(result.probability, 1.0);
        }
    }

    #[test]
    fn test_partial_measurement_order() {
        // |110⟩: qubit 0 = 1, qubit 1 = 1, qubit 2 = 0
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 8];
        amplitudes[0b110] = Complex64::new(1.0, 0.0);
        let state = StateVector::from_amplitudes(3, &amplitudes).unwrap();

        let mut rng = StdRng::seed_from_u64(1);
        let result = measure(state, Some(&[2, 0]), &mut rng).unwrap();
        assert_eq!(result.outcome, 0b110);
        assert_eq!(result.as_bitstring(), "01");
        assert_eq!(result.qubits, vec![2, 0]);
    }

    #[test]
    fn test_invalid_measured_qubit() {
        let mut rng = StdRng::seed_from_u64(1);
        let state = StateVector::new(2).unwrap();
        assert_eq!(
            measure(state, Some(&[0, 2]), &mut rng),
            Err(StateError::InvalidQubitIndex {
                index: 2,
                num_qubits: 2
            })
        );
    }

    #[test]
    fn test_drifted_state_is_renormalized() {
        // Total probability 4, still a 50/50 split after renormalization
        let amplitudes = vec![Complex64::new(2.0_f64.sqrt(), 0.0); 2];
        let state = StateVector::from_amplitudes(1, &amplitudes).unwrap();

        let mut rng = StdRng::seed_from_u64(3);
        let result = measure(state, None, &mut rng).unwrap();
        assert_relative_eq!(result.probability, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_state_rejected() {
        let amplitudes = vec![Complex64::new(0.0, 0.0); 2];
        let state = StateVector::from_amplitudes(1, &amplitudes).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        assert!(matches!(
            measure(state, None, &mut rng),
            Err(StateError::NotNormalized { .. })
        ));
    }

    #[test]
    fn test_seeded_measurement_is_reproducible() {
        let plus = apply_hadamard(&StateVector::new(1).unwrap(), 0).unwrap();

        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..32)
                .map(|_| measure(plus.clone(), None, &mut rng).unwrap().outcome)
                .collect::<Vec<_>>()
        };

        assert_eq!(run(99), run(99));
    }

    #[test]
    fn test_sampling_result() {
        let mut result = SamplingResult::new(100);
        for _ in 0..60 {
            result.add_outcome(0);
        }
        for _ in 0..40 {
            result.add_outcome(1);
        }

        assert_eq!(result.get_count(0), 60);
        assert_eq!(result.get_count(1), 40);
        assert_relative_eq!(result.get_probability(0), 0.6);
        assert_relative_eq!(result.get_probability(1), 0.4);

        let sorted = result.sorted_outcomes();
        assert_eq!(sorted[0], (0, 60));
        assert_eq!(sorted[1], (1, 40));

        let bitstrings = result.to_bitstring_counts(2);
        assert_eq!(bitstrings.get("00"), Some(&60));
        assert_eq!(bitstrings.get("01"), Some(&40));
    }

    #[test]
    fn test_batch_sampling() {
        let amplitudes = vec![
            Complex64::new(0.6, 0.0),
            Complex64::new(0.8, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
        ];
        let state = StateVector::from_amplitudes(2, &amplitudes).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let result = sample_counts(&state, 10_000, &mut rng).unwrap();

        assert_eq!(result.shots, 10_000);
        assert_eq!(result.get_count(2) + result.get_count(3), 0);
        assert!((result.get_probability(0) - 0.36).abs() < 0.03);
        assert!((result.get_probability(1) - 0.64).abs() < 0.03);
    }

    #[test]
    fn test_zero_shots() {
        let state = StateVector::new(1).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let result = sample_counts(&state, 0, &mut rng).unwrap();
        assert_eq!(result.shots, 0);
        assert!(result.counts.is_empty());
    }
}
