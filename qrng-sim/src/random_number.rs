//! Uniform random integers from a register in uniform superposition
//!
//! A `num_bits`-qubit register is prepared in |0...0⟩, a Hadamard is applied
//! to every qubit, and all qubits are measured. The measured bit-string read
//! as a base-2 number is uniform over `[0, 2^num_bits - 1]`.

use crate::config::ServiceConfig;
use crate::error::{Result, ServiceError};
use qrng_state::{hadamard_all, measure, sample_counts, SamplingResult, StateVector};
use rand::Rng;
use tracing::debug;

/// Check a requested bit width against the configured ceiling
///
/// Widths arrive signed from the request layer; anything below 1 or above
/// `max_bits` is rejected.
pub fn validate_bit_width(num_bits: i64, max_bits: u32) -> Result<usize> {
    if num_bits < 1 || num_bits > i64::from(max_bits) {
        return Err(ServiceError::InvalidBitWidth { num_bits, max_bits });
    }
    Ok(num_bits as usize)
}

/// Prepare the uniform superposition over `num_bits` qubits
pub fn uniform_state(num_bits: usize, config: &ServiceConfig) -> Result<StateVector> {
    let zero = StateVector::new(num_bits)?;
    Ok(hadamard_all(&zero, &config.apply_options())?)
}

/// Validate `num_bits` and build its uniform superposition
///
/// This is the expensive half of a request and needs no random source, so
/// callers sharing a generator can run it without holding that generator.
pub(crate) fn prepare(num_bits: i64, config: &ServiceConfig) -> Result<StateVector> {
    let width = validate_bit_width(num_bits, config.effective_max_bits())?;
    uniform_state(width, config)
}

/// Measure every qubit of a prepared state and read the bits as an integer
pub(crate) fn draw_integer<R: Rng + ?Sized>(state: StateVector, rng: &mut R) -> Result<u64> {
    let num_bits = state.num_qubits();
    let outcome = measure(state, None, rng)?;

    // Widths are capped at MAX_QUBITS, well under 64 bits
    let value = outcome.to_u64().unwrap_or_default();

    debug!(num_bits, bits = %outcome, value, "generated random integer");
    Ok(value)
}

/// Draw a uniformly random `num_bits`-bit integer using `rng` for the
/// measurement
///
/// # Errors
/// Returns `InvalidBitWidth` if `num_bits` is outside
/// `[1, config.effective_max_bits()]`
pub fn random_integer_with<R: Rng + ?Sized>(
    num_bits: i64,
    config: &ServiceConfig,
    rng: &mut R,
) -> Result<u64> {
    let state = prepare(num_bits, config)?;
    draw_integer(state, rng)
}

/// Sample `shots` outcomes from a prepared state
pub(crate) fn draw_samples<R: Rng + ?Sized>(
    state: &StateVector,
    shots: usize,
    rng: &mut R,
) -> Result<SamplingResult> {
    let counts = sample_counts(state, shots, rng)?;
    debug!(
        num_bits = state.num_qubits(),
        shots,
        distinct = counts.counts.len(),
        "sampled random integers"
    );
    Ok(counts)
}

/// Histogram of `shots` independent draws of a `num_bits`-bit integer
///
/// Keys of the result are the integers themselves.
pub fn sample_integers_with<R: Rng + ?Sized>(
    num_bits: i64,
    shots: usize,
    config: &ServiceConfig,
    rng: &mut R,
) -> Result<SamplingResult> {
    let state = prepare(num_bits, config)?;
    draw_samples(&state, shots, rng)
}
