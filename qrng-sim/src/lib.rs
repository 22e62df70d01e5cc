//! Random integers and coin flips drawn from a simulated quantum register
//!
//! This crate composes the `qrng-state` simulator into the two operations
//! exposed to callers:
//!
//! - [`random_integer`]: prepare `num_bits` qubits in uniform superposition
//!   and measure them, giving a uniform integer in `[0, 2^num_bits - 1]`
//! - [`coin_flip`]: the one-qubit case, reported as Heads or Tails
//!
//! The free functions draw from the thread-local generator. For seeded,
//! reproducible runs use [`QuantumRng`], or pass your own generator to the
//! `*_with` variants.
//!
//! # Example
//!
//! ```
//! use qrng_sim::{coin_flip, random_integer, CoinFace, ServiceError};
//!
//! let value = random_integer(8)?;
//! assert!(value < 256);
//!
//! let face = coin_flip()?;
//! assert!(face == CoinFace::Heads || face == CoinFace::Tails);
//!
//! assert!(matches!(
//!     random_integer(0),
//!     Err(ServiceError::InvalidBitWidth { .. })
//! ));
//! # Ok::<(), ServiceError>(())
//! ```

pub mod coin;
pub mod config;
pub mod error;
pub mod logging;
pub mod random_number;
pub mod service;
pub mod statistics;

pub use coin::{coin_flip_with, CoinFace};
pub use config::{ServiceConfig, DEFAULT_MAX_BITS};
pub use error::{Result, ServiceError};
pub use logging::{init_logging, try_init_logging, LogOutput, LoggingConfig, LoggingError};
pub use random_number::{random_integer_with, sample_integers_with, validate_bit_width};
pub use service::QuantumRng;
pub use statistics::FrequencyTable;

/// Uniformly random integer in `[0, 2^num_bits - 1]` with default limits
///
/// # Errors
/// Returns `InvalidBitWidth` if `num_bits` is below 1 or above
/// [`DEFAULT_MAX_BITS`]
pub fn random_integer(num_bits: i64) -> Result<u64> {
    random_integer_with(num_bits, &ServiceConfig::default(), &mut rand::thread_rng())
}

/// Flip a simulated quantum coin
pub fn coin_flip() -> Result<CoinFace> {
    coin_flip_with(&ServiceConfig::default(), &mut rand::thread_rng())
}
