//! Shared service owning a seedable random source
//!
//! [`QuantumRng`] is `Send + Sync`: every call builds its own private state
//! vector, and only the measurement draw touches the shared generator, which
//! sits behind a mutex.

use crate::coin::{prepare_coin, read_coin, CoinFace};
use crate::config::ServiceConfig;
use crate::error::Result;
use crate::random_number::{draw_integer, draw_samples, prepare};
use parking_lot::Mutex;
use qrng_state::SamplingResult;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

/// Random-number and coin-flip service
///
/// # Example
///
/// ```
/// use qrng_sim::{QuantumRng, ServiceConfig};
///
/// let service = QuantumRng::new(ServiceConfig::default().with_seed(7)).unwrap();
/// let value = service.random_integer(8).unwrap();
/// assert!(value < 256);
/// ```
#[derive(Debug)]
pub struct QuantumRng {
    config: ServiceConfig,
    rng: Mutex<StdRng>,
}

impl QuantumRng {
    /// Create a service, validating the configuration
    pub fn new(config: ServiceConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        info!(
            max_bits = config.max_bits,
            default_bits = config.default_bits,
            seeded = config.seed.is_some(),
            "quantum random service ready"
        );

        Ok(Self {
            config,
            rng: Mutex::new(rng),
        })
    }

    /// Create a service from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ServiceConfig::from_env())
    }

    /// Create a deterministic service with default limits
    pub fn with_seed(seed: u64) -> Result<Self> {
        Self::new(ServiceConfig::default().with_seed(seed))
    }

    /// Active configuration
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Restart the generator from `seed`
    pub fn reseed(&self, seed: u64) {
        *self.rng.lock() = StdRng::seed_from_u64(seed);
    }

    /// Uniformly random integer in `[0, 2^num_bits - 1]`
    pub fn random_integer(&self, num_bits: i64) -> Result<u64> {
        let state = prepare(num_bits, &self.config)?;
        draw_integer(state, &mut *self.rng.lock())
    }

    /// Random integer using the configured default width
    pub fn random_default(&self) -> Result<u64> {
        self.random_integer(i64::from(self.config.default_bits))
    }

    /// Flip a coin
    pub fn coin_flip(&self) -> Result<CoinFace> {
        let register = prepare_coin(&self.config)?;
        read_coin(register, &mut *self.rng.lock())
    }

    /// Histogram of `shots` random integers of width `num_bits`
    pub fn sample(&self, num_bits: i64, shots: usize) -> Result<SamplingResult> {
        let state = prepare(num_bits, &self.config)?;
        draw_samples(&state, shots, &mut *self.rng.lock())
    }
}
