//! Service configuration

use crate::error::{Result, ServiceError};
use qrng_state::{ApplyOptions, DEFAULT_PARALLEL_THRESHOLD, MAX_QUBITS};
use serde::{Deserialize, Serialize};
use std::env;

/// Default bit-width ceiling
///
/// A gate holds its input and output buffers at once, so a `w`-bit request
/// peaks at `2 * 2^w * 16` bytes: 512 MiB at 24 bits, 32 GiB at 30.
pub const DEFAULT_MAX_BITS: u32 = 24;

/// Configuration for the random-number services
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Largest accepted bit width
    ///
    /// The state holds 2^max_bits amplitudes, so this bounds memory use.
    /// Values above [`MAX_QUBITS`] are treated as [`MAX_QUBITS`].
    ///
    /// Default: 24
    pub max_bits: u32,

    /// Bit width used when the caller does not supply one
    ///
    /// Default: 8
    pub default_bits: u32,

    /// Random number generator seed for reproducibility
    ///
    /// If None, the generator is seeded from system entropy.
    ///
    /// Default: None (random)
    pub seed: Option<u64>,

    /// State dimension at which gate application switches to rayon
    ///
    /// Default: 16384 amplitudes (14 qubits)
    pub parallel_threshold: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_bits: DEFAULT_MAX_BITS,
            default_bits: 8,
            seed: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ServiceConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration using environment hints.
    ///
    /// # Environment Variables
    ///
    /// - `QRNG_MAX_BITS` - Largest accepted bit width
    /// - `QRNG_DEFAULT_BITS` - Bit width used when none is requested
    /// - `QRNG_SEED` - Fixed generator seed
    /// - `QRNG_PARALLEL_THRESHOLD` - Parallel gate threshold in amplitudes
    ///
    /// Unset or unparseable variables keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(max_bits) = parse_var(&lookup, "QRNG_MAX_BITS") {
            config.max_bits = max_bits;
        }
        if let Some(default_bits) = parse_var(&lookup, "QRNG_DEFAULT_BITS") {
            config.default_bits = default_bits;
        }
        if let Some(seed) = parse_var(&lookup, "QRNG_SEED") {
            config.seed = Some(seed);
        }
        if let Some(threshold) = parse_var(&lookup, "QRNG_PARALLEL_THRESHOLD") {
            config.parallel_threshold = threshold;
        }

        config
    }

    /// Set the maximum bit width
    pub fn with_max_bits(mut self, max_bits: u32) -> Self {
        self.max_bits = max_bits;
        self
    }

    /// Set the default bit width
    pub fn with_default_bits(mut self, default_bits: u32) -> Self {
        self.default_bits = default_bits;
        self
    }

    /// Set the random seed for deterministic execution
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the parallel threshold
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Bit-width ceiling actually enforced: `max_bits` capped at the
    /// simulator's [`MAX_QUBITS`]
    pub fn effective_max_bits(&self) -> u32 {
        self.max_bits.min(MAX_QUBITS as u32)
    }

    /// Gate options derived from this configuration
    pub fn apply_options(&self) -> ApplyOptions {
        ApplyOptions::default().with_parallel_threshold(self.parallel_threshold)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_bits == 0 || self.max_bits as usize > MAX_QUBITS {
            return Err(ServiceError::InvalidConfig(format!(
                "max_bits must be in [1,{}], got {}",
                MAX_QUBITS, self.max_bits
            )));
        }

        if self.default_bits == 0 || self.default_bits > self.max_bits {
            return Err(ServiceError::InvalidConfig(format!(
                "default_bits must be in [1,{}], got {}",
                self.max_bits, self.default_bits
            )));
        }

        if self.parallel_threshold == 0 {
            return Err(ServiceError::InvalidConfig(
                "parallel_threshold must be > 0".to_string(),
            ));
        }

        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key).and_then(|value| value.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.max_bits, 24);
        assert_eq!(config.default_bits, 8);
        assert_eq!(config.seed, None);
        assert_eq!(config.parallel_threshold, 1 << 14);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ServiceConfig::new()
            .with_max_bits(16)
            .with_default_bits(4)
            .with_seed(42)
            .with_parallel_threshold(64);

        assert_eq!(config.max_bits, 16);
        assert_eq!(config.default_bits, 4);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.apply_options().parallel_threshold, 64);
    }

    #[test]
    fn test_validate() {
        let invalid = ServiceConfig::new().with_max_bits(0);
        assert!(invalid.validate().is_err());

        let invalid = ServiceConfig::new().with_max_bits(31);
        assert!(invalid.validate().is_err());

        let invalid = ServiceConfig::new().with_max_bits(4).with_default_bits(8);
        assert!(invalid.validate().is_err());

        let invalid = ServiceConfig::new().with_parallel_threshold(0);
        assert!(matches!(
            invalid.validate(),
            Err(ServiceError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_effective_max_bits() {
        assert_eq!(ServiceConfig::new().effective_max_bits(), 24);
        assert_eq!(ServiceConfig::new().with_max_bits(30).effective_max_bits(), 30);
        assert_eq!(ServiceConfig::new().with_max_bits(64).effective_max_bits(), 30);
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("QRNG_MAX_BITS", "20"),
            ("QRNG_DEFAULT_BITS", " 6 "),
            ("QRNG_SEED", "1234"),
            ("QRNG_PARALLEL_THRESHOLD", "not-a-number"),
        ]
        .into_iter()
        .collect();

        let config = ServiceConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.max_bits, 20);
        assert_eq!(config.default_bits, 6);
        assert_eq!(config.seed, Some(1234));
        assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
    }

    #[test]
    fn test_serde_defaults() {
        let config: ServiceConfig = serde_json::from_str(r#"{"max_bits": 12}"#).unwrap();
        assert_eq!(config.max_bits, 12);
        assert_eq!(config.default_bits, 8);
        assert_eq!(config.seed, None);
    }
}
