//! Error types for the random-number services

use qrng_state::StateError;
use thiserror::Error;

/// Result type for service operations
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Errors surfaced by the random-number and coin-flip services
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// Requested bit width is not positive or exceeds the configured ceiling
    #[error("Invalid bit width {num_bits}: must be between 1 and {max_bits}")]
    InvalidBitWidth { num_bits: i64, max_bits: u32 },

    /// Configuration failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error from the underlying state simulation
    #[error(transparent)]
    State(#[from] StateError),
}
