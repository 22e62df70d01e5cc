//! Simulated coin flip on a single qubit

use crate::config::ServiceConfig;
use crate::error::Result;
use qrng_state::Register;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Face of a flipped coin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoinFace {
    /// Measured bit `1`
    Heads,
    /// Measured bit `0`
    Tails,
}

impl CoinFace {
    /// Map a measured bit to a face: 1 is Heads, 0 is Tails
    pub fn from_bit(bit: u64) -> Self {
        if bit == 1 {
            CoinFace::Heads
        } else {
            CoinFace::Tails
        }
    }

    /// Display label
    pub fn as_str(&self) -> &'static str {
        match self {
            CoinFace::Heads => "Heads",
            CoinFace::Tails => "Tails",
        }
    }
}

impl fmt::Display for CoinFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One qubit in equal superposition, ready to be measured
///
/// Coin flips are always one qubit wide, so the configured bit-width
/// ceiling does not apply; only the gate options are taken from `config`.
pub(crate) fn prepare_coin(config: &ServiceConfig) -> Result<Register> {
    let mut register = Register::with_options(config.apply_options());
    register.initialize(1)?.hadamard(0)?;
    Ok(register)
}

/// Measure a prepared coin register
pub(crate) fn read_coin<R: Rng + ?Sized>(register: Register, rng: &mut R) -> Result<CoinFace> {
    let outcome = register.measure(None, rng)?;
    let face = CoinFace::from_bit(u64::from(outcome.bits[0]));
    debug!(%face, "flipped coin");
    Ok(face)
}

/// Flip a coin: one qubit, one Hadamard, one measurement
pub fn coin_flip_with<R: Rng + ?Sized>(config: &ServiceConfig, rng: &mut R) -> Result<CoinFace> {
    let register = prepare_coin(config)?;
    read_coin(register, rng)
}
