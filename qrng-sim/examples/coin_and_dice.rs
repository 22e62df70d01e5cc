//! Draw a few random integers and coin flips
//!
//! Run with `QRNG_SEED=42 QRNG_LOG=qrng_sim=debug` for a reproducible,
//! verbose run.

use qrng_sim::statistics::{FrequencyTable, Z_999};
use qrng_sim::{init_logging, CoinFace, QuantumRng};
use std::collections::BTreeMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let service = QuantumRng::from_env()?;
    println!("=== Quantum random numbers ===");
    println!("Config: {:?}\n", service.config());

    for bits in [1, 4, 8, 16] {
        println!("{:>2}-bit integer: {}", bits, service.random_integer(bits)?);
    }
    println!("default width: {}", service.random_default()?);

    println!("\n=== Coin flips ===");
    let mut table = FrequencyTable::new(2);
    for _ in 0..1000 {
        let face = service.coin_flip()?;
        table.record(usize::from(face == CoinFace::Heads));
    }
    println!(
        "Tails: {}  Heads: {}  chi-square: {:.3}  uniform: {}",
        table.counts()[0],
        table.counts()[1],
        table.chi_square_uniform(),
        table.is_uniform(Z_999)
    );

    println!("\n=== Histogram of 3-bit draws ===");
    let counts = service.sample(3, 800)?;
    let sorted: BTreeMap<_, _> = counts.to_bitstring_counts(3).into_iter().collect();
    for (value, count) in sorted {
        println!("  {} : {}", value, count);
    }

    Ok(())
}
