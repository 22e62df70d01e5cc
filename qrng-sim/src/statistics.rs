//! Frequency tallies and chi-square uniformity checks
//!
//! Used to verify that generated values are spread evenly over their range.

use qrng_state::SamplingResult;

/// z-score for a one-sided 0.999 quantile of the standard normal
pub const Z_999: f64 = 3.090_232;

/// Observed counts per category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: Vec<u64>,
    total: u64,
}

impl FrequencyTable {
    /// Create an empty table with `categories` buckets
    pub fn new(categories: usize) -> Self {
        Self {
            counts: vec![0; categories],
            total: 0,
        }
    }

    /// Build a table from a sampling result over `categories` outcomes
    ///
    /// Outcomes outside `[0, categories)` are ignored.
    pub fn from_sampling(result: &SamplingResult, categories: usize) -> Self {
        let mut table = Self::new(categories);
        for (&outcome, &count) in &result.counts {
            if outcome < categories {
                table.counts[outcome] += count as u64;
                table.total += count as u64;
            }
        }
        table
    }

    /// Record one observation. Returns false if the category is out of range.
    pub fn record(&mut self, category: usize) -> bool {
        match self.counts.get_mut(category) {
            Some(count) => {
                *count += 1;
                self.total += 1;
                true
            }
            None => false,
        }
    }

    /// Count per category
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Total number of observations
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Observed share of `category`
    pub fn frequency(&self, category: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.counts.get(category).copied().unwrap_or(0) as f64 / self.total as f64
    }

    /// Pearson chi-square statistic against the uniform distribution
    pub fn chi_square_uniform(&self) -> f64 {
        if self.total == 0 || self.counts.is_empty() {
            return 0.0;
        }

        let expected = self.total as f64 / self.counts.len() as f64;
        self.counts
            .iter()
            .map(|&observed| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum()
    }

    /// Degrees of freedom of the uniformity test
    pub fn degrees_of_freedom(&self) -> usize {
        self.counts.len().saturating_sub(1)
    }

    /// Whether the statistic stays under the critical value for `z`
    pub fn is_uniform(&self, z: f64) -> bool {
        let df = self.degrees_of_freedom();
        df == 0 || self.chi_square_uniform() <= chi_square_critical(df, z)
    }
}

/// Approximate chi-square critical value (Wilson–Hilferty)
///
/// `z` is the standard normal quantile of the desired confidence level.
pub fn chi_square_critical(df: usize, z: f64) -> f64 {
    let k = df as f64;
    let h = 2.0 / (9.0 * k);
    k * (1.0 - h + z * h.sqrt()).powi(3)
}
