//! Statistical quality report over a generator's output
//!
//! Cheap smoke tests, not a substitute for TestU01 or PractRand: they catch
//! broken seeding, stuck bits and gross bias, which is what regressions in
//! this crate would look like.
//!
//! Every sample is one `next_u32()` word. Float-based measures use the
//! crate's public `f32` mapping.

use std::fmt;

use serde::Serialize;

use crate::error::RandomError;
use crate::rng::{u32_to_unit_f32, RandomSource};

const BUCKETS: usize = 256;
/// Below this many samples per bucket the chi-square test is not reported
const MIN_EXPECTED_PER_BUCKET: f64 = 5.0;
/// Tolerance (in standard deviations) of `passes_basic_checks`
const SIGMA_BOUND: f64 = 6.0;

/// Summary statistics of a sample drawn from one generator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    pub generator: String,
    pub samples: usize,
    /// Mean of the unit floats (expected 0.5)
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Chi-square of the top-byte histogram, 255 degrees of freedom
    pub chi_square: f64,
    /// Fraction of set bits across all words (expected 0.5)
    pub bit_balance: f64,
    /// Lag-1 serial correlation of the unit floats (expected ~0)
    pub serial_correlation: f64,
}

impl StatsReport {
    /// Draw `samples` words from `rng` and summarize them
    ///
    /// # Errors
    /// [`RandomError::EmptySample`] if `samples` is zero.
    pub fn collect(rng: &mut dyn RandomSource, samples: usize) -> Result<Self, RandomError> {
        if samples == 0 {
            return Err(RandomError::EmptySample);
        }

        let mut histogram = [0u64; BUCKETS];
        let mut ones = 0u64;
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        let mut sum_lag = 0.0;
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        let mut first = 0.0;
        let mut previous: Option<f64> = None;

        for _ in 0..samples {
            let word = rng.next_u32();
            histogram[(word >> 24) as usize] += 1;
            ones += word.count_ones() as u64;

            let x = u32_to_unit_f32(word) as f64;
            sum += x;
            sum_sq += x * x;
            min = min.min(x);
            max = max.max(x);
            match previous {
                Some(p) => sum_lag += p * x,
                None => first = x,
            }
            previous = Some(x);
        }
        // Knuth's circular definition: pair the last value with the first
        if let Some(last) = previous {
            sum_lag += last * first;
        }

        let n = samples as f64;
        let expected = n / BUCKETS as f64;
        let chi_square = histogram
            .iter()
            .map(|&observed| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum();

        let denominator = n * sum_sq - sum * sum;
        let serial_correlation = if denominator.abs() < f64::EPSILON {
            0.0
        } else {
            (n * sum_lag - sum * sum) / denominator
        };

        Ok(Self {
            generator: rng.name().to_string(),
            samples,
            mean: sum / n,
            min,
            max,
            chi_square,
            bit_balance: ones as f64 / (32.0 * n),
            serial_correlation,
        })
    }

    /// Whether the chi-square statistic has enough samples to be meaningful
    pub fn chi_square_applicable(&self) -> bool {
        self.samples as f64 / BUCKETS as f64 >= MIN_EXPECTED_PER_BUCKET
    }

    /// Names of the checks that fall outside their tolerance
    pub fn failures(&self) -> Vec<&'static str> {
        let n = self.samples as f64;
        let mut failed = Vec::new();

        if (self.mean - 0.5).abs() > SIGMA_BOUND * (1.0 / (12.0 * n)).sqrt() {
            failed.push("mean");
        }
        if (self.bit_balance - 0.5).abs() > SIGMA_BOUND * (0.25 / (32.0 * n)).sqrt() {
            failed.push("bit_balance");
        }
        if self.chi_square_applicable() {
            let dof = (BUCKETS - 1) as f64;
            if (self.chi_square - dof).abs() > SIGMA_BOUND * (2.0 * dof).sqrt() {
                failed.push("chi_square");
            }
        }
        if self.samples > 1 && self.serial_correlation.abs() > SIGMA_BOUND / n.sqrt() {
            failed.push("serial_correlation");
        }
        if self.min < 0.0 || self.max >= 1.0 {
            failed.push("range");
        }
        failed
    }

    pub fn passes_basic_checks(&self) -> bool {
        self.failures().is_empty()
    }
}

impl fmt::Display for StatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "generator:          {}", self.generator)?;
        writeln!(f, "samples:            {}", self.samples)?;
        writeln!(f, "mean:               {:.6} (expected 0.5)", self.mean)?;
        writeln!(f, "min / max:          {:.6} / {:.6}", self.min, self.max)?;
        if self.chi_square_applicable() {
            writeln!(f, "chi-square:         {:.2} (255 dof)", self.chi_square)?;
        } else {
            writeln!(f, "chi-square:         n/a (too few samples)")?;
        }
        writeln!(f, "bit balance:        {:.6} (expected 0.5)", self.bit_balance)?;
        write!(f, "serial correlation: {:.6}", self.serial_correlation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_prng;

    struct Stuck;

    impl RandomSource for Stuck {
        fn name(&self) -> &'static str {
            "STUCK"
        }

        fn fill_bits(&mut self, buffer: &mut [u8]) {
            buffer.fill(0);
        }
    }

    #[test]
    fn test_zero_samples_rejected() {
        let mut rng = create_prng(&[]);
        assert_eq!(
            StatsReport::collect(rng.as_mut(), 0),
            Err(RandomError::EmptySample)
        );
    }

    #[test]
    fn test_stuck_generator_fails() {
        let report = StatsReport::collect(&mut Stuck, 4096).unwrap();
        assert_eq!(report.mean, 0.0);
        assert_eq!(report.bit_balance, 0.0);
        assert_eq!(report.serial_correlation, 0.0);
        assert!(!report.passes_basic_checks());
        assert!(report.failures().contains(&"chi_square"));
    }

    #[test]
    fn test_chi_square_skipped_for_small_samples() {
        let mut rng = create_prng(&[1, 2, 3]);
        let report = StatsReport::collect(rng.as_mut(), 100).unwrap();
        assert!(!report.chi_square_applicable());
        assert!(!report.failures().contains(&"chi_square"));
    }

    #[test]
    fn test_display_mentions_generator() {
        let mut rng = create_prng(&[]);
        let report = StatsReport::collect(rng.as_mut(), 10).unwrap();
        assert!(report.to_string().contains("PSEUDO_DES"));
    }
}
