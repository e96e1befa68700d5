//! Zipf (zeta) distribution implementation
//!
//! This module provides the discrete heavy-tailed step length used by L1 and
//! L∞ long-range walks.
//!
//! # Characteristics
//!
//! - Support `{1, 2, 3, ...}` (unbounded)
//! - `P(X = k) = k^-(alpha+1) / ζ(alpha+1)`, so `P(X >= k) ~ k^-alpha`
//!   matches the tail of [`super::pareto::Pareto`] with the same `alpha`
//! - Mean `ζ(alpha) / ζ(alpha+1)` for `alpha > 1`
//!
//! # Performance
//!
//! Uses Devroye's rejection sampler ("Non-Uniform Random Variate Generation",
//! X.6.1). The proposal is a discretized Pareto draw; the expected number of
//! rounds stays below 1.5 for every `alpha`, so there is no table to build and
//! no retry cap.
//!
//! # Example
//!
//! ```
//! use lerw::distribution::{LengthSampler, zipf::Zipf};
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//!
//! let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
//! let dist = Zipf::new(1.2)?;
//! let radius = dist.sample(&mut rng);
//! assert!(radius >= 1);
//! # Ok::<(), lerw::Error>(())
//! ```

use super::{check_alpha, LengthSampler};
use crate::error::Result;
use rand::distributions::Open01;
use rand::Rng;

/// Zipf distribution over the positive integers
///
/// `alpha` is the tail exponent of the survival function, the same
/// convention [`super::pareto::Pareto`] uses; the probability mass function
/// decays as `k^-(alpha+1)`.
#[derive(Debug, Clone, Copy)]
pub struct ZipfSampler {
    /// Tail exponent
    alpha: f64,

    /// `2^alpha`, the proposal bound
    b: f64,
}

/// Short name used throughout the crate
pub type Zipf = ZipfSampler;

impl ZipfSampler {
    /// Create a Zipf distribution with tail exponent `alpha`
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::DistributionDomain`] unless `alpha` is finite
    /// and `> 0`.
    pub fn new(alpha: f64) -> Result<Self> {
        check_alpha("Zipf", alpha)?;
        Ok(Self {
            alpha,
            b: 2f64.powf(alpha),
        })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl LengthSampler for ZipfSampler {
    type Output = u64;

    /// Draw one integer radius
    ///
    /// Proposals larger than `u64::MAX` saturate; they are far outside any
    /// lattice coordinate range and are rejected downstream as overflow.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        loop {
            let u: f64 = rng.sample(Open01);
            let x = u.powf(-1.0 / self.alpha).floor();
            let t = (1.0 + 1.0 / x).powf(self.alpha);
            let v: f64 = rng.sample(Open01);

            // An infinite proposal makes the left side NaN and is rejected
            if v * x * (t - 1.0) / (self.b - 1.0) <= t / self.b {
                return x as u64;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    /// Riemann zeta via Euler-Maclaurin summation (s > 1)
    fn zeta(s: f64) -> f64 {
        let n = 1000u32;
        let head: f64 = (1..n).map(|k| (k as f64).powf(-s)).sum();
        let n = n as f64;
        head + n.powf(1.0 - s) / (s - 1.0) + 0.5 * n.powf(-s) + s * n.powf(-s - 1.0) / 12.0
    }

    #[test]
    fn test_zeta_reference_values() {
        let pi = std::f64::consts::PI;
        assert!((zeta(2.0) - pi * pi / 6.0).abs() < 1e-10);
        assert!((zeta(4.0) - pi.powi(4) / 90.0).abs() < 1e-10);
    }

    #[test]
    fn test_zipf_basic() {
        let dist = Zipf::new(1.2).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);

        for _ in 0..1000 {
            assert!(dist.sample(&mut rng) >= 1);
        }
    }

    #[test]
    fn test_zipf_seeded() {
        let dist = Zipf::new(1.2).unwrap();
        let mut rng1 = Xoshiro256PlusPlus::seed_from_u64(12345);
        let mut rng2 = Xoshiro256PlusPlus::seed_from_u64(12345);

        for _ in 0..10 {
            assert_eq!(dist.sample(&mut rng1), dist.sample(&mut rng2));
        }
    }

    #[test]
    fn test_zipf_mean_convergence() {
        for alpha in [3.0, 3.5, 4.0] {
            let expected = zeta(alpha) / zeta(alpha + 1.0);
            let dist = Zipf::new(alpha).unwrap();
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(2024);

            let n = 1u64 << 16;
            let total: u64 = (0..n).map(|_| dist.sample(&mut rng)).sum();
            let mean = total as f64 / n as f64;

            let relative = ((mean - expected) / expected).abs();
            assert!(
                relative < 0.01,
                "alpha={}: mean {:.5}, expected {:.5}",
                alpha,
                mean,
                expected
            );
        }
    }

    #[test]
    fn test_zipf_probability_of_one() {
        // P(X = 1) = 1 / ζ(alpha + 1)
        let alpha = 2.0;
        let dist = Zipf::new(alpha).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(77);

        let n = 100_000;
        let ones = (0..n).filter(|_| dist.sample(&mut rng) == 1).count();
        let fraction = ones as f64 / n as f64;
        let expected = 1.0 / zeta(alpha + 1.0);
        assert!(
            (fraction - expected).abs() < 0.01,
            "P(X=1) = {:.4}, expected {:.4}",
            fraction,
            expected
        );
    }

    #[test]
    fn test_zipf_heavy_tail_terminates() {
        let dist = Zipf::new(0.3).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(8);
        let max = (0..10_000).map(|_| dist.sample(&mut rng)).max().unwrap();
        assert!(
            max > 1_000,
            "alpha=0.3 should produce very long steps, max={}",
            max
        );
    }

    #[test]
    fn test_zipf_invalid_alpha() {
        for alpha in [0.0, -1.0, f64::NAN] {
            let err = Zipf::new(alpha).unwrap_err();
            assert!(matches!(err, Error::DistributionDomain { distribution: "Zipf", .. }));
        }
    }
}
