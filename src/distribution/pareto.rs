//! Pareto distribution implementation
//!
//! This module provides a Pareto distribution with scale 1, used for the
//! continuous step radius of L2 long-range walks.
//!
//! # Characteristics
//!
//! - Support `[1, ∞)`
//! - `P(R > r) = r^-alpha`
//! - Mean is infinite for `alpha <= 1`, variance for `alpha <= 2`
//!
//! # Performance
//!
//! Uses inverse transform sampling, `u^(-1/alpha)`, which is O(1) per sample.
//!
//! # Example
//!
//! ```
//! use lerw::distribution::{LengthSampler, pareto::Pareto};
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//!
//! let mut rng = Xoshiro256PlusPlus::seed_from_u64(12345);
//! let dist = Pareto::new(0.5)?;
//! let radius = dist.sample(&mut rng);
//! assert!(radius >= 1.0);
//! # Ok::<(), lerw::Error>(())
//! ```

use super::{check_alpha, LengthSampler};
use crate::error::{Error, Result};
use rand::Rng;
use rand_distr::Distribution;

/// Pareto distribution with scale 1 and shape `alpha`
#[derive(Debug, Clone, Copy)]
pub struct ParetoSampler {
    /// Shape (tail exponent)
    alpha: f64,

    /// Closed-form quantile sampler
    inner: rand_distr::Pareto<f64>,
}

/// Short name used throughout the crate
pub type Pareto = ParetoSampler;

impl ParetoSampler {
    /// Create a Pareto distribution with shape `alpha`
    ///
    /// # Errors
    ///
    /// Returns [`Error::DistributionDomain`] unless `alpha` is finite and `> 0`.
    pub fn new(alpha: f64) -> Result<Self> {
        check_alpha("Pareto", alpha)?;
        let inner = rand_distr::Pareto::new(1.0, alpha)
            .map_err(|_| Error::DistributionDomain {
                distribution: "Pareto",
                alpha,
            })?;
        Ok(Self { alpha, inner })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl LengthSampler for ParetoSampler {
    type Output = f64;

    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.inner.sample(rng)
    }
}
