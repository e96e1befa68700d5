//! Step-length distributions
//!
//! This module provides the heavy-tailed distributions that decide how far a
//! long-range walk jumps in one step. The direction of the jump is chosen
//! separately (see [`crate::direction`]).
//!
//! # Distributions
//!
//! - **Pareto**: continuous radii `>= 1`, paired with L2 directions
//! - **Zipf**: integer radii `>= 1`, paired with L1 and L∞ directions
//!
//! Both are parameterized by the same tail exponent `alpha`:
//! `P(R > r) ~ r^-alpha` for large `r`.
//!
//! # Example
//!
//! ```
//! use lerw::distribution::{LengthSampler, pareto::Pareto, zipf::Zipf};
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//!
//! let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
//! let pareto = Pareto::new(1.5)?;
//! let zipf = Zipf::new(1.5)?;
//!
//! assert!(pareto.sample(&mut rng) >= 1.0);
//! assert!(zipf.sample(&mut rng) >= 1);
//! # Ok::<(), lerw::Error>(())
//! ```

use rand::Rng;

use crate::error::{Error, Result};

/// Sampler for step lengths
///
/// Implementations hold only immutable parameters; the random stream is
/// threaded in per call so one sampler can be shared by every worker thread.
///
/// # Thread Safety
///
/// Samplers must be `Send + Sync`. Each sample run owns its RNG; the sampler
/// itself is never mutated.
pub trait LengthSampler: Send + Sync {
    /// Radius type handed to the direction sampler
    type Output: Copy + Send;

    /// Draw one step length
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Output;
}

/// Shared domain check for the tail exponent
pub(crate) fn check_alpha(distribution: &'static str, alpha: f64) -> Result<()> {
    if alpha > 0.0 && alpha.is_finite() {
        Ok(())
    } else {
        Err(Error::DistributionDomain {
            distribution,
            alpha,
        })
    }
}

pub mod pareto;
pub mod zipf;
