//! Step directions: uniform points on norm-ball surfaces
//!
//! A long-range step is a radius drawn from a length distribution followed by
//! a lattice point on the surface of the norm ball of that radius. Each
//! sampler here covers one norm:
//!
//! - **L2**: continuous uniform direction, scaled and rounded (approximate radius)
//! - **L1**: stars-and-bars composition with sign randomization (exact radius)
//! - **L∞**: face-class selection weighted by lattice point counts (exact radius)
//!
//! L1 and L∞ samples are uniform over the finite set of lattice points at
//! exactly the requested radius.

use rand::Rng;

use crate::error::{Error, Result};
use crate::lattice::LatticePoint;

pub mod l1;
pub mod l2;
pub mod linf;

pub use l1::L1Direction;
pub use l2::L2Direction;
pub use linf::LinfDirection;

/// Sampler for the direction of one step
///
/// `sample(r, rng)` returns a lattice point whose norm is `r` (exactly for
/// integer radii, up to rounding for L2).
pub trait DirectionSampler: Send + Sync {
    type Point: LatticePoint;

    /// Radius type this sampler consumes
    type Radius: Copy;

    /// Draw one step vector of length `radius`
    ///
    /// Fails with [`Error::Overflow`] if the result does not fit the
    /// point's coordinate width.
    fn sample<R: Rng + ?Sized>(&self, radius: Self::Radius, rng: &mut R) -> Result<Self::Point>;
}

/// Uniform ±1
#[inline]
pub(crate) fn random_sign<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    if rng.gen::<bool>() {
        1
    } else {
        -1
    }
}

/// Reject dimensionless points up front; every sampler needs `DIM > 0`
pub(crate) fn require_dimension<P: LatticePoint>(sampler: &str) -> Result<()> {
    if P::DIM == 0 {
        return Err(Error::Configuration(format!(
            "{} requires dimension > 0",
            sampler
        )));
    }
    Ok(())
}

/// Integer radius as a coordinate value, if the field width can hold it
pub(crate) fn integer_radius<P: LatticePoint>(radius: u64) -> Result<i64> {
    i64::try_from(radius)
        .ok()
        .filter(|&r| r <= P::MAX_COORDINATE)
        .ok_or_else(|| {
            Error::overflow(format!(
                "step radius {} exceeds coordinate range (max {})",
                radius,
                P::MAX_COORDINATE
            ))
        })
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;
    use std::hash::Hash;

    /// Assert every observed value occurs within `tolerance` (relative) of
    /// the uniform expectation over `expected_support` distinct values
    pub fn assert_uniform<T: Hash + Eq + std::fmt::Debug>(
        samples: impl IntoIterator<Item = T>,
        expected_support: usize,
        tolerance: f64,
    ) {
        let mut frequency: HashMap<T, usize> = HashMap::new();
        let mut total = 0usize;
        for sample in samples {
            *frequency.entry(sample).or_default() += 1;
            total += 1;
        }

        assert_eq!(
            frequency.len(),
            expected_support,
            "observed {} distinct points, expected {}",
            frequency.len(),
            expected_support
        );

        let expected = total as f64 / expected_support as f64;
        for (value, count) in &frequency {
            let deviation = (*count as f64 - expected).abs() / expected;
            assert!(
                deviation <= tolerance,
                "{:?} seen {} times, expected {:.0} (deviation {:.3})",
                value,
                count,
                expected,
                deviation
            );
        }
    }
}
