//! Uniform lattice points on the L∞ sphere (cube surface)
//!
//! A point at L∞ radius `r` has `k >= 1` coordinates equal to `±r` and the
//! remaining `d - k` strictly inside `[-(r-1), r-1]`. The number of such
//! points is
//!
//! ```text
//! A(k, r) = C(d, k) * 2^k * (2r - 1)^(d - k)
//! ```
//!
//! Sampling picks the class `k` with probability proportional to `A(k, r)`,
//! then fills `k` random positions with `±r` and the rest uniformly from the
//! interior range. Every class `k = 1..=d` is reachable, including `k = d`.

use std::marker::PhantomData;

use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;

use super::{integer_radius, random_sign, require_dimension, DirectionSampler};
use crate::error::{Error, Result};
use crate::lattice::LatticePoint;

/// Number of lattice points at L∞ radius `r` with exactly `k` extreme coordinates
///
/// Computed in floating point; for large `r` the count is far beyond any
/// integer type but only its relative size matters.
pub fn surface_count(dimension: usize, k: usize, radius: u64) -> f64 {
    if k > dimension {
        return 0.0;
    }
    let inner = 2.0 * radius as f64 - 1.0;
    binomial(dimension, k) * 2f64.powi(k as i32) * inner.powi((dimension - k) as i32)
}

fn binomial(n: usize, k: usize) -> f64 {
    let k = k.min(n - k);
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}

/// Uniform direction on the L∞ sphere of an integer radius
#[derive(Debug, Clone, Copy)]
pub struct LinfDirection<P> {
    _point: PhantomData<fn() -> P>,
}

impl<P: LatticePoint> LinfDirection<P> {
    /// # Errors
    ///
    /// [`Error::Configuration`] for zero-dimensional points.
    pub fn new() -> Result<Self> {
        require_dimension::<P>("LinfDirection")?;
        Ok(Self {
            _point: PhantomData,
        })
    }

    /// Draw the number of extreme coordinates, in `1..=DIM`
    fn face_class<R: Rng + ?Sized>(radius: u64, rng: &mut R) -> Result<usize> {
        let weights = (1..=P::DIM).map(|k| surface_count(P::DIM, k, radius));
        let classes = WeightedIndex::new(weights).map_err(|e| {
            Error::overflow(format!("L∞ face weights at radius {}: {}", radius, e))
        })?;
        Ok(classes.sample(rng) + 1)
    }
}

impl<P: LatticePoint> DirectionSampler for LinfDirection<P> {
    type Point = P;
    type Radius = u64;

    fn sample<R: Rng + ?Sized>(&self, radius: u64, rng: &mut R) -> Result<P> {
        let r = integer_radius::<P>(radius)?;
        if r == 0 {
            return Ok(P::zero());
        }

        let k = Self::face_class(radius, rng)?;

        let mut coords = Vec::with_capacity(P::DIM);
        coords.extend((0..k).map(|_| random_sign(rng) * r));
        coords.extend((k..P::DIM).map(|_| rng.gen_range(-(r - 1)..=(r - 1))));
        coords.shuffle(rng);

        P::from_coordinates(&coords)
    }
}
