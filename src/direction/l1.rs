//! Uniform lattice points on the L1 sphere (diamond)
//!
//! Finds an integer solution of `|x_1| + ... + |x_d| = r` with the
//! stars-and-bars method. For `r = 5, d = 3` the bar layout `|****|*`
//! encodes the composition `(0, 4, 1)`.
//!
//! Signs are randomized afterwards. Because `-0 = 0`, a composition with `z`
//! zero parts maps to `2^z` times fewer signed points than its sign draws
//! suggest, so every zero part rejects the sample with probability 1/2. The
//! expected number of rounds is at most `2^d` (reached only at `r = 0`) and
//! close to 1 for large `r`.

use std::marker::PhantomData;

use rand::seq::index;
use rand::Rng;

use super::{integer_radius, random_sign, require_dimension, DirectionSampler};
use crate::error::{Error, Result};
use crate::lattice::LatticePoint;

/// Uniform direction on the L1 sphere of an integer radius
#[derive(Debug, Clone, Copy)]
pub struct L1Direction<P> {
    _point: PhantomData<fn() -> P>,
}

impl<P: LatticePoint> L1Direction<P> {
    /// # Errors
    ///
    /// [`Error::Configuration`] for zero-dimensional points.
    pub fn new() -> Result<Self> {
        require_dimension::<P>("L1Direction")?;
        Ok(Self {
            _point: PhantomData,
        })
    }

    /// Uniform composition of `radius` into `parts` non-negative integers
    ///
    /// Draws `parts - 1` distinct bars from `{1, ..., radius + parts - 1}`,
    /// closes with a final bar at `radius + parts`, and reads the gaps.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] if `parts` is 0; [`Error::Overflow`] if the
    /// bar span does not fit in `usize`.
    pub fn composition<R: Rng + ?Sized>(
        radius: u64,
        parts: usize,
        rng: &mut R,
    ) -> Result<Vec<u64>> {
        if parts == 0 {
            return Err(Error::Configuration(
                "composition needs at least one part".to_string(),
            ));
        }
        let overflow = || Error::overflow(format!("stars-and-bars span for radius {}", radius));
        let last_bar = radius.checked_add(parts as u64).ok_or_else(overflow)?;
        let span = usize::try_from(last_bar - 1).map_err(|_| overflow())?;

        let mut bars: Vec<u64> = index::sample(rng, span, parts - 1)
            .into_iter()
            .map(|i| i as u64 + 1)
            .collect();
        bars.push(last_bar);
        bars.sort_unstable();

        let mut previous = 0;
        Ok(bars
            .into_iter()
            .map(|bar| {
                let stars = bar - previous - 1;
                previous = bar;
                stars
            })
            .collect())
    }

    /// One coin per zero part; any tails rejects the whole composition
    fn reject_for_zeros<R: Rng + ?Sized>(parts: &[u64], rng: &mut R) -> bool {
        parts.iter().any(|&part| part == 0 && rng.gen_bool(0.5))
    }
}

impl<P: LatticePoint> DirectionSampler for L1Direction<P> {
    type Point = P;
    type Radius = u64;

    fn sample<R: Rng + ?Sized>(&self, radius: u64, rng: &mut R) -> Result<P> {
        integer_radius::<P>(radius)?;

        let parts = loop {
            let parts = Self::composition(radius, P::DIM, rng)?;
            if !Self::reject_for_zeros(&parts, rng) {
                break parts;
            }
        };

        // parts[i] <= radius <= MAX_COORDINATE, so the cast is lossless
        let coords: Vec<i64> = parts
            .into_iter()
            .map(|part| random_sign(rng) * part as i64)
            .collect();
        P::from_coordinates(&coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::testing::assert_uniform;
    use crate::lattice::{Norm, Point};
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn check_exact_radius<const D: usize>(seed: u64) {
        let sampler = L1Direction::<Point<D, i32>>::new().unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        for r in [1u64, 2, 5, 100, i32::MAX as u64] {
            for _ in 0..200 {
                let p = sampler.sample(r, &mut rng).unwrap();
                assert_eq!(p.norm(Norm::L1), r as f64, "d={} r={} p={:?}", D, r, p);
            }
        }
    }

    #[test]
    fn test_exact_radius() {
        check_exact_radius::<2>(1);
        check_exact_radius::<3>(2);
        check_exact_radius::<4>(3);
    }

    #[test]
    fn test_composition_sums_to_radius() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(10);
        for parts in 1..=5 {
            for radius in [0u64, 1, 7, 1000] {
                let c = L1Direction::<Point<1>>::composition(radius, parts, &mut rng)
                    .unwrap();
                assert_eq!(c.len(), parts);
                assert_eq!(c.iter().sum::<u64>(), radius);
            }
        }
    }

    #[test]
    fn test_composition_without_parts_rejected() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(10);
        let result = L1Direction::<Point<1>>::composition(5, 0, &mut rng);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_zero_radius_is_origin() {
        let sampler = L1Direction::<Point<3>>::new().unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(4);
        assert_eq!(sampler.sample(0, &mut rng).unwrap(), Point::zero());
    }

    #[test]
    fn test_one_dimension() {
        let sampler = L1Direction::<Point<1>>::new().unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
        let samples: Vec<_> = (0..10_000)
            .map(|_| sampler.sample(3, &mut rng).unwrap())
            .collect();
        assert_uniform(samples, 2, 0.1);
    }

    #[test]
    fn test_uniform_two_dimensions() {
        // |x| + |y| = 2 has 8 lattice points
        let sampler = L1Direction::<Point<2>>::new().unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(6);
        let samples: Vec<_> = (0..100_000)
            .map(|_| sampler.sample(2, &mut rng).unwrap())
            .collect();
        assert_uniform(samples, 8, 0.1);

        // ... and 20 at radius 5
        let samples: Vec<_> = (0..100_000)
            .map(|_| sampler.sample(5, &mut rng).unwrap())
            .collect();
        assert_uniform(samples, 20, 0.1);
    }

    #[test]
    fn test_uniform_three_dimensions() {
        // 6 axis points and 12 face-diagonal points
        let sampler = L1Direction::<Point<3>>::new().unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        let samples: Vec<_> = (0..100_000)
            .map(|_| sampler.sample(2, &mut rng).unwrap())
            .collect();
        assert_uniform(samples, 18, 0.1);
    }

    #[test]
    fn test_uniform_four_dimensions() {
        let sampler = L1Direction::<Point<4>>::new().unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(8);
        let samples: Vec<_> = (0..100_000)
            .map(|_| sampler.sample(1, &mut rng).unwrap())
            .collect();
        assert_uniform(samples, 8, 0.1);

        // 8 axis points + C(4,2) * 4 diagonal points
        let samples: Vec<_> = (0..100_000)
            .map(|_| sampler.sample(2, &mut rng).unwrap())
            .collect();
        assert_uniform(samples, 32, 0.1);
    }

    #[test]
    fn test_radius_wider_than_field() {
        let sampler = L1Direction::<Point<2, i16>>::new().unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(9);
        let err = sampler.sample(1 << 20, &mut rng).unwrap_err();
        assert!(matches!(err, Error::Overflow(_)));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            L1Direction::<Point<0>>::new(),
            Err(Error::Configuration(_))
        ));
    }
}
