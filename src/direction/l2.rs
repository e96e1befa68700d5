//! Approximately uniform lattice points on the Euclidean sphere
//!
//! A direction is drawn as a standard normal vector normalized to unit
//! length, which is exactly uniform on the continuous sphere. Scaling by the
//! radius and rounding every coordinate to the nearest integer keeps the
//! result within `sqrt(d) / 2` of the requested radius.

use std::marker::PhantomData;

use rand::Rng;
use rand_distr::StandardNormal;

use super::{require_dimension, DirectionSampler};
use crate::error::{Error, Result};
use crate::lattice::LatticePoint;

/// `2^63`; rounded values at or beyond this do not fit `i64`
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Uniform direction on the L2 sphere of a real radius
#[derive(Debug, Clone, Copy)]
pub struct L2Direction<P> {
    _point: PhantomData<fn() -> P>,
}

impl<P: LatticePoint> L2Direction<P> {
    /// # Errors
    ///
    /// [`Error::Configuration`] for zero-dimensional points.
    pub fn new() -> Result<Self> {
        require_dimension::<P>("L2Direction")?;
        Ok(Self {
            _point: PhantomData,
        })
    }

    /// Unit vector with uniformly distributed direction
    pub fn unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Vec<f64> {
        loop {
            let v: Vec<f64> = (0..P::DIM).map(|_| rng.sample(StandardNormal)).collect();
            let length = v.iter().map(|x| x * x).sum::<f64>().sqrt();
            if length > 0.0 {
                return v.into_iter().map(|x| x / length).collect();
            }
        }
    }
}

impl<P: LatticePoint> DirectionSampler for L2Direction<P> {
    type Point = P;
    type Radius = f64;

    fn sample<R: Rng + ?Sized>(&self, radius: f64, rng: &mut R) -> Result<P> {
        let radius = radius.abs();
        if !radius.is_finite() {
            return Err(Error::overflow(format!("step radius {}", radius)));
        }

        let coords = Self::unit_vector(rng)
            .into_iter()
            .map(|x| {
                let scaled = (x * radius).round();
                if scaled.abs() >= I64_LIMIT {
                    return Err(Error::overflow(format!(
                        "rounded coordinate {:e} at radius {:e}",
                        scaled, radius
                    )));
                }
                Ok(scaled as i64)
            })
            .collect::<Result<Vec<i64>>>()?;

        P::from_coordinates(&coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::{Norm, Point};
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn check_radius<const D: usize>(seed: u64) {
        let sampler = L2Direction::<Point<D, i32>>::new().unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let slack = (D as f64).sqrt() / 2.0 + 1e-9;
        for r in [1.0, 2.5, 5.0, 100.0, 1e6, i32::MAX as f64 / 2.0] {
            for _ in 0..200 {
                let p = sampler.sample(r, &mut rng).unwrap();
                let norm = p.norm(Norm::L2);
                assert!((norm - r).abs() <= slack, "d={} r={} norm={}", D, r, norm);
            }
        }
    }

    #[test]
    fn test_radius_within_rounding() {
        check_radius::<2>(21);
        check_radius::<3>(22);
        check_radius::<4>(23);
    }

    #[test]
    fn test_unit_vector_length() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(24);
        for _ in 0..100 {
            let v = L2Direction::<Point<5>>::unit_vector(&mut rng);
            let length: f64 = v.iter().map(|x| x * x).sum::<f64>().sqrt();
            assert!((length - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_signs_balanced() {
        let sampler = L2Direction::<Point<2>>::new().unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(25);
        let n = 20_000;
        let mut positive = [0usize; 2];
        for _ in 0..n {
            let p = sampler.sample(1000.0, &mut rng).unwrap();
            for (count, c) in positive.iter_mut().zip(p.coords()) {
                if *c > 0 {
                    *count += 1;
                }
            }
        }
        for count in positive {
            let fraction = count as f64 / n as f64;
            assert!(
                (fraction - 0.5).abs() < 0.02,
                "positive fraction {:.3}",
                fraction
            );
        }
    }

    #[test]
    fn test_overflow() {
        let sampler = L2Direction::<Point<2, i16>>::new().unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(26);
        assert!(matches!(sampler.sample(1e6, &mut rng), Err(Error::Overflow(_))));
        assert!(matches!(
            sampler.sample(f64::INFINITY, &mut rng),
            Err(Error::Overflow(_))
        ));

        let wide = L2Direction::<Point<2>>::new().unwrap();
        assert!(matches!(wide.sample(1e30, &mut rng), Err(Error::Overflow(_))));
    }
}
