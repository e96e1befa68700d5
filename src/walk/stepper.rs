//! Next-point proposals

use std::marker::PhantomData;

use rand::Rng;

use crate::direction::DirectionSampler;
use crate::distribution::LengthSampler;
use crate::error::{Error, Result};
use crate::lattice::LatticePoint;

/// Proposes the next point of a walk
pub trait Stepper: Send + Sync {
    type Point: LatticePoint;

    /// Propose a successor of `from`
    ///
    /// Fails with [`Error::Overflow`] if the step leaves the coordinate range.
    fn step<R: Rng + ?Sized>(&self, from: &Self::Point, rng: &mut R) -> Result<Self::Point>;
}

/// Long-range stepper: a heavy-tailed length followed by a direction of that length
///
/// Each call consumes exactly one length draw and one direction draw.
#[derive(Debug, Clone)]
pub struct LDStepper<L, D> {
    length: L,
    direction: D,
}

impl<L, D> LDStepper<L, D>
where
    L: LengthSampler,
    D: DirectionSampler<Radius = L::Output>,
{
    pub fn new(length: L, direction: D) -> Self {
        Self { length, direction }
    }
}

impl<L, D> Stepper for LDStepper<L, D>
where
    L: LengthSampler,
    D: DirectionSampler<Radius = L::Output>,
{
    type Point = D::Point;

    #[inline]
    fn step<R: Rng + ?Sized>(&self, from: &D::Point, rng: &mut R) -> Result<D::Point> {
        let radius = self.length.sample(rng);
        let delta = self.direction.sample(radius, rng)?;
        from.checked_add(&delta)
            .ok_or_else(|| Error::overflow(format!("step {:?} from {:?}", delta, from)))
    }
}

/// Short-range stepper: one of the `2d` unit neighbours, uniformly
#[derive(Debug, Clone, Copy)]
pub struct NearestNeighborStepper<P> {
    _point: PhantomData<fn() -> P>,
}

impl<P: LatticePoint> NearestNeighborStepper<P> {
    pub fn new() -> Result<Self> {
        crate::direction::require_dimension::<P>("NearestNeighborStepper")?;
        Ok(Self {
            _point: PhantomData,
        })
    }
}

impl<P: LatticePoint> Stepper for NearestNeighborStepper<P> {
    type Point = P;

    fn step<R: Rng + ?Sized>(&self, from: &P, rng: &mut R) -> Result<P> {
        let choice = rng.gen_range(0..2 * P::DIM);
        let mut unit = vec![0i64; P::DIM];
        unit[choice / 2] = if choice % 2 == 0 { 1 } else { -1 };

        let delta = P::from_coordinates(&unit)?;
        from.checked_add(&delta)
            .ok_or_else(|| Error::overflow(format!("unit step {:?} from {:?}", delta, from)))
    }
}
