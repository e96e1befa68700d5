//! Walk generators
//!
//! Both generators start from `[Zero]` and alternate between asking the
//! stopper and asking the stepper. The loop-erased generator additionally
//! keeps the set of points on the walk; a proposal that lands on the walk
//! erases everything after its earlier occurrence (chronological loop
//! erasure), so the returned walk is self-avoiding.

use std::collections::HashSet;

use rand::Rng;

use super::{Stepper, Stopper};
use crate::error::Result;
use crate::lattice::LatticePoint;

/// Produces one complete walk per call
pub trait WalkGenerator: Send + Sync {
    type Point: LatticePoint;

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Self::Point>>;
}

/// Plain random walk, no loop avoidance
#[derive(Debug, Clone)]
pub struct RandomWalkGenerator<S, T> {
    stepper: S,
    stopper: T,
    expected_len: Option<usize>,
}

impl<S, T> RandomWalkGenerator<S, T>
where
    S: Stepper,
    T: Stopper<S::Point>,
{
    pub fn new(stepper: S, stopper: T) -> Self {
        Self {
            stepper,
            stopper,
            expected_len: None,
        }
    }

    /// Pre-size the walk buffer for walks of about `len` points
    pub fn with_expected_len(mut self, len: usize) -> Self {
        self.expected_len = Some(len);
        self
    }
}

impl<S, T> WalkGenerator for RandomWalkGenerator<S, T>
where
    S: Stepper,
    T: Stopper<S::Point>,
{
    type Point = S::Point;

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<S::Point>> {
        let mut walk = Vec::with_capacity(self.expected_len.unwrap_or(0).max(1));
        walk.push(S::Point::zero());

        while !self.stopper.should_stop(&walk) {
            let last = walk[walk.len() - 1];
            walk.push(self.stepper.step(&last, rng)?);
        }
        Ok(walk)
    }
}

/// Loop-erased random walk
#[derive(Debug, Clone)]
pub struct LoopErasedRandomWalkGenerator<S, T> {
    stepper: S,
    stopper: T,
    expected_len: Option<usize>,
}

impl<S, T> LoopErasedRandomWalkGenerator<S, T>
where
    S: Stepper,
    T: Stopper<S::Point>,
{
    pub fn new(stepper: S, stopper: T) -> Self {
        Self {
            stepper,
            stopper,
            expected_len: None,
        }
    }

    /// Pre-size the walk buffer and visited set for walks of about `len` points
    pub fn with_expected_len(mut self, len: usize) -> Self {
        self.expected_len = Some(len);
        self
    }
}

impl<S, T> WalkGenerator for LoopErasedRandomWalkGenerator<S, T>
where
    S: Stepper,
    T: Stopper<S::Point>,
{
    type Point = S::Point;

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<S::Point>> {
        let capacity = self.expected_len.unwrap_or(0).max(1);
        let mut walk = Vec::with_capacity(capacity);
        let mut visited = HashSet::with_capacity(capacity);

        let origin = S::Point::zero();
        walk.push(origin);
        visited.insert(origin);

        while !self.stopper.should_stop(&walk) {
            let last = walk[walk.len() - 1];
            let proposed = self.stepper.step(&last, rng)?;

            if visited.insert(proposed) {
                walk.push(proposed);
                continue;
            }

            // proposed is on the walk: erase the loop back to it
            while let Some(&tail) = walk.last() {
                if tail == proposed {
                    break;
                }
                visited.remove(&tail);
                walk.pop();
            }
        }
        Ok(walk)
    }
}
