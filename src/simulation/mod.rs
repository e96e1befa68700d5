//! Runtime-configured simulations
//!
//! The walk machinery is fully generic over the point type, so dimension and
//! norm are compile-time choices. This module bridges them to run-time
//! configuration: [`registry`] maps every supported `(norm, dimension)` pair
//! to constructors, and each constructor returns a boxed [`Simulation`] with
//! its sampler types fixed.
//!
//! # Example
//!
//! ```
//! use lerw::lattice::Norm;
//! use lerw::simulation::{build, SimulationParams};
//! use lerw::stats::Aggregator;
//! use lerw::walk::StopCondition;
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//!
//! let simulation = build(&SimulationParams::new(Norm::L2, 2, 0.5))?;
//! let aggregator = Aggregator::new(2)?;
//! let mut master = Xoshiro256PlusPlus::seed_from_u64(42);
//! let stop = StopCondition::Distance { norm: Norm::L2, distance: 100.0 };
//!
//! let lengths = simulation.walk_lengths(&aggregator, &mut master, 10, stop)?;
//! assert_eq!(lengths.values.len(), 10);
//! # Ok::<(), lerw::Error>(())
//! ```

pub mod registry;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::lattice::{LatticePoint, Norm};
use crate::stats::aggregator::{Aggregate, Aggregator, SampleRng};
use crate::walk::{
    AnyStopper, LoopErasedRandomWalkGenerator, RandomWalkGenerator, StopCondition, Stepper,
    WalkGenerator,
};

pub use registry::{build, registry, Registry, MAX_DIMENSION};

/// How each step is proposed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
    /// Heavy-tailed length, uniform direction on the norm sphere
    #[default]
    LongRange,

    /// Unit step to one of the `2d` neighbours
    NearestNeighbor,
}

/// Whether loops are erased while the walk grows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum WalkKind {
    #[default]
    LoopErased,
    Plain,
}

/// Everything needed to assemble a simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParams {
    pub norm: Norm,
    pub dimension: usize,

    /// Tail exponent of the step length distribution
    pub alpha: f64,

    #[serde(default)]
    pub step: StepKind,

    #[serde(default)]
    pub walk: WalkKind,

    /// Pre-size walk buffers for walks of about this many points
    #[serde(default)]
    pub expected_len: Option<usize>,
}

impl SimulationParams {
    /// Long-range loop-erased walk with the given norm, dimension and alpha
    pub fn new(norm: Norm, dimension: usize, alpha: f64) -> Self {
        Self {
            norm,
            dimension,
            alpha,
            step: StepKind::default(),
            walk: WalkKind::default(),
            expected_len: None,
        }
    }

    pub fn with_step(mut self, step: StepKind) -> Self {
        self.step = step;
        self
    }

    pub fn with_walk(mut self, walk: WalkKind) -> Self {
        self.walk = walk;
        self
    }

    pub fn with_expected_len(mut self, expected_len: Option<usize>) -> Self {
        self.expected_len = expected_len;
        self
    }
}

/// A simulation with its point and sampler types fixed
pub trait Simulation: Send + Sync {
    fn params(&self) -> &SimulationParams;

    /// Number of points of each of `n` independent walks
    fn walk_lengths(
        &self,
        aggregator: &Aggregator,
        master: &mut SampleRng,
        n: usize,
        stop: StopCondition,
    ) -> Result<Aggregate<usize>>;

    /// Coordinates of every point of a single walk
    fn trace(&self, rng: &mut SampleRng, stop: StopCondition) -> Result<Vec<Vec<i64>>>;
}

/// [`Simulation`] over one concrete stepper
///
/// The stepper is built (and its parameters validated) once; every sample
/// gets its own clone inside a fresh generator.
#[derive(Debug, Clone)]
pub struct LatticeSimulation<S> {
    params: SimulationParams,
    stepper: S,
}

impl<S: Stepper + Clone> LatticeSimulation<S> {
    pub fn new(params: SimulationParams, stepper: S) -> Self {
        Self { params, stepper }
    }

    fn loop_erased(&self, stop: StopCondition) -> LoopErasedRandomWalkGenerator<S, AnyStopper> {
        let generator =
            LoopErasedRandomWalkGenerator::new(self.stepper.clone(), stop.into_stopper());
        match self.params.expected_len {
            Some(len) => generator.with_expected_len(len),
            None => generator,
        }
    }

    fn plain(&self, stop: StopCondition) -> RandomWalkGenerator<S, AnyStopper> {
        let generator = RandomWalkGenerator::new(self.stepper.clone(), stop.into_stopper());
        match self.params.expected_len {
            Some(len) => generator.with_expected_len(len),
            None => generator,
        }
    }
}

impl<S: Stepper + Clone> Simulation for LatticeSimulation<S> {
    fn params(&self) -> &SimulationParams {
        &self.params
    }

    fn walk_lengths(
        &self,
        aggregator: &Aggregator,
        master: &mut SampleRng,
        n: usize,
        stop: StopCondition,
    ) -> Result<Aggregate<usize>> {
        match self.params.walk {
            WalkKind::LoopErased => {
                aggregator.aggregate(|| Ok(self.loop_erased(stop)), master, n, |walk| walk.len())
            }
            WalkKind::Plain => {
                aggregator.aggregate(|| Ok(self.plain(stop)), master, n, |walk| walk.len())
            }
        }
    }

    fn trace(&self, rng: &mut SampleRng, stop: StopCondition) -> Result<Vec<Vec<i64>>> {
        let walk = match self.params.walk {
            WalkKind::LoopErased => self.loop_erased(stop).generate(rng)?,
            WalkKind::Plain => self.plain(stop).generate(rng)?,
        };
        Ok(walk.iter().map(LatticePoint::coordinates).collect())
    }
}
