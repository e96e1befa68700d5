//! Walk construction
//!
//! A walk starts at the origin and grows one point at a time. Three pieces
//! cooperate:
//!
//! - [`Stepper`]: proposes the next point from the current one
//! - [`Stopper`]: decides, from the walk so far, whether to halt
//! - [`WalkGenerator`]: drives the two, either as a plain random walk or with
//!   chronological loop erasure
//!
//! # Example
//!
//! ```
//! use lerw::distribution::zipf::Zipf;
//! use lerw::direction::L1Direction;
//! use lerw::lattice::{Norm, Point};
//! use lerw::walk::{DistanceStopper, LDStepper, LoopErasedRandomWalkGenerator, WalkGenerator};
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//!
//! let stepper = LDStepper::new(Zipf::new(1.5)?, L1Direction::<Point<3>>::new()?);
//! let stopper = DistanceStopper::new(Norm::L1, 50.0);
//! let generator = LoopErasedRandomWalkGenerator::new(stepper, stopper);
//!
//! let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
//! let walk = generator.generate(&mut rng)?;
//! assert_eq!(walk[0], Point::<3>::new([0, 0, 0]));
//! # Ok::<(), lerw::Error>(())
//! ```

pub mod generator;
pub mod stepper;
pub mod stopper;

pub use generator::{LoopErasedRandomWalkGenerator, RandomWalkGenerator, WalkGenerator};
pub use stepper::{LDStepper, NearestNeighborStepper, Stepper};
pub use stopper::{AnyStopper, DistanceStopper, LengthStopper, StopCondition, Stopper};
