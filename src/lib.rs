//! LERW - loop-erased random walks with long-range steps
//!
//! Simulates walks on the integer lattice Z^d whose steps have a heavy-tailed
//! length and a uniformly random direction on the lattice sphere of that
//! length, erases loops chronologically, and measures how the walk length
//! grows with the distance at which the walk is stopped.
//!
//! # Architecture
//!
//! - **Lattice**: fixed-dimension integer points with checked arithmetic and
//!   L1, L2 and L∞ norms
//! - **Distributions**: Zipf and Pareto step lengths
//! - **Directions**: exactly uniform lattice points on L1 and L∞ spheres,
//!   rounded Gaussian directions for L2
//! - **Walks**: steppers, stop rules, plain and loop-erased generators
//! - **Statistics**: deterministic parallel aggregation over seeded samples
//! - **Simulation**: `(norm, dimension)` table selecting concrete types at
//!   run time

pub mod config;
pub mod direction;
pub mod distribution;
pub mod error;
pub mod lattice;
pub mod output;
pub mod run;
pub mod simulation;
pub mod stats;
pub mod util;
pub mod walk;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
