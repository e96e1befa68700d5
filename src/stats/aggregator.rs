//! Parallel aggregation of independent walk samples
//!
//! This module turns a generator factory into `N` projected samples and their
//! mean. Work is split into two strictly separated phases:
//!
//! 1. **Seed draw** (sequential): `N` seeds are drawn in order from the
//!    master RNG, one per sample
//! 2. **Sample execution** (parallel): every sample owns a fresh generator,
//!    a private `Xoshiro256PlusPlus` seeded from its seed, and its own walk
//!    buffers; samples share nothing mutable
//!
//! Results are collected in sample order and reduced sequentially, so the
//! values and the mean depend only on `(master seed, N)`, never on the number
//! of threads or on scheduling. The first failing sample aborts the whole
//! aggregation.
//!
//! # Example
//!
//! ```
//! use lerw::direction::L1Direction;
//! use lerw::distribution::zipf::Zipf;
//! use lerw::lattice::{Norm, Point};
//! use lerw::stats::aggregator::Aggregator;
//! use lerw::walk::{DistanceStopper, LDStepper, LoopErasedRandomWalkGenerator};
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//!
//! let aggregator = Aggregator::new(2)?;
//! let factory = || -> lerw::Result<_> {
//!     let stepper = LDStepper::new(Zipf::new(1.0)?, L1Direction::<Point<2>>::new()?);
//!     Ok(LoopErasedRandomWalkGenerator::new(stepper, DistanceStopper::new(Norm::L1, 20.0)))
//! };
//!
//! let mut master = Xoshiro256PlusPlus::seed_from_u64(42);
//! let result = aggregator.aggregate(factory, &mut master, 16, |walk| walk.len())?;
//! assert_eq!(result.values.len(), 16);
//! assert!(result.mean >= 2.0);
//! # Ok::<(), lerw::Error>(())
//! ```

use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::debug;

use super::Summary;
use crate::error::{Error, Result};
use crate::util::time::format_duration;
use crate::walk::WalkGenerator;

/// Per-sample RNG type
pub type SampleRng = Xoshiro256PlusPlus;

/// Projected per-sample value that can be averaged
pub trait Scalar: Copy + Send {
    fn as_f64(self) -> f64;
}

impl Scalar for usize {
    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl Scalar for u64 {
    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl Scalar for f64 {
    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}

/// Draw `n` per-sample seeds, in order, from the master stream
pub fn draw_seeds<R: Rng + ?Sized>(master: &mut R, n: usize) -> Vec<u64> {
    (0..n).map(|_| master.gen::<u64>()).collect()
}

/// Result of one aggregation
#[derive(Debug, Clone)]
pub struct Aggregate<T> {
    /// Per-sample seeds, in sample order
    pub seeds: Vec<u64>,

    /// Projected values, in sample order
    pub values: Vec<T>,

    /// Arithmetic mean of `values`
    pub mean: f64,
}

impl<T: Scalar> Aggregate<T> {
    pub fn summary(&self) -> Option<Summary> {
        let values: Vec<f64> = self.values.iter().map(|v| v.as_f64()).collect();
        Summary::from_values(&values)
    }
}

/// Runs independent samples on a dedicated worker pool
pub struct Aggregator {
    pool: rayon::ThreadPool,
}

impl Aggregator {
    /// Build a pool of `threads` workers; 0 means one per logical CPU
    pub fn new(threads: usize) -> Result<Self> {
        let threads = if threads == 0 { num_cpus::get() } else { threads };
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("lerw-worker-{}", i))
            .build()?;
        debug!(threads, "aggregator pool ready");
        Ok(Self { pool })
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Run `n` samples and average their projections
    ///
    /// `factory` builds one fresh generator per sample; `projection` maps a
    /// finished walk to the value being averaged (for example `walk.len()`).
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] if `n == 0`; the factory's error if it fails
    /// to build a generator, before any seed is drawn; otherwise the error
    /// of a failing sample. No partial result is returned.
    pub fn aggregate<F, G, P, T, M>(
        &self,
        factory: F,
        master: &mut M,
        n: usize,
        projection: P,
    ) -> Result<Aggregate<T>>
    where
        F: Fn() -> Result<G> + Sync,
        G: WalkGenerator,
        P: Fn(&[G::Point]) -> T + Sync,
        T: Scalar,
        M: Rng + ?Sized,
    {
        use rayon::prelude::*;

        if n == 0 {
            return Err(Error::Configuration(
                "number of samples must be at least 1".to_string(),
            ));
        }

        // construction errors surface before any seed is drawn
        factory()?;

        let seeds = draw_seeds(master, n);
        debug!(samples = n, first_seed = seeds[0], "seeds drawn");

        let started = Instant::now();
        let values = self.pool.install(|| {
            seeds
                .par_iter()
                .map(|&seed| -> Result<T> {
                    let generator = factory()?;
                    let mut rng = SampleRng::seed_from_u64(seed);
                    let walk = generator.generate(&mut rng)?;
                    Ok(projection(&walk))
                })
                .collect::<Result<Vec<T>>>()
        })?;

        let mean = values.iter().map(|v| v.as_f64()).sum::<f64>() / n as f64;
        debug!(
            samples = n,
            mean,
            elapsed = %format_duration(started.elapsed()),
            "aggregation finished"
        );

        Ok(Aggregate {
            seeds,
            values,
            mean,
        })
    }
}

impl std::fmt::Debug for Aggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Aggregator")
            .field("threads", &self.threads())
            .finish()
    }
}

/// Stopping distances `2^(e-n+1), ..., 2^e`, dropping those below `min_distance`
///
/// # Errors
///
/// [`Error::Configuration`] if `intervals == 0`, if `max_exponent < intervals - 1`
/// or if `2^max_exponent` is not a finite `f64`.
pub fn sweep_distances(max_exponent: u32, intervals: u32, min_distance: f64) -> Result<Vec<f64>> {
    if intervals == 0 {
        return Err(Error::Configuration(
            "intervals must be at least 1".to_string(),
        ));
    }
    if max_exponent < intervals - 1 {
        return Err(Error::Configuration(format!(
            "maximum exponent must be at least {} to accommodate {} intervals",
            intervals - 1,
            intervals
        )));
    }
    if max_exponent > 1023 {
        return Err(Error::Configuration(format!(
            "maximum exponent {} exceeds the f64 range",
            max_exponent
        )));
    }

    Ok((max_exponent + 1 - intervals..=max_exponent)
        .map(|e| 2f64.powi(e as i32))
        .filter(|&d| d >= min_distance)
        .collect())
}
