//! `(norm, dimension)` lookup table
//!
//! Built once on first use. Long-range entries pair the norm with its length
//! distribution: L2 uses the continuous [`Pareto`] radius, L1 and L∞ use the
//! integer [`Zipf`] radius. All entries run on `i64` points.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::{LatticeSimulation, Simulation, SimulationParams, StepKind};
use crate::direction::{L1Direction, L2Direction, LinfDirection};
use crate::distribution::{pareto::Pareto, zipf::Zipf};
use crate::error::{Error, Result};
use crate::lattice::{Norm, Point};
use crate::walk::{LDStepper, NearestNeighborStepper};

/// Largest dimension with a table entry
pub const MAX_DIMENSION: usize = 5;

type Builder = fn(&SimulationParams) -> Result<Box<dyn Simulation>>;

#[derive(Clone, Copy)]
struct Entry {
    long_range: Builder,
    nearest_neighbor: Builder,
}

fn long_range_l1<const D: usize>(params: &SimulationParams) -> Result<Box<dyn Simulation>> {
    let stepper = LDStepper::new(Zipf::new(params.alpha)?, L1Direction::<Point<D>>::new()?);
    Ok(Box::new(LatticeSimulation::new(params.clone(), stepper)))
}

fn long_range_l2<const D: usize>(params: &SimulationParams) -> Result<Box<dyn Simulation>> {
    let stepper = LDStepper::new(Pareto::new(params.alpha)?, L2Direction::<Point<D>>::new()?);
    Ok(Box::new(LatticeSimulation::new(params.clone(), stepper)))
}

fn long_range_linf<const D: usize>(params: &SimulationParams) -> Result<Box<dyn Simulation>> {
    let stepper = LDStepper::new(Zipf::new(params.alpha)?, LinfDirection::<Point<D>>::new()?);
    Ok(Box::new(LatticeSimulation::new(params.clone(), stepper)))
}

fn nearest_neighbor<const D: usize>(params: &SimulationParams) -> Result<Box<dyn Simulation>> {
    let stepper = NearestNeighborStepper::<Point<D>>::new()?;
    Ok(Box::new(LatticeSimulation::new(params.clone(), stepper)))
}

macro_rules! register {
    ($table:ident; $($d:literal),+) => {
        $(
            $table.insert((Norm::L1, $d), Entry {
                long_range: long_range_l1::<$d>,
                nearest_neighbor: nearest_neighbor::<$d>,
            });
            $table.insert((Norm::L2, $d), Entry {
                long_range: long_range_l2::<$d>,
                nearest_neighbor: nearest_neighbor::<$d>,
            });
            $table.insert((Norm::LInf, $d), Entry {
                long_range: long_range_linf::<$d>,
                nearest_neighbor: nearest_neighbor::<$d>,
            });
        )+
    };
}

/// Constructors for every supported `(norm, dimension)` pair
pub struct Registry {
    table: HashMap<(Norm, usize), Entry>,
}

impl Registry {
    fn new() -> Self {
        let mut table = HashMap::new();
        register!(table; 1, 2, 3, 4, 5);
        Self { table }
    }

    pub fn supports(&self, norm: Norm, dimension: usize) -> bool {
        self.table.contains_key(&(norm, dimension))
    }

    /// Supported pairs, sorted by dimension then norm
    pub fn keys(&self) -> Vec<(Norm, usize)> {
        let mut keys: Vec<_> = self.table.keys().copied().collect();
        keys.sort_by_key(|&(norm, d)| (d, norm.name()));
        keys
    }

    /// Assemble the simulation `params` describe
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] for an unsupported `(norm, dimension)` pair,
    /// [`Error::DistributionDomain`] for an invalid `alpha` (long-range only).
    pub fn build(&self, params: &SimulationParams) -> Result<Box<dyn Simulation>> {
        let entry = self
            .table
            .get(&(params.norm, params.dimension))
            .ok_or_else(|| {
                Error::Configuration(format!(
                    "unsupported dimension/norm combination: D={}, norm={} (dimensions 1..={} are available)",
                    params.dimension, params.norm, MAX_DIMENSION
                ))
            })?;

        let builder = match params.step {
            StepKind::LongRange => entry.long_range,
            StepKind::NearestNeighbor => entry.nearest_neighbor,
        };
        builder(params)
    }
}

/// The process-wide table
pub fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(Registry::new)
}

/// Shorthand for `registry().build(params)`
pub fn build(params: &SimulationParams) -> Result<Box<dyn Simulation>> {
    registry().build(params)
}
