//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.
//!
//! A run is fully described by [`Config`]. It is built from an optional TOML
//! file (see [`toml::parse_toml_file`]), then CLI flags override individual
//! values ([`toml::merge_cli_with_config`]), and finally
//! [`validator::validate_config`] checks everything before any walk is
//! generated.
//!
//! ```toml
//! [simulation]
//! norm = "L1"
//! dimension = 3
//! alpha = 1.5
//!
//! [run]
//! mode = "sweep"
//! samples = 5000
//! seed = 7
//!
//! [sweep]
//! max_exponent = 12
//! intervals = 6
//!
//! [output]
//! format = "csv"
//! path = "sweep.csv"
//! ```

pub mod cli;
pub mod cli_convert;
pub mod toml;
pub mod validator;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::lattice::Norm;
use crate::simulation::{SimulationParams, StepKind, WalkKind};
use crate::walk::StopCondition;

/// Complete run configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub sweep: SweepConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// What kind of walk is simulated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Norm for step directions and the stopping distance
    #[serde(default = "default_norm")]
    pub norm: Norm,
    /// Lattice dimension
    #[serde(default = "default_dimension")]
    pub dimension: usize,
    /// Tail exponent of the step length distribution (> 0)
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    #[serde(default)]
    pub step: StepKind,
    #[serde(default)]
    pub walk: WalkKind,
    /// Pre-size walk buffers for walks of about this many points
    #[serde(default)]
    pub expected_length: Option<usize>,
}

/// What is computed and how
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub mode: RunMode,
    /// Number of walks per aggregation
    #[serde(default = "default_samples")]
    pub samples: usize,
    /// Stopping distance (lengths mode)
    #[serde(default = "default_distance")]
    pub distance: f64,
    /// Master seed
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Worker threads (0 = one per logical CPU)
    #[serde(default)]
    pub threads: usize,
    /// Accepted steps of the single walk (trace mode)
    #[serde(default = "default_trace_length")]
    pub trace_length: usize,
}

/// Distance ladder for sweep mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Largest distance is `2^max_exponent`
    #[serde(default = "default_max_exponent")]
    pub max_exponent: u32,
    /// Number of powers of two below and including the largest
    #[serde(default = "default_intervals")]
    pub intervals: u32,
    /// Distances below this are skipped
    #[serde(default = "default_min_distance")]
    pub min_distance: f64,
}

/// Where and how results are written
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Output file (stdout if unset)
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Computation to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Length of each of `samples` walks stopped at `distance`
    #[default]
    Lengths,
    /// Mean length as a function of stopping distance
    Sweep,
    /// Points of one walk of `trace_length` steps
    Trace,
}

/// Result format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

fn default_norm() -> Norm {
    Norm::L2
}

fn default_dimension() -> usize {
    2
}

fn default_alpha() -> f64 {
    0.5
}

fn default_samples() -> usize {
    1000
}

fn default_distance() -> f64 {
    1000.0
}

fn default_seed() -> u64 {
    42
}

fn default_trace_length() -> usize {
    1000
}

fn default_max_exponent() -> u32 {
    11
}

fn default_intervals() -> u32 {
    8
}

fn default_min_distance() -> f64 {
    500.0
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            norm: default_norm(),
            dimension: default_dimension(),
            alpha: default_alpha(),
            step: StepKind::default(),
            walk: WalkKind::default(),
            expected_length: None,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            mode: RunMode::default(),
            samples: default_samples(),
            distance: default_distance(),
            seed: default_seed(),
            threads: 0,
            trace_length: default_trace_length(),
        }
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            max_exponent: default_max_exponent(),
            intervals: default_intervals(),
            min_distance: default_min_distance(),
        }
    }
}

impl Config {
    /// Parameters for [`crate::simulation::build`]
    pub fn simulation_params(&self) -> SimulationParams {
        let sim = &self.simulation;
        SimulationParams::new(sim.norm, sim.dimension, sim.alpha)
            .with_step(self.simulation.step)
            .with_walk(self.simulation.walk)
            .with_expected_len(self.simulation.expected_length)
    }

    /// Exit from the ball of radius `distance` under the configured norm
    pub fn distance_stop(&self, distance: f64) -> StopCondition {
        StopCondition::Distance {
            norm: self.simulation.norm,
            distance,
        }
    }

    /// Fixed-length stop for trace mode
    pub fn trace_stop(&self) -> StopCondition {
        StopCondition::Length {
            steps: self.run.trace_length,
        }
    }

    /// One-line parameter header for text output
    pub fn header(&self) -> String {
        match self.run.mode {
            RunMode::Lengths => format!(
                "# D={}, R={}, N={}, α={}, Norm={}, seed={}",
                self.simulation.dimension,
                self.run.distance,
                self.run.samples,
                self.simulation.alpha,
                self.simulation.norm,
                self.run.seed
            ),
            RunMode::Sweep => format!(
                "# D={}, e={}, intervals={}, N={}, α={}, Norm={}, seed={}",
                self.simulation.dimension,
                self.sweep.max_exponent,
                self.sweep.intervals,
                self.run.samples,
                self.simulation.alpha,
                self.simulation.norm,
                self.run.seed
            ),
            RunMode::Trace => format!(
                "# D={}, L={}, α={}, Norm={}, seed={}",
                self.simulation.dimension,
                self.run.trace_length,
                self.simulation.alpha,
                self.simulation.norm,
                self.run.seed
            ),
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::Lengths => write!(f, "lengths"),
            RunMode::Sweep => write!(f, "sweep"),
            RunMode::Trace => write!(f, "trace"),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
