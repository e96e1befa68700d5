//! Configuration validation
//!
//! Every parameter is checked here, before a worker pool is built or a
//! single walk is generated.

use super::*;
use crate::simulation::{registry, MAX_DIMENSION};
use anyhow::Result;

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_simulation(&config.simulation)?;
    validate_run(&config.run)?;
    if config.run.mode == RunMode::Sweep {
        validate_sweep(&config.sweep)?;
    }
    Ok(())
}

/// Validate simulation parameters
pub fn validate_simulation(simulation: &SimulationConfig) -> Result<()> {
    if simulation.dimension == 0 || simulation.dimension > MAX_DIMENSION {
        anyhow::bail!(
            "dimension must be between 1 and {}, got {}",
            MAX_DIMENSION,
            simulation.dimension
        );
    }

    if !registry().supports(simulation.norm, simulation.dimension) {
        anyhow::bail!(
            "unsupported dimension/norm combination: D={}, norm={}",
            simulation.dimension,
            simulation.norm
        );
    }

    if simulation.step == StepKind::LongRange
        && !(simulation.alpha.is_finite() && simulation.alpha > 0.0)
    {
        anyhow::bail!("alpha must be greater than 0, got {}", simulation.alpha);
    }

    if simulation.expected_length == Some(0) {
        anyhow::bail!("expected_length must be at least 1 when given");
    }

    Ok(())
}

/// Validate run parameters
pub fn validate_run(run: &RunConfig) -> Result<()> {
    match run.mode {
        RunMode::Lengths | RunMode::Sweep => {
            if run.samples == 0 {
                anyhow::bail!("number of walks must be at least 1");
            }
        }
        RunMode::Trace => {}
    }

    if run.mode == RunMode::Lengths && !(run.distance.is_finite() && run.distance > 0.0) {
        anyhow::bail!("distance must be a finite number > 0, got {}", run.distance);
    }

    if run.threads > 4096 {
        anyhow::bail!("threads must be at most 4096, got {}", run.threads);
    }

    Ok(())
}

/// Validate the distance ladder
pub fn validate_sweep(sweep: &SweepConfig) -> Result<()> {
    if sweep.intervals == 0 {
        anyhow::bail!("intervals must be at least 1");
    }

    if sweep.max_exponent < sweep.intervals - 1 {
        anyhow::bail!(
            "maximum exponent must be at least {} to accommodate {} intervals",
            sweep.intervals - 1,
            sweep.intervals
        );
    }

    if sweep.max_exponent > 62 {
        anyhow::bail!(
            "maximum exponent must be at most 62 (distances beyond 2^62 leave the i64 lattice), got {}",
            sweep.max_exponent
        );
    }

    if !sweep.min_distance.is_finite() || sweep.min_distance < 0.0 {
        anyhow::bail!(
            "min_distance must be a finite number >= 0, got {}",
            sweep.min_distance
        );
    }

    let largest = 2f64.powi(sweep.max_exponent as i32);
    if largest < sweep.min_distance {
        anyhow::bail!(
            "min_distance {} excludes every distance (largest is 2^{} = {})",
            sweep.min_distance,
            sweep.max_exponent,
            largest
        );
    }

    Ok(())
}
