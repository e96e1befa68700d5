//! Mode dispatch
//!
//! Turns a validated [`Config`] into a [`Report`]: builds the simulation and
//! worker pool once, then runs the selected mode.

use anyhow::{Context, Result};
use rand::SeedableRng;
use std::time::Instant;
use tracing::{debug, info};

use crate::config::{Config, RunMode};
use crate::output::{Report, SweepPoint};
use crate::simulation::{self, Simulation};
use crate::stats::aggregator::SampleRng;
use crate::stats::{sweep_distances, Aggregator};
use crate::util::time::{format_duration, format_rate, walk_rate};

/// Run the configured mode and collect its data
pub fn execute(config: &Config) -> Result<Report> {
    let params = config.simulation_params();
    let simulation =
        simulation::build(&params).context("Failed to build simulation")?;

    match config.run.mode {
        RunMode::Lengths => run_lengths(config, simulation.as_ref()),
        RunMode::Sweep => run_sweep(config, simulation.as_ref()),
        RunMode::Trace => run_trace(config, simulation.as_ref()),
    }
}

fn run_lengths(config: &Config, simulation: &dyn Simulation) -> Result<Report> {
    let aggregator = Aggregator::new(config.run.threads)
        .context("Failed to build worker pool")?;
    let mut master = SampleRng::seed_from_u64(config.run.seed);
    info!(
        samples = config.run.samples,
        distance = config.run.distance,
        threads = aggregator.threads(),
        "generating walks"
    );

    let started = Instant::now();
    let aggregate = simulation
        .walk_lengths(
            &aggregator,
            &mut master,
            config.run.samples,
            config.distance_stop(config.run.distance),
        )
        .context("Walk generation failed")?;
    let elapsed = started.elapsed();

    let summary = aggregate
        .summary()
        .context("Aggregation produced no samples")?;
    info!(
        mean = summary.mean,
        std_error = summary.std_error,
        elapsed = %format_duration(elapsed),
        rate = %format_rate(walk_rate(config.run.samples, elapsed)),
        "walks finished"
    );

    Ok(Report::Lengths {
        lengths: aggregate.values,
        summary,
    })
}

fn run_sweep(config: &Config, simulation: &dyn Simulation) -> Result<Report> {
    let sweep = &config.sweep;
    let distances = sweep_distances(sweep.max_exponent, sweep.intervals, sweep.min_distance)
        .context("Invalid distance ladder")?;
    let aggregator = Aggregator::new(config.run.threads)
        .context("Failed to build worker pool")?;
    let mut master = SampleRng::seed_from_u64(config.run.seed);
    info!(
        distances = distances.len(),
        samples = config.run.samples,
        threads = aggregator.threads(),
        "starting sweep"
    );

    let started = Instant::now();
    let mut points = Vec::with_capacity(distances.len());
    for distance in distances {
        let step_started = Instant::now();
        let aggregate = simulation
            .walk_lengths(
                &aggregator,
                &mut master,
                config.run.samples,
                config.distance_stop(distance),
            )
            .with_context(|| format!("Walk generation failed at distance {}", distance))?;
        let summary = aggregate
            .summary()
            .context("Aggregation produced no samples")?;

        info!(
            distance,
            mean_length = aggregate.mean,
            elapsed = %format_duration(step_started.elapsed()),
            "distance done"
        );
        points.push(SweepPoint {
            distance,
            mean_length: aggregate.mean,
            summary,
        });
    }
    debug!(elapsed = %format_duration(started.elapsed()), "sweep finished");

    Ok(Report::Sweep { points })
}

fn run_trace(config: &Config, simulation: &dyn Simulation) -> Result<Report> {
    let mut rng = SampleRng::seed_from_u64(config.run.seed);
    let started = Instant::now();
    let points = simulation
        .trace(&mut rng, config.trace_stop())
        .context("Walk generation failed")?;
    info!(
        points = points.len(),
        elapsed = %format_duration(started.elapsed()),
        "trace finished"
    );
    Ok(Report::Trace { points })
}
