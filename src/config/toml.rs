//! TOML configuration file parsing

use super::*;
use crate::config::cli::Cli;
use crate::config::cli_convert::parse_count;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config =
        ::toml::from_str(contents).context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Load the configuration file named on the command line (if any) and apply CLI overrides
pub fn load_config(cli: &Cli) -> Result<Config> {
    let base = match &cli.config {
        Some(path) => parse_toml_file(path)?,
        None => Config::default(),
    };
    merge_cli_with_config(cli, base)
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Result<Config> {
    // Simulation
    if let Some(norm) = cli.norm {
        config.simulation.norm = norm.into();
    }
    if let Some(dimension) = cli.dimension {
        config.simulation.dimension = dimension;
    }
    if let Some(alpha) = cli.alpha {
        config.simulation.alpha = alpha;
    }
    if let Some(step) = cli.stepper {
        config.simulation.step = step.into();
    }
    if let Some(walk) = cli.walk {
        config.simulation.walk = walk.into();
    }
    if cli.expected_length.is_some() {
        config.simulation.expected_length = cli.expected_length;
    }

    // Run
    if let Some(mode) = cli.mode {
        config.run.mode = mode.into();
    }
    if let Some(count) = &cli.number_of_walks {
        config.run.samples = parse_count(count)?;
    }
    if let Some(distance) = cli.distance {
        config.run.distance = distance;
    }
    if let Some(seed) = cli.seed {
        config.run.seed = seed;
    }
    if let Some(threads) = cli.threads {
        config.run.threads = threads;
    }
    if let Some(length) = cli.trace_length {
        config.run.trace_length = length;
    }

    // Sweep
    if let Some(e) = cli.max_exponent {
        config.sweep.max_exponent = e;
    }
    if let Some(intervals) = cli.intervals {
        config.sweep.intervals = intervals;
    }
    if let Some(min) = cli.min_distance {
        config.sweep.min_distance = min;
    }

    // Output
    if let Some(format) = cli.format {
        config.output.format = format.into();
    }
    if cli.output.is_some() {
        config.output.path = cli.output.clone();
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_parse_toml_basic() {
        let toml = r#"
[simulation]
norm = "L1"
dimension = 3
alpha = 1.5

[run]
samples = 5000
distance = 256.0
seed = 7
"#;

        let config = parse_toml_string(toml).unwrap();
        assert_eq!(config.simulation.norm, Norm::L1);
        assert_eq!(config.simulation.dimension, 3);
        assert_eq!(config.simulation.alpha, 1.5);
        assert_eq!(config.run.samples, 5000);
        assert_eq!(config.run.distance, 256.0);
        assert_eq!(config.run.seed, 7);
        // untouched tables keep their defaults
        assert_eq!(config.sweep, SweepConfig::default());
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_parse_toml_empty_is_default() {
        assert_eq!(parse_toml_string("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_toml_variants() {
        let toml = r#"
[simulation]
norm = "LINFTY"
step = "nearest-neighbor"
walk = "plain"
expected_length = 4096

[run]
mode = "trace"
trace_length = 50

[sweep]
max_exponent = 14
intervals = 3
min_distance = 0.0

[output]
format = "json"
path = "walk.json"
"#;

        let config = parse_toml_string(toml).unwrap();
        assert_eq!(config.simulation.norm, Norm::LInf);
        assert_eq!(config.simulation.step, StepKind::NearestNeighbor);
        assert_eq!(config.simulation.walk, WalkKind::Plain);
        assert_eq!(config.simulation.expected_length, Some(4096));
        assert_eq!(config.run.mode, RunMode::Trace);
        assert_eq!(config.run.trace_length, 50);
        assert_eq!(config.sweep.max_exponent, 14);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.path, Some(PathBuf::from("walk.json")));
    }

    #[test]
    fn test_parse_toml_rejects_bad_norm() {
        assert!(parse_toml_string("[simulation]\nnorm = \"L3\"\n").is_err());
    }

    #[test]
    fn test_parse_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[simulation]\ndimension = 4\n\n[run]\nthreads = 2")
            .unwrap();

        let config = parse_toml_file(file.path()).unwrap();
        assert_eq!(config.simulation.dimension, 4);
        assert_eq!(config.run.threads, 2);
    }

    #[test]
    fn test_parse_toml_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_toml_file(&dir.path().join("missing.toml"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[simulation]\nnorm = \"L1\"\ndimension = 3\n\n[run]\nsamples = 10\nseed = 1"
        )
        .unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let cli = Cli::try_parse_from([
            "lerw", "-c", &path, "-D", "4", "-N", "2k", "--format", "csv",
        ])
        .unwrap();
        let config = load_config(&cli).unwrap();

        // from the file
        assert_eq!(config.simulation.norm, Norm::L1);
        assert_eq!(config.run.seed, 1);
        // from the CLI
        assert_eq!(config.simulation.dimension, 4);
        assert_eq!(config.run.samples, 2000);
        assert_eq!(config.output.format, OutputFormat::Csv);
    }

    #[test]
    fn test_cli_without_file_uses_defaults() {
        let cli = Cli::try_parse_from(["lerw", "--mode", "sweep"]).unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.run.mode, RunMode::Sweep);
        assert_eq!(config.simulation, SimulationConfig::default());
    }

    #[test]
    fn test_cli_bad_count() {
        let cli = Cli::try_parse_from(["lerw", "-N", "lots"]).unwrap();
        assert!(load_config(&cli).is_err());
    }
}
