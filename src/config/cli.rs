//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Computation to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Lengths of N walks stopped at distance R (default)
    Lengths,
    /// Mean walk length for distances 2^(e-n+1) .. 2^e
    Sweep,
    /// Points of a single walk of fixed length
    Trace,
}

/// Norm for step directions and stopping distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NormArg {
    L1,
    L2,
    #[value(alias = "linfty")]
    Linf,
}

/// Step proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StepArg {
    /// Heavy-tailed length with uniform direction
    LongRange,
    /// Unit step to a lattice neighbour
    NearestNeighbor,
}

/// Loop handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WalkArg {
    /// Erase loops chronologically (LERW)
    LoopErased,
    /// Keep every step
    Plain,
}

/// Result format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Csv,
    Json,
}

/// LERW - loop-erased random walks with long-range steps
#[derive(Parser, Debug)]
#[command(name = "lerw")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Computation to run
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// TOML configuration file; flags given here override its values
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    // === Walk Options ===
    /// Norm (L1, L2 or LINF)
    #[arg(short = 'n', long, value_enum, ignore_case = true)]
    pub norm: Option<NormArg>,

    /// Dimension of the lattice
    #[arg(short = 'D', long)]
    pub dimension: Option<usize>,

    /// Shape parameter of the step length distribution (must be > 0)
    #[arg(short = 'a', long, allow_negative_numbers = true)]
    pub alpha: Option<f64>,

    /// Step proposal
    #[arg(long, value_enum)]
    pub stepper: Option<StepArg>,

    /// Loop handling
    #[arg(long, value_enum)]
    pub walk: Option<WalkArg>,

    /// Expected walk length, used to pre-size buffers
    #[arg(long)]
    pub expected_length: Option<usize>,

    // === Run Options ===
    /// Number of walks (accepts k/M suffixes, e.g. 100k)
    #[arg(short = 'N', long = "number-of-walks")]
    pub number_of_walks: Option<String>,

    /// Distance from the origin at which a walk is stopped
    #[arg(short = 'R', long)]
    pub distance: Option<f64>,

    /// Random number generator seed
    #[arg(short = 's', long)]
    pub seed: Option<u64>,

    /// Worker threads (0 = one per logical CPU)
    #[arg(short = 't', long)]
    pub threads: Option<usize>,

    /// Number of steps of the traced walk (trace mode)
    #[arg(long)]
    pub trace_length: Option<usize>,

    // === Sweep Options ===
    /// Maximum exponent e; distances run up to 2^e (sweep mode)
    #[arg(short = 'e', long)]
    pub max_exponent: Option<u32>,

    /// Number of distance intervals (sweep mode)
    #[arg(long)]
    pub intervals: Option<u32>,

    /// Skip distances below this value (sweep mode)
    #[arg(long)]
    pub min_distance: Option<f64>,

    // === Output Options ===
    /// Path to output file (stdout if not given)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    // === Runtime Options ===
    /// Validate configuration and print it, without running
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["lerw"]).unwrap();
        assert!(cli.mode.is_none());
        assert!(cli.norm.is_none());
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from([
            "lerw", "-n", "L1", "-D", "3", "-N", "10k", "-R", "512", "-a", "1.5", "-s", "7", "-o",
            "out.txt",
        ])
        .unwrap();
        assert_eq!(cli.norm, Some(NormArg::L1));
        assert_eq!(cli.dimension, Some(3));
        assert_eq!(cli.number_of_walks.as_deref(), Some("10k"));
        assert_eq!(cli.distance, Some(512.0));
        assert_eq!(cli.alpha, Some(1.5));
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_norm_names() {
        for (name, expected) in [
            ("linf", NormArg::Linf),
            ("LINF", NormArg::Linf),
            ("linfty", NormArg::Linf),
            ("l2", NormArg::L2),
        ] {
            let cli = Cli::try_parse_from(["lerw", "--norm", name]).unwrap();
            assert_eq!(cli.norm, Some(expected), "{}", name);
        }
        assert!(Cli::try_parse_from(["lerw", "--norm", "l3"]).is_err());
    }

    #[test]
    fn test_sweep_flags() {
        let cli = Cli::try_parse_from([
            "lerw",
            "--mode",
            "sweep",
            "-e",
            "12",
            "--intervals",
            "4",
            "--min-distance",
            "0",
            "--format",
            "csv",
        ])
        .unwrap();
        assert_eq!(cli.mode, Some(Mode::Sweep));
        assert_eq!(cli.max_exponent, Some(12));
        assert_eq!(cli.intervals, Some(4));
        assert_eq!(cli.min_distance, Some(0.0));
        assert_eq!(cli.format, Some(FormatArg::Csv));
    }

    #[test]
    fn test_walk_variants() {
        let cli = Cli::try_parse_from([
            "lerw",
            "--stepper",
            "nearest-neighbor",
            "--walk",
            "plain",
        ])
        .unwrap();
        assert_eq!(cli.stepper, Some(StepArg::NearestNeighbor));
        assert_eq!(cli.walk, Some(WalkArg::Plain));
    }
}
