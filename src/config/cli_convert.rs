//! CLI to Config conversion utilities

use crate::config::cli;
use crate::config::{OutputFormat, RunMode};
use crate::lattice::Norm;
use crate::simulation::{StepKind, WalkKind};
use anyhow::{Context, Result};

/// Parse a count with an optional decimal suffix (e.g. "500", "10k", "2M")
pub fn parse_count(s: &str) -> Result<usize> {
    let s = s.trim().to_lowercase();

    let (num_str, multiplier) = if let Some(n) = s.strip_suffix('k') {
        (n, 1_000usize)
    } else if let Some(n) = s.strip_suffix('m') {
        (n, 1_000_000)
    } else if let Some(n) = s.strip_suffix('g') {
        (n, 1_000_000_000)
    } else {
        (s.as_str(), 1)
    };

    let num: usize = num_str
        .trim()
        .parse()
        .with_context(|| format!("Invalid count format: {}", s))?;

    num.checked_mul(multiplier)
        .with_context(|| format!("Count too large: {}", s))
}

impl From<cli::Mode> for RunMode {
    fn from(mode: cli::Mode) -> Self {
        match mode {
            cli::Mode::Lengths => RunMode::Lengths,
            cli::Mode::Sweep => RunMode::Sweep,
            cli::Mode::Trace => RunMode::Trace,
        }
    }
}

impl From<cli::NormArg> for Norm {
    fn from(norm: cli::NormArg) -> Self {
        match norm {
            cli::NormArg::L1 => Norm::L1,
            cli::NormArg::L2 => Norm::L2,
            cli::NormArg::Linf => Norm::LInf,
        }
    }
}

impl From<cli::StepArg> for StepKind {
    fn from(step: cli::StepArg) -> Self {
        match step {
            cli::StepArg::LongRange => StepKind::LongRange,
            cli::StepArg::NearestNeighbor => StepKind::NearestNeighbor,
        }
    }
}

impl From<cli::WalkArg> for WalkKind {
    fn from(walk: cli::WalkArg) -> Self {
        match walk {
            cli::WalkArg::LoopErased => WalkKind::LoopErased,
            cli::WalkArg::Plain => WalkKind::Plain,
        }
    }
}

impl From<cli::FormatArg> for OutputFormat {
    fn from(format: cli::FormatArg) -> Self {
        match format {
            cli::FormatArg::Text => OutputFormat::Text,
            cli::FormatArg::Csv => OutputFormat::Csv,
            cli::FormatArg::Json => OutputFormat::Json,
        }
    }
}
