//! Result output
//!
//! The simulation core returns plain numeric data; this module turns a
//! [`Report`] into text, CSV or JSON and writes it to a file or stdout.

pub mod csv;
pub mod json;
pub mod text;

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::config::{Config, OutputFormat};
use crate::stats::Summary;

/// Mean walk length at one stopping distance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepPoint {
    pub distance: f64,
    pub mean_length: f64,
    pub summary: Summary,
}

/// Data produced by one run
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// Number of points of each walk, in sample order
    Lengths {
        lengths: Vec<usize>,
        summary: Summary,
    },
    /// `(distance, mean length)` pairs in ladder order
    Sweep { points: Vec<SweepPoint> },
    /// Coordinates of every point of one walk
    Trace { points: Vec<Vec<i64>> },
}

impl Report {
    /// Number of data rows the report will produce
    pub fn rows(&self) -> usize {
        match self {
            Report::Lengths { lengths, .. } => lengths.len(),
            Report::Sweep { points } => points.len(),
            Report::Trace { points } => points.len(),
        }
    }
}

/// Open the configured destination: a file if `path` is set, stdout otherwise
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Could not open output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Write `report` in the configured format
pub fn write_report<W: Write + ?Sized>(
    out: &mut W,
    config: &Config,
    report: &Report,
) -> Result<()> {
    match config.output.format {
        OutputFormat::Text => text::write_text(out, config, report)?,
        OutputFormat::Csv => csv::write_csv(out, report)?,
        OutputFormat::Json => json::write_json(out, config, report)?,
    }
    out.flush().context("Failed to flush output")?;
    Ok(())
}
