//! JSON output
//!
//! A single document holding the run parameters, a generation timestamp,
//! summary statistics and the data itself.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Report, SweepPoint};
use crate::config::Config;
use crate::stats::Summary;
use anyhow::Result;

/// Top-level JSON document
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub lerw_version: &'static str,
    pub generated_at: DateTime<Utc>,
    pub parameters: &'a Config,
    #[serde(flatten)]
    pub data: JsonData<'a>,
}

/// Mode-specific payload
#[derive(Debug, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum JsonData<'a> {
    Lengths {
        summary: &'a Summary,
        lengths: &'a [usize],
    },
    Sweep {
        points: &'a [SweepPoint],
    },
    Trace {
        points: &'a [Vec<i64>],
    },
}

impl<'a> JsonReport<'a> {
    pub fn new(config: &'a Config, report: &'a Report) -> Self {
        let data = match report {
            Report::Lengths { lengths, summary } => JsonData::Lengths { summary, lengths },
            Report::Sweep { points } => JsonData::Sweep { points },
            Report::Trace { points } => JsonData::Trace { points },
        };
        Self {
            lerw_version: env!("CARGO_PKG_VERSION"),
            generated_at: Utc::now(),
            parameters: config,
            data,
        }
    }
}

/// Write `report` as pretty-printed JSON
pub fn write_json<W: Write + ?Sized>(
    out: &mut W,
    config: &Config,
    report: &Report,
) -> Result<()> {
    let document = JsonReport::new(config, report);
    serde_json::to_writer_pretty(&mut *out, &document)?;
    writeln!(out)?;
    Ok(())
}
