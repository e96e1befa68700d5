//! CSV output formatting
//!
//! One header row with column labels, then one row per record. Suitable for
//! pandas, R or a spreadsheet.

use std::io::Write;

use super::Report;
use anyhow::Result;

/// Write `report` as CSV
pub fn write_csv<W: Write + ?Sized>(out: &mut W, report: &Report) -> Result<()> {
    match report {
        Report::Lengths { lengths, .. } => {
            writeln!(out, "walk,length")?;
            for (i, length) in lengths.iter().enumerate() {
                writeln!(out, "{},{}", i, length)?;
            }
        }
        Report::Sweep { points } => {
            writeln!(
                out,
                "distance,mean_length,std_dev,std_error,min,max,samples"
            )?;
            for p in points {
                writeln!(
                    out,
                    "{},{},{},{},{},{},{}",
                    p.distance,
                    p.mean_length,
                    p.summary.std_dev,
                    p.summary.std_error,
                    p.summary.min,
                    p.summary.max,
                    p.summary.count
                )?;
            }
        }
        Report::Trace { points } => {
            let dimension = points.first().map_or(0, Vec::len);
            let axes: Vec<String> = (1..=dimension).map(|i| format!("x{}", i)).collect();
            writeln!(out, "step,{}", axes.join(","))?;
            for (i, point) in points.iter().enumerate() {
                let coords: Vec<String> = point.iter().map(|c| c.to_string()).collect();
                writeln!(out, "{},{}", i, coords.join(","))?;
            }
        }
    }
    Ok(())
}
