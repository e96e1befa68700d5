//! Plain text output
//!
//! A `#`-prefixed parameter header followed by one record per line: a walk
//! length, a `distance, mean_length` pair or the comma-separated coordinates
//! of a point.

use std::io::Write;

use super::Report;
use crate::config::Config;
use anyhow::Result;

/// Write `report` as header plus one line per record
pub fn write_text<W: Write + ?Sized>(
    out: &mut W,
    config: &Config,
    report: &Report,
) -> Result<()> {
    writeln!(out, "{}", config.header())?;

    match report {
        Report::Lengths { lengths, .. } => {
            for length in lengths {
                writeln!(out, "{}", length)?;
            }
        }
        Report::Sweep { points } => {
            for point in points {
                writeln!(out, "{}, {}", point.distance, point.mean_length)?;
            }
        }
        Report::Trace { points } => {
            for point in points {
                writeln!(out, "{}", join_coordinates(point))?;
            }
        }
    }
    Ok(())
}

pub(crate) fn join_coordinates(point: &[i64]) -> String {
    point
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunMode;
    use crate::output::testing::*;

    fn render(config: &Config, report: &Report) -> String {
        let mut buf = Vec::new();
        write_text(&mut buf, config, report).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_sweep_pairs() {
        let mut config = Config::default();
        config.run.mode = RunMode::Sweep;
        let text = render(&config, &sweep_report());
        let lines: Vec<_> = text.lines().collect();
        assert!(lines[0].starts_with("# D=2, e=11, intervals=8"));
        assert_eq!(&lines[1..], &["512, 10.5", "1024, 12"]);
    }

    #[test]
    fn test_trace_points() {
        let mut config = Config::default();
        config.run.mode = RunMode::Trace;
        let text = render(&config, &trace_report());
        assert_eq!(
            text,
            "# D=2, L=1000, α=0.5, Norm=L2, seed=42\n0, 0\n3, -1\n2, 7\n"
        );
    }
}
