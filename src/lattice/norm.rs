//! Norms on the integer lattice
//!
//! Magnitudes are reported as `f64`. L1 is accumulated in `i128` so it stays
//! exact for any `i64` coordinates; L2 is kept squared wherever a comparison
//! is all that's needed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::LatticePoint;

/// Norm used to measure step radii and stopping distances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Norm {
    /// Sum of absolute coordinates (diamond)
    L1,
    /// Euclidean norm (sphere)
    L2,
    /// Maximum absolute coordinate (cube)
    #[serde(rename = "LINF", alias = "LINFTY")]
    LInf,
}

impl Norm {
    pub const ALL: [Norm; 3] = [Norm::L1, Norm::L2, Norm::LInf];

    pub fn name(&self) -> &'static str {
        match self {
            Norm::L1 => "L1",
            Norm::L2 => "L2",
            Norm::LInf => "LINF",
        }
    }
}

impl fmt::Display for Norm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Norm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "L1" => Ok(Norm::L1),
            "L2" => Ok(Norm::L2),
            "LINF" | "LINFTY" => Ok(Norm::LInf),
            other => Err(format!(
                "Invalid norm type '{}'. Must be L1, L2, or LINF",
                other
            )),
        }
    }
}

/// Magnitude of `point` under `kind`
///
/// L2 is the true Euclidean length here; use [`LatticePoint::l2_squared`]
/// to skip the square root.
pub fn norm<P: LatticePoint>(kind: Norm, point: &P) -> f64 {
    point.norm(kind)
}

pub(crate) fn l1_of(coords: impl Iterator<Item = i64>) -> f64 {
    coords.map(|c| c.unsigned_abs() as i128).sum::<i128>() as f64
}

pub(crate) fn l2_squared_of(coords: impl Iterator<Item = i64>) -> f64 {
    coords
        .map(|c| {
            let c = c as f64;
            c * c
        })
        .sum()
}

pub(crate) fn linf_of(coords: impl Iterator<Item = i64>) -> f64 {
    coords.map(i64::unsigned_abs).max().unwrap_or(0) as f64
}
