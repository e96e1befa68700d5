//! Halting predicates over the walk so far

use serde::{Deserialize, Serialize};

use crate::lattice::{LatticePoint, Norm};

/// Decides whether a walk is complete
///
/// Stoppers are pure: they look at the walk and nothing else.
pub trait Stopper<P>: Send + Sync {
    fn should_stop(&self, walk: &[P]) -> bool;
}

/// Stop once the walk holds more than `n` points (`n` steps taken)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthStopper(pub usize);

impl<P> Stopper<P> for LengthStopper {
    #[inline]
    fn should_stop(&self, walk: &[P]) -> bool {
        walk.len() > self.0
    }
}

/// Stop once the last point lies strictly beyond `distance` under `norm`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceStopper {
    norm: Norm,
    distance: f64,

    /// `distance^2`, so L2 checks avoid a square root
    distance_squared: f64,
}

impl DistanceStopper {
    pub fn new(norm: Norm, distance: f64) -> Self {
        Self {
            norm,
            distance,
            distance_squared: distance * distance,
        }
    }

    pub fn norm(&self) -> Norm {
        self.norm
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }
}

impl<P: LatticePoint> Stopper<P> for DistanceStopper {
    #[inline]
    fn should_stop(&self, walk: &[P]) -> bool {
        let Some(last) = walk.last() else {
            return false;
        };
        match self.norm {
            Norm::L2 => last.l2_squared() > self.distance_squared,
            kind => last.norm(kind) > self.distance,
        }
    }
}

/// Stopping rule selected at run time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StopCondition {
    /// Fixed number of accepted steps
    Length { steps: usize },

    /// First exit from the norm ball
    Distance { norm: Norm, distance: f64 },
}

impl StopCondition {
    pub fn into_stopper(self) -> AnyStopper {
        match self {
            StopCondition::Length { steps } => AnyStopper::Length(LengthStopper(steps)),
            StopCondition::Distance { norm, distance } => {
                AnyStopper::Distance(DistanceStopper::new(norm, distance))
            }
        }
    }
}

/// Either stopper behind one concrete type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyStopper {
    Length(LengthStopper),
    Distance(DistanceStopper),
}

impl<P: LatticePoint> Stopper<P> for AnyStopper {
    #[inline]
    fn should_stop(&self, walk: &[P]) -> bool {
        match self {
            AnyStopper::Length(s) => Stopper::<P>::should_stop(s, walk),
            AnyStopper::Distance(s) => s.should_stop(walk),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::Point;

    #[test]
    fn test_length_stopper() {
        let walk = vec![Point::<2>::zero(); 3];
        assert!(!LengthStopper(3).should_stop(&walk));
        assert!(LengthStopper(2).should_stop(&walk));
        assert!(LengthStopper(0).should_stop(&walk[..1]));
    }

    #[test]
    fn test_distance_stopper_is_strict() {
        let walk = vec![Point::<2>::zero(), Point::new([3, 4])];
        assert!(!DistanceStopper::new(Norm::L2, 5.0).should_stop(&walk));
        assert!(DistanceStopper::new(Norm::L2, 4.9).should_stop(&walk));
        assert!(!DistanceStopper::new(Norm::L1, 7.0).should_stop(&walk));
        assert!(DistanceStopper::new(Norm::L1, 6.0).should_stop(&walk));
        assert!(!DistanceStopper::new(Norm::LInf, 4.0).should_stop(&walk));
        assert!(DistanceStopper::new(Norm::LInf, 3.0).should_stop(&walk));
    }

    #[test]
    fn test_distance_stopper_only_reads_last_point() {
        let walk = vec![Point::<1>::zero(), Point::new([100]), Point::new([1])];
        assert!(!DistanceStopper::new(Norm::L1, 10.0).should_stop(&walk));
    }

    #[test]
    fn test_stop_condition_dispatch() {
        let walk = vec![Point::<2>::zero(), Point::new([2, 0])];
        let by_length = StopCondition::Length { steps: 1 }.into_stopper();
        let by_distance = StopCondition::Distance {
            norm: Norm::L2,
            distance: 5.0,
        }
        .into_stopper();
        assert!(by_length.should_stop(&walk));
        assert!(!Stopper::<Point<2>>::should_stop(&by_distance, &walk));
    }

    #[test]
    fn test_stop_condition_serde() {
        let condition = StopCondition::Distance {
            norm: Norm::LInf,
            distance: 64.0,
        };
        let json = serde_json::to_string(&condition).unwrap();
        assert_eq!(json, r#"{"kind":"distance","norm":"LINF","distance":64.0}"#);
        let back: StopCondition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, condition);
    }
}
