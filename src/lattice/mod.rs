//! Integer lattice points
//!
//! This module provides the value type every walk is made of: a point of the
//! d-dimensional integer lattice with a configurable coordinate width.
//!
//! # Design
//!
//! - **Static dimension**: `Point<D, T>` stores `[T; D]`, so points are `Copy`,
//!   hash structurally and never allocate
//! - **Coordinate width**: `T` is any [`Coordinate`] (`i8`, `i16`, `i32`, `i64`);
//!   the runtime pipeline uses `i64`
//! - **Checked arithmetic**: walks advance through [`LatticePoint::checked_add`]
//!   so an overflowing step becomes an error instead of a wrapped coordinate
//!
//! Generators and samplers are written against the [`LatticePoint`] trait
//! rather than the concrete type.
//!
//! # Example
//!
//! ```
//! use lerw::lattice::{LatticePoint, Norm, Point};
//!
//! let a = Point::<2>::new([3, 0]);
//! let b = Point::<2>::new([0, -4]);
//! let c = a.checked_add(&b).unwrap();
//! assert_eq!(c.norm(Norm::L2), 5.0);
//! assert_eq!(c.norm(Norm::L1), 7.0);
//! ```

pub mod coordinate;
pub mod norm;

pub use coordinate::Coordinate;
pub use norm::{norm, Norm};

use crate::error::{Error, Result};
use std::fmt;
use std::hash::Hash;
use std::ops::Add;

/// Capabilities walks need from a lattice point
pub trait LatticePoint: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Number of coordinates
    const DIM: usize;

    /// Largest coordinate magnitude the field width can hold
    const MAX_COORDINATE: i64;

    /// The origin; every walk starts here
    fn zero() -> Self;

    /// Build a point from `i64` coordinates
    ///
    /// Fails with [`Error::Construction`] if `coords.len() != DIM` and with
    /// [`Error::Overflow`] if a coordinate does not fit the field width.
    fn from_coordinates(coords: &[i64]) -> Result<Self>;

    /// Coordinate-wise sum, `None` on overflow
    fn checked_add(&self, other: &Self) -> Option<Self>;

    /// Coordinates widened to `i64`
    fn coordinates(&self) -> Vec<i64>;

    /// Magnitude under `kind` (true Euclidean length for L2)
    fn norm(&self, kind: Norm) -> f64;

    /// Squared Euclidean length
    fn l2_squared(&self) -> f64;
}

/// A point of the `D`-dimensional integer lattice
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point<const D: usize, T: Coordinate = i64> {
    coords: [T; D],
}

impl<const D: usize, T: Coordinate> Point<D, T> {
    pub fn new(coords: [T; D]) -> Self {
        Self { coords }
    }

    /// Build a point from a coordinate buffer of length `D`
    pub fn from_slice(coords: &[T]) -> Result<Self> {
        let coords = <[T; D]>::try_from(coords).map_err(|_| Error::Construction {
            dimension: D,
            got: coords.len(),
        })?;
        Ok(Self { coords })
    }

    pub fn coords(&self) -> &[T; D] {
        &self.coords
    }

    fn widened(&self) -> impl Iterator<Item = i64> + '_ {
        self.coords.iter().map(|c| c.to_i64())
    }
}

impl<const D: usize, T: Coordinate> LatticePoint for Point<D, T> {
    const DIM: usize = D;
    const MAX_COORDINATE: i64 = T::MAX;

    fn zero() -> Self {
        Self {
            coords: [T::ZERO; D],
        }
    }

    fn from_coordinates(coords: &[i64]) -> Result<Self> {
        if coords.len() != D {
            return Err(Error::Construction {
                dimension: D,
                got: coords.len(),
            });
        }
        let mut out = [T::ZERO; D];
        for (slot, &value) in out.iter_mut().zip(coords) {
            *slot = T::from_i64(value).ok_or_else(|| {
                Error::overflow(format!(
                    "coordinate {} exceeds {}-bit field",
                    value,
                    T::BITS
                ))
            })?;
        }
        Ok(Self { coords: out })
    }

    #[inline]
    fn checked_add(&self, other: &Self) -> Option<Self> {
        let mut out = self.coords;
        for (slot, &rhs) in out.iter_mut().zip(other.coords.iter()) {
            *slot = Coordinate::checked_add(*slot, rhs)?;
        }
        Some(Self { coords: out })
    }

    fn coordinates(&self) -> Vec<i64> {
        self.widened().collect()
    }

    fn norm(&self, kind: Norm) -> f64 {
        match kind {
            Norm::L1 => norm::l1_of(self.widened()),
            Norm::L2 => norm::l2_squared_of(self.widened()).sqrt(),
            Norm::LInf => norm::linf_of(self.widened()),
        }
    }

    #[inline]
    fn l2_squared(&self) -> f64 {
        norm::l2_squared_of(self.widened())
    }
}

impl<const D: usize, T: Coordinate> Add for Point<D, T> {
    type Output = Self;

    /// Plain coordinate-wise addition; overflow behaves like the underlying
    /// integer `+`. Walk generation uses [`LatticePoint::checked_add`].
    fn add(self, rhs: Self) -> Self {
        let mut out = self.coords;
        for (slot, &r) in out.iter_mut().zip(rhs.coords.iter()) {
            *slot = *slot + r;
        }
        Self { coords: out }
    }
}

impl<const D: usize, T: Coordinate> fmt::Debug for Point<D, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point{:?}", self.coords)
    }
}

impl<const D: usize, T: Coordinate> fmt::Display for Point<D, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", c.to_i64())?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_zero_is_origin() {
        let z = Point::<3>::zero();
        assert_eq!(z.coords(), &[0, 0, 0]);
        assert_eq!(Point::<3>::DIM, 3);
    }

    #[test]
    fn test_addition() {
        let a = Point::<3, i32>::new([1, 2, 3]);
        let b = Point::<3, i32>::new([-1, 5, 0]);
        assert_eq!(a + b, Point::new([0, 7, 3]));
        assert_eq!(a.checked_add(&b), Some(Point::new([0, 7, 3])));
        assert_eq!(a + Point::zero(), a);
    }

    #[test]
    fn test_checked_add_overflow() {
        let a = Point::<2, i32>::new([i32::MAX, 0]);
        let b = Point::<2, i32>::new([1, 0]);
        assert_eq!(a.checked_add(&b), None);
    }

    #[test]
    fn test_structural_equality_and_hash() {
        let mut set = HashSet::new();
        assert!(set.insert(Point::<2>::new([1, 2])));
        assert!(!set.insert(Point::<2>::new([1, 2])));
        assert!(set.insert(Point::<2>::new([2, 1])));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_from_slice_wrong_length() {
        let err = Point::<3, i32>::from_slice(&[1, 2]).unwrap_err();
        assert!(matches!(err, Error::Construction { dimension: 3, got: 2 }));
        assert!(Point::<3, i32>::from_slice(&[1, 2, 3]).is_ok());
    }

    #[test]
    fn test_from_coordinates() {
        let p = Point::<2, i16>::from_coordinates(&[-7, 9]).unwrap();
        assert_eq!(p.coordinates(), vec![-7, 9]);

        let err = Point::<2, i16>::from_coordinates(&[1]).unwrap_err();
        assert!(matches!(err, Error::Construction { .. }));

        let err = Point::<2, i16>::from_coordinates(&[1 << 20, 0])
            .unwrap_err();
        assert!(matches!(err, Error::Overflow(_)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::<3>::new([1, -2, 0]).to_string(), "(1, -2, 0)");
    }
}
