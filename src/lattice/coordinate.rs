//! Signed integer field types usable as lattice coordinates

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Add;

/// Signed integer type that can hold one lattice coordinate
///
/// Implemented for `i8`, `i16`, `i32` and `i64`. Conversions go through
/// `i64`, which every implementor fits into.
pub trait Coordinate:
    Copy + Eq + Hash + Debug + Add<Output = Self> + Send + Sync + 'static
{
    const ZERO: Self;

    /// Largest representable value, widened
    const MAX: i64;

    const BITS: u32;

    fn to_i64(self) -> i64;

    /// Narrowing conversion, `None` if `value` is out of range
    fn from_i64(value: i64) -> Option<Self>;

    fn checked_add(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_coordinate {
    ($($t:ty),*) => {
        $(
            impl Coordinate for $t {
                const ZERO: Self = 0;
                const MAX: i64 = <$t>::MAX as i64;
                const BITS: u32 = <$t>::BITS;

                #[inline(always)]
                fn to_i64(self) -> i64 {
                    self as i64
                }

                #[inline(always)]
                fn from_i64(value: i64) -> Option<Self> {
                    <$t>::try_from(value).ok()
                }

                #[inline(always)]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
            }
        )*
    };
}

impl_coordinate!(i8, i16, i32, i64);
