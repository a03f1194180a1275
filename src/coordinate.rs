//! Coordinate types accepted by the tree.
//!
//! A coordinate only needs ordering plus two operations used while building:
//! the floor of the midpoint of two values (the split key between two x
//! values) and the zero value used as the median of single-point subtrees.

use std::fmt::Debug;

/// Numeric coordinate stored in a [`Point`](crate::Point).
///
/// Implemented for `i32`, `i64`, `u32`, `u64`, `f32` and `f64`. Float
/// coordinates must be finite: NaN has no order and the midpoint of two
/// opposite infinities is NaN, so the builder rejects both.
pub trait Coordinate: Copy + PartialOrd + Debug {
    /// Median sentinel for nodes whose subtree holds a single point.
    const ZERO: Self;

    /// `floor((a + b) / 2)` without intermediate overflow.
    #[must_use]
    fn floor_midpoint(a: Self, b: Self) -> Self;

    /// Whether the value is usable as a coordinate (neither NaN nor infinite).
    fn is_finite(self) -> bool;
}

macro_rules! int_coordinate {
    ($($t:ty),*) => {$(
        impl Coordinate for $t {
            const ZERO: Self = 0;

            #[inline]
            fn floor_midpoint(a: Self, b: Self) -> Self {
                // Arithmetic shift floors for negative values too.
                (a >> 1) + (b >> 1) + (a & b & 1)
            }

            #[inline]
            fn is_finite(self) -> bool {
                true
            }
        }
    )*};
}

macro_rules! float_coordinate {
    ($($t:ty),*) => {$(
        impl Coordinate for $t {
            const ZERO: Self = 0.0;

            #[inline]
            fn floor_midpoint(a: Self, b: Self) -> Self {
                (a * 0.5 + b * 0.5).floor()
            }

            #[inline]
            fn is_finite(self) -> bool {
                <$t>::is_finite(self)
            }
        }
    )*};
}

int_coordinate!(i32, i64, u32, u64);
float_coordinate!(f32, f64);

#[cfg(test)]
mod tests {
    use super::Coordinate;

    #[test]
    fn test_int_midpoint_floors() {
        assert_eq!(i32::floor_midpoint(3, 4), 3, "3.5 floors to 3");
        assert_eq!(i32::floor_midpoint(3, 5), 4, "exact midpoint");
        assert_eq!(i32::floor_midpoint(-3, -4), -4, "-3.5 floors to -4");
        assert_eq!(i32::floor_midpoint(-1, 0), -1, "-0.5 floors to -1");
        assert_eq!(i32::floor_midpoint(-1, -1), -1, "equal values");
        assert_eq!(u32::floor_midpoint(7, 8), 7, "unsigned floors");
    }

    #[test]
    fn test_int_midpoint_no_overflow() {
        assert_eq!(i32::floor_midpoint(i32::MAX, i32::MAX), i32::MAX, "max stays max");
        assert_eq!(i32::floor_midpoint(i32::MIN, i32::MIN), i32::MIN, "min stays min");
        assert_eq!(i64::floor_midpoint(i64::MAX, i64::MAX - 1), i64::MAX - 1, "floors near max");
        assert_eq!(u64::floor_midpoint(u64::MAX, u64::MAX), u64::MAX, "unsigned max");
    }

    #[test]
    fn test_float_midpoint_floors() {
        assert_eq!(f64::floor_midpoint(35.0, 50.0), 42.0, "42.5 floors to 42");
        assert_eq!(f64::floor_midpoint(0.2, 0.4), 0.0, "fractional values floor to 0");
        assert_eq!(f64::floor_midpoint(-0.5, -1.0), -1.0, "negative floats floor down");
        assert_eq!(f32::floor_midpoint(1.0, 4.0), 2.0, "f32 supported");
        assert!(f64::floor_midpoint(f64::MAX, f64::MAX).is_finite(), "no overflow to infinity");
    }

    #[test]
    fn test_finite_coordinates() {
        assert!(Coordinate::is_finite(i32::MIN), "integers are always finite");
        assert!(Coordinate::is_finite(u64::MAX), "integers are always finite");
        assert!(Coordinate::is_finite(-0.0_f64), "signed zero is finite");
        assert!(!Coordinate::is_finite(f64::INFINITY), "+inf rejected");
        assert!(!Coordinate::is_finite(f32::NEG_INFINITY), "-inf rejected");
        assert!(!Coordinate::is_finite(f64::NAN), "NaN rejected");
        assert!(
            f64::floor_midpoint(f64::NEG_INFINITY, f64::INFINITY).is_nan(),
            "opposite infinities have no midpoint"
        );
    }
}
