//! Numeric payload support.
//!
//! - `Numeric`: unit step, absolute value and the widening conversions used
//!   by `to_integer` / `to_real`.
//! - `CastTo<U>`: `as` conversion between primitives, behind `cast::<U>()`.

use core::ops::{Add, Sub};

/// A primitive integer or floating-point payload.
pub trait Numeric: Copy + PartialOrd + Add<Output = Self> + Sub<Output = Self> {
    const ZERO: Self;
    const ONE: Self;

    /// Absolute value; identity for unsigned types.
    ///
    /// Signed integer overflow (`MIN.abs()`) behaves as for the primitive.
    fn abs(self) -> Self;

    /// `self as i64`.
    fn to_i64(self) -> i64;

    /// `self as f64`.
    fn to_f64(self) -> f64;
}

macro_rules! numeric_signed {
    ($($t:ident)*) => {$(
        impl Numeric for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline(always)]
            fn abs(self) -> Self {
                let zero = <Self as Numeric>::ZERO;
                if self < zero { zero - self } else { self }
            }

            #[inline(always)]
            fn to_i64(self) -> i64 {
                self as i64
            }

            #[inline(always)]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

macro_rules! numeric_unsigned {
    ($($t:ident)*) => {$(
        impl Numeric for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline(always)]
            fn abs(self) -> Self {
                self
            }

            #[inline(always)]
            fn to_i64(self) -> i64 {
                self as i64
            }

            #[inline(always)]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

// Clearing the sign bit keeps `abs` available without std.
macro_rules! numeric_float {
    ($($t:ty, $sign:expr);*) => {$(
        impl Numeric for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline(always)]
            fn abs(self) -> Self {
                <$t>::from_bits(self.to_bits() & !$sign)
            }

            #[inline(always)]
            fn to_i64(self) -> i64 {
                self as i64
            }

            #[inline(always)]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

numeric_signed!(i8 i16 i32 i64 i128 isize);
numeric_unsigned!(u8 u16 u32 u64 u128 usize);
numeric_float!(f32, 1u32 << 31; f64, 1u64 << 63);

/// Explicit `as` conversion to `U`.
pub trait CastTo<U>: Copy {
    fn cast_to(self) -> U;
}

macro_rules! cast_impls {
    (@from $src:ident => $($dst:ident)*) => {$(
        impl CastTo<$dst> for $src {
            #[inline(always)]
            fn cast_to(self) -> $dst {
                self as $dst
            }
        }
    )*};
    ($($src:ident)*) => {$(
        cast_impls!(@from $src => i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize f32 f64);
    )*};
}

cast_impls!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize f32 f64);
cast_impls!(@from bool => i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);
cast_impls!(@from bool => bool);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abs() {
        assert_eq!(Numeric::abs(-12i32), 12);
        assert_eq!(Numeric::abs(12u8), 12);
        assert_eq!(Numeric::abs(-1.23f64), 1.23);
        assert_eq!(Numeric::abs(-0.5f32), 0.5);
        assert!(Numeric::abs(-0.0f64).is_sign_positive());
        assert_eq!(Numeric::abs(-127i8), 127);
        assert_eq!(Numeric::abs(0i64), <i64 as Numeric>::ZERO);
        assert_eq!(Numeric::abs(-1isize), <isize as Numeric>::ONE);
    }

    #[test]
    fn test_widening() {
        assert_eq!((-12i8).to_i64(), -12);
        assert_eq!(7u64.to_f64(), 7.0);
        assert_eq!(1.99f64.to_i64(), 1);
    }

    #[test]
    fn test_cast() {
        let c: u8 = CastTo::<u8>::cast_to(97i32);
        assert_eq!(c, b'a');
        let t: i32 = CastTo::<i32>::cast_to(true);
        assert_eq!(t, 1);
        let truncated: i16 = CastTo::<i16>::cast_to(70000i32);
        assert_eq!(truncated, 70000i32 as i16);
    }
}
