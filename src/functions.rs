//! Free functions over scalar whole values.
//!
//! ```rust
//! use whole_value::{abs, to_integer, to_real, to_value};
//!
//! whole_value::arithmetic_type!(pub Real: f64);
//! whole_value::quantity_type!(pub Offset: i32);
//!
//! assert_eq!(abs(Real::new(-2.5)), Real::new(2.5));
//! assert_eq!(to_value(&Offset::new(-4)), -4);
//! assert_eq!(to_integer(&Real::new(7.9)), 7);
//! assert_eq!(to_real(&Offset::new(3)), 3.0);
//! ```

use crate::num::Numeric;
use crate::whole::{Scalar, WholeValue};

/// Absolute value, same type in and out.
#[inline]
pub fn abs<W>(x: W) -> W
where
    W: Scalar,
    W::Raw: Numeric,
{
    W::from_raw(x.to_raw().abs())
}

/// The raw payload.
#[inline(always)]
pub fn to_value<W: WholeValue>(x: &W) -> W::Raw {
    x.to_raw()
}

/// The payload as `i64` (`as` semantics: floats truncate toward zero).
#[inline]
pub fn to_integer<W>(x: &W) -> i64
where
    W: Scalar,
    W::Raw: Numeric,
{
    x.to_raw().to_i64()
}

/// The payload as `f64`.
#[inline]
pub fn to_real<W>(x: &W) -> f64
where
    W: Scalar,
    W::Raw: Numeric,
{
    x.to_raw().to_f64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Arithmetic, Domain, Quantity, Tag, Value};

    enum IntegerTag {}
    enum RealTag {}
    enum YearTag {}

    impl Tag for IntegerTag {
        const NAME: &'static str = "Integer";
    }

    type Integer = Quantity<i32, IntegerTag>;
    type Real = Arithmetic<f64, RealTag>;
    type Year = Domain<Integer, YearTag>;

    #[test]
    fn test_abs() {
        assert_eq!(abs(Integer::new(-7)), Integer::new(7));
        assert_eq!(abs(Integer::new(7)), Integer::new(7));
        assert_eq!(abs(Real::new(-0.25)).value(), 0.25);
        assert_eq!(abs(Year::new(-2012)).value(), 2012);
        assert_eq!(abs(Value::<u8, IntegerTag>::new(200)).value(), 200);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(to_value(&Integer::new(33)), 33);
        assert_eq!(to_integer(&Real::new(-7.9)), -7);
        assert_eq!(to_real(&Integer::new(3)), 3.0);
        assert_eq!(to_integer(&Year::new(2012)), 2012);
    }
}
