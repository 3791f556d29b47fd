//! Domain subtypes.
//!
//! `Domain<B, D>` puts a second tag `D` over an existing whole value type `B`.
//! It adds no state and exposes every operator `B` exposes, but two domains
//! built on the same base are unrelated: the only way from one to the other is
//! through the base.
//!
//! Construction paths:
//!
//! | From | How |
//! |------|-----|
//! | nothing | `Default` |
//! | the base | `From<B>`, `from_base` |
//! | a raw value | `new` (explicit only) |
//!
//! ```rust
//! whole_value::quantity_type!(pub Integer: i32);
//! whole_value::domain_type!(pub Year: Integer);
//! whole_value::domain_type!(pub Day: Integer);
//!
//! let year = Year::new(2012);
//! let next = year + Year::from(Integer::new(1));
//! assert_eq!(next.value(), 2013);
//!
//! // Going through the shared base is the only path between siblings.
//! let day = Day::from(year.into_base());
//! assert_eq!(day.value(), 2012);
//! ```
//!
//! ```compile_fail
//! whole_value::quantity_type!(pub Integer: i32);
//! whole_value::domain_type!(pub Year: Integer);
//! whole_value::domain_type!(pub Day: Integer);
//!
//! let day: Day = Day::from(Year::new(2012));
//! ```
//!
//! ```compile_fail
//! whole_value::quantity_type!(pub Integer: i32);
//! whole_value::domain_type!(pub Year: Integer);
//! whole_value::domain_type!(pub Day: Integer);
//!
//! let mixed = Year::new(2012) + Day::new(21);
//! ```

use core::marker::PhantomData;

use crate::num::CastTo;
use crate::safe_bool::AsBool;
use crate::tag::Tag;
use crate::whole::{Scalar, Step, WholeValue};

/// A whole value type `B` re-tagged with the domain `D`.
#[repr(transparent)]
pub struct Domain<B, D> {
    base: B,
    _domain: PhantomData<fn() -> D>,
}

impl<B, D> Domain<B, D> {
    /// Copies `base` into the domain.
    #[inline(always)]
    pub const fn from_base(base: B) -> Self {
        Self {
            base,
            _domain: PhantomData,
        }
    }

    /// The value as its base type.
    #[inline(always)]
    pub const fn base(&self) -> &B {
        &self.base
    }

    /// Leaves the domain, returning the base value.
    #[inline(always)]
    pub fn into_base(self) -> B {
        self.base
    }

    /// Exchanges the values of `self` and `other`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.base, &mut other.base);
    }
}

impl<B: WholeValue, D> Domain<B, D> {
    /// Explicit construction from a raw value.
    #[inline(always)]
    pub fn new(raw: B::Raw) -> Self {
        Self::from_base(B::from_raw(raw))
    }

    /// Returns the underlying value.
    #[inline(always)]
    pub fn value(&self) -> B::Raw {
        self.base.to_raw()
    }

    /// Converts the underlying value to `U` with `as` semantics.
    #[inline(always)]
    pub fn cast<U>(&self) -> U
    where
        B::Raw: CastTo<U>,
    {
        self.base.to_raw().cast_to()
    }
}

impl<B: Clone, D> Clone for Domain<B, D> {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self::from_base(self.base.clone())
    }
}

impl<B: Copy, D> Copy for Domain<B, D> {}

impl<B: Default, D> Default for Domain<B, D> {
    #[inline(always)]
    fn default() -> Self {
        Self::from_base(B::default())
    }
}

impl<B, D> From<B> for Domain<B, D> {
    #[inline(always)]
    fn from(base: B) -> Self {
        Self::from_base(base)
    }
}

impl<B, D: Tag> core::fmt::Debug for Domain<B, D>
where
    B: WholeValue,
    B::Raw: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple(D::NAME).field(&self.base.to_raw()).finish()
    }
}

// Rendering is installed on the base type and shared by its domains.
impl<B: core::fmt::Display, D> core::fmt::Display for Domain<B, D> {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.base, f)
    }
}

// =============================================================================
// Forwarding to the Base
// =============================================================================

impl<B: WholeValue, D> WholeValue for Domain<B, D> {
    type Raw = B::Raw;

    #[inline(always)]
    fn from_raw(raw: B::Raw) -> Self {
        Self::new(raw)
    }

    #[inline(always)]
    fn to_raw(&self) -> B::Raw {
        self.base.to_raw()
    }
}

impl<B: Scalar, D> Scalar for Domain<B, D> {}

impl<B: Step, D> Step for Domain<B, D> {
    #[inline(always)]
    fn increment(&mut self) -> &mut Self {
        self.base.increment();
        self
    }

    #[inline(always)]
    fn decrement(&mut self) -> &mut Self {
        self.base.decrement();
        self
    }
}

impl<B: AsBool, D> AsBool for Domain<B, D> {
    #[inline(always)]
    fn as_bool(&self) -> bool {
        self.base.as_bool()
    }
}

impl<B: AsBool, D> From<Domain<B, D>> for bool {
    #[inline(always)]
    fn from(value: Domain<B, D>) -> Self {
        value.base.as_bool()
    }
}

impl<B: PartialEq, D> PartialEq for Domain<B, D> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl<B: Eq, D> Eq for Domain<B, D> {}

impl<B: PartialOrd, D> PartialOrd for Domain<B, D> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.base.partial_cmp(&other.base)
    }
}

impl<B: Ord, D> Ord for Domain<B, D> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.base.cmp(&other.base)
    }
}

impl<B: core::hash::Hash, D> core::hash::Hash for Domain<B, D> {
    #[inline]
    fn hash<S: core::hash::Hasher>(&self, state: &mut S) {
        core::hash::Hash::hash(&self.base, state);
    }
}

impl<B: core::ops::Neg<Output = B>, D> core::ops::Neg for Domain<B, D> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self::from_base(-self.base)
    }
}

/// `domain op= domain` and `domain op domain`, present when the base has them.
macro_rules! domain_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<B: core::ops::$OpAssign, D> core::ops::$OpAssign for Domain<B, D> {
            #[inline(always)]
            fn $op_assign(&mut self, rhs: Self) {
                core::ops::$OpAssign::$op_assign(&mut self.base, rhs.base);
            }
        }

        impl<B, D> core::ops::$Op for Domain<B, D>
        where
            Self: core::ops::$OpAssign,
        {
            type Output = Self;

            #[inline(always)]
            fn $op(mut self, rhs: Self) -> Self {
                core::ops::$OpAssign::$op_assign(&mut self, rhs);
                self
            }
        }
    };
}

/// Shift by a raw `u32` count, present when the base shifts.
macro_rules! domain_shift {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<B: core::ops::$OpAssign<u32>, D> core::ops::$OpAssign<u32> for Domain<B, D> {
            #[inline(always)]
            fn $op_assign(&mut self, count: u32) {
                core::ops::$OpAssign::$op_assign(&mut self.base, count);
            }
        }

        impl<B, D> core::ops::$Op<u32> for Domain<B, D>
        where
            Self: core::ops::$OpAssign<u32>,
        {
            type Output = Self;

            #[inline(always)]
            fn $op(mut self, count: u32) -> Self {
                core::ops::$OpAssign::$op_assign(&mut self, count);
                self
            }
        }
    };
}

/// Raw operands on either side, present when the base accepts them.
macro_rules! domain_raw_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident; $($raw:ident)*) => {$(
        impl<B: core::ops::$OpAssign<$raw>, D> core::ops::$OpAssign<$raw> for Domain<B, D> {
            #[inline(always)]
            fn $op_assign(&mut self, rhs: $raw) {
                core::ops::$OpAssign::$op_assign(&mut self.base, rhs);
            }
        }

        impl<B, D> core::ops::$Op<$raw> for Domain<B, D>
        where
            Self: core::ops::$OpAssign<$raw>,
        {
            type Output = Self;

            #[inline(always)]
            fn $op(mut self, rhs: $raw) -> Self {
                core::ops::$OpAssign::$op_assign(&mut self, rhs);
                self
            }
        }

        impl<B, D> core::ops::$Op<Domain<B, D>> for $raw
        where
            $raw: core::ops::$Op<B, Output = B>,
        {
            type Output = Domain<B, D>;

            #[inline(always)]
            fn $op(self, rhs: Domain<B, D>) -> Domain<B, D> {
                Domain::from_base(<$raw as core::ops::$Op<B>>::$op(self, rhs.base))
            }
        }
    )*};
}

/// Raw comparisons on either side, present when the base has them.
macro_rules! domain_raw_cmp {
    (; $($raw:ident)*) => {$(
        impl<B: PartialEq<$raw>, D> PartialEq<$raw> for Domain<B, D> {
            #[inline(always)]
            fn eq(&self, other: &$raw) -> bool {
                self.base == *other
            }
        }

        impl<B, D> PartialEq<Domain<B, D>> for $raw
        where
            $raw: PartialEq<B>,
        {
            #[inline(always)]
            fn eq(&self, other: &Domain<B, D>) -> bool {
                *self == other.base
            }
        }

        impl<B: PartialOrd<$raw>, D> PartialOrd<$raw> for Domain<B, D> {
            #[inline(always)]
            fn partial_cmp(&self, other: &$raw) -> Option<core::cmp::Ordering> {
                self.base.partial_cmp(other)
            }
        }

        impl<B, D> PartialOrd<Domain<B, D>> for $raw
        where
            $raw: PartialOrd<B>,
        {
            #[inline(always)]
            fn partial_cmp(&self, other: &Domain<B, D>) -> Option<core::cmp::Ordering> {
                PartialOrd::<B>::partial_cmp(self, &other.base)
            }
        }
    )*};
}

domain_op!(Add, add, AddAssign, add_assign);
domain_op!(Sub, sub, SubAssign, sub_assign);
domain_op!(Mul, mul, MulAssign, mul_assign);
domain_op!(Div, div, DivAssign, div_assign);
domain_op!(Rem, rem, RemAssign, rem_assign);
domain_op!(BitXor, bitxor, BitXorAssign, bitxor_assign);
domain_op!(BitAnd, bitand, BitAndAssign, bitand_assign);
domain_op!(BitOr, bitor, BitOrAssign, bitor_assign);

domain_shift!(Shl, shl, ShlAssign, shl_assign);
domain_shift!(Shr, shr, ShrAssign, shr_assign);

numeric_primitives!(domain_raw_cmp!());
numeric_primitives!(domain_raw_op!(Add, add, AddAssign, add_assign));
numeric_primitives!(domain_raw_op!(Sub, sub, SubAssign, sub_assign));
numeric_primitives!(domain_raw_op!(Mul, mul, MulAssign, mul_assign));
numeric_primitives!(domain_raw_op!(Div, div, DivAssign, div_assign));
numeric_primitives!(domain_raw_op!(Rem, rem, RemAssign, rem_assign));
integer_primitives!(domain_raw_op!(BitXor, bitxor, BitXorAssign, bitxor_assign));
integer_primitives!(domain_raw_op!(BitAnd, bitand, BitAndAssign, bitand_assign));
integer_primitives!(domain_raw_op!(BitOr, bitor, BitOrAssign, bitor_assign));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::Implicit;
    use crate::{Bits, Quantity, SafeBool};

    enum IntegerTag {}
    enum YearTag {}
    enum DayTag {}
    enum MaskTag {}
    enum BitMaskTag {}
    enum TruthTag {}

    impl Tag for IntegerTag {
        const NAME: &'static str = "Integer";
    }

    impl Tag for YearTag {
        const NAME: &'static str = "Year";
    }

    impl Tag for DayTag {
        const NAME: &'static str = "Day";
    }

    type Integer = Quantity<i32, IntegerTag>;
    type Year = Domain<Integer, YearTag>;
    type Day = Domain<Integer, DayTag>;
    type Count = Domain<Quantity<i32, IntegerTag, Implicit>, DayTag>;
    type BitMask = Domain<Bits<u32, MaskTag, Implicit>, BitMaskTag>;
    type Truth = Domain<SafeBool<TruthTag>, TruthTag>;

    #[test]
    fn test_construction() {
        assert_eq!(Year::default().value(), 0);
        assert_eq!(Year::new(2012).value(), 2012);
        assert_eq!(Year::from(Integer::new(7)).value(), 7);
        assert_eq!(*Year::new(3).base(), Integer::new(3));
    }

    #[test]
    fn test_forwarded_operators() {
        let mut year = Year::new(2012);
        year += Year::new(1);
        assert_eq!(year, Year::new(2013));
        assert!(year > Year::new(2012));
        assert_eq!(-Year::new(4), Year::new(-4));
        assert_eq!(year.post_increment(), Year::new(2013));
        assert_eq!(year.value(), 2014);
    }

    #[test]
    fn test_through_base() {
        let day = Day::new(21);
        let year = Year::from(day.into_base());
        assert_eq!(year.value(), 21);
    }

    #[test]
    fn test_forwarded_scaling() {
        let count = Count::new(7);
        assert_eq!(count * 5, Count::new(35));
        assert_eq!(5 * count, Count::new(35));
        assert_eq!(count / 7, Count::new(1));
        assert!(count == 7);
        assert!(6 < count);
    }

    #[test]
    fn test_forwarded_bits() {
        assert_eq!((BitMask::new(0x7) ^ BitMask::new(0x3)).value(), 0x4);
        assert_eq!((BitMask::new(0x1) << 3).value(), 0x8);
        assert_eq!((BitMask::new(0x8) >> 3).value(), 0x1);
        assert_eq!((0x3u32 & BitMask::new(0x7)).value(), 0x3);
        assert!(BitMask::new(0x1234) == 0x1234u32);
    }

    #[test]
    fn test_forwarded_safe_bool() {
        let truth = Truth::new(true);
        assert!(truth.as_bool());
        assert!(bool::from(truth));
        assert!(truth != Truth::default());
    }

    #[test]
    fn test_debug_uses_domain_name() {
        use std::format;
        assert_eq!(format!("{:?}", Year::new(2012)), "Year(2012)");
    }
}
