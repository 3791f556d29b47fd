//! Operator generation shared by the categories.
//!
//! Each category only spells out which operators it has. The fundamental
//! operations are compound assignment on the payload, equality and ordering;
//! binary operators, raw-operand variants and the rest of the comparison set
//! are derived from those here, once, for every category.

// =============================================================================
// Primitive Lists
// =============================================================================

/// Invoke `$mac!(args; <every numeric primitive>)`.
macro_rules! numeric_primitives {
    ($mac:ident!($($args:tt)*)) => {
        $mac!($($args)*; i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize f32 f64);
    };
}

/// Invoke `$mac!(args; <every integer primitive>)`.
macro_rules! integer_primitives {
    ($mac:ident!($($args:tt)*)) => {
        $mac!($($args)*; i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);
    };
}

// =============================================================================
// Shared Construction Layer
// =============================================================================

/// Construction, access, cast, swap, `Clone`/`Copy`/`Default`/`Debug`,
/// `WholeValue`, `Display` through the tag's `Render` hook, and `From<T>`
/// for the implicit policy.
///
/// Expects `struct $ty<T, G, C> { value: T, _marker: PhantomData<..> }`.
macro_rules! whole_value_base {
    ($ty:ident) => {
        impl<T, G, C> $ty<T, G, C> {
            /// Wraps `value`. This is the explicit construction path.
            #[inline(always)]
            pub const fn new(value: T) -> Self {
                Self {
                    value,
                    _marker: core::marker::PhantomData,
                }
            }

            /// Returns the underlying value.
            #[inline(always)]
            pub const fn value(&self) -> T
            where
                T: Copy,
            {
                self.value
            }

            /// Converts the underlying value to `U` with `as` semantics.
            #[inline(always)]
            pub fn cast<U>(&self) -> U
            where
                T: $crate::num::CastTo<U> + Copy,
            {
                $crate::num::CastTo::<U>::cast_to(self.value)
            }

            /// Exchanges the values of `self` and `other`.
            #[inline]
            pub fn swap(&mut self, other: &mut Self) {
                core::mem::swap(&mut self.value, &mut other.value);
            }
        }

        impl<T, G, C: $crate::conversion::Conversion> $ty<T, G, C> {
            /// Whether this type accepts raw values implicitly.
            pub const IMPLICIT: bool = C::IMPLICIT;
        }

        impl<T: Clone, G, C> Clone for $ty<T, G, C> {
            #[inline(always)]
            fn clone(&self) -> Self {
                Self::new(self.value.clone())
            }
        }

        impl<T: Copy, G, C> Copy for $ty<T, G, C> {}

        impl<T: Default, G, C> Default for $ty<T, G, C> {
            #[inline(always)]
            fn default() -> Self {
                Self::new(T::default())
            }
        }

        impl<T: core::fmt::Debug, G: $crate::tag::Tag, C> core::fmt::Debug for $ty<T, G, C> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_tuple(G::NAME).field(&self.value).finish()
            }
        }

        impl<T, G, C> core::fmt::Display for $ty<T, G, C>
        where
            G: $crate::render::Render<T>,
        {
            #[inline]
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                G::render(&self.value, f)
            }
        }

        impl<T: Copy, G, C> $crate::whole::WholeValue for $ty<T, G, C> {
            type Raw = T;

            #[inline(always)]
            fn from_raw(raw: T) -> Self {
                Self::new(raw)
            }

            #[inline(always)]
            fn to_raw(&self) -> T {
                self.value
            }
        }

        impl<T, G> From<T> for $ty<T, G, $crate::conversion::Implicit> {
            #[inline(always)]
            fn from(value: T) -> Self {
                Self::new(value)
            }
        }
    };
}

// =============================================================================
// Comparisons
// =============================================================================

/// `PartialEq`, `Eq` and `Hash` by exact payload.
macro_rules! equality {
    ($ty:ident) => {
        impl<T: PartialEq, G, C> PartialEq for $ty<T, G, C> {
            #[inline(always)]
            fn eq(&self, other: &Self) -> bool {
                self.value == other.value
            }
        }

        impl<T: Eq, G, C> Eq for $ty<T, G, C> {}

        impl<T: core::hash::Hash, G, C> core::hash::Hash for $ty<T, G, C> {
            #[inline]
            fn hash<S: core::hash::Hasher>(&self, state: &mut S) {
                core::hash::Hash::hash(&self.value, state);
            }
        }
    };
}

/// `equality!` plus `PartialOrd` and `Ord` following the payload's order.
macro_rules! ordering {
    ($ty:ident) => {
        equality!($ty);

        impl<T: PartialOrd, G, C> PartialOrd for $ty<T, G, C> {
            #[inline(always)]
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                self.value.partial_cmp(&other.value)
            }
        }

        impl<T: Ord, G, C> Ord for $ty<T, G, C> {
            #[inline(always)]
            fn cmp(&self, other: &Self) -> core::cmp::Ordering {
                self.value.cmp(&other.value)
            }
        }
    };
}

/// `wrapper == raw` and `raw == wrapper`, implicit policy only.
macro_rules! raw_equality {
    ($ty:ident; $($raw:ident)*) => {$(
        impl<G> PartialEq<$raw> for $ty<$raw, G, $crate::conversion::Implicit> {
            #[inline(always)]
            fn eq(&self, other: &$raw) -> bool {
                self.value == *other
            }
        }

        impl<G> PartialEq<$ty<$raw, G, $crate::conversion::Implicit>> for $raw {
            #[inline(always)]
            fn eq(&self, other: &$ty<$raw, G, $crate::conversion::Implicit>) -> bool {
                *self == other.value
            }
        }
    )*};
}

/// `raw_equality!` plus ordering against raw values on either side.
macro_rules! raw_ordering {
    ($ty:ident; $($raw:ident)*) => {
        raw_equality!($ty; $($raw)*);
        $(
        impl<G> PartialOrd<$raw> for $ty<$raw, G, $crate::conversion::Implicit> {
            #[inline(always)]
            fn partial_cmp(&self, other: &$raw) -> Option<core::cmp::Ordering> {
                PartialOrd::<$raw>::partial_cmp(&self.value, other)
            }
        }

        impl<G> PartialOrd<$ty<$raw, G, $crate::conversion::Implicit>> for $raw {
            #[inline(always)]
            fn partial_cmp(
                &self,
                other: &$ty<$raw, G, $crate::conversion::Implicit>,
            ) -> Option<core::cmp::Ordering> {
                PartialOrd::<$raw>::partial_cmp(self, &other.value)
            }
        }
        )*
    };
}

// =============================================================================
// Operators Between Two Wrappers
// =============================================================================

/// Fundamental compound assignment between two wrappers of one type.
macro_rules! assign_op {
    ($ty:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<T: core::ops::$OpAssign, G, C> core::ops::$OpAssign for $ty<T, G, C> {
            #[inline(always)]
            fn $op_assign(&mut self, rhs: Self) {
                core::ops::$OpAssign::$op_assign(&mut self.value, rhs.value);
            }
        }
    };
}

/// Binary operator derived from its compound-assignment form.
macro_rules! binary_op {
    ($ty:ident, $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        assign_op!($ty, $OpAssign, $op_assign);

        impl<T, G, C> core::ops::$Op for $ty<T, G, C>
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

/// Shift by a raw `u32` count; the count is never a wrapper.
macro_rules! shift_op {
    ($ty:ident, $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<T: core::ops::$OpAssign<u32>, G, C> core::ops::$OpAssign<u32> for $ty<T, G, C> {
            #[inline(always)]
            fn $op_assign(&mut self, count: u32) {
                core::ops::$OpAssign::$op_assign(&mut self.value, count);
            }
        }

        impl<T, G, C> core::ops::$Op<u32> for $ty<T, G, C>
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

/// Unary minus.
macro_rules! negation {
    ($ty:ident) => {
        impl<T: core::ops::Neg<Output = T>, G, C> core::ops::Neg for $ty<T, G, C> {
            type Output = Self;

            #[inline(always)]
            fn neg(self) -> Self {
                Self::new(-self.value)
            }
        }
    };
}

/// Pre increment / decrement by `Numeric::ONE`; post forms come from `Step`.
macro_rules! unit_step {
    ($ty:ident) => {
        impl<T: $crate::num::Numeric, G, C> $crate::whole::Step for $ty<T, G, C> {
            #[inline(always)]
            fn increment(&mut self) -> &mut Self {
                self.value = self.value + T::ONE;
                self
            }

            #[inline(always)]
            fn decrement(&mut self) -> &mut Self {
                self.value = self.value - T::ONE;
                self
            }
        }
    };
}

// =============================================================================
// Operators Against Raw Values (implicit policy)
// =============================================================================

/// `wrapper op= raw` and `wrapper op raw`.
macro_rules! raw_rhs_op {
    ($ty:ident, $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident; $($raw:ident)*) => {$(
        impl<G> core::ops::$OpAssign<$raw> for $ty<$raw, G, $crate::conversion::Implicit> {
            #[inline(always)]
            fn $op_assign(&mut self, rhs: $raw) {
                core::ops::$OpAssign::$op_assign(&mut self.value, rhs);
            }
        }

        impl<G> core::ops::$Op<$raw> for $ty<$raw, G, $crate::conversion::Implicit> {
            type Output = Self;

            #[inline(always)]
            fn $op(mut self, rhs: $raw) -> Self {
                core::ops::$OpAssign::$op_assign(&mut self, rhs);
                self
            }
        }
    )*};
}

/// `raw op wrapper`.
macro_rules! raw_lhs_op {
    ($ty:ident, $Op:ident, $op:ident; $($raw:ident)*) => {$(
        impl<G> core::ops::$Op<$ty<$raw, G, $crate::conversion::Implicit>> for $raw {
            type Output = $ty<$raw, G, $crate::conversion::Implicit>;

            #[inline(always)]
            fn $op(self, rhs: $ty<$raw, G, $crate::conversion::Implicit>) -> Self::Output {
                <$ty<$raw, G, $crate::conversion::Implicit>>::new(<$raw as core::ops::$Op<$raw>>::$op(
                    self,
                    rhs.value,
                ))
            }
        }
    )*};
}

/// `raw_rhs_op!` and `raw_lhs_op!` together.
macro_rules! raw_op {
    ($ty:ident, $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident; $($raw:ident)*) => {
        raw_rhs_op!($ty, $Op, $op, $OpAssign, $op_assign; $($raw)*);
        raw_lhs_op!($ty, $Op, $op; $($raw)*);
    };
}
