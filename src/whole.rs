//! Traits shared by every whole value type.
//!
//! - `WholeValue`: the raw payload type and the explicit ways in and out.
//! - `Scalar`: categories that support `abs`, `to_integer` and `to_real`.
//! - `Step`: increment and decrement.

use crate::num::CastTo;

/// A wrapper around exactly one raw value.
///
/// `from_raw` and `to_raw` are the only conversions between a wrapper and its
/// payload; no operator leaks the raw type back out.
pub trait WholeValue: Copy {
    type Raw: Copy;

    fn from_raw(raw: Self::Raw) -> Self;

    fn to_raw(&self) -> Self::Raw;

    /// `to_raw() as U`.
    #[inline(always)]
    fn cast<U>(&self) -> U
    where
        Self::Raw: CastTo<U>,
    {
        self.to_raw().cast_to()
    }
}

/// Whole values that read as a single number: plain values, arithmetic values,
/// quantities and domains built on them. Bit masks and safe bools are not
/// scalars.
pub trait Scalar: WholeValue {}

/// Pre/post increment and decrement.
///
/// `increment` and `decrement` are the fundamental operations; the post forms
/// return the value held before the step.
pub trait Step: Copy {
    /// `++x`
    fn increment(&mut self) -> &mut Self;

    /// `--x`
    fn decrement(&mut self) -> &mut Self;

    /// `x++`
    #[inline(always)]
    fn post_increment(&mut self) -> Self {
        let previous = *self;
        self.increment();
        previous
    }

    /// `x--`
    #[inline(always)]
    fn post_decrement(&mut self) -> Self {
        let previous = *self;
        self.decrement();
        previous
    }
}
