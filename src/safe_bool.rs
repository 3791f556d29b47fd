//! Safe bool: a tagged boolean usable in conditions, never in numeric
//! contexts, and comparable only with safe bools of the same tag.
//!
//! ```rust
//! use whole_value::AsBool;
//!
//! whole_value::safe_bool_type!(pub Truth);
//!
//! let t = Truth::new(true);
//! if t.as_bool() {
//!     assert!(bool::from(t));
//! }
//! assert!(!Truth::default().as_bool());
//! assert!(Truth::new(true) == Truth::new(true));
//! ```
//!
//! Comparing safe bools of different tags does not compile; the compiler
//! reports mismatched types (`expected SafeBool<TruthTag>, found
//! SafeBool<Truth2Tag>`):
//!
//! ```compile_fail,E0308
//! whole_value::safe_bool_type!(pub Truth);
//! whole_value::safe_bool_type!(pub Truth2);
//!
//! let same = Truth::new(true) == Truth2::new(true);
//! ```
//!
//! Nor does using one as a number:
//!
//! ```compile_fail
//! whole_value::safe_bool_type!(pub Truth);
//!
//! let n: i32 = Truth::new(true).into();
//! ```

use crate::tag::Tag;
use crate::value::Value;
use crate::whole::WholeValue;

/// Conversion to `bool` for use in conditions.
pub trait AsBool {
    fn as_bool(&self) -> bool;
}

/// Safe bool type.
#[repr(transparent)]
pub struct SafeBool<G> {
    inner: Value<bool, G>,
}

impl<G> SafeBool<G> {
    /// Wraps `value`.
    #[inline(always)]
    pub const fn new(value: bool) -> Self {
        Self {
            inner: Value::new(value),
        }
    }

    /// Returns the underlying boolean.
    #[inline(always)]
    pub const fn value(&self) -> bool {
        self.inner.value()
    }

    /// Exchanges the values of `self` and `other`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.inner.swap(&mut other.inner);
    }
}

impl<G> Clone for SafeBool<G> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<G> Copy for SafeBool<G> {}

impl<G> Default for SafeBool<G> {
    /// `false`.
    #[inline(always)]
    fn default() -> Self {
        Self::new(false)
    }
}

impl<G: Tag> core::fmt::Debug for SafeBool<G> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple(G::NAME).field(&self.value()).finish()
    }
}

impl<G> core::fmt::Display for SafeBool<G>
where
    G: crate::render::Render<bool>,
{
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        G::render(&self.value(), f)
    }
}

impl<G> AsBool for SafeBool<G> {
    #[inline(always)]
    fn as_bool(&self) -> bool {
        self.value()
    }
}

impl<G> From<SafeBool<G>> for bool {
    #[inline(always)]
    fn from(value: SafeBool<G>) -> Self {
        value.value()
    }
}

impl<G> WholeValue for SafeBool<G> {
    type Raw = bool;

    #[inline(always)]
    fn from_raw(raw: bool) -> Self {
        Self::new(raw)
    }

    #[inline(always)]
    fn to_raw(&self) -> bool {
        self.value()
    }
}

// Only `PartialEq<Self>`: a safe bool of another tag is a different type.
impl<G> PartialEq for SafeBool<G> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl<G> Eq for SafeBool<G> {}

impl<G> core::hash::Hash for SafeBool<G> {
    #[inline]
    fn hash<S: core::hash::Hasher>(&self, state: &mut S) {
        core::hash::Hash::hash(&self.value(), state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    enum TruthTag {}

    impl Tag for TruthTag {
        const NAME: &'static str = "Truth";
    }

    type Truth = SafeBool<TruthTag>;

    #[test]
    fn test_construction() {
        assert!(!Truth::default().value());
        assert!(Truth::new(true).value());
        let a = Truth::new(true);
        let b = a;
        assert_eq!(a.value(), b.value());
    }

    #[test]
    fn test_comparison() {
        let (a, b, c) = (Truth::default(), Truth::default(), Truth::new(true));
        assert!(a == b);
        assert!(a != c);
        assert!(!(a != b));
    }

    #[test]
    fn test_conversion() {
        let a = Truth::default();
        let b = Truth::new(true);
        let x: bool = a.into();
        let y = bool::from(b);
        assert_eq!(x, a.value());
        assert_eq!(y, b.value());
        assert!(b.as_bool());
    }

    #[test]
    fn test_swap() {
        let mut a = Truth::new(true);
        let mut b = Truth::new(false);
        a.swap(&mut b);
        assert!(!a.value() && b.value());
    }
}
