//! Plain whole value: construct, copy, read, cast. No operators.
//!
//! Use it for values that are passed around and inspected but never computed
//! on, such as opaque identifiers.
//!
//! ```rust
//! use whole_value::Value;
//!
//! whole_value::value_type!(pub OrderId: u64);
//!
//! let mut a = OrderId::new(1234);
//! let mut b = OrderId::default();
//! a.swap(&mut b);
//! assert_eq!(a.value(), 0);
//! assert_eq!(b.value(), 1234);
//! assert_eq!(b.cast::<u8>(), 1234u64 as u8);
//! ```
//!
//! Plain values do not compare:
//!
//! ```compile_fail
//! whole_value::value_type!(pub OrderId: u64);
//!
//! let same = OrderId::new(1) == OrderId::new(1);
//! ```
//!
//! Without the implicit policy a raw value does not convert:
//!
//! ```compile_fail
//! whole_value::value_type!(pub OrderId: u64);
//!
//! let id: OrderId = 7u64.into();
//! ```

use core::marker::PhantomData;

use crate::conversion::Explicit;
use crate::whole::Scalar;

/// Value type without any operations other than assignment.
#[repr(transparent)]
pub struct Value<T, G, C = Explicit> {
    value: T,
    _marker: PhantomData<fn() -> (G, C)>,
}

whole_value_base!(Value);

impl<T: Copy, G, C> Scalar for Value<T, G, C> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::Implicit;
    use crate::tag::Tag;

    enum IdTag {}

    impl Tag for IdTag {
        const NAME: &'static str = "Id";
    }

    type Id = Value<i32, IdTag>;
    type LooseId = Value<i32, IdTag, Implicit>;

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Id::default().value(), 0);
    }

    #[test]
    fn test_new_and_value() {
        assert_eq!(Id::new(1234).value(), 1234);
    }

    #[test]
    fn test_copy_assign() {
        let a = Id::new(3333);
        let mut b = Id::new(1);
        assert_eq!(b.value(), 1);
        b = a;
        assert_eq!(a.value(), b.value());
    }

    #[test]
    fn test_swap() {
        let mut a = Id::new(1);
        let mut b = Id::new(2);
        a.swap(&mut b);
        assert_eq!((a.value(), b.value()), (2, 1));
    }

    #[test]
    fn test_implicit_from() {
        let id: LooseId = 42.into();
        assert_eq!(id.value(), 42);
        assert!(LooseId::IMPLICIT);
        assert!(!Id::IMPLICIT);
    }

    #[test]
    fn test_zero_cost() {
        assert_eq!(core::mem::size_of::<Id>(), core::mem::size_of::<i32>());
    }
}
