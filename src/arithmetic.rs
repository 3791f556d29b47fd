//! Dimensionless arithmetic whole value.
//!
//! Full ordering, unary minus, increment/decrement and `+ - * / %` between two
//! values of the identical type. Every operator behaves exactly as the
//! payload's own operator, including overflow and division by zero.
//!
//! ```rust
//! use whole_value::Step;
//!
//! whole_value::arithmetic_type!(pub Integer: i32);
//!
//! let mut x = Integer::new(7);
//! assert_eq!(x * Integer::new(5) % Integer::new(4), Integer::new(3));
//! assert_eq!(x.post_increment(), Integer::new(7));
//! assert_eq!(x, Integer::new(8));
//! assert!(-x < Integer::new(0));
//! ```
//!
//! Raw operands need the implicit policy:
//!
//! ```compile_fail
//! whole_value::arithmetic_type!(pub Integer: i32);
//!
//! let sum = Integer::new(7) + 5;
//! ```

use core::marker::PhantomData;

use crate::conversion::Explicit;
use crate::whole::Scalar;

/// Arithmetic type (dimensionless).
#[repr(transparent)]
pub struct Arithmetic<T, G, C = Explicit> {
    value: T,
    _marker: PhantomData<fn() -> (G, C)>,
}

whole_value_base!(Arithmetic);
ordering!(Arithmetic);
negation!(Arithmetic);
unit_step!(Arithmetic);

binary_op!(Arithmetic, Add, add, AddAssign, add_assign);
binary_op!(Arithmetic, Sub, sub, SubAssign, sub_assign);
binary_op!(Arithmetic, Mul, mul, MulAssign, mul_assign);
binary_op!(Arithmetic, Div, div, DivAssign, div_assign);
binary_op!(Arithmetic, Rem, rem, RemAssign, rem_assign);

numeric_primitives!(raw_ordering!(Arithmetic));
numeric_primitives!(raw_op!(Arithmetic, Add, add, AddAssign, add_assign));
numeric_primitives!(raw_op!(Arithmetic, Sub, sub, SubAssign, sub_assign));
numeric_primitives!(raw_op!(Arithmetic, Mul, mul, MulAssign, mul_assign));
numeric_primitives!(raw_op!(Arithmetic, Div, div, DivAssign, div_assign));
numeric_primitives!(raw_op!(Arithmetic, Rem, rem, RemAssign, rem_assign));

impl<T: Copy, G, C> Scalar for Arithmetic<T, G, C> {}
