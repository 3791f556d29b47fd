//! Quantity whole value (more like having a dimension: no `T * T`).
//!
//! Ordering, unary minus, increment/decrement and `+ -` between two values of
//! the identical type, as for [`Arithmetic`](crate::Arithmetic). A quantity
//! scaled by a dimensionless factor stays the same quantity, so `* / %` take a
//! raw factor and never a second quantity. The scaling operators only exist
//! under the [`Implicit`] policy; an [`Explicit`] quantity is additive.
//!
//! ```rust
//! whole_value::quantity_type!(pub Count: i32, implicit);
//!
//! assert_eq!(Count::new(7) * 5, Count::new(35));
//! assert_eq!(5 * Count::new(7), Count::new(35));
//! assert_eq!(Count::new(49) / 7, Count::new(7));
//! assert_eq!(Count::new(3) % 2, Count::new(1));
//! assert_eq!(Count::new(7) + Count::new(5), Count::new(12));
//! ```
//!
//! Multiplying two quantities does not compile:
//!
//! ```compile_fail
//! whole_value::quantity_type!(pub Count: i32, implicit);
//!
//! let square = Count::new(7) * Count::new(7);
//! ```
//!
//! An explicit quantity cannot be scaled at all:
//!
//! ```compile_fail
//! whole_value::quantity_type!(pub Count: i32);
//!
//! let scaled = Count::new(7) * 5;
//! ```

use core::marker::PhantomData;

use crate::conversion::{Explicit, Implicit};
use crate::whole::Scalar;

/// Quantity type (no quantity * quantity).
#[repr(transparent)]
pub struct Quantity<T, G, C = Explicit> {
    value: T,
    _marker: PhantomData<fn() -> (G, C)>,
}

whole_value_base!(Quantity);
ordering!(Quantity);
negation!(Quantity);
unit_step!(Quantity);

binary_op!(Quantity, Add, add, AddAssign, add_assign);
binary_op!(Quantity, Sub, sub, SubAssign, sub_assign);

numeric_primitives!(raw_ordering!(Quantity));
numeric_primitives!(raw_op!(Quantity, Add, add, AddAssign, add_assign));
numeric_primitives!(raw_op!(Quantity, Sub, sub, SubAssign, sub_assign));

// Scaling: only `q * raw`, `raw * q`, `q / raw` and `q % raw`.
numeric_primitives!(raw_op!(Quantity, Mul, mul, MulAssign, mul_assign));
numeric_primitives!(raw_rhs_op!(Quantity, Div, div, DivAssign, div_assign));
numeric_primitives!(raw_rhs_op!(Quantity, Rem, rem, RemAssign, rem_assign));

impl<T: Copy, G, C> Scalar for Quantity<T, G, C> {}

impl<T, G> Quantity<T, G, Implicit> {
    /// Reinterprets an implicit quantity under the explicit policy, dropping
    /// its scaling and raw-operand operators.
    #[inline(always)]
    pub fn into_explicit(self) -> Quantity<T, G, Explicit> {
        Quantity::new(self.value)
    }
}
