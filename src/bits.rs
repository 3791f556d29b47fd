//! Bit-mask whole value.
//!
//! Equality, `^ & |` between masks of one type, and shifts by a raw `u32`
//! count. A shift never takes a mask as its count.
//!
//! ```rust
//! whole_value::bits_type!(pub Mask: u32);
//!
//! assert_eq!((Mask::new(0x7) ^ Mask::new(0x3)).value(), 0x4);
//! assert_eq!((Mask::new(0x1) << 3).value(), 0x8);
//! assert_eq!((Mask::new(0x8) >> 3).value(), 0x1);
//! ```
//!
//! Masks of different tags do not mix:
//!
//! ```compile_fail
//! whole_value::bits_type!(pub Mask: u32);
//! whole_value::bits_type!(pub OtherMask: u32);
//!
//! let same = Mask::new(0x1234) == OtherMask::new(0x1234);
//! ```
//!
//! Nor do masks and raw literals, unless the type is declared `implicit`:
//!
//! ```compile_fail
//! whole_value::bits_type!(pub Mask: u32);
//!
//! let masked = Mask::new(0x7) & 0x3;
//! ```

use core::marker::PhantomData;

use crate::conversion::Explicit;

/// Type with bitwise operations.
#[repr(transparent)]
pub struct Bits<T, G, C = Explicit> {
    value: T,
    _marker: PhantomData<fn() -> (G, C)>,
}

whole_value_base!(Bits);
equality!(Bits);

binary_op!(Bits, BitXor, bitxor, BitXorAssign, bitxor_assign);
binary_op!(Bits, BitAnd, bitand, BitAndAssign, bitand_assign);
binary_op!(Bits, BitOr, bitor, BitOrAssign, bitor_assign);

shift_op!(Bits, Shl, shl, ShlAssign, shl_assign);
shift_op!(Bits, Shr, shr, ShrAssign, shr_assign);

integer_primitives!(raw_equality!(Bits));
integer_primitives!(raw_op!(Bits, BitXor, bitxor, BitXorAssign, bitxor_assign));
integer_primitives!(raw_op!(Bits, BitAnd, bitand, BitAndAssign, bitand_assign));
integer_primitives!(raw_op!(Bits, BitOr, bitor, BitOrAssign, bitor_assign));
