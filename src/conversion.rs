//! Type-level conversion policy.
//!
//! Core types: `Explicit` (default), `Implicit`, `Conversion` trait.
//!
//! The policy is the last type parameter of every category. It is decided
//! when the type is declared and is part of the type's identity, so an
//! `Arithmetic<i32, Tag, Explicit>` and an `Arithmetic<i32, Tag, Implicit>`
//! are different types.
//!
//! | Policy | `From<T>` | Operators with raw `T` | Quantity scaling |
//! |--------|-----------|------------------------|------------------|
//! | `Explicit` | no | no | no |
//! | `Implicit` | yes | yes | yes |

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Explicit {}
    impl Sealed for super::Implicit {}
}

/// Type-level conversion policy.
pub trait Conversion: sealed::Sealed + 'static {
    /// Whether raw values convert into the wrapper and mix with it in operators.
    const IMPLICIT: bool;
}

/// Raw values only enter through `new`. The default policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Explicit {}

/// Raw values convert with `From`/`Into` and mix with the wrapper in operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Implicit {}

impl Conversion for Explicit {
    const IMPLICIT: bool = false;
}

impl Conversion for Implicit {
    const IMPLICIT: bool = true;
}

/// Convert a const bool to a policy type.
pub trait SelectConversion<const IMPLICIT: bool> {
    type Out: Conversion;
}

impl SelectConversion<true> for () {
    type Out = Implicit;
}

impl SelectConversion<false> for () {
    type Out = Explicit;
}

/// Policy Type Alias
pub type Policy<const IMPLICIT: bool> = <() as SelectConversion<IMPLICIT>>::Out;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_constants() {
        assert!(!Explicit::IMPLICIT);
        assert!(Implicit::IMPLICIT);
    }

    #[test]
    fn test_select_policy() {
        fn implicit<C: Conversion>() -> bool {
            C::IMPLICIT
        }
        assert!(implicit::<Policy<true>>());
        assert!(!implicit::<Policy<false>>());
    }
}
