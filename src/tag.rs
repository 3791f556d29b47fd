//! Distinctness tags.
//!
//! A tag is a zero-size marker type. It never exists at runtime; it only
//! appears as a type parameter, so two wrappers that differ only in their tag
//! are unrelated types with an identical representation.
//!
//! ```rust
//! use whole_value::{Arithmetic, Tag};
//!
//! #[derive(Tag)]
//! enum MetersTag {}
//!
//! #[derive(Tag)]
//! #[tag(name = "Feet")]
//! struct FeetTag;
//!
//! type Meters = Arithmetic<f64, MetersTag>;
//! type Feet = Arithmetic<f64, FeetTag>;
//!
//! assert_eq!(MetersTag::NAME, "MetersTag");
//! assert_eq!(format!("{:?}", Feet::new(3.0)), "Feet(3.0)");
//! # let _ = Meters::new(1.0);
//! ```

/// Marker trait for distinctness tags.
///
/// `NAME` is used by `Debug`, which prints `NAME(value)`. Debug-printing a
/// wrapper whose tag lacks the impl reports "`..` is not a whole value tag":
///
/// ```compile_fail,E0277
/// enum Untagged {}
///
/// let text = format!("{:?}", whole_value::Value::<i32, Untagged>::new(1));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a whole value tag",
    label = "`{Self}` does not implement `Tag`",
    note = "Add `#[derive(whole_value::Tag)]` to `{Self}`, or declare the type with one of the `*_type!` macros."
)]
pub trait Tag: 'static {
    const NAME: &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    enum First {}
    enum Second {}

    impl Tag for First {
        const NAME: &'static str = "First";
    }

    impl Tag for Second {
        const NAME: &'static str = "Second";
    }

    #[test]
    fn test_names() {
        assert_eq!(First::NAME, "First");
        assert_eq!(Second::NAME, "Second");
    }

    #[test]
    fn test_name_drives_debug() {
        use std::format;
        assert_eq!(format!("{:?}", crate::Value::<u8, First>::new(1)), "First(1)");
        assert_eq!(format!("{:?}", crate::Bits::<u8, Second>::new(2)), "Second(2)");
    }
}
