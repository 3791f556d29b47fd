//! Textual rendering hook.
//!
//! `Display` for a whole value is installed on its tag: a wrapper tagged `G`
//! over payload `T` displays when `G: Render<T>`. The tag is local to the
//! crate declaring it, so every type can get its own format without touching
//! the wrapper.
//!
//! ```rust
//! use whole_value::{Render, Value};
//!
//! #[derive(whole_value::Tag, Render)]
//! #[render("{:#x}")]
//! enum AddressTag {}
//!
//! type Address = Value<u32, AddressTag>;
//!
//! assert_eq!(Address::new(4660).to_string(), "0x1234");
//! ```
//!
//! Without a `Render` impl there is no `Display`:
//!
//! ```compile_fail
//! whole_value::value_type!(pub Plain: i32);
//!
//! let text = Plain::new(1).to_string();
//! ```

use core::fmt;

/// Formats a raw payload of type `T` for the tag implementing it.
///
/// Implement by hand for anything a single format directive cannot express:
///
/// ```rust
/// use core::fmt;
/// use whole_value::{Render, SafeBool, Tag};
///
/// #[derive(Tag)]
/// enum SwitchTag {}
///
/// impl Render<bool> for SwitchTag {
///     fn render(value: &bool, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str(if *value { "on" } else { "off" })
///     }
/// }
///
/// assert_eq!(SafeBool::<SwitchTag>::new(true).to_string(), "on");
/// ```
pub trait Render<T> {
    fn render(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}
