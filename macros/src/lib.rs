//! Procedural macros for the whole-value strong typedef library
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Tag)]` | unit struct / enum | Distinctness tag with a `NAME` |
//! | `#[derive(Render)]` | tag | Textual rendering from a format directive |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Tag, Render)]
//! #[tag(name = "Speed")]
//! #[render("{:.2}")]
//! enum SpeedTag {}
//!
//! type Speed = whole_value::Quantity<f64, SpeedTag>;
//!
//! assert_eq!(Speed::new(1234.567).to_string(), "1234.57");
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (common / user)
// =============================================================================

mod common;
mod user;

// =============================================================================
// Derives
// =============================================================================

/// Derive `whole_value::Tag`.
///
/// `NAME` defaults to the type's identifier; override it with
/// `#[tag(name = "...")]`. Only unit structs, empty-field structs and enums
/// are accepted.
#[proc_macro_derive(Tag, attributes(tag))]
pub fn derive_tag(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_tag(input).into()
}

/// Derive `whole_value::Render<T>` for every payload supporting the directive.
///
/// `#[render("{:.2}")]` sets the directive; the default is `"{}"`. The
/// directive must hold exactly one placeholder without an argument name or
/// index. Its trailing type character picks the formatting trait:
///
/// | Char | Trait |
/// |------|-------|
/// | `x` / `X` | `LowerHex` / `UpperHex` |
/// | `o` | `Octal` |
/// | `b` | `Binary` |
/// | `e` / `E` | `LowerExp` / `UpperExp` |
/// | `?` | `Debug` |
/// | other | `Display` |
#[proc_macro_derive(Render, attributes(render))]
pub fn derive_render(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_render(input).into()
}
