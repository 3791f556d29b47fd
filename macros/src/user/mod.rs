//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Tag)]` | on unit struct / enum | Declare a distinctness tag |
//! | `#[derive(Render)]` | on a tag | Install `Display` for wrappers of that tag |

mod render;
mod tag;

pub use render::expand_derive_render;
pub use tag::expand_derive_tag;
