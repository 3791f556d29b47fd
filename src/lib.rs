#![no_std]

// Feature flags handled:
// - derive: default, re-exports `#[derive(Tag)]` / `#[derive(Render)]`

//! # whole-value
//!
//! Whole value strong typedefs: a primitive payload, a zero-size tag and a
//! conversion policy make up a distinct type that exposes only the operators
//! of its category.
//!
//! **Mixing a day with a year is a compile error, not a runtime defect.**
//!
//! ## Architecture
//!
//! Every wrapper stores one value and carries its tag as a phantom type
//! parameter, so two wrappers over the same primitive are unrelated types:
//!
//! ```text
//! Quantity<i32, YearTag, Explicit>     Quantity<i32, DayTag, Explicit>
//!          |       |        |                   (no conversion path)
//!        payload  tag    policy
//! ```
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Tag, Conversion (Explicit / Implicit), Numeric, CastTo         |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Categories                                              |
//! |  - Value, Bits, Arithmetic, Quantity, SafeBool                    |
//! |  - operators derived from compound assignment (ops)               |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: User API                                                |
//! |  - Domain subtypes, Render hook, free functions                   |
//! |  - macros (quantity_type!, domain_type!, ...), derive(Tag/Render) |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Categories
//!
//! | Type | Operators |
//! |------|-----------|
//! | [`Value`] | none: construct, copy, read, cast |
//! | [`Bits`] | `== != ^ & \| << >>` |
//! | [`Arithmetic`] | `== < - + - * / %`, increment, decrement |
//! | [`Quantity`] | `== < - + -`, scaling by a raw factor when [`Implicit`] |
//! | [`SafeBool`] | `== !=` within one tag, explicit `bool` conversion |
//! | [`Domain`] | whatever its base exposes, under a second tag |
//!
//! ## Quick Start
//!
//! ```rust
//! use whole_value::prelude::*;
//!
//! whole_value::quantity_type!(pub Integer: i32);
//! whole_value::domain_type!(pub Year: Integer);
//! whole_value::domain_type!(pub Day: Integer);
//!
//! #[derive(Clone, Copy)]
//! enum Month { July = 7 }
//!
//! fn date(year: Year, month: Month, day: Day) -> (i32, i32, i32) {
//!     (year.value(), month as i32, day.value())
//! }
//!
//! let today = date(Year::new(2012), Month::July, Day::new(21));
//! assert_eq!(today, (2012, 7, 21));
//!
//! let later = Year::new(2012) + Year::new(1);
//! assert_eq!(later.value(), 2013);
//! ```
//!
//! Swapping year and day does not compile:
//!
//! ```compile_fail,E0308
//! use whole_value::prelude::*;
//!
//! whole_value::quantity_type!(pub Integer: i32);
//! whole_value::domain_type!(pub Year: Integer);
//! whole_value::domain_type!(pub Day: Integer);
//!
//! #[derive(Clone, Copy)]
//! enum Month { July = 7 }
//!
//! fn date(year: Year, month: Month, day: Day) -> (i32, i32, i32) {
//!     (year.value(), month as i32, day.value())
//! }
//!
//! let today = date(Day::new(21), Month::July, Year::new(2012));
//! ```

// Allow `::whole_value` paths emitted by the derives to work inside the crate itself
extern crate self as whole_value;

#[cfg(test)]
extern crate std;

// Re-export paste for the declaration macros
pub use paste;

// Operator generation layer, must precede the category modules.
#[macro_use]
mod ops;

// =============================================================================
// Layer 0: Primitives
// =============================================================================
pub mod conversion;
pub mod num;
pub mod tag;
pub mod whole;

// =============================================================================
// Layer 1: Categories
// =============================================================================
pub mod arithmetic;
pub mod bits;
pub mod quantity;
pub mod safe_bool;
pub mod value;

// =============================================================================
// Layer 2: User API
// =============================================================================
pub mod domain;
pub mod functions;
pub mod render;

// Declaration macros (value_type!, quantity_type!, domain_type!, ...)
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use arithmetic::Arithmetic;
pub use bits::Bits;
pub use conversion::{Conversion, Explicit, Implicit, Policy};
pub use domain::Domain;
pub use functions::{abs, to_integer, to_real, to_value};
pub use num::{CastTo, Numeric};
pub use quantity::Quantity;
pub use render::Render;
pub use safe_bool::{AsBool, SafeBool};
pub use tag::Tag;
pub use value::Value;
pub use whole::{Scalar, Step, WholeValue};

// Re-export proc-macros
#[cfg(feature = "derive")]
pub use macros::{Render, Tag};

/// Common items for declaring and using whole values.
pub mod prelude {
    pub use crate::{
        // Categories
        Arithmetic, Bits, Domain, Quantity, SafeBool, Value,
        // Policies
        Explicit, Implicit,
        // Core Traits
        AsBool, Render, Scalar, Step, Tag, WholeValue,
        // Free functions
        abs, to_integer, to_real, to_value,
    };
    // Note: value_type!, quantity_type!, domain_type!, ... are #[macro_export] so they're at crate root
}
