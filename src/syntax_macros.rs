//! Declaration macros.
//!
//! Each macro declares a zero-size tag `<Name>Tag` (with `Tag::NAME` set to
//! `"<Name>"`) and a type alias `<Name>` for the wrapper. An optional trailing
//! `=> "directive"` installs `Render` on the tag with that format directive.
//!
//! | Macro | Declares |
//! |-------|----------|
//! | `value_type!(pub Id: u64)` | `Value<u64, IdTag>` |
//! | `bits_type!(pub Mask: u32 => "{:#x}")` | `Bits<u32, MaskTag>` |
//! | `arithmetic_type!(pub Real: f64, implicit)` | `Arithmetic<f64, RealTag, Implicit>` |
//! | `quantity_type!(pub Speed: f64 => "{:.2}")` | `Quantity<f64, SpeedTag>` |
//! | `safe_bool_type!(pub Flag)` | `SafeBool<FlagTag>` |
//! | `domain_type!(pub Year: Integer)` | `Domain<Integer, YearTag>` |
//!
//! The policy is `explicit` when omitted.

// =============================================================================
// Internal helpers
// =============================================================================

/// Maps a policy keyword to its type.
#[doc(hidden)]
#[macro_export]
macro_rules! __whole_value_policy {
    () => { $crate::Explicit };
    (explicit) => { $crate::Explicit };
    (implicit) => { $crate::Implicit };
}

/// Tag declaration, `Tag` impl and optional `Render` impl.
#[doc(hidden)]
#[macro_export]
macro_rules! __whole_value_tag {
    ($vis:vis $name:ident; $raw:ty; [$($fmt:literal)?]) => {
        $crate::paste::paste! {
            #[doc = concat!("Distinctness tag of [`", stringify!($name), "`].")]
            $vis enum [<$name Tag>] {}

            impl $crate::Tag for [<$name Tag>] {
                const NAME: &'static str = stringify!($name);
            }

            $(
            impl $crate::Render<$raw> for [<$name Tag>] {
                fn render(value: &$raw, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    ::core::write!(f, $fmt, value)
                }
            }
            )?
        }
    };
}

/// Tag plus alias for the four `<T, G, C>` categories.
#[doc(hidden)]
#[macro_export]
macro_rules! __whole_value_category {
    (
        $category:ident;
        $(#[$meta:meta])* $vis:vis $name:ident: $raw:ty;
        [$($policy:ident)?];
        [$($fmt:literal)?]
    ) => {
        $crate::__whole_value_tag!($vis $name; $raw; [$($fmt)?]);

        $crate::paste::paste! {
            $(#[$meta])*
            $vis type $name = $crate::$category<
                $raw,
                [<$name Tag>],
                $crate::__whole_value_policy!($($policy)?),
            >;
        }
    };
}

// =============================================================================
// Category declarations
// =============================================================================

/// Declares a plain [`Value`](crate::Value) type.
///
/// ```rust
/// whole_value::value_type!(pub OrderId: u64 => "#{}");
///
/// assert_eq!(OrderId::new(42).to_string(), "#42");
/// assert_eq!(format!("{:?}", OrderId::new(42)), "OrderId(42)");
/// ```
#[macro_export]
macro_rules! value_type {
    ($(#[$meta:meta])* $vis:vis $name:ident : $raw:ty $(, $policy:ident)? $(=> $fmt:literal)? $(;)?) => {
        $crate::__whole_value_category!(
            Value; $(#[$meta])* $vis $name: $raw; [$($policy)?]; [$($fmt)?]
        );
    };
}

/// Declares a [`Bits`](crate::Bits) type.
///
/// ```rust
/// whole_value::bits_type!(pub Flags: u32 => "{:#x}");
///
/// let flags = Flags::new(0x1000) | Flags::new(0x0234);
/// assert_eq!(flags.to_string(), "0x1234");
/// ```
#[macro_export]
macro_rules! bits_type {
    ($(#[$meta:meta])* $vis:vis $name:ident : $raw:ty $(, $policy:ident)? $(=> $fmt:literal)? $(;)?) => {
        $crate::__whole_value_category!(
            Bits; $(#[$meta])* $vis $name: $raw; [$($policy)?]; [$($fmt)?]
        );
    };
}

/// Declares an [`Arithmetic`](crate::Arithmetic) type.
///
/// ```rust
/// whole_value::arithmetic_type!(pub Real: f64, implicit => "{:.2}");
///
/// let total: Real = 1234.0.into();
/// assert_eq!((total + 0.567).to_string(), "1234.57");
/// assert!(Real::IMPLICIT);
/// ```
#[macro_export]
macro_rules! arithmetic_type {
    ($(#[$meta:meta])* $vis:vis $name:ident : $raw:ty $(, $policy:ident)? $(=> $fmt:literal)? $(;)?) => {
        $crate::__whole_value_category!(
            Arithmetic; $(#[$meta])* $vis $name: $raw; [$($policy)?]; [$($fmt)?]
        );
    };
}

/// Declares a [`Quantity`](crate::Quantity) type.
///
/// ```rust
/// whole_value::quantity_type!(pub Distance: f64, implicit);
/// whole_value::quantity_type!(pub Steps: u32);
///
/// assert_eq!((Distance::new(1.5) * 2.0).value(), 3.0);
/// assert_eq!(Steps::new(3) + Steps::new(4), Steps::new(7));
/// assert!(!Steps::IMPLICIT);
/// ```
#[macro_export]
macro_rules! quantity_type {
    ($(#[$meta:meta])* $vis:vis $name:ident : $raw:ty $(, $policy:ident)? $(=> $fmt:literal)? $(;)?) => {
        $crate::__whole_value_category!(
            Quantity; $(#[$meta])* $vis $name: $raw; [$($policy)?]; [$($fmt)?]
        );
    };
}

/// Declares a [`SafeBool`](crate::SafeBool) type.
///
/// ```rust
/// use whole_value::AsBool;
///
/// whole_value::safe_bool_type!(pub Visible => "{}");
///
/// assert!(Visible::new(true).as_bool());
/// assert_eq!(Visible::default().to_string(), "false");
/// ```
#[macro_export]
macro_rules! safe_bool_type {
    ($(#[$meta:meta])* $vis:vis $name:ident $(=> $fmt:literal)? $(;)?) => {
        $crate::__whole_value_tag!($vis $name; bool; [$($fmt)?]);

        $crate::paste::paste! {
            $(#[$meta])*
            $vis type $name = $crate::SafeBool<[<$name Tag>]>;
        }
    };
}

/// Declares a [`Domain`](crate::Domain) subtype of an existing whole value
/// type. Rendering comes from the base.
///
/// ```rust
/// whole_value::quantity_type!(pub Integer: i32 => "{}");
/// whole_value::domain_type!(pub Year: Integer);
///
/// assert_eq!(Year::new(2012).to_string(), "2012");
/// assert_eq!(format!("{:?}", Year::new(2012)), "Year(2012)");
/// ```
#[macro_export]
macro_rules! domain_type {
    ($(#[$meta:meta])* $vis:vis $name:ident : $base:ty $(;)?) => {
        $crate::paste::paste! {
            #[doc = concat!("Distinctness tag of [`", stringify!($name), "`].")]
            $vis enum [<$name Tag>] {}

            impl $crate::Tag for [<$name Tag>] {
                const NAME: &'static str = stringify!($name);
            }

            $(#[$meta])*
            $vis type $name = $crate::Domain<$base, [<$name Tag>]>;
        }
    };
}
