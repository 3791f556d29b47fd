//! Render directive validation.
//!
//! A directive is a `format!` string with exactly one implicit placeholder,
//! e.g. `"{:.2}"`, `"{:#x}"` or `"#{}"`. The placeholder's trailing type
//! character selects the formatting trait the payload must implement.

use std::fmt;

/// Formatting trait selected by a directive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatTrait {
    Display,
    Debug,
    LowerHex,
    UpperHex,
    Octal,
    Binary,
    LowerExp,
    UpperExp,
}

impl FormatTrait {
    fn from_type_char(c: Option<char>) -> Self {
        match c {
            Some('?') => FormatTrait::Debug,
            Some('x') => FormatTrait::LowerHex,
            Some('X') => FormatTrait::UpperHex,
            Some('o') => FormatTrait::Octal,
            Some('b') => FormatTrait::Binary,
            Some('e') => FormatTrait::LowerExp,
            Some('E') => FormatTrait::UpperExp,
            _ => FormatTrait::Display,
        }
    }

    /// Trait name under `core::fmt`.
    pub fn ident(self) -> &'static str {
        match self {
            FormatTrait::Display => "Display",
            FormatTrait::Debug => "Debug",
            FormatTrait::LowerHex => "LowerHex",
            FormatTrait::UpperHex => "UpperHex",
            FormatTrait::Octal => "Octal",
            FormatTrait::Binary => "Binary",
            FormatTrait::LowerExp => "LowerExp",
            FormatTrait::UpperExp => "UpperExp",
        }
    }
}

/// Why a directive was rejected.
#[derive(Debug, PartialEq, Eq)]
pub enum DirectiveError {
    NoPlaceholder,
    ExtraPlaceholder,
    ExplicitArgument(String),
    ExtraArguments,
    Unbalanced,
}

impl fmt::Display for DirectiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectiveError::NoPlaceholder => {
                f.write_str("render directive needs a `{}` placeholder for the value")
            }
            DirectiveError::ExtraPlaceholder => {
                f.write_str("render directive may contain only one placeholder")
            }
            DirectiveError::ExplicitArgument(arg) => write!(
                f,
                "render directive placeholder must not name an argument, found `{}`",
                arg
            ),
            DirectiveError::ExtraArguments => f.write_str(
                "render directive must not take width or precision from another argument (`$` or `*`)",
            ),
            DirectiveError::Unbalanced => f.write_str(
                "unbalanced braces in render directive; write `{{` or `}}` for literal braces",
            ),
        }
    }
}

/// Validates `directive` and returns the formatting trait its placeholder uses.
pub fn parse_directive(directive: &str) -> Result<FormatTrait, DirectiveError> {
    let mut chars = directive.chars().peekable();
    let mut found: Option<FormatTrait> = None;

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
            }
            '}' => return Err(DirectiveError::Unbalanced),
            '{' => {
                let mut body = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some('{') | None => return Err(DirectiveError::Unbalanced),
                        Some(c) => body.push(c),
                    }
                }
                if found.is_some() {
                    return Err(DirectiveError::ExtraPlaceholder);
                }
                found = Some(parse_placeholder(&body)?);
            }
            _ => {}
        }
    }

    found.ok_or(DirectiveError::NoPlaceholder)
}

// `body` is the text between the braces: `[arg][:spec]`.
fn parse_placeholder(body: &str) -> Result<FormatTrait, DirectiveError> {
    let (arg, spec) = match body.split_once(':') {
        Some((arg, spec)) => (arg, spec),
        None => (body, ""),
    };

    let arg = arg.trim();
    if !arg.is_empty() {
        return Err(DirectiveError::ExplicitArgument(arg.to_string()));
    }
    if spec.contains('$') || spec.contains('*') {
        return Err(DirectiveError::ExtraArguments);
    }

    Ok(FormatTrait::from_type_char(spec.chars().last()))
}
