// Common utilities shared by the derives
//
// This module contains:
// - format_spec: render directive validation
// - parse_utils: helper attribute parsing

pub mod format_spec;
mod parse_utils;

pub use format_spec::parse_directive;
pub use parse_utils::*;
