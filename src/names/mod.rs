//! Name spelling: reserved words, printable (quoted) names, and qualified
//! names.

pub mod keywords;
mod printable;
mod qualified;

pub use printable::{is_basic_name, printable_name, split_qualified_name};
pub use qualified::qualified_name;

/// Separator between the segments of a qualified name.
pub const QUALIFIED_NAME_SEPARATOR: &str = "::";
