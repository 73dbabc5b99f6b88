//! Textual spelling of names.
//!
//! A *basic* name matches `[a-zA-Z_][a-zA-Z0-9_]*` and is not a reserved
//! word. Anything else is written as an *unrestricted* name between single
//! quotes, with `\` escapes for the quote, the backslash and control
//! characters.

use std::borrow::Cow;

use super::keywords::is_reserved;
use super::QUALIFIED_NAME_SEPARATOR;

/// Returns true if `name` can be written without quotes.
pub fn is_basic_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !is_reserved(name)
}

/// Spell `name` so that the textual grammar reads it back unchanged.
///
/// ```
/// use syster_names::names::printable_name;
///
/// assert_eq!(printable_name("Wheel"), "Wheel");
/// assert_eq!(printable_name("front wheel"), "'front wheel'");
/// assert_eq!(printable_name("part"), "'part'");
/// assert_eq!(printable_name("it's"), r"'it\'s'");
/// ```
pub fn printable_name(name: &str) -> Cow<'_, str> {
    if name.is_empty() || is_basic_name(name) {
        return Cow::Borrowed(name);
    }
    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push('\'');
    for c in name.chars() {
        match c {
            '\'' => quoted.push_str("\\'"),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\r' => quoted.push_str("\\r"),
            '\u{8}' => quoted.push_str("\\b"),
            '\u{c}' => quoted.push_str("\\f"),
            _ => quoted.push(c),
        }
    }
    quoted.push('\'');
    Cow::Owned(quoted)
}

/// Split a qualified name into its unescaped segments.
///
/// `::` inside a quoted segment is part of the name. Returns `None` for an
/// empty segment or an unterminated quote.
///
/// ```
/// use syster_names::names::split_qualified_name;
///
/// assert_eq!(
///     split_qualified_name("Vehicles::'front wheel'"),
///     Some(vec!["Vehicles".to_string(), "front wheel".to_string()])
/// );
/// assert_eq!(split_qualified_name("A::"), None);
/// ```
pub fn split_qualified_name(text: &str) -> Option<Vec<String>> {
    let mut segments = Vec::new();
    let mut rest = text;
    loop {
        let (segment, remainder) = if let Some(quoted) = rest.strip_prefix('\'') {
            take_quoted(quoted)?
        } else {
            let end = rest.find(QUALIFIED_NAME_SEPARATOR).unwrap_or(rest.len());
            (rest[..end].trim().to_string(), &rest[end..])
        };
        if segment.is_empty() {
            return None;
        }
        segments.push(segment);

        let remainder = remainder.trim_start();
        if remainder.is_empty() {
            return Some(segments);
        }
        rest = remainder.strip_prefix(QUALIFIED_NAME_SEPARATOR)?.trim_start();
    }
}

/// Read an unrestricted name body up to its closing quote.
fn take_quoted(text: &str) -> Option<(String, &str)> {
    let mut name = String::new();
    let mut chars = text.char_indices();
    while let Some((index, c)) = chars.next() {
        match c {
            '\'' => return Some((name, &text[index + 1..])),
            '\\' => {
                let (_, escaped) = chars.next()?;
                name.push(match escaped {
                    'n' => '\n',
                    't' => '\t',
                    'r' => '\r',
                    'b' => '\u{8}',
                    'f' => '\u{c}',
                    other => other,
                });
            }
            _ => name.push(c),
        }
    }
    None
}
