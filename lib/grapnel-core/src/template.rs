//! URL path template resolution.
//!
//! Templates embed path variables as `:identifier` tokens (identifier =
//! `[A-Za-z0-9_]+`), matched left-to-right and greedy. Each resolved token
//! consumes its key from the data record, so downstream encoders never
//! re-emit path values.
//!
//! # Example
//!
//! ```
//! use grapnel_core::{record, resolve_path};
//!
//! let (url, rest) = resolve_path(
//!     "https://api.example.com/users/:id",
//!     record! { "id" => 5, "name" => "x" },
//! ).expect("resolve");
//! assert_eq!(url, "https://api.example.com/users/5");
//! assert_eq!(rest.len(), 1);
//! ```

use crate::{Error, Record, Result};

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Substitute `:identifier` tokens in `template` with values from `data`.
///
/// Returns the resolved URL and the record shrunk by the consumed keys.
/// Taking the record by value makes the consumption explicit: the caller's
/// own copy is never mutated behind its back, and the remainder handed to
/// the encoders cannot alias it.
///
/// A `:` not followed by an identifier character is literal text, so URL
/// schemes (`https://…`) pass through untouched. Templates with zero tokens
/// resolve to themselves and consume nothing.
///
/// # Errors
///
/// Returns [`Error::MissingPathVariable`] when a token has no matching key,
/// and [`Error::BinaryValue`] when the matched value is a blob — neither has
/// a sensible textual substitution, and failing here keeps the error ahead
/// of any network call.
pub fn resolve_path(template: &str, mut data: Record) -> Result<(String, Record)> {
    let mut resolved = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(position) = rest.find(':') {
        let (literal, tail) = rest.split_at(position);
        resolved.push_str(literal);

        // Greedy scan of identifier characters after the colon.
        let after = tail.strip_prefix(':').unwrap_or(tail);
        let end = after
            .find(|c: char| !is_identifier_char(c))
            .unwrap_or(after.len());
        let (name, remainder) = after.split_at(end);

        if name.is_empty() {
            resolved.push(':');
            rest = after;
            continue;
        }

        let value = data
            .remove(name)
            .ok_or_else(|| Error::missing_path_variable(name))?;
        let text = value.to_text().ok_or_else(|| Error::binary_value(name))?;
        resolved.push_str(&text);
        rest = remainder;
    }

    resolved.push_str(rest);
    Ok((resolved, data))
}
