//! Recognition and tokenization of the standard six-field cron shape.
//!
//! An input is recognized when it consists of exactly six whitespace-free
//! tokens separated by single spaces, anchored at both ends: no leading or
//! trailing space, no doubled separator, no empty token.

use crate::types::{CronError, Result};

/// Number of fields in a standard cron expression
pub const FIELD_COUNT: usize = 6;

/// Check whether the raw input has the standard six-field shape.
pub fn is_standard_format(raw: &str) -> bool {
    tokenize(raw).is_ok()
}

/// Split a recognized input into its six ordered field tokens.
///
/// Fails with [`CronError::NoFieldsFound`] when the input does not have
/// the standard shape; callers are expected to have checked
/// [`is_standard_format`] first.
pub fn tokenize(raw: &str) -> Result<[&str; FIELD_COUNT]> {
    let parts: Vec<&str> = raw.split(' ').collect();
    let tokens: [&str; FIELD_COUNT] =
        parts.try_into().map_err(|_| CronError::NoFieldsFound)?;

    // Empty tokens come from leading/trailing/doubled spaces; other
    // whitespace never separates fields and may not appear inside one.
    if tokens
        .iter()
        .any(|token| token.is_empty() || token.chars().any(char::is_whitespace))
    {
        return Err(CronError::NoFieldsFound);
    }

    Ok(tokens)
}
