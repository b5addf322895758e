//! Text helpers over UTF-8 strings.
//!
//! Slicing operates on the byte (code-unit) sequence, not on grapheme
//! clusters; case mapping and splitting delegate to the standard library.

use crate::error::OpsError;

/// Concatenates two strings into a fresh allocation.
#[must_use]
pub fn concat(a: &str, b: &str) -> String {
    let mut out = String::with_capacity(a.len() + b.len());
    out.push_str(a);
    out.push_str(b);
    out
}

/// Repeats `s` `n` times. A zero or negative count yields the empty string.
#[must_use]
pub fn repeat(s: &str, n: isize) -> String {
    if n <= 0 {
        return String::new();
    }
    s.repeat(n as usize)
}

/// Extracts the byte range `start..end` of `s`.
///
/// `start` is clamped to `0` and `end` to `s.len()`. Clamping happens only
/// at the edges: bounds that remain out of order afterwards are an error,
/// as is a range that splits a multi-byte character.
///
/// ```rust
/// # use ckit_ops::text;
/// assert_eq!(text::slice("abcdef", 1, 4).unwrap(), "bcd");
/// assert_eq!(text::slice("abc", -2, 10).unwrap(), "abc");
/// assert!(text::slice("abc", 2, 1).is_err());
/// ```
///
/// # Errors
/// Returns [`OpsError::InvalidRange`] when `start > end` after clamping,
/// and [`OpsError::NotCharBoundary`] when the range lands inside a UTF-8
/// sequence.
pub fn slice(s: &str, start: isize, end: isize) -> Result<&str, OpsError> {
    let start = start.max(0);
    let end = end.min(s.len() as isize);
    if start > end {
        return Err(OpsError::InvalidRange { start, end });
    }
    let (start, end) = (start as usize, end as usize);
    s.get(start..end).ok_or(OpsError::NotCharBoundary { start, end })
}

/// Uppercases `s` with the standard library's locale-independent mapping.
#[must_use]
pub fn to_upper(s: &str) -> String {
    s.to_uppercase()
}

/// Lowercases `s` with the standard library's locale-independent mapping.
#[must_use]
pub fn to_lower(s: &str) -> String {
    s.to_lowercase()
}

/// Returns `true` when `sub` occurs anywhere in `s`.
#[must_use]
pub fn contains(s: &str, sub: &str) -> bool {
    s.contains(sub)
}

/// Splits `s` on the literal separator `sep`, preserving order.
///
/// Edge cases follow [`str::split`]: splitting the empty string yields a
/// single empty piece, and an empty separator yields the string's
/// characters framed by leading and trailing empty pieces.
#[must_use]
pub fn split(s: &str, sep: &str) -> Vec<String> {
    s.split(sep).map(str::to_owned).collect()
}
