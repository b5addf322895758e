//! Byte-buffer helpers and text conversions.

use crate::error::OpsError;

/// Returns the UTF-8 bytes of `s` as a fresh buffer.
#[must_use]
pub fn from_text(s: &str) -> Vec<u8> {
    s.as_bytes().to_vec()
}

/// Decodes `b` as UTF-8 text.
///
/// Round-trips losslessly with [`from_text`] for any valid string.
///
/// # Errors
/// Returns [`OpsError::InvalidUtf8`] when `b` is not valid UTF-8.
pub fn to_text(b: &[u8]) -> Result<String, OpsError> {
    Ok(String::from_utf8(b.to_vec())?)
}

/// Reads the byte at `index`.
///
/// # Errors
/// Returns [`OpsError::IndexOutOfRange`] when `index` is outside
/// `0..b.len()`.
pub fn byte_at(b: &[u8], index: usize) -> Result<u8, OpsError> {
    let len = b.len();
    b.get(index).copied().ok_or(OpsError::IndexOutOfRange { index, len })
}

/// Concatenates two buffers into freshly allocated storage.
///
/// Neither input is modified or aliased by the result.
#[must_use]
pub fn concat(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    out.extend_from_slice(a);
    out.extend_from_slice(b);
    out
}
