//! Conversions between UTF-8 and the single-byte encodings: 7-bit ASCII and
//! ISO-8859-1.

use crate::table::to_ascii_char;
use crate::utf8::{code_points, encode_one};

/// Replaces every code point outside 7-bit ASCII with its nearest ASCII byte
/// from the conversion table, or the unknown-character byte.
pub fn remove_special_chars(bytes: &[u8]) -> Vec<u8> {
    code_points(bytes).map(to_ascii_char).collect()
}

/// Same conversion as [`remove_special_chars`], under its other name.
#[inline]
pub fn unicode_to_ascii(bytes: &[u8]) -> Vec<u8> {
    remove_special_chars(bytes)
}

/// ISO-8859-1 bytes are the first 256 code points, so each byte is encoded
/// as the code point of the same value.
pub fn iso8859_1_to_utf8(bytes: &[u8]) -> Vec<u8> {
    let mut utf8 = Vec::with_capacity(bytes.len());
    for &byte in bytes {
        utf8.extend_from_slice(&encode_one(byte.into()));
    }
    utf8
}

/// Code points up to `0xFF` keep their value; anything above falls back like
/// [`remove_special_chars`].
pub fn utf8_to_iso8859_1(bytes: &[u8]) -> Vec<u8> {
    code_points(bytes)
        .map(|codepoint| u8::try_from(codepoint).unwrap_or_else(|_| to_ascii_char(codepoint)))
        .collect()
}
