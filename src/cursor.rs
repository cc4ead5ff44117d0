//! Stepping over UTF-8 units one at a time.
//!
//! A cursor is a byte offset into a slice. The slice bounds are the limits of
//! every walk: nothing here reads outside them, and a walk that runs out of
//! bytes stops at the boundary and reports how far it got.

use crate::utf::CodePoint;
use crate::utf8;

/// `10xx_xxxx`
#[inline]
pub const fn is_continuation(byte: u8) -> bool {
    (byte & 0xC0) == 0x80
}

/// `11xx_xxxx`
#[inline]
pub const fn is_lead(byte: u8) -> bool {
    (byte & 0xC0) == 0xC0
}

/// Whether a walk stops in front of `byte`: plain ASCII or a lead byte.
#[inline]
const fn starts_unit(byte: u8) -> bool {
    byte & 0x80 == 0 || is_lead(byte)
}

/// Moves `cursor` past the unit it sits on and returns the number of bytes
/// skipped. At the end of `bytes` nothing moves and `0` is returned.
#[inline]
pub fn advance(bytes: &[u8], cursor: &mut usize) -> usize {
    if *cursor >= bytes.len() {
        return 0;
    }
    let start = *cursor;
    *cursor += 1;
    while *cursor < bytes.len() && !starts_unit(bytes[*cursor]) {
        *cursor += 1;
    }
    *cursor - start
}

/// Moves `cursor` back onto the start of the previous unit and returns the
/// number of bytes skipped. At the start of `bytes` nothing moves.
#[inline]
pub fn retreat(bytes: &[u8], cursor: &mut usize) -> usize {
    let start = (*cursor).min(bytes.len());
    if start == 0 {
        *cursor = 0;
        return 0;
    }
    *cursor = start - 1;
    while *cursor > 0 && !starts_unit(bytes[*cursor]) {
        *cursor -= 1;
    }
    start - *cursor
}

/// Advances over at most `count` units, stopping early at the end.
#[inline]
pub fn advance_multi(bytes: &[u8], cursor: &mut usize, count: usize) -> usize {
    let mut skipped = 0;
    for _ in 0..count {
        if *cursor >= bytes.len() {
            break;
        }
        skipped += advance(bytes, cursor);
    }
    skipped
}

/// Byte offset of the code point at index `position`, or `bytes.len()` when
/// the buffer holds fewer code points.
#[inline]
pub fn position_to_cursor(bytes: &[u8], position: usize) -> usize {
    let mut cursor = 0;
    advance_multi(bytes, &mut cursor, position);
    cursor
}

/// Like [`position_to_cursor`], but keeps hold of the buffer so it can be
/// edited at that position.
pub fn position_to_cursor_mut(bytes: &mut Vec<u8>, position: usize) -> Utf8PositionMut<'_> {
    let offset = position_to_cursor(bytes, position);
    Utf8PositionMut {
        buffer: bytes,
        offset,
    }
}

/// A buffer borrowed for editing at one unit boundary.
pub struct Utf8PositionMut<'a> {
    buffer: &'a mut Vec<u8>,
    offset: usize,
}

impl Utf8PositionMut<'_> {
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Splices `insertion` in verbatim; the inserted bytes are not checked.
    pub fn insert(self, insertion: &[u8]) {
        let at = self.offset;
        self.buffer.splice(at..at, insertion.iter().copied());
    }

    pub fn insert_code_point(self, codepoint: CodePoint) {
        self.insert(&utf8::encode_one(codepoint));
    }

    /// Removes `count` units from here, or everything up to the end for
    /// `None`.
    pub fn erase(self, count: Option<usize>) {
        let start = self.offset;
        let end = match count {
            Some(count) => {
                let mut end = start;
                advance_multi(self.buffer, &mut end, count);
                end
            }
            None => self.buffer.len(),
        };
        self.buffer.drain(start..end);
    }
}
