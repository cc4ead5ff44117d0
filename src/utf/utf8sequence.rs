use std::ops::Deref;

use crate::utf::*;

/// Marker bits of the first byte, indexed by sequence length.
const LEAD_MARKERS: [u8; 7] = [
    0,
    0,
    0b1100_0000,
    0b1110_0000,
    0b1111_0000,
    0b1111_1000,
    0b1111_1100,
];
/// Payload bits of the first byte, indexed by sequence length.
const LEAD_MASKS: [u8; 7] = [
    0,
    0xFF,
    0b0001_1111,
    0b0000_1111,
    0b0000_0111,
    0b0000_0011,
    0b0000_0001,
];

/// A UTF-8 unit being assembled from its lead byte and continuation bytes.
///
/// Lengths follow the pre-RFC 3629 scheme, so lead bytes `0xF8..` open 5- and
/// 6-byte units. Continuation bytes are not checked: each contributes its low
/// six bits whatever its top bits are.
pub struct Utf8Sequence {
    full_length: u8,
    current_length: u8,
    bytes: [u8; 6],
}

impl Utf for Utf8Sequence {
    type Point = u8;

    #[inline]
    fn build(byte: u8) -> Self {
        let mut bytes = [0; 6];
        bytes[0] = byte;
        Self {
            full_length: sequence_length(byte) as u8,
            current_length: 1,
            bytes,
        }
    }
    #[inline]
    fn add_point(&mut self, point: u8) -> bool {
        if self.is_complete() {
            return false;
        }
        self.bytes[self.current_len()] = point;
        self.current_length += 1;
        true
    }
    #[inline]
    fn is_complete(&self) -> bool {
        self.current_length == self.full_length
    }
    /// Incomplete units read as `0`.
    #[inline]
    fn get_codepoint(&self) -> CodePoint {
        if !self.is_complete() {
            return 0;
        }
        let full_len = self.full_len();
        let mut codepoint = (self.bytes[0] & LEAD_MASKS[full_len]) as CodePoint;
        for byte in &self.bytes[1..full_len] {
            codepoint = (codepoint << 6) | (byte & 0b0011_1111) as CodePoint;
        }
        codepoint
    }
}

impl Utf8Sequence {
    pub const fn current_len(&self) -> usize {
        self.current_length as usize
    }
    pub const fn full_len(&self) -> usize {
        self.full_length as usize
    }
}

/// Number of bytes in the unit opened by `lead`.
///
/// Anything below `0xC0` (ASCII, but also a stray continuation byte) stands
/// alone.
#[inline]
pub const fn sequence_length(lead: u8) -> usize {
    match lead {
        0xFC.. => 6,
        0xF8.. => 5,
        0xF0.. => 4,
        0xE0.. => 3,
        0xC0.. => 2,
        _ => 1,
    }
}

/// The UTF-8 form of one code point, kept on the stack.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct EncodedUtf8 {
    bytes: [u8; 6],
    len: u8,
}

impl EncodedUtf8 {
    #[inline]
    pub const fn as_bytes(&self) -> &[u8] {
        self.bytes.as_slice().split_at(self.len as usize).0
    }
    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Deref for EncodedUtf8 {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for EncodedUtf8 {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl std::fmt::Debug for EncodedUtf8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_bytes()).finish()
    }
}

/// Shortest UTF-8 form of `codepoint`, using up to 6 bytes.
///
/// Bit 31 does not fit the 6-byte form and is dropped.
pub const fn encode(codepoint: CodePoint) -> EncodedUtf8 {
    let codepoint = codepoint & 0x7FFF_FFFF;
    let len = match codepoint {
        0..=0x7F => 1,
        0x80..=0x7FF => 2,
        0x800..=0xFFFF => 3,
        0x1_0000..=0x1F_FFFF => 4,
        0x20_0000..=0x3FF_FFFF => 5,
        _ => 6,
    };
    let mut bytes = [0u8; 6];
    if len == 1 {
        bytes[0] = codepoint as u8;
        return EncodedUtf8 { bytes, len: 1 };
    }
    let mut rest = codepoint;
    let mut i = len - 1;
    while i > 0 {
        bytes[i] = 0b1000_0000 | (rest & 0b0011_1111) as u8;
        rest >>= 6;
        i -= 1;
    }
    bytes[0] = LEAD_MARKERS[len] | rest as u8;
    EncodedUtf8 {
        bytes,
        len: len as u8,
    }
}
