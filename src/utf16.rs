//! Whole-buffer conversion between UTF-8 and UTF-16.

use itertools::put_back;
use log::trace;

use crate::utf::utf16sequence::{split_surrogates, Utf16Sequence};
use crate::utf::{CodePoint, Endianness, Utf};
use crate::utf8::{code_points, encode_one};

/// Stand-in for code points too large for a surrogate pair.
pub const REPLACEMENT_UNIT: u16 = 0xFFFD;

/// BMP code points become one unit, code points up to `0x10FFFF` a surrogate
/// pair. Larger values from the legacy 5- and 6-byte forms become
/// [`REPLACEMENT_UNIT`].
pub fn utf8_to_utf16(bytes: &[u8]) -> Vec<u16> {
    let mut units = Vec::with_capacity(bytes.len());
    for codepoint in code_points(bytes) {
        if let Ok(unit) = u16::try_from(codepoint) {
            units.push(unit);
        } else if let Some(pair) = split_surrogates(codepoint) {
            units.extend_from_slice(&pair);
        } else {
            trace!("code point {codepoint:#x} has no UTF-16 form");
            units.push(REPLACEMENT_UNIT);
        }
    }
    units
}

/// Surrogate pairs are joined; an unmatched surrogate is encoded as if its
/// raw value were a code point.
pub fn utf16_to_utf8(units: &[u16]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(units.len());
    let mut units = put_back(units.iter().copied());
    while let Some(unit) = units.next() {
        let mut sequence = Utf16Sequence::build(unit);
        if !sequence.is_complete() {
            match units.next() {
                Some(next) if sequence.add_point(next) => {}
                Some(next) => {
                    units.put_back(next);
                }
                None => {}
            }
        }
        if sequence.is_surrogate() && !sequence.is_complete() {
            trace!("unmatched surrogate {unit:#06x}");
        }
        let codepoint: CodePoint = sequence.get_codepoint();
        bytes.extend_from_slice(&encode_one(codepoint));
    }
    bytes
}

/// Pairs up bytes into units. A dangling odd byte is dropped.
pub fn utf16_from_bytes(bytes: &[u8], endianness: Endianness) -> Vec<u16> {
    let chunks = bytes.chunks_exact(2);
    if !chunks.remainder().is_empty() {
        trace!("dropping odd trailing byte of UTF-16 input");
    }
    chunks
        .map(|pair| endianness.bytes_to_u16([pair[0], pair[1]]))
        .collect()
}

pub fn utf16_to_bytes(units: &[u16], endianness: Endianness) -> Vec<u8> {
    units
        .iter()
        .flat_map(|&unit| endianness.u16_to_bytes(unit))
        .collect()
}
