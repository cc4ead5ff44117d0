//! Single code point UTF-8 decoding and encoding, and the whole-buffer
//! conversions to and from raw code points built on them.

use log::trace;

use crate::cursor;
use crate::utf::utf8sequence::{self, EncodedUtf8, Utf8Sequence};
use crate::utf::{CodePoint, Utf};

/// Decodes the unit at `cursor` and moves the cursor past it.
///
/// Returns the code point and the number of bytes consumed. When the buffer
/// ends inside the unit, the remaining bytes are consumed and the code point
/// is `0`, so a `0` right before the end means "incomplete", not NUL. At the
/// end of the buffer `(0, 0)` is returned.
pub fn decode_one(bytes: &[u8], cursor: &mut usize) -> (CodePoint, usize) {
    let Some(&lead) = bytes.get(*cursor) else {
        return (0, 0);
    };
    let start = *cursor;
    let mut sequence = Utf8Sequence::build(lead);
    *cursor += 1;
    while !sequence.is_complete() {
        let Some(&byte) = bytes.get(*cursor) else {
            trace!(
                "truncated UTF-8 unit at byte {start}: {} of {} bytes",
                sequence.current_len(),
                sequence.full_len()
            );
            return (0, *cursor - start);
        };
        sequence.add_point(byte);
        *cursor += 1;
    }
    (sequence.get_codepoint(), *cursor - start)
}

#[inline]
pub fn encode_one(codepoint: CodePoint) -> EncodedUtf8 {
    utf8sequence::encode(codepoint)
}

/// The code point at code point index `position`; `0` past the end.
pub fn decode_at(bytes: &[u8], position: usize) -> CodePoint {
    let mut cursor = cursor::position_to_cursor(bytes, position);
    decode_one(bytes, &mut cursor).0
}

/// Iterator over the code points of a UTF-8 buffer.
#[derive(Clone)]
pub struct CodePoints<'a> {
    bytes: &'a [u8],
    cursor: usize,
}

impl<'a> CodePoints<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, cursor: 0 }
    }
    /// Byte offset of the next unit.
    pub fn offset(&self) -> usize {
        self.cursor
    }
}

impl Iterator for CodePoints<'_> {
    type Item = CodePoint;

    #[inline]
    fn next(&mut self) -> Option<CodePoint> {
        match decode_one(self.bytes, &mut self.cursor) {
            (_, 0) => None,
            (codepoint, _) => Some(codepoint),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bytes.len().saturating_sub(self.cursor);
        (remaining.div_ceil(6), Some(remaining))
    }
}

impl std::iter::FusedIterator for CodePoints<'_> {}

pub fn code_points(bytes: &[u8]) -> CodePoints<'_> {
    CodePoints::new(bytes)
}

pub fn utf8_to_unicode(bytes: &[u8]) -> Vec<CodePoint> {
    code_points(bytes).collect()
}

pub fn unicode_to_utf8(codepoints: &[CodePoint]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(codepoints.len());
    for &codepoint in codepoints {
        bytes.extend_from_slice(&encode_one(codepoint));
    }
    bytes
}

#[cfg(test)]
mod tests {
    use quickcheck::QuickCheck;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(b"A", 0x41, 1)]
    #[case(b"\xC3\xA9", 0xE9, 2)]
    #[case(b"\xE2\x82\xAC", 0x20AC, 3)]
    #[case(b"\xF0\x9F\x98\x80", 0x1F600, 4)]
    #[case(b"\xF8\x88\x80\x80\x80", 0x20_0000, 5)]
    #[case(b"\xFC\x84\x80\x80\x80\x80", 0x400_0000, 6)]
    #[case(b"\x80", 0x80, 1)]
    fn decodes_each_form(
        #[case] bytes: &[u8],
        #[case] codepoint: CodePoint,
        #[case] consumed: usize,
    ) {
        let mut cursor = 0;
        assert_eq!(decode_one(bytes, &mut cursor), (codepoint, consumed));
        assert_eq!(cursor, bytes.len());
    }

    #[rstest]
    #[case(b"\xC3", 1)]
    #[case(b"\xE2\x82", 2)]
    #[case(b"\xF0\x9F\x98", 3)]
    #[case(b"\xFC\x84", 2)]
    fn truncated_unit_decodes_to_zero(#[case] bytes: &[u8], #[case] consumed: usize) {
        let mut cursor = 0;
        assert_eq!(decode_one(bytes, &mut cursor), (0, consumed));
        assert_eq!(cursor, bytes.len());
    }

    #[test]
    fn truncation_one_byte_before_end() {
        let bytes = b"ab\xE2";
        let mut cursor = 2;
        assert_eq!(decode_one(bytes, &mut cursor), (0, 1));
        assert_eq!(cursor, 3);
        assert_eq!(decode_one(bytes, &mut cursor), (0, 0));
        assert_eq!(cursor, 3);
    }

    #[test]
    fn decode_at_positions() {
        let bytes = b"caf\xC3\xA9!";
        assert_eq!(decode_at(bytes, 0), 'c' as CodePoint);
        assert_eq!(decode_at(bytes, 3), 0xE9);
        assert_eq!(decode_at(bytes, 4), '!' as CodePoint);
        assert_eq!(decode_at(bytes, 9), 0);
    }

    #[test]
    fn iterator_tracks_offset() {
        let mut points = code_points(b"a\xC3\xA9b");
        assert_eq!(points.next(), Some(0x61));
        assert_eq!(points.offset(), 1);
        assert_eq!(points.next(), Some(0xE9));
        assert_eq!(points.offset(), 3);
        assert_eq!(points.next(), Some(0x62));
        assert_eq!(points.next(), None);
        assert_eq!(points.next(), None);
    }

    #[test]
    fn unicode_strings() {
        let text = "h\u{e9}llo \u{1F600}";
        let expected: Vec<CodePoint> = text.chars().map(CodePoint::from).collect();
        assert_eq!(utf8_to_unicode(text.as_bytes()), expected);
        assert_eq!(unicode_to_utf8(&expected), text.as_bytes());
        assert_eq!(utf8_to_unicode(b"a\xE2\x82"), vec![0x61, 0]);
    }

    #[test]
    fn encode_then_decode_round_trips() {
        fn prop(codepoint: u32) -> bool {
            let codepoint = codepoint & 0x7FFF_FFFF;
            let encoded = encode_one(codepoint);
            let mut cursor = 0;
            decode_one(&encoded, &mut cursor) == (codepoint, encoded.len())
        }
        QuickCheck::new().quickcheck(prop as fn(u32) -> bool);
    }

    #[test]
    fn matches_std_for_scalar_values() {
        fn prop(c: char) -> bool {
            let mut buf = [0; 4];
            encode_one(c as CodePoint).as_bytes() == c.encode_utf8(&mut buf).as_bytes()
        }
        QuickCheck::new().quickcheck(prop as fn(char) -> bool);
    }
}
