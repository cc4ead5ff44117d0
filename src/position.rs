//! Code point indexed operations over UTF-8 buffers.
//!
//! Offsets past the end of a buffer are treated as the end; `None` counts
//! mean "to the end".

use crate::cursor::{advance, advance_multi, position_to_cursor, position_to_cursor_mut};
use crate::utf::CodePoint;

pub fn length_in_code_points(bytes: &[u8]) -> usize {
    let mut cursor = 0;
    let mut count = 0;
    while advance(bytes, &mut cursor) > 0 {
        count += 1;
    }
    count
}

/// The bytes of code points `[start, start + count)`.
pub fn substring(bytes: &[u8], start: usize, count: Option<usize>) -> &[u8] {
    let begin = position_to_cursor(bytes, start);
    let end = match count {
        Some(count) => {
            let mut end = begin;
            advance_multi(bytes, &mut end, count);
            end
        }
        None => bytes.len(),
    };
    &bytes[begin..end]
}

pub fn erase(bytes: &mut Vec<u8>, start: usize, count: Option<usize>) {
    position_to_cursor_mut(bytes, start).erase(count);
}

pub fn insert(bytes: &mut Vec<u8>, start: usize, insertion: &[u8]) {
    position_to_cursor_mut(bytes, start).insert(insertion);
}

pub fn insert_code_point(bytes: &mut Vec<u8>, start: usize, codepoint: CodePoint) {
    position_to_cursor_mut(bytes, start).insert_code_point(codepoint);
}

/// Number of whole units lying before byte offset `raw`. An offset inside a
/// unit counts up to that unit's start.
pub fn raw_offset_to_code_point_offset(bytes: &[u8], raw: usize) -> usize {
    let mut cursor = 0;
    let mut position = 0;
    while cursor < bytes.len() {
        let mut next = cursor;
        advance(bytes, &mut next);
        if next > raw {
            break;
        }
        cursor = next;
        position += 1;
    }
    position
}

/// Byte offset of code point index `position`, clamped to the buffer end.
pub fn code_point_offset_to_raw_offset(bytes: &[u8], position: usize) -> usize {
    position_to_cursor(bytes, position)
}

/// Carries a byte offset in `source` over to the byte offset of the same code
/// point index in `dest`.
pub fn translate_raw_offset(source: &[u8], offset: usize, dest: &[u8]) -> usize {
    code_point_offset_to_raw_offset(dest, raw_offset_to_code_point_offset(source, offset))
}

#[cfg(test)]
mod tests {
    use quickcheck::QuickCheck;
    use rstest::rstest;

    use super::*;

    const CAFE: &[u8] = b"caf\xC3\xA9";

    #[test]
    fn lengths() {
        assert_eq!(length_in_code_points(CAFE), 4);
        assert_eq!(length_in_code_points(b""), 0);
        assert_eq!(length_in_code_points("\u{1F600}x".as_bytes()), 2);
    }

    #[rstest]
    #[case(3, Some(1), b"\xC3\xA9")]
    #[case(0, Some(2), b"ca")]
    #[case(1, None, b"af\xC3\xA9")]
    #[case(2, Some(50), b"f\xC3\xA9")]
    #[case(9, Some(1), b"")]
    #[case(4, None, b"")]
    fn substrings(#[case] start: usize, #[case] count: Option<usize>, #[case] expected: &[u8]) {
        assert_eq!(substring(CAFE, start, count), expected);
    }

    #[rstest]
    #[case(3, Some(1), b"caf")]
    #[case(0, Some(1), b"af\xC3\xA9")]
    #[case(1, None, b"c")]
    #[case(1, Some(0), b"caf\xC3\xA9")]
    #[case(8, Some(2), b"caf\xC3\xA9")]
    fn erasing(#[case] start: usize, #[case] count: Option<usize>, #[case] expected: &[u8]) {
        let mut bytes = CAFE.to_vec();
        erase(&mut bytes, start, count);
        assert_eq!(bytes, expected);
    }

    #[test]
    fn inserting_bytes() {
        let mut bytes = CAFE.to_vec();
        insert(&mut bytes, 4, b" au lait");
        assert_eq!(bytes, b"caf\xC3\xA9 au lait");
        insert(&mut bytes, 100, b"!");
        assert_eq!(bytes, b"caf\xC3\xA9 au lait!");
        insert(&mut bytes, 0, "\u{2615}".as_bytes());
        assert_eq!(length_in_code_points(&bytes), 14);
    }

    #[test]
    fn inserting_code_point() {
        let mut bytes = b"ab".to_vec();
        insert_code_point(&mut bytes, 1, 0xE9);
        assert_eq!(bytes, b"a\xC3\xA9b");
    }

    #[rstest]
    #[case(0, 0)]
    #[case(3, 3)]
    #[case(4, 3)]
    #[case(5, 4)]
    #[case(50, 4)]
    fn raw_to_code_point(#[case] raw: usize, #[case] position: usize) {
        assert_eq!(raw_offset_to_code_point_offset(CAFE, raw), position);
    }

    #[test]
    fn code_point_to_raw() {
        assert_eq!(code_point_offset_to_raw_offset(CAFE, 3), 3);
        assert_eq!(code_point_offset_to_raw_offset(CAFE, 4), 5);
        assert_eq!(code_point_offset_to_raw_offset(CAFE, 7), 5);
    }

    #[test]
    fn translation_between_buffers() {
        // Same text: UTF-8 on one side, its ASCII downgrade on the other.
        assert_eq!(translate_raw_offset(b"d\xC3\xA9j\xC3\xA0 vu", 5, b"deja vu"), 3);
        assert_eq!(translate_raw_offset(b"deja vu", 4, b"d\xC3\xA9j\xC3\xA0 vu"), 6);
    }

    #[test]
    fn raw_offsets_snap_to_boundaries() {
        fn prop(text: String, raw: usize) -> bool {
            let bytes = text.as_bytes();
            let raw = raw % (bytes.len() + 2);
            let mut expected = raw.min(bytes.len());
            while !text.is_char_boundary(expected) {
                expected -= 1;
            }
            let position = raw_offset_to_code_point_offset(bytes, raw);
            code_point_offset_to_raw_offset(bytes, position) == expected
        }
        QuickCheck::new().quickcheck(prop as fn(String, usize) -> bool);
    }
}
