//! Conversion between UTF-8, UTF-16, raw code points and the single-byte
//! ASCII and ISO-8859-1 encodings, with code point indexed editing of UTF-8
//! byte buffers.
//!
//! Buffers are plain bytes and are never rejected: truncated or malformed
//! units decode on a best-effort basis, and offsets past the end of a buffer
//! clamp to its end.
//!
//! ```
//! use unicode_conv::{insert_code_point, length_in_code_points, remove_special_chars, substring};
//!
//! let cafe = "caf\u{e9}".as_bytes();
//! assert_eq!(length_in_code_points(cafe), 4);
//! assert_eq!(substring(cafe, 3, Some(1)), b"\xC3\xA9");
//! assert_eq!(remove_special_chars(cafe), b"cafe");
//!
//! let mut ab = b"ab".to_vec();
//! insert_code_point(&mut ab, 1, 0xE9);
//! assert_eq!(ab, "a\u{e9}b".as_bytes());
//! ```

pub mod cli;
pub mod cursor;
pub mod error;
pub mod legacy;
pub mod native;
pub mod position;
pub mod table;
pub mod utf;
pub mod utf16;
pub mod utf8;

pub use cursor::{advance, advance_multi, position_to_cursor, position_to_cursor_mut, retreat};
pub use legacy::{iso8859_1_to_utf8, remove_special_chars, unicode_to_ascii, utf8_to_iso8859_1};
pub use native::{system_native_to_utf8, utf8_to_system_native};
pub use position::{
    code_point_offset_to_raw_offset, erase, insert, insert_code_point, length_in_code_points,
    raw_offset_to_code_point_offset, substring, translate_raw_offset,
};
pub use table::{find_table_index, to_ascii_char, to_lower, to_upper, UNKNOWN_CHARACTER};
pub use utf::{CodePoint, Endianness};
pub use utf16::{utf16_to_utf8, utf8_to_utf16};
pub use utf8::{code_points, decode_at, decode_one, encode_one, unicode_to_utf8, utf8_to_unicode};
