//! The fixed table relating accented and typographic characters to their UTF-8
//! form and their nearest ASCII letter, plus the case mapping over the same
//! characters.

use crate::utf::utf8sequence;
use crate::utf::CodePoint;

/// Byte used for characters that have neither an ASCII form nor a table entry.
pub const UNKNOWN_CHARACTER: u8 = b' ';

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ConversionItem {
    pub unicode: CodePoint,
    /// UTF-8 form, zero padded.
    pub utf8: [u8; 4],
    pub ascii: u8,
}

impl ConversionItem {
    const fn new(unicode: CodePoint, ascii: u8) -> Self {
        let encoded = utf8sequence::encode(unicode);
        let full = encoded.as_bytes();
        let mut utf8 = [0; 4];
        let mut i = 0;
        while i < full.len() && i < utf8.len() {
            utf8[i] = full[i];
            i += 1;
        }
        Self {
            unicode,
            utf8,
            ascii,
        }
    }

    pub fn utf8(&self) -> &[u8] {
        let len = self.utf8.iter().position(|&b| b == 0).unwrap_or(self.utf8.len());
        &self.utf8[..len]
    }
}

macro_rules! table {
    ($($unicode:literal => $ascii:literal),* $(,)?) => {
        [$(ConversionItem::new($unicode, $ascii)),*]
    };
}

/// Sorted by code point, one entry per code point.
pub static CONVERSION_TABLE: [ConversionItem; 240] = table![
    0x00A0 => b' ', 0x00A1 => b'!', 0x00A2 => b'c', 0x00A3 => b'L',
    0x00A4 => b'o', 0x00A5 => b'Y', 0x00A6 => b'|', 0x00A7 => b'S',
    0x00A8 => b'"', 0x00A9 => b'C', 0x00AA => b'a', 0x00AB => b'<',
    0x00AC => b'-', 0x00AD => b'-', 0x00AE => b'R', 0x00AF => b'-',
    0x00B0 => b'o', 0x00B1 => b'+', 0x00B2 => b'2', 0x00B3 => b'3',
    0x00B4 => b'\'', 0x00B5 => b'u', 0x00B6 => b'P', 0x00B7 => b'.',
    0x00B8 => b',', 0x00B9 => b'1', 0x00BA => b'o', 0x00BB => b'>',
    0x00BC => b'?', 0x00BD => b'?', 0x00BE => b'?', 0x00BF => b'?',
    0x00C0 => b'A', 0x00C1 => b'A', 0x00C2 => b'A', 0x00C3 => b'A',
    0x00C4 => b'A', 0x00C5 => b'A', 0x00C6 => b'A', 0x00C7 => b'C',
    0x00C8 => b'E', 0x00C9 => b'E', 0x00CA => b'E', 0x00CB => b'E',
    0x00CC => b'I', 0x00CD => b'I', 0x00CE => b'I', 0x00CF => b'I',
    0x00D0 => b'D', 0x00D1 => b'N', 0x00D2 => b'O', 0x00D3 => b'O',
    0x00D4 => b'O', 0x00D5 => b'O', 0x00D6 => b'O', 0x00D7 => b'x',
    0x00D8 => b'O', 0x00D9 => b'U', 0x00DA => b'U', 0x00DB => b'U',
    0x00DC => b'U', 0x00DD => b'Y', 0x00DE => b'T', 0x00DF => b's',
    0x00E0 => b'a', 0x00E1 => b'a', 0x00E2 => b'a', 0x00E3 => b'a',
    0x00E4 => b'a', 0x00E5 => b'a', 0x00E6 => b'a', 0x00E7 => b'c',
    0x00E8 => b'e', 0x00E9 => b'e', 0x00EA => b'e', 0x00EB => b'e',
    0x00EC => b'i', 0x00ED => b'i', 0x00EE => b'i', 0x00EF => b'i',
    0x00F0 => b'd', 0x00F1 => b'n', 0x00F2 => b'o', 0x00F3 => b'o',
    0x00F4 => b'o', 0x00F5 => b'o', 0x00F6 => b'o', 0x00F7 => b'/',
    0x00F8 => b'o', 0x00F9 => b'u', 0x00FA => b'u', 0x00FB => b'u',
    0x00FC => b'u', 0x00FD => b'y', 0x00FE => b't', 0x00FF => b'y',
    0x0100 => b'A', 0x0101 => b'a', 0x0102 => b'A', 0x0103 => b'a',
    0x0104 => b'A', 0x0105 => b'a', 0x0106 => b'C', 0x0107 => b'c',
    0x0108 => b'C', 0x0109 => b'c', 0x010A => b'C', 0x010B => b'c',
    0x010C => b'C', 0x010D => b'c', 0x010E => b'D', 0x010F => b'd',
    0x0110 => b'D', 0x0111 => b'd', 0x0112 => b'E', 0x0113 => b'e',
    0x0114 => b'E', 0x0115 => b'e', 0x0116 => b'E', 0x0117 => b'e',
    0x0118 => b'E', 0x0119 => b'e', 0x011A => b'E', 0x011B => b'e',
    0x011C => b'G', 0x011D => b'g', 0x011E => b'G', 0x011F => b'g',
    0x0120 => b'G', 0x0121 => b'g', 0x0122 => b'G', 0x0123 => b'g',
    0x0124 => b'H', 0x0125 => b'h', 0x0126 => b'H', 0x0127 => b'h',
    0x0128 => b'I', 0x0129 => b'i', 0x012A => b'I', 0x012B => b'i',
    0x012C => b'I', 0x012D => b'i', 0x012E => b'I', 0x012F => b'i',
    0x0130 => b'I', 0x0131 => b'i', 0x0132 => b'I', 0x0133 => b'i',
    0x0134 => b'J', 0x0135 => b'j', 0x0136 => b'K', 0x0137 => b'k',
    0x0138 => b'k', 0x0139 => b'L', 0x013A => b'l', 0x013B => b'L',
    0x013C => b'l', 0x013D => b'L', 0x013E => b'l', 0x013F => b'L',
    0x0140 => b'l', 0x0141 => b'L', 0x0142 => b'l', 0x0143 => b'N',
    0x0144 => b'n', 0x0145 => b'N', 0x0146 => b'n', 0x0147 => b'N',
    0x0148 => b'n', 0x0149 => b'n', 0x014A => b'N', 0x014B => b'n',
    0x014C => b'O', 0x014D => b'o', 0x014E => b'O', 0x014F => b'o',
    0x0150 => b'O', 0x0151 => b'o', 0x0152 => b'O', 0x0153 => b'o',
    0x0154 => b'R', 0x0155 => b'r', 0x0156 => b'R', 0x0157 => b'r',
    0x0158 => b'R', 0x0159 => b'r', 0x015A => b'S', 0x015B => b's',
    0x015C => b'S', 0x015D => b's', 0x015E => b'S', 0x015F => b's',
    0x0160 => b'S', 0x0161 => b's', 0x0162 => b'T', 0x0163 => b't',
    0x0164 => b'T', 0x0165 => b't', 0x0166 => b'T', 0x0167 => b't',
    0x0168 => b'U', 0x0169 => b'u', 0x016A => b'U', 0x016B => b'u',
    0x016C => b'U', 0x016D => b'u', 0x016E => b'U', 0x016F => b'u',
    0x0170 => b'U', 0x0171 => b'u', 0x0172 => b'U', 0x0173 => b'u',
    0x0174 => b'W', 0x0175 => b'w', 0x0176 => b'Y', 0x0177 => b'y',
    0x0178 => b'Y', 0x0179 => b'Z', 0x017A => b'z', 0x017B => b'Z',
    0x017C => b'z', 0x017D => b'Z', 0x017E => b'z', 0x017F => b's',
    0x0192 => b'f',
    0x2013 => b'-', 0x2014 => b'-', 0x2018 => b'\'', 0x2019 => b'\'',
    0x201A => b',', 0x201C => b'"', 0x201D => b'"', 0x201E => b'"',
    0x2020 => b'+', 0x2022 => b'*', 0x2026 => b'.', 0x2039 => b'<',
    0x203A => b'>', 0x20AC => b'E', 0x2122 => b'T',
];

pub fn find_table_index(codepoint: CodePoint) -> Option<usize> {
    CONVERSION_TABLE
        .binary_search_by_key(&codepoint, |item| item.unicode)
        .ok()
}

/// Nearest single ASCII byte for `codepoint`. 7-bit code points map to
/// themselves.
pub fn to_ascii_char(codepoint: CodePoint) -> u8 {
    if codepoint < 0x80 {
        return codepoint as u8;
    }
    match find_table_index(codepoint) {
        Some(index) => CONVERSION_TABLE[index].ascii,
        None => UNKNOWN_CHARACTER,
    }
}

/// Upper-case partner of `codepoint` inside ASCII and the table, if any.
fn upper_of(codepoint: CodePoint) -> Option<CodePoint> {
    match codepoint {
        0x61..=0x7A => Some(codepoint - 0x20),
        0xE0..=0xFE if codepoint != 0xF7 => Some(codepoint - 0x20),
        0xFF => Some(0x178),
        0x101..=0x17E if opens_case_pair(codepoint - 1) => Some(codepoint - 1),
        _ => None,
    }
}

fn lower_of(codepoint: CodePoint) -> Option<CodePoint> {
    match codepoint {
        0x41..=0x5A => Some(codepoint + 0x20),
        0xC0..=0xDE if codepoint != 0xD7 => Some(codepoint + 0x20),
        0x178 => Some(0xFF),
        _ if opens_case_pair(codepoint) => Some(codepoint + 1),
        _ => None,
    }
}

/// Latin Extended-A capitals whose small letter is the next code point.
/// `U+0130`/`U+0131` are not such a pair and `U+0138`, `U+0149`, `U+017F` have
/// no capital.
fn opens_case_pair(codepoint: CodePoint) -> bool {
    match codepoint {
        0x100..=0x12F | 0x132..=0x137 | 0x14A..=0x177 => codepoint % 2 == 0,
        0x139..=0x148 | 0x179..=0x17E => codepoint % 2 == 1,
        _ => false,
    }
}

pub fn to_upper(codepoint: CodePoint) -> CodePoint {
    upper_of(codepoint).unwrap_or(codepoint)
}

pub fn to_lower(codepoint: CodePoint) -> CodePoint {
    lower_of(codepoint).unwrap_or(codepoint)
}
