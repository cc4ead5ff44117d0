use crate::utf::*;

#[derive(Clone, Copy)]
enum Utf16Type {
    Bmp(u16),
    Surrogate { data: [u16; 2], is_complete: bool },
}

/// A UTF-16 unit: one BMP code unit, or a leading surrogate waiting for its
/// trailing half.
///
/// A trailing surrogate met on its own is kept as a plain `Bmp` unit, and a
/// leading surrogate that never gets its partner reads back as its raw value.
pub struct Utf16Sequence(Utf16Type);

impl Utf for Utf16Sequence {
    type Point = u16;

    #[inline]
    fn build(point: u16) -> Self {
        if is_leading_surrogate(point) {
            Self(Utf16Type::Surrogate {
                data: [point, 0],
                is_complete: false,
            })
        } else {
            Self(Utf16Type::Bmp(point))
        }
    }

    #[inline]
    fn add_point(&mut self, point: u16) -> bool {
        match self.0 {
            Utf16Type::Bmp(_) => false,
            Utf16Type::Surrogate {
                ref mut data,
                ref mut is_complete,
            } => {
                if *is_complete || !is_trailing_surrogate(point) {
                    false
                } else {
                    data[1] = point;
                    *is_complete = true;
                    true
                }
            }
        }
    }

    #[inline]
    fn is_complete(&self) -> bool {
        match self.0 {
            Utf16Type::Bmp(_) => true,
            Utf16Type::Surrogate { is_complete, .. } => is_complete,
        }
    }

    #[inline]
    fn get_codepoint(&self) -> CodePoint {
        match self.0 {
            Utf16Type::Bmp(unit) => unit as CodePoint,
            Utf16Type::Surrogate {
                data,
                is_complete: false,
            } => data[0] as CodePoint,
            Utf16Type::Surrogate {
                data,
                is_complete: true,
            } => {
                let high = data[0] as CodePoint;
                let low = data[1] as CodePoint;
                ((high - 0xD800) * 0x400) + (low - 0xDC00) + 0x1_0000
            }
        }
    }
}

impl Utf16Sequence {
    pub const fn is_surrogate(&self) -> bool {
        matches!(self.0, Utf16Type::Surrogate { .. })
    }
}

#[inline]
pub const fn is_leading_surrogate(unit: u16) -> bool {
    matches!(unit, 0xD800..=0xDBFF)
}

#[inline]
pub const fn is_trailing_surrogate(unit: u16) -> bool {
    matches!(unit, 0xDC00..=0xDFFF)
}

/// Splits a code point above the BMP into its surrogate pair. BMP values and
/// anything past `0x10FFFF` come back as `None`.
#[inline]
pub const fn split_surrogates(codepoint: CodePoint) -> Option<[u16; 2]> {
    if codepoint < 0x1_0000 || codepoint > 0x10_FFFF {
        return None;
    }
    let offset = codepoint - 0x1_0000;
    Some([
        (0xD800 + (offset >> 10)) as u16,
        (0xDC00 + (offset & 0x3FF)) as u16,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmp_unit_is_complete() {
        let sequence = Utf16Sequence::build(0x00E9);
        assert!(sequence.is_complete());
        assert!(!sequence.is_surrogate());
        assert_eq!(sequence.get_codepoint(), 0xE9);
    }

    #[test]
    fn surrogate_pair_combines() {
        let mut sequence = Utf16Sequence::build(0xD83D);
        assert!(sequence.is_surrogate());
        assert!(!sequence.is_complete());
        assert!(sequence.add_point(0xDE00));
        assert!(sequence.is_complete());
        assert_eq!(sequence.get_codepoint(), 0x1F600);
        assert!(!sequence.add_point(0xDE00));
    }

    #[test]
    fn leading_surrogate_rejects_non_trailing() {
        let mut sequence = Utf16Sequence::build(0xD83D);
        assert!(!sequence.add_point(0x0041));
        assert_eq!(sequence.get_codepoint(), 0xD83D);
    }

    #[test]
    fn lone_trailing_surrogate_is_plain() {
        let mut sequence = Utf16Sequence::build(0xDC00);
        assert!(sequence.is_complete());
        assert!(!sequence.add_point(0xDC00));
        assert_eq!(sequence.get_codepoint(), 0xDC00);
    }

    #[test]
    fn split_and_rebuild() {
        assert_eq!(split_surrogates(0x1F600), Some([0xD83D, 0xDE00]));
        assert_eq!(split_surrogates(0x1_0000), Some([0xD800, 0xDC00]));
        assert_eq!(split_surrogates(0x10_FFFF), Some([0xDBFF, 0xDFFF]));
        assert_eq!(split_surrogates(0xFFFF), None);
        assert_eq!(split_surrogates(0x11_0000), None);
    }
}
