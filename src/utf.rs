pub mod utf16sequence;
pub mod utf8sequence;

/// One Unicode character value. No range is enforced: the legacy 6-byte
/// UTF-8 form reaches up to `0x7FFF_FFFF`.
pub type CodePoint = u32;

/// An incrementally assembled encoded unit.
///
/// A sequence is started from its first point with [`Utf::build`] and fed
/// the remaining points with [`Utf::add_point`] until [`Utf::is_complete`].
pub trait Utf: Sized {
    type Point;

    fn build(point: Self::Point) -> Self;
    fn add_point(&mut self, point: Self::Point) -> bool;
    fn is_complete(&self) -> bool;
    fn get_codepoint(&self) -> CodePoint;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endianness {
    BigEndian,
    LittleEndian,
}

impl Endianness {
    #[inline]
    pub const fn bytes_to_u16(self, bytes: [u8; 2]) -> u16 {
        match self {
            Endianness::BigEndian => u16::from_be_bytes(bytes),
            Endianness::LittleEndian => u16::from_le_bytes(bytes),
        }
    }
    #[inline]
    pub const fn u16_to_bytes(self, unit: u16) -> [u8; 2] {
        match self {
            Endianness::BigEndian => unit.to_be_bytes(),
            Endianness::LittleEndian => unit.to_le_bytes(),
        }
    }
}
