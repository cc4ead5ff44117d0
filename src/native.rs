//! Text in the form the operating system's string APIs take.
//!
//! Windows wide-character APIs take UTF-16; elsewhere the native form is
//! assumed to already be UTF-8 and conversion is a copy.

#[cfg(windows)]
mod os {
    use crate::utf16::{utf16_to_utf8, utf8_to_utf16};

    pub type NativeString = Vec<u16>;

    pub fn utf8_to_system_native(bytes: &[u8]) -> NativeString {
        utf8_to_utf16(bytes)
    }

    pub fn system_native_to_utf8(native: &[u16]) -> Vec<u8> {
        utf16_to_utf8(native)
    }
}

#[cfg(not(windows))]
mod os {
    pub type NativeString = Vec<u8>;

    pub fn utf8_to_system_native(bytes: &[u8]) -> NativeString {
        bytes.to_vec()
    }

    pub fn system_native_to_utf8(native: &[u8]) -> Vec<u8> {
        native.to_vec()
    }
}

pub use os::{system_native_to_utf8, utf8_to_system_native, NativeString};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_round_trip() {
        let text = "na\u{ef}ve \u{1F600}".as_bytes();
        let native = utf8_to_system_native(text);
        assert_eq!(system_native_to_utf8(&native), text);
    }

    #[cfg(not(windows))]
    #[test]
    fn passthrough_keeps_bytes() {
        let bytes = b"caf\xC3\xA9\xFF";
        assert_eq!(utf8_to_system_native(bytes), bytes);
    }
}
