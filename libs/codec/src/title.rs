//! Message titles - the 4-byte wire tag identifying a message type
//!
//! Titles are compared as raw byte arrays: never case-normalized, never
//! interpreted as text beyond display formatting. Each message type exposes
//! its title as an associated constant; the dispatch registry (out of scope
//! here) keys its decoder table on these values.

use std::fmt;

/// Byte-exact 4-character tag identifying a message's semantic type
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageTitle([u8; 4]);

impl MessageTitle {
    /// Construct from a 4-character ASCII literal at definition time
    ///
    /// A tag of any other length is a misconfigured message definition and
    /// fails at constant evaluation.
    pub const fn new(tag: &str) -> Self {
        let bytes = tag.as_bytes();
        assert!(bytes.len() == 4, "message title must be exactly 4 bytes");
        Self([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    /// Construct from raw wire bytes on the receive path, order preserved
    pub const fn from_bytes(raw: [u8; 4]) -> Self {
        Self(raw)
    }

    /// The raw 4-byte wire representation
    pub const fn as_bytes(self) -> [u8; 4] {
        self.0
    }
}

impl fmt::Display for MessageTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
            for byte in self.0 {
                write!(f, "{}", byte as char)?;
            }
            Ok(())
        } else {
            write!(f, "0x{}", hex::encode(self.0))
        }
    }
}

impl fmt::Debug for MessageTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MessageTitle({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_preserves_byte_order() {
        let title = MessageTitle::new("CPgI");
        assert_eq!(title.as_bytes(), *b"CPgI");
        assert_eq!(title, MessageTitle::from_bytes(*b"CPgI"));
    }

    #[test]
    fn equality_is_byte_exact() {
        // No case normalization
        assert_ne!(MessageTitle::new("DCut"), MessageTitle::new("dcut"));
        assert_ne!(
            MessageTitle::from_bytes(*b"TlSr"),
            MessageTitle::from_bytes(*b"TlSR")
        );
    }

    #[test]
    fn display_falls_back_to_hex_for_unprintable_tags() {
        assert_eq!(MessageTitle::new("Time").to_string(), "Time");
        assert_eq!(MessageTitle::new("_ver").to_string(), "_ver");
        assert_eq!(
            MessageTitle::from_bytes([0x00, 0x01, 0x02, 0x03]).to_string(),
            "0x00010203"
        );
    }
}
