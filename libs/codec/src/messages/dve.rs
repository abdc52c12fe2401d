//! DVE key messages
//!
//! The change command is a sparse 64-byte frame: a 32-bit "changed
//! elements" mask announces which parameters the payload carries, and the
//! parameter slots sit at fixed offsets that are not contiguous with the
//! leading fields. The rotation slot lives at bytes 24..28.

use crate::buffers::{ensure_len, read_u32, read_u8, PayloadWriter};
use crate::message::{Message, Serializable};
use crate::title::MessageTitle;
use switchwire_types::option_set;
use switchwire_types::ProtocolResult;

option_set! {
    /// Which DVE parameters a change command carries
    DveChangeMask(u32) {
        ROTATION = 1 << 4;
    }
}

/// Byte offsets inside the 64-byte DVE frame
mod position {
    pub const CHANGED_ELEMENTS: usize = 0;
    pub const MIX_EFFECT: usize = 4;
    pub const UPSTREAM_KEY: usize = 5;
    // 6..24 are parameter slots this codec does not model yet
    pub const ROTATION: usize = 24;

    pub const LENGTH: usize = 64;
}

/// Ask the switcher to change an upstream key's DVE parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeKeyDve {
    pub changed_elements: DveChangeMask,
    pub mix_effect: u8,
    pub upstream_key: u8,
    /// Rotation in tenths of a degree
    pub rotation: u32,
}

impl ChangeKeyDve {
    /// Build a rotation change command
    pub fn new(mix_effect: u8, upstream_key: u8, rotation_degrees: f64) -> Self {
        Self {
            changed_elements: DveChangeMask::ROTATION,
            mix_effect,
            upstream_key,
            rotation: (rotation_degrees * 10.0).round() as u32,
        }
    }

    /// Rotation converted back to degrees
    pub fn rotation_degrees(&self) -> f64 {
        self.rotation as f64 / 10.0
    }
}

impl Message for ChangeKeyDve {
    const TITLE: MessageTitle = MessageTitle::new("CKDV");

    fn decode(payload: &[u8]) -> ProtocolResult<Self> {
        ensure_len(payload, position::LENGTH, "ChangeKeyDve")?;
        Ok(Self {
            changed_elements: DveChangeMask::from_raw(read_u32(
                payload,
                position::CHANGED_ELEMENTS,
            )),
            mix_effect: read_u8(payload, position::MIX_EFFECT),
            upstream_key: read_u8(payload, position::UPSTREAM_KEY),
            rotation: read_u32(payload, position::ROTATION),
        })
    }

    fn describe(&self) -> String {
        format!(
            "Change key DVE on ME{} key {}: rotation {}°, mask {:?}",
            self.mix_effect,
            self.upstream_key,
            self.rotation_degrees(),
            self.changed_elements,
        )
    }
}

impl Serializable for ChangeKeyDve {
    fn encode(&self) -> Vec<u8> {
        let mut writer = PayloadWriter::new(position::LENGTH);
        writer.put_u32(position::CHANGED_ELEMENTS, self.changed_elements.raw_value());
        writer.put_u8(position::MIX_EFFECT, self.mix_effect);
        writer.put_u8(position::UPSTREAM_KEY, self.upstream_key);
        writer.put_u32(position::ROTATION, self.rotation);
        writer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_sits_in_its_disjoint_slot() {
        let bytes = ChangeKeyDve::new(0, 1, 90.0).encode();
        assert_eq!(bytes.len(), 64);
        // Mask announces the rotation element
        assert_eq!(&bytes[0..4], &[0, 0, 0, 1 << 4]);
        assert_eq!(bytes[5], 1);
        // 900 tenths of a degree at bytes 24..28, gap before it all zero
        assert!(bytes[6..24].iter().all(|&b| b == 0));
        assert_eq!(&bytes[24..28], &900u32.to_be_bytes());
        assert!(bytes[28..].iter().all(|&b| b == 0));
    }

    #[test]
    fn degrees_round_trip_through_tenths() {
        let command = ChangeKeyDve::new(1, 0, 45.5);
        assert_eq!(command.rotation, 455);
        assert_eq!(command.rotation_degrees(), 45.5);
    }
}
