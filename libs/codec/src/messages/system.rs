//! Session and device-status messages
//!
//! Timecode exchange plus the descriptive records a device sends while a
//! connection is being established: protocol version, product information,
//! warnings, and the initiation-complete marker.

use crate::buffers::{ensure_len, read_terminated_text, read_u16, read_u8, PayloadWriter};
use crate::message::{Message, Serializable};
use crate::title::MessageTitle;
use std::borrow::Cow;
use switchwire_types::ProtocolResult;

/// Ask the switcher for its current timecode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestTimecode;

impl Message for RequestTimecode {
    const TITLE: MessageTitle = MessageTitle::new("TiRq");

    fn decode(_payload: &[u8]) -> ProtocolResult<Self> {
        Ok(Self)
    }

    fn describe(&self) -> String {
        "Request timecode".to_string()
    }
}

impl Serializable for RequestTimecode {
    fn encode(&self) -> Vec<u8> {
        // Zero-length payload: the title alone carries the request
        Vec::new()
    }
}

/// The switcher reports its current timecode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimecodeChanged {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub frame: u8,
}

impl TimecodeChanged {
    const LENGTH: usize = 8;

    pub fn new(hour: u8, minute: u8, second: u8, frame: u8) -> Self {
        Self {
            hour,
            minute,
            second,
            frame,
        }
    }
}

impl Message for TimecodeChanged {
    const TITLE: MessageTitle = MessageTitle::new("Time");

    fn decode(payload: &[u8]) -> ProtocolResult<Self> {
        ensure_len(payload, Self::LENGTH, "TimecodeChanged")?;
        Ok(Self {
            hour: read_u8(payload, 0),
            minute: read_u8(payload, 1),
            second: read_u8(payload, 2),
            frame: read_u8(payload, 3),
        })
    }

    fn describe(&self) -> String {
        format!(
            "Switcher time {:02}:{:02}:{:02}.{:02}",
            self.hour, self.minute, self.second, self.frame
        )
    }
}

impl Serializable for TimecodeChanged {
    fn encode(&self) -> Vec<u8> {
        let mut writer = PayloadWriter::new(Self::LENGTH);
        writer.put_u8(0, self.hour);
        writer.put_u8(1, self.minute);
        writer.put_u8(2, self.second);
        writer.put_u8(3, self.frame);
        // Fixed trailer 00 00 03 E8
        writer.put_u8(6, 0x03);
        writer.put_u8(7, 0xE8);
        writer.finish()
    }
}

/// The switcher signals that connection initiation finished
///
/// Sent at the end of the initial state dump. Decode-only: a controller
/// never emits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitiationComplete;

impl Message for InitiationComplete {
    const TITLE: MessageTitle = MessageTitle::new("InCm");

    fn decode(payload: &[u8]) -> ProtocolResult<Self> {
        tracing::debug!(payload = %hex::encode(payload), "initiation complete");
        Ok(Self)
    }

    fn describe(&self) -> String {
        "Initiation complete".to_string()
    }
}

/// The protocol version the device speaks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolVersion {
    pub major: u16,
    pub minor: u16,
}

impl ProtocolVersion {
    const LENGTH: usize = 4;

    pub fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }
}

impl Message for ProtocolVersion {
    const TITLE: MessageTitle = MessageTitle::new("_ver");

    fn decode(payload: &[u8]) -> ProtocolResult<Self> {
        ensure_len(payload, Self::LENGTH, "ProtocolVersion")?;
        Ok(Self {
            major: read_u16(payload, 0),
            minor: read_u16(payload, 2),
        })
    }

    fn describe(&self) -> String {
        format!("Protocol version {}.{}", self.major, self.minor)
    }
}

impl Serializable for ProtocolVersion {
    fn encode(&self) -> Vec<u8> {
        let mut writer = PayloadWriter::new(Self::LENGTH);
        writer.put_u16(0, self.major);
        writer.put_u16(2, self.minor);
        writer.finish()
    }
}

/// The device's product identification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductInfo {
    name: Vec<u8>,
    pub model: u8,
}

impl ProductInfo {
    const NAME_WIDTH: usize = 40;
    const MODEL: usize = 40;
    const LENGTH: usize = 44;

    pub fn new(name: &str, model: u8) -> Self {
        let bytes = name.as_bytes();
        let mut end = bytes
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(bytes.len())
            .min(Self::NAME_WIDTH);
        while !name.is_char_boundary(end) {
            end -= 1;
        }
        Self {
            name: bytes[..end].to_vec(),
            model,
        }
    }

    /// Product name, up to 40 bytes of UTF-8
    pub fn name(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.name)
    }
}

impl Message for ProductInfo {
    const TITLE: MessageTitle = MessageTitle::new("_pin");

    fn decode(payload: &[u8]) -> ProtocolResult<Self> {
        ensure_len(payload, Self::LENGTH, "ProductInfo")?;
        Ok(Self {
            name: read_terminated_text(payload, 0..Self::NAME_WIDTH).to_vec(),
            model: read_u8(payload, Self::MODEL),
        })
    }

    fn describe(&self) -> String {
        format!("Product {:?} (model {})", self.name(), self.model)
    }
}

impl Serializable for ProductInfo {
    fn encode(&self) -> Vec<u8> {
        let mut writer = PayloadWriter::new(Self::LENGTH);
        writer.put_bytes(0..Self::NAME_WIDTH, &self.name);
        writer.put_u8(Self::MODEL, self.model);
        writer.finish()
    }
}

/// A warning message from the device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    text: Vec<u8>,
}

impl Warning {
    const LENGTH: usize = 44;

    pub fn new(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut end = bytes
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(bytes.len())
            .min(Self::LENGTH);
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        Self {
            text: bytes[..end].to_vec(),
        }
    }

    /// Warning text, up to 44 bytes of UTF-8
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.text)
    }
}

impl Message for Warning {
    const TITLE: MessageTitle = MessageTitle::new("Warn");

    fn decode(payload: &[u8]) -> ProtocolResult<Self> {
        ensure_len(payload, Self::LENGTH, "Warning")?;
        Ok(Self {
            text: read_terminated_text(payload, 0..Self::LENGTH).to_vec(),
        })
    }

    fn describe(&self) -> String {
        format!("Warning: {}", self.text())
    }
}

impl Serializable for Warning {
    fn encode(&self) -> Vec<u8> {
        let mut writer = PayloadWriter::new(Self::LENGTH);
        writer.put_bytes(0..Self::LENGTH, &self.text);
        writer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timecode_request_has_empty_payload() {
        assert!(RequestTimecode.encode().is_empty());
        assert_eq!(RequestTimecode::decode(&[]), Ok(RequestTimecode));
    }

    #[test]
    fn timecode_event_carries_the_fixed_trailer() {
        let bytes = TimecodeChanged::new(10, 42, 13, 24).encode();
        assert_eq!(bytes, [10, 42, 13, 24, 0x00, 0x00, 0x03, 0xE8]);
    }

    #[test]
    fn product_name_clamps_to_forty_bytes() {
        let info = ProductInfo::new(&"x".repeat(60), 7);
        assert_eq!(info.name().len(), 40);
        let encoded = info.encode();
        assert_eq!(encoded.len(), 44);
        assert_eq!(encoded[40], 7);
        assert_eq!(ProductInfo::decode(&encoded), Ok(info));
    }

    #[test]
    fn warning_text_round_trips() {
        let warning = Warning::new("media pool almost full");
        let encoded = warning.encode();
        assert_eq!(encoded.len(), 44);
        assert_eq!(Warning::decode(&encoded), Ok(warning));
    }
}
