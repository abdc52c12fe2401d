//! Tally light states

use crate::errors::{ProtocolError, ProtocolResult};
use num_enum::TryFromPrimitive;

/// On-air indicator state for a video source
///
/// One byte on the wire: bit 0 signals program, bit 1 signals preview.
/// Only the four combinations below are valid; any other raw byte is an
/// unrecognized-code decode failure.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TallyLight {
    Off = 0,
    Program = 1,
    Preview = 2,
    Both = 3,
}

impl TallyLight {
    /// Decode a raw wire byte, failing on values outside 0..=3
    pub fn decode(raw: u8) -> ProtocolResult<Self> {
        Self::try_from(raw).map_err(|_| ProtocolError::UnknownTallyLight { raw })
    }

    /// The raw wire byte for this state
    pub fn raw_value(self) -> u8 {
        self as u8
    }

    /// True when the source is live on the program bus
    pub fn is_on_air(self) -> bool {
        matches!(self, Self::Program | Self::Both)
    }
}
