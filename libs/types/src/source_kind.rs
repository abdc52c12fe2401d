//! Source kind classification
//!
//! A 16-bit category code reported with a source's properties. The external
//! band (0) covers physical inputs; everything else is generated inside the
//! device.

use crate::errors::{ProtocolError, ProtocolResult};
use num_enum::TryFromPrimitive;

/// Category of a video source
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SourceKind {
    External = 0,
    Black = 1,
    ColorBars = 2,
    ColorGenerator = 3,
    MediaPlayerFill = 4,
    MediaPlayerKey = 5,
    SuperSource = 6,
    MixEffectOutput = 128,
    Auxiliary = 129,
    Mask = 130,
}

impl SourceKind {
    /// Decode a raw kind code, failing on unrecognized values
    pub fn decode(raw: u16) -> ProtocolResult<Self> {
        Self::try_from(raw).map_err(|_| ProtocolError::UnknownSourceKind { raw })
    }

    /// The raw 16-bit wire representation
    pub fn raw_value(self) -> u16 {
        self as u16
    }

    /// True for sources generated inside the device
    pub fn is_internal(self) -> bool {
        !matches!(self, Self::External)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_round_trips_known_kinds() {
        for kind in [
            SourceKind::External,
            SourceKind::Black,
            SourceKind::ColorBars,
            SourceKind::ColorGenerator,
            SourceKind::MediaPlayerFill,
            SourceKind::MediaPlayerKey,
            SourceKind::SuperSource,
            SourceKind::MixEffectOutput,
            SourceKind::Auxiliary,
            SourceKind::Mask,
        ] {
            assert_eq!(SourceKind::decode(kind.raw_value()), Ok(kind));
        }
    }

    #[test]
    fn unknown_kind_codes_fail() {
        assert_eq!(
            SourceKind::decode(7),
            Err(ProtocolError::UnknownSourceKind { raw: 7 })
        );
        assert_eq!(
            SourceKind::decode(500),
            Err(ProtocolError::UnknownSourceKind { raw: 500 })
        );
    }

    #[test]
    fn only_external_is_external() {
        assert!(!SourceKind::External.is_internal());
        assert!(SourceKind::Black.is_internal());
        assert!(SourceKind::Auxiliary.is_internal());
    }
}
