//! Logical video source identifiers
//!
//! Source ids occupy a banded 16-bit space: camera inputs are dense small
//! integers, internal generators and bus aliases live in higher bands. The
//! space is open-ended - devices gain new sources across firmware versions -
//! so decoding offers both a failing form (`decode`) and a total form
//! (`from_raw`) that folds unrecognized codes into an `Unknown` catch-all
//! carrying the raw value.

use crate::errors::{ProtocolError, ProtocolResult};

/// A logical input or output of the switcher
///
/// Each variant corresponds to a band of the raw id space. Band payloads
/// (e.g. the camera number in `Input`) are expected to stay within the
/// documented range; out-of-band payloads are a caller bug on the send path,
/// like any other invalid direct field initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VideoSource {
    /// Black generator (id 0)
    Black,
    /// Camera input 1..=999
    Input(u16),
    /// Color bars generator (id 1000)
    ColorBars,
    /// Color generator 1..=2 (ids 2001, 2002)
    Color(u8),
    /// Media player fill 1..=4 (ids 3010, 3020, ...)
    MediaPlayer(u8),
    /// Media player key 1..=4 (ids 3011, 3021, ...)
    MediaPlayerKey(u8),
    /// Upstream key mask 1..=4 (ids 4010, 4020, ...)
    KeyMask(u8),
    /// Downstream key mask 1..=2 (ids 5010, 5020)
    DownstreamKeyMask(u8),
    /// SuperSource compositor (id 6000)
    SuperSource,
    /// Clean feed 1..=2 (ids 7001, 7002)
    CleanFeed(u8),
    /// Auxiliary output 1..=6 (ids 8001..)
    Auxiliary(u8),
    /// Program bus alias for mix effect 0..=3 (ids 10010, 10020, ...)
    Program(u8),
    /// Preview bus alias for mix effect 0..=3 (ids 10011, 10021, ...)
    Preview(u8),
    /// Source code this codec does not recognize, raw value preserved
    Unknown(u16),
}

impl VideoSource {
    /// Classify a raw id, folding unrecognized codes into `Unknown`
    ///
    /// Total: used where a message stores an id without interpreting it and
    /// must survive codes added after this codec was written.
    pub fn from_raw(raw: u16) -> Self {
        match raw {
            0 => Self::Black,
            1..=999 => Self::Input(raw),
            1000 => Self::ColorBars,
            2001..=2002 => Self::Color((raw - 2000) as u8),
            3010..=3049 => {
                let unit = ((raw - 3000) / 10) as u8;
                match raw % 10 {
                    0 => Self::MediaPlayer(unit),
                    1 => Self::MediaPlayerKey(unit),
                    _ => Self::Unknown(raw),
                }
            }
            4010..=4049 if raw % 10 == 0 => Self::KeyMask(((raw - 4000) / 10) as u8),
            5010..=5029 if raw % 10 == 0 => Self::DownstreamKeyMask(((raw - 5000) / 10) as u8),
            6000 => Self::SuperSource,
            7001..=7002 => Self::CleanFeed((raw - 7000) as u8),
            8001..=8006 => Self::Auxiliary((raw - 8000) as u8),
            10010..=10049 => {
                let me = ((raw - 10010) / 10) as u8;
                match raw % 10 {
                    0 => Self::Program(me),
                    1 => Self::Preview(me),
                    _ => Self::Unknown(raw),
                }
            }
            _ => Self::Unknown(raw),
        }
    }

    /// Classify a raw id, failing on unrecognized codes
    ///
    /// The failing form is used by messages whose semantics require a known
    /// source (bus changes, tally entries). The error is distinguishable
    /// from truncation so callers can skip-and-continue.
    pub fn decode(raw: u16) -> ProtocolResult<Self> {
        match Self::from_raw(raw) {
            Self::Unknown(raw) => Err(ProtocolError::UnknownVideoSource { raw }),
            source => Ok(source),
        }
    }

    /// The raw 16-bit wire representation
    ///
    /// Total, and the left inverse of both constructors:
    /// `decode(v.raw_value()) == Ok(v)` for every value `decode` can return.
    pub fn raw_value(self) -> u16 {
        match self {
            Self::Black => 0,
            Self::Input(n) => n,
            Self::ColorBars => 1000,
            Self::Color(n) => 2000 + n as u16,
            Self::MediaPlayer(n) => 3000 + n as u16 * 10,
            Self::MediaPlayerKey(n) => 3001 + n as u16 * 10,
            Self::KeyMask(n) => 4000 + n as u16 * 10,
            Self::DownstreamKeyMask(n) => 5000 + n as u16 * 10,
            Self::SuperSource => 6000,
            Self::CleanFeed(n) => 7000 + n as u16,
            Self::Auxiliary(n) => 8000 + n as u16,
            Self::Program(me) => 10010 + me as u16 * 10,
            Self::Preview(me) => 10011 + me as u16 * 10,
            Self::Unknown(raw) => raw,
        }
    }

    /// True for the generators and bus aliases produced inside the device
    pub fn is_internal(self) -> bool {
        !matches!(self, Self::Input(_) | Self::Unknown(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_bands_round_trip() {
        let sources = [
            VideoSource::Black,
            VideoSource::Input(1),
            VideoSource::Input(20),
            VideoSource::Input(999),
            VideoSource::ColorBars,
            VideoSource::Color(1),
            VideoSource::Color(2),
            VideoSource::MediaPlayer(1),
            VideoSource::MediaPlayer(2),
            VideoSource::MediaPlayerKey(1),
            VideoSource::KeyMask(1),
            VideoSource::DownstreamKeyMask(2),
            VideoSource::SuperSource,
            VideoSource::CleanFeed(1),
            VideoSource::Auxiliary(3),
            VideoSource::Program(0),
            VideoSource::Preview(0),
            VideoSource::Program(3),
            VideoSource::Preview(3),
        ];
        for source in sources {
            assert_eq!(VideoSource::decode(source.raw_value()), Ok(source));
        }
    }

    #[test]
    fn raw_values_match_the_wire_bands() {
        assert_eq!(VideoSource::Black.raw_value(), 0);
        assert_eq!(VideoSource::Input(4).raw_value(), 4);
        assert_eq!(VideoSource::ColorBars.raw_value(), 1000);
        assert_eq!(VideoSource::MediaPlayer(1).raw_value(), 3010);
        assert_eq!(VideoSource::MediaPlayerKey(2).raw_value(), 3021);
        assert_eq!(VideoSource::Program(0).raw_value(), 10010);
        assert_eq!(VideoSource::Preview(1).raw_value(), 10021);
    }

    #[test]
    fn unrecognized_codes_fail_decode_but_not_from_raw() {
        for raw in [1500u16, 2003, 3015, 9999, 20000, u16::MAX] {
            assert_eq!(
                VideoSource::decode(raw),
                Err(ProtocolError::UnknownVideoSource { raw })
            );
            let fallback = VideoSource::from_raw(raw);
            assert_eq!(fallback, VideoSource::Unknown(raw));
            // The raw value survives the catch-all
            assert_eq!(fallback.raw_value(), raw);
        }
    }

    #[test]
    fn internal_classification() {
        assert!(VideoSource::Black.is_internal());
        assert!(VideoSource::ColorBars.is_internal());
        assert!(VideoSource::Program(0).is_internal());
        assert!(!VideoSource::Input(7).is_internal());
        assert!(!VideoSource::Unknown(1500).is_internal());
    }
}
