//! Switcher bus-size selector

use crate::errors::{ProtocolError, ProtocolResult};
use num_enum::TryFromPrimitive;

/// Device bus size carried in the cut command
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwitcherSize {
    OneMixEffect = 0,
    TwoMixEffects = 1,
    FourMixEffects = 2,
}

impl SwitcherSize {
    /// Decode a raw size selector, failing on unrecognized values
    pub fn decode(raw: u8) -> ProtocolResult<Self> {
        Self::try_from(raw).map_err(|_| ProtocolError::UnknownSwitcherSize { raw })
    }

    /// The raw wire byte for this size
    pub fn raw_value(self) -> u8 {
        self as u8
    }

    /// Number of independently addressable mix effects
    pub fn mix_effect_count(self) -> u8 {
        match self {
            Self::OneMixEffect => 1,
            Self::TwoMixEffects => 2,
            Self::FourMixEffects => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_round_trips() {
        for size in [
            SwitcherSize::OneMixEffect,
            SwitcherSize::TwoMixEffects,
            SwitcherSize::FourMixEffects,
        ] {
            assert_eq!(SwitcherSize::decode(size.raw_value()), Ok(size));
        }
        assert_eq!(
            SwitcherSize::decode(9),
            Err(ProtocolError::UnknownSwitcherSize { raw: 9 })
        );
    }
}
