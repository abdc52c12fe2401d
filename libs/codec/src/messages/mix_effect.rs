//! Mix-effect bus and transition messages
//!
//! Command messages (controller → device) and their event counterparts
//! (device → controller) are separate types with independent layouts: the
//! protocol is not symmetric, and several event variants append reserved
//! bytes their command twin does not carry.

use crate::buffers::{ensure_len, read_u16, read_u8, PayloadWriter};
use crate::message::{Message, Serializable};
use crate::title::MessageTitle;
use switchwire_types::{ProtocolResult, SwitcherSize, VideoSource};

/// Perform a cut on the switcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cut {
    pub size: SwitcherSize,
}

impl Cut {
    const LENGTH: usize = 4;

    pub fn new(size: SwitcherSize) -> Self {
        Self { size }
    }
}

impl Message for Cut {
    const TITLE: MessageTitle = MessageTitle::new("DCut");

    fn decode(payload: &[u8]) -> ProtocolResult<Self> {
        ensure_len(payload, Self::LENGTH, "Cut")?;
        let size = SwitcherSize::decode(read_u8(payload, 0))?;
        Ok(Self { size })
    }

    fn describe(&self) -> String {
        "cut".to_string()
    }
}

impl Serializable for Cut {
    fn encode(&self) -> Vec<u8> {
        let mut writer = PayloadWriter::new(Self::LENGTH);
        writer.put_u8(0, self.size.raw_value());
        writer.finish()
    }
}

/// Ask the switcher to change the preview bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangePreviewBus {
    pub mix_effect: u8,
    pub preview_bus: VideoSource,
}

impl ChangePreviewBus {
    const LENGTH: usize = 4;

    pub fn new(preview_bus: VideoSource, mix_effect: u8) -> Self {
        Self {
            mix_effect,
            preview_bus,
        }
    }
}

impl Message for ChangePreviewBus {
    const TITLE: MessageTitle = MessageTitle::new("CPvI");

    fn decode(payload: &[u8]) -> ProtocolResult<Self> {
        ensure_len(payload, Self::LENGTH, "ChangePreviewBus")?;
        Ok(Self {
            mix_effect: read_u8(payload, 0),
            preview_bus: VideoSource::decode(read_u16(payload, 2))?,
        })
    }

    fn describe(&self) -> String {
        format!("Change preview bus to {:?}", self.preview_bus)
    }
}

impl Serializable for ChangePreviewBus {
    fn encode(&self) -> Vec<u8> {
        let mut writer = PayloadWriter::new(Self::LENGTH);
        writer.put_u8(0, self.mix_effect);
        writer.put_u16(2, self.preview_bus.raw_value());
        writer.finish()
    }
}

/// Ask the switcher to change the program bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeProgramBus {
    pub mix_effect: u8,
    pub program_bus: VideoSource,
}

impl ChangeProgramBus {
    const LENGTH: usize = 4;

    pub fn new(program_bus: VideoSource, mix_effect: u8) -> Self {
        Self {
            mix_effect,
            program_bus,
        }
    }
}

impl Message for ChangeProgramBus {
    const TITLE: MessageTitle = MessageTitle::new("CPgI");

    fn decode(payload: &[u8]) -> ProtocolResult<Self> {
        ensure_len(payload, Self::LENGTH, "ChangeProgramBus")?;
        Ok(Self {
            mix_effect: read_u8(payload, 0),
            program_bus: VideoSource::decode(read_u16(payload, 2))?,
        })
    }

    fn describe(&self) -> String {
        format!("Change program bus to {:?}", self.program_bus)
    }
}

impl Serializable for ChangeProgramBus {
    fn encode(&self) -> Vec<u8> {
        let mut writer = PayloadWriter::new(Self::LENGTH);
        writer.put_u8(0, self.mix_effect);
        writer.put_u16(2, self.program_bus.raw_value());
        writer.finish()
    }
}

/// The switcher reports that the preview bus changed
///
/// Event layout: the 4-byte command layout plus 4 trailing reserved bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewBusChanged {
    pub mix_effect: u8,
    pub preview_bus: VideoSource,
}

impl PreviewBusChanged {
    const LENGTH: usize = 8;

    pub fn new(preview_bus: VideoSource, mix_effect: u8) -> Self {
        Self {
            mix_effect,
            preview_bus,
        }
    }
}

impl Message for PreviewBusChanged {
    const TITLE: MessageTitle = MessageTitle::new("PrvI");

    fn decode(payload: &[u8]) -> ProtocolResult<Self> {
        ensure_len(payload, Self::LENGTH, "PreviewBusChanged")?;
        Ok(Self {
            mix_effect: read_u8(payload, 0),
            preview_bus: VideoSource::decode(read_u16(payload, 2))?,
        })
    }

    fn describe(&self) -> String {
        format!(
            "Preview bus changed to {:?} on ME{}",
            self.preview_bus, self.mix_effect
        )
    }
}

impl Serializable for PreviewBusChanged {
    fn encode(&self) -> Vec<u8> {
        let mut writer = PayloadWriter::new(Self::LENGTH);
        writer.put_u8(0, self.mix_effect);
        writer.put_u16(2, self.preview_bus.raw_value());
        writer.finish()
    }
}

/// The switcher reports that the program bus changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramBusChanged {
    pub mix_effect: u8,
    pub program_bus: VideoSource,
}

impl ProgramBusChanged {
    const LENGTH: usize = 4;

    pub fn new(program_bus: VideoSource, mix_effect: u8) -> Self {
        Self {
            mix_effect,
            program_bus,
        }
    }
}

impl Message for ProgramBusChanged {
    const TITLE: MessageTitle = MessageTitle::new("PrgI");

    fn decode(payload: &[u8]) -> ProtocolResult<Self> {
        ensure_len(payload, Self::LENGTH, "ProgramBusChanged")?;
        Ok(Self {
            mix_effect: read_u8(payload, 0),
            program_bus: VideoSource::decode(read_u16(payload, 2))?,
        })
    }

    fn describe(&self) -> String {
        format!(
            "Program bus changed to {:?} on ME{}",
            self.program_bus, self.mix_effect
        )
    }
}

impl Serializable for ProgramBusChanged {
    fn encode(&self) -> Vec<u8> {
        let mut writer = PayloadWriter::new(Self::LENGTH);
        writer.put_u8(0, self.mix_effect);
        writer.put_u16(2, self.program_bus.raw_value());
        writer.finish()
    }
}

/// Ask the switcher to move the transition position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeTransitionPosition {
    pub mix_effect: u8,
    /// Position in the 0..=9999 transition range
    pub position: u16,
}

impl ChangeTransitionPosition {
    const LENGTH: usize = 4;

    pub fn new(position: u16, mix_effect: u8) -> Self {
        Self {
            mix_effect,
            position,
        }
    }
}

impl Message for ChangeTransitionPosition {
    const TITLE: MessageTitle = MessageTitle::new("CTPs");

    fn decode(payload: &[u8]) -> ProtocolResult<Self> {
        ensure_len(payload, Self::LENGTH, "ChangeTransitionPosition")?;
        Ok(Self {
            mix_effect: read_u8(payload, 0),
            position: read_u16(payload, 2),
        })
    }

    fn describe(&self) -> String {
        format!(
            "Change transition position of ME{} to {}",
            self.mix_effect, self.position
        )
    }
}

impl Serializable for ChangeTransitionPosition {
    fn encode(&self) -> Vec<u8> {
        let mut writer = PayloadWriter::new(Self::LENGTH);
        writer.put_u8(0, self.mix_effect);
        writer.put_u16(2, self.position);
        writer.finish()
    }
}

/// The switcher reports the transition position
///
/// Event layout carries an in-transition flag and the remaining frame count
/// on top of the command fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionPositionChanged {
    pub mix_effect: u8,
    pub position: u16,
    pub in_transition: bool,
    pub remaining_frames: u8,
}

impl TransitionPositionChanged {
    const LENGTH: usize = 8;

    /// Build the event, deriving the in-transition flag when not supplied
    ///
    /// With `in_transition: None` the flag is `(1..9999).contains(position)`:
    /// position 0 and the 9999 endpoint count as at-rest. Decode never
    /// derives - the wire always carries the flag explicitly.
    pub fn new(
        position: u16,
        remaining_frames: u8,
        in_transition: Option<bool>,
        mix_effect: u8,
    ) -> Self {
        Self {
            mix_effect,
            position,
            in_transition: in_transition.unwrap_or((1..9999).contains(&position)),
            remaining_frames,
        }
    }
}

impl Message for TransitionPositionChanged {
    const TITLE: MessageTitle = MessageTitle::new("TrPs");

    fn decode(payload: &[u8]) -> ProtocolResult<Self> {
        ensure_len(payload, Self::LENGTH, "TransitionPositionChanged")?;
        Ok(Self {
            mix_effect: read_u8(payload, 0),
            in_transition: read_u8(payload, 1) == 1,
            remaining_frames: read_u8(payload, 2),
            position: read_u16(payload, 4),
        })
    }

    fn describe(&self) -> String {
        format!(
            "Transition position of ME{} is {} ({} frames remaining)",
            self.mix_effect, self.position, self.remaining_frames
        )
    }
}

impl Serializable for TransitionPositionChanged {
    fn encode(&self) -> Vec<u8> {
        let mut writer = PayloadWriter::new(Self::LENGTH);
        writer.put_u8(0, self.mix_effect);
        writer.put_u8(1, self.in_transition as u8);
        writer.put_u8(2, self.remaining_frames);
        writer.put_u16(4, self.position);
        writer.finish()
    }
}

/// The switcher reports fade-to-black progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeToBlackChanged {
    pub mix_effect: u8,
    pub fully_black: bool,
    pub in_transition: bool,
    pub remaining_frames: u8,
}

impl FadeToBlackChanged {
    const LENGTH: usize = 4;

    pub fn new(mix_effect: u8, fully_black: bool, in_transition: bool, remaining_frames: u8) -> Self {
        Self {
            mix_effect,
            fully_black,
            in_transition,
            remaining_frames,
        }
    }
}

impl Message for FadeToBlackChanged {
    const TITLE: MessageTitle = MessageTitle::new("FtbS");

    fn decode(payload: &[u8]) -> ProtocolResult<Self> {
        ensure_len(payload, Self::LENGTH, "FadeToBlackChanged")?;
        Ok(Self {
            mix_effect: read_u8(payload, 0),
            fully_black: read_u8(payload, 1) == 1,
            in_transition: read_u8(payload, 2) == 1,
            remaining_frames: read_u8(payload, 3),
        })
    }

    fn describe(&self) -> String {
        format!(
            "Fade to black on ME{}: fully black {}, in transition {}, {} frames remaining",
            self.mix_effect, self.fully_black, self.in_transition, self.remaining_frames
        )
    }
}

impl Serializable for FadeToBlackChanged {
    fn encode(&self) -> Vec<u8> {
        let mut writer = PayloadWriter::new(Self::LENGTH);
        writer.put_u8(0, self.mix_effect);
        writer.put_u8(1, self.fully_black as u8);
        writer.put_u8(2, self.in_transition as u8);
        writer.put_u8(3, self.remaining_frames);
        writer.finish()
    }
}
