//! Auxiliary output routing messages
//!
//! The command and the event place their fields in different byte slots:
//! the command leads with a constant marker byte, the event leads with the
//! live output index. They are modeled independently, not as mirrors.

use crate::buffers::{ensure_len, read_u16, read_u8, PayloadWriter};
use crate::message::{Message, Serializable};
use crate::title::MessageTitle;
use switchwire_types::{ProtocolResult, VideoSource};

/// Ask the switcher to route a source to an auxiliary output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeAuxiliaryOutput {
    /// The auxiliary output to reroute
    pub output: u8,
    /// The source to assign to it
    pub source: VideoSource,
}

impl ChangeAuxiliaryOutput {
    const LENGTH: usize = 4;

    pub fn new(output: u8, source: VideoSource) -> Self {
        Self { output, source }
    }
}

impl Message for ChangeAuxiliaryOutput {
    const TITLE: MessageTitle = MessageTitle::new("CAuS");

    fn decode(payload: &[u8]) -> ProtocolResult<Self> {
        ensure_len(payload, Self::LENGTH, "ChangeAuxiliaryOutput")?;
        Ok(Self {
            output: read_u8(payload, 1),
            source: VideoSource::decode(read_u16(payload, 2))?,
        })
    }

    fn describe(&self) -> String {
        format!("Change aux {} source to {:?}", self.output, self.source)
    }
}

impl Serializable for ChangeAuxiliaryOutput {
    fn encode(&self) -> Vec<u8> {
        let mut writer = PayloadWriter::new(Self::LENGTH);
        // Byte 0 is a constant marker in the command layout
        writer.put_u8(0, 1);
        writer.put_u8(1, self.output);
        writer.put_u16(2, self.source.raw_value());
        writer.finish()
    }
}

/// The switcher reports that a source was routed to an auxiliary output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuxiliaryOutputChanged {
    /// The auxiliary output that received another route
    pub output: u8,
    /// The source now assigned to it
    pub source: VideoSource,
}

impl AuxiliaryOutputChanged {
    const LENGTH: usize = 4;

    pub fn new(source: VideoSource, output: u8) -> Self {
        Self { output, source }
    }
}

impl Message for AuxiliaryOutputChanged {
    const TITLE: MessageTitle = MessageTitle::new("AuxS");

    fn decode(payload: &[u8]) -> ProtocolResult<Self> {
        ensure_len(payload, Self::LENGTH, "AuxiliaryOutputChanged")?;
        Ok(Self {
            output: read_u8(payload, 0),
            source: VideoSource::decode(read_u16(payload, 2))?,
        })
    }

    fn describe(&self) -> String {
        format!("Aux {} source changed to {:?}", self.output, self.source)
    }
}

impl Serializable for AuxiliaryOutputChanged {
    fn encode(&self) -> Vec<u8> {
        let mut writer = PayloadWriter::new(Self::LENGTH);
        writer.put_u8(0, self.output);
        writer.put_u16(2, self.source.raw_value());
        writer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_and_event_slots_differ() {
        let command = ChangeAuxiliaryOutput::new(3, VideoSource::Input(5)).encode();
        let event = AuxiliaryOutputChanged::new(VideoSource::Input(5), 3).encode();
        assert_eq!(command, [1, 3, 0, 5]);
        assert_eq!(event, [3, 0, 0, 5]);
    }
}
