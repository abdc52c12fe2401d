//! Video-source property and tally messages
//!
//! ## Purpose
//!
//! The two richest payloads in the protocol: the fixed 36-byte source
//! property record with null-terminated text fields at fixed ranges, and
//! the variable-length tally batch (count-prefixed entry array). Both
//! tolerate forward-compatible input where the spec allows it - unknown
//! kind codes are carried through property records, while tally entries
//! require known sources and states.

use crate::buffers::{ensure_len, read_terminated_text, read_u16, read_u8, PayloadWriter};
use crate::message::{Message, Serializable};
use crate::title::MessageTitle;
use std::borrow::Cow;
use std::collections::HashMap;
use switchwire_types::{
    ExternalInterfaces, MixEffects, ProtocolError, ProtocolResult, SourceAvailability, SourceKind,
    TallyLight, VideoSource,
};

/// Byte ranges of the source property record
mod position {
    use std::ops::Range;

    pub const ID: usize = 0;
    pub const LONG_NAME: Range<usize> = 2..22;
    pub const SHORT_NAME: Range<usize> = 22..26;
    // 26..28 reserved
    pub const IS_EXTERNAL: usize = 28;
    pub const EXTERNAL_INTERFACES: usize = 29;
    // 30 reserved
    pub const KIND: usize = 31;
    // 33 reserved
    pub const AVAILABILITY: usize = 34;
    pub const MIX_EFFECTS: usize = 35;

    pub const LENGTH: usize = 36;
}

/// Clamp a name to its wire slot, respecting UTF-8 boundaries
///
/// Empty text falls back to a single space; the terminating null comes from
/// the zero-filled field on encode.
fn text_field_bytes(text: &str, width: usize) -> Vec<u8> {
    if text.is_empty() {
        return b" ".to_vec();
    }
    let bytes = text.as_bytes();
    let mut end = bytes
        .iter()
        .position(|&b| b == 0)
        .unwrap_or(bytes.len())
        .min(width);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    bytes[..end].to_vec()
}

/// The switcher reports the properties of a video source
///
/// The raw kind code is stored as received: a device may report a kind
/// added after this codec was written, and the record must survive it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePropertiesChanged {
    pub id: VideoSource,
    long_name: Vec<u8>,
    short_name: Vec<u8>,
    pub external_interfaces: ExternalInterfaces,
    pub raw_kind: u16,
    pub availability: SourceAvailability,
    pub mix_effects: MixEffects,
}

impl SourcePropertiesChanged {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: VideoSource,
        long_name: &str,
        short_name: &str,
        external_interfaces: ExternalInterfaces,
        kind: SourceKind,
        availability: SourceAvailability,
        mix_effects: MixEffects,
    ) -> Self {
        Self {
            id,
            long_name: text_field_bytes(long_name, position::LONG_NAME.len()),
            short_name: text_field_bytes(short_name, position::SHORT_NAME.len()),
            external_interfaces,
            raw_kind: kind.raw_value(),
            availability,
            mix_effects,
        }
    }

    /// Full source name, up to 20 bytes of UTF-8
    pub fn long_name(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.long_name)
    }

    /// Abbreviated source name, up to 4 bytes of UTF-8
    pub fn short_name(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.short_name)
    }

    /// The source kind, when this codec recognizes the raw code
    pub fn kind(&self) -> Option<SourceKind> {
        SourceKind::decode(self.raw_kind).ok()
    }
}

impl Message for SourcePropertiesChanged {
    const TITLE: MessageTitle = MessageTitle::new("InPr");

    fn decode(payload: &[u8]) -> ProtocolResult<Self> {
        ensure_len(payload, position::LENGTH, "SourcePropertiesChanged")?;
        let raw_kind = read_u16(payload, position::KIND);
        if SourceKind::decode(raw_kind).is_err() {
            tracing::warn!(raw_kind, "source reports an unrecognized kind code");
        }
        Ok(Self {
            id: VideoSource::from_raw(read_u16(payload, position::ID)),
            long_name: read_terminated_text(payload, position::LONG_NAME).to_vec(),
            short_name: read_terminated_text(payload, position::SHORT_NAME).to_vec(),
            external_interfaces: ExternalInterfaces::from_raw(read_u8(
                payload,
                position::EXTERNAL_INTERFACES,
            )),
            raw_kind,
            availability: SourceAvailability::from_raw(read_u8(payload, position::AVAILABILITY)),
            mix_effects: MixEffects::from_raw(read_u8(payload, position::MIX_EFFECTS)),
        })
    }

    fn describe(&self) -> String {
        format!(
            "Source {:?} properties: long name {:?}, short name {:?}, kind {:?}, interfaces {:?}, availability {:?}, mix effects {:?}",
            self.id,
            self.long_name(),
            self.short_name(),
            self.kind(),
            self.external_interfaces,
            self.availability,
            self.mix_effects,
        )
    }
}

impl Serializable for SourcePropertiesChanged {
    fn encode(&self) -> Vec<u8> {
        let mut writer = PayloadWriter::new(position::LENGTH);
        writer.put_u16(position::ID, self.id.raw_value());
        writer.put_bytes(position::LONG_NAME, &self.long_name);
        writer.put_bytes(position::SHORT_NAME, &self.short_name);
        // Derived, not stored: an unknown kind counts as external
        let is_internal = self.kind().map(SourceKind::is_internal).unwrap_or(false);
        writer.put_u8(position::IS_EXTERNAL, if is_internal { 0 } else { 1 });
        writer.put_u8(
            position::EXTERNAL_INTERFACES,
            self.external_interfaces.raw_value(),
        );
        writer.put_u16(position::KIND, self.raw_kind);
        writer.put_u8(position::AVAILABILITY, self.availability.raw_value());
        writer.put_u8(position::MIX_EFFECTS, self.mix_effects.raw_value());
        writer.finish()
    }
}

/// The switcher reports tally light states for its sources
///
/// Variable-length payload: a 16-bit entry count, then `count` entries of
/// (2-byte source id, 1-byte tally state). Decode accepts entries in any
/// order; encode sorts by ascending raw source id so output stays
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceTallies {
    pub tallies: HashMap<VideoSource, TallyLight>,
}

impl SourceTallies {
    const COUNT_LENGTH: usize = 2;
    const ENTRY_LENGTH: usize = 3;

    pub fn new(tallies: HashMap<VideoSource, TallyLight>) -> Self {
        Self { tallies }
    }

    fn sorted_entries(&self) -> Vec<(u16, TallyLight)> {
        let mut entries: Vec<(u16, TallyLight)> = self
            .tallies
            .iter()
            .map(|(source, tally)| (source.raw_value(), *tally))
            .collect();
        entries.sort_by_key(|(raw, _)| *raw);
        entries
    }
}

impl Message for SourceTallies {
    const TITLE: MessageTitle = MessageTitle::new("TlSr");

    fn decode(payload: &[u8]) -> ProtocolResult<Self> {
        ensure_len(payload, Self::COUNT_LENGTH, "SourceTallies count")?;
        let count = read_u16(payload, 0) as usize;

        // An oversized declared count over a short buffer is a protocol
        // violation, caught before any entry is read.
        let required = Self::COUNT_LENGTH + count * Self::ENTRY_LENGTH;
        if required > payload.len() {
            return Err(ProtocolError::TruncatedPayload {
                required,
                available: payload.len(),
                count,
            });
        }

        tracing::trace!(count, "decoding tally batch");
        let mut tallies = HashMap::with_capacity(count);
        for entry in 0..count {
            let offset = Self::COUNT_LENGTH + entry * Self::ENTRY_LENGTH;
            let source = VideoSource::decode(read_u16(payload, offset))?;
            let tally = TallyLight::decode(read_u8(payload, offset + 2))?;
            tallies.insert(source, tally);
        }
        Ok(Self { tallies })
    }

    fn describe(&self) -> String {
        let entries: Vec<String> = self
            .sorted_entries()
            .iter()
            .map(|(raw, tally)| format!("{:?}: {:?}", VideoSource::from_raw(*raw), tally))
            .collect();
        format!("Source tallies ({})", entries.join(", "))
    }
}

impl Serializable for SourceTallies {
    fn encode(&self) -> Vec<u8> {
        let mut bytes =
            Vec::with_capacity(Self::COUNT_LENGTH + self.tallies.len() * Self::ENTRY_LENGTH);
        bytes.extend_from_slice(&(self.tallies.len() as u16).to_be_bytes());
        for (raw, tally) in self.sorted_entries() {
            bytes.extend_from_slice(&raw.to_be_bytes());
            bytes.push(tally.raw_value());
        }
        bytes
    }
}
