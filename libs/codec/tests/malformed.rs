//! Malformed-input handling
//!
//! Truncated buffers and unrecognized codes must surface as recoverable,
//! distinguishable errors - never an out-of-bounds read, never a panic,
//! and never state that poisons the next decode call.

use hex_literal::hex;
use switchwire_codec::{
    ChangeKeyDve, ChangeProgramBus, Cut, Message, ProtocolError, Serializable,
    SourcePropertiesChanged, SourceTallies, SwitcherSize, TallyLight, TimecodeChanged,
    TransitionPositionChanged, VideoSource,
};

fn assert_rejects_short_prefixes<M: Message>(valid: &[u8]) {
    for len in 0..valid.len() {
        match M::decode(&valid[..len]) {
            Err(ProtocolError::MessageTooSmall { need, got, .. }) => {
                assert_eq!(got, len);
                assert!(need > len);
            }
            other => panic!("prefix of {} bytes: expected MessageTooSmall, got {:?}", len, other),
        }
    }
}

#[test]
fn every_prefix_of_a_fixed_payload_is_rejected() {
    assert_rejects_short_prefixes::<Cut>(&Cut::new(SwitcherSize::OneMixEffect).encode());
    assert_rejects_short_prefixes::<ChangeProgramBus>(&hex!("00 00 00 01"));
    assert_rejects_short_prefixes::<TimecodeChanged>(&TimecodeChanged::new(1, 2, 3, 4).encode());
    assert_rejects_short_prefixes::<TransitionPositionChanged>(
        &TransitionPositionChanged::new(5000, 10, None, 0).encode(),
    );
    assert_rejects_short_prefixes::<ChangeKeyDve>(&ChangeKeyDve::new(0, 0, 90.0).encode());
}

#[test]
fn source_properties_truncated_at_35_bytes() {
    let payload = [0u8; 35];
    assert_eq!(
        SourcePropertiesChanged::decode(&payload),
        Err(ProtocolError::MessageTooSmall {
            need: 36,
            got: 35,
            context: "SourcePropertiesChanged"
        })
    );
}

#[test]
fn oversized_tally_count_is_a_protocol_violation() {
    // Declares 10 entries but carries only two
    let mut payload = Vec::new();
    payload.extend_from_slice(&10u16.to_be_bytes());
    payload.extend_from_slice(&hex!("00 01 01 00 02 02"));

    assert_eq!(
        SourceTallies::decode(&payload),
        Err(ProtocolError::TruncatedPayload {
            required: 32,
            available: 8,
            count: 10
        })
    );
}

#[test]
fn tally_payload_shorter_than_its_count_field() {
    assert_eq!(
        SourceTallies::decode(&[0x00]),
        Err(ProtocolError::MessageTooSmall {
            need: 2,
            got: 1,
            context: "SourceTallies count"
        })
    );
}

#[test]
fn unknown_source_code_in_a_bus_change() {
    // 0x270F = 9999, outside every known band
    let result = ChangeProgramBus::decode(&hex!("00 00 27 0F"));
    assert_eq!(result, Err(ProtocolError::UnknownVideoSource { raw: 9999 }));
    assert!(result.unwrap_err().is_unknown_code());
}

#[test]
fn unknown_switcher_size_in_a_cut() {
    assert_eq!(
        Cut::decode(&hex!("09 00 00 00")),
        Err(ProtocolError::UnknownSwitcherSize { raw: 9 })
    );
}

#[test]
fn unknown_tally_state_is_distinguishable_from_truncation() {
    // One entry, tally byte 7 out of range
    let mut payload = Vec::new();
    payload.extend_from_slice(&1u16.to_be_bytes());
    payload.extend_from_slice(&hex!("00 01 07"));

    let error = SourceTallies::decode(&payload).unwrap_err();
    assert_eq!(error, ProtocolError::UnknownTallyLight { raw: 7 });
    assert!(error.is_unknown_code());
}

#[test]
fn failed_decode_does_not_poison_subsequent_decodes() {
    // A batch with a bad entry fails...
    let mut bad = Vec::new();
    bad.extend_from_slice(&2u16.to_be_bytes());
    bad.extend_from_slice(&hex!("00 01 01"));
    bad.extend_from_slice(&hex!("27 0F 00")); // unknown source 9999
    assert!(SourceTallies::decode(&bad).is_err());

    // ...and a well-formed batch decoded right after is unaffected
    let mut good = Vec::new();
    good.extend_from_slice(&1u16.to_be_bytes());
    good.extend_from_slice(&hex!("00 01 01"));
    let decoded = SourceTallies::decode(&good).unwrap();
    assert_eq!(
        decoded.tallies.get(&VideoSource::Input(1)),
        Some(&TallyLight::Program)
    );
}

#[test]
fn reserved_bytes_in_input_are_ignored_not_validated() {
    // Device sends junk in the reserved bytes; decode accepts, re-encode zeroes
    let decoded = ChangeProgramBus::decode(&hex!("00 FF 00 05")).unwrap();
    assert_eq!(decoded.program_bus, VideoSource::Input(5));
    assert_eq!(decoded.encode(), hex!("00 00 00 05"));
}
