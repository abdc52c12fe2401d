//! The message codec contract
//!
//! Every message type satisfies a uniform interface: a static title
//! identity, decode-from-bytes, and a human-readable description. Types the
//! control application can also *send* additionally implement
//! [`Serializable`] for encode-to-bytes (a handful of device events are
//! decode-only).
//!
//! The contract is deliberately context-free: a decode call receives a byte
//! slice already isolated to exactly one message's payload (title and
//! length header stripped by the framing layer) and retains no state across
//! calls. The codec never branches on titles - mapping a title to a decoder
//! is the dispatch registry's job.

use crate::title::MessageTitle;
use switchwire_types::ProtocolResult;

/// A protocol message that can be decoded from a payload slice
///
/// # Round-trip law
///
/// For every type that is also [`Serializable`] and every value `v`
/// constructible through its public initializer,
/// `decode(&encode(&v)) == Ok(v)`. The converse holds only for payloads
/// produced by a conformant encoder: reserved bytes in device-supplied
/// input are ignored on decode and re-zeroed on encode, not preserved.
pub trait Message: std::fmt::Debug + Sized {
    /// The 4-byte wire tag identifying this message type
    const TITLE: MessageTitle;

    /// Decode a payload slice known to belong to this message type
    ///
    /// Fails with a truncated-input error when the slice is shorter than
    /// the type's declared length, or with an unrecognized-code error when
    /// an embedded enumerated field carries a value this codec does not
    /// know. Never reads beyond the slice, never panics on malformed input.
    fn decode(payload: &[u8]) -> ProtocolResult<Self>;

    /// Non-normative human-readable summary, for debugging only
    fn describe(&self) -> String;
}

/// A message the control application can serialize for sending
pub trait Serializable: Message {
    /// Produce the byte payload for an outgoing frame
    ///
    /// Total and deterministic: the same value always yields the identical
    /// byte sequence, with every reserved byte zero. The framing layer
    /// prepends title and length.
    fn encode(&self) -> Vec<u8>;
}
