//! # Switchwire Codec - Switcher Control Protocol Rules
//!
//! ## Purpose
//!
//! The "rules" layer of the Switchwire system: byte-exact wire layouts for
//! the switcher control protocol and the machinery to move between them and
//! structured values. A transport hands this crate a byte slice isolated to
//! one message's payload; the codec decodes it into an immutable value, or
//! serializes an application-constructed value into the payload for an
//! outgoing frame.
//!
//! ## Architecture Role
//!
//! ```text
//! switchwire-types → [switchwire-codec] → transport / dispatch (external)
//!        ↑                   ↓                      ↓
//!   Pure Domain         Wire Layouts          Framing, retries,
//!   Values/Errors       Encode/Decode         title → decoder table
//! ```
//!
//! ## What This Crate Contains
//! - Field-layout primitives: big-endian reads at relative offsets,
//!   fixed-capacity zero-initialized payload writers
//! - `MessageTitle`: the 4-byte tag identifying each message type
//! - The `Message`/`Serializable` codec contract
//! - The concrete message types (bus changes, transition position, tallies,
//!   DVE key rotation, timecode, source properties, ...)
//!
//! ## What This Crate Does NOT Contain
//! - Transport or session logic (framing, acknowledgment, reconnection)
//! - The dispatch registry mapping titles to decoders
//! - Accumulated switcher state
//!
//! ## Concurrency
//!
//! Purely functional over immutable inputs: no shared state, no I/O, no
//! blocking. Decode and encode are synchronous and safe to call from any
//! number of threads on independent buffers.

pub mod buffers;
pub mod message;
pub mod messages;
pub mod title;

// Re-export key types for convenience
pub use buffers::PayloadWriter;
pub use message::{Message, Serializable};
pub use messages::*;
pub use title::MessageTitle;

// Domain values travel with the codec API
pub use switchwire_types::{
    ExternalInterfaces, MixEffects, ProtocolError, ProtocolResult, SourceAvailability, SourceKind,
    SwitcherSize, TallyLight, VideoSource,
};
