//! # Switchwire Types - Switcher Domain Values
//!
//! ## Purpose
//!
//! Pure data structures for the Switchwire control protocol: the value types
//! that appear inside message payloads (video source identifiers, tally
//! states, source kinds, capability bit sets) and the shared protocol error
//! taxonomy. This crate knows nothing about byte layouts, transports or
//! dispatch - that is the codec crate's job.
//!
//! ## Architecture Role
//!
//! ```text
//! switchwire-types → switchwire-codec → transport/dispatch (out of scope)
//!       ↑                  ↓
//!  Pure Domain        Wire Layouts
//!  Values/Errors      Encode/Decode
//! ```
//!
//! ## What This Crate Contains
//! - `VideoSource`: open-ended logical source identifier with unknown-code
//!   tolerance
//! - `TallyLight`, `SourceKind`, `SwitcherSize`: closed enumerations decoded
//!   from raw wire integers
//! - `ExternalInterfaces`, `SourceAvailability`, `MixEffects`: option sets
//!   over an integer backing value
//! - `ProtocolError`: the decode failure taxonomy shared with the codec
//!
//! ## What This Crate Does NOT Contain
//! - Byte offsets, encoders or decoders (belongs in switchwire-codec)
//! - Network transport logic
//! - Accumulated switcher state

pub mod errors;
pub mod flags;
pub mod source_kind;
pub mod switcher_size;
pub mod tally;
pub mod video_source;

pub use errors::{ProtocolError, ProtocolResult};
pub use flags::{ExternalInterfaces, MixEffects, SourceAvailability};
pub use source_kind::SourceKind;
pub use switcher_size::SwitcherSize;
pub use tally::TallyLight;
pub use video_source::VideoSource;
