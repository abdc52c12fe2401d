//! Concrete message type definitions, grouped by concern
//!
//! Each type binds one wire layout to structured fields and implements the
//! codec contract from [`crate::message`]. Layout offsets live next to the
//! type they describe, as small tables of named positions.

pub mod auxiliary;
pub mod dve;
pub mod mix_effect;
pub mod source;
pub mod system;

pub use auxiliary::{AuxiliaryOutputChanged, ChangeAuxiliaryOutput};
pub use dve::{ChangeKeyDve, DveChangeMask};
pub use mix_effect::{
    ChangePreviewBus, ChangeProgramBus, ChangeTransitionPosition, Cut, FadeToBlackChanged,
    PreviewBusChanged, ProgramBusChanged, TransitionPositionChanged,
};
pub use source::{SourcePropertiesChanged, SourceTallies};
pub use system::{
    InitiationComplete, ProductInfo, ProtocolVersion, RequestTimecode, TimecodeChanged, Warning,
};
