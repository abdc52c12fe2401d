//! Protocol-level errors for switcher message decoding
//!
//! Every decode failure is synchronous and local to one message: a failed
//! decode never corrupts or blocks decoding of subsequent payloads. Encoding
//! has no error path - a validly constructed message always serializes.

use thiserror::Error;

/// Decode errors with diagnostic context
///
/// Two families of failure are kept distinguishable on purpose:
/// truncated input (the buffer cannot contain what the layout requires) and
/// unrecognized enumeration codes (a well-formed buffer carrying a value
/// this codec does not know). Callers may skip a message with an unknown
/// code without dropping the connection.
///
/// Internally inconsistent layout constants are a programmer error, not a
/// decode error: those panic via slice indexing instead of surfacing here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Payload is shorter than the message type's minimum required length
    #[error("message too small: need {need} bytes, got {got} (context: {context})")]
    MessageTooSmall {
        need: usize,
        got: usize,
        context: &'static str,
    },

    /// A declared entry count implies more bytes than remain in the buffer
    #[error("truncated payload: {count} declared entries need {required} bytes, buffer has {available}")]
    TruncatedPayload {
        required: usize,
        available: usize,
        count: usize,
    },

    /// Raw source id matches no known video source band
    #[error("unknown video source code {raw}")]
    UnknownVideoSource { raw: u16 },

    /// Raw tally byte is outside the known states (0-3)
    #[error("unknown tally light state {raw}")]
    UnknownTallyLight { raw: u8 },

    /// Raw kind code matches no known source kind
    #[error("unknown source kind {raw}")]
    UnknownSourceKind { raw: u16 },

    /// Raw size selector matches no known switcher size
    #[error("unknown switcher size {raw}")]
    UnknownSwitcherSize { raw: u8 },
}

impl ProtocolError {
    /// True for the unrecognized-enumeration family of failures
    ///
    /// These indicate a well-formed buffer carrying a code added after this
    /// codec was written; callers can log and skip rather than treating the
    /// stream as broken.
    pub fn is_unknown_code(&self) -> bool {
        matches!(
            self,
            Self::UnknownVideoSource { .. }
                | Self::UnknownTallyLight { .. }
                | Self::UnknownSourceKind { .. }
                | Self::UnknownSwitcherSize { .. }
        )
    }
}

/// Result type for protocol operations
pub type ProtocolResult<T> = std::result::Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_code_family_is_distinguishable_from_truncation() {
        assert!(ProtocolError::UnknownVideoSource { raw: 9999 }.is_unknown_code());
        assert!(ProtocolError::UnknownTallyLight { raw: 7 }.is_unknown_code());
        assert!(!ProtocolError::MessageTooSmall {
            need: 4,
            got: 2,
            context: "test"
        }
        .is_unknown_code());
        assert!(!ProtocolError::TruncatedPayload {
            required: 32,
            available: 8,
            count: 10
        }
        .is_unknown_code());
    }
}
