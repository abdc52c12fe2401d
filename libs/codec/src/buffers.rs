//! Field-layout primitives
//!
//! ## Purpose
//!
//! Byte-level building blocks shared by every message definition: big-endian
//! integer extraction at relative offsets, and fixed-capacity output buffer
//! construction where every byte is deliberately set before it can reach the
//! wire.
//!
//! ## Preconditions
//!
//! The read functions index the slice directly. Decoders validate a
//! payload's minimum length once, up front, via [`ensure_len`]; after that
//! check an out-of-range offset can only come from an inconsistent layout
//! constant in the message definition itself - a programmer error that
//! panics loudly rather than truncating silently. Malformed *input* never
//! reaches the panic path.

use byteorder::{BigEndian, ByteOrder};
use std::ops::Range;
use switchwire_types::{ProtocolError, ProtocolResult};

/// Reject payloads shorter than a message type's minimum required length
///
/// Called before any field read so that truncated input surfaces as a
/// recoverable [`ProtocolError::MessageTooSmall`], never an out-of-bounds
/// access.
pub fn ensure_len(payload: &[u8], need: usize, context: &'static str) -> ProtocolResult<()> {
    if payload.len() < need {
        return Err(ProtocolError::MessageTooSmall {
            need,
            got: payload.len(),
            context,
        });
    }
    Ok(())
}

/// Read one byte at a relative offset
pub fn read_u8(payload: &[u8], offset: usize) -> u8 {
    payload[offset]
}

/// Read a big-endian u16 at a relative offset
pub fn read_u16(payload: &[u8], offset: usize) -> u16 {
    BigEndian::read_u16(&payload[offset..offset + 2])
}

/// Read a big-endian u32 at a relative offset
pub fn read_u32(payload: &[u8], offset: usize) -> u32 {
    BigEndian::read_u32(&payload[offset..offset + 4])
}

/// Extract a null-terminated text run from a fixed-width field
///
/// Returns the bytes before the first zero, or the whole field when no
/// terminator is present (a name may occupy its full width).
pub fn read_terminated_text(payload: &[u8], range: Range<usize>) -> &[u8] {
    let field = &payload[range];
    match field.iter().position(|&b| b == 0) {
        Some(end) => &field[..end],
        None => field,
    }
}

/// Fixed-capacity output buffer for fixed-layout messages
///
/// Allocated once at the message's declared total length and zero-filled,
/// so reserved bytes the protocol requires to be zero need no explicit
/// assignment. Writing past capacity panics: the capacity comes from the
/// message definition, not from input.
pub struct PayloadWriter {
    buf: Vec<u8>,
}

impl PayloadWriter {
    /// Allocate a zero-filled buffer of the message's declared length
    pub fn new(length: usize) -> Self {
        Self {
            buf: vec![0; length],
        }
    }

    /// Place one byte at an absolute offset
    pub fn put_u8(&mut self, offset: usize, value: u8) {
        self.buf[offset] = value;
    }

    /// Place a big-endian u16 starting at an absolute offset
    pub fn put_u16(&mut self, offset: usize, value: u16) {
        BigEndian::write_u16(&mut self.buf[offset..offset + 2], value);
    }

    /// Place a big-endian u32 starting at an absolute offset
    pub fn put_u32(&mut self, offset: usize, value: u32) {
        BigEndian::write_u32(&mut self.buf[offset..offset + 4], value);
    }

    /// Copy a byte run into a fixed range, truncating to fit
    ///
    /// Bytes of the range not covered by `bytes` stay zero, which yields the
    /// null termination for fixed-width text fields.
    pub fn put_bytes(&mut self, range: Range<usize>, bytes: &[u8]) {
        let field = &mut self.buf[range];
        let n = field.len().min(bytes.len());
        field[..n].copy_from_slice(&bytes[..n]);
    }

    /// Finish construction and take the buffer
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn big_endian_reads() {
        let payload = [0x01, 0x02, 0x03, 0x04, 0x05];
        assert_eq!(read_u8(&payload, 4), 0x05);
        assert_eq!(read_u16(&payload, 1), 0x0203);
        assert_eq!(read_u32(&payload, 0), 0x0102_0304);
    }

    #[test]
    fn ensure_len_rejects_short_buffers() {
        let payload = [0u8; 3];
        assert!(ensure_len(&payload, 3, "test").is_ok());
        assert_eq!(
            ensure_len(&payload, 4, "test"),
            Err(ProtocolError::MessageTooSmall {
                need: 4,
                got: 3,
                context: "test"
            })
        );
    }

    #[test]
    fn writer_zero_fills_and_places_fields() {
        let mut writer = PayloadWriter::new(8);
        writer.put_u8(0, 0xAA);
        writer.put_u16(2, 0x1234);
        writer.put_u32(4, 0xDEAD_BEEF);
        assert_eq!(
            writer.finish(),
            [0xAA, 0x00, 0x12, 0x34, 0xDE, 0xAD, 0xBE, 0xEF]
        );
    }

    #[test]
    fn put_bytes_truncates_and_zero_pads() {
        let mut writer = PayloadWriter::new(6);
        writer.put_bytes(0..4, b"abcdef");
        assert_eq!(writer.finish(), *b"abcd\0\0");

        let mut writer = PayloadWriter::new(6);
        writer.put_bytes(0..4, b"ab");
        assert_eq!(writer.finish(), *b"ab\0\0\0\0");
    }

    #[test]
    fn terminated_text_stops_at_first_zero() {
        let payload = *b"\x00\x01Cam 1\0\0\0trailing";
        assert_eq!(read_terminated_text(&payload, 2..10), b"Cam 1");
        // A field with no terminator occupies its full width
        assert_eq!(read_terminated_text(&payload, 10..14), b"trai");
    }

    #[test]
    #[should_panic]
    fn out_of_range_layout_constant_panics() {
        let payload = [0u8; 2];
        read_u16(&payload, 1);
    }
}
