use bytes::{BufMut, BytesMut};

use crate::error::{ProtoError, Result};

/// Magic bytes opening every frame: "ZBXD" plus the protocol flag 0x01.
pub const MAGIC: [u8; 5] = *b"ZBXD\x01";

/// Size of the magic prefix.
pub const MAGIC_SIZE: usize = 5;

/// Size of the length field the server sends back. Only the first
/// [`RESPONSE_LEN_USED`] bytes of it carry the body length.
pub const RESPONSE_LEN_SIZE: usize = 8;

/// Bytes of the response length field that are actually decoded.
pub const RESPONSE_LEN_USED: usize = 4;

/// Default maximum accepted response body size: 16 MiB.
pub const DEFAULT_MAX_RESPONSE: usize = 16 * 1024 * 1024;

/// Encode a request frame into the wire format.
///
/// Wire format (request direction):
/// ```text
/// ┌──────────────────┬───────────────┬─────────────────┐
/// │ Magic (5B)       │ Length        │ Body            │
/// │ "ZBXD" 0x01      │ (8B LE i64)   │ (Length bytes)  │
/// └──────────────────┴───────────────┴─────────────────┘
/// ```
///
/// The length is the byte length of the body, not its character count.
pub fn encode_frame(body: &[u8], dst: &mut BytesMut) {
    dst.reserve(MAGIC_SIZE + RESPONSE_LEN_SIZE + body.len());
    dst.put_slice(&MAGIC);
    dst.put_i64_le(body.len() as i64);
    dst.put_slice(body);
}

/// Validate the 5-byte magic prefix of a response.
pub fn validate_magic(header: &[u8; MAGIC_SIZE]) -> Result<()> {
    if *header != MAGIC {
        return Err(ProtoError::InvalidHeader { header: *header });
    }
    Ok(())
}

/// Decode the response body length from the 8-byte length field.
///
/// The server writes an 8-byte field but only the first 4 bytes are read
/// back, as a `u32` LE. Requests carry an 8-byte length, responses
/// effectively a 4-byte one; this asymmetry is part of the wire contract
/// and must not be unified.
pub fn decode_body_len(field: &[u8; RESPONSE_LEN_SIZE]) -> usize {
    let used: [u8; RESPONSE_LEN_USED] = [field[0], field[1], field[2], field[3]];
    u32::from_le_bytes(used) as usize
}

/// Validate a declared body length against the configured cap.
pub fn check_body_len(len: usize, max: usize) -> Result<usize> {
    if len > max {
        return Err(ProtoError::PayloadTooLarge { size: len, max });
    }
    Ok(len)
}

/// Decode a complete frame header from a contiguous buffer.
///
/// Validates the magic prefix and returns the declared body length.
/// Useful when the whole frame is already in memory; the sender reads
/// the magic and length fields separately off the socket instead.
pub fn decode_header(buf: &[u8]) -> Result<usize> {
    if buf.len() < MAGIC_SIZE + RESPONSE_LEN_SIZE {
        return Err(ProtoError::InvalidHeader {
            header: truncated_header(buf),
        });
    }
    let mut magic = [0u8; MAGIC_SIZE];
    magic.copy_from_slice(&buf[..MAGIC_SIZE]);
    validate_magic(&magic)?;

    let mut field = [0u8; RESPONSE_LEN_SIZE];
    field.copy_from_slice(&buf[MAGIC_SIZE..MAGIC_SIZE + RESPONSE_LEN_SIZE]);
    Ok(decode_body_len(&field))
}

fn truncated_header(buf: &[u8]) -> [u8; MAGIC_SIZE] {
    let mut header = [0u8; MAGIC_SIZE];
    let n = buf.len().min(MAGIC_SIZE);
    header[..n].copy_from_slice(&buf[..n]);
    header
}
