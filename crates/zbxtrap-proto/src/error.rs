/// Errors that can occur while encoding or decoding protocol frames.
#[derive(Debug, thiserror::Error)]
pub enum ProtoError {
    /// The response's leading bytes do not match the expected
    /// magic+flag prefix (`ZBXD\x01`). Carries the bytes that were
    /// actually received.
    #[error("invalid response header (expected \"ZBXD\\x01\", got {header:02x?})")]
    InvalidHeader { header: [u8; 5] },

    /// The response body could not be decoded: not valid JSON, no
    /// `info` field, or an `info` summary that does not match the
    /// trapper grammar. Carries the raw body for diagnostics.
    #[error("invalid response from server: {reason}")]
    InvalidResponse { reason: String, raw: Vec<u8> },

    /// The declared response body length exceeds the configured cap.
    #[error("response body too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, ProtoError>;
