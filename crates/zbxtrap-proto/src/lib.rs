//! Wire protocol layer for the Zabbix sender (trapper) interface.
//!
//! Everything here is pure: frame bytes in, structured results out.
//! Each frame is:
//! - The 5-byte magic prefix "ZBXD" 0x01 for stream validation
//! - A little-endian length field (8 bytes outgoing, 4 used incoming)
//! - A JSON envelope body
//!
//! Socket handling lives in `zbxtrap-sender`, built on top of this crate.

pub mod clock;
pub mod codec;
pub mod error;
pub mod request;
pub mod response;

pub use codec::{
    check_body_len, decode_body_len, decode_header, encode_frame, validate_magic,
    DEFAULT_MAX_RESPONSE, MAGIC, MAGIC_SIZE, RESPONSE_LEN_SIZE, RESPONSE_LEN_USED,
};
pub use error::{ProtoError, Result};
pub use request::{DataPoint, RequestEnvelope, SENDER_DATA};
pub use response::{parse_response, parse_summary, TrapperResult};
