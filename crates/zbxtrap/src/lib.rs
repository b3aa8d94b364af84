//! Client for the Zabbix sender (trapper) wire protocol.
//!
//! zbxtrap packages monitoring values (and low-level discovery
//! payloads) into a framed JSON envelope, ships it over one TCP
//! connection per send, and decodes the acknowledgement into counters
//! the caller can classify.
//!
//! # Crate Structure
//!
//! - [`proto`] — Frame codec, request/response envelopes, summary
//!   grammar. Pure, no I/O.
//! - [`sender`] — Blocking TCP sender, batch and discovery builders,
//!   result classifier.

/// Re-export protocol types.
pub mod proto {
    pub use zbxtrap_proto::*;
}

/// Re-export sender types.
pub mod sender {
    pub use zbxtrap_sender::*;
}
