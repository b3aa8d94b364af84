//! Blocking TCP client for the Zabbix sender (trapper) protocol.
//!
//! This is the "just works" layer. Build data points, send them in one
//! framed envelope over one connection per call, and decode the
//! server's acknowledgement into counters.
//!
//! No pooling, no TLS, no retries: each send owns a private socket for
//! exactly the duration of the call, which also makes concurrent sends
//! from multiple threads safe.

pub mod batch;
pub mod config;
pub mod connector;
pub mod discovery;
pub mod error;
pub mod outcome;
pub mod sender;

pub use batch::Batch;
pub use config::{SenderConfig, DEFAULT_PORT, DEFAULT_TIMEOUT};
pub use discovery::{Discovery, MacroTemplate};
pub use error::{Result, SendError};
pub use outcome::ensure_processed;
pub use sender::Sender;
