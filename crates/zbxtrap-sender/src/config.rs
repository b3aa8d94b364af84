use std::time::Duration;

use zbxtrap_proto::DEFAULT_MAX_RESPONSE;

/// Default trapper port.
pub const DEFAULT_PORT: u16 = 10051;

/// Default socket timeout, applied to connect and each read/write.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Controls sender behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SenderConfig {
    /// Timeout for connect and for each individual read and write.
    pub timeout: Duration,
    /// When true, the request envelope carries a top-level `clock`
    /// stamped at send time.
    pub emit_clock: bool,
    /// Maximum accepted response body size in bytes.
    pub max_response_size: usize,
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            emit_clock: true,
            max_response_size: DEFAULT_MAX_RESPONSE,
        }
    }
}
