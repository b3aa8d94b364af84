use zbxtrap_proto::TrapperResult;

/// Errors that can occur while sending values to a trapper.
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    /// Failed to open the TCP connection.
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        source: std::io::Error,
    },

    /// An I/O error on the open connection (timeout, reset, short
    /// read). Never converted into a protocol error.
    #[error("sender I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Protocol-level error: bad header, undecodable response, or an
    /// oversized declared body.
    #[error(transparent)]
    Proto(#[from] zbxtrap_proto::ProtoError),

    /// JSON serialization of the request envelope failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Classifier signal: some but not all values were rejected.
    #[error("some values failed to be processed: {result}")]
    PartialFailure { result: TrapperResult },

    /// Classifier signal: every value was rejected.
    #[error("all values failed to be processed: {result}")]
    TotalFailure { result: TrapperResult },
}

pub type Result<T> = std::result::Result<T, SendError>;
