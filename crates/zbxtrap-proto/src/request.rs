use serde::Serialize;

use crate::clock;

/// Request type the trapper interface expects for pushed values.
pub const SENDER_DATA: &str = "sender data";

/// A single measurement pushed to the trapper interface.
///
/// Serialized verbatim into the request envelope's `data` array. The
/// value is always a JSON string; for low-level discovery it is itself
/// a JSON-encoded document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataPoint {
    pub host: String,
    pub key: String,
    pub value: String,
    pub clock: i64,
}

impl DataPoint {
    /// Create a data point stamped with the current Unix time.
    pub fn new(
        host: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::with_clock(host, key, value, clock::unix_now())
    }

    /// Create a data point with an explicit Unix timestamp.
    pub fn with_clock(
        host: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
        clock: i64,
    ) -> Self {
        Self {
            host: host.into(),
            key: key.into(),
            value: value.into(),
            clock,
        }
    }
}

/// The JSON document carried inside a request frame.
///
/// `data` preserves the caller's insertion order. The envelope-level
/// `clock` is optional on the wire; emission is decided by the sender
/// configuration.
#[derive(Debug, Serialize)]
pub struct RequestEnvelope<'a> {
    pub request: &'static str,
    pub data: &'a [DataPoint],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock: Option<i64>,
}

impl<'a> RequestEnvelope<'a> {
    /// Build a `sender data` envelope over the given points.
    pub fn new(data: &'a [DataPoint], clock: Option<i64>) -> Self {
        Self {
            request: SENDER_DATA,
            data,
            clock,
        }
    }

    /// Serialize the envelope to its JSON body bytes.
    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}
