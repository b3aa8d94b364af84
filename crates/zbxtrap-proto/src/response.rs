use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use tracing::warn;

use crate::error::{ProtoError, Result};

/// Grammar of the `info` summary string.
///
/// Labels match case-insensitively and the colons and semicolons are
/// optional: `Processed: 3; Failed: 1; Total: 4; Seconds spent: 0.000123`
/// and `processed 3 failed 1 total 4 seconds spent 0.000123` both parse.
/// All four captures are mandatory.
static SUMMARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)processed:?\s+(?P<processed>\d+);?\s+failed:?\s+(?P<failed>\d+);?\s+total:?\s+(?P<total>\d+);?\s+seconds\s+spent:?\s+(?P<seconds>\d+\.\d+)",
    )
    .expect("summary grammar compiles")
});

/// The JSON document carried inside a response frame.
///
/// Unknown fields (`response`, future additions) are ignored; only the
/// `info` summary is decoded.
#[derive(Debug, Deserialize)]
struct ResponseEnvelope {
    info: String,
}

/// Counters decoded from one trapper acknowledgement.
///
/// The terminal artifact of a send: constructed after a successful frame
/// round-trip, inspected by the caller, then discarded. A result with
/// failures is not an error by itself; classification is the caller's
/// move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrapperResult {
    pub processed: u64,
    pub failed: u64,
    pub total: u64,
    pub seconds_spent: f64,
}

impl TrapperResult {
    /// True when every submitted value was accepted.
    pub fn is_fully_processed(&self) -> bool {
        self.failed == 0
    }
}

impl fmt::Display for TrapperResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "processed {}, failed {}, total {} in {}s",
            self.processed, self.failed, self.total, self.seconds_spent
        )
    }
}

/// Decode a response body into a [`TrapperResult`].
///
/// The body must be a JSON envelope with an `info` field whose value
/// matches the summary grammar. Every failure mode maps to
/// [`ProtoError::InvalidResponse`] carrying the raw body bytes.
pub fn parse_response(raw: &[u8]) -> Result<TrapperResult> {
    let envelope: ResponseEnvelope = serde_json::from_slice(raw).map_err(|err| {
        warn!(error = %err, "error decoding trapper response body");
        ProtoError::InvalidResponse {
            reason: format!("body is not a valid envelope: {err}"),
            raw: raw.to_vec(),
        }
    })?;

    parse_summary(&envelope.info).map_err(|err| match err {
        // Re-attach the undecoded body; the summary parser only saw the
        // extracted string.
        ProtoError::InvalidResponse { reason, .. } => {
            warn!(info = %envelope.info, "error parsing trapper summary");
            ProtoError::InvalidResponse {
                reason,
                raw: raw.to_vec(),
            }
        }
        other => other,
    })
}

/// Parse the four counters out of an `info` summary string.
pub fn parse_summary(info: &str) -> Result<TrapperResult> {
    let caps = SUMMARY
        .captures(info)
        .ok_or_else(|| invalid_summary("summary does not match trapper grammar", info))?;

    let processed = parse_count(&caps["processed"], info)?;
    let failed = parse_count(&caps["failed"], info)?;
    let total = parse_count(&caps["total"], info)?;
    let seconds_spent: f64 = caps["seconds"]
        .parse()
        .map_err(|_| invalid_summary("seconds spent is not a decimal float", info))?;

    Ok(TrapperResult {
        processed,
        failed,
        total,
        seconds_spent,
    })
}

fn parse_count(digits: &str, info: &str) -> Result<u64> {
    digits
        .parse()
        .map_err(|_| invalid_summary("counter out of range", info))
}

fn invalid_summary(reason: &str, info: &str) -> ProtoError {
    ProtoError::InvalidResponse {
        reason: reason.to_string(),
        raw: info.as_bytes().to_vec(),
    }
}
