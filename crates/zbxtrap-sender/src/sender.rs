use std::io::{Read, Write};
use std::net::TcpStream;

use bytes::BytesMut;
use tracing::{debug, warn};
use zbxtrap_proto::{clock, codec, DataPoint, RequestEnvelope, TrapperResult};

use crate::config::SenderConfig;
use crate::connector;
use crate::error::{Result, SendError};

/// Blocking client for the trapper interface.
///
/// Each [`send`](Sender::send) opens its own connection, performs one
/// request/response exchange, and drops the socket on every exit path.
/// A `Sender` holds no connection state, so concurrent sends from
/// multiple threads are independent.
#[derive(Debug, Clone)]
pub struct Sender {
    host: String,
    port: u16,
    config: SenderConfig,
}

impl Sender {
    /// Create a sender with the default configuration.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self::with_config(host, port, SenderConfig::default())
    }

    /// Create a sender with explicit configuration.
    pub fn with_config(host: impl Into<String>, port: u16, config: SenderConfig) -> Self {
        Self {
            host: host.into(),
            port,
            config,
        }
    }

    /// Target address as `host:port`.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Current sender configuration.
    pub fn config(&self) -> &SenderConfig {
        &self.config
    }

    /// Send one data point in a single-element envelope.
    pub fn send_one(&self, point: DataPoint) -> Result<TrapperResult> {
        self.send(std::slice::from_ref(&point))
    }

    /// Send data points and decode the acknowledgement.
    ///
    /// Returns the decoded counters without inspecting them: a
    /// round-trip where every value was rejected is still `Ok`. Use
    /// [`crate::outcome::ensure_processed`] to turn failure counts into
    /// errors.
    pub fn send(&self, points: &[DataPoint]) -> Result<TrapperResult> {
        let envelope_clock = self.config.emit_clock.then(clock::unix_now);
        let body = RequestEnvelope::new(points, envelope_clock).to_bytes()?;

        let mut frame = BytesMut::new();
        codec::encode_frame(&body, &mut frame);

        let outcome = self.dispatch(&frame, points.len());
        if let Err(err) = &outcome {
            warn!(addr = %self.addr(), error = %err, "trapper send failed");
        }
        outcome
    }

    fn dispatch(&self, frame: &[u8], points: usize) -> Result<TrapperResult> {
        let mut stream = connector::connect(&self.host, self.port, self.config.timeout)?;
        debug!(
            addr = %self.addr(),
            points,
            bytes = frame.len(),
            "sending trapper request"
        );

        self.exchange(&mut stream, frame)
        // stream is dropped here on every path; the socket never
        // outlives the call
    }

    fn exchange(&self, stream: &mut TcpStream, frame: &[u8]) -> Result<TrapperResult> {
        stream.write_all(frame)?;
        stream.flush()?;

        let mut magic = [0u8; codec::MAGIC_SIZE];
        stream.read_exact(&mut magic)?;
        codec::validate_magic(&magic)?;

        let mut len_field = [0u8; codec::RESPONSE_LEN_SIZE];
        stream.read_exact(&mut len_field)?;
        let body_len = codec::check_body_len(
            codec::decode_body_len(&len_field),
            self.config.max_response_size,
        )?;

        let mut body = vec![0u8; body_len];
        stream.read_exact(&mut body)?;

        let result = zbxtrap_proto::parse_response(&body)?;
        debug!(%result, "trapper acknowledged");
        Ok(result)
    }
}
