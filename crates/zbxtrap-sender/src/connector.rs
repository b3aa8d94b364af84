use std::io::ErrorKind;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use tracing::debug;

use crate::error::{Result, SendError};

/// Open one TCP connection to a trapper endpoint (blocking).
///
/// The same timeout bounds the connect and, via the stream's socket
/// options, every subsequent read and write.
pub fn connect(host: &str, port: u16, timeout: Duration) -> Result<TcpStream> {
    let addr = format!("{host}:{port}");
    let target = (host, port)
        .to_socket_addrs()
        .map_err(|source| SendError::Connect {
            addr: addr.clone(),
            source,
        })?
        .next()
        .ok_or_else(|| SendError::Connect {
            addr: addr.clone(),
            source: std::io::Error::new(ErrorKind::NotFound, "address resolved to nothing"),
        })?;

    let stream =
        TcpStream::connect_timeout(&target, timeout).map_err(|source| SendError::Connect {
            addr: addr.clone(),
            source,
        })?;
    stream.set_read_timeout(Some(timeout))?;
    stream.set_write_timeout(Some(timeout))?;

    debug!(%addr, "connected to trapper");
    Ok(stream)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_to_listener() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let stream = connect("127.0.0.1", port, Duration::from_secs(1)).unwrap();
        assert!(stream.read_timeout().unwrap().is_some());
        assert!(stream.write_timeout().unwrap().is_some());
    }

    #[test]
    fn refused_connection_is_connect_error() {
        // Bind to grab a free port, then close it before connecting.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let err = connect("127.0.0.1", port, Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, SendError::Connect { .. }));
    }
}
