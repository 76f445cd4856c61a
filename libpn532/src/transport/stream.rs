// libpn532/src/transport/stream.rs

//! Transport over any `std::io` byte stream (serial device, socket, pipe).
//!
//! The read deadline is whatever the underlying stream enforces; the
//! per-call `timeout_ms` is only forwarded when a setter is supplied.

use std::io::{ErrorKind, Read, Write};

use crate::transport::traits::Transport;
use crate::{Error, Result};

type TimeoutSetter<S> = Box<dyn FnMut(&mut S, u64) -> std::io::Result<()>>;

/// Transport over a serial port, socket or pipe.
pub struct StreamTransport<S: Read + Write> {
    stream: S,
    set_timeout: Option<TimeoutSetter<S>>,
}

impl<S: Read + Write> StreamTransport<S> {
    /// Wrap `stream`.
    pub fn new(stream: S) -> Self {
        Self {
            stream,
            set_timeout: None,
        }
    }

    /// Install a hook that applies the per-read deadline to the stream,
    /// e.g. `TcpStream::set_read_timeout`.
    pub fn with_timeout_setter<F>(mut self, f: F) -> Self
    where
        F: FnMut(&mut S, u64) -> std::io::Result<()> + 'static,
    {
        self.set_timeout = Some(Box::new(f));
        self
    }

    /// Unwrap the stream.
    pub fn into_inner(self) -> S {
        self.stream
    }
}

fn map_io(err: std::io::Error) -> Error {
    match err.kind() {
        ErrorKind::TimedOut | ErrorKind::WouldBlock | ErrorKind::UnexpectedEof => Error::Timeout,
        _ => Error::Transport(err.to_string()),
    }
}

impl<S: Read + Write> Transport for StreamTransport<S> {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.stream.write_all(data).map_err(map_io)?;
        self.stream.flush().map_err(map_io)
    }

    fn receive_exact(&mut self, len: usize, timeout_ms: u64) -> Result<Vec<u8>> {
        if let Some(set_timeout) = self.set_timeout.as_mut() {
            set_timeout(&mut self.stream, timeout_ms).map_err(map_io)?;
        }
        let mut buf = vec![0u8; len];
        self.stream.read_exact(&mut buf).map_err(map_io)?;
        Ok(buf)
    }
}
