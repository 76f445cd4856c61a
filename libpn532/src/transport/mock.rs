// libpn532/src/transport/mock.rs

use std::collections::VecDeque;

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records written frames and serves
/// reads from a queue of pre-seeded bytes.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Every buffer written by the driver.
    pub sent: Vec<Vec<u8>>,
    /// Bytes waiting to be read.
    pub incoming: VecDeque<u8>,
    /// Testing hook: number of subsequent sends that should fail
    pub send_failures: usize,
    /// Number of `reset` calls seen.
    pub resets: usize,
}

impl MockTransport {
    /// Empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue bytes for reading.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.incoming.extend(bytes.iter().copied());
    }

    /// Set how many subsequent sends should fail (for tests).
    pub fn set_send_failures(&mut self, n: usize) {
        self.send_failures = n;
    }

    /// True when every queued byte was read.
    pub fn is_drained(&self) -> bool {
        self.incoming.is_empty()
    }
}

impl Transport for MockTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        if self.send_failures > 0 {
            self.send_failures -= 1;
            return Err(Error::Transport("simulated write failure".into()));
        }
        self.sent.push(data.to_vec());
        Ok(())
    }

    fn receive_exact(&mut self, len: usize, _timeout_ms: u64) -> Result<Vec<u8>> {
        if self.incoming.len() < len {
            // A short read leaves the stream empty, as a real deadline would.
            self.incoming.clear();
            return Err(Error::Timeout);
        }
        Ok(self.incoming.drain(..len).collect())
    }

    // Seeded bytes stand for what the chip sends after the reset, so they
    // are kept.
    fn reset(&mut self) -> Result<()> {
        self.resets += 1;
        Ok(())
    }
}
