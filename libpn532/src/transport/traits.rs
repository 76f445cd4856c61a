// libpn532/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts the byte stream to the chip away from
/// protocol/device logic. Implementations must preserve byte order and
/// must not merge or split writes.
pub trait Transport {
    /// Write raw bytes to the chip
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Read exactly `len` bytes, failing with `Error::Timeout` when they do
    /// not arrive within `timeout_ms`.
    fn receive_exact(&mut self, len: usize, timeout_ms: u64) -> Result<Vec<u8>>;

    /// Discard buffered input. Default implementation does nothing.
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        (**self).send(data)
    }

    fn receive_exact(&mut self, len: usize, timeout_ms: u64) -> Result<Vec<u8>> {
        (**self).receive_exact(len, timeout_ms)
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }
}
