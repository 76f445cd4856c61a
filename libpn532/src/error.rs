// libpn532/src/error.rs

use thiserror::Error;

use crate::tag::TagFamily;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    /// No bytes arrived before the transport read deadline.
    #[error("operation timed out: no response")]
    Timeout,

    /// The underlying byte stream failed.
    #[error("transport error: {0}")]
    Transport(String),

    /// Six bytes arrived where an ACK frame was expected.
    #[error("invalid acknowledgement: {0:02x?}")]
    InvalidAck(Vec<u8>),

    /// A frame or payload had the wrong size.
    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// LCS or DCS did not verify.
    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    /// A frame was structurally malformed.
    #[error("frame format error: {0}")]
    FrameFormat(String),

    /// The response opcode did not answer the request.
    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    /// The chip answered but the card sub-command was rejected.
    #[error("chip status error: {status:#04x}")]
    ChipStatus { status: u8 },

    /// The card content or a block number broke the storage layout.
    #[error("layout error: {0}")]
    Layout(String),

    /// Caller-supplied text (a UID, a key) did not parse.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Some blocks of a multi-block write were not written.
    #[error("write failed for blocks {failed:?}")]
    PartialWrite { failed: Vec<u8> },

    /// The tag family has no sector storage.
    #[error("unsupported tag family: {0}")]
    UnsupportedTag(TagFamily),
}

impl Error {
    /// True for checksum, header, length and opcode-correlation failures.
    pub fn is_framing(&self) -> bool {
        matches!(
            self,
            Error::InvalidAck(_)
                | Error::InvalidLength { .. }
                | Error::ChecksumMismatch { .. }
                | Error::FrameFormat(_)
                | Error::UnexpectedResponse { .. }
        )
    }

    /// True when the transport read deadline expired.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout)
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
