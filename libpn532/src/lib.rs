// libpn532/src/lib.rs

//! libpn532
//!
//! Pure Rust driver for the NXP PN532 NFC controller over a framed byte
//! stream, with MIFARE Classic sector access and NDEF layout management.
#![warn(missing_docs)]

pub mod card;
pub mod constants;
/// Device handle and configuration.
pub mod device;
/// Error type.
pub mod error;
/// Commonly used items.
pub mod prelude;
/// PN532 frame codec, commands and responses.
pub mod protocol;
pub mod reader;
pub mod tag;
pub mod test_support;
/// Byte-stream transports.
pub mod transport;
/// Shared value types.
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
