// libpn532/src/protocol/mod.rs

/// LCS and DCS checksums.
pub mod checksum;
pub mod codec;
/// Request types and their encoding.
pub mod commands;
/// Normal information frame.
pub mod frame;
/// Bounds-checked payload accessors.
pub mod parser;
/// Response types and their decoding.
pub mod responses;

pub use checksum::{dcs, lcs};
pub use commands::*;
pub use frame::Frame;
pub use responses::*;
