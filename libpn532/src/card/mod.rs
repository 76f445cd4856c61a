// libpn532/src/card/mod.rs

//! MIFARE Classic card access: block arithmetic, per-block primitives and
//! the NDEF storage layout built on them.

pub mod blocks;
pub mod ndef;
/// Read, write and format procedures over a whole card.
pub mod operations;
mod session;

pub use session::MifareClassic;

/// How the NDEF read loop treats a block that fails to authenticate or read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReadPolicy {
    /// Log the failure and omit the block's bytes. The returned message
    /// may be truncated or shifted.
    #[default]
    BestEffort,
    /// Abort the read with a layout error.
    Strict,
}
