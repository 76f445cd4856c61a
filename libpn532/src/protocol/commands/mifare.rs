// libpn532/src/protocol/commands/mifare.rs

//! MIFARE Classic sub-commands carried inside InDataExchange.

use crate::constants::{MIFARE_CMD_READ, MIFARE_CMD_WRITE};
use crate::types::{BlockData, Key, KeySlot, Uid};

/// MIFARE Classic sub-command carried in an InDataExchange frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MifareRequest {
    /// Authenticate the sector holding `block`.
    Authenticate {
        /// Key slot to authenticate with.
        slot: KeySlot,
        /// Any block of the target sector.
        block: u8,
        /// Six-byte sector key.
        key: Key,
        /// UID of the selected card.
        uid: Uid,
    },
    /// Read one block.
    Read {
        /// Block number.
        block: u8,
    },
    /// Write one block.
    Write {
        /// Block number.
        block: u8,
        /// Block content.
        data: BlockData,
    },
}

impl MifareRequest {
    /// Sub-command byte, block number and arguments.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Authenticate {
                slot,
                block,
                key,
                uid,
            } => {
                let mut out = Vec::with_capacity(2 + 6 + uid.len());
                out.push(slot.auth_command());
                out.push(*block);
                out.extend_from_slice(key.as_bytes());
                out.extend_from_slice(uid.as_bytes());
                out
            }
            Self::Read { block } => vec![MIFARE_CMD_READ, *block],
            Self::Write { block, data } => {
                let mut out = Vec::with_capacity(2 + 16);
                out.push(MIFARE_CMD_WRITE);
                out.push(*block);
                out.extend_from_slice(data.as_bytes());
                out
            }
        }
    }
}
