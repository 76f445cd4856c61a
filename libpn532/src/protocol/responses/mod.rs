// libpn532/src/protocol/responses/mod.rs

/// InListPassiveTarget payload.
pub mod target;
/// GetFirmwareVersion payload.
pub mod version;

pub use target::{PassiveTarget, decode_passive_targets};
pub use version::decode_firmware_version;

use super::commands::Command;

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Chip firmware identity.
    FirmwareVersion(crate::types::FirmwareVersion),
    /// SAM configured.
    SamConfiguration,
    /// RF field switched.
    RfConfiguration,
    /// Scan result.
    InListPassiveTarget {
        /// Number of targets the chip reported.
        count: u8,
        /// First target, when one was reported.
        target: Option<PassiveTarget>,
    },
    /// Card answer relayed by the chip.
    InDataExchange {
        /// 0x00 when the card accepted the command.
        status: u8,
        /// Card payload after the status byte.
        data: Vec<u8>,
    },
}

impl Response {
    /// Decode a response payload (response opcode already stripped) for the
    /// command that produced it.
    pub fn decode(cmd: &Command, data: &[u8]) -> crate::Result<Self> {
        match cmd {
            Command::GetFirmwareVersion => Ok(Self::FirmwareVersion(
                version::decode_firmware_version(data)?,
            )),
            Command::SamConfiguration { .. } => Ok(Self::SamConfiguration),
            Command::RfConfiguration { .. } => Ok(Self::RfConfiguration),
            Command::InListPassiveTarget { .. } => {
                let (count, target) = target::decode_passive_targets(data)?;
                Ok(Self::InListPassiveTarget { count, target })
            }
            Command::InDataExchange { .. } => {
                let status = crate::protocol::parser::byte_at(data, 0)?;
                Ok(Self::InDataExchange {
                    status,
                    data: data[1..].to_vec(),
                })
            }
        }
    }
}
