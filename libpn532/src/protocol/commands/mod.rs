// libpn532/src/protocol/commands/mod.rs

pub mod mifare;

pub use mifare::MifareRequest;

use crate::constants::{
    PN532_BRTY_ISO14443A_106, PN532_CMD_GET_FIRMWARE_VERSION, PN532_CMD_IN_DATA_EXCHANGE,
    PN532_CMD_IN_LIST_PASSIVE_TARGET, PN532_CMD_RF_CONFIGURATION, PN532_CMD_SAM_CONFIGURATION,
};

/// SAMConfiguration mode byte for normal operation (no SAM).
pub const SAM_MODE_NORMAL: u8 = 0x01;

/// RFConfiguration item selecting the RF field.
const RF_ITEM_FIELD: u8 = 0x01;

/// High-level Command enum. Each variant knows its opcode and encodes the
/// bytes following it; framing happens in `protocol::frame`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Read IC, version, revision and support flags.
    GetFirmwareVersion,
    /// Configure the SAM companion chip.
    SamConfiguration {
        /// Mode byte, normally [`SAM_MODE_NORMAL`].
        mode: u8,
        /// Virtual card timeout in 50 ms units.
        timeout: u8,
        /// Drive the IRQ line.
        use_irq: bool,
    },
    /// Switch the RF field.
    RfConfiguration {
        /// Field state.
        field_on: bool,
    },
    /// Scan for targets in the field.
    InListPassiveTarget {
        /// Targets to report, at most 2.
        max_targets: u8,
        /// Modulation and baud rate.
        baud_rate: u8,
    },
    /// Pass a card command to a listed target.
    InDataExchange {
        /// Logical target number.
        target: u8,
        /// Card command.
        request: MifareRequest,
    },
}

impl Command {
    /// Wake-up SAM configuration sent first during initialization.
    pub fn sam_wakeup() -> Self {
        Self::SamConfiguration {
            mode: SAM_MODE_NORMAL,
            timeout: 0x00,
            use_irq: true,
        }
    }

    /// Operational SAM configuration; the timeout is the poll interval in
    /// 50 ms units, capped at 255.
    pub fn sam_operational(poll_interval_ms: u64) -> Self {
        Self::SamConfiguration {
            mode: SAM_MODE_NORMAL,
            timeout: sam_timeout(poll_interval_ms),
            use_irq: true,
        }
    }

    /// Switch the RF field off.
    pub fn rf_off() -> Self {
        Self::RfConfiguration { field_on: false }
    }

    /// Scan for a single ISO14443A target at 106 kbit/s.
    pub fn scan_single_target() -> Self {
        Self::InListPassiveTarget {
            max_targets: 1,
            baud_rate: PN532_BRTY_ISO14443A_106,
        }
    }

    /// Exchange `request` with the first listed target.
    pub fn data_exchange(request: MifareRequest) -> Self {
        Self::InDataExchange { target: 1, request }
    }

    /// Return the chip opcode.
    pub fn opcode(&self) -> u8 {
        match self {
            Self::GetFirmwareVersion => PN532_CMD_GET_FIRMWARE_VERSION,
            Self::SamConfiguration { .. } => PN532_CMD_SAM_CONFIGURATION,
            Self::RfConfiguration { .. } => PN532_CMD_RF_CONFIGURATION,
            Self::InListPassiveTarget { .. } => PN532_CMD_IN_LIST_PASSIVE_TARGET,
            Self::InDataExchange { .. } => PN532_CMD_IN_DATA_EXCHANGE,
        }
    }

    /// Encode the parameters that follow the opcode.
    pub fn payload(&self) -> Vec<u8> {
        match self {
            Self::GetFirmwareVersion => Vec::new(),
            Self::SamConfiguration {
                mode,
                timeout,
                use_irq,
            } => vec![*mode, *timeout, *use_irq as u8],
            Self::RfConfiguration { field_on } => vec![RF_ITEM_FIELD, *field_on as u8],
            Self::InListPassiveTarget {
                max_targets,
                baud_rate,
            } => vec![*max_targets, *baud_rate],
            Self::InDataExchange { target, request } => {
                let mut out = vec![*target];
                out.extend_from_slice(&request.encode());
                out
            }
        }
    }

    /// Encode opcode + parameters.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = vec![self.opcode()];
        out.extend_from_slice(&self.payload());
        out
    }
}

/// SAM timeout byte derived from a poll interval: 50 ms units, capped at 255.
pub fn sam_timeout(poll_interval_ms: u64) -> u8 {
    (poll_interval_ms / 50).min(255) as u8
}
