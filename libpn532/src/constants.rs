// libpn532/src/constants.rs
//! Common protocol constants used across the crate

/// PN532 wire frame preamble + start code: 0x00 0x00 0xFF
pub const PN532_PREAMBLE: [u8; 3] = [0x00, 0x00, 0xFF];

/// PN532 wire frame postamble: 0x00
pub const PN532_POSTAMBLE: u8 = 0x00;

/// Frame identifier for host -> chip frames
pub const PN532_TFI_HOST: u8 = 0xD4;
/// Frame identifier for chip -> host frames
pub const PN532_TFI_DEVICE: u8 = 0xD5;

/// Bytes read before the declared length is known
pub const PN532_HEADER_LEN: usize = 6;

/// ACK frame sent by the chip after accepting a command frame
pub const PN532_ACK: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// NACK frame asking the chip to retransmit its last response
pub const PN532_NACK: [u8; 6] = [0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00];

/// Largest TFI + data length representable in a normal frame
pub const PN532_MAX_FRAME_DATA: usize = 255;

// Chip opcodes
/// GetFirmwareVersion opcode
pub const PN532_CMD_GET_FIRMWARE_VERSION: u8 = 0x02;
/// SAMConfiguration opcode
pub const PN532_CMD_SAM_CONFIGURATION: u8 = 0x14;
/// RFConfiguration opcode
pub const PN532_CMD_RF_CONFIGURATION: u8 = 0x32;
/// InDataExchange opcode
pub const PN532_CMD_IN_DATA_EXCHANGE: u8 = 0x40;
/// InListPassiveTarget opcode
pub const PN532_CMD_IN_LIST_PASSIVE_TARGET: u8 = 0x4A;

/// InListPassiveTarget baud rate: ISO14443A at 106 kbit/s
pub const PN532_BRTY_ISO14443A_106: u8 = 0x00;

// MIFARE Classic sub-commands carried inside InDataExchange
/// Authenticate with key A
pub const MIFARE_CMD_AUTH_A: u8 = 0x60;
/// Authenticate with key B
pub const MIFARE_CMD_AUTH_B: u8 = 0x61;
/// Read one 16-byte block
pub const MIFARE_CMD_READ: u8 = 0x30;
/// Write one 16-byte block
pub const MIFARE_CMD_WRITE: u8 = 0xA0;

/// Size of a MIFARE Classic block in bytes
pub const MIFARE_CLASSIC_BLOCK_SIZE: usize = 16;
/// Blocks per sector (1K layout)
pub const MIFARE_CLASSIC_BLOCKS_PER_SECTOR: u8 = 4;
/// Sector count of a MIFARE Classic 1K card
pub const MIFARE_CLASSIC_1K_SECTORS: u8 = 16;
/// Total block count of a MIFARE Classic 1K card
pub const MIFARE_CLASSIC_1K_BLOCKS: u8 = 64;
/// First block of the NDEF payload area
pub const MIFARE_CLASSIC_NDEF_START_BLOCK: u8 = 4;

// NDEF TLV
/// TLV type of an NDEF message
pub const TLV_NDEF_MESSAGE: u8 = 0x03;
/// First length byte announcing the 3-byte form
pub const TLV_LENGTH_ESCAPE: u8 = 0xFF;
/// Terminator TLV closing the message area
pub const TLV_TERMINATOR: u8 = 0xFE;
/// Message lengths at or above this use the 3-byte length form
pub const TLV_LONG_FORM_THRESHOLD: usize = 255;

/// A single empty NDEF record (MB|ME|SR, TNF empty, no type, no payload)
pub const NDEF_EMPTY_RECORD: [u8; 3] = [0xD0, 0x00, 0x00];
