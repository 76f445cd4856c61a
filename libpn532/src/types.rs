// libpn532/src/types.rs

use crate::Error;
use crate::constants::MIFARE_CLASSIC_BLOCK_SIZE;
use derive_more::Display;
use std::convert::TryFrom;
use std::str::FromStr;

/// Card UID (NFCID1) as reported by InListPassiveTarget. 4, 7 or 10 bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid(Vec<u8>);

impl Uid {
    /// UID from raw bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// UID length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for an empty UID.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex without separators.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.0)
    }
}

impl std::fmt::Display for Uid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::utils::format_uid(&self.0))
    }
}

/// Accepts `74-10-37-94`, `74 10 37 94` or `74103794`.
impl FromStr for Uid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned: String = s.chars().filter(|&c| c != '-' && c != ':').collect();
        let bytes = crate::utils::parse_hex(&cleaned).map_err(Error::InvalidInput)?;
        Ok(Self(bytes))
    }
}

impl From<&[u8]> for Uid {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

/// BlockData (16 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockData([u8; MIFARE_CLASSIC_BLOCK_SIZE]);

impl BlockData {
    /// All-zero block.
    pub const ZERO: Self = Self([0u8; MIFARE_CLASSIC_BLOCK_SIZE]);

    /// Block from raw bytes.
    pub const fn from_bytes(bytes: [u8; MIFARE_CLASSIC_BLOCK_SIZE]) -> Self {
        Self(bytes)
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; MIFARE_CLASSIC_BLOCK_SIZE] {
        &self.0
    }

    /// Lowercase hex.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != MIFARE_CLASSIC_BLOCK_SIZE {
            return Err(Error::InvalidLength {
                expected: MIFARE_CLASSIC_BLOCK_SIZE,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; MIFARE_CLASSIC_BLOCK_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// MIFARE Classic key slot selecting which trailer key authenticates.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeySlot {
    /// Key A.
    #[display(fmt = "A")]
    A,
    /// Key B.
    #[display(fmt = "B")]
    B,
}

impl KeySlot {
    /// Authentication sub-command byte for this slot.
    pub fn auth_command(self) -> u8 {
        match self {
            KeySlot::A => crate::constants::MIFARE_CMD_AUTH_A,
            KeySlot::B => crate::constants::MIFARE_CMD_AUTH_B,
        }
    }
}

/// 6-byte MIFARE Classic sector key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Key([u8; 6]);

impl Key {
    /// Transport key shipped on blank cards.
    pub const DEFAULT: Self = Self([0xFF; 6]);
    /// Public key A of NDEF-formatted sectors.
    pub const NDEF: Self = Self([0xD3, 0xF7, 0xD3, 0xF7, 0xD3, 0xF7]);
    /// Public key A of the MAD sector.
    pub const MAD: Self = Self([0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5]);

    /// Key from raw bytes.
    pub const fn new(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

impl Default for Key {
    fn default() -> Self {
        Key::NDEF
    }
}

/// Sector trailer layout: key A, access bits (incl. GPB), key B.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectorTrailer {
    /// Key A, bytes 0..6.
    pub key_a: Key,
    /// Access bits and general purpose byte, bytes 6..10.
    pub access_bits: [u8; 4],
    /// Key B, bytes 10..16.
    pub key_b: Key,
}

impl SectorTrailer {
    /// Factory state: transport keys, access bits FF 07 80 69.
    pub const FACTORY: Self = Self::new(Key::DEFAULT, [0xFF, 0x07, 0x80, 0x69], Key::DEFAULT);
    /// MAD sector (sector 0) of an NDEF-formatted card.
    pub const MAD: Self = Self::new(Key::MAD, [0x78, 0x77, 0x88, 0xC1], Key::DEFAULT);
    /// NDEF data sector: public key A, read/write access, key B retained.
    pub const NDEF: Self = Self::new(Key::NDEF, [0x7F, 0x07, 0x88, 0x40], Key::DEFAULT);

    /// Trailer from its parts.
    pub const fn new(key_a: Key, access_bits: [u8; 4], key_b: Key) -> Self {
        Self {
            key_a,
            access_bits,
            key_b,
        }
    }

    /// Trailer block bytes.
    pub fn to_block(&self) -> BlockData {
        let mut out = [0u8; MIFARE_CLASSIC_BLOCK_SIZE];
        out[..6].copy_from_slice(self.key_a.as_bytes());
        out[6..10].copy_from_slice(&self.access_bits);
        out[10..].copy_from_slice(self.key_b.as_bytes());
        BlockData::from_bytes(out)
    }

    /// Split a trailer block into its parts.
    pub fn from_block(block: &BlockData) -> Self {
        let b = block.as_bytes();
        let mut key_a = [0u8; 6];
        let mut access_bits = [0u8; 4];
        let mut key_b = [0u8; 6];
        key_a.copy_from_slice(&b[..6]);
        access_bits.copy_from_slice(&b[6..10]);
        key_b.copy_from_slice(&b[10..]);
        Self::new(Key(key_a), access_bits, Key(key_b))
    }

    /// Key stored in the given slot.
    pub fn key(&self, slot: KeySlot) -> &Key {
        match slot {
            KeySlot::A => &self.key_a,
            KeySlot::B => &self.key_b,
        }
    }
}

/// Result of the GetFirmwareVersion command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirmwareVersion {
    /// IC identifier, 0x32 for the PN532.
    pub ic: u8,
    /// Firmware version.
    pub version: u8,
    /// Firmware revision.
    pub revision: u8,
    /// Supported protocol flags.
    pub support: u8,
}

impl std::fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PN5{:02X} firmware {}.{}", self.ic, self.version, self.revision)
    }
}
