// libpn532/src/card/ndef.rs

//! NDEF message TLV layout on MIFARE Classic.
//!
//! The message lives in the data blocks from block 4 on, wrapped as
//! `03 L <message> FE` (or `03 FF Lhi Llo <message> FE` for 255 bytes and
//! up), zero-padded to a whole number of blocks.

use crate::constants::{
    MIFARE_CLASSIC_BLOCK_SIZE, TLV_LENGTH_ESCAPE, TLV_LONG_FORM_THRESHOLD, TLV_NDEF_MESSAGE,
    TLV_TERMINATOR,
};
use crate::types::BlockData;
use crate::{Error, Result};

/// Largest message length the long form can carry.
pub const MAX_MESSAGE_LEN: usize = u16::MAX as usize;

/// Block written at block 4 by the NDEF formatter: a TLV holding one empty
/// record, then the terminator.
pub const EMPTY_NDEF_BLOCK: BlockData = BlockData::from_bytes([
    0x03, 0x03, 0xD0, 0x00, 0x00, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
]);

/// MAD block 1: info byte, CRC slot, then every application ID set to the
/// NDEF AID `03 E1`.
pub const MAD_BLOCK_1: BlockData = BlockData::from_bytes([
    0x14, 0x01, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1,
]);

/// Second MAD block: every remaining sector points at the NDEF application.
pub const MAD_BLOCK_2: BlockData = BlockData::from_bytes([
    0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1, 0x03, 0xE1,
]);

/// Decoded NDEF message TLV header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlvHeader {
    /// Message length in bytes.
    pub message_length: usize,
    /// Offset of the first message byte from the start of block 4.
    pub message_start: usize,
}

/// Space reserved for the TLV header of a message of `len` bytes. The long
/// form reserves 5 bytes; the spare one ends up as padding.
pub fn header_size(len: usize) -> usize {
    if len < TLV_LONG_FORM_THRESHOLD { 2 } else { 5 }
}

/// Bytes needed to store a message of `len` bytes: header, message and
/// terminator, rounded up to whole blocks.
pub fn buffer_size(len: usize) -> usize {
    (header_size(len) + len + 1).div_ceil(MIFARE_CLASSIC_BLOCK_SIZE) * MIFARE_CLASSIC_BLOCK_SIZE
}

/// Encode the TLV header for a message of `len` bytes.
pub fn encode_header(len: usize) -> Result<Vec<u8>> {
    if len > MAX_MESSAGE_LEN {
        return Err(Error::Layout(format!(
            "message of {} bytes exceeds the TLV length limit",
            len
        )));
    }
    if len < TLV_LONG_FORM_THRESHOLD {
        Ok(vec![TLV_NDEF_MESSAGE, len as u8])
    } else {
        Ok(vec![
            TLV_NDEF_MESSAGE,
            TLV_LENGTH_ESCAPE,
            (len >> 8) as u8,
            (len & 0xFF) as u8,
        ])
    }
}

/// Decode the TLV header at the start of block 4.
///
/// `Ok(None)` means the block does not start with an NDEF message TLV,
/// i.e. the card is not NDEF formatted.
pub fn decode_header(data: &[u8]) -> Result<Option<TlvHeader>> {
    match data.first() {
        Some(&TLV_NDEF_MESSAGE) => {}
        _ => return Ok(None),
    }
    match data.get(1) {
        Some(&TLV_LENGTH_ESCAPE) => {
            let hi = *data
                .get(2)
                .ok_or_else(|| Error::Layout("truncated TLV length".into()))?;
            let lo = *data
                .get(3)
                .ok_or_else(|| Error::Layout("truncated TLV length".into()))?;
            Ok(Some(TlvHeader {
                message_length: u16::from_be_bytes([hi, lo]) as usize,
                message_start: 4,
            }))
        }
        Some(&len) => Ok(Some(TlvHeader {
            message_length: len as usize,
            message_start: 2,
        })),
        None => Err(Error::Layout("truncated TLV header".into())),
    }
}

/// Lay out `message` for writing: header, message, terminator, zero
/// padding up to `buffer_size(message.len())`.
pub fn encode_message(message: &[u8]) -> Result<Vec<u8>> {
    let mut buffer = encode_header(message.len())?;
    buffer.extend_from_slice(message);
    buffer.push(TLV_TERMINATOR);
    buffer.resize(buffer_size(message.len()), 0x00);
    Ok(buffer)
}
