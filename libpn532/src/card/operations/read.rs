use log::{debug, error, warn};

use crate::card::blocks::{data_blocks, is_first_block};
use crate::card::ndef;
use crate::card::{MifareClassic, ReadPolicy};
use crate::constants::{MIFARE_CLASSIC_BLOCK_SIZE, MIFARE_CLASSIC_NDEF_START_BLOCK};
use crate::device::{Device, Initialized};
use crate::types::KeySlot;
use crate::{Error, Result};

/// Read the NDEF message stored from block 4.
///
/// Returns `Ok(None)` when block 4 cannot be authenticated with the NDEF key
/// or does not start with an NDEF message TLV. With
/// [`ReadPolicy::BestEffort`] blocks that fail later in the loop are logged
/// and left out, so the message may come back short.
pub fn read_ndef(card: &MifareClassic, device: &mut Device<Initialized>) -> Result<Option<Vec<u8>>> {
    let key = device.config().ndef_key;
    let policy = device.config().read_policy;
    let start = MIFARE_CLASSIC_NDEF_START_BLOCK;

    if let Err(e) = card.authenticate(device, start, KeySlot::A, &key) {
        debug!("Tag is not NDEF formatted: {}", e);
        return Ok(None);
    }
    let first = match card.read_block(device, start) {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to read block {}: {}", start, e);
            return Ok(None);
        }
    };
    let header = match ndef::decode_header(first.as_bytes())? {
        Some(header) => header,
        None => {
            debug!("Tag is not NDEF formatted");
            return Ok(None);
        }
    };

    let size = ndef::buffer_size(header.message_length);
    let needed = size / MIFARE_CLASSIC_BLOCK_SIZE;
    let available = data_blocks(start).count();
    if needed > available {
        return Err(Error::Layout(format!(
            "declared message length {} needs {} blocks, card has {}",
            header.message_length, needed, available
        )));
    }
    debug!(
        "Reading NDEF message: {} bytes in {} blocks",
        header.message_length, needed
    );

    // The first block is read again inside the loop so every sector goes
    // through the same authenticate-then-read path.
    let mut buffer = Vec::with_capacity(size);
    for block in data_blocks(start).take(needed) {
        if is_first_block(block) {
            if let Err(e) = card.authenticate(device, block, KeySlot::A, &key) {
                error!("Block authentication failed for {}: {}", block, e);
                if policy == ReadPolicy::Strict {
                    return Err(Error::Layout(format!(
                        "sector of block {} failed to authenticate",
                        block
                    )));
                }
            }
        }
        match card.read_block(device, block) {
            Ok(data) => buffer.extend_from_slice(data.as_bytes()),
            Err(e) => {
                warn!("Error reading block {}: {}", block, e);
                if policy == ReadPolicy::Strict {
                    return Err(Error::Layout(format!("block {} unreadable: {}", block, e)));
                }
            }
        }
    }

    let begin = header.message_start.min(buffer.len());
    let end = (header.message_start + header.message_length).min(buffer.len());
    let message = buffer[begin..end].to_vec();
    if message.len() < header.message_length {
        warn!(
            "NDEF message truncated: {} of {} bytes",
            message.len(),
            header.message_length
        );
    }
    Ok(Some(message))
}
