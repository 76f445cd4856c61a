use log::{debug, error};

use crate::card::MifareClassic;
use crate::card::blocks::{data_blocks, is_first_block};
use crate::card::ndef;
use crate::constants::{MIFARE_CLASSIC_BLOCK_SIZE, MIFARE_CLASSIC_NDEF_START_BLOCK, NDEF_EMPTY_RECORD};
use crate::device::{Device, Initialized};
use crate::types::{BlockData, KeySlot};
use crate::{Error, Result};

/// Write `message` as an NDEF TLV from block 4, skipping sector trailers and
/// authenticating each sector with the NDEF key as it is entered.
///
/// The first failed authentication or write aborts; blocks already written
/// stay written.
pub fn write_ndef(card: &MifareClassic, device: &mut Device<Initialized>, message: &[u8]) -> Result<()> {
    let encoded = ndef::encode_message(message)?;
    let blocks: Vec<u8> = data_blocks(MIFARE_CLASSIC_NDEF_START_BLOCK)
        .take(encoded.len() / MIFARE_CLASSIC_BLOCK_SIZE)
        .collect();
    if blocks.len() * MIFARE_CLASSIC_BLOCK_SIZE < encoded.len() {
        return Err(Error::Layout(format!(
            "message of {} bytes exceeds card capacity",
            message.len()
        )));
    }

    let key = device.config().ndef_key;
    for (chunk, &block) in encoded.chunks(MIFARE_CLASSIC_BLOCK_SIZE).zip(&blocks) {
        if is_first_block(block) {
            debug!("Authenticating sector of block {}", block);
            card.authenticate(device, block, KeySlot::A, &key)
                .inspect_err(|e| error!("Error, Block authentication failed for {}: {}", block, e))?;
        }
        let data = BlockData::try_from(chunk)?;
        card.write_block(device, block, &data)
            .inspect_err(|e| error!("Error writing block {}: {}", block, e))?;
    }
    debug!("Wrote {} byte message to {} blocks", message.len(), blocks.len());
    Ok(())
}

/// Replace the stored message with a single empty record.
pub fn erase_ndef(card: &MifareClassic, device: &mut Device<Initialized>) -> Result<()> {
    write_ndef(card, device, &NDEF_EMPTY_RECORD)
}
