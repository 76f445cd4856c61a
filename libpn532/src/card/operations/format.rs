use log::{debug, error, warn};

use crate::card::MifareClassic;
use crate::card::blocks::{first_block_of, trailer_block_of};
use crate::card::ndef::{EMPTY_NDEF_BLOCK, MAD_BLOCK_1, MAD_BLOCK_2};
use crate::constants::MIFARE_CLASSIC_1K_SECTORS;
use crate::device::{Device, Initialized};
use crate::types::{BlockData, Key, KeySlot, SectorTrailer};
use crate::{Error, Result};

/// Format a factory-state card for NDEF: MAD in sector 0, an empty NDEF
/// message in sector 1, NDEF trailers everywhere else.
///
/// Sector 0 failures abort. A data sector whose authentication fails is
/// skipped with a warning; failed writes are collected and reported as
/// [`Error::PartialWrite`] once every sector has been tried.
pub fn format_ndef(card: &MifareClassic, device: &mut Device<Initialized>) -> Result<()> {
    card.authenticate(device, 0, KeySlot::B, &Key::DEFAULT)
        .inspect_err(|e| error!("Unable to authenticate block 0 for formatting: {}", e))?;

    for (block, data) in [(1u8, MAD_BLOCK_1), (2, MAD_BLOCK_2)] {
        card.write_block(device, block, &data)
            .map_err(|e| abort_sector_zero(block, e))?;
    }
    card.write_trailer(device, 0, &SectorTrailer::MAD)
        .map_err(|e| abort_sector_zero(3, e))?;

    let mut failed = Vec::new();
    for sector in 1..MIFARE_CLASSIC_1K_SECTORS {
        let first = first_block_of(sector);
        if let Err(e) = card.authenticate(device, first, KeySlot::B, &Key::DEFAULT) {
            warn!("Unable to authenticate block {} for formatting: {}", first, e);
            continue;
        }
        let head = if sector == 1 { EMPTY_NDEF_BLOCK } else { BlockData::ZERO };
        record(card.write_block(device, first, &head), first, &mut failed);
        record(card.write_block(device, first + 1, &BlockData::ZERO), first + 1, &mut failed);
        record(card.write_block(device, first + 2, &BlockData::ZERO), first + 2, &mut failed);
        record(
            card.write_trailer(device, sector, &SectorTrailer::NDEF),
            first + 3,
            &mut failed,
        );
    }

    finish(failed)
}

/// Return every sector to factory keys with zeroed data (block 0 is left
/// alone). Sectors whose trailer does not accept the default key B are
/// logged and skipped.
pub fn format_blank(card: &MifareClassic, device: &mut Device<Initialized>) -> Result<()> {
    let mut failed = Vec::new();
    for sector in 0..MIFARE_CLASSIC_1K_SECTORS {
        let trailer = trailer_block_of(sector);
        if let Err(e) = card.authenticate(device, trailer, KeySlot::B, &Key::DEFAULT) {
            error!("No keys work! Sector {}: {}", sector, e);
            continue;
        }
        let first = first_block_of(sector);
        let data_blocks = if sector == 0 { 1..3 } else { first..first + 3 };
        for block in data_blocks {
            record(card.write_block(device, block, &BlockData::ZERO), block, &mut failed);
        }
        record(
            card.write_trailer(device, sector, &SectorTrailer::FACTORY),
            trailer,
            &mut failed,
        );
    }

    finish(failed)
}

fn abort_sector_zero(block: u8, e: Error) -> Error {
    error!("Unable to write block {}: {}", block, e);
    Error::PartialWrite { failed: vec![block] }
}

fn record(result: Result<()>, block: u8, failed: &mut Vec<u8>) {
    if let Err(e) = result {
        error!("Unable to write block {}: {}", block, e);
        failed.push(block);
    }
}

fn finish(failed: Vec<u8>) -> Result<()> {
    if failed.is_empty() {
        debug!("All blocks written");
        Ok(())
    } else {
        Err(Error::PartialWrite { failed })
    }
}
