// libpn532/src/card/blocks.rs

//! Block index arithmetic for the 1K layout: 16 sectors of 4 blocks, the
//! last block of every sector being its trailer.

use crate::constants::{MIFARE_CLASSIC_1K_BLOCKS, MIFARE_CLASSIC_BLOCKS_PER_SECTOR};

/// True for sector trailers (keys + access bits).
pub fn is_trailer_block(block: u8) -> bool {
    block % MIFARE_CLASSIC_BLOCKS_PER_SECTOR == MIFARE_CLASSIC_BLOCKS_PER_SECTOR - 1
}

/// True for the first block of a sector; accesses starting here must
/// authenticate first.
pub fn is_first_block(block: u8) -> bool {
    block % MIFARE_CLASSIC_BLOCKS_PER_SECTOR == 0
}

/// Sector holding `block`.
pub fn sector_of(block: u8) -> u8 {
    block / MIFARE_CLASSIC_BLOCKS_PER_SECTOR
}

/// First block of `sector`.
pub fn first_block_of(sector: u8) -> u8 {
    sector * MIFARE_CLASSIC_BLOCKS_PER_SECTOR
}

/// Trailer block (keys and access bits) of `sector`.
pub fn trailer_block_of(sector: u8) -> u8 {
    first_block_of(sector) + MIFARE_CLASSIC_BLOCKS_PER_SECTOR - 1
}

/// Data blocks from `start` to the end of the card, trailers skipped.
pub fn data_blocks(start: u8) -> impl Iterator<Item = u8> {
    (start..MIFARE_CLASSIC_1K_BLOCKS).filter(|&b| !is_trailer_block(b))
}
