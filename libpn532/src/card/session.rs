// libpn532/src/card/session.rs

use log::{debug, trace};

use crate::card::blocks::{is_trailer_block, trailer_block_of};
use crate::device::{Device, Initialized};
use crate::protocol::parser::expect_status;
use crate::protocol::MifareRequest;
use crate::types::{BlockData, Key, KeySlot, SectorTrailer, Uid};
use crate::{Error, Result};

/// A MIFARE Classic card selected by the chip.
///
/// Authentication state lives in the chip and the card, never here: a
/// successful `authenticate` unlocks the sector of the given block until
/// another sector is authenticated or the card is deselected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MifareClassic {
    uid: Uid,
}

impl MifareClassic {
    /// Wrap the card the chip last selected.
    pub fn new(uid: Uid) -> Self {
        Self { uid }
    }

    /// UID used when authenticating.
    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    /// Authenticate the sector holding `block`. Succeeds only on status 0x00.
    pub fn authenticate(
        &self,
        device: &mut Device<Initialized>,
        block: u8,
        slot: KeySlot,
        key: &Key,
    ) -> Result<()> {
        let (status, data) = device.data_exchange(MifareRequest::Authenticate {
            slot,
            block,
            key: *key,
            uid: self.uid.clone(),
        })?;
        if let Err(e) = expect_status(status, &data) {
            debug!("Authentication failed - Block {} (key {})", block, slot);
            return Err(e);
        }
        Ok(())
    }

    /// Read one 16-byte block.
    pub fn read_block(&self, device: &mut Device<Initialized>, block: u8) -> Result<BlockData> {
        let (status, data) = device.data_exchange(MifareRequest::Read { block })?;
        let data = BlockData::try_from(expect_status(status, &data)?)?;
        trace!(" Block {}: {}", block, data.to_hex());
        Ok(data)
    }

    /// Write one data block. Trailers are refused; use `write_trailer`.
    ///
    /// The write response carries no status check: any response that frames
    /// correctly counts as success.
    pub fn write_block(
        &self,
        device: &mut Device<Initialized>,
        block: u8,
        data: &BlockData,
    ) -> Result<()> {
        if is_trailer_block(block) {
            return Err(Error::Layout(format!(
                "block {} is a sector trailer",
                block
            )));
        }
        self.write_raw(device, block, data)
    }

    /// Overwrite the trailer of `sector` with a key/access-bits template.
    pub fn write_trailer(
        &self,
        device: &mut Device<Initialized>,
        sector: u8,
        trailer: &SectorTrailer,
    ) -> Result<()> {
        self.write_raw(device, trailer_block_of(sector), &trailer.to_block())
    }

    fn write_raw(&self, device: &mut Device<Initialized>, block: u8, data: &BlockData) -> Result<()> {
        trace!(" Write block {}: {}", block, data.to_hex());
        device
            .data_exchange(MifareRequest::Write { block, data: *data })
            .map(|_| ())
    }

    /// Read the NDEF message stored from block 4, `None` when the card is
    /// not NDEF formatted.
    pub fn read_ndef(&self, device: &mut Device<Initialized>) -> Result<Option<Vec<u8>>> {
        crate::card::operations::read_ndef(self, device)
    }

    /// Write an encoded NDEF message from block 4.
    pub fn write_ndef(&self, device: &mut Device<Initialized>, message: &[u8]) -> Result<()> {
        crate::card::operations::write_ndef(self, device, message)
    }

    /// Replace the stored message with a single empty record.
    pub fn erase_ndef(&self, device: &mut Device<Initialized>) -> Result<()> {
        crate::card::operations::erase_ndef(self, device)
    }

    /// Format a factory-state card for NDEF use.
    pub fn format_ndef(&self, device: &mut Device<Initialized>) -> Result<()> {
        crate::card::operations::format_ndef(self, device)
    }

    /// Return every sector to factory keys and zeroed data.
    pub fn format_blank(&self, device: &mut Device<Initialized>) -> Result<()> {
        crate::card::operations::format_blank(self, device)
    }
}
