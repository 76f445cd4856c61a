//! Test support helpers intended for use by unit and integration tests.
//!
//! `SimulatedChip` answers the framed protocol the way the PN532 does
//! (ACK, response, retransmission on NACK) and emulates a MIFARE Classic
//! 1K card in the field, so card procedures can be exercised end to end.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

use crate::constants::{
    MIFARE_CLASSIC_1K_BLOCKS, MIFARE_CLASSIC_BLOCK_SIZE, MIFARE_CMD_AUTH_A, MIFARE_CMD_AUTH_B,
    MIFARE_CMD_READ, MIFARE_CMD_WRITE, PN532_ACK, PN532_CMD_GET_FIRMWARE_VERSION,
    PN532_CMD_IN_DATA_EXCHANGE, PN532_CMD_IN_LIST_PASSIVE_TARGET, PN532_CMD_RF_CONFIGURATION,
    PN532_CMD_SAM_CONFIGURATION, PN532_HEADER_LEN, PN532_NACK, PN532_POSTAMBLE, PN532_PREAMBLE,
    PN532_TFI_DEVICE, PN532_TFI_HOST,
};
use crate::device::{Device, DeviceConfig, Initialized};
use crate::protocol::Frame;
use crate::protocol::checksum::{dcs_with_tfi, lcs};
use crate::transport::mock::MockTransport;
use crate::transport::traits::Transport;
use crate::types::SectorTrailer;
use crate::{Error, Result};

/// Status byte the chip reports for a failed MIFARE operation.
pub const STATUS_MIFARE_ERROR: u8 = 0x14;
/// Status byte for a card that stopped answering.
pub const STATUS_TIMEOUT: u8 = 0x01;

/// Firmware answer of a PN532 v1.6.
pub const FIRMWARE_RESPONSE: [u8; 4] = [0x32, 0x01, 0x06, 0x07];

/// Build a chip -> host frame for response opcode `resp_opcode`.
#[doc(hidden)]
pub fn response_frame(resp_opcode: u8, payload: &[u8]) -> Vec<u8> {
    let len = (payload.len() + 2) as u8;
    let mut data = vec![resp_opcode];
    data.extend_from_slice(payload);

    let mut out = PN532_PREAMBLE.to_vec();
    out.push(len);
    out.push(lcs(len));
    out.push(PN532_TFI_DEVICE);
    out.extend_from_slice(&data);
    out.push(dcs_with_tfi(PN532_TFI_DEVICE, &data));
    out.push(PN532_POSTAMBLE);
    out
}

/// Seed a MockTransport with everything one exchange reads: the ACK, the
/// response header peeked before the NACK, then the retransmitted frame.
#[doc(hidden)]
pub fn seed_exchange(mock: &mut MockTransport, resp_opcode: u8, payload: &[u8]) {
    let frame = response_frame(resp_opcode, payload);
    mock.push_bytes(&PN532_ACK);
    mock.push_bytes(&frame[..PN532_HEADER_LEN]);
    mock.push_bytes(&frame);
}

/// Initialize a device on top of the simulated chip.
#[doc(hidden)]
pub fn initialized_device(chip: &SimulatedChip) -> Result<Device<Initialized>> {
    initialized_device_with(chip, DeviceConfig::default())
}

/// Initialized device over `chip` with an explicit configuration.
#[doc(hidden)]
pub fn initialized_device_with(
    chip: &SimulatedChip,
    config: DeviceConfig,
) -> Result<Device<Initialized>> {
    Device::with_config(Box::new(chip.clone()), config).initialize()
}

/// Initialize a device and select the card in the field.
#[doc(hidden)]
pub fn scanned_device(chip: &SimulatedChip) -> Result<Device<Initialized>> {
    scanned_device_with(chip, DeviceConfig::default())
}

/// Initialized device with the card in the field already listed.
#[doc(hidden)]
pub fn scanned_device_with(
    chip: &SimulatedChip,
    config: DeviceConfig,
) -> Result<Device<Initialized>> {
    let mut device = initialized_device_with(chip, config)?;
    device
        .in_list_passive_target()?
        .ok_or_else(|| Error::Transport("no card in field".into()))?;
    Ok(device)
}

type Block = [u8; MIFARE_CLASSIC_BLOCK_SIZE];

#[derive(Debug, Clone)]
struct SimulatedCard {
    uid: Vec<u8>,
    blocks: Vec<Block>,
    present: bool,
    selected: bool,
    authenticated: Option<u8>,
}

impl SimulatedCard {
    /// Factory state: manufacturer block, zeroed data, transport trailers.
    fn blank(uid: Vec<u8>) -> Self {
        let mut blocks = vec![[0u8; MIFARE_CLASSIC_BLOCK_SIZE]; MIFARE_CLASSIC_1K_BLOCKS as usize];
        let factory = *SectorTrailer::FACTORY.to_block().as_bytes();
        for (i, block) in blocks.iter_mut().enumerate() {
            if i % 4 == 3 {
                *block = factory;
            }
        }
        let n = uid.len().min(MIFARE_CLASSIC_BLOCK_SIZE - 1);
        blocks[0][..n].copy_from_slice(&uid[..n]);
        blocks[0][n] = uid.iter().fold(0, |acc, b| acc ^ b);
        Self {
            uid,
            blocks,
            present: true,
            selected: false,
            authenticated: None,
        }
    }

    fn deselect(&mut self) {
        self.selected = false;
        self.authenticated = None;
    }
}

#[derive(Debug, Default)]
struct ChipState {
    card: Option<SimulatedCard>,
    field_on: bool,
    silent: bool,
    outgoing: VecDeque<u8>,
    last_response: Vec<u8>,
    sent: Vec<Vec<u8>>,
    auth_log: Vec<u8>,
    failing_reads: HashSet<u8>,
    dropped_writes: HashSet<u8>,
}

/// In-memory PN532 with an optional MIFARE Classic 1K card in its field.
///
/// Clones share state, so a test can keep one handle for inspection while
/// the device owns another as its transport.
#[derive(Debug, Clone, Default)]
pub struct SimulatedChip {
    state: Rc<RefCell<ChipState>>,
}

impl SimulatedChip {
    /// A chip with an empty field.
    pub fn new() -> Self {
        Self::default()
    }

    /// A chip with a factory-state card carrying `uid` in its field.
    pub fn with_card(uid: Vec<u8>) -> Self {
        let chip = Self::new();
        chip.insert_card(uid);
        chip
    }

    /// Put a card in the field. Re-inserting the same UID keeps its memory.
    pub fn insert_card(&self, uid: Vec<u8>) {
        let mut state = self.state.borrow_mut();
        match state.card.as_mut() {
            Some(card) if card.uid == uid => card.present = true,
            _ => state.card = Some(SimulatedCard::blank(uid)),
        }
    }

    /// Take the card out of the field.
    pub fn remove_card(&self) {
        if let Some(card) = self.state.borrow_mut().card.as_mut() {
            card.present = false;
            card.deselect();
        }
    }

    /// Every frame written by the host, NACKs included.
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.state.borrow().sent.clone()
    }

    /// Block numbers of every authentication attempt, in order.
    pub fn auth_log(&self) -> Vec<u8> {
        self.state.borrow().auth_log.clone()
    }

    /// Current RF field state.
    pub fn field_on(&self) -> bool {
        self.state.borrow().field_on
    }

    /// Raw card memory, trailers shown with their real keys.
    pub fn block(&self, block: u8) -> Block {
        self.state
            .borrow()
            .card
            .as_ref()
            .map(|c| c.blocks[block as usize])
            .unwrap_or([0u8; MIFARE_CLASSIC_BLOCK_SIZE])
    }

    /// Overwrite a block directly.
    pub fn set_block(&self, block: u8, data: Block) {
        if let Some(card) = self.state.borrow_mut().card.as_mut() {
            card.blocks[block as usize] = data;
        }
    }

    /// Make the card NAK every read of `block`.
    pub fn fail_reads_of(&self, block: u8) {
        self.state.borrow_mut().failing_reads.insert(block);
    }

    /// Make the chip swallow writes to `block` without answering.
    pub fn drop_writes_to(&self, block: u8) {
        self.state.borrow_mut().dropped_writes.insert(block);
    }

    /// Stop answering frames entirely.
    pub fn set_silent(&self, silent: bool) {
        self.state.borrow_mut().silent = silent;
    }
}

impl Transport for SimulatedChip {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.sent.push(data.to_vec());
        if data == PN532_NACK {
            let resend = state.last_response.clone();
            state.outgoing = resend.into();
            return Ok(());
        }
        state.outgoing.clear();
        if state.silent {
            return Ok(());
        }

        // Frames that fail to decode are ignored, as the chip does.
        let frame = match Frame::decode(data) {
            Ok(frame) if frame.tfi == PN532_TFI_HOST => frame,
            _ => return Ok(()),
        };
        let Some((&opcode, params)) = frame.data.split_first() else {
            return Ok(());
        };
        let Some(payload) = state.handle(opcode, params) else {
            return Ok(());
        };

        let mut reply = vec![opcode.wrapping_add(1)];
        reply.extend_from_slice(&payload);
        let encoded = Frame {
            tfi: PN532_TFI_DEVICE,
            data: reply,
        }
        .encode()?;
        state.outgoing.extend(PN532_ACK);
        state.outgoing.extend(encoded.iter().copied());
        state.last_response = encoded;
        Ok(())
    }

    fn receive_exact(&mut self, len: usize, _timeout_ms: u64) -> Result<Vec<u8>> {
        let mut state = self.state.borrow_mut();
        if state.outgoing.len() < len {
            state.outgoing.clear();
            return Err(Error::Timeout);
        }
        Ok(state.outgoing.drain(..len).collect())
    }

    fn reset(&mut self) -> Result<()> {
        self.state.borrow_mut().outgoing.clear();
        Ok(())
    }
}

impl ChipState {
    /// Response payload for a command, `None` to stay silent.
    fn handle(&mut self, opcode: u8, params: &[u8]) -> Option<Vec<u8>> {
        match opcode {
            PN532_CMD_GET_FIRMWARE_VERSION => Some(FIRMWARE_RESPONSE.to_vec()),
            PN532_CMD_SAM_CONFIGURATION => Some(Vec::new()),
            PN532_CMD_RF_CONFIGURATION => {
                if params == [0x01, 0x00] {
                    self.field_on = false;
                    if let Some(card) = self.card.as_mut() {
                        card.deselect();
                    }
                }
                Some(Vec::new())
            }
            PN532_CMD_IN_LIST_PASSIVE_TARGET => {
                self.field_on = true;
                match self.card.as_mut().filter(|c| c.present) {
                    Some(card) => {
                        card.selected = true;
                        card.authenticated = None;
                        let sens_res: u16 = if card.uid.len() == 4 { 0x0004 } else { 0x0044 };
                        let mut out = vec![0x01, 0x01];
                        out.extend_from_slice(&sens_res.to_be_bytes());
                        out.push(0x08);
                        out.push(card.uid.len() as u8);
                        out.extend_from_slice(&card.uid);
                        Some(out)
                    }
                    None => Some(vec![0x00]),
                }
            }
            PN532_CMD_IN_DATA_EXCHANGE => self.data_exchange(params),
            _ => Some(Vec::new()),
        }
    }

    fn data_exchange(&mut self, params: &[u8]) -> Option<Vec<u8>> {
        let (cmd, block) = match params {
            [_target, cmd, block, ..] => (*cmd, *block),
            _ => return Some(vec![STATUS_MIFARE_ERROR]),
        };
        if cmd == MIFARE_CMD_WRITE && self.dropped_writes.contains(&block) {
            return None;
        }
        if cmd == MIFARE_CMD_AUTH_A || cmd == MIFARE_CMD_AUTH_B {
            self.auth_log.push(block);
        }
        let failing_read = self.failing_reads.contains(&block);
        let card = match self.card.as_mut() {
            Some(card) if card.selected && (block as usize) < card.blocks.len() => card,
            _ => return Some(vec![STATUS_TIMEOUT]),
        };
        let sector = block / 4;

        let ok = match cmd {
            MIFARE_CMD_AUTH_A | MIFARE_CMD_AUTH_B => {
                let trailer = card.blocks[(sector * 4 + 3) as usize];
                let key = if cmd == MIFARE_CMD_AUTH_A { &trailer[..6] } else { &trailer[10..] };
                let matches = params.get(3..9) == Some(key) && params.get(9..) == Some(&card.uid[..]);
                card.authenticated = matches.then_some(sector);
                matches
            }
            MIFARE_CMD_READ if card.authenticated == Some(sector) && !failing_read => {
                let mut data = card.blocks[block as usize];
                if block % 4 == 3 {
                    // Key A never reads back.
                    data[..6].fill(0);
                }
                let mut out = vec![0x00];
                out.extend_from_slice(&data);
                return Some(out);
            }
            MIFARE_CMD_WRITE if card.authenticated == Some(sector) && block != 0 => {
                match params.get(3..3 + MIFARE_CLASSIC_BLOCK_SIZE) {
                    Some(data) => {
                        card.blocks[block as usize].copy_from_slice(data);
                        true
                    }
                    None => false,
                }
            }
            _ => false,
        };

        if ok {
            Some(vec![0x00])
        } else {
            // A NAK halts the card; it must be authenticated again.
            card.authenticated = None;
            Some(vec![STATUS_MIFARE_ERROR])
        }
    }
}
