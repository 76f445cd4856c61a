// libpn532/src/protocol/codec.rs

//! Frame exchange over a byte-stream transport.
//!
//! One command exchange is: command frame out, 6-byte ACK in, then a
//! two-phase response read. The response read peeks the 6-byte header to
//! learn LEN, always answers with a NACK so the chip retransmits the whole
//! frame, and then reads `6 + len + 2` bytes. The NACK after the length
//! peek is a fixed part of the handshake some firmware revisions rely on;
//! do not remove it without testing against real hardware.

use log::trace;

use crate::constants::{PN532_ACK, PN532_HEADER_LEN, PN532_NACK};
use crate::transport::Transport;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

use super::Frame;
use super::commands::Command;
use super::responses::Response;

/// Encode a Command into a full wire frame (preamble/LCS/TFI/DCS/postamble).
pub fn encode_command_frame(cmd: &Command) -> Result<Vec<u8>> {
    Frame::encode_command(cmd.opcode(), &cmd.payload())
}

/// Decode a full wire frame and parse the contained response to `cmd`.
pub fn decode_response_frame(cmd: &Command, frame: &[u8]) -> Result<Response> {
    let payload = Frame::decode_response(cmd.opcode(), frame)?;
    Response::decode(cmd, &payload)
}

/// Write a command frame and wait for the chip's ACK.
pub fn write_command(
    transport: &mut dyn Transport,
    opcode: u8,
    payload: &[u8],
    timeout_ms: u64,
) -> Result<()> {
    let frame = Frame::encode_command(opcode, payload)?;
    trace!("-> {}", bytes_to_hex_spaced(&frame));
    transport.send(&frame)?;
    read_ack(transport, timeout_ms)
}

/// Read the 6-byte ACK sentinel.
pub fn read_ack(transport: &mut dyn Transport, timeout_ms: u64) -> Result<()> {
    let ack = transport.receive_exact(PN532_ACK.len(), timeout_ms)?;
    if ack != PN532_ACK {
        trace!("invalid ack: {}", bytes_to_hex_spaced(&ack));
        return Err(Error::InvalidAck(ack));
    }
    Ok(())
}

/// Phase one of a response read: peek the header, then request a
/// retransmission. Returns the number of data bytes after the TFI.
pub fn read_response_length(transport: &mut dyn Transport, timeout_ms: u64) -> Result<usize> {
    let header = transport.receive_exact(PN532_HEADER_LEN, timeout_ms)?;
    let len = Frame::peek_length(&header)?;
    transport.send(&PN532_NACK)?;
    Ok(len)
}

/// Read and validate the response to `opcode`; returns the payload only.
pub fn read_response(transport: &mut dyn Transport, opcode: u8, timeout_ms: u64) -> Result<Vec<u8>> {
    let len = read_response_length(transport, timeout_ms)?;
    trace!("reading response of length {}", len);
    let raw = transport.receive_exact(PN532_HEADER_LEN + len + 2, timeout_ms)?;
    trace!("<- {}", bytes_to_hex_spaced(&raw));
    Frame::decode_response(opcode, &raw)
}
