#[path = "../common/mod.rs"]
mod common;

use std::io::{Cursor, Read, Write};

use libpn532::constants::{PN532_ACK, PN532_NACK};
use libpn532::device::Device;
use libpn532::transport::{StreamTransport, Transport};

/// Canned serial line: reads come from a capture, writes are recorded.
struct Wire {
    rx: Cursor<Vec<u8>>,
    tx: Vec<u8>,
}

impl Wire {
    fn new(rx: Vec<u8>) -> Self {
        Self {
            rx: Cursor::new(rx),
            tx: Vec::new(),
        }
    }
}

impl Read for Wire {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.rx.read(buf)
    }
}

impl Write for Wire {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.tx.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn exchange(frame: &[u8]) -> Vec<u8> {
    let mut out = PN532_ACK.to_vec();
    out.extend_from_slice(&frame[..6]);
    out.extend_from_slice(frame);
    out
}

#[test]
fn firmware_query_over_stream() {
    let wire = Wire::new(exchange(&common::fixtures::firmware_response_frame()));
    let mut transport = StreamTransport::new(wire);

    libpn532::protocol::codec::write_command(&mut transport, 0x02, &[], 1000).unwrap();
    let payload = libpn532::protocol::codec::read_response(&mut transport, 0x02, 1000).unwrap();
    assert_eq!(payload, vec![0x32, 0x01, 0x06, 0x07]);

    let wire = transport.into_inner();
    let mut expected = common::fixtures::firmware_command_frame();
    expected.extend_from_slice(&PN532_NACK);
    assert_eq!(wire.tx, expected);
}

#[test]
fn eof_maps_to_timeout() {
    let mut transport = StreamTransport::new(Wire::new(vec![0x00, 0x00]));
    assert!(transport.receive_exact(6, 100).unwrap_err().is_timeout());
}

#[test]
fn device_initializes_over_stream() {
    let mut rx = exchange(&common::fixtures::firmware_response_frame());
    for opcode in [0x15u8, 0x15, 0x33] {
        rx.extend(exchange(&common::response_frame(opcode, &[])));
    }
    let transport = StreamTransport::new(Wire::new(rx));
    let device = Device::new_with_transport(Box::new(transport));
    assert!(device.initialize().is_ok());
}
