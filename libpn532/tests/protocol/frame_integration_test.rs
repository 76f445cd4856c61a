#[path = "../common/mod.rs"]
mod common;

use libpn532::Error;
use libpn532::protocol::Frame;
use libpn532::protocol::codec::{read_response, write_command};
use libpn532::transport::mock::MockTransport;

#[test]
fn encodes_known_command_frames() {
    assert_eq!(
        Frame::encode_command(0x02, &[]).unwrap(),
        common::fixtures::firmware_command_frame()
    );
    assert_eq!(
        Frame::encode_command(0x14, &[0x01, 0x00, 0x01]).unwrap(),
        common::fixtures::sam_wakeup_frame()
    );
    assert_eq!(
        Frame::encode_command(0x4A, &[0x01, 0x00]).unwrap(),
        common::fixtures::scan_command_frame()
    );
}

#[test]
fn decodes_captured_response() {
    let payload = Frame::decode_response(0x02, &common::fixtures::firmware_response_frame()).unwrap();
    assert_eq!(payload, vec![0x32, 0x01, 0x06, 0x07]);
}

#[test]
fn corrupted_dcs_is_rejected() {
    let mut frame = common::fixtures::firmware_response_frame();
    let dcs = frame.len() - 2;
    frame[dcs] = frame[dcs].wrapping_add(1);
    assert!(matches!(
        Frame::decode_response(0x02, &frame),
        Err(Error::ChecksumMismatch { .. })
    ));
}

#[test]
fn corrupted_lcs_is_rejected_at_peek() {
    let mut frame = common::fixtures::firmware_response_frame();
    frame[4] ^= 0x01;
    assert!(Frame::peek_length(&frame[..6]).unwrap_err().is_framing());
}

#[test]
fn host_frame_in_response_position_is_rejected() {
    let frame = common::fixtures::firmware_command_frame();
    assert!(Frame::decode_response(0x01, &frame).is_err());
}

#[test]
fn full_exchange_sends_command_then_nack() {
    let mut mock = MockTransport::new();
    common::seed_exchange(&mut mock, 0x03, &[0x32, 0x01, 0x06, 0x07]);

    write_command(&mut mock, 0x02, &[], 1000).unwrap();
    let payload = read_response(&mut mock, 0x02, 1000).unwrap();

    assert_eq!(payload, vec![0x32, 0x01, 0x06, 0x07]);
    assert_eq!(mock.sent.len(), 2);
    assert_eq!(mock.sent[0], common::fixtures::firmware_command_frame());
    assert_eq!(mock.sent[1], libpn532::constants::PN532_NACK.to_vec());
    assert!(mock.is_drained());
}

#[test]
fn wrong_ack_is_reported() {
    let mut mock = MockTransport::new();
    mock.push_bytes(&libpn532::constants::PN532_NACK);
    assert!(matches!(
        write_command(&mut mock, 0x02, &[], 1000),
        Err(Error::InvalidAck(_))
    ));
}

#[test]
fn missing_response_times_out() {
    let mut mock = MockTransport::new();
    mock.push_bytes(&libpn532::constants::PN532_ACK);
    write_command(&mut mock, 0x02, &[], 1000).unwrap();
    let err = read_response(&mut mock, 0x02, 1000).unwrap_err();
    assert!(err.is_timeout());
}
