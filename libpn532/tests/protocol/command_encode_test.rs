#[path = "../common/mod.rs"]
mod common;

use libpn532::protocol::codec::encode_command_frame;
use libpn532::protocol::{Command, MifareRequest};
use libpn532::types::{BlockData, Key, KeySlot};

#[test]
fn authenticate_matches_capture() {
    let cmd = Command::data_exchange(MifareRequest::Authenticate {
        slot: KeySlot::A,
        block: 4,
        key: Key::NDEF,
        uid: common::fixtures::classic_uid(),
    });
    assert_eq!(
        encode_command_frame(&cmd).unwrap(),
        common::fixtures::auth_block4_frame()
    );
}

#[test]
fn rf_off_matches_capture() {
    assert_eq!(
        encode_command_frame(&Command::rf_off()).unwrap(),
        common::fixtures::rf_off_frame()
    );
}

#[test]
fn key_b_uses_its_own_sub_command() {
    let cmd = Command::data_exchange(MifareRequest::Authenticate {
        slot: KeySlot::B,
        block: 0,
        key: Key::DEFAULT,
        uid: common::fixtures::classic_uid(),
    });
    let encoded = cmd.encode();
    assert_eq!(&encoded[..4], &[0x40, 0x01, 0x61, 0x00]);
    assert_eq!(&encoded[4..10], &[0xFF; 6]);
}

#[test]
fn write_carries_full_block() {
    let data = BlockData::from_bytes([0xA5; 16]);
    let cmd = Command::data_exchange(MifareRequest::Write { block: 9, data });
    let encoded = cmd.encode();
    assert_eq!(encoded.len(), 4 + 16);
    assert_eq!(&encoded[..4], &[0x40, 0x01, 0xA0, 0x09]);
}

#[test]
fn operational_sam_timeout_from_poll_interval() {
    assert_eq!(Command::sam_operational(1000).payload(), vec![0x01, 20, 0x01]);
    assert_eq!(Command::sam_operational(60_000).payload(), vec![0x01, 255, 0x01]);
}
