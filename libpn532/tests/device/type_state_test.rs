#[path = "../common/mod.rs"]
mod common;

use libpn532::device::{Device, DeviceBuilder};
use libpn532::transport::mock::MockTransport;
use libpn532::{Error, Key, ReadPolicy};

#[test]
fn builder_requires_transport() {
    assert!(matches!(
        DeviceBuilder::new().build_uninitialized(),
        Err(Error::Transport(_))
    ));
}

#[test]
fn builder_then_initialize() {
    let chip = common::SimulatedChip::new();
    let device = DeviceBuilder::new()
        .with_transport(Box::new(chip.clone()))
        .ndef_key(Key::NDEF)
        .read_policy(ReadPolicy::BestEffort)
        .build_uninitialized()
        .unwrap();
    let mut dev = device.initialize().unwrap();

    let version = dev.firmware_version().unwrap();
    assert_eq!(version.to_string(), "PN532 firmware 1.6");
    assert!(!chip.field_on());
}

#[test]
fn initialize_aborts_on_garbled_version() {
    let mut mock = MockTransport::new();
    mock.push_bytes(&libpn532::constants::PN532_ACK);
    let mut frame = common::fixtures::firmware_response_frame();
    let dcs = frame.len() - 2;
    frame[dcs] ^= 0x55;
    mock.push_bytes(&frame[..6]);
    mock.push_bytes(&frame);

    let device = Device::new_with_transport(Box::new(mock));
    let err = device.initialize().unwrap_err();
    assert!(err.is_framing());
}

#[test]
fn scan_with_empty_field() {
    let chip = common::SimulatedChip::new();
    let mut dev = common::initialized_device(&chip).unwrap();
    assert_eq!(dev.in_list_passive_target().unwrap(), None);
    assert!(chip.field_on());
    dev.rf_off().unwrap();
    assert!(!chip.field_on());
}
