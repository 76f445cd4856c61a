// fixtures.rs: wire captures and sample identifiers used across tests

use libpn532::types::Uid;

pub const CLASSIC_UID_4: [u8; 4] = [0x74, 0x10, 0x37, 0x94];
pub const CLASSIC_UID_7: [u8; 7] = [0x04, 0x52, 0x3A, 0x1A, 0x6E, 0x2B, 0x80];
pub const TYPE2_UID_10: [u8; 10] = [0x04, 0x8F, 0x2C, 0x1A, 0x6E, 0x2B, 0x80, 0x11, 0x22, 0x33];

pub fn classic_uid() -> Uid {
    Uid::from_bytes(CLASSIC_UID_4.to_vec())
}

fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap()
}

/// GetFirmwareVersion command frame.
pub fn firmware_command_frame() -> Vec<u8> {
    unhex("0000ff02fed4022a00")
}

/// GetFirmwareVersion response: IC 0x32, firmware 1.6, support 0x07.
pub fn firmware_response_frame() -> Vec<u8> {
    unhex("0000ff06fad50332010607e800")
}

/// SAMConfiguration wake-up command frame.
pub fn sam_wakeup_frame() -> Vec<u8> {
    unhex("0000ff05fbd4140100011600")
}

/// InListPassiveTarget, one target at 106 kbit/s type A.
pub fn scan_command_frame() -> Vec<u8> {
    unhex("0000ff04fcd44a0100e100")
}

/// InListPassiveTarget answer for `CLASSIC_UID_4`.
pub fn scan_response_frame() -> Vec<u8> {
    unhex("0000ff0cf4d54b010100040804741037947f00")
}

/// InDataExchange: authenticate block 4 with key A `D3F7D3F7D3F7`.
pub fn auth_block4_frame() -> Vec<u8> {
    unhex("0000ff0ff1d440016004d3f7d3f7d3f774103794da00")
}

/// InDataExchange answer with status 0x00 and no data.
pub fn exchange_ok_frame() -> Vec<u8> {
    unhex("0000ff03fdd54100ea00")
}

/// RFConfiguration: field off.
pub fn rf_off_frame() -> Vec<u8> {
    unhex("0000ff04fcd4320100f900")
}
