use crate::Result;
use crate::protocol::parser::slice_at;
use crate::types::FirmwareVersion;

/// Decode GetFirmwareVersion: IC, Ver, Rev, Support.
pub fn decode_firmware_version(data: &[u8]) -> Result<FirmwareVersion> {
    let b = slice_at(data, 0, 4)?;
    Ok(FirmwareVersion {
        ic: b[0],
        version: b[1],
        revision: b[2],
        support: b[3],
    })
}
