// libpn532/src/protocol/checksum.rs

/// Compute Length Checksum (LCS) for a PN532 frame
/// LCS = 0x100 - length (mod 256)
pub fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Compute Data Checksum (DCS) for a PN532 frame
/// DCS = 0x100 - (sum(TFI + data) & 0xff)
pub fn dcs(data: &[u8]) -> u8 {
    let sum = data.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
    0u8.wrapping_sub(sum)
}

/// DCS for a frame whose TFI byte is not part of `data`.
pub fn dcs_with_tfi(tfi: u8, data: &[u8]) -> u8 {
    let sum = data.iter().fold(tfi, |acc, &b| acc.wrapping_add(b));
    0u8.wrapping_sub(sum)
}
