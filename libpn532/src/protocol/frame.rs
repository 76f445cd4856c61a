// libpn532/src/protocol/frame.rs

use crate::constants::{
    PN532_HEADER_LEN, PN532_MAX_FRAME_DATA, PN532_POSTAMBLE, PN532_PREAMBLE, PN532_TFI_DEVICE,
    PN532_TFI_HOST,
};
use crate::protocol::checksum::{dcs_with_tfi, lcs};
use crate::{Error, Result};

/// PN532 normal information frame.
/// Format: [Preamble+Start(3)] [Len(1)] [LCS(1)] [TFI(1)] [Data(n)] [DCS(1)] [Postamble(1)]
/// Preamble+Start: 0x00 0x00 0xFF
/// Len counts TFI + Data; Data starts with the opcode.
/// Postamble: 0x00
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Frame identifier, host or device.
    pub tfi: u8,
    /// Opcode and payload.
    pub data: Vec<u8>,
}

impl Frame {
    /// Host -> chip frame carrying `opcode` followed by `payload`.
    pub fn command(opcode: u8, payload: &[u8]) -> Self {
        let mut data = Vec::with_capacity(1 + payload.len());
        data.push(opcode);
        data.extend_from_slice(payload);
        Self {
            tfi: PN532_TFI_HOST,
            data,
        }
    }

    /// Opcode byte, if the frame carries any data.
    pub fn opcode(&self) -> Option<u8> {
        self.data.first().copied()
    }

    /// Encode into wire bytes.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let full_len = self.data.len() + 1;
        if full_len > PN532_MAX_FRAME_DATA {
            return Err(Error::InvalidLength {
                expected: PN532_MAX_FRAME_DATA,
                actual: full_len,
            });
        }

        let len = full_len as u8;
        let mut out = Vec::with_capacity(PN532_HEADER_LEN + self.data.len() + 2);
        out.extend_from_slice(&PN532_PREAMBLE);
        out.push(len);
        out.push(lcs(len));
        out.push(self.tfi);
        out.extend_from_slice(&self.data);
        out.push(dcs_with_tfi(self.tfi, &self.data));
        out.push(PN532_POSTAMBLE);
        Ok(out)
    }

    /// Convenience: encode a host -> chip command frame.
    pub fn encode_command(opcode: u8, payload: &[u8]) -> Result<Vec<u8>> {
        Self::command(opcode, payload).encode()
    }

    /// Validate the 6-byte header of a chip -> host frame and return the
    /// number of data bytes that follow the TFI (opcode + payload).
    pub fn peek_length(header: &[u8]) -> Result<usize> {
        if header.len() < PN532_HEADER_LEN {
            return Err(Error::InvalidLength {
                expected: PN532_HEADER_LEN,
                actual: header.len(),
            });
        }
        check_preamble(header)?;
        let full_len = check_length(header)?;
        if header[5] != PN532_TFI_DEVICE {
            return Err(Error::FrameFormat(format!(
                "unexpected frame identifier {:#04x}",
                header[5]
            )));
        }
        Ok(full_len - 1)
    }

    /// Decode any complete normal frame.
    pub fn decode(raw: &[u8]) -> Result<Self> {
        // Minimal frame: preamble(3) + len(1) + lcs(1) + tfi(1) + dcs(1) + postamble(1)
        let min = PN532_HEADER_LEN + 2;
        if raw.len() < min {
            return Err(Error::InvalidLength {
                expected: min,
                actual: raw.len(),
            });
        }
        check_preamble(raw)?;
        let full_len = check_length(raw)?;

        let required_len = 5 + full_len + 2;
        if raw.len() != required_len {
            return Err(Error::InvalidLength {
                expected: required_len,
                actual: raw.len(),
            });
        }

        let tfi = raw[5];
        let data_end = 5 + full_len;
        let data = &raw[6..data_end];

        let dcs_actual = raw[data_end];
        let dcs_expected = dcs_with_tfi(tfi, data);
        if dcs_actual != dcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: dcs_expected,
                actual: dcs_actual,
            });
        }

        if raw[data_end + 1] != PN532_POSTAMBLE {
            return Err(Error::FrameFormat("invalid postamble".into()));
        }

        Ok(Self {
            tfi,
            data: data.to_vec(),
        })
    }

    /// Decode a chip -> host response to `request_opcode` and return the
    /// payload with TFI and response opcode stripped.
    pub fn decode_response(request_opcode: u8, raw: &[u8]) -> Result<Vec<u8>> {
        let frame = Self::decode(raw)?;
        if frame.tfi != PN532_TFI_DEVICE {
            return Err(Error::FrameFormat(format!(
                "unexpected frame identifier {:#04x}",
                frame.tfi
            )));
        }

        let expected = request_opcode.wrapping_add(1);
        match frame.opcode() {
            Some(actual) if actual == expected => Ok(frame.data[1..].to_vec()),
            Some(actual) => Err(Error::UnexpectedResponse { expected, actual }),
            None => Err(Error::InvalidLength {
                expected: 1,
                actual: 0,
            }),
        }
    }
}

fn check_preamble(raw: &[u8]) -> Result<()> {
    if raw[..3] != PN532_PREAMBLE {
        return Err(Error::FrameFormat("invalid preamble".into()));
    }
    Ok(())
}

/// Validates LEN + LCS == 0 and returns LEN. LEN must at least cover the TFI.
fn check_length(raw: &[u8]) -> Result<usize> {
    let len = raw[3];
    let lcs_actual = raw[4];
    let lcs_expected = lcs(len);
    if lcs_actual != lcs_expected {
        return Err(Error::ChecksumMismatch {
            expected: lcs_expected,
            actual: lcs_actual,
        });
    }
    if len == 0 {
        return Err(Error::FrameFormat("zero length frame".into()));
    }
    Ok(len as usize)
}
