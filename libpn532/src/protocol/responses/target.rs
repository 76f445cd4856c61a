use crate::Result;
use crate::protocol::parser::{be_u16_at, byte_at, slice_at};
use crate::types::Uid;

/// ISO14443A target description from InListPassiveTarget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassiveTarget {
    /// Logical target number.
    pub number: u8,
    /// SENS_RES (ATQA).
    pub sens_res: u16,
    /// SEL_RES (SAK).
    pub sel_res: u8,
    /// NFCID1.
    pub uid: Uid,
}

/// Decode InListPassiveTarget: NbTg, then for the first target
/// Tg, SENS_RES(2), SEL_RES(1), NFCIDLength(1), NFCID1.
///
/// Only the first target is decoded; callers scan for a single card.
pub fn decode_passive_targets(data: &[u8]) -> Result<(u8, Option<PassiveTarget>)> {
    let count = byte_at(data, 0)?;
    if count == 0 {
        return Ok((0, None));
    }

    let number = byte_at(data, 1)?;
    let sens_res = be_u16_at(data, 2)?;
    let sel_res = byte_at(data, 4)?;
    let uid_len = byte_at(data, 5)? as usize;
    let uid = slice_at(data, 6, uid_len)?;

    Ok((
        count,
        Some(PassiveTarget {
            number,
            sens_res,
            sel_res,
            uid: Uid::from(uid),
        }),
    ))
}
