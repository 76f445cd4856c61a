// libpn532/src/tag.rs

//! Tag classification by UID length and per-family dispatch of the card
//! procedures.

use derive_more::Display;
use log::{debug, error};

use crate::card::MifareClassic;
use crate::device::{Device, Initialized};
use crate::types::Uid;
use crate::{Error, Result};

/// Card family, decided from the UID length alone.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagFamily {
    /// 4 or 7 byte UID; sector-based storage with per-sector keys.
    #[display(fmt = "Mifare Classic")]
    MifareClassic,
    /// 10 byte UID; page-based storage. Only the UID is reported.
    #[display(fmt = "NFC Forum Type 2")]
    Type2,
    /// Any other UID length.
    #[display(fmt = "Unknown")]
    Unknown,
}

impl TagFamily {
    /// Classify by UID length: 4 or 7 bytes is MIFARE Classic, 10 is Type 2.
    pub fn classify(uid: &Uid) -> Self {
        match uid.len() {
            4 | 7 => TagFamily::MifareClassic,
            10 => TagFamily::Type2,
            _ => TagFamily::Unknown,
        }
    }

    /// Whether the crate can read and write NDEF on this family.
    pub fn has_sector_layout(self) -> bool {
        matches!(self, TagFamily::MifareClassic)
    }
}

/// What a read found on the tag.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagContent {
    /// No NDEF message: not formatted, or a family without layout support.
    Empty,
    /// Raw NDEF message bytes.
    Ndef(Vec<u8>),
    /// The card answered but its storage could not be decoded.
    Unreadable,
}

/// A tag seen in the field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag {
    uid: Uid,
    family: TagFamily,
    content: TagContent,
}

impl Tag {
    /// Tag with the family derived from `uid`.
    pub fn new(uid: Uid, content: TagContent) -> Self {
        let family = TagFamily::classify(&uid);
        Self { uid, family, content }
    }

    /// UID reported by the scan.
    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    /// Family derived from the UID.
    pub fn family(&self) -> TagFamily {
        self.family
    }

    /// What the read found.
    pub fn content(&self) -> &TagContent {
        &self.content
    }

    /// Stored message, if one was read.
    pub fn ndef_message(&self) -> Option<&[u8]> {
        match &self.content {
            TagContent::Ndef(message) => Some(message),
            _ => None,
        }
    }

    /// True when a message was read.
    pub fn has_ndef_message(&self) -> bool {
        self.ndef_message().is_some()
    }
}

/// Read whatever the tag's family supports. Never fails: storage errors
/// yield [`TagContent::Unreadable`].
pub fn read_tag(device: &mut Device<Initialized>, uid: Uid) -> Tag {
    let family = TagFamily::classify(&uid);
    if !family.has_sector_layout() {
        debug!("Cannot determine tag type for {} ({})", uid, family);
        return Tag::new(uid, TagContent::Empty);
    }
    debug!("Reading {}", family);
    let card = MifareClassic::new(uid.clone());
    let content = match card.read_ndef(device) {
        Ok(Some(message)) => TagContent::Ndef(message),
        Ok(None) => TagContent::Empty,
        Err(e) => {
            error!("Failed to read tag {}: {}", uid, e);
            TagContent::Unreadable
        }
    };
    Tag::new(uid, content)
}

/// Write an encoded NDEF message.
pub fn write_tag(device: &mut Device<Initialized>, uid: &Uid, message: &[u8]) -> Result<()> {
    sector_card(uid)?.write_ndef(device, message)
}

/// Replace the message with an empty record.
pub fn erase_tag(device: &mut Device<Initialized>, uid: &Uid) -> Result<()> {
    sector_card(uid)?.erase_ndef(device)
}

/// Format for NDEF use.
pub fn format_tag(device: &mut Device<Initialized>, uid: &Uid) -> Result<()> {
    sector_card(uid)?.format_ndef(device)
}

/// Return the tag to factory state.
pub fn clean_tag(device: &mut Device<Initialized>, uid: &Uid) -> Result<()> {
    sector_card(uid)?.format_blank(device)
}

fn sector_card(uid: &Uid) -> Result<MifareClassic> {
    let family = TagFamily::classify(uid);
    if !family.has_sector_layout() {
        error!("Unsupported tag type {} for {}", family, uid);
        return Err(Error::UnsupportedTag(family));
    }
    Ok(MifareClassic::new(uid.clone()))
}
