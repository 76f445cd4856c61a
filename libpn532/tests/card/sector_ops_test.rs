#[path = "../common/mod.rs"]
mod common;

use anyhow::Result;
use libpn532::card::{MifareClassic, ReadPolicy};
use libpn532::device::DeviceConfig;
use libpn532::types::{Key, KeySlot, SectorTrailer, Uid};
use libpn532::Error;

use common::SimulatedChip;

fn setup(uid: &[u8]) -> Result<(SimulatedChip, libpn532::Device<libpn532::Initialized>, MifareClassic)> {
    common::init_logging();
    let chip = SimulatedChip::with_card(uid.to_vec());
    let device = common::scanned_device(&chip)?;
    Ok((chip, device, MifareClassic::new(Uid::from_bytes(uid.to_vec()))))
}

#[test]
fn format_then_empty_write_reads_back_empty() -> Result<()> {
    let (_chip, mut dev, card) = setup(&common::fixtures::CLASSIC_UID_4)?;
    card.format_ndef(&mut dev)?;
    card.write_ndef(&mut dev, &[])?;
    assert_eq!(card.read_ndef(&mut dev)?, Some(Vec::new()));
    Ok(())
}

#[test]
fn seven_byte_uid_card_round_trip() -> Result<()> {
    let (_chip, mut dev, card) = setup(&common::fixtures::CLASSIC_UID_7)?;
    card.format_ndef(&mut dev)?;
    let message: Vec<u8> = (0..=255u8).cycle().take(400).collect();
    card.write_ndef(&mut dev, &message)?;
    assert_eq!(card.read_ndef(&mut dev)?, Some(message));
    Ok(())
}

#[test]
fn wrong_key_sector_is_skipped_and_others_formatted() -> Result<()> {
    let (chip, mut dev, card) = setup(&common::fixtures::CLASSIC_UID_4)?;
    let locked = SectorTrailer::new(
        Key::new([0x11; 6]),
        [0xFF, 0x07, 0x80, 0x69],
        Key::new([0x22; 6]),
    );
    chip.set_block(4 * 6 + 3, *locked.to_block().as_bytes());

    card.format_ndef(&mut dev)?;

    let ndef = *SectorTrailer::NDEF.to_block().as_bytes();
    for sector in (1..16u8).filter(|&s| s != 6) {
        assert_eq!(chip.block(sector * 4 + 3), ndef, "sector {}", sector);
    }
    assert_eq!(chip.block(27), *locked.to_block().as_bytes());
    Ok(())
}

#[test]
fn multi_sector_write_skips_trailers() -> Result<()> {
    let (chip, mut dev, card) = setup(&common::fixtures::CLASSIC_UID_4)?;
    card.format_ndef(&mut dev)?;
    let auths_before = chip.auth_log().len();

    // 2 + 100 + 1 bytes -> 7 blocks: 4 5 6 | 8 9 10 | 12
    let message = vec![0xC3; 100];
    card.write_ndef(&mut dev, &message)?;

    assert_eq!(chip.auth_log()[auths_before..], [4, 8, 12]);
    let ndef = *SectorTrailer::NDEF.to_block().as_bytes();
    for trailer in [7u8, 11, 15] {
        assert_eq!(chip.block(trailer), ndef);
    }
    assert_eq!(chip.block(12)[..7], [0xC3, 0xC3, 0xC3, 0xC3, 0xC3, 0xC3, 0xFE]);
    assert_eq!(card.read_ndef(&mut dev)?, Some(message));
    Ok(())
}

#[test]
fn wrong_key_on_one_sector_leaves_written_data_intact() -> Result<()> {
    let (chip, mut dev, card) = setup(&common::fixtures::CLASSIC_UID_4)?;
    card.format_ndef(&mut dev)?;
    let message: Vec<u8> = (0..40u8).collect();
    card.write_ndef(&mut dev, &message)?;
    let written: Vec<[u8; 16]> = (4..7u8).map(|b| chip.block(b)).collect();

    match card.authenticate(&mut dev, 11, KeySlot::A, &Key::new([0x12; 6])) {
        Err(Error::ChipStatus { status }) => assert_ne!(status, 0),
        other => panic!("expected ChipStatus, got {:?}", other),
    }

    let after: Vec<[u8; 16]> = (4..7u8).map(|b| chip.block(b)).collect();
    assert_eq!(after, written);
    assert_eq!(card.read_ndef(&mut dev)?, Some(message));
    Ok(())
}

#[test]
fn erase_then_read_gives_empty_record() -> Result<()> {
    let (_chip, mut dev, card) = setup(&common::fixtures::CLASSIC_UID_4)?;
    card.format_ndef(&mut dev)?;
    card.write_ndef(&mut dev, b"some message bytes")?;
    card.erase_ndef(&mut dev)?;
    assert_eq!(card.read_ndef(&mut dev)?, Some(vec![0xD0, 0x00, 0x00]));
    Ok(())
}

#[test]
fn clean_then_format_again() -> Result<()> {
    let (chip, mut dev, card) = setup(&common::fixtures::CLASSIC_UID_4)?;
    card.format_ndef(&mut dev)?;
    card.format_blank(&mut dev)?;
    assert_eq!(chip.block(3), *SectorTrailer::FACTORY.to_block().as_bytes());
    assert_eq!(chip.block(1), [0u8; 16]);
    card.format_ndef(&mut dev)?;
    assert_eq!(card.read_ndef(&mut dev)?, Some(vec![0xD0, 0x00, 0x00]));
    Ok(())
}

#[test]
fn custom_ndef_key_is_used_for_reads() -> Result<()> {
    common::init_logging();
    let uid = common::fixtures::CLASSIC_UID_4;
    let chip = SimulatedChip::with_card(uid.to_vec());
    let config = DeviceConfig {
        ndef_key: Key::DEFAULT,
        read_policy: ReadPolicy::Strict,
        ..DeviceConfig::default()
    };
    let mut dev = common::scanned_device_with(&chip, config)?;
    let card = MifareClassic::new(Uid::from_bytes(uid.to_vec()));

    // Factory key A opens block 4, but it holds no TLV.
    assert_eq!(card.read_ndef(&mut dev)?, None);
    card.authenticate(&mut dev, 4, KeySlot::A, &Key::DEFAULT)?;
    Ok(())
}

#[test]
fn card_removed_mid_session_fails_cleanly() -> Result<()> {
    let (chip, mut dev, card) = setup(&common::fixtures::CLASSIC_UID_4)?;
    card.format_ndef(&mut dev)?;
    chip.remove_card();
    assert_eq!(card.read_ndef(&mut dev)?, None);
    assert!(matches!(
        card.write_ndef(&mut dev, &[1, 2, 3]),
        Err(Error::ChipStatus { .. })
    ));
    Ok(())
}
