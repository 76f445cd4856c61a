#[path = "../common/mod.rs"]
mod common;

use libpn532::tag::{self, TagContent, TagFamily};
use libpn532::types::Uid;
use libpn532::Error;

#[test]
fn uid_lengths_map_to_families() {
    let classic4 = Uid::from_bytes(common::fixtures::CLASSIC_UID_4.to_vec());
    let classic7 = Uid::from_bytes(common::fixtures::CLASSIC_UID_7.to_vec());
    let type2 = Uid::from_bytes(common::fixtures::TYPE2_UID_10.to_vec());
    let odd = Uid::from_bytes(vec![0x01; 5]);

    assert_eq!(TagFamily::classify(&classic4), TagFamily::MifareClassic);
    assert_eq!(TagFamily::classify(&classic7), TagFamily::MifareClassic);
    assert_eq!(TagFamily::classify(&type2), TagFamily::Type2);
    assert_eq!(TagFamily::classify(&odd), TagFamily::Unknown);
}

#[test]
fn uid_parses_from_display_form() {
    let uid: Uid = "74-10-37-94".parse().unwrap();
    assert_eq!(uid, common::fixtures::classic_uid());
    assert_eq!(uid.to_string(), "74-10-37-94");
}

#[test]
fn unknown_family_read_reports_uid_only() {
    let uid = vec![0x01, 0x02, 0x03, 0x04, 0x05];
    let chip = common::SimulatedChip::with_card(uid.clone());
    let mut dev = common::scanned_device(&chip).unwrap();

    let tag = tag::read_tag(&mut dev, Uid::from_bytes(uid.clone()));
    assert_eq!(tag.family(), TagFamily::Unknown);
    assert_eq!(tag.content(), &TagContent::Empty);
    assert!(matches!(
        tag::format_tag(&mut dev, &Uid::from_bytes(uid)),
        Err(Error::UnsupportedTag(TagFamily::Unknown))
    ));
}
