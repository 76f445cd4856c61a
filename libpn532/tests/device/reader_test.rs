#[path = "../common/mod.rs"]
mod common;

use std::cell::RefCell;
use std::rc::Rc;

use libpn532::reader::{PendingTask, Task, TagObserver, TagReader, UidPresence};
use libpn532::tag::{Tag, TagContent};
use libpn532::types::Uid;

#[derive(Default)]
struct Seen {
    scans: usize,
    tags: Vec<Tag>,
}

impl TagObserver for Seen {
    fn on_scan_end(&mut self) {
        self.scans += 1;
    }

    fn on_tag(&mut self, tag: &Tag) {
        self.tags.push(tag.clone());
    }
}

fn reader_with_card(uid: &[u8]) -> (common::SimulatedChip, TagReader) {
    common::init_logging();
    let chip = common::SimulatedChip::with_card(uid.to_vec());
    let device = common::initialized_device(&chip).unwrap();
    (chip, TagReader::new(device))
}

#[test]
fn write_task_then_read_back() {
    let (chip, mut reader) = reader_with_card(&common::fixtures::CLASSIC_UID_4);
    let seen = Rc::new(RefCell::new(Seen::default()));
    reader.add_observer(Box::new(seen.clone()));

    reader.write_mode(b"\xD1\x01\x05Thello".to_vec(), false);
    let written = reader.poll_once().unwrap();
    assert_eq!(written.content(), &TagContent::Empty);
    assert!(seen.borrow().tags.is_empty());
    assert_eq!(reader.pending(), &PendingTask::read());

    chip.remove_card();
    assert!(reader.poll_once().is_none());
    chip.insert_card(common::fixtures::CLASSIC_UID_4.to_vec());

    let tag = reader.poll_once().unwrap();
    assert_eq!(tag.ndef_message(), Some(&b"\xD1\x01\x05Thello"[..]));
    assert_eq!(seen.borrow().tags.len(), 1);
    assert_eq!(seen.borrow().scans, 3);
    assert!(!chip.field_on());
}

#[test]
fn continuous_erase_hits_every_new_tag() {
    let (chip, mut reader) = reader_with_card(&common::fixtures::CLASSIC_UID_4);
    reader.format_mode(false);
    reader.poll_once();

    reader.set_pending(PendingTask::new(Task::Erase, true));
    chip.remove_card();
    reader.poll_once();
    chip.insert_card(common::fixtures::CLASSIC_UID_4.to_vec());
    reader.poll_once();

    assert_eq!(reader.pending().task(), &Task::Erase);
    assert_eq!(&chip.block(4)[..6], &[0x03, 0x03, 0xD0, 0x00, 0x00, 0xFE]);
}

#[test]
fn type2_tag_is_reported_without_payload() {
    let (_chip, mut reader) = reader_with_card(&common::fixtures::TYPE2_UID_10);
    let tag = reader.poll_once().unwrap();
    assert_eq!(tag.uid(), &Uid::from_bytes(common::fixtures::TYPE2_UID_10.to_vec()));
    assert_eq!(tag.content(), &TagContent::Empty);
}

#[test]
fn presence_sensor_follows_card() {
    let (chip, mut reader) = reader_with_card(&common::fixtures::CLASSIC_UID_7);
    let presence = Rc::new(RefCell::new(UidPresence::new(Uid::from_bytes(
        common::fixtures::CLASSIC_UID_7.to_vec(),
    ))));
    reader.add_observer(Box::new(presence.clone()));

    assert!(!presence.borrow().is_present());
    reader.poll_once();
    assert!(presence.borrow().is_present());

    chip.remove_card();
    reader.poll_once();
    assert!(!presence.borrow().is_present());
    assert!(reader.current_uid().is_none());
}
