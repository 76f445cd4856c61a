// libpn532/src/reader.rs

//! One poll cycle over an initialized chip: scan, duplicate suppression,
//! observer notification and the pending tag task.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error, info, warn};

use crate::device::{Device, Initialized};
use crate::tag::{self, Tag};
use crate::types::Uid;

/// Work to perform on the next new tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Read the tag and report it.
    Read,
    /// Return the tag to factory state.
    Clean,
    /// Replace the message with an empty record.
    Erase,
    /// Format for NDEF use.
    Format,
    /// Write this encoded NDEF message, formatting first if needed.
    Write(Vec<u8>),
}

/// A task plus whether it stays armed after running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTask {
    task: Task,
    continuous: bool,
}

impl PendingTask {
    /// Task that runs once unless `continuous`.
    pub fn new(task: Task, continuous: bool) -> Self {
        Self { task, continuous }
    }

    /// The default one-shot read.
    pub fn read() -> Self {
        Self::new(Task::Read, false)
    }

    /// Task to run on the next tag.
    pub fn task(&self) -> &Task {
        &self.task
    }

    /// True when the task survives completion.
    pub fn is_continuous(&self) -> bool {
        self.continuous
    }

    fn complete(&mut self) {
        if !self.continuous {
            self.task = Task::Read;
        }
    }
}

impl Default for PendingTask {
    fn default() -> Self {
        Self::read()
    }
}

/// Hooks called during a poll cycle.
pub trait TagObserver {
    /// Start of every cycle, before scanning.
    fn on_scan_end(&mut self) {}

    /// A target was found. Return `true` to claim the UID, which
    /// suppresses the reader's own "found tag" log line.
    fn on_uid(&mut self, _uid: &Uid) -> bool {
        false
    }

    /// A new tag was read while the pending task was `Read`.
    fn on_tag(&mut self, _tag: &Tag) {}
}

impl<T: TagObserver + ?Sized> TagObserver for Rc<RefCell<T>> {
    fn on_scan_end(&mut self) {
        self.borrow_mut().on_scan_end()
    }
    fn on_uid(&mut self, uid: &Uid) -> bool {
        self.borrow_mut().on_uid(uid)
    }
    fn on_tag(&mut self, tag: &Tag) {
        self.borrow_mut().on_tag(tag)
    }
}

/// Presence sensor for one UID: true while the tag answers every scan,
/// false after the first scan that misses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UidPresence {
    uid: Uid,
    present: bool,
    found: bool,
}

impl UidPresence {
    /// Tag first seen now.
    pub fn new(uid: Uid) -> Self {
        Self {
            uid,
            present: false,
            found: false,
        }
    }

    /// UID of the tracked tag.
    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    /// True while the tag answers scans.
    pub fn is_present(&self) -> bool {
        self.present
    }
}

impl TagObserver for UidPresence {
    fn on_scan_end(&mut self) {
        if !self.found {
            self.present = false;
        }
        self.found = false;
    }

    fn on_uid(&mut self, uid: &Uid) -> bool {
        if *uid != self.uid {
            return false;
        }
        self.present = true;
        self.found = true;
        true
    }
}

/// Poll loop driver around an initialized chip.
pub struct TagReader {
    device: Device<Initialized>,
    pending: PendingTask,
    current_uid: Option<Uid>,
    observers: Vec<Box<dyn TagObserver>>,
}

impl TagReader {
    /// Reader over an initialized chip, in read mode.
    pub fn new(device: Device<Initialized>) -> Self {
        Self {
            device,
            pending: PendingTask::read(),
            current_uid: None,
            observers: Vec::new(),
        }
    }

    /// Register an observer for scan events.
    pub fn add_observer(&mut self, observer: Box<dyn TagObserver>) {
        self.observers.push(observer);
    }

    /// Task for the next tag.
    pub fn pending(&self) -> &PendingTask {
        &self.pending
    }

    /// Replace the pending task.
    pub fn set_pending(&mut self, pending: PendingTask) {
        self.pending = pending;
    }

    /// Read tags and report them.
    pub fn read_mode(&mut self) {
        self.pending = PendingTask::read();
    }

    /// Return tags to factory state.
    pub fn clean_mode(&mut self, continuous: bool) {
        self.pending = PendingTask::new(Task::Clean, continuous);
    }

    /// Replace messages with an empty record.
    pub fn erase_mode(&mut self, continuous: bool) {
        self.pending = PendingTask::new(Task::Erase, continuous);
    }

    /// Format tags for NDEF use.
    pub fn format_mode(&mut self, continuous: bool) {
        self.pending = PendingTask::new(Task::Format, continuous);
    }

    /// Write `message` to tags.
    pub fn write_mode(&mut self, message: Vec<u8>, continuous: bool) {
        self.pending = PendingTask::new(Task::Write(message), continuous);
    }

    /// UID of the tag handled last; cleared when a scan finds nothing.
    pub fn current_uid(&self) -> Option<&Uid> {
        self.current_uid.as_ref()
    }

    /// Underlying device.
    pub fn device_mut(&mut self) -> &mut Device<Initialized> {
        &mut self.device
    }

    /// Release the device.
    pub fn into_device(self) -> Device<Initialized> {
        self.device
    }

    /// Run one poll cycle. Returns the tag when a new one was handled.
    ///
    /// The RF field is switched off before returning on every path.
    pub fn poll_once(&mut self) -> Option<Tag> {
        for observer in &mut self.observers {
            observer.on_scan_end();
        }

        let uid = match self.device.in_list_passive_target() {
            Ok(Some(uid)) => uid,
            Ok(None) => {
                self.current_uid = None;
                self.idle();
                return None;
            }
            Err(e) => {
                debug!("Scan failed: {}", e);
                self.current_uid = None;
                self.idle();
                return None;
            }
        };

        let mut claimed = false;
        for observer in &mut self.observers {
            claimed |= observer.on_uid(&uid);
        }

        if self.current_uid.as_ref() == Some(&uid) {
            self.idle();
            return None;
        }
        self.current_uid = Some(uid.clone());

        let tag = tag::read_tag(&mut self.device, uid.clone());
        let task = self.pending.task().clone();
        match task {
            Task::Read => {
                for observer in &mut self.observers {
                    observer.on_tag(&tag);
                }
                if !claimed {
                    info!("Found new tag '{}'", uid);
                    if let Some(message) = tag.ndef_message() {
                        info!("  NDEF formatted, {} byte message", message.len());
                    }
                }
            }
            Task::Clean => {
                if let Err(e) = tag::clean_tag(&mut self.device, &uid) {
                    error!("Tag was not fully cleaned successfully: {}", e);
                }
            }
            Task::Erase => {
                if let Err(e) = tag::erase_tag(&mut self.device, &uid) {
                    error!("Tag was not erased successfully: {}", e);
                }
            }
            Task::Format => {
                if let Err(e) = tag::format_tag(&mut self.device, &uid) {
                    error!("Error formatting tag as NDEF: {}", e);
                }
            }
            Task::Write(message) => {
                if !tag.has_ndef_message() {
                    debug!("Tag has no NDEF message, formatting first");
                    if let Err(e) = tag::format_tag(&mut self.device, &uid) {
                        // The task stays armed for the next tag.
                        error!("Tag could not be formatted for writing: {}", e);
                        self.idle();
                        return Some(tag);
                    }
                }
                if let Err(e) = tag::write_tag(&mut self.device, &uid, &message) {
                    error!("Failed to write message to tag: {}", e);
                }
            }
        }

        self.pending.complete();
        self.idle();
        Some(tag)
    }

    fn idle(&mut self) {
        if let Err(e) = self.device.rf_off() {
            warn!("Failed to turn RF field off: {}", e);
        }
    }
}
