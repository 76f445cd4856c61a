// libpn532/src/prelude.rs

pub use crate::card::{MifareClassic, ReadPolicy};
pub use crate::device::{Device, DeviceBuilder, DeviceConfig, Initialized, Uninitialized};
pub use crate::protocol::{Command, Response};
pub use crate::reader::{PendingTask, Task, TagObserver, TagReader, UidPresence};
pub use crate::tag::{Tag, TagContent, TagFamily};
pub use crate::transport::Transport;
pub use crate::{BlockData, Error, FirmwareVersion, Key, KeySlot, Result, SectorTrailer, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, format_uid, parse_hex};
