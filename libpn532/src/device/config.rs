// libpn532/src/device/config.rs

use crate::card::ReadPolicy;
use crate::types::Key;

/// Default read timeout in milliseconds used for every transport read.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 1000;

/// Default poll interval in milliseconds; feeds the SAM timeout.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

/// Runtime configuration of a PN532 device handle.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DeviceConfig {
    /// Deadline for a single transport read.
    pub read_timeout_ms: u64,
    /// Interval between scans in milliseconds.
    pub poll_interval_ms: u64,
    /// Key A used to access NDEF sectors.
    pub ndef_key: Key,
    /// How reads treat unreadable blocks.
    pub read_policy: ReadPolicy,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            read_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            ndef_key: Key::NDEF,
            read_policy: ReadPolicy::BestEffort,
        }
    }
}
