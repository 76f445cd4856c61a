// libpn532/src/device/builder.rs

use crate::card::ReadPolicy;
use crate::device::config::DeviceConfig;
use crate::device::handle::{Device, Uninitialized};
use crate::transport::Transport;
use crate::types::Key;
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
#[derive(Default)]
pub struct DeviceBuilder {
    transport: Option<Box<dyn Transport>>,
    config: DeviceConfig,
}

impl DeviceBuilder {
    /// Builder starting from the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: DeviceConfig) -> Self {
        self.config = config;
        self
    }

    /// Per-read transport deadline.
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Interval between scans, also used for the SAM timeout.
    pub fn poll_interval_ms(mut self, ms: u64) -> Self {
        self.config.poll_interval_ms = ms;
        self
    }

    /// Key used to authenticate NDEF sectors.
    pub fn ndef_key(mut self, key: Key) -> Self {
        self.config.ndef_key = key;
        self
    }

    /// How reads treat unreadable blocks.
    pub fn read_policy(mut self, policy: ReadPolicy) -> Self {
        self.config.read_policy = policy;
        self
    }

    /// Consume the builder and return an uninitialized Device.
    /// Requires a transport to be provided.
    pub fn build_uninitialized(self) -> Result<Device<Uninitialized>> {
        match self.transport {
            Some(t) => Ok(Device::with_config(t, self.config)),
            None => Err(Error::Transport("no transport configured".into())),
        }
    }
}
