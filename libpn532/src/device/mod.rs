// libpn532/src/device/mod.rs

/// Fluent construction of a [`Device`].
pub mod builder;
/// Timeouts, keys and read policy.
pub mod config;
/// The type-state device handle.
pub mod handle;

pub use builder::DeviceBuilder;
pub use config::DeviceConfig;
pub use handle::{Device, Initialized, Uninitialized};
