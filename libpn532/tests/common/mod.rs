// Shared helpers for integration tests. Each aggregator pulls this in with
// `#[path]`, so not every helper is used by every test crate.
#![allow(dead_code)]

pub mod fixtures;

pub use libpn532::test_support::*;

/// Route `log` output through env_logger when RUST_LOG is set.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
