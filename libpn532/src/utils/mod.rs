//! Utilities for libpn532: small helpers for hex display and parsing.

pub mod hex;

pub use hex::*;
