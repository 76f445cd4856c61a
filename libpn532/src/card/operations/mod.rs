/// Factory and NDEF formatting.
pub mod format;
/// Reading the NDEF message area.
pub mod read;
/// Writing and erasing the NDEF message area.
pub mod write;

// Re-export the card-level procedures so callers can use
// `crate::card::operations::read_ndef(...)` directly.
pub use format::{format_blank, format_ndef};
pub use read::read_ndef;
pub use write::{erase_ndef, write_ndef};
