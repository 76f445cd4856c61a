// libpn532/src/transport/mod.rs

/// In-memory transport for tests.
pub mod mock;
pub mod stream;
/// The transport trait.
pub mod traits;

pub use mock::MockTransport;
pub use stream::StreamTransport;
pub use traits::Transport;
