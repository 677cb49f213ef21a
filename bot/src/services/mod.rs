//! Service implementations
//!
//! Production implementations of the traits in `traits`: the Telegram
//! transport, the Whisper recognizer, the JSON snapshot store and the clock.

pub mod clock;
pub mod snapshot_store;
pub mod speech;
pub mod telegram;

#[cfg(test)]
mod tests;

pub use clock::KyivClock;
pub use snapshot_store::JsonSnapshotStore;
pub use speech::{DisabledRecognizer, WhisperRecognizer};
pub use telegram::TelegramTransport;
