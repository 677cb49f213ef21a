//! Trait definitions with mockall annotations for dependency injection
//!
//! Every external collaborator of the bot sits behind one of these traits:
//! the chat transport, the speech recognizer, the snapshot store and the
//! clock. Production implementations live in `services`.

use async_trait::async_trait;
use chrono::NaiveDate;

use analytics::Registry;
use shared::{ChatId, IncomingMessage, OutgoingMessage};

use crate::error::BotResult;
use crate::types::Transcription;

/// Chat transport abstraction
#[mockall::automock]
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Wait for the next batch of user messages
    async fn receive(&self) -> BotResult<Vec<IncomingMessage>>;

    /// Deliver a text message
    async fn send(&self, message: OutgoingMessage) -> BotResult<()>;

    /// Fetch the bytes of a file referenced by an incoming message
    async fn download_file(&self, file_id: &str) -> BotResult<Vec<u8>>;

    /// Re-send an already uploaded voice note to another chat
    async fn send_voice(&self, chat_id: ChatId, file_id: &str, caption: Option<String>) -> BotResult<()>;
}

/// Speech-to-text abstraction. Failures are a value, never an error.
#[mockall::automock]
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn transcribe(&self, audio: Vec<u8>) -> Transcription;
}

#[async_trait]
impl SpeechRecognizer for Box<dyn SpeechRecognizer> {
    async fn transcribe(&self, audio: Vec<u8>) -> Transcription {
        (**self).transcribe(audio).await
    }
}

/// Durable whole-registry snapshot
#[mockall::automock]
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Load every stored profile; a missing snapshot is an empty registry
    async fn load(&self) -> BotResult<Registry>;

    /// Replace the stored snapshot with `registry`
    async fn save(&self, registry: &Registry) -> BotResult<()>;
}

/// Source of the current calendar date
#[mockall::automock]
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
