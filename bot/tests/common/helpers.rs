//! Test helpers and builder pattern for bot tests
//!
//! `BotBuilder` wires a `Bot` to mockall transport, recognizer and clock mocks
//! plus an in-memory snapshot store, capturing everything the bot sends.

use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use analytics::{Registry, UserProfile};
use bot::traits::{MockChatTransport, MockClock, MockSpeechRecognizer};
use bot::{AdminSet, Bot, BotError, BotResult, RegistryService, SnapshotStore, Transcription};
use shared::{ChatId, IncomingMessage, OutgoingMessage, UserId};

use super::fixtures::TestFixtures;

/// Snapshot store keeping the last saved registry in memory
#[derive(Clone, Default)]
pub struct MemoryStore {
    initial: Registry,
    saved: Arc<Mutex<Option<Registry>>>,
    fail_saves: bool,
}

impl MemoryStore {
    /// Registry from the most recent successful save
    pub fn last_saved(&self) -> Option<Registry> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl SnapshotStore for MemoryStore {
    async fn load(&self) -> BotResult<Registry> {
        Ok(self.initial.clone())
    }

    async fn save(&self, registry: &Registry) -> BotResult<()> {
        if self.fail_saves {
            return Err(BotError::storage(
                "write",
                Path::new("memory"),
                io::Error::new(io::ErrorKind::Other, "save rejected"),
            ));
        }
        *self.saved.lock().unwrap() = Some(registry.clone());
        Ok(())
    }
}

pub type TestBot = Bot<MockChatTransport, MockSpeechRecognizer, MemoryStore, MockClock>;

/// Voice notes re-sent through the transport
#[derive(Clone, Debug, PartialEq)]
pub struct SentVoice {
    pub chat_id: ChatId,
    pub file_id: String,
    pub caption: Option<String>,
}

/// Builder with sensible defaults for every collaborator
pub struct BotBuilder {
    admins: AdminSet,
    store: MemoryStore,
    transcription: Transcription,
    download_fails: bool,
}

impl BotBuilder {
    pub fn new() -> Self {
        Self {
            admins: AdminSet::new(),
            store: MemoryStore::default(),
            transcription: Transcription::Failed,
            download_fails: false,
        }
    }

    pub fn with_admins(mut self, ids: &[i64]) -> Self {
        self.admins = ids.iter().copied().map(UserId::new).collect();
        self
    }

    pub fn with_profile(mut self, profile: UserProfile) -> Self {
        self.store.initial.insert(profile.id, profile);
        self
    }

    pub fn with_transcription(mut self, text: &str) -> Self {
        self.transcription = Transcription::Text(text.to_string());
        self
    }

    pub fn with_failing_download(mut self) -> Self {
        self.download_fails = true;
        self
    }

    pub fn with_failing_saves(mut self) -> Self {
        self.store.fail_saves = true;
        self
    }

    pub async fn build(self) -> BotHarness {
        let sent: Arc<Mutex<Vec<OutgoingMessage>>> = Arc::default();
        let voices: Arc<Mutex<Vec<SentVoice>>> = Arc::default();

        let mut transport = MockChatTransport::new();
        transport.expect_receive().returning(|| Ok(vec![])).times(0..);
        let captured = Arc::clone(&sent);
        transport
            .expect_send()
            .returning(move |message| {
                captured.lock().unwrap().push(message);
                Ok(())
            })
            .times(0..);
        let captured = Arc::clone(&voices);
        transport
            .expect_send_voice()
            .returning(move |chat_id, file_id, caption| {
                captured.lock().unwrap().push(SentVoice {
                    chat_id,
                    file_id: file_id.to_string(),
                    caption,
                });
                Ok(())
            })
            .times(0..);
        let download_fails = self.download_fails;
        transport
            .expect_download_file()
            .returning(move |_| {
                if download_fails {
                    Err(BotError::transport("file is gone"))
                } else {
                    Ok(vec![0x4f, 0x67, 0x67, 0x53])
                }
            })
            .times(0..);

        let mut recognizer = MockSpeechRecognizer::new();
        let transcription = self.transcription.clone();
        recognizer
            .expect_transcribe()
            .returning(move |_| transcription.clone())
            .times(0..);

        let mut clock = MockClock::new();
        clock.expect_today().returning(TestFixtures::today).times(0..);

        let store = self.store.clone();
        let registry = RegistryService::open(self.store).await.unwrap();
        let bot = Bot::new(transport, recognizer, registry, clock, self.admins);

        BotHarness { bot, sent, voices, store }
    }
}

impl Default for BotBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A built bot together with everything it has sent
pub struct BotHarness {
    pub bot: TestBot,
    pub store: MemoryStore,
    sent: Arc<Mutex<Vec<OutgoingMessage>>>,
    voices: Arc<Mutex<Vec<SentVoice>>>,
}

impl BotHarness {
    /// Deliver a text message and return the texts sent in response
    pub async fn say(&self, user: i64, text: &str) -> Vec<OutgoingMessage> {
        let message = IncomingMessage::text(UserId::new(user), "Тестер", text);
        self.deliver(message).await
    }

    /// Deliver a voice note and return the texts sent in response
    pub async fn say_voice(&self, user: i64) -> Vec<OutgoingMessage> {
        let message = IncomingMessage::voice(UserId::new(user), "Тестер", TestFixtures::VOICE_FILE);
        self.deliver(message).await
    }

    pub async fn deliver(&self, message: IncomingMessage) -> Vec<OutgoingMessage> {
        self.bot.handle_message(message).await.unwrap();
        self.drain()
    }

    pub fn drain(&self) -> Vec<OutgoingMessage> {
        std::mem::take(&mut *self.sent.lock().unwrap())
    }

    pub fn voices(&self) -> Vec<SentVoice> {
        self.voices.lock().unwrap().clone()
    }

    pub async fn profile(&self, user: i64) -> Option<UserProfile> {
        self.bot.registry().profile(UserId::new(user)).await
    }
}

/// Texts of the sent messages, in order
pub fn texts(messages: &[OutgoingMessage]) -> Vec<&str> {
    messages.iter().map(|m| m.text.as_str()).collect()
}
