//! Main bot implementation
//!
//! Owns the injected services, the profile registry and the wizard sessions,
//! and routes every incoming message to completion before taking the next.

use std::time::Duration;

use tokio::sync::{mpsc, Mutex};
use tracing::info;

use analytics::{rank_by_weekly_change, UserProfile};
use shared::{
    logging, user_debug, user_info, user_warn, ChatId, IncomingMessage, MessageContent,
    OutgoingMessage, UserId,
};

use crate::core::conversation::{self, main_menu, Commit, Reply};
use crate::core::{report, texts, Command};
use crate::error::BotResult;
use crate::state::{RegistryService, SessionTable};
use crate::traits::{ChatTransport, Clock, SnapshotStore, SpeechRecognizer};
use crate::types::{AdminSet, Transcription};

/// Pause after a failed poll before asking the transport again
const RECEIVE_RETRY_DELAY: Duration = Duration::from_secs(3);

/// Weight tracking bot wired to its collaborators
pub struct Bot<T, R, S, C>
where
    T: ChatTransport,
    R: SpeechRecognizer,
    S: SnapshotStore,
    C: Clock,
{
    transport: T,
    recognizer: R,
    registry: RegistryService<S>,
    clock: C,
    admins: AdminSet,
    sessions: Mutex<SessionTable>,

    shutdown_tx: mpsc::Sender<()>,
    shutdown_rx: mpsc::Receiver<()>,
}

impl<T, R, S, C> Bot<T, R, S, C>
where
    T: ChatTransport,
    R: SpeechRecognizer,
    S: SnapshotStore,
    C: Clock,
{
    pub fn new(transport: T, recognizer: R, registry: RegistryService<S>, clock: C, admins: AdminSet) -> Self {
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);
        Self {
            transport,
            recognizer,
            registry,
            clock,
            admins,
            sessions: Mutex::new(SessionTable::new()),
            shutdown_tx,
            shutdown_rx,
        }
    }

    /// Sender that stops `run` when signalled
    pub fn shutdown_sender(&self) -> mpsc::Sender<()> {
        self.shutdown_tx.clone()
    }

    pub fn registry(&self) -> &RegistryService<S> {
        &self.registry
    }

    /// Poll the transport until a shutdown signal arrives
    pub async fn run(&mut self) -> BotResult<()> {
        logging::log_startup("weight tracking bot");
        info!(admins = self.admins.len(), "Polling for updates");

        loop {
            tokio::select! {
                biased;

                _ = self.shutdown_rx.recv() => {
                    logging::log_shutdown("shutdown requested");
                    break;
                }

                batch = self.transport.receive() => match batch {
                    Ok(messages) => {
                        for message in messages {
                            let user_id = message.user_id;
                            if let Err(e) = self.handle_message(message).await {
                                logging::log_error(&format!("Handling message from {user_id}"), &e);
                            }
                        }
                    }
                    Err(e) => {
                        logging::log_error("Receiving updates", &e);
                        tokio::time::sleep(RECEIVE_RETRY_DELAY).await;
                    }
                },
            }
        }

        Ok(())
    }

    /// Process one message: transcribe, then feed the wizard or route the command
    pub async fn handle_message(&self, message: IncomingMessage) -> BotResult<()> {
        let user_id = message.user_id;
        let text = match &message.content {
            MessageContent::Text(text) => text.clone(),
            MessageContent::Voice { file_id } => self.transcribe(user_id, file_id).await,
        };
        user_debug!(user_id, text = %text, "Incoming message");

        let state = self.sessions.lock().await.take(user_id);
        if !state.is_idle() {
            let profile = self.registry.profile(user_id).await;
            let transition = conversation::advance(state, &text, profile.as_ref());
            self.sessions.lock().await.set(user_id, transition.next);
            self.reply_all(message.chat_id, transition.replies).await?;
            if let Some(commit) = transition.commit {
                self.apply_commit(&message, commit).await?;
            }
            return Ok(());
        }

        match Command::parse(&text) {
            Command::Start => self.start(&message).await,
            Command::Rename(name) => self.rename(&message, name).await,
            Command::Profile => self.show_profile(&message).await,
            Command::Measure => self.start_measurement(&message).await,
            Command::Leaderboard => self.show_leaderboard(&message).await,
            Command::Unrecognized => self.unrecognized(&message, text).await,
        }
    }

    async fn transcribe(&self, user_id: UserId, file_id: &str) -> String {
        let transcription = match self.transport.download_file(file_id).await {
            Ok(audio) => self.recognizer.transcribe(audio).await,
            Err(e) => {
                user_warn!(user_id, error = %e, "Voice download failed");
                Transcription::Failed
            }
        };
        transcription.into_text()
    }

    async fn reply(&self, chat_id: ChatId, reply: Reply) -> BotResult<()> {
        let mut outgoing = OutgoingMessage::new(chat_id, reply.text);
        if let Some(keyboard) = reply.keyboard {
            outgoing = outgoing.with_keyboard(keyboard);
        }
        self.transport.send(outgoing).await
    }

    async fn reply_all(&self, chat_id: ChatId, replies: Vec<Reply>) -> BotResult<()> {
        for reply in replies {
            self.reply(chat_id, reply).await?;
        }
        Ok(())
    }

    async fn apply_commit(&self, message: &IncomingMessage, commit: Commit) -> BotResult<()> {
        let user_id = message.user_id;
        let today = self.clock.today();

        let replies = match commit {
            Commit::Register { gender, age, height, weight } => {
                let first_name = message.first_name.clone();
                let saved = self
                    .registry
                    .transact(|registry| {
                        let profile = registry.entry(user_id).or_insert_with(|| {
                            UserProfile::new(user_id, first_name, Some(gender), age, height, weight)
                        });
                        profile.gender = Some(gender);
                        profile.record_measurement(age, height, weight, today);
                    })
                    .await;
                match saved {
                    Ok(()) => {
                        user_info!(user_id, age, height, weight, "User registered");
                        vec![Reply::text(texts::REGISTERED), main_menu()]
                    }
                    Err(e) => {
                        logging::log_error("Saving registration", &e);
                        vec![Reply::text(texts::SAVE_FAILED)]
                    }
                }
            }
            Commit::Measure { age, height, weight } => {
                let saved = self
                    .registry
                    .transact(|registry| match registry.get_mut(&user_id) {
                        Some(profile) => {
                            profile.record_measurement(age, height, weight, today);
                            true
                        }
                        None => false,
                    })
                    .await;
                match saved {
                    Ok(true) => {
                        user_info!(user_id, age, height, weight, "Measurement recorded");
                        vec![Reply::text(texts::MEASUREMENTS_SAVED), main_menu()]
                    }
                    Ok(false) => vec![Reply::text(texts::NOT_REGISTERED)],
                    Err(e) => {
                        logging::log_error("Saving measurement", &e);
                        vec![Reply::text(texts::SAVE_FAILED)]
                    }
                }
            }
        };

        self.reply_all(message.chat_id, replies).await
    }

    async fn start(&self, message: &IncomingMessage) -> BotResult<()> {
        if self.registry.contains(message.user_id).await {
            return self
                .reply_all(
                    message.chat_id,
                    vec![Reply::text(texts::ALREADY_REGISTERED), main_menu()],
                )
                .await;
        }

        let transition = conversation::start_registration();
        self.sessions.lock().await.set(message.user_id, transition.next);
        self.reply_all(message.chat_id, transition.replies).await
    }

    async fn rename(&self, message: &IncomingMessage, name: Option<String>) -> BotResult<()> {
        let user_id = message.user_id;
        if !self.registry.contains(user_id).await {
            return self.reply(message.chat_id, Reply::text(texts::RENAME_NOT_REGISTERED)).await;
        }
        let Some(name) = name else {
            return self.reply(message.chat_id, Reply::text(texts::RENAME_USAGE)).await;
        };

        let saved = self
            .registry
            .transact(|registry| {
                if let Some(profile) = registry.get_mut(&user_id) {
                    profile.rename(name.clone());
                }
            })
            .await;

        let text = match saved {
            Ok(()) => {
                user_info!(user_id, name = %name, "Display name changed");
                format!("Ваше ім'я було змінено на {name}.")
            }
            Err(e) => {
                logging::log_error("Saving new name", &e);
                texts::SAVE_FAILED.to_string()
            }
        };
        self.reply(message.chat_id, Reply::text(text)).await
    }

    async fn show_profile(&self, message: &IncomingMessage) -> BotResult<()> {
        let today = self.clock.today();
        let text = match self.registry.profile(message.user_id).await {
            Some(profile) => report::profile_report(&profile, today),
            None => texts::NOT_REGISTERED.to_string(),
        };
        self.reply(message.chat_id, Reply::text(text)).await
    }

    async fn start_measurement(&self, message: &IncomingMessage) -> BotResult<()> {
        let Some(profile) = self.registry.profile(message.user_id).await else {
            return self.reply(message.chat_id, Reply::text(texts::NOT_REGISTERED)).await;
        };

        let transition = conversation::start_measurement(&profile);
        self.sessions.lock().await.set(message.user_id, transition.next);
        self.reply_all(message.chat_id, transition.replies).await
    }

    async fn show_leaderboard(&self, message: &IncomingMessage) -> BotResult<()> {
        let today = self.clock.today();
        // Ranked under the registry lock so no profile is observed mid-write
        let ranking = self
            .registry
            .read(|registry| rank_by_weekly_change(registry.values(), today))
            .await;

        let text = report::leaderboard(&ranking).unwrap_or_else(|| texts::TOP_EMPTY.to_string());
        self.reply(message.chat_id, Reply::text(text)).await
    }

    async fn unrecognized(&self, message: &IncomingMessage, text: String) -> BotResult<()> {
        let user_id = message.user_id;
        if !self.admins.contains(&user_id) {
            return self.reply(message.chat_id, main_menu()).await;
        }

        for &admin in self.admins.iter().filter(|&&admin| admin != user_id) {
            let chat_id = ChatId::from(admin);
            let relayed = match &message.content {
                MessageContent::Voice { file_id } => {
                    self.transport
                        .send_voice(chat_id, file_id, Some(text.clone()))
                        .await
                }
                MessageContent::Text(_) => {
                    self.transport
                        .send(OutgoingMessage::new(chat_id, text.clone()))
                        .await
                }
            };
            match relayed {
                Ok(()) => user_debug!(user_id, admin = %admin, "Relayed message to administrator"),
                Err(e) => user_warn!(user_id, admin = %admin, error = %e, "Relay to administrator failed"),
            }
        }
        Ok(())
    }
}
