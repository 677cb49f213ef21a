//! Telegram Bot API transport
//!
//! Long-polls `getUpdates` and talks to the HTTP Bot API with JSON bodies.
//! Only private text and voice messages are surfaced; every other update is
//! acknowledged and dropped.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use shared::{ChatId, IncomingMessage, MessageContent, OutgoingMessage, ReplyKeyboard, UserId};

use crate::error::{BotError, BotResult};
use crate::traits::ChatTransport;

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Slack on top of the long-poll timeout before the HTTP request gives up
const REQUEST_GRACE: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Update {
    update_id: i64,
    message: Option<Message>,
}

#[derive(Debug, Deserialize)]
struct Message {
    from: Option<User>,
    chat: Chat,
    text: Option<String>,
    voice: Option<Voice>,
}

#[derive(Debug, Deserialize)]
struct User {
    id: i64,
    first_name: String,
}

#[derive(Debug, Deserialize)]
struct Chat {
    id: i64,
}

#[derive(Debug, Deserialize)]
struct Voice {
    file_id: String,
}

#[derive(Debug, Deserialize)]
struct File {
    file_path: Option<String>,
}

#[derive(Debug, Serialize)]
struct KeyboardButton<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct ReplyMarkup<'a> {
    keyboard: Vec<Vec<KeyboardButton<'a>>>,
    resize_keyboard: bool,
    one_time_keyboard: bool,
}

impl<'a> From<&'a ReplyKeyboard> for ReplyMarkup<'a> {
    fn from(keyboard: &'a ReplyKeyboard) -> Self {
        Self {
            keyboard: keyboard
                .rows
                .iter()
                .map(|row| row.iter().map(|text| KeyboardButton { text }).collect())
                .collect(),
            resize_keyboard: keyboard.resize,
            one_time_keyboard: keyboard.one_time,
        }
    }
}

impl Message {
    fn into_incoming(self) -> Option<IncomingMessage> {
        let from = self.from?;
        let content = match (self.text, self.voice) {
            (_, Some(voice)) => MessageContent::Voice { file_id: voice.file_id },
            (Some(text), None) => MessageContent::Text(text),
            (None, None) => return None,
        };
        Some(IncomingMessage {
            user_id: UserId::new(from.id),
            chat_id: ChatId::new(self.chat.id),
            first_name: from.first_name,
            content,
        })
    }
}

/// Bot API client with long polling
pub struct TelegramTransport {
    client: Client,
    api_base: String,
    token: String,
    poll_timeout: u64,
    next_offset: Mutex<i64>,
}

impl TelegramTransport {
    pub fn new(token: impl Into<String>, poll_timeout: u64) -> BotResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(poll_timeout) + REQUEST_GRACE)
            .build()?;
        Ok(Self {
            client,
            api_base: DEFAULT_API_BASE.to_string(),
            token: token.into(),
            poll_timeout,
            next_offset: Mutex::new(0),
        })
    }

    /// Point the client at another Bot API server
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base, self.token, method)
    }

    fn file_url(&self, file_path: &str) -> String {
        format!("{}/file/bot{}/{}", self.api_base, self.token, file_path)
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, body: serde_json::Value) -> BotResult<T> {
        let response: ApiResponse<T> = self
            .client
            .post(self.method_url(method))
            .json(&body)
            .send()
            .await?
            .json()
            .await?;

        if !response.ok {
            let description = response.description.unwrap_or_default();
            return Err(BotError::transport(format!("{method} failed: {description}")));
        }
        response
            .result
            .ok_or_else(|| BotError::transport(format!("{method} returned no result")))
    }
}

#[async_trait]
impl ChatTransport for TelegramTransport {
    async fn receive(&self) -> BotResult<Vec<IncomingMessage>> {
        let mut offset = self.next_offset.lock().await;
        let updates: Vec<Update> = self
            .call(
                "getUpdates",
                serde_json::json!({
                    "offset": *offset,
                    "timeout": self.poll_timeout,
                    "allowed_updates": ["message"],
                }),
            )
            .await?;

        let mut messages = Vec::with_capacity(updates.len());
        for update in updates {
            *offset = (*offset).max(update.update_id + 1);
            match update.message.and_then(Message::into_incoming) {
                Some(message) => messages.push(message),
                None => debug!(update_id = update.update_id, "Skipping unsupported update"),
            }
        }
        Ok(messages)
    }

    async fn send(&self, message: OutgoingMessage) -> BotResult<()> {
        let mut body = serde_json::json!({
            "chat_id": message.chat_id.as_i64(),
            "text": message.text,
        });
        if let Some(keyboard) = &message.keyboard {
            body["reply_markup"] = serde_json::to_value(ReplyMarkup::from(keyboard))?;
        }

        let _: serde_json::Value = self.call("sendMessage", body).await?;
        Ok(())
    }

    async fn download_file(&self, file_id: &str) -> BotResult<Vec<u8>> {
        let file: File = self
            .call("getFile", serde_json::json!({ "file_id": file_id }))
            .await?;
        let file_path = file
            .file_path
            .ok_or_else(|| BotError::transport(format!("file {file_id} is not downloadable")))?;

        let response = self.client.get(self.file_url(&file_path)).send().await?;
        if !response.status().is_success() {
            warn!(status = %response.status(), file_id, "File download rejected");
            return Err(BotError::transport(format!(
                "download of {file_id} failed with {}",
                response.status()
            )));
        }
        Ok(response.bytes().await?.to_vec())
    }

    async fn send_voice(&self, chat_id: ChatId, file_id: &str, caption: Option<String>) -> BotResult<()> {
        let mut body = serde_json::json!({
            "chat_id": chat_id.as_i64(),
            "voice": file_id,
        });
        if let Some(caption) = caption {
            body["caption"] = serde_json::Value::String(caption);
        }

        let _: serde_json::Value = self.call("sendVoice", body).await?;
        Ok(())
    }
}
