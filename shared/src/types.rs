//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{SharedError, SharedResult};

/// Stable identifier of a chat user, supplied by the transport
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = SharedError;

    fn from_str(s: &str) -> SharedResult<Self> {
        s.trim()
            .parse::<i64>()
            .map(UserId)
            .map_err(|_| SharedError::InvalidUserId { input: s.to_string() })
    }
}

/// Identifier of the conversation a reply goes to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatId(i64);

impl ChatId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<UserId> for ChatId {
    /// Private chats share their id with the user
    fn from(user: UserId) -> Self {
        ChatId(user.0)
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Payload of an incoming chat message
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageContent {
    Text(String),
    /// Voice note, referenced by the transport's file id
    Voice { file_id: String },
}

/// A message received from a user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingMessage {
    pub user_id: UserId,
    pub chat_id: ChatId,
    pub first_name: String,
    pub content: MessageContent,
}

impl IncomingMessage {
    pub fn text(user_id: UserId, first_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            user_id,
            chat_id: user_id.into(),
            first_name: first_name.into(),
            content: MessageContent::Text(text.into()),
        }
    }

    pub fn voice(user_id: UserId, first_name: impl Into<String>, file_id: impl Into<String>) -> Self {
        Self {
            user_id,
            chat_id: user_id.into(),
            first_name: first_name.into(),
            content: MessageContent::Voice { file_id: file_id.into() },
        }
    }
}

/// Reply keyboard hint attached to an outgoing message
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyKeyboard {
    pub rows: Vec<Vec<String>>,
    pub resize: bool,
    pub one_time: bool,
}

impl ReplyKeyboard {
    /// Single row of buttons
    pub fn row<I, S>(buttons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: vec![buttons.into_iter().map(Into::into).collect()],
            resize: false,
            one_time: false,
        }
    }

    pub fn resized(mut self) -> Self {
        self.resize = true;
        self
    }

    pub fn one_time(mut self) -> Self {
        self.one_time = true;
        self
    }
}

/// A message to deliver to a chat
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub chat_id: ChatId,
    pub text: String,
    pub keyboard: Option<ReplyKeyboard>,
}

impl OutgoingMessage {
    pub fn new(chat_id: ChatId, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            keyboard: None,
        }
    }

    pub fn with_keyboard(mut self, keyboard: ReplyKeyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_parsing() {
        assert_eq!(" 42 ".parse::<UserId>().unwrap(), UserId::new(42));
        assert!(matches!(
            "abc".parse::<UserId>(),
            Err(SharedError::InvalidUserId { .. })
        ));
    }

    #[test]
    fn test_user_id_serializes_as_number() {
        assert_eq!(serde_json::to_string(&UserId::new(-15)).unwrap(), "-15");
        let restored: UserId = serde_json::from_str("123456789").unwrap();
        assert_eq!(restored, UserId::new(123456789));
    }

    #[test]
    fn test_private_chat_shares_user_id() {
        let chat: ChatId = UserId::new(7).into();
        assert_eq!(chat.as_i64(), 7);
    }

    #[test]
    fn test_keyboard_builders() {
        let keyboard = ReplyKeyboard::row(["👨", "👩"]).resized().one_time();
        assert_eq!(keyboard.rows, vec![vec!["👨".to_string(), "👩".to_string()]]);
        assert!(keyboard.resize);
        assert!(keyboard.one_time);
    }
}
