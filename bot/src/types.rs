//! Bot-specific data types

use std::collections::BTreeSet;

use shared::UserId;

/// Users whose unrecognized messages are relayed to the other administrators
pub type AdminSet = BTreeSet<UserId>;

/// Outcome of a speech-to-text request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transcription {
    Text(String),
    Failed,
}

impl Transcription {
    /// Recognized text, or the fixed notice shown when recognition failed
    pub fn into_text(self) -> String {
        match self {
            Transcription::Text(text) => text,
            Transcription::Failed => crate::core::texts::TRANSCRIPTION_FAILED.to_string(),
        }
    }
}
