//! Speech-to-text recognizers
//!
//! `WhisperRecognizer` uploads the voice note to an OpenAI-compatible
//! transcription endpoint. Any failure is logged and reported as
//! `Transcription::Failed` so the conversation can carry on.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::traits::SpeechRecognizer;
use crate::types::Transcription;

pub const DEFAULT_SPEECH_ENDPOINT: &str = "https://api.openai.com/v1/audio/transcriptions";
const MODEL: &str = "whisper-1";
const LANGUAGE: &str = "uk";

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}

/// Whisper transcription over HTTP
pub struct WhisperRecognizer {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl WhisperRecognizer {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: DEFAULT_SPEECH_ENDPOINT.to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    async fn request(&self, audio: Vec<u8>) -> Result<String, reqwest::Error> {
        let file = Part::bytes(audio).file_name("voice.ogg").mime_str("audio/ogg")?;
        let form = Form::new()
            .part("file", file)
            .text("model", MODEL)
            .text("language", LANGUAGE);

        let response: TranscriptionResponse = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.text)
    }
}

#[async_trait]
impl SpeechRecognizer for WhisperRecognizer {
    async fn transcribe(&self, audio: Vec<u8>) -> Transcription {
        let size = audio.len();
        match self.request(audio).await {
            Ok(text) if !text.trim().is_empty() => {
                debug!(bytes = size, "Voice note transcribed");
                Transcription::Text(text.trim().to_string())
            }
            Ok(_) => {
                warn!(bytes = size, "Transcription came back empty");
                Transcription::Failed
            }
            Err(e) => {
                warn!(bytes = size, error = %e, "Transcription request failed");
                Transcription::Failed
            }
        }
    }
}

/// Recognizer used when no speech API key is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledRecognizer;

#[async_trait]
impl SpeechRecognizer for DisabledRecognizer {
    async fn transcribe(&self, _audio: Vec<u8>) -> Transcription {
        debug!("Speech recognition disabled, ignoring voice note");
        Transcription::Failed
    }
}
