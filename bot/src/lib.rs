//! Telegram weight tracking assistant
//!
//! Users register their biometrics, log periodic measurements (typed or as
//! voice notes) and get BMI based health reports and a weekly leaderboard.
//! The analytics live in the `analytics` crate; this crate provides the
//! conversation flow, persistence and the Telegram and speech services.

pub mod bot_impl;
pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use bot_impl::Bot;
pub use config::{BotConfig, CliArgs};
pub use error::{BotError, BotResult};
pub use state::{RegistryService, SessionTable};
pub use traits::{ChatTransport, Clock, SnapshotStore, SpeechRecognizer};
pub use types::{AdminSet, Transcription};
