//! Runtime configuration
//!
//! Settings come from two sources:
//! 1. Command line flags (`CliArgs`) for paths, polling and endpoints
//! 2. Environment variables, optionally loaded from a `.env` file
//!
//! ## Environment
//! - `TG_BOT_TOKEN`: Telegram bot token (required)
//! - `TG_CHAT_ADMIN`: comma separated administrator user ids (optional)
//! - `OPENAI_API_KEY`: key for voice transcription (optional, voice notes
//!   are answered with a recognition failure without it)

use std::path::PathBuf;

use clap::Parser;

use shared::UserId;

use crate::error::{BotError, BotResult};
use crate::services::speech::DEFAULT_SPEECH_ENDPOINT;
use crate::services::telegram::DEFAULT_API_BASE;
use crate::types::AdminSet;

pub const TOKEN_VAR: &str = "TG_BOT_TOKEN";
pub const ADMINS_VAR: &str = "TG_CHAT_ADMIN";
pub const SPEECH_KEY_VAR: &str = "OPENAI_API_KEY";

/// Telegram weight tracking assistant
#[derive(Parser, Debug, Clone)]
#[command(name = "slim-tracker")]
#[command(about = "Telegram bot that tracks weight measurements and ranks weekly progress")]
pub struct CliArgs {
    /// Snapshot file holding every user profile
    #[arg(long, default_value = "user_data.json")]
    pub data_file: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Long-poll timeout in seconds for getUpdates
    #[arg(long, default_value = "30")]
    pub poll_timeout: u64,

    /// Speech-to-text endpoint
    #[arg(long, default_value = DEFAULT_SPEECH_ENDPOINT)]
    pub speech_endpoint: String,

    /// Telegram Bot API base URL
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,
}

/// Fully resolved bot configuration
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub token: String,
    pub admins: AdminSet,
    pub speech_api_key: Option<String>,
    pub data_file: PathBuf,
    pub poll_timeout: u64,
    pub api_base: String,
    pub speech_endpoint: String,
}

impl BotConfig {
    /// Resolve against the process environment, loading `.env` first
    pub fn from_env(args: &CliArgs) -> BotResult<Self> {
        // A missing .env file is fine, real variables still apply
        let _ = dotenv::dotenv();
        Self::from_sources(args, |key| std::env::var(key).ok())
    }

    pub fn from_sources(args: &CliArgs, lookup: impl Fn(&str) -> Option<String>) -> BotResult<Self> {
        let token = lookup(TOKEN_VAR)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| BotError::config(format!("{TOKEN_VAR} is not set")))?;

        let admins = match lookup(ADMINS_VAR) {
            Some(raw) => parse_admin_ids(&raw)?,
            None => AdminSet::new(),
        };

        let speech_api_key = lookup(SPEECH_KEY_VAR)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        Ok(Self {
            token,
            admins,
            speech_api_key,
            data_file: args.data_file.clone(),
            poll_timeout: args.poll_timeout,
            api_base: args.api_base.clone(),
            speech_endpoint: args.speech_endpoint.clone(),
        })
    }
}

/// Parse a comma separated id list; blank items are skipped
pub fn parse_admin_ids(raw: &str) -> BotResult<AdminSet> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<UserId>()
                .map_err(|_| BotError::config(format!("{ADMINS_VAR} contains invalid user id {item:?}")))
        })
        .collect()
}
