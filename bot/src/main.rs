//! Main entry point for the slim-tracker bot binary

use anyhow::Context;
use clap::Parser;
use tokio::signal;

use bot::services::{DisabledRecognizer, JsonSnapshotStore, KyivClock, TelegramTransport, WhisperRecognizer};
use bot::{Bot, BotConfig, CliArgs, RegistryService, SpeechRecognizer};
use shared::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logging::init_tracing_with_level(Some(&args.log_level));

    let config = BotConfig::from_env(&args).context("Invalid configuration")?;
    tracing::debug!(
        data_file = %config.data_file.display(),
        api_base = %config.api_base,
        admins = config.admins.len(),
        speech = config.speech_api_key.is_some(),
        "Configuration loaded"
    );

    let transport = TelegramTransport::new(config.token.clone(), config.poll_timeout)
        .context("Failed to build Telegram client")?
        .with_api_base(config.api_base.clone());

    let recognizer: Box<dyn SpeechRecognizer> = match &config.speech_api_key {
        Some(key) => Box::new(WhisperRecognizer::new(key.clone()).with_endpoint(config.speech_endpoint.clone())),
        None => {
            tracing::warn!("OPENAI_API_KEY is not set, voice notes will not be transcribed");
            Box::new(DisabledRecognizer)
        }
    };

    let store = JsonSnapshotStore::new(config.data_file.clone());
    let registry = RegistryService::open(store)
        .await
        .with_context(|| format!("Failed to load {}", config.data_file.display()))?;

    let mut bot = Bot::new(transport, recognizer, registry, KyivClock, config.admins.clone());

    // Set up graceful shutdown
    let shutdown_sender = bot.shutdown_sender();
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                logging::log_shutdown("Received Ctrl+C signal");
                let _ = shutdown_sender.send(()).await;
            }
            Err(err) => {
                logging::log_error("Signal handling", &err);
            }
        }
    });

    bot.run().await?;

    logging::log_success("Bot stopped gracefully");
    Ok(())
}
