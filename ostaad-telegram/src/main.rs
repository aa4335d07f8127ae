//! ostaad-bot: entry point. Loads configuration, wires the gateway stack and
//! conversation core, and runs the teloxide dispatcher.

use anyhow::Result;
use language::LanguageDetector;
use llm_gateway::{GatewayConfig, OpenAiGateway, RetryingGateway};
use ostaad_chat::ConversationOrchestrator;
use ostaad_core::init_tracing;
use ostaad_telegram::{schema, AppState, BotConfig, Command};
use session::{PreferenceStore, SessionStore};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = BotConfig::load()?;
    let gateway_config = GatewayConfig::load()?;

    if let Some(parent) = Path::new(&config.log_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    init_tracing(&config.log_file)?;

    info!(
        model = %gateway_config.model,
        base_url = %gateway_config.base_url,
        history_cap = config.history_cap,
        "Initializing bot"
    );

    let gateway = RetryingGateway::new(
        OpenAiGateway::new(
            gateway_config.api_key.clone(),
            gateway_config.base_url.clone(),
            gateway_config.model.clone(),
            gateway_config.request_timeout,
        ),
        gateway_config.max_retries,
        Duration::from_secs(1),
    );

    let orchestrator = ConversationOrchestrator::new(
        Arc::new(gateway),
        SessionStore::with_cap(config.history_cap),
        PreferenceStore::open(&config.prefs_file),
        LanguageDetector::new(config.default_language),
    )
    .with_chunk_limit(config.max_message_length);

    let state = Arc::new(AppState {
        orchestrator,
        typing_delay: config.typing_delay,
        default_language: config.default_language,
    });

    let bot = Bot::new(config.bot_token.clone());
    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "failed to register command list");
    }

    info!("Bot started successfully");

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
