//! Update handler tree: command, callback-query and plain-message branches,
//! all dispatching into the shared [`ConversationOrchestrator`].

use crate::delivery::deliver;
use ostaad_chat::ConversationOrchestrator;
use ostaad_core::brand::{BOT_NAME, DEVELOPER, VERSION};
use ostaad_core::LanguageCode;
use std::sync::Arc;
use std::time::Duration;
use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::dptree;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use teloxide::utils::command::BotCommands;
use tracing::{debug, error, info};

const LANG_CALLBACK_PREFIX: &str = "lang:";

const MENU_LANGUAGES: &[LanguageCode] = &[
    LanguageCode::En,
    LanguageCode::Hi,
    LanguageCode::Ur,
    LanguageCode::Ar,
    LanguageCode::Bn,
    LanguageCode::Mr,
    LanguageCode::Te,
    LanguageCode::Ta,
    LanguageCode::Gu,
    LanguageCode::Kn,
    LanguageCode::Or,
    LanguageCode::Pa,
];

/// Shared state injected into every endpoint.
pub struct AppState {
    pub orchestrator: ConversationOrchestrator,
    pub typing_delay: Duration,
    pub default_language: LanguageCode,
}

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Supported commands:")]
pub enum Command {
    #[command(description = "show the welcome message")]
    Start,
    #[command(description = "clear the conversation history")]
    Reset,
    #[command(description = "choose your language")]
    Language,
}

/// Builds the dptree handler: commands first, then callback queries, then
/// plain messages.
pub fn schema() -> UpdateHandler<anyhow::Error> {
    let commands = Update::filter_message()
        .filter_command::<Command>()
        .endpoint(handle_command);
    let callbacks = Update::filter_callback_query().endpoint(handle_callback);
    let messages = Update::filter_message().endpoint(handle_message);

    dptree::entry()
        .branch(commands)
        .branch(callbacks)
        .branch(messages)
}

async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: Arc<AppState>,
) -> anyhow::Result<()> {
    let user_id = sender_id(&msg);
    let language = state
        .orchestrator
        .language(user_id)
        .await
        .unwrap_or(state.default_language);

    match cmd {
        Command::Start => {
            info!(user_id, chat_id = msg.chat.id.0, "step: /start");
            bot.send_message(msg.chat.id, welcome_text(language))
                .reply_markup(language_keyboard())
                .await?;
        }
        Command::Reset => {
            info!(user_id, chat_id = msg.chat.id.0, "step: /reset");
            state.orchestrator.reset(user_id).await;
            bot.send_message(msg.chat.id, reset_text(language)).await?;
        }
        Command::Language => {
            info!(user_id, chat_id = msg.chat.id.0, "step: /language");
            bot.send_message(msg.chat.id, choose_language_text(language))
                .reply_markup(language_keyboard())
                .await?;
        }
    }
    Ok(())
}

async fn handle_message(bot: Bot, msg: Message, state: Arc<AppState>) -> anyhow::Result<()> {
    let Some(text) = msg.text() else {
        debug!(chat_id = msg.chat.id.0, "ignoring non-text message");
        return Ok(());
    };
    if text.starts_with('/') {
        // Unknown command: the command branch already rejected it.
        debug!(chat_id = msg.chat.id.0, "ignoring unknown command");
        return Ok(());
    }

    let user_id = sender_id(&msg);
    info!(
        user_id,
        chat_id = msg.chat.id.0,
        message_chars = text.chars().count(),
        "Received message"
    );

    let chunks = state.orchestrator.handle_message(user_id, text).await;
    if let Err(e) = deliver(&bot, msg.chat.id, chunks, state.typing_delay).await {
        error!(user_id, chat_id = msg.chat.id.0, error = %e, "delivery failed");
    }
    Ok(())
}

async fn handle_callback(
    bot: Bot,
    query: CallbackQuery,
    state: Arc<AppState>,
) -> anyhow::Result<()> {
    let answer = bot.answer_callback_query(query.id.clone());
    let Some(code) = query
        .data
        .as_deref()
        .and_then(|d| d.strip_prefix(LANG_CALLBACK_PREFIX))
        .and_then(LanguageCode::from_code)
    else {
        answer.await?;
        return Ok(());
    };

    let user_id = query.from.id.0 as i64;
    state.orchestrator.set_language(user_id, code).await;
    info!(user_id, language = code.code(), "step: language selected from menu");

    answer.text(language_set_text(code)).await?;
    if let Some(message) = &query.message {
        bot.send_message(message.chat().id, language_set_text(code))
            .await?;
    }
    Ok(())
}

fn sender_id(msg: &Message) -> i64 {
    msg.from
        .as_ref()
        .map(|u| u.id.0 as i64)
        .unwrap_or(msg.chat.id.0)
}

/// One button per supported language, native display name, `lang:<code>` data.
pub fn language_keyboard() -> InlineKeyboardMarkup {
    let rows: Vec<Vec<InlineKeyboardButton>> = MENU_LANGUAGES
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|lang| {
                    InlineKeyboardButton::callback(
                        lang.display_name(),
                        format!("{LANG_CALLBACK_PREFIX}{}", lang.code()),
                    )
                })
                .collect()
        })
        .collect();
    InlineKeyboardMarkup::new(rows)
}

fn welcome_text(language: LanguageCode) -> String {
    match language {
        LanguageCode::Hi => format!(
            "🙏 Namaste! Main **{BOT_NAME}** hoon - tumhara digital ustad! 🤖\n\n\
             Padhai, career, tech, rishte - kuch bhi poocho, Hinglish mein jawab \
             milega. 😊\n\n\
             Commands:\n\
             /reset - nayi baatcheet shuru karo\n\
             /language - apni bhasha chuno\n\n\
             Developer: {DEVELOPER} | {VERSION}"
        ),
        LanguageCode::Ur => format!(
            "🙏 السلام علیکم! میں **{BOT_NAME}** ہوں - آپ کا ڈیجیٹل استاد! 🤖\n\n\
             پڑھائی، کیریئر، ٹیک - کچھ بھی پوچھیں۔ 😊\n\n\
             Commands:\n\
             /reset - نئی گفتگو شروع کریں\n\
             /language - اپنی زبان چنیں\n\n\
             Developer: {DEVELOPER} | {VERSION}"
        ),
        LanguageCode::Ar => format!(
            "🙏 مرحباً! أنا **{BOT_NAME}** - أستاذك الرقمي! 🤖\n\n\
             الدراسة، المهنة، التقنية - اسأل عن أي شيء. 😊\n\n\
             Commands:\n\
             /reset - ابدأ محادثة جديدة\n\
             /language - اختر لغتك\n\n\
             Developer: {DEVELOPER} | {VERSION}"
        ),
        _ => format!(
            "🙏 Hello! I'm **{BOT_NAME}** - your digital ustad (teacher)! 🤖\n\n\
             Studies, career, tech, relationships - ask me anything and I'll \
             answer like a friend. 😊\n\n\
             Commands:\n\
             /reset - start a fresh conversation\n\
             /language - choose your language\n\n\
             Developer: {DEVELOPER} | {VERSION}"
        ),
    }
}

fn reset_text(language: LanguageCode) -> String {
    match language {
        LanguageCode::Hi => "🔄 Ho gaya bhai! Purani baatein bhool gaya, nayi shuruaat karte \
                             hain. 😊"
            .to_string(),
        _ => "🔄 Done! Conversation history cleared, let's start fresh. 😊".to_string(),
    }
}

fn choose_language_text(language: LanguageCode) -> String {
    match language {
        LanguageCode::Hi => "🌐 Apni bhasha chuno:".to_string(),
        _ => "🌐 Choose your language:".to_string(),
    }
}

fn language_set_text(code: LanguageCode) -> String {
    format!("✅ {} ({})", code.display_name(), code.code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_covers_every_supported_language() {
        let keyboard = language_keyboard();
        let buttons: Vec<_> = keyboard.inline_keyboard.iter().flatten().collect();
        assert_eq!(buttons.len(), MENU_LANGUAGES.len());
        for row in &keyboard.inline_keyboard {
            assert!(row.len() <= 3);
        }
    }

    #[test]
    fn test_callback_data_round_trips() {
        for lang in MENU_LANGUAGES {
            let data = format!("{LANG_CALLBACK_PREFIX}{}", lang.code());
            let parsed = data
                .strip_prefix(LANG_CALLBACK_PREFIX)
                .and_then(LanguageCode::from_code);
            assert_eq!(parsed, Some(*lang));
        }
    }

    #[test]
    fn test_welcome_text_is_localised() {
        assert!(welcome_text(LanguageCode::Hi).contains("Namaste"));
        assert!(welcome_text(LanguageCode::En).contains("Hello"));
        // Unsupported menu languages fall back to English.
        assert!(welcome_text(LanguageCode::Ta).contains("Hello"));
        for lang in [LanguageCode::En, LanguageCode::Hi, LanguageCode::Ur, LanguageCode::Ar] {
            assert!(welcome_text(lang).contains(BOT_NAME));
        }
    }
}
