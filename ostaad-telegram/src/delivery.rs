//! Sends one turn's chunks to a chat, honouring the delivery hints: a typing
//! indicator plus a short pause before the first piece, and the language menu
//! attached to the last piece.

use crate::handlers::language_keyboard;
use ostaad_chat::DeliveryChunk;
use std::time::Duration;
use teloxide::prelude::*;
use teloxide::types::ChatAction;
use tracing::warn;

pub async fn deliver(
    bot: &Bot,
    chat_id: ChatId,
    chunks: Vec<DeliveryChunk>,
    typing_delay: Duration,
) -> anyhow::Result<()> {
    for chunk in chunks {
        if chunk.simulate_typing {
            // A failed typing action is cosmetic; the reply still goes out.
            if let Err(e) = bot.send_chat_action(chat_id, ChatAction::Typing).await {
                warn!(chat_id = chat_id.0, error = %e, "typing action failed");
            }
            tokio::time::sleep(typing_delay).await;
        }

        let text = chunk.text.trim_end();
        if text.is_empty() {
            continue;
        }

        let request = bot.send_message(chat_id, text.to_string());
        if chunk.attach_menu {
            request.reply_markup(language_keyboard()).await?;
        } else {
            request.await?;
        }
    }
    Ok(())
}
