//! Gateway event handlers
//!
//! Slash commands are dispatched by poise itself; everything else that arrives
//! on the gateway passes through [`event_handler`].

/// Plain-text message responder
pub mod message;

use crate::{
    bot::BotData,
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;

/// Poise event hook. Only new messages are handled; the bot's own messages are ignored.
pub async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    framework: poise::FrameworkContext<'_, BotData, Error>,
    data: &BotData,
) -> Result<()> {
    if let serenity::FullEvent::Message { new_message } = event {
        if new_message.author.id == framework.bot_id {
            return Ok(());
        }
        message::handle_message(ctx, new_message, data).await?;
    }
    Ok(())
}
