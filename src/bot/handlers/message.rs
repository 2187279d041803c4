//! Replies to plain-text messages: keyword rules and `<prefix> quotes`.

use crate::{
    bot::BotData,
    core::{quotes, responder},
    errors::Result,
};
use poise::serenity_prelude as serenity;
use tracing::{debug, instrument, warn};

/// Applies the keyword rules, then answers a quotes request if there is one.
#[instrument(skip_all, fields(message_id = %msg.id, channel_id = %msg.channel_id))]
pub async fn handle_message(
    ctx: &serenity::Context,
    msg: &serenity::Message,
    data: &BotData,
) -> Result<()> {
    if let Some(reply) = responder::keyword_reply(&msg.content, msg.author.id.get()) {
        msg.channel_id.say(&ctx.http, reply).await?;
    }

    if !responder::is_quotes_request(&msg.content, &data.config.bot.prefix) {
        return Ok(());
    }

    let path = &data.config.quotes.path;
    let all_quotes = quotes::load_quotes(path).await?;
    let picked = {
        let mut rng = rand::thread_rng();
        quotes::pick_quote(&all_quotes, &mut rng).map(str::to_owned)
    };

    match picked {
        Some(quote) => {
            debug!("Sending quote");
            msg.channel_id.say(&ctx.http, quote).await?;
        }
        None => warn!("Quote file {} has no quotes", path.display()),
    }
    Ok(())
}
