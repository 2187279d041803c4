//! Clock Discord commands - `clockin`, `clockout` and `last-inserted`.
//!
//! The clock commands log one row per use and DM the invoker a picture. The
//! usage notice goes out on its own task; it and the DM only log a warning on
//! failure. A failed reply or database write is returned to the framework,
//! which reports it to the user.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, Context, embeds::ClockEmbed},
        core::clock::{self, ClockEvent, ClockRecord},
        errors::{Error, Result},
    };
    use chrono::Utc;
    use poise::serenity_prelude as serenity;
    use std::sync::Arc;
    use tracing::{info, instrument, warn};

    /// Run this command to clock in to work!
    #[poise::command(slash_command)]
    pub async fn clockin(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        handle_clock(ctx, ClockEvent::In).await
    }

    /// Run this command to clockout from work, and send the data to the database
    #[poise::command(slash_command)]
    pub async fn clockout(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        handle_clock(ctx, ClockEvent::Out).await
    }

    /// Get the last input of the database
    #[poise::command(slash_command, rename = "last-inserted")]
    pub async fn last_inserted(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        reply_last_inserted(ctx).await
    }

    #[instrument(skip(ctx), fields(interaction_id = ctx.id(), author = %ctx.author().id))]
    async fn reply_last_inserted(ctx: Context<'_>) -> Result<()> {
        let db = &ctx.data().database;

        let content = match clock::get_last_inserted(db).await? {
            Some(row) => clock::format_record_summary(&row),
            None => "No clock events have been recorded yet.".to_string(),
        };

        ctx.send(poise::CreateReply::default().content(content).ephemeral(true))
            .await?;
        Ok(())
    }

    #[instrument(skip(ctx), fields(interaction_id = ctx.id(), author = %ctx.author().id))]
    async fn handle_clock(ctx: Context<'_>, event: ClockEvent) -> Result<()> {
        spawn_usage_notice(ctx);

        ctx.defer().await?;
        ctx.say(event.confirmation()).await?;

        let interaction_id = ctx.id();
        let author_id = ctx.author().id;
        let record = ClockRecord {
            interaction_id,
            guild_id: ctx.guild_id().map(serenity::GuildId::get),
            channel_id: ctx.channel_id().get(),
            author_id: author_id.get(),
            event,
            time_sent: clock::snowflake_timestamp(interaction_id).unwrap_or_else(Utc::now),
        };
        let row = clock::record_clock_event(&ctx.data().database, record).await?;
        info!(row_id = row.id, "Logged {}", row.message_content);

        send_clock_dm(ctx, author_id, event).await;

        Ok(())
    }

    /// Sends the usage notice in the background so it never delays the defer.
    fn spawn_usage_notice(ctx: Context<'_>) {
        let Some((channel_id, text)) = ctx.data().config.bot.usage_notice() else {
            return;
        };

        let http = Arc::clone(&ctx.serenity_context().http);
        let text = text.to_string();
        tokio::spawn(async move {
            if let Err(e) = serenity::ChannelId::new(channel_id).say(&http, text).await {
                warn!("Failed to send usage notice to {}: {}", channel_id, e);
            }
        });
    }

    async fn send_clock_dm(ctx: Context<'_>, user_id: serenity::UserId, event: ClockEvent) {
        let dm = match user_id.create_dm_channel(ctx.http()).await {
            Ok(dm) => dm,
            Err(e) => {
                warn!("Error creating DM channel: {}", e);
                return;
            }
        };

        let message = serenity::CreateMessage::new().embed(ClockEmbed::for_event(event).build());
        if let Err(e) = dm.send_message(ctx.http(), message).await {
            warn!("Error sending DM with embed: {}", e);
        }
    }
}

// Re-export all commands
pub use inner::*;
