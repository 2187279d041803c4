//! Bot layer - Discord-specific interface and command handlers
//!
//! Wires the poise framework together: slash commands, the plain-message event
//! handler, the shared [`BotData`] and the error hook.

/// Discord command implementations
pub mod commands;
/// Decorative embeds sent by the clock commands
pub mod embeds;
/// Gateway event handlers (plain messages)
pub mod handlers;

use crate::{
    config::AppConfig,
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Shared data available to all bot commands and event handlers.
pub struct BotData {
    /// Database connection pool for the message log
    pub database: DatabaseConnection,
    /// Settings loaded at startup
    pub config: Arc<AppConfig>,
}

impl BotData {
    /// Creates a new `BotData` instance.
    #[must_use]
    pub const fn new(database: DatabaseConnection, config: Arc<AppConfig>) -> Self {
        Self { database, config }
    }
}

/// Poise context type used by every command
pub type Context<'a> = poise::Context<'a, BotData, Error>;

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {:?}", ctx.command().name, error);
            if let Err(e) = ctx.say(format!("An error occurred: {error}")).await {
                error!("Failed to send error message: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Every slash command the bot registers.
#[must_use]
pub fn all_commands() -> Vec<poise::Command<BotData, Error>> {
    vec![
        commands::clockin(),
        commands::clockout(),
        commands::last_inserted(),
    ]
}

/// Connects to the gateway and runs until Ctrl-C.
///
/// `expected_app_id` is only compared against the application that logged in;
/// a mismatch is logged, not fatal.
#[instrument(skip(token, app_config, database))]
pub async fn run_bot(
    token: String,
    expected_app_id: Option<u64>,
    app_config: Arc<AppConfig>,
    database: DatabaseConnection,
) -> Result<()> {
    let guild_id = app_config.bot.guild_id;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: all_commands(),
            on_error: |error| Box::pin(on_error(error)),
            event_handler: |ctx, event, framework, data| {
                Box::pin(handlers::event_handler(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);

                let logged_in_as = ready.application.id.get();
                if let Some(expected) = expected_app_id.filter(|id| *id != logged_in_as) {
                    warn!(
                        "BOT_APP_ID is {} but logged in as application {}",
                        expected, ready.application.id
                    );
                }

                let commands = &framework.options().commands;
                if let Some(guild_id) = guild_id {
                    let guild_id = serenity::GuildId::new(guild_id);
                    poise::builtins::register_in_guild(ctx, commands, guild_id).await?;
                    info!("Registered {} commands in guild {}", commands.len(), guild_id);
                } else {
                    poise::builtins::register_globally(ctx, commands).await?;
                    info!("Registered {} commands globally", commands.len());
                }

                Ok(BotData::new(database, app_config))
            })
        })
        .build();

    let intents = serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::DIRECT_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::Client::builder(&token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {:?}", e))?;

    let shard_manager = Arc::clone(&client.shard_manager);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Interrupt received, shutting down..."),
            Err(e) => error!("Failed to listen for Ctrl-C: {}", e),
        }
        shard_manager.shutdown_all().await;
    });

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {:?}", e))?;

    info!("Bot stopped.");
    Ok(())
}
