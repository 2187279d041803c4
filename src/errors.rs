//! Unified error type for the bot.
//!
//! Every fallible operation returns [`Result`], and poise's error hook turns
//! these into a log line plus a short message for the invoking user.

use thiserror::Error;

/// All errors the bot can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or unreadable configuration
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Any failure reported by the database layer
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A required environment variable is missing or not unicode
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// File system failure (quote file, config file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The quote file is not valid JSON of the expected shape
    #[error("Quote file error: {0}")]
    Quotes(#[from] serde_json::Error),

    /// `config.toml` could not be parsed
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Errors from serenity or poise while talking to Discord
    #[error("Discord error: {0}")]
    Discord(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Discord(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
