//! Application settings loaded from `config.toml`.
//!
//! Every field has a default so the bot can start without a config file. The
//! Discord token stays in the environment and never lands in this struct.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Configuration file used when `CONFIG_PATH` is not set
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// The whole `config.toml` file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Gateway-facing behaviour
    pub bot: BotConfig,
    /// Quote responder settings
    pub quotes: QuotesConfig,
}

/// `[bot]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// First word of a prefix command, e.g. `!bot quotes`
    pub prefix: String,
    /// Channel that receives a notice whenever a clock command is used
    pub notice_channel_id: Option<u64>,
    /// Text of that notice
    pub notice_message: String,
    /// Register slash commands in this guild only (instant updates while developing)
    pub guild_id: Option<u64>,
}

impl BotConfig {
    /// Channel and text of the usage notice, `None` when no channel is configured.
    #[must_use]
    pub fn usage_notice(&self) -> Option<(u64, &str)> {
        self.notice_channel_id
            .map(|channel_id| (channel_id, self.notice_message.as_str()))
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            prefix: "!bot".to_string(),
            notice_channel_id: None,
            notice_message: "Stransyyy bot esta siendo usado...".to_string(),
            guild_id: None,
        }
    }
}

/// `[quotes]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QuotesConfig {
    /// JSON file holding `{"quotes": [{"quote": .., "author": ..}]}`
    pub path: PathBuf,
}

impl Default for QuotesConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/quotes.json"),
        }
    }
}

impl AppConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let prefix = &self.bot.prefix;
        if prefix.is_empty() || prefix.chars().any(char::is_whitespace) {
            return Err(Error::Config {
                message: format!("bot.prefix must be a single non-empty word, got {prefix:?}"),
            });
        }
        Ok(())
    }
}

/// Loads configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid TOML, or fails
/// validation.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;
    AppConfig::from_toml_str(&contents)
}

/// Loads configuration from `CONFIG_PATH`, or from `./config.toml`.
#[instrument]
pub fn load_app_configuration() -> Result<AppConfig> {
    let explicit = std::env::var_os("CONFIG_PATH").map(PathBuf::from);
    load_app_configuration_from(explicit.as_deref(), Path::new(DEFAULT_CONFIG_PATH))
}

/// Picks the configuration source.
///
/// An explicitly configured path must exist. The default path is optional and
/// falls back to built-in defaults when absent.
pub fn load_app_configuration_from(explicit: Option<&Path>, default: &Path) -> Result<AppConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    if default.exists() {
        load_config(default)
    } else {
        info!("No {} found, using default configuration.", default.display());
        Ok(AppConfig::default())
    }
}
