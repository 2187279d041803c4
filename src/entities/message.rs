//! Message log entity - one row per clock-in or clock-out interaction.
//!
//! Rows are append-only. `message_id` holds the interaction snowflake and
//! `message_content` the slash command that produced the row.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Message log database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "messages")]
pub struct Model {
    /// Surrogate key, increases with every insert
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Discord interaction ID
    pub message_id: String,
    /// Guild the command was used in, `None` for DMs
    pub guild_id: Option<String>,
    /// Channel the command was used in
    pub channel_id: String,
    /// Discord user ID of the invoker
    pub author_id: String,
    /// The command text, `"/clockin"` or `"/clockout"`
    pub message_content: String,
    /// When the interaction was created
    pub time_sent: DateTimeUtc,
}

/// The message log stands alone
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
