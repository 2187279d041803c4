//! Clock-in/clock-out business logic.
//!
//! Writes one message-log row per clock interaction and reads back the most
//! recent one. Functions here take plain IDs rather than serenity types so they
//! can be tested against an in-memory database without a gateway.

use crate::{
    entities::{Message, message},
    errors::Result,
};
use chrono::{DateTime, Utc};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::{debug, instrument};

/// Milliseconds between the Unix epoch and the Discord epoch (2015-01-01T00:00:00Z).
pub const DISCORD_EPOCH_MS: i64 = 1_420_070_400_000;

/// Which end of a work session an interaction marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockEvent {
    /// Start of a session
    In,
    /// End of a session
    Out,
}

impl ClockEvent {
    /// The command text stored in `message_content`.
    #[must_use]
    pub const fn command_text(self) -> &'static str {
        match self {
            Self::In => "/clockin",
            Self::Out => "/clockout",
        }
    }

    /// Follow-up sent after the deferred response.
    #[must_use]
    pub const fn confirmation(self) -> &'static str {
        match self {
            Self::In => "You have Clocked-in successfuly",
            Self::Out => "You have Clocked-Out successfuly, you can now rest!",
        }
    }
}

/// Everything needed to write one log row.
#[derive(Debug, Clone)]
pub struct ClockRecord {
    /// Interaction snowflake
    pub interaction_id: u64,
    /// `None` when the command was used in a DM
    pub guild_id: Option<u64>,
    /// Channel the command was used in
    pub channel_id: u64,
    /// Invoking user
    pub author_id: u64,
    /// Clock in or out
    pub event: ClockEvent,
    /// Creation time of the interaction
    pub time_sent: DateTime<Utc>,
}

/// Inserts one row for a clock interaction inside a database transaction.
///
/// Dropping an uncommitted `DatabaseTransaction` rolls it back, so an error
/// anywhere before `commit` leaves no row behind. There is no deduplication:
/// recording the same interaction twice yields two rows.
#[instrument(skip(db), fields(interaction_id = record.interaction_id))]
pub async fn record_clock_event(
    db: &DatabaseConnection,
    record: ClockRecord,
) -> Result<message::Model> {
    let txn = db.begin().await?;
    let inserted = insert_clock_row(&txn, record).await?;
    txn.commit().await?;

    debug!(row_id = inserted.id, "Recorded {}", inserted.message_content);
    Ok(inserted)
}

/// Writes the log row on any connection or open transaction.
pub async fn insert_clock_row<C>(conn: &C, record: ClockRecord) -> Result<message::Model>
where
    C: ConnectionTrait,
{
    let row = message::ActiveModel {
        message_id: Set(record.interaction_id.to_string()),
        guild_id: Set(record.guild_id.map(|id| id.to_string())),
        channel_id: Set(record.channel_id.to_string()),
        author_id: Set(record.author_id.to_string()),
        message_content: Set(record.event.command_text().to_string()),
        time_sent: Set(record.time_sent),
        ..Default::default()
    };

    row.insert(conn).await.map_err(Into::into)
}

/// Returns the most recently inserted log row, if any.
pub async fn get_last_inserted(db: &DatabaseConnection) -> Result<Option<message::Model>> {
    Message::find()
        .order_by_desc(message::Column::Id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Decodes the creation time embedded in a Discord snowflake.
#[must_use]
pub fn snowflake_timestamp(id: u64) -> Option<DateTime<Utc>> {
    let since_epoch = i64::try_from(id >> 22).ok()?;
    DateTime::from_timestamp_millis(since_epoch + DISCORD_EPOCH_MS)
}

/// One-line description of a log row, used by the last-inserted command.
#[must_use]
pub fn format_record_summary(row: &message::Model) -> String {
    let guild = row.guild_id.as_deref().unwrap_or("DM");
    format!(
        "#{} `{}` by <@{}> in <#{}> (guild {}) at {}",
        row.id,
        row.message_content,
        row.author_id,
        row.channel_id,
        guild,
        row.time_sent.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::errors::Error;
    use crate::test_utils::*;
    use chrono::TimeZone;

    #[test]
    fn test_snowflake_timestamp_known_value() {
        // 175928847299117063 was created at 2016-04-30 11:18:25.796 UTC
        let ts = snowflake_timestamp(175_928_847_299_117_063).unwrap();
        assert_eq!(ts.timestamp_millis(), 1_462_015_105_796);
    }

    #[test]
    fn test_snowflake_timestamp_zero_is_discord_epoch() {
        let ts = snowflake_timestamp(0).unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2015, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_event_texts() {
        assert_eq!(ClockEvent::In.command_text(), "/clockin");
        assert_eq!(ClockEvent::Out.command_text(), "/clockout");
        assert!(ClockEvent::Out.confirmation().contains("rest"));
    }

    #[tokio::test]
    async fn test_record_clock_event_inserts_one_row() -> Result<()> {
        let db = setup_test_db().await?;
        let record = test_record(ClockEvent::In);

        let row = record_clock_event(&db, record.clone()).await?;

        let rows = Message::find().all(&db).await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], row);
        assert_eq!(row.message_id, record.interaction_id.to_string());
        assert_eq!(row.guild_id, Some(TEST_GUILD_ID.to_string()));
        assert_eq!(row.channel_id, TEST_CHANNEL_ID.to_string());
        assert_eq!(row.author_id, TEST_AUTHOR_ID.to_string());
        assert_eq!(row.message_content, "/clockin");
        assert_eq!(row.time_sent, record.time_sent);
        Ok(())
    }

    #[tokio::test]
    async fn test_record_clock_event_without_guild() -> Result<()> {
        let db = setup_test_db().await?;
        let mut record = test_record(ClockEvent::Out);
        record.guild_id = None;

        let row = record_clock_event(&db, record).await?;
        assert!(row.guild_id.is_none());
        assert_eq!(row.message_content, "/clockout");
        Ok(())
    }

    #[tokio::test]
    async fn test_same_interaction_twice_is_not_deduplicated() -> Result<()> {
        let db = setup_test_db().await?;
        let record = test_record(ClockEvent::In);

        record_clock_event(&db, record.clone()).await?;
        record_clock_event(&db, record).await?;

        assert_eq!(Message::find().all(&db).await?.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_insert_leaves_no_row() -> Result<()> {
        let db = setup_test_db().await?;
        db.execute_unprepared(
            "CREATE TRIGGER reject_clock_rows BEFORE INSERT ON messages \
             BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
        )
        .await?;

        let result = record_clock_event(&db, test_record(ClockEvent::In)).await;
        assert!(matches!(result, Err(Error::Database(_))));

        db.execute_unprepared("DROP TRIGGER reject_clock_rows;").await?;
        assert!(Message::find().all(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_table_is_database_error() -> Result<()> {
        let db = sea_orm::Database::connect("sqlite::memory:").await?;

        let result = record_clock_event(&db, test_record(ClockEvent::Out)).await;
        assert!(matches!(result, Err(Error::Database(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_uncommitted_transaction_discards_row() -> Result<()> {
        let db = setup_test_db().await?;

        {
            let txn = db.begin().await?;
            insert_clock_row(&txn, test_record(ClockEvent::In)).await?;
            let failed = txn
                .execute_unprepared("INSERT INTO no_such_table VALUES (1);")
                .await;
            assert!(failed.is_err());
            // txn dropped here without commit
        }

        assert!(Message::find().all(&db).await?.is_empty());
        record_clock_event(&db, test_record(ClockEvent::Out)).await?;
        assert_eq!(Message::find().all(&db).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_last_inserted_empty() -> Result<()> {
        let db = setup_test_db().await?;
        assert!(get_last_inserted(&db).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_get_last_inserted_returns_newest() -> Result<()> {
        let db = setup_test_db().await?;
        record_clock_event(&db, test_record(ClockEvent::In)).await?;
        let mut out = test_record(ClockEvent::Out);
        out.interaction_id += 1;
        let newest = record_clock_event(&db, out).await?;

        let last = get_last_inserted(&db).await?.unwrap();
        assert_eq!(last, newest);
        assert_eq!(last.message_content, "/clockout");
        Ok(())
    }

    #[tokio::test]
    async fn test_format_record_summary() -> Result<()> {
        let db = setup_test_db().await?;
        let mut record = test_record(ClockEvent::In);
        record.guild_id = None;
        let row = record_clock_event(&db, record).await?;

        let summary = format_record_summary(&row);
        assert!(summary.starts_with(&format!("#{} `/clockin`", row.id)));
        assert!(summary.contains(&format!("<@{TEST_AUTHOR_ID}>")));
        assert!(summary.contains("(guild DM)"));
        Ok(())
    }
}
