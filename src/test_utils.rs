//! Shared test utilities.
//!
//! Provides an in-memory database built through the production table-creation
//! path, plus a clock record with fixed IDs.

use crate::{
    core::clock::{ClockEvent, ClockRecord},
    errors::Result,
};
use chrono::{TimeZone, Utc};
use sea_orm::DatabaseConnection;

/// Guild ID used by [`test_record`]
pub const TEST_GUILD_ID: u64 = 1_100_000_000_000_000_001;
/// Channel ID used by [`test_record`]
pub const TEST_CHANNEL_ID: u64 = 1_172_648_319_940_558_970;
/// Author ID used by [`test_record`]
pub const TEST_AUTHOR_ID: u64 = 300_000_000_000_000_003;

/// Creates an in-memory `SQLite` database with all tables initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// A clock record with the test IDs and a whole-second timestamp.
///
/// # Panics
/// Never in practice; the fixed date is valid.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn test_record(event: ClockEvent) -> ClockRecord {
    ClockRecord {
        interaction_id: 1_200_000_000_000_000_000,
        guild_id: Some(TEST_GUILD_ID),
        channel_id: TEST_CHANNEL_ID,
        author_id: TEST_AUTHOR_ID,
        event,
        time_sent: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
    }
}
