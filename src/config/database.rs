//! Database configuration module.
//!
//! Handles connecting to the database named by `DATABASE_URL` and creating the
//! `messages` table from the entity definition with `SeaORM`'s
//! `Schema::create_table_from_entity`, so the schema always matches the model.

use crate::entities::Message;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{debug, info, instrument};

/// Fallback when `DATABASE_URL` is not set. `mode=rwc` creates the file on first run.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/clock_bot.sqlite?mode=rwc";

/// Gets the database URL from the environment or returns the default `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Opens the connection pool. Any backend `SeaORM` was built with is accepted
/// (`SQLite` and `MySQL` here).
#[instrument(skip(database_url))]
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Connecting to database");
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates the `messages` table if it does not exist yet.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut messages_table = schema.create_table_from_entity(Message);
    messages_table.if_not_exists();

    db.execute(builder.build(&messages_table)).await?;
    info!("Database tables ensured.");

    Ok(())
}
