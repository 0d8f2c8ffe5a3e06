//! Database module for SQLite persistence.
//!
//! SQLite is the source of truth for all member data.

mod repository;

pub use repository::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

/// Default pool size when the caller has no preference.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Initialize the database connection pool and run migrations.
pub async fn init_database(
    db_path: &Path,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Run database migrations.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // AUTOINCREMENT keeps ids of deleted members from being handed out again
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS members (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            firstname TEXT NOT NULL CHECK (length(firstname) BETWEEN 1 AND 255),
            lastname TEXT NOT NULL CHECK (length(lastname) BETWEEN 1 AND 255),
            is_active INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
