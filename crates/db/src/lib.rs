//! PostgreSQL access for the customer owner sync.
//!
//! The sync holds one exclusive connection for its whole run, so this
//! crate works in terms of `PgConnection` rather than a pool.

use sqlx::{Connection, PgConnection};

pub mod models;
pub mod owner_sync;
pub mod repositories;

pub use owner_sync::OwnerSyncTx;

/// Open a single connection from a database URL.
pub async fn connect(database_url: &str) -> Result<PgConnection, sqlx::Error> {
    PgConnection::connect(database_url).await
}

/// Verify the connection is usable.
pub async fn health_check(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(conn).await?;
    Ok(())
}
