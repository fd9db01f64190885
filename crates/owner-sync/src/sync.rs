//! End-to-end owner sync run.
//!
//! Opens the CSV, takes one connection, and runs the lookup and write
//! phases inside a single transaction. Any error drops the transaction,
//! which rolls back every write made so far.

use std::io::Read;

use anyhow::Context;
use kinetic_core::order_csv::OrderCsvReader;
use kinetic_core::owner_map::{apply_assignments, build_owner_map, SyncSummary};
use kinetic_db::OwnerSyncTx;
use sqlx::{Connection, PgConnection};

use crate::config::OwnerSyncConfig;

/// Run a full sync as described by `config`.
pub async fn run(config: &OwnerSyncConfig) -> anyhow::Result<SyncSummary> {
    let mut reader = OrderCsvReader::open(&config.csv_path)
        .with_context(|| format!("Failed to open {}", config.csv_path.display()))?;

    let mut conn = kinetic_db::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connection established");

    kinetic_db::health_check(&mut conn)
        .await
        .context("Database health check failed")?;

    let summary = sync_owners(&mut conn, &mut reader, config.dry_run).await?;

    conn.close()
        .await
        .context("Failed to close database connection")?;

    Ok(summary)
}

/// Run both phases on an already-open connection.
///
/// Commits at the end unless `dry_run` is set, in which case the
/// transaction is rolled back after every write has been issued.
pub async fn sync_owners<R: Read>(
    conn: &mut PgConnection,
    reader: &mut OrderCsvReader<R>,
    dry_run: bool,
) -> anyhow::Result<SyncSummary> {
    let mut tx = OwnerSyncTx::begin(conn)
        .await
        .context("Failed to begin transaction")?;

    let built = build_owner_map(reader.records(), &mut tx)
        .await
        .context("Failed to build customer owner map")?;

    let applied = apply_assignments(&built.map, &mut tx)
        .await
        .context("Failed to apply owner assignments")?;

    if dry_run {
        tx.rollback()
            .await
            .context("Failed to roll back dry run")?;
    } else {
        tx.commit().await.context("Failed to commit owner updates")?;
    }

    let summary = SyncSummary::new(&built, &applied, !dry_run);

    if summary.committed {
        tracing::info!(
            rows_read = summary.rows_read,
            orders_missing = summary.orders_missing,
            rows_affected = summary.rows_affected,
            "Updated {} customers with their correct owners",
            summary.customers_updated,
        );
    } else {
        tracing::warn!(
            rows_read = summary.rows_read,
            orders_missing = summary.orders_missing,
            rows_affected = summary.rows_affected,
            "Dry run: {} customers would be updated, changes rolled back",
            summary.customers_updated,
        );
    }

    Ok(summary)
}
