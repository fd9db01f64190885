//! `kinetic-owner-sync` -- assigns customer owners from an order export.
//!
//! Reads `(Ordernumber, Owner)` rows from a CSV, resolves each order to
//! its customer email, and writes the owner onto the matching customer.
//! All writes land in one transaction.
//!
//! # Environment variables
//!
//! | Variable             | Required | Default              | Description                        |
//! |----------------------|----------|----------------------|------------------------------------|
//! | `DATABASE_URL`       | no       | local `kinetic_app`  | Postgres connection string         |
//! | `OWNER_CSV_PATH`     | no       | `shopifyowners.csv`  | Order-owner CSV export             |
//! | `OWNER_SYNC_DRY_RUN` | no       | `false`              | Roll back instead of committing    |

use anyhow::Context;
use kinetic_owner_sync::config::OwnerSyncConfig;
use kinetic_owner_sync::sync;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "kinetic_owner_sync=info,kinetic_core=info,kinetic_db=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = OwnerSyncConfig::from_env().context("Invalid configuration")?;

    tracing::info!(
        csv_path = %config.csv_path.display(),
        dry_run = config.dry_run,
        "Starting owner sync",
    );

    sync::run(&config).await?;
    Ok(())
}
