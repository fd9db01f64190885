//! Transactional store adapter for the owner sync.
//!
//! [`OwnerSyncTx`] runs every lookup and every owner write inside one
//! Postgres transaction. Nothing is visible to other sessions until
//! [`OwnerSyncTx::commit`]; dropping it (including on an early `?` return)
//! rolls everything back.

use kinetic_core::owner_map::{AssignmentWriter, OrderEmailLookup};
use sqlx::{Connection, PgConnection, Postgres, Transaction};

use crate::repositories::{CustomerRepo, ShopifyOrderRepo};

pub struct OwnerSyncTx<'c> {
    tx: Transaction<'c, Postgres>,
}

impl<'c> OwnerSyncTx<'c> {
    /// Begin a transaction on `conn`.
    pub async fn begin(conn: &'c mut PgConnection) -> Result<Self, sqlx::Error> {
        let tx = conn.begin().await?;
        Ok(Self { tx })
    }

    pub async fn commit(self) -> Result<(), sqlx::Error> {
        self.tx.commit().await?;
        tracing::debug!("Owner sync transaction committed");
        Ok(())
    }

    pub async fn rollback(self) -> Result<(), sqlx::Error> {
        self.tx.rollback().await?;
        tracing::debug!("Owner sync transaction rolled back");
        Ok(())
    }
}

impl OrderEmailLookup for OwnerSyncTx<'_> {
    type Error = sqlx::Error;

    async fn email_for_order(&mut self, order_number: &str) -> Result<Option<String>, sqlx::Error> {
        ShopifyOrderRepo::find_customer_email(&mut self.tx, order_number).await
    }
}

impl AssignmentWriter for OwnerSyncTx<'_> {
    type Error = sqlx::Error;

    async fn assign_owner(&mut self, customer_email: &str, owner: &str) -> Result<u64, sqlx::Error> {
        CustomerRepo::set_assigned_to(&mut self.tx, customer_email, owner).await
    }
}
