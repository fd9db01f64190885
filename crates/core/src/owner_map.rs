//! Customer owner mapping: build an email -> owner map from order rows,
//! then write each owner onto the matching customer.
//!
//! Both phases talk to the store through traits so they can run against a
//! database transaction in production and in-memory fakes in tests.
//!
//! Semantics:
//! - An order number that does not resolve to an email is skipped without
//!   error. It is counted but never surfaces as an info line.
//! - When several orders resolve to the same email, the owner from the
//!   later row wins.
//! - One write is issued per distinct email, in first-seen order. Writes
//!   overwrite, so applying the same map twice is a no-op the second time.

use std::future::Future;

use indexmap::IndexMap;

use crate::error::CoreError;
use crate::order_csv::OrderRecord;

// ---------------------------------------------------------------------------
// Store traits
// ---------------------------------------------------------------------------

/// Resolves an order number to the email of the customer who placed it.
pub trait OrderEmailLookup: Send {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns `None` when no order with this number exists.
    fn email_for_order(
        &mut self,
        order_number: &str,
    ) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send;
}

/// Writes an owner onto the customer with the given email.
pub trait AssignmentWriter: Send {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the number of customer rows the write matched. Zero is not
    /// an error.
    fn assign_owner(
        &mut self,
        customer_email: &str,
        owner: &str,
    ) -> impl Future<Output = Result<u64, Self::Error>> + Send;
}

// ---------------------------------------------------------------------------
// CustomerOwnerMap
// ---------------------------------------------------------------------------

/// Email -> owner map with last-write-wins semantics.
///
/// Iteration follows the order in which each email was first inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerOwnerMap {
    entries: IndexMap<String, String>,
}

impl CustomerOwnerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the owner for `customer_email`, returning the owner it replaced.
    pub fn assign(
        &mut self,
        customer_email: impl Into<String>,
        owner: impl Into<String>,
    ) -> Option<String> {
        self.entries.insert(customer_email.into(), owner.into())
    }

    pub fn owner_for(&self, customer_email: &str) -> Option<&str> {
        self.entries.get(customer_email).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(email, owner)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(e, o)| (e.as_str(), o.as_str()))
    }
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

/// Result of the lookup phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapBuildReport {
    pub map: CustomerOwnerMap,
    pub rows_read: usize,
    pub orders_resolved: usize,
    pub orders_missing: usize,
}

/// Result of the write phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Number of update statements issued (one per distinct email).
    pub customers_updated: usize,
    /// Total customer rows matched by those updates.
    pub rows_affected: u64,
}

/// Counters reported at the end of a sync run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncSummary {
    pub rows_read: usize,
    pub orders_resolved: usize,
    pub orders_missing: usize,
    pub customers_updated: usize,
    pub rows_affected: u64,
    /// `false` when the run was rolled back (dry run).
    pub committed: bool,
}

impl SyncSummary {
    pub fn new(build: &MapBuildReport, apply: &ApplyReport, committed: bool) -> Self {
        Self {
            rows_read: build.rows_read,
            orders_resolved: build.orders_resolved,
            orders_missing: build.orders_missing,
            customers_updated: apply.customers_updated,
            rows_affected: apply.rows_affected,
            committed,
        }
    }
}

// ---------------------------------------------------------------------------
// Phases
// ---------------------------------------------------------------------------

/// Look up the customer email for every record and fold the results into
/// a [`CustomerOwnerMap`].
///
/// Records are consumed in order; the first malformed record or failed
/// lookup aborts the build.
pub async fn build_owner_map<L, I>(records: I, lookup: &mut L) -> Result<MapBuildReport, CoreError>
where
    L: OrderEmailLookup,
    I: IntoIterator<Item = Result<OrderRecord, CoreError>>,
{
    let mut report = MapBuildReport::default();

    for record in records {
        let record = record?;
        report.rows_read += 1;

        let email = if record.order_number.is_empty() {
            None
        } else {
            lookup
                .email_for_order(&record.order_number)
                .await
                .map_err(CoreError::store)?
        };

        let Some(email) = email else {
            tracing::debug!(order_number = %record.order_number, "Order not found, skipping");
            report.orders_missing += 1;
            continue;
        };

        tracing::info!(
            order_number = %record.order_number,
            customer_email = %email,
            owner = %record.owner,
            "Order {}: {} -> {}",
            record.order_number,
            email,
            record.owner,
        );
        report.orders_resolved += 1;
        report.map.assign(email, record.owner);
    }

    Ok(report)
}

/// Issue one owner write per map entry, in map order.
pub async fn apply_assignments<W>(
    map: &CustomerOwnerMap,
    writer: &mut W,
) -> Result<ApplyReport, CoreError>
where
    W: AssignmentWriter,
{
    let mut report = ApplyReport::default();

    for (email, owner) in map.iter() {
        let matched = writer
            .assign_owner(email, owner)
            .await
            .map_err(CoreError::store)?;

        tracing::info!(
            customer_email = %email,
            owner = %owner,
            rows_affected = matched,
            "Updated customer {email} to owner {owner}",
        );
        report.customers_updated += 1;
        report.rows_affected += matched;
    }

    Ok(report)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
