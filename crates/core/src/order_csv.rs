//! Reader for the order-owner CSV export.
//!
//! The export has a header row with at least the `Ordernumber` and
//! `Owner` columns. Any other columns are ignored, as are trailing
//! fields past the header width (spreadsheet exports often end rows with
//! a stray comma). Values are taken verbatim, whitespace included, so
//! the owner written is exactly the text in the file. Rows are yielded
//! lazily so a large export is never held in memory.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::CoreError;

/// Header of the order number column.
pub const ORDER_NUMBER_COLUMN: &str = "Ordernumber";

/// Header of the owner column.
pub const OWNER_COLUMN: &str = "Owner";

/// A single `(order number, owner)` row from the export.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderRecord {
    #[serde(rename = "Ordernumber")]
    pub order_number: String,
    #[serde(rename = "Owner")]
    pub owner: String,
}

impl OrderRecord {
    pub fn new(order_number: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            order_number: order_number.into(),
            owner: owner.into(),
        }
    }
}

/// Streaming reader over an order-owner CSV.
#[derive(Debug)]
pub struct OrderCsvReader<R> {
    inner: csv::Reader<R>,
}

impl OrderCsvReader<File> {
    /// Open the CSV at `path` and validate its header.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }
}

impl<R: Read> OrderCsvReader<R> {
    /// Wrap any reader. The header row is read and validated eagerly so a
    /// malformed export fails before any database work starts.
    pub fn from_reader(reader: R) -> Result<Self, CoreError> {
        let mut inner = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = inner.headers()?;
        for required in [ORDER_NUMBER_COLUMN, OWNER_COLUMN] {
            if !headers.iter().any(|h| h == required) {
                return Err(CoreError::MissingColumn(required));
            }
        }

        Ok(Self { inner })
    }

    /// Iterate the data rows in file order.
    pub fn records(&mut self) -> impl Iterator<Item = Result<OrderRecord, CoreError>> + '_ {
        self.inner
            .deserialize::<OrderRecord>()
            .map(|row| row.map_err(CoreError::from))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
