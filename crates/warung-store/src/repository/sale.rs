//! # Sale Repository
//!
//! The append-only sale log, newest first. Records are immutable once
//! written; the only other mutation is the explicit reset (clear), which
//! the export service guards with an auto-export.

use std::sync::Arc;

use tracing::debug;

use crate::blob::{load_collection, save_collection, BlobStore, SALES_KEY};
use crate::error::StoreResult;
use warung_core::Sale;

/// Repository for the sale log.
#[derive(Clone)]
pub struct SaleRepository {
    blob: Arc<dyn BlobStore>,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(blob: Arc<dyn BlobStore>) -> Self {
        SaleRepository { blob }
    }

    /// Lists the full log, newest first.
    pub fn list(&self) -> StoreResult<Vec<Sale>> {
        load_collection(self.blob.as_ref(), SALES_KEY)
    }

    /// Appends a sale at the head of the log.
    pub fn append(&self, sale: Sale) -> StoreResult<()> {
        let mut sales = self.list()?;
        debug!(id = %sale.id, barcode = %sale.barcode, quantity = sale.quantity, "Appending sale");
        sales.insert(0, sale);
        save_collection(self.blob.as_ref(), SALES_KEY, &sales)
    }

    /// Number of recorded sales.
    pub fn count(&self) -> StoreResult<usize> {
        Ok(self.list()?.len())
    }

    /// Clears the whole log. Callers are expected to export first; see
    /// `Exporter::reset_sales`.
    pub fn clear(&self) -> StoreResult<()> {
        debug!("Clearing sale log");
        save_collection::<Sale>(self.blob.as_ref(), SALES_KEY, &[])
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
