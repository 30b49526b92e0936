//! # Repositories
//!
//! Repository implementations over the blob store, plus the [`Store`]
//! facade that hands them out.
//!
//! ## Why Repositories?
//! The reference implementation kept global mutable arrays mirroring the
//! persisted collections, with ad-hoc load/save scattered across screens.
//! Here every collection has exactly one owner that performs the
//! whole-collection read-modify-write around a single source of truth.

pub mod export;
pub mod product;
pub mod sale;

use std::sync::Arc;

use crate::blob::{BlobStore, FileStore, MemoryStore};
use crate::error::StoreResult;

pub use export::ExportHistoryRepository;
pub use product::{ProductBatch, ProductRepository, ProductUpdate};
pub use sale::SaleRepository;

// =============================================================================
// Store Facade
// =============================================================================

/// Handle to the persistence layer.
///
/// Cheap to clone; all clones share one blob backend.
///
/// ## Usage
/// ```rust,ignore
/// let store = Store::open("./data")?;
///
/// let products = store.products().list()?;
/// store.sales().append(sale)?;
/// ```
#[derive(Clone)]
pub struct Store {
    blob: Arc<dyn BlobStore>,
}

impl Store {
    /// Creates a store over an arbitrary blob backend.
    pub fn new(blob: Arc<dyn BlobStore>) -> Self {
        Store { blob }
    }

    /// Opens a file-backed store in `data_dir` (created if missing).
    pub fn open(data_dir: impl Into<std::path::PathBuf>) -> StoreResult<Self> {
        Ok(Store::new(Arc::new(FileStore::open(data_dir)?)))
    }

    /// Creates an in-memory store (tests, throwaway sessions).
    pub fn in_memory() -> Self {
        Store::new(Arc::new(MemoryStore::new()))
    }

    /// Product collection operations.
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(Arc::clone(&self.blob))
    }

    /// Sale log operations.
    pub fn sales(&self) -> SaleRepository {
        SaleRepository::new(Arc::clone(&self.blob))
    }

    /// Export history operations.
    pub fn exports(&self) -> ExportHistoryRepository {
        ExportHistoryRepository::new(Arc::clone(&self.blob))
    }

    /// The underlying blob backend (for the change poller).
    pub fn blob(&self) -> Arc<dyn BlobStore> {
        Arc::clone(&self.blob)
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}
