//! # Export History Repository
//!
//! Append-only history of report exports, newest first, capped at the
//! most recent [`EXPORT_HISTORY_LIMIT`] entries.

use std::sync::Arc;

use tracing::debug;

use crate::blob::{load_collection, save_collection, BlobStore, EXPORT_HISTORY_KEY};
use crate::error::StoreResult;
use warung_core::ExportRecord;

/// Only this many export records are retained.
pub const EXPORT_HISTORY_LIMIT: usize = 10;

/// Repository for the export history.
#[derive(Clone)]
pub struct ExportHistoryRepository {
    blob: Arc<dyn BlobStore>,
}

impl ExportHistoryRepository {
    /// Creates a new ExportHistoryRepository.
    pub fn new(blob: Arc<dyn BlobStore>) -> Self {
        ExportHistoryRepository { blob }
    }

    /// Lists the retained history, newest first.
    pub fn list(&self) -> StoreResult<Vec<ExportRecord>> {
        load_collection(self.blob.as_ref(), EXPORT_HISTORY_KEY)
    }

    /// Records an export at the head of the history, dropping anything
    /// beyond the cap.
    pub fn record(&self, record: ExportRecord) -> StoreResult<()> {
        let mut history = self.list()?;
        debug!(filename = %record.filename, "Recording export");
        history.insert(0, record);
        history.truncate(EXPORT_HISTORY_LIMIT);
        save_collection(self.blob.as_ref(), EXPORT_HISTORY_KEY, &history)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
