//! # Blob Storage
//!
//! Key-value text blob storage backing every collection.
//!
//! ## Storage Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Blob Storage Model                                │
//! │                                                                         │
//! │  Fixed string keys, one JSON array per key:                            │
//! │                                                                         │
//! │    "items"           → [ {Product}, {Product}, ... ]                   │
//! │    "sales"           → [ {Sale}, {Sale}, ... ]        (newest first)   │
//! │    "export_history"  → [ {ExportRecord}, ... ]        (capped at 10)   │
//! │                                                                         │
//! │  FileStore maps each key to <data_dir>/<key>.json and writes through   │
//! │  a temp file + rename, so a crash mid-write never leaves a torn blob.  │
//! │                                                                         │
//! │  Every mutation is a whole-collection read-modify-write; there is no   │
//! │  partial update and no locking (single-writer by design).              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::fs;
use std::hash::{Hash, Hasher};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Collection Keys
// =============================================================================

/// Key of the product collection blob.
pub const ITEMS_KEY: &str = "items";

/// Key of the sale log blob.
pub const SALES_KEY: &str = "sales";

/// Key of the export history blob.
pub const EXPORT_HISTORY_KEY: &str = "export_history";

/// All collection keys, in fingerprint order.
pub const COLLECTION_KEYS: [&str; 3] = [ITEMS_KEY, SALES_KEY, EXPORT_HISTORY_KEY];

// =============================================================================
// BlobStore Trait
// =============================================================================

/// Synchronous key-value text blob storage.
///
/// Implementations must tolerate concurrent readers in other processes but
/// may assume a single writer. `fingerprint` exists for the external-change
/// poller.
pub trait BlobStore: Send + Sync {
    /// Reads the blob under `key`. `Ok(None)` when the key was never written.
    fn read(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes the blob under `key`, replacing any previous value atomically.
    fn write(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Hash over every collection blob, for cheap change detection.
    fn fingerprint(&self) -> StoreResult<u64> {
        let mut hasher = DefaultHasher::new();
        for key in COLLECTION_KEYS {
            self.read(key)?.hash(&mut hasher);
        }
        Ok(hasher.finish())
    }
}

// =============================================================================
// Collection Helpers
// =============================================================================

/// Loads a collection blob as a typed vector.
///
/// A missing key reads as an empty collection - first launch has no blobs
/// at all and everything must still work.
pub fn load_collection<T: DeserializeOwned>(store: &dyn BlobStore, key: &str) -> StoreResult<Vec<T>> {
    match store.read(key)? {
        Some(text) => serde_json::from_str(&text).map_err(|source| StoreError::Corrupt {
            key: key.to_string(),
            source,
        }),
        None => Ok(Vec::new()),
    }
}

/// Serializes and writes a collection blob.
pub fn save_collection<T: Serialize>(
    store: &dyn BlobStore,
    key: &str,
    items: &[T],
) -> StoreResult<()> {
    let text = serde_json::to_string(items).map_err(|source| StoreError::Corrupt {
        key: key.to_string(),
        source,
    })?;
    store.write(key, &text)
}

// =============================================================================
// FileStore
// =============================================================================

/// Blob store over a local directory, one `<key>.json` file per key.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens (and creates if needed) the data directory.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .map_err(|source| StoreError::io(format!("create data dir {}", root.display()), source))?;
        debug!(root = %root.display(), "Opened file store");
        Ok(FileStore { root })
    }

    /// Directory holding the blob files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl BlobStore for FileStore {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.blob_path(key);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::io(format!("read {}", path.display()), source)),
        }
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.blob_path(key);
        // Write-then-rename keeps the old blob intact if we crash mid-write.
        let tmp = self.root.join(format!("{key}.json.tmp"));
        fs::write(&tmp, value)
            .map_err(|source| StoreError::io(format!("write {}", tmp.display()), source))?;
        fs::rename(&tmp, &path)
            .map_err(|source| StoreError::io(format!("rename {}", path.display()), source))?;
        debug!(key = %key, bytes = value.len(), "Blob written");
        Ok(())
    }
}

// =============================================================================
// MemoryStore
// =============================================================================

/// In-memory blob store for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl BlobStore for MemoryStore {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        let blobs = self.blobs.lock().unwrap_or_else(|e| e.into_inner());
        Ok(blobs.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut blobs = self.blobs.lock().unwrap_or_else(|e| e.into_inner());
        blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
