//! # Warung Store
//!
//! Persistence and workflow layer of the Warung POS backend: JSON blob
//! storage, repositories over the three collections, the sale recorder,
//! the CSV export service and the change poller.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           warung-store                                  │
//! │                                                                         │
//! │   SaleRecorder        Exporter           StorePoller                    │
//! │   (scan → sale)       (filter → CSV)     (watch channel)                │
//! │        │                   │                  │                         │
//! │        ▼                   ▼                  │                         │
//! │  ┌──────────────────────────────────┐         │                         │
//! │  │            Store facade          │         │                         │
//! │  │  products() / sales() / exports()│         │                         │
//! │  └──────────────┬───────────────────┘         │                         │
//! │                 ▼                             ▼                         │
//! │  ┌──────────────────────────────────────────────────┐                   │
//! │  │            BlobStore (trait)                     │                   │
//! │  │   FileStore: <dir>/items.json, sales.json, ...   │                   │
//! │  │   MemoryStore: tests                             │                   │
//! │  └──────────────────────────────────────────────────┘                   │
//! │                                                                         │
//! │   Domain types, barcode codec and report rendering live in              │
//! │   `warung-core`; this crate only adds I/O and orchestration.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod blob;
pub mod config;
pub mod error;
pub mod export;
pub mod recorder;
pub mod repository;
pub mod watcher;

pub use blob::{BlobStore, FileStore, MemoryStore, EXPORT_HISTORY_KEY, ITEMS_KEY, SALES_KEY};
pub use config::{ConfigError, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use export::{ExportOutcome, Exporter};
pub use recorder::SaleRecorder;
pub use repository::{
    ExportHistoryRepository, ProductBatch, ProductRepository, ProductUpdate, SaleRepository, Store,
};
pub use watcher::StorePoller;
