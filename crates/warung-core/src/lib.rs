//! # warung-core: Pure Business Logic for Warung POS
//!
//! This crate is the **heart** of Warung POS. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Warung POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    UI Shell (out of tree)                       │   │
//! │  │   Inventory UI ──► Generator UI ──► Scanner UI ──► Report UI   │   │
//! │  │   (barcode rendering + camera decode via external library)     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ warung-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  barcode  │  │  report   │  │ validation│  │   │
//! │  │   │  Product  │  │   codec   │  │  filter   │  │   rules   │  │   │
//! │  │   │   Sale    │  │ VVWWWDDD  │  │   CSV     │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO BLOB STORE • NO NETWORK • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 warung-store (Persistence Layer)                │   │
//! │  │          JSON blob storage, repositories, sale recorder         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Sale, TransactionType, ExportRecord)
//! - [`money`] - Integer rupiah Money type (no floating point!)
//! - [`barcode`] - Variant/weight/date barcode codec
//! - [`report`] - Sale filtering, summary figures and CSV serialization
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input =
//!    same output (the single exception is [`barcode::generate`], which
//!    draws a random disambiguator suffix)
//! 2. **No I/O**: Blob store, network and file system access is FORBIDDEN here
//! 3. **Integer Money**: All amounts are whole rupiah (i64), never floats
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod barcode;
pub mod error;
pub mod money;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use warung_core::Money` instead of
// `use warung_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use report::{ReportFilter, ReportSummary};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Stock counts below this are flagged as "low" in display badges.
pub const LOW_STOCK_THRESHOLD: i64 = 50;
