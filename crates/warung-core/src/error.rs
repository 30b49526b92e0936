//! # Error Types
//!
//! Domain-specific error types for warung-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  warung-core errors (this file)                                        │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  warung-store errors (separate crate)                                  │
//! │  └── StoreError       - Blob storage failures                          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → user notification    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (barcode, quantities, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations. Callers translate them
/// into user-facing notifications; every one of them is recoverable by
/// re-attempting the user action.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product carries the scanned barcode.
    ///
    /// ## When This Occurs
    /// - Barcode was never registered in inventory
    /// - Product was deleted
    /// - Label belongs to a superseded batch code
    #[error("Product not found for barcode: {0}")]
    ProductNotFound(String),

    /// Requested sale quantity exceeds current stock.
    ///
    /// ## User Workflow
    /// ```text
    /// Scan barcode → product found, stock = 3
    ///      │
    ///      ▼
    /// Cashier enters quantity 5
    ///      │
    ///      ▼
    /// OutOfStock { name: "Bawang Goreng Original 100g", available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// UI shows: "Jumlah penjualan melebihi stok tersedia"
    /// ```
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    OutOfStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// A report export was requested over zero sale records.
    ///
    /// The original workflow refuses to produce a file here and tells the
    /// user there is nothing to export.
    #[error("No sales to export")]
    EmptyReport,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., barcode with non-alphanumeric characters).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., duplicate barcode).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::OutOfStock {
            name: "Bawang Goreng Original 100g".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Bawang Goreng Original 100g: available 3, requested 5"
        );

        let err = CoreError::ProductNotFound("01100005123".to_string());
        assert_eq!(err.to_string(), "Product not found for barcode: 01100005123");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "barcode".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
