//! # Storage Error Types
//!
//! Error types for blob storage and the services above it.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the blob key / path context           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  UI shell maps each variant to a user-facing notification              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;
use warung_core::{CoreError, ValidationError};

/// Storage and service errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity not found in its collection.
    ///
    /// ## When This Occurs
    /// - Updating or deleting a barcode that was never registered
    #[error("{entity} not found: {key}")]
    NotFound { entity: String, key: String },

    /// Unique key violation.
    ///
    /// ## When This Occurs
    /// - Inserting a product whose barcode already exists
    #[error("Duplicate {field}: '{value}' already exists")]
    Duplicate { field: String, value: String },

    /// A blob exists but is not valid JSON for its collection.
    ///
    /// ## When This Occurs
    /// - Blob file was hand-edited or truncated outside the app
    #[error("Corrupt blob '{key}': {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// File system failure.
    #[error("I/O failure ({context}): {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Business rule violation (wraps CoreError).
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and key.
    pub fn not_found(entity: impl Into<String>, key: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            key: key.into(),
        }
    }

    /// Creates a Duplicate error.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        StoreError::Duplicate {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Wraps an I/O error with a short context string.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        StoreError::Io {
            context: context.into(),
            source,
        }
    }
}

/// Field validation failures arrive through the core error chain.
impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::Core(CoreError::Validation(err))
    }
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::not_found("Product", "BG001");
        assert_eq!(err.to_string(), "Product not found: BG001");

        let err = StoreError::duplicate("barcode", "01100005123");
        assert_eq!(
            err.to_string(),
            "Duplicate barcode: '01100005123' already exists"
        );
    }

    #[test]
    fn test_core_error_is_transparent() {
        let err: StoreError = CoreError::EmptyReport.into();
        assert_eq!(err.to_string(), "No sales to export");
    }

    #[test]
    fn test_validation_error_wraps_into_core() {
        let err: StoreError = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        }
        .into();
        assert!(matches!(err, StoreError::Core(CoreError::Validation(_))));
    }
}
