//! # Validation Module
//!
//! Input validation for Warung POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: UI shell (out of this tree)                                  │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - field validation                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Business rules (recorder checks stock, repositories          │
//! │           reject duplicate barcodes)                                   │
//! │                                                                         │
//! │  Defense in depth: each layer catches different mistakes               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a barcode string.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 32 characters
/// - Alphanumeric only: generated codes are all digits, but manually
///   entered inventory keys like "BG001" are also accepted
pub fn validate_barcode(barcode: &str) -> ValidationResult<()> {
    let barcode = barcode.trim();

    if barcode.is_empty() {
        return Err(ValidationError::Required {
            field: "barcode".to_string(),
        });
    }

    if barcode.len() > 32 {
        return Err(ValidationError::TooLong {
            field: "barcode".to_string(),
            max: 32,
        });
    }

    if !barcode.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidFormat {
            field: "barcode".to_string(),
            reason: "must contain only letters and digits".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity (units sold or units in a batch).
///
/// ## Rules
/// - Must be positive (> 0)
///
/// There is deliberately no upper bound here: the only ceiling at sale
/// time is the product's stock, checked by the recorder.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in rupiah.
///
/// ## Rules
/// - Must be non-negative (zero allowed for giveaway items)
pub fn validate_price(rupiah: i64) -> ValidationResult<()> {
    if rupiah < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a stock count.
///
/// ## Rules
/// - Must be non-negative
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a batch weight in grams.
///
/// ## Rules
/// - Must be between 1 and 999 - the barcode weight segment is three digits
pub fn validate_weight(grams: i64) -> ValidationResult<()> {
    if grams < 1 || grams > 999 {
        return Err(ValidationError::OutOfRange {
            field: "weight".to_string(),
            min: 1,
            max: 999,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Bawang Goreng Original 100g").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_barcode() {
        assert!(validate_barcode("01100005123").is_ok());
        assert!(validate_barcode("BG001").is_ok());
        assert!(validate_barcode("").is_err());
        assert!(validate_barcode("has space").is_err());
        assert!(validate_barcode("bar-code").is_err());
        assert!(validate_barcode(&"9".repeat(40)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());
        // No upper bound; only stock limits a sale.
        assert!(validate_quantity(1_500).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-5).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0).is_ok());
        assert!(validate_price(15_000).is_ok());
        assert!(validate_price(-100).is_err());
    }

    #[test]
    fn test_validate_stock() {
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(150).is_ok());
        assert!(validate_stock(-1).is_err());
    }

    #[test]
    fn test_validate_weight() {
        assert!(validate_weight(100).is_ok());
        assert!(validate_weight(1).is_ok());
        assert!(validate_weight(999).is_ok());
        assert!(validate_weight(0).is_err());
        assert!(validate_weight(1000).is_err());
    }
}
