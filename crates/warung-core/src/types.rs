//! # Domain Types
//!
//! Core domain types used throughout Warung POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      Sale       │   │  ExportRecord   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  barcode (key)  │   │  id (UUID)      │   │  filename       │       │
//! │  │  name           │   │  barcode        │   │  exported_at    │       │
//! │  │  stock          │   │  quantity       │   │  totals         │       │
//! │  │  price          │   │  price          │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │ TransactionType │   │   StockLevel    │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  Cash           │   │  Empty          │                             │
//! │  │  Transfer       │   │  Low (< 50)     │                             │
//! │  │  Qris           │   │  Available      │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! All persisted types serialize with camelCase keys so the JSON collection
//! blobs stay readable by the existing store front-end.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;
use crate::LOW_STOCK_THRESHOLD;

// =============================================================================
// Product
// =============================================================================

/// A sellable product, uniquely identified by its barcode.
///
/// Mutated by inventory edits and by sale decrements; never auto-deleted
/// when stock reaches zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Display name shown to the cashier and in reports.
    pub name: String,

    /// Barcode string - the unique business key.
    pub barcode: String,

    /// Free-form description (price/production/expiry notes on labels).
    #[serde(default)]
    pub description: Option<String>,

    /// Current stock level in units. Non-negative.
    pub stock: i64,

    /// Unit price in rupiah. Older records may omit it, which reads as zero.
    #[serde(default)]
    pub price: Money,
}

impl Product {
    /// Returns the unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Checks whether a sale of `quantity` units can be fulfilled.
    pub fn can_sell(&self, quantity: i64) -> bool {
        quantity > 0 && quantity <= self.stock
    }

    /// Classifies the stock level for display badges.
    pub fn stock_level(&self) -> StockLevel {
        if self.stock == 0 {
            StockLevel::Empty
        } else if self.stock < LOW_STOCK_THRESHOLD {
            StockLevel::Low
        } else {
            StockLevel::Available
        }
    }
}

// =============================================================================
// Stock Level
// =============================================================================

/// Display classification of a product's stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    /// No sellable units; sales are refused.
    Empty,
    /// Below the low-stock threshold.
    Low,
    /// Plenty in stock.
    Available,
}

// =============================================================================
// Transaction Type
// =============================================================================

/// Payment method classification for a sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Physical cash payment.
    Cash,
    /// Bank transfer.
    Transfer,
    /// QRIS standardized QR payment.
    Qris,
}

impl TransactionType {
    /// Human-readable label used in tables and CSV cells.
    pub const fn label(&self) -> &'static str {
        match self {
            TransactionType::Cash => "Cash",
            TransactionType::Transfer => "Transfer",
            TransactionType::Qris => "QRIS",
        }
    }

    /// Parses loose user input; anything unrecognized falls back to cash,
    /// matching how the report screen labels unknown types.
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "transfer" => TransactionType::Transfer,
            "qris" => TransactionType::Qris,
            _ => TransactionType::Cash,
        }
    }
}

impl Default for TransactionType {
    fn default() -> Self {
        TransactionType::Cash
    }
}

// =============================================================================
// Sale
// =============================================================================

/// An immutable record of one completed sale.
///
/// Sales form an append-only log, newest first. Product name and unit price
/// are snapshotted at sale time so later inventory edits don't rewrite
/// history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    /// Unique identifier (UUID v4). Generated records always carry one;
    /// rows imported from older blobs may not.
    #[serde(default)]
    pub id: String,

    /// Product name at time of sale (frozen).
    pub product_name: String,

    /// Barcode that was scanned.
    pub barcode: String,

    /// Units sold. Positive.
    pub quantity: i64,

    /// Unit price in rupiah at time of sale (frozen).
    #[serde(default)]
    pub price: Money,

    /// Payment method.
    #[serde(default)]
    pub transaction_type: TransactionType,

    /// When the sale was recorded. Kept under the `date` key on the wire.
    #[serde(rename = "date")]
    pub recorded_at: DateTime<Utc>,
}

impl Sale {
    /// Builds a new sale record with a fresh id.
    pub fn new(
        product: &Product,
        quantity: i64,
        transaction_type: TransactionType,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Sale {
            id: Uuid::new_v4().to_string(),
            product_name: product.name.clone(),
            barcode: product.barcode.clone(),
            quantity,
            price: product.price,
            transaction_type,
            recorded_at,
        }
    }

    /// Line total (quantity × unit price).
    #[inline]
    pub fn total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Export Record
// =============================================================================

/// One entry in the export history, newest first, capped at the most
/// recent ten by the history repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRecord {
    /// Name of the CSV file that was produced.
    pub filename: String,

    /// When the export ran. Kept under the `date` key on the wire.
    #[serde(rename = "date")]
    pub exported_at: DateTime<Utc>,

    /// Number of sale rows in the exported report.
    pub total_transactions: usize,

    /// Revenue sum of the exported report, in rupiah.
    pub total_revenue: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock: i64) -> Product {
        Product {
            name: "Bawang Goreng Original 100g".to_string(),
            barcode: "BG001".to_string(),
            description: None,
            stock,
            price: Money::from_rupiah(15_000),
        }
    }

    #[test]
    fn test_can_sell() {
        let p = product(10);
        assert!(p.can_sell(1));
        assert!(p.can_sell(10));
        assert!(!p.can_sell(11));
        assert!(!p.can_sell(0));
        assert!(!p.can_sell(-1));
    }

    #[test]
    fn test_stock_level() {
        assert_eq!(product(0).stock_level(), StockLevel::Empty);
        assert_eq!(product(49).stock_level(), StockLevel::Low);
        assert_eq!(product(50).stock_level(), StockLevel::Available);
        assert_eq!(product(150).stock_level(), StockLevel::Available);
    }

    #[test]
    fn test_transaction_type_labels() {
        assert_eq!(TransactionType::Cash.label(), "Cash");
        assert_eq!(TransactionType::Transfer.label(), "Transfer");
        assert_eq!(TransactionType::Qris.label(), "QRIS");
    }

    #[test]
    fn test_transaction_type_parse_fallback() {
        assert_eq!(TransactionType::parse("qris"), TransactionType::Qris);
        assert_eq!(TransactionType::parse(" Transfer "), TransactionType::Transfer);
        assert_eq!(TransactionType::parse("cash"), TransactionType::Cash);
        assert_eq!(TransactionType::parse("voucher"), TransactionType::Cash);
        assert_eq!(TransactionType::parse(""), TransactionType::Cash);
    }

    #[test]
    fn test_sale_total() {
        let p = product(10);
        let sale = Sale::new(&p, 3, TransactionType::Cash, Utc::now());
        assert_eq!(sale.total().rupiah(), 45_000);
        assert_eq!(sale.product_name, p.name);
        assert_eq!(sale.barcode, p.barcode);
        assert!(!sale.id.is_empty());
    }

    #[test]
    fn test_wire_format_camel_case() {
        let p = product(10);
        let sale = Sale::new(&p, 2, TransactionType::Qris, Utc::now());
        let json = serde_json::to_string(&sale).unwrap();
        assert!(json.contains("\"productName\""));
        assert!(json.contains("\"transactionType\":\"qris\""));
        assert!(json.contains("\"date\""));
    }

    #[test]
    fn test_legacy_sale_without_price_parses() {
        // Older blobs carry no price and no id; both default.
        let json = r#"{
            "productName": "Bawang Goreng Pedas 200g",
            "barcode": "02200012345",
            "quantity": 2,
            "transactionType": "transfer",
            "date": "2026-01-05T10:30:00Z"
        }"#;
        let sale: Sale = serde_json::from_str(json).unwrap();
        assert_eq!(sale.price, Money::zero());
        assert!(sale.id.is_empty());
        assert_eq!(sale.transaction_type, TransactionType::Transfer);
    }
}
