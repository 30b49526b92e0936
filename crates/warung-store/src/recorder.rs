//! # Sale Recorder
//!
//! The point-of-sale workflow: scanned barcode + quantity in, stock
//! decrement + immutable sale record out.
//!
//! ## Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Sale Recording                                    │
//! │                                                                         │
//! │  Scanner decodes barcode "01100005123"                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  lookup() ── exact match against stored barcodes                       │
//! │       │            └── not found → ProductNotFound                     │
//! │       ▼                                                                 │
//! │  record(barcode, qty, type)                                            │
//! │       ├── qty ≤ 0     → validation error                               │
//! │       ├── qty > stock → OutOfStock                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  stock -= qty  ──►  write product blob                                 │
//! │  append Sale   ──►  write sale blob                                    │
//! │       │                                                                 │
//! │       └── if the append fails, the product blob is restored from       │
//! │           the pre-sale snapshot so the two collections move together   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This is the one place two entities (Product, Sale) are mutated together.
//! There is no real transaction across two blob files; the snapshot restore
//! is best effort, and each individual write is itself atomic.

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};
use crate::repository::Store;
use warung_core::validation::validate_quantity;
use warung_core::{CoreError, Product, Sale, TransactionType};

/// Records sales against inventory.
#[derive(Debug, Clone)]
pub struct SaleRecorder {
    store: Store,
}

impl SaleRecorder {
    /// Creates a new SaleRecorder.
    pub fn new(store: Store) -> Self {
        SaleRecorder { store }
    }

    /// Resolves a scanned barcode to its product.
    ///
    /// ## Errors
    /// * `CoreError::ProductNotFound` - barcode not registered; the UI shows
    ///   the "produk tidak ditemukan" notification
    pub fn lookup(&self, barcode: &str) -> StoreResult<Product> {
        debug!(barcode = %barcode, "Looking up scanned barcode");
        self.store
            .products()
            .get(barcode)?
            .ok_or_else(|| StoreError::Core(CoreError::ProductNotFound(barcode.to_string())))
    }

    /// Records a sale: decrements stock and appends the sale record.
    ///
    /// ## Arguments
    /// * `barcode` - scanned product key
    /// * `quantity` - units sold, must be positive and within stock
    /// * `transaction_type` - payment method
    ///
    /// ## Returns
    /// The appended sale record.
    ///
    /// ## Errors
    /// Rejections leave both collections untouched:
    /// * validation error for `quantity ≤ 0`
    /// * `CoreError::ProductNotFound` for an unknown barcode
    /// * `CoreError::OutOfStock` when `quantity > stock`
    ///
    /// Those are the only rejections: any positive quantity up to the
    /// current stock succeeds.
    pub fn record(
        &self,
        barcode: &str,
        quantity: i64,
        transaction_type: TransactionType,
    ) -> StoreResult<Sale> {
        validate_quantity(quantity)?;

        let products_repo = self.store.products();
        let mut products = products_repo.list()?;
        let index = products
            .iter()
            .position(|p| p.barcode == barcode)
            .ok_or_else(|| StoreError::Core(CoreError::ProductNotFound(barcode.to_string())))?;

        if quantity > products[index].stock {
            return Err(StoreError::Core(CoreError::OutOfStock {
                name: products[index].name.clone(),
                available: products[index].stock,
                requested: quantity,
            }));
        }

        let snapshot = products.clone();
        products[index].stock -= quantity;
        let sale = Sale::new(&products[index], quantity, transaction_type, Utc::now());

        products_repo.replace_all(&products)?;
        if let Err(err) = self.store.sales().append(sale.clone()) {
            warn!(barcode = %barcode, error = %err, "Sale append failed, restoring stock");
            if let Err(restore_err) = products_repo.replace_all(&snapshot) {
                warn!(error = %restore_err, "Stock restore failed; collections are inconsistent");
            }
            return Err(err);
        }

        info!(
            barcode = %barcode,
            product = %sale.product_name,
            quantity = quantity,
            total = %sale.total(),
            transaction_type = %sale.transaction_type.label(),
            remaining_stock = products[index].stock,
            "Sale recorded"
        );

        Ok(sale)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use warung_core::Money;

    fn store_with_product(stock: i64) -> Store {
        let store = Store::in_memory();
        store
            .products()
            .insert(Product {
                name: "Bawang Goreng Original 100g".to_string(),
                barcode: "BG001".to_string(),
                description: None,
                stock,
                price: Money::from_rupiah(15_000),
            })
            .unwrap();
        store
    }

    #[test]
    fn test_record_decrements_stock_and_appends_sale() {
        let store = store_with_product(150);
        let recorder = SaleRecorder::new(store.clone());

        let sale = recorder.record("BG001", 10, TransactionType::Cash).unwrap();

        assert_eq!(sale.barcode, "BG001");
        assert_eq!(sale.quantity, 10);
        assert_eq!(sale.transaction_type, TransactionType::Cash);
        assert_eq!(sale.price.rupiah(), 15_000);

        let product = store.products().get("BG001").unwrap().unwrap();
        assert_eq!(product.stock, 140);

        let log = store.sales().list().unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].quantity, 10);
    }

    #[test]
    fn test_record_rejects_overdraw_and_leaves_state_unchanged() {
        let store = store_with_product(3);
        let recorder = SaleRecorder::new(store.clone());

        let err = recorder.record("BG001", 5, TransactionType::Cash).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::OutOfStock {
                available: 3,
                requested: 5,
                ..
            })
        ));

        assert_eq!(store.products().get("BG001").unwrap().unwrap().stock, 3);
        assert!(store.sales().list().unwrap().is_empty());
    }

    #[test]
    fn test_record_rejects_non_positive_quantity() {
        let store = store_with_product(10);
        let recorder = SaleRecorder::new(store.clone());

        assert!(recorder.record("BG001", 0, TransactionType::Cash).is_err());
        assert!(recorder.record("BG001", -2, TransactionType::Cash).is_err());
        assert!(store.sales().list().unwrap().is_empty());
    }

    #[test]
    fn test_record_accepts_any_quantity_within_stock() {
        let store = store_with_product(2_000);
        let recorder = SaleRecorder::new(store.clone());

        // No entry ceiling; stock is the only limit.
        let sale = recorder
            .record("BG001", 1_500, TransactionType::Cash)
            .unwrap();

        assert_eq!(sale.quantity, 1_500);
        assert_eq!(store.products().get("BG001").unwrap().unwrap().stock, 500);
        assert_eq!(store.sales().count().unwrap(), 1);
    }

    #[test]
    fn test_record_rejects_unknown_barcode() {
        let store = store_with_product(10);
        let recorder = SaleRecorder::new(store.clone());

        let err = recorder.record("BG404", 1, TransactionType::Qris).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::ProductNotFound(ref b)) if b == "BG404"
        ));
    }

    #[test]
    fn test_selling_down_to_zero_keeps_product() {
        let store = store_with_product(10);
        let recorder = SaleRecorder::new(store.clone());

        recorder.record("BG001", 10, TransactionType::Transfer).unwrap();

        let product = store.products().get("BG001").unwrap().unwrap();
        assert_eq!(product.stock, 0);
        // Zero stock never deletes the product.
        assert_eq!(store.products().list().unwrap().len(), 1);
        // And a further sale is refused.
        assert!(recorder.record("BG001", 1, TransactionType::Cash).is_err());
    }

    #[test]
    fn test_lookup() {
        let store = store_with_product(10);
        let recorder = SaleRecorder::new(store);

        assert_eq!(recorder.lookup("BG001").unwrap().barcode, "BG001");
        assert!(matches!(
            recorder.lookup("BG404").unwrap_err(),
            StoreError::Core(CoreError::ProductNotFound(_))
        ));
    }
}
