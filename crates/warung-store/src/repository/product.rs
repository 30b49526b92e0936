//! # Product Repository
//!
//! Inventory CRUD over the product collection blob, matched by barcode.
//!
//! ## Batch Receiving
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How receive_batch Works                              │
//! │                                                                         │
//! │  Generator produces: { variant: Original, 100 g, qty 25, code 011..  } │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Existing product with the same name?                                  │
//! │       │                                                                 │
//! │       ├── YES → stock += 25, refresh description/price,                │
//! │       │         KEEP the existing barcode (stable key - labels         │
//! │       │         already printed with it keep scanning)                 │
//! │       │                                                                 │
//! │       └── NO  → new Product under the freshly generated barcode        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::blob::{load_collection, save_collection, BlobStore, ITEMS_KEY};
use crate::error::{StoreError, StoreResult};
use warung_core::report::format_date_long_id;
use warung_core::validation::{
    validate_barcode, validate_price, validate_product_name, validate_quantity, validate_stock,
    validate_weight,
};
use warung_core::{barcode, Money, Product};

// =============================================================================
// Batch DTO
// =============================================================================

/// One production batch coming out of the barcode generator.
#[derive(Debug, Clone)]
pub struct ProductBatch {
    /// Product name, e.g. "Bawang Goreng Original 100g".
    pub name: String,

    /// Freshly generated barcode for this batch.
    pub barcode: String,

    /// Label description: price, production date, expiry date.
    pub description: String,

    /// Unit price in rupiah.
    pub price: Money,

    /// Units produced in this batch.
    pub quantity: i64,
}

impl ProductBatch {
    /// Builds a batch from generator inputs: encodes the barcode and
    /// renders the label description.
    ///
    /// ## Arguments
    /// * `product_line` - name prefix, e.g. "Bawang Goreng"
    /// * `variant` - variant label; unknown labels still encode (code "00")
    /// * `weight_grams` - 1..=999, the 3-digit barcode segment
    /// * `expiry_days` - shelf life added to the production date
    pub fn new(
        product_line: &str,
        variant: &str,
        weight_grams: u32,
        price: Money,
        production_date: NaiveDate,
        expiry_days: i64,
        quantity: i64,
    ) -> StoreResult<Self> {
        validate_weight(weight_grams as i64)?;
        validate_price(price.rupiah())?;
        validate_quantity(quantity)?;

        let name = format!("{product_line} {variant} {weight_grams}g");
        validate_product_name(&name)?;

        let expiry_date = production_date + chrono::Duration::days(expiry_days);
        let description = format!(
            "Harga: {} | Produksi: {} | Exp: {}",
            price,
            format_date_long_id(production_date),
            format_date_long_id(expiry_date),
        );

        Ok(ProductBatch {
            name,
            barcode: barcode::generate(variant, weight_grams, production_date),
            description,
            price,
            quantity,
        })
    }
}

// =============================================================================
// Update DTO
// =============================================================================

/// Partial update of a product's editable fields. `None` leaves a field
/// untouched; the barcode itself is immutable.
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub stock: Option<i64>,
    pub price: Option<Money>,
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for the product collection.
#[derive(Clone)]
pub struct ProductRepository {
    blob: Arc<dyn BlobStore>,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(blob: Arc<dyn BlobStore>) -> Self {
        ProductRepository { blob }
    }

    /// Lists every product, in stored order.
    pub fn list(&self) -> StoreResult<Vec<Product>> {
        load_collection(self.blob.as_ref(), ITEMS_KEY)
    }

    /// Looks a product up by exact barcode match.
    pub fn get(&self, barcode: &str) -> StoreResult<Option<Product>> {
        Ok(self.list()?.into_iter().find(|p| p.barcode == barcode))
    }

    /// Replaces the whole collection. Used by services that already did
    /// their read-modify-write (sale recording, rollback).
    pub fn replace_all(&self, products: &[Product]) -> StoreResult<()> {
        save_collection(self.blob.as_ref(), ITEMS_KEY, products)
    }

    /// Inserts a new product.
    ///
    /// ## Errors
    /// * Validation failures on name, barcode, stock or price
    /// * `StoreError::Duplicate` when the barcode already exists
    pub fn insert(&self, product: Product) -> StoreResult<Product> {
        validate_product_name(&product.name)?;
        validate_barcode(&product.barcode)?;
        validate_stock(product.stock)?;
        validate_price(product.price.rupiah())?;

        let mut products = self.list()?;
        if products.iter().any(|p| p.barcode == product.barcode) {
            return Err(StoreError::duplicate("barcode", &product.barcode));
        }

        debug!(barcode = %product.barcode, name = %product.name, "Inserting product");
        products.push(product.clone());
        self.replace_all(&products)?;
        Ok(product)
    }

    /// Updates the editable fields of the product with this barcode.
    ///
    /// ## Errors
    /// * `StoreError::NotFound` when no product carries the barcode
    pub fn update(&self, barcode: &str, update: ProductUpdate) -> StoreResult<Product> {
        let mut products = self.list()?;
        let product = products
            .iter_mut()
            .find(|p| p.barcode == barcode)
            .ok_or_else(|| StoreError::not_found("Product", barcode))?;

        if let Some(name) = update.name {
            validate_product_name(&name)?;
            product.name = name;
        }
        if let Some(description) = update.description {
            product.description = Some(description);
        }
        if let Some(stock) = update.stock {
            validate_stock(stock)?;
            product.stock = stock;
        }
        if let Some(price) = update.price {
            validate_price(price.rupiah())?;
            product.price = price;
        }

        let updated = product.clone();
        debug!(barcode = %barcode, "Updating product");
        self.replace_all(&products)?;
        Ok(updated)
    }

    /// Deletes the product with this barcode.
    ///
    /// ## Errors
    /// * `StoreError::NotFound` when no product carries the barcode
    pub fn delete(&self, barcode: &str) -> StoreResult<()> {
        let mut products = self.list()?;
        let before = products.len();
        products.retain(|p| p.barcode != barcode);
        if products.len() == before {
            return Err(StoreError::not_found("Product", barcode));
        }

        debug!(barcode = %barcode, "Deleting product");
        self.replace_all(&products)
    }

    /// Receives a production batch into inventory.
    ///
    /// Merges into the product with the same name when one exists (adding
    /// stock, refreshing description and price, keeping its barcode); a new
    /// name becomes a new product under the batch's generated barcode.
    pub fn receive_batch(&self, batch: &ProductBatch) -> StoreResult<Product> {
        let mut products = self.list()?;

        if let Some(product) = products.iter_mut().find(|p| p.name == batch.name) {
            product.stock += batch.quantity;
            product.description = Some(batch.description.clone());
            product.price = batch.price;
            let merged = product.clone();
            info!(
                name = %merged.name,
                barcode = %merged.barcode,
                added = batch.quantity,
                stock = merged.stock,
                "Batch merged into existing product"
            );
            self.replace_all(&products)?;
            return Ok(merged);
        }

        if products.iter().any(|p| p.barcode == batch.barcode) {
            // Random suffix collision with a different product.
            return Err(StoreError::duplicate("barcode", &batch.barcode));
        }

        let product = Product {
            name: batch.name.clone(),
            barcode: batch.barcode.clone(),
            description: Some(batch.description.clone()),
            stock: batch.quantity,
            price: batch.price,
        };
        info!(
            name = %product.name,
            barcode = %product.barcode,
            stock = product.stock,
            "New product added from batch"
        );
        products.push(product.clone());
        self.replace_all(&products)?;
        Ok(product)
    }

    /// Total sellable units across the whole inventory (dashboard figure).
    pub fn total_stock(&self) -> StoreResult<i64> {
        Ok(self.list()?.iter().map(|p| p.stock).sum())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
