//! # Seed Data Generator
//!
//! Populates the data directory with demo inventory and a handful of
//! sales for development.
//!
//! ## Usage
//! ```bash
//! # Seed into ./data (default)
//! cargo run -p warung-store --bin seed
//!
//! # Specify the data directory
//! cargo run -p warung-store --bin seed -- --data ./demo-data
//! ```
//!
//! Generates one batch per flavor variant (Original, Pedas, Balado,
//! BBQ, Keju) in two weights each, with production-dated barcodes, then
//! records a few sales so the report screen has something to show.

use std::env;

use chrono::Utc;
use warung_core::{barcode::Variant, Money, TransactionType};
use warung_store::{ProductBatch, SaleRecorder, Store, StoreConfig};

/// Weight (grams) and unit price per weight tier.
const TIERS: &[(u32, i64)] = &[(100, 15_000), (250, 32_000)];

/// Batch size per variant and tier.
const BATCH_QUANTITY: i64 = 50;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let mut config = StoreConfig::load()?;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--data" | "-d" => {
                if i + 1 < args.len() {
                    config.data_dir = args[i + 1].clone().into();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Warung POS Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --data <PATH>  Data directory (default: ./data)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Warung POS Seed Data Generator");
    println!("==============================");
    println!("Data directory: {}", config.data_dir.display());
    println!();

    let store = Store::open(&config.data_dir)?;

    let existing = store.products().list()?.len();
    if existing > 0 {
        println!("Data directory already has {existing} products.");
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the items.json file to regenerate.");
        return Ok(());
    }

    println!("Generating inventory...");
    let production_date = Utc::now().date_naive();
    let mut generated = 0;

    for variant in Variant::ALL {
        for (weight, price) in TIERS {
            let batch = ProductBatch::new(
                "Bawang Goreng",
                variant.label(),
                *weight,
                Money::from_rupiah(*price),
                production_date,
                60,
                BATCH_QUANTITY,
            )?;
            let product = store.products().receive_batch(&batch)?;
            println!("  {} -> {}", product.name, product.barcode);
            generated += 1;
        }
    }

    println!();
    println!("Recording demo sales...");
    let recorder = SaleRecorder::new(store.clone());
    let demo_sales = [
        (0usize, 2, TransactionType::Cash),
        (2, 1, TransactionType::Qris),
        (5, 3, TransactionType::Transfer),
    ];
    let products = store.products().list()?;
    for (index, quantity, transaction_type) in demo_sales {
        let sale = recorder.record(&products[index].barcode, quantity, transaction_type)?;
        println!(
            "  {} x{} ({}) = {}",
            sale.product_name,
            sale.quantity,
            sale.transaction_type.label(),
            sale.total()
        );
    }

    println!();
    println!("Seed complete: {generated} products, {} sales.", demo_sales.len());
    Ok(())
}
