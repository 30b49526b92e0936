//! # Report Export Service
//!
//! Filters the sale log, renders the CSV, writes it to the export
//! directory and records the export in history. Also owns the guarded
//! sale-log reset, which auto-exports everything before clearing.

use std::path::PathBuf;

use chrono::Utc;
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::repository::Store;
use warung_core::report::{export_filename, filter_sales, render_csv, summarize, ReportFilter};
use warung_core::{ExportRecord, ReportSummary};

/// What an export produced.
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    /// Name of the CSV file, e.g. `Laporan_Penjualan_20260830_1015.csv`.
    pub filename: String,
    /// Full path of the written file.
    pub path: PathBuf,
    /// Totals over the exported rows.
    pub summary: ReportSummary,
}

/// Exports sale reports as CSV files.
#[derive(Debug, Clone)]
pub struct Exporter {
    store: Store,
    config: StoreConfig,
}

impl Exporter {
    /// Creates a new Exporter.
    pub fn new(store: Store, config: StoreConfig) -> Self {
        Exporter { store, config }
    }

    /// Exports the sales matching `filter` to a timestamped CSV file.
    ///
    /// ## Errors
    /// * `CoreError::EmptyReport` - no sale matches; nothing is written
    /// * `StoreError::Io` - the export directory or file could not be written
    pub fn export_csv(&self, filter: &ReportFilter) -> StoreResult<ExportOutcome> {
        let sales = self.store.sales().list()?;
        let rows = filter_sales(&sales, filter);
        let exported_at = Utc::now();
        let csv = render_csv(&self.config.store_name, &rows, exported_at)
            .map_err(StoreError::Core)?;

        std::fs::create_dir_all(&self.config.export_dir)
            .map_err(|e| StoreError::io("creating export directory", e))?;

        let filename = export_filename(exported_at);
        let path = self.config.export_dir.join(&filename);
        debug!(path = %path.display(), rows = rows.len(), "Writing CSV export");
        std::fs::write(&path, csv.as_bytes())
            .map_err(|e| StoreError::io("writing CSV export", e))?;

        let summary = summarize(&rows);
        self.store.exports().record(ExportRecord {
            filename: filename.clone(),
            exported_at,
            total_transactions: summary.transactions,
            total_revenue: summary.revenue,
        })?;

        info!(
            filename = %filename,
            transactions = summary.transactions,
            revenue = %summary.revenue,
            "Report exported"
        );
        Ok(ExportOutcome { filename, path, summary })
    }

    /// Clears the sale log, exporting everything first so no data is lost.
    ///
    /// Returns the outcome of the backup export, or `None` when the log was
    /// already empty (then there is nothing to back up and nothing to clear).
    pub fn reset_sales(&self) -> StoreResult<Option<ExportOutcome>> {
        if self.store.sales().count()? == 0 {
            debug!("Sale log already empty, skipping reset");
            return Ok(None);
        }
        let outcome = self.export_csv(&ReportFilter::default())?;
        self.store.sales().clear()?;
        info!(backup = %outcome.filename, "Sale log reset");
        Ok(Some(outcome))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use warung_core::{CoreError, Money, Product, Sale, TransactionType};

    fn fixture() -> (Exporter, Store, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::in_memory();
        let config = StoreConfig {
            export_dir: dir.path().join("exports"),
            ..StoreConfig::default()
        };
        (Exporter::new(store.clone(), config), store, dir)
    }

    fn sale(quantity: i64) -> Sale {
        let product = Product {
            name: "Bawang Goreng Original 100g".to_string(),
            barcode: "BG001".to_string(),
            description: None,
            stock: 100,
            price: Money::from_rupiah(15_000),
        };
        let at = Utc.with_ymd_and_hms(2026, 8, 30, 10, 15, 0).unwrap();
        Sale::new(&product, quantity, TransactionType::Cash, at)
    }

    #[test]
    fn test_export_writes_file_and_records_history() {
        let (exporter, store, _dir) = fixture();
        store.sales().append(sale(2)).unwrap();
        store.sales().append(sale(3)).unwrap();

        let outcome = exporter.export_csv(&ReportFilter::default()).unwrap();

        assert!(outcome.filename.starts_with("Laporan_Penjualan_"));
        assert!(outcome.filename.ends_with(".csv"));
        assert_eq!(outcome.summary.transactions, 2);
        assert_eq!(outcome.summary.items_sold, 5);
        assert_eq!(outcome.summary.revenue, Money::from_rupiah(75_000));

        let contents = std::fs::read_to_string(&outcome.path).unwrap();
        assert!(contents.starts_with('\u{feff}'));
        assert!(contents.contains("Bawang Goreng Original 100g"));

        let history = store.exports().list().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].filename, outcome.filename);
        assert_eq!(history[0].total_transactions, 2);
    }

    #[test]
    fn test_empty_report_writes_nothing() {
        let (exporter, store, _dir) = fixture();

        let err = exporter.export_csv(&ReportFilter::default()).unwrap_err();
        assert!(matches!(err, StoreError::Core(CoreError::EmptyReport)));
        assert!(store.exports().list().unwrap().is_empty());

        // The export directory is either never created or left empty.
        if exporter.config.export_dir.exists() {
            let mut entries = std::fs::read_dir(&exporter.config.export_dir).unwrap();
            assert!(entries.next().is_none());
        }
    }

    #[test]
    fn test_filter_can_empty_the_report() {
        let (exporter, store, _dir) = fixture();
        store.sales().append(sale(1)).unwrap();

        let filter = ReportFilter {
            query: Some("keju".to_string()),
            ..ReportFilter::default()
        };
        assert!(matches!(
            exporter.export_csv(&filter).unwrap_err(),
            StoreError::Core(CoreError::EmptyReport)
        ));
    }

    #[test]
    fn test_reset_exports_then_clears() {
        let (exporter, store, _dir) = fixture();
        store.sales().append(sale(4)).unwrap();

        let outcome = exporter.reset_sales().unwrap().expect("non-empty log");
        assert!(outcome.path.exists());
        assert_eq!(store.sales().count().unwrap(), 0);
        assert_eq!(store.exports().list().unwrap().len(), 1);
    }

    #[test]
    fn test_reset_on_empty_log_is_a_no_op() {
        let (exporter, store, _dir) = fixture();
        assert!(exporter.reset_sales().unwrap().is_none());
        assert!(store.exports().list().unwrap().is_empty());
    }
}
