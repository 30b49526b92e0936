//! # Sales Reporting
//!
//! Pure filtering, aggregation and CSV serialization over the sale log.
//!
//! ## Report Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Report Pipeline                                   │
//! │                                                                         │
//! │  Sale log (newest first)                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  filter_sales(ReportFilter) ── date range / type / free text           │
//! │       │                                                                 │
//! │       ├──► summarize() ── transactions, items sold, revenue            │
//! │       │                                                                 │
//! │       └──► render_csv() ── BOM + header rows + data rows + summary     │
//! │                                                                         │
//! │  File writing and export history live in warung-store; this module     │
//! │  only produces text.                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Sale, TransactionType};

// =============================================================================
// id-ID Formatting
// =============================================================================

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

const MONTHS_LONG: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Formats a timestamp as the short Indonesian date used in report tables,
/// e.g. "05 Jan 2026".
pub fn format_date_id(at: DateTime<Utc>) -> String {
    format!(
        "{:02} {} {}",
        at.day(),
        MONTHS_SHORT[at.month0() as usize],
        at.year()
    )
}

/// Formats a date with the long Indonesian month name, e.g. "5 Januari 2026".
/// Used on printed labels and batch descriptions.
pub fn format_date_long_id(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTHS_LONG[date.month0() as usize],
        date.year()
    )
}

/// Formats a timestamp as the id-ID clock time, e.g. "10.30.05".
/// Indonesian locale separates time segments with dots, not colons.
pub fn format_time_id(at: DateTime<Utc>) -> String {
    format!("{:02}.{:02}.{:02}", at.hour(), at.minute(), at.second())
}

// =============================================================================
// Filtering
// =============================================================================

/// Criteria for narrowing the sale log. All present criteria must match
/// (conjunctive); absent criteria match everything.
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    /// Inclusive start date (sales on this day match).
    pub start_date: Option<NaiveDate>,

    /// Inclusive end date (sales on this day match).
    pub end_date: Option<NaiveDate>,

    /// Restrict to one payment method.
    pub transaction_type: Option<TransactionType>,

    /// Case-insensitive substring match on product name or barcode.
    pub query: Option<String>,
}

impl ReportFilter {
    /// Checks whether one sale satisfies every present criterion.
    ///
    /// Date comparison happens on calendar days: a sale at 23:59 on the end
    /// date is still inside the range.
    pub fn matches(&self, sale: &Sale) -> bool {
        let day = sale.recorded_at.date_naive();

        if let Some(start) = self.start_date {
            if day < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if day > end {
                return false;
            }
        }
        if let Some(ty) = self.transaction_type {
            if sale.transaction_type != ty {
                return false;
            }
        }
        if let Some(ref query) = self.query {
            let q = query.trim().to_lowercase();
            if !q.is_empty()
                && !sale.product_name.to_lowercase().contains(&q)
                && !sale.barcode.to_lowercase().contains(&q)
            {
                return false;
            }
        }

        true
    }
}

/// Returns the sales matching `filter`, preserving log order (newest first).
pub fn filter_sales(sales: &[Sale], filter: &ReportFilter) -> Vec<Sale> {
    sales.iter().filter(|s| filter.matches(s)).cloned().collect()
}

// =============================================================================
// Summary
// =============================================================================

/// Aggregate figures over a (filtered) set of sales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    /// Number of sale records.
    pub transactions: usize,

    /// Sum of quantities across all records.
    pub items_sold: i64,

    /// Sum of line totals, in rupiah.
    pub revenue: Money,
}

/// Computes transaction count, item count and revenue sum.
pub fn summarize(sales: &[Sale]) -> ReportSummary {
    ReportSummary {
        transactions: sales.len(),
        items_sold: sales.iter().map(|s| s.quantity).sum(),
        revenue: sales.iter().map(Sale::total).sum(),
    }
}

// =============================================================================
// CSV Serialization
// =============================================================================

/// Column header row of the report body.
const COLUMNS: [&str; 9] = [
    "No",
    "Tanggal",
    "Waktu",
    "Nama Barang",
    "Barcode",
    "Jumlah",
    "Harga Satuan (Rp)",
    "Total (Rp)",
    "Tipe Transaksi",
];

/// Serializes a report to CSV text.
///
/// ## Layout
/// ```text
/// <store name>
/// Laporan Penjualan
/// Tanggal Export: <date>
/// <empty>
/// No,Tanggal,Waktu,Nama Barang,Barcode,Jumlah,Harga Satuan (Rp),Total (Rp),Tipe Transaksi
/// 1,05 Jan 2026,10.30.00,...
/// <empty>
/// RINGKASAN
/// Total Transaksi,<n>
/// Total Item Terjual,<n>
/// Total Pendapatan (Rp),<n>
/// ```
///
/// Cells containing commas, quotes or newlines are double-quote escaped.
/// The whole text is prefixed with a UTF-8 byte-order marker so spreadsheet
/// applications pick the right encoding.
///
/// ## Errors
/// Returns [`CoreError::EmptyReport`] for an empty sale set; the caller
/// must not produce a file in that case.
pub fn render_csv(store_name: &str, sales: &[Sale], exported_at: DateTime<Utc>) -> CoreResult<String> {
    if sales.is_empty() {
        return Err(CoreError::EmptyReport);
    }

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(sales.len() + 10);

    rows.push(vec![store_name.to_string()]);
    rows.push(vec!["Laporan Penjualan".to_string()]);
    rows.push(vec![format!("Tanggal Export: {}", format_date_id(exported_at))]);
    rows.push(vec![String::new()]);
    rows.push(COLUMNS.iter().map(|c| c.to_string()).collect());

    for (index, sale) in sales.iter().enumerate() {
        rows.push(vec![
            (index + 1).to_string(),
            format_date_id(sale.recorded_at),
            format_time_id(sale.recorded_at),
            sale.product_name.clone(),
            sale.barcode.clone(),
            sale.quantity.to_string(),
            sale.price.rupiah().to_string(),
            sale.total().rupiah().to_string(),
            sale.transaction_type.label().to_string(),
        ]);
    }

    let summary = summarize(sales);
    rows.push(vec![String::new()]);
    rows.push(vec!["RINGKASAN".to_string()]);
    rows.push(vec!["Total Transaksi".to_string(), summary.transactions.to_string()]);
    rows.push(vec!["Total Item Terjual".to_string(), summary.items_sold.to_string()]);
    rows.push(vec![
        "Total Pendapatan (Rp)".to_string(),
        summary.revenue.rupiah().to_string(),
    ]);

    let body = rows
        .iter()
        .map(|row| row.iter().map(|cell| escape_cell(cell)).collect::<Vec<_>>().join(","))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(format!("\u{feff}{body}"))
}

/// Quotes a cell when it contains a comma, quote or newline.
fn escape_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// File name for an export run: `Laporan_Penjualan_YYYYMMDD_HHMM.csv`.
pub fn export_filename(at: DateTime<Utc>) -> String {
    format!("Laporan_Penjualan_{}.csv", at.format("%Y%m%d_%H%M"))
}

// =============================================================================
// Unit Tests
// =============================================================================
