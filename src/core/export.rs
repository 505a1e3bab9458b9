//! Export adapter - flattens sourcing and log data into CSV files
//!
//! Sourcing exports produce one row per (product, supplier, slab)
//! triple. Log exports write entries with their stored field layout.
//! Export files are artifacts for spreadsheet use and are never read
//! back.

use std::path::Path;
use thiserror::Error;

use crate::core::catalog::ProductCatalog;
use crate::core::sourcing::SourcingLedger;
use crate::entities::LogEntry;

/// Default sourcing export file name
pub const SOURCING_EXPORT_FILE: &str = "sourcing_export.csv";

/// Default log export file name
pub const LOG_EXPORT_FILE: &str = "application_logs.csv";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write export: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

/// One flattened (product, supplier, slab) row of the sourcing export
#[derive(Debug, Clone, PartialEq)]
pub struct SourcingRow {
    pub product_index: u32,
    pub product_name: String,
    pub category: String,
    pub supplier_name: String,
    pub contact_info: String,
    pub delivery_time: u32,
    pub moq: u32,
    /// Slab label, e.g. "10+"
    pub min_quantity: String,
    pub price: f64,
}

/// Flatten every quote slab into a row, ordered by product index
///
/// Ledger entries whose index has no catalog product are skipped.
pub fn sourcing_rows(catalog: &ProductCatalog, ledger: &SourcingLedger) -> Vec<SourcingRow> {
    let mut rows = Vec::new();
    for (product_index, quotes) in ledger.entries() {
        let product = match catalog.get(product_index) {
            Some(product) => product,
            None => continue,
        };
        for quote in quotes {
            for tier in &quote.quantity_pricing {
                rows.push(SourcingRow {
                    product_index,
                    product_name: product.product_name.clone(),
                    category: product.category_name.clone(),
                    supplier_name: quote.supplier_name.clone(),
                    contact_info: quote.contact_info.clone(),
                    delivery_time: quote.delivery_time,
                    moq: quote.moq,
                    min_quantity: tier.label(),
                    price: tier.price,
                });
            }
        }
    }
    rows
}

/// Write sourcing rows to a CSV file with spreadsheet-style headers
pub fn write_sourcing_csv(path: &Path, rows: &[SourcingRow]) -> Result<(), ExportError> {
    let mut writer = csv::WriterBuilder::new().has_headers(true).from_path(path)?;

    writer.write_record([
        "Product Index",
        "Product Name",
        "Category",
        "Supplier Name",
        "Contact Info",
        "Delivery Time",
        "MOQ",
        "Min Quantity",
        "Price",
    ])?;

    for row in rows {
        writer.write_record([
            row.product_index.to_string(),
            row.product_name.clone(),
            row.category.clone(),
            row.supplier_name.clone(),
            row.contact_info.clone(),
            row.delivery_time.to_string(),
            row.moq.to_string(),
            row.min_quantity.clone(),
            row.price.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Write log entries to a CSV file, one row per entry
pub fn write_log_csv(path: &Path, entries: &[LogEntry]) -> Result<(), ExportError> {
    let mut writer = csv::WriterBuilder::new().has_headers(true).from_path(path)?;

    writer.write_record([
        "Timestamp",
        "Action",
        "Details",
        "Product Name",
        "Supplier Name",
    ])?;

    for entry in entries {
        writer.write_record([
            entry.timestamp.to_rfc3339(),
            entry.action.clone(),
            entry.details.clone(),
            entry.product_name.clone().unwrap_or_default(),
            entry.supplier_name.clone().unwrap_or_default(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
