//! Core module - stores, catalog, sourcing, activity log, and export

pub mod activity;
pub mod catalog;
pub mod export;
pub mod sourcing;
pub mod store;
pub mod workspace;

pub use activity::{ActivityLog, DateWindow, LogQuery, LOG_CAPACITY};
pub use catalog::{CatalogError, CategoryFilter, ProductCatalog};
pub use export::{
    sourcing_rows, write_log_csv, write_sourcing_csv, ExportError, SourcingRow,
    LOG_EXPORT_FILE, SOURCING_EXPORT_FILE,
};
pub use sourcing::{SourcingDocument, SourcingError, SourcingLedger};
pub use store::{JsonStore, StoreError};
pub use workspace::{Workspace, LOGS_FILE, PRODUCTS_FILE, SOURCING_FILE};
