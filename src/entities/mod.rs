//! Entity type definitions

pub mod log;
pub mod product;
pub mod quote;

pub use log::LogEntry;
pub use product::{Product, ProductDocument, ProductDraft};
pub use quote::{PriceTier, QuoteDraft, SupplierQuote};
