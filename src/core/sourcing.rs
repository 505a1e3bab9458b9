//! Sourcing ledger - supplier quotes keyed by product index
//!
//! The on-disk document is a JSON object whose keys are product
//! indexes rendered as text. Quote lists keep insertion order. Keys
//! with no matching catalog product are tolerated on load; the catalog
//! stays the referential authority.

use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

use crate::core::activity::ActivityLog;
use crate::core::store::{JsonStore, StoreError};
use crate::entities::{Product, QuoteDraft, SupplierQuote};

/// On-disk sourcing document
pub type SourcingDocument = BTreeMap<u32, Vec<SupplierQuote>>;

#[derive(Debug, Error)]
pub enum SourcingError {
    #[error("Quantity slabs should be in ascending order (e.g., 1, 10, 50)")]
    InvalidTierOrder,

    #[error("Supplier name is required")]
    MissingSupplierName,

    #[error("Delivery time must be at least 1 day")]
    InvalidDeliveryTime,

    #[error("Minimum order quantity must be at least 1")]
    InvalidMoq,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Per-product supplier quote lists backed by one JSON document
pub struct SourcingLedger {
    store: JsonStore<SourcingDocument>,
    log: Arc<ActivityLog>,
    quotes: SourcingDocument,
    load_warning: Option<StoreError>,
}

impl SourcingLedger {
    /// Open the ledger; a corrupt document leaves an empty ledger and
    /// a queryable warning instead of failing
    pub fn open(store: JsonStore<SourcingDocument>, log: Arc<ActivityLog>) -> Self {
        let (quotes, load_warning) = match store.load() {
            Ok(quotes) => (quotes, None),
            Err(err) => (SourcingDocument::default(), Some(err)),
        };
        Self {
            store,
            log,
            quotes,
            load_warning,
        }
    }

    /// Warning from a tolerated load failure, if any
    pub fn load_warning(&self) -> Option<&StoreError> {
        self.load_warning.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.values().all(Vec::is_empty)
    }

    /// Quotes recorded for a product, oldest first
    pub fn quotes_for(&self, product_index: u32) -> &[SupplierQuote] {
        self.quotes
            .get(&product_index)
            .map_or(&[], |quotes| quotes.as_slice())
    }

    pub fn quote_count(&self, product_index: u32) -> usize {
        self.quotes.get(&product_index).map_or(0, Vec::len)
    }

    /// Iterate (product index, quote list) pairs in index order
    pub fn entries(&self) -> impl Iterator<Item = (u32, &[SupplierQuote])> {
        self.quotes
            .iter()
            .map(|(&index, quotes)| (index, quotes.as_slice()))
    }

    /// Validate and record a quote for a product
    ///
    /// Slab order is checked first, then the supplier name, then that
    /// delivery time and minimum order quantity are positive; nothing
    /// is written when any check fails. Duplicate supplier names for
    /// one product are accepted.
    pub fn add_quote(
        &mut self,
        product: &Product,
        draft: QuoteDraft,
    ) -> Result<SupplierQuote, SourcingError> {
        if !(draft.tier_minimums[0] < draft.tier_minimums[1]
            && draft.tier_minimums[1] < draft.tier_minimums[2])
        {
            return Err(SourcingError::InvalidTierOrder);
        }
        if draft.supplier_name.trim().is_empty() {
            return Err(SourcingError::MissingSupplierName);
        }
        if draft.delivery_time == 0 {
            return Err(SourcingError::InvalidDeliveryTime);
        }
        if draft.moq == 0 {
            return Err(SourcingError::InvalidMoq);
        }

        let quote = SupplierQuote::new(draft);
        self.quotes
            .entry(product.product_index)
            .or_default()
            .push(quote.clone());
        self.store.save(&self.quotes)?;

        self.log.append(
            "Supplier Added",
            format!(
                "Added supplier '{}' for product '{}'",
                quote.supplier_name, product.product_name
            ),
            Some(product.product_name.clone()),
            Some(quote.supplier_name.clone()),
        )?;

        Ok(quote)
    }
}
