//! Supplier quote entity type - Per-product supplier offers with tiered pricing

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One quantity slab of a quote's tiered pricing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTier {
    /// Smallest order quantity the price applies to
    pub min_quantity: u32,

    /// Unit price at and above that quantity
    pub price: f64,
}

impl PriceTier {
    /// Display label for the slab, e.g. "10+"
    pub fn label(&self) -> String {
        format!("{}+", self.min_quantity)
    }
}

/// A SupplierQuote entity - one supplier's offer for one product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierQuote {
    /// Supplier display name
    pub supplier_name: String,

    /// Contact details (free text)
    #[serde(default)]
    pub contact_info: String,

    /// Delivery time in days
    pub delivery_time: u32,

    /// Minimum order quantity
    pub moq: u32,

    /// Pricing slabs ordered by ascending minimum quantity
    #[serde(default)]
    pub quantity_pricing: Vec<PriceTier>,

    /// Creation timestamp
    pub added_date: DateTime<Utc>,
}

impl SupplierQuote {
    /// Build a quote from draft fields, pairing the slabs by position
    pub fn new(draft: QuoteDraft) -> Self {
        let quantity_pricing = draft
            .tier_minimums
            .iter()
            .zip(draft.tier_prices.iter())
            .map(|(&min_quantity, &price)| PriceTier {
                min_quantity,
                price,
            })
            .collect();

        Self {
            supplier_name: draft.supplier_name,
            contact_info: draft.contact_info,
            delivery_time: draft.delivery_time,
            moq: draft.moq,
            quantity_pricing,
            added_date: Utc::now(),
        }
    }

    /// Get the unit price applicable at a given order quantity
    pub fn price_for_qty(&self, qty: u32) -> Option<f64> {
        // Find the highest min_quantity that is <= qty
        self.quantity_pricing
            .iter()
            .filter(|t| t.min_quantity <= qty)
            .max_by_key(|t| t.min_quantity)
            .map(|t| t.price)
    }
}

/// Input fields for a quote about to be added
///
/// Slab minimums must be strictly ascending; the ledger rejects drafts
/// that break the order before anything is written.
#[derive(Debug, Clone)]
pub struct QuoteDraft {
    pub supplier_name: String,
    pub contact_info: String,
    pub delivery_time: u32,
    pub moq: u32,

    /// Minimum quantities for the three pricing slabs, low to high
    pub tier_minimums: [u32; 3],

    /// Unit prices matching the slabs by position
    pub tier_prices: [f64; 3],
}

impl QuoteDraft {
    pub fn new(supplier_name: impl Into<String>, contact_info: impl Into<String>) -> Self {
        Self {
            supplier_name: supplier_name.into(),
            contact_info: contact_info.into(),
            delivery_time: 7,
            moq: 10,
            tier_minimums: [1, 10, 50],
            tier_prices: [0.0; 3],
        }
    }
}
