//! Product entity type - Catalog items with category and pricing fields

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category applied when a stored product has none
pub const UNCATEGORIZED: &str = "Uncategorized";

fn default_category() -> String {
    UNCATEGORIZED.to_string()
}

/// A Product entity - one catalog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique numeric identifier, assigned at creation, never reused
    pub product_index: u32,

    /// Display name
    pub product_name: String,

    /// Grouping category; absent values become "Uncategorized" at load
    #[serde(default = "default_category")]
    pub category_name: String,

    /// Unit price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_numeric: Option<f64>,

    /// Weight or quantity description (free text, e.g. "500g")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_quantity: Option<String>,

    /// Detailed description or notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Create a product from validated draft fields
    pub fn new(product_index: u32, draft: ProductDraft) -> Self {
        Self {
            product_index,
            product_name: draft.product_name,
            category_name: draft.category_name,
            price_numeric: draft.price_numeric,
            weight_quantity: draft.weight_quantity,
            description: draft.description,
        }
    }

    /// Selection label used when picking a product from a list
    pub fn label(&self) -> String {
        format!("{}. {}", self.product_index, self.product_name)
    }
}

/// Input fields for a product about to be added
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    pub product_name: String,
    pub category_name: String,
    pub price_numeric: Option<f64>,
    pub weight_quantity: Option<String>,
    pub description: Option<String>,
}

impl ProductDraft {
    pub fn new(product_name: impl Into<String>, category_name: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            category_name: category_name.into(),
            price_numeric: None,
            weight_quantity: None,
            description: None,
        }
    }
}

/// Document-level metadata, rewritten on every save and ignored on load
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// When the document was last written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_timestamp: Option<DateTime<Utc>>,

    /// Product count at the last write
    #[serde(default)]
    pub total_products: usize,
}

/// On-disk product document: metadata plus the full product collection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductDocument {
    #[serde(default)]
    pub metadata: DocumentMeta,

    #[serde(default)]
    pub products: Vec<Product>,
}

impl ProductDocument {
    /// Refresh metadata ahead of a save
    pub fn touch(&mut self) {
        self.metadata = DocumentMeta {
            updated_timestamp: Some(Utc::now()),
            total_products: self.products.len(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_creation() {
        let mut draft = ProductDraft::new("Blue Widget", "Electronics");
        draft.price_numeric = Some(4.5);
        let product = Product::new(7, draft);

        assert_eq!(product.product_index, 7);
        assert_eq!(product.product_name, "Blue Widget");
        assert_eq!(product.category_name, "Electronics");
        assert_eq!(product.price_numeric, Some(4.5));
        assert_eq!(product.weight_quantity, None);
        assert_eq!(product.label(), "7. Blue Widget");
    }

    #[test]
    fn test_missing_category_defaults_at_load() {
        let json = r#"{"product_index": 3, "product_name": "Bare"}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.category_name, UNCATEGORIZED);
    }

    #[test]
    fn test_optional_fields_not_serialized_when_absent() {
        let product = Product::new(1, ProductDraft::new("Widget", "Tools"));
        let json = serde_json::to_string(&product).unwrap();

        assert!(!json.contains("price_numeric"));
        assert!(!json.contains("weight_quantity"));
        assert!(!json.contains("description"));
    }

    #[test]
    fn test_product_roundtrip() {
        let mut draft = ProductDraft::new("Kettle", "Kitchen");
        draft.price_numeric = Some(23.99);
        draft.weight_quantity = Some("1.2kg".to_string());
        draft.description = Some("Stainless electric kettle".to_string());
        let product = Product::new(12, draft);

        let json = serde_json::to_string(&product).unwrap();
        let parsed: Product = serde_json::from_str(&json).unwrap();

        assert_eq!(product, parsed);
    }

    #[test]
    fn test_document_touch_updates_metadata() {
        let mut doc = ProductDocument::default();
        doc.products.push(Product::new(1, ProductDraft::new("A", "X")));
        doc.products.push(Product::new(2, ProductDraft::new("B", "X")));
        doc.touch();

        assert_eq!(doc.metadata.total_products, 2);
        assert!(doc.metadata.updated_timestamp.is_some());
    }

    #[test]
    fn test_document_tolerates_missing_sections() {
        let doc: ProductDocument = serde_json::from_str("{}").unwrap();

        assert!(doc.products.is_empty());
        assert_eq!(doc.metadata.total_products, 0);
    }
}
