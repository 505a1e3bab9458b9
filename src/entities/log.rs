//! Activity log entity type - Append-only records of catalog and sourcing changes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One activity log record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// When the action happened
    pub timestamp: DateTime<Utc>,

    /// Short action label, e.g. "Product Added"
    pub action: String,

    /// Human-readable description of the change
    pub details: String,

    /// Name of the product involved, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,

    /// Name of the supplier involved, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_name: Option<String>,
}

impl LogEntry {
    /// Create an entry stamped with the current time
    pub fn new(
        action: impl Into<String>,
        details: impl Into<String>,
        product_name: Option<String>,
        supplier_name: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            action: action.into(),
            details: details.into(),
            product_name,
            supplier_name,
        }
    }

    /// Case-insensitive substring match against details, product name,
    /// or supplier name
    pub fn matches_text(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        if self.details.to_lowercase().contains(&needle) {
            return true;
        }
        if let Some(product) = &self.product_name {
            if product.to_lowercase().contains(&needle) {
                return true;
            }
        }
        if let Some(supplier) = &self.supplier_name {
            if supplier.to_lowercase().contains(&needle) {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = LogEntry::new(
            "Product Added",
            "Added product 'Widget' to category 'Tools'",
            Some("Widget".to_string()),
            None,
        );

        assert_eq!(entry.action, "Product Added");
        assert_eq!(entry.product_name.as_deref(), Some("Widget"));
        assert_eq!(entry.supplier_name, None);
    }

    #[test]
    fn test_matches_text_across_fields() {
        let entry = LogEntry::new(
            "Supplier Added",
            "Added supplier 'Acme Corp' for product 'Widget'",
            Some("Widget".to_string()),
            Some("Acme Corp".to_string()),
        );

        assert!(entry.matches_text("acme"));
        assert!(entry.matches_text("WIDGET"));
        assert!(entry.matches_text("added supplier"));
        assert!(!entry.matches_text("kettle"));
    }

    #[test]
    fn test_matches_text_on_bare_entry() {
        let entry = LogEntry::new("Product Added", "Added product 'Kettle'", None, None);

        assert!(entry.matches_text("kettle"));
        assert!(!entry.matches_text("acme"));
    }

    #[test]
    fn test_entry_roundtrip() {
        let entry = LogEntry::new(
            "Supplier Added",
            "Added supplier 'Acme' for product 'Widget'",
            Some("Widget".to_string()),
            Some("Acme".to_string()),
        );

        let json = serde_json::to_string(&entry).unwrap();
        let parsed: LogEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(entry, parsed);
    }

    #[test]
    fn test_entry_tolerates_missing_references() {
        let json = r#"{
            "timestamp": "2026-02-01T12:00:00Z",
            "action": "Product Added",
            "details": "Added product 'Bare'"
        }"#;
        let entry: LogEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.product_name, None);
        assert_eq!(entry.supplier_name, None);
    }
}
