//! Product catalog - lookup, grouping, filtering, and insertion
//!
//! The catalog loads the whole product document once and answers
//! queries from memory. Mutations rewrite the document through its
//! store and record the change in the shared activity log.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use thiserror::Error;

use crate::core::activity::ActivityLog;
use crate::core::store::{JsonStore, StoreError};
use crate::entities::{Product, ProductDocument, ProductDraft};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Product name is required")]
    MissingName,

    #[error("Category is required")]
    MissingCategory,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Category criterion for product filtering
#[derive(Debug, Clone, Default)]
pub enum CategoryFilter {
    /// Match every category
    #[default]
    All,
    /// Exact category name match
    Named(String),
}

impl CategoryFilter {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => &product.category_name == name,
        }
    }
}

/// In-memory product collection backed by one JSON document
pub struct ProductCatalog {
    store: JsonStore<ProductDocument>,
    log: Arc<ActivityLog>,
    document: ProductDocument,
    load_warning: Option<StoreError>,
}

impl ProductCatalog {
    /// Open the catalog; a corrupt document leaves an empty catalog
    /// and a queryable warning instead of failing
    pub fn open(store: JsonStore<ProductDocument>, log: Arc<ActivityLog>) -> Self {
        let (document, load_warning) = match store.load() {
            Ok(document) => (document, None),
            Err(err) => (ProductDocument::default(), Some(err)),
        };
        Self {
            store,
            log,
            document,
            load_warning,
        }
    }

    /// Warning from a tolerated load failure, if any
    pub fn load_warning(&self) -> Option<&StoreError> {
        self.load_warning.as_ref()
    }

    /// All products in catalog (stored) order
    pub fn products(&self) -> &[Product] {
        &self.document.products
    }

    pub fn len(&self) -> usize {
        self.document.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.document.products.is_empty()
    }

    /// Look up a product by its index
    pub fn get(&self, product_index: u32) -> Option<&Product> {
        self.document
            .products
            .iter()
            .find(|product| product.product_index == product_index)
    }

    /// Sorted distinct category names
    pub fn categories(&self) -> BTreeSet<String> {
        self.document
            .products
            .iter()
            .map(|product| product.category_name.clone())
            .collect()
    }

    /// Products passing both criteria, in catalog order
    ///
    /// The search term matches the product name case-insensitively;
    /// both criteria must hold.
    pub fn filter(&self, category: &CategoryFilter, search: Option<&str>) -> Vec<&Product> {
        let needle = search.map(|term| term.to_lowercase());
        self.document
            .products
            .iter()
            .filter(|product| category.matches(product))
            .filter(|product| match &needle {
                Some(needle) => product.product_name.to_lowercase().contains(needle),
                None => true,
            })
            .collect()
    }

    /// Products grouped by category, catalog order within each group
    pub fn group_by_category(&self) -> BTreeMap<&str, Vec<&Product>> {
        let mut groups: BTreeMap<&str, Vec<&Product>> = BTreeMap::new();
        for product in &self.document.products {
            groups
                .entry(product.category_name.as_str())
                .or_default()
                .push(product);
        }
        groups
    }

    /// Per-category product counts over a filtered set, sorted by
    /// category name
    pub fn category_counts(products: &[&Product]) -> Vec<(String, usize)> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for product in products {
            *counts.entry(product.category_name.clone()).or_insert(0) += 1;
        }
        counts.into_iter().collect()
    }

    fn next_index(&self) -> u32 {
        self.document
            .products
            .iter()
            .map(|product| product.product_index)
            .max()
            .map_or(1, |max| max + 1)
    }

    /// Validate, append, persist, then record the addition
    ///
    /// A failed save or log write comes back as the error; the
    /// in-memory append is kept and the next successful save settles it.
    pub fn add(&mut self, draft: ProductDraft) -> Result<Product, CatalogError> {
        if draft.product_name.trim().is_empty() {
            return Err(CatalogError::MissingName);
        }
        if draft.category_name.trim().is_empty() {
            return Err(CatalogError::MissingCategory);
        }

        let product = Product::new(self.next_index(), draft);
        self.document.products.push(product.clone());
        self.document.touch();
        self.store.save(&self.document)?;

        self.log.append(
            "Product Added",
            format!(
                "Added product '{}' to category '{}'",
                product.product_name, product.category_name
            ),
            Some(product.product_name.clone()),
            None,
        )?;

        Ok(product)
    }
}
