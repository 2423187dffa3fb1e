//! In-memory catalog store.
//!
//! `CatalogStore` owns the product collection and is passed explicitly to
//! whoever serves requests. It has no interior locking: reads take `&self`,
//! mutations take `&mut self`, and a caller sharing it across threads wraps
//! the whole store in one lock so each operation stays atomic.

use std::collections::BTreeSet;

use chrono::Utc;
use serde::Serialize;

use catalog_core::{DomainError, DomainResult, Entity, IdSequence, ProductId};

use crate::product::{NewProduct, Product, ProductPatch};
use crate::query::{ListQuery, ProductPage};
use crate::seed;

pub const DELETED_MESSAGE: &str = "Product deleted successfully";

/// Rejection message once the id sequence has issued `u64::MAX`.
pub const IDS_EXHAUSTED: &str = "No product ids left to assign";

/// Acknowledgement returned by a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteAck {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct CatalogStore {
    /// Insertion order is the order list queries report.
    products: Vec<Product>,
    ids: IdSequence,
}

impl CatalogStore {
    pub fn empty() -> Self {
        Self {
            products: Vec::new(),
            ids: IdSequence::default(),
        }
    }

    /// Store holding the default seed set (ids `1`..`5`).
    pub fn seeded() -> Self {
        Self::with_products(seed::default_products(Utc::now()))
    }

    /// Load pre-built records, keeping the first of any duplicate id.
    ///
    /// Numeric ids are reserved so later creates never collide with them.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut store = Self::empty();
        for product in products {
            if store.position(product.id()).is_some() {
                tracing::warn!(product_id = %product.id(), "duplicate product id in initial data; skipped");
                continue;
            }
            if let Ok(n) = product.id().as_str().parse::<u64>() {
                if !store.ids.reserve_through(n) {
                    tracing::warn!(product_id = %product.id(), "product id leaves no room for new ids; skipped");
                    continue;
                }
            }
            store.products.push(product);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Filter, then window. Never fails; malformed inputs are rejected while
    /// building the [`ListQuery`].
    pub fn list(&self, query: &ListQuery) -> ProductPage {
        let matched: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| query.filter.matches(p))
            .collect();

        let items: Vec<Product> = query
            .page
            .window(&matched)
            .iter()
            .map(|p| (*p).clone())
            .collect();

        tracing::debug!(
            total = matched.len(),
            returned = items.len(),
            offset = query.page.offset,
            "listed products"
        );

        ProductPage {
            items,
            total: matched.len(),
            limit: query.page.limit,
            offset: query.page.offset,
        }
    }

    pub fn get(&self, id: &ProductId) -> DomainResult<&Product> {
        self.products
            .iter()
            .find(|p| p.has_id(id))
            .ok_or_else(DomainError::product_not_found)
    }

    pub fn create(&mut self, input: NewProduct) -> DomainResult<Product> {
        // Rejected inputs must not consume an id.
        let valid = input.into_valid()?;
        let id = self
            .ids
            .next_id()
            .ok_or_else(|| DomainError::validation(IDS_EXHAUSTED))?;
        let product = Product::from_valid(id, valid, Utc::now());
        tracing::info!(product_id = %product.id(), category = product.category(), "product created");
        self.products.push(product.clone());
        Ok(product)
    }

    pub fn update(&mut self, id: &ProductId, patch: ProductPatch) -> DomainResult<Product> {
        let idx = self.position(id).ok_or_else(DomainError::product_not_found)?;
        let product = &mut self.products[idx];
        product.apply_patch(patch, Utc::now())?;
        tracing::info!(product_id = %id, "product updated");
        Ok(product.clone())
    }

    pub fn delete(&mut self, id: &ProductId) -> DomainResult<DeleteAck> {
        let idx = self.position(id).ok_or_else(DomainError::product_not_found)?;
        self.products.remove(idx);
        tracing::info!(product_id = %id, "product deleted");
        Ok(DeleteAck {
            success: true,
            message: DELETED_MESSAGE.to_string(),
        })
    }

    /// Distinct categories, sorted.
    pub fn categories(&self) -> Vec<String> {
        self.products
            .iter()
            .map(|p| p.category())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.has_id(id))
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::empty()
    }
}
