//! Shared access to the catalog store.
//!
//! Handlers run on a multi-threaded runtime, so the store sits behind a
//! single `RwLock`. Every operation takes the lock once for its whole
//! duration: reads share it, mutations hold it exclusively.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use catalog_core::{DomainResult, ProductId};
use catalog_products::{
    CatalogStore, DeleteAck, ListQuery, NewProduct, Product, ProductPage, ProductPatch,
};

#[derive(Debug)]
pub struct AppServices {
    catalog: RwLock<CatalogStore>,
}

impl AppServices {
    pub fn new(store: CatalogStore) -> Self {
        Self {
            catalog: RwLock::new(store),
        }
    }

    // Store operations validate before mutating, so a poisoned lock still
    // guards a consistent collection.
    fn read(&self) -> RwLockReadGuard<'_, CatalogStore> {
        self.catalog.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CatalogStore> {
        self.catalog.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn products_list(&self, query: &ListQuery) -> ProductPage {
        self.read().list(query)
    }

    pub fn products_get(&self, id: &ProductId) -> DomainResult<Product> {
        self.read().get(id).cloned()
    }

    pub fn products_create(&self, input: NewProduct) -> DomainResult<Product> {
        self.write().create(input)
    }

    pub fn products_update(&self, id: &ProductId, patch: ProductPatch) -> DomainResult<Product> {
        self.write().update(id, patch)
    }

    pub fn products_delete(&self, id: &ProductId) -> DomainResult<DeleteAck> {
        self.write().delete(id)
    }

    pub fn products_categories(&self) -> Vec<String> {
        self.read().categories()
    }
}
