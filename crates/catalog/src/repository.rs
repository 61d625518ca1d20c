use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::Utc;
use thiserror::Error;

use shopfront_core::{Entity, ProductId};

use crate::product::{Product, ProductDraft, ProductPatch, ValidationErrors};

/// Persistence-boundary failure for product records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The submitted attributes were rejected; nothing was persisted.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// No record exists under the given identifier.
    #[error("record not found")]
    NotFound,
}

/// Product persistence abstraction.
///
/// The store owns the persistence invariant: a record with a blank title is
/// never committed, and a failed write leaves the stored record unchanged.
pub trait ProductRepository: Send + Sync {
    /// Validate and persist a draft under a fresh identifier.
    fn insert(&self, draft: &ProductDraft) -> Result<Product, StoreError>;

    fn find(&self, id: ProductId) -> Option<Product>;

    /// Patch an existing record. No partial commit: on validation failure
    /// the stored record is left exactly as it was.
    fn update(&self, id: ProductId, patch: &ProductPatch) -> Result<Product, StoreError>;

    fn delete(&self, id: ProductId) -> Result<(), StoreError>;

    /// All records, ordered by identifier (time-ordered ids, so insertion
    /// order).
    fn list(&self) -> Vec<Product>;

    fn count(&self) -> usize;
}

impl<R> ProductRepository for Arc<R>
where
    R: ProductRepository + ?Sized,
{
    fn insert(&self, draft: &ProductDraft) -> Result<Product, StoreError> {
        (**self).insert(draft)
    }

    fn find(&self, id: ProductId) -> Option<Product> {
        (**self).find(id)
    }

    fn update(&self, id: ProductId, patch: &ProductPatch) -> Result<Product, StoreError> {
        (**self).update(id, patch)
    }

    fn delete(&self, id: ProductId) -> Result<(), StoreError> {
        (**self).delete(id)
    }

    fn list(&self) -> Vec<Product> {
        (**self).list()
    }

    fn count(&self) -> usize {
        (**self).count()
    }
}

/// In-memory product store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    inner: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn insert(&self, draft: &ProductDraft) -> Result<Product, StoreError> {
        let product = Product::from_draft(draft, Utc::now()).map_err(StoreError::Validation)?;

        if let Ok(mut map) = self.inner.write() {
            map.insert(*product.id(), product.clone());
        }
        Ok(product)
    }

    fn find(&self, id: ProductId) -> Option<Product> {
        let map = self.inner.read().ok()?;
        map.get(&id).cloned()
    }

    fn update(&self, id: ProductId, patch: &ProductPatch) -> Result<Product, StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::NotFound)?;
        let current = map.get(&id).ok_or(StoreError::NotFound)?;

        let updated = current
            .with_patch(patch, Utc::now())
            .map_err(StoreError::Validation)?;
        map.insert(id, updated.clone());
        Ok(updated)
    }

    fn delete(&self, id: ProductId) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::NotFound)?;
        map.remove(&id).map(|_| ()).ok_or(StoreError::NotFound)
    }

    fn list(&self) -> Vec<Product> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };

        let mut products: Vec<Product> = map.values().cloned().collect();
        products.sort_by_key(|p| *p.id());
        products
    }

    fn count(&self) -> usize {
        match self.inner.read() {
            Ok(map) => map.len(),
            Err(_) => 0,
        }
    }
}
