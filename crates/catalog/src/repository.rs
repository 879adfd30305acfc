//! In-memory product repository.
//!
//! The repository is the single owner of the canonical product list. Callers
//! get cloned snapshots out and hand owned values in; nothing outside this
//! module holds a reference into the list.

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock};

use prodapi_core::{DomainError, DomainResult, ProductId};

use crate::product::Product;

/// Ordered, lock-guarded product list.
///
/// Writers hold the write lock across the whole read-modify-write, so
/// identifier assignment never races with another `add` or `update`.
#[derive(Debug, Default)]
pub struct ProductRepository {
    products: RwLock<Vec<Product>>,
}

impl ProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository pre-populated with `products`, keeping their ids.
    ///
    /// Every product must pass validation and ids must be unique.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> DomainResult<Self> {
        let products: Vec<Product> = products.into_iter().collect();

        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            product.validate()?;
            if !seen.insert(product.id) {
                return Err(DomainError::internal(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
        }

        Ok(Self {
            products: RwLock::new(products),
        })
    }

    /// All products in insertion order.
    pub fn list(&self) -> Vec<Product> {
        // Writers only ever publish fully built values, so a poisoned list is
        // still consistent.
        self.products
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn get(&self, id: ProductId) -> DomainResult<Product> {
        self.products
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(DomainError::NotFound)
    }

    pub fn len(&self) -> usize {
        self.products
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append `candidate` under a freshly assigned id and return the stored copy.
    ///
    /// The id is one greater than the largest id present, or
    /// [`ProductId::FIRST`] when the repository is empty.
    pub fn add(&self, mut candidate: Product) -> DomainResult<Product> {
        candidate.validate()?;

        let mut products = self.products.write().map_err(lock_poisoned)?;

        candidate.id = match products.iter().map(|p| p.id).max() {
            Some(max) => max.next()?,
            None => ProductId::FIRST,
        };
        products.push(candidate.clone());

        tracing::debug!(product_id = %candidate.id, "product added");
        Ok(candidate)
    }

    /// Replace every field of product `id` except the id itself.
    ///
    /// Fails with [`DomainError::NotFound`] and leaves the list untouched when
    /// no product has that id.
    pub fn update(&self, id: ProductId, mut replacement: Product) -> DomainResult<()> {
        replacement.validate()?;

        let mut products = self.products.write().map_err(lock_poisoned)?;

        let slot = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(DomainError::NotFound)?;
        replacement.id = id;
        *slot = replacement;

        tracing::debug!(product_id = %id, "product updated");
        Ok(())
    }
}

fn lock_poisoned<T>(_: PoisonError<T>) -> DomainError {
    DomainError::internal("product repository lock poisoned")
}
