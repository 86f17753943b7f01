//! Catalog query trait and in-memory implementation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use common::{Money, ProductId};

use super::LookupError;

/// Product metadata as reported by the catalog.
///
/// Fetched only when a product is added to the cart for the first time.
#[derive(Debug, Clone)]
pub struct ProductInfo {
    /// The product identifier.
    pub product_id: ProductId,
    /// Human-readable product title.
    pub title: String,
    /// URL of the product image.
    pub image_url: String,
    /// Price per unit in cents.
    pub unit_price: Money,
}

/// Trait for querying product metadata.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Returns the metadata for a product.
    ///
    /// Fails with [`LookupError`] if the product is unknown or the remote
    /// call errors.
    async fn product(&self, product_id: ProductId) -> Result<ProductInfo, LookupError>;
}

#[derive(Debug, Default)]
struct InMemoryCatalogState {
    products: HashMap<ProductId, ProductInfo>,
    fail_on_lookup: bool,
}

/// In-memory catalog service for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogService {
    state: Arc<RwLock<InMemoryCatalogState>>,
}

impl InMemoryCatalogService {
    /// Creates a new in-memory catalog service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a product in the catalog.
    pub fn insert(&self, product: ProductInfo) {
        self.state
            .write()
            .unwrap()
            .products
            .insert(product.product_id, product);
    }

    /// Configures the service to fail lookups with a remote error.
    pub fn set_fail_on_lookup(&self, fail: bool) {
        self.state.write().unwrap().fail_on_lookup = fail;
    }
}

#[async_trait]
impl CatalogService for InMemoryCatalogService {
    async fn product(&self, product_id: ProductId) -> Result<ProductInfo, LookupError> {
        let state = self.state.read().unwrap();

        if state.fail_on_lookup {
            return Err(LookupError::Remote("catalog unavailable".to_string()));
        }

        state
            .products
            .get(&product_id)
            .cloned()
            .ok_or(LookupError::UnknownProduct(product_id))
    }
}
