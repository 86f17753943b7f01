//! Inventory query trait and in-memory implementation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use common::ProductId;

use super::LookupError;

/// A point-in-time read of available stock for one product.
///
/// Never cached by the reconciler; re-fetched on every mutating operation
/// that needs it.
#[derive(Debug, Clone, Copy)]
pub struct StockInfo {
    /// The product this reading is for.
    pub product_id: ProductId,
    /// Units currently available.
    pub available: u32,
}

/// Trait for querying available stock.
#[async_trait]
pub trait InventoryService: Send + Sync {
    /// Returns the available stock for a product.
    ///
    /// Fails with [`LookupError`] if the product is unknown or the remote
    /// call errors.
    async fn stock(&self, product_id: ProductId) -> Result<StockInfo, LookupError>;
}

#[derive(Debug, Default)]
struct InMemoryInventoryState {
    stock: HashMap<ProductId, u32>,
    fail_on_lookup: bool,
}

/// In-memory inventory service for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInventoryService {
    state: Arc<RwLock<InMemoryInventoryState>>,
}

impl InMemoryInventoryService {
    /// Creates a new in-memory inventory service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the available stock for a product.
    pub fn set_stock(&self, product_id: ProductId, available: u32) {
        self.state.write().unwrap().stock.insert(product_id, available);
    }

    /// Configures the service to fail lookups with a remote error.
    pub fn set_fail_on_lookup(&self, fail: bool) {
        self.state.write().unwrap().fail_on_lookup = fail;
    }
}

#[async_trait]
impl InventoryService for InMemoryInventoryService {
    async fn stock(&self, product_id: ProductId) -> Result<StockInfo, LookupError> {
        let state = self.state.read().unwrap();

        if state.fail_on_lookup {
            return Err(LookupError::Remote("inventory unavailable".to_string()));
        }

        let available = *state
            .stock
            .get(&product_id)
            .ok_or(LookupError::UnknownProduct(product_id))?;

        Ok(StockInfo {
            product_id,
            available,
        })
    }
}
