use async_trait::async_trait;
use common::CartId;

use crate::{CartSnapshot, Result};

/// Core trait for cart snapshot storage.
///
/// A cart store holds at most one snapshot per cart ID: `save` replaces any
/// previous snapshot for the same cart. All implementations must be
/// thread-safe (Send + Sync).
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Loads the last committed snapshot for a cart.
    ///
    /// Returns None if no snapshot has ever been saved for this cart.
    async fn load(&self, cart_id: &CartId) -> Result<Option<CartSnapshot>>;

    /// Saves a snapshot, replacing any previous one for the same cart.
    async fn save(&self, snapshot: CartSnapshot) -> Result<()>;
}

/// Extension trait providing convenience methods for cart stores.
#[async_trait]
pub trait CartStoreExt: CartStore {
    /// Checks whether a snapshot exists for the given cart.
    async fn exists(&self, cart_id: &CartId) -> Result<bool> {
        Ok(self.load(cart_id).await?.is_some())
    }
}

// Blanket implementation for all CartStore implementations
impl<T: CartStore + ?Sized> CartStoreExt for T {}
