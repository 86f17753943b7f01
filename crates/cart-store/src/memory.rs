use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::CartId;
use tokio::sync::RwLock;

use crate::{CartSnapshot, CartStoreError, Result, store::CartStore};

#[derive(Debug, Default)]
struct MemoryState {
    snapshots: HashMap<CartId, CartSnapshot>,
    fail_on_save: bool,
}

/// In-memory cart store implementation for testing.
///
/// Stores snapshots in a map and provides the same interface as the
/// PostgreSQL implementation, plus a toggle to make the next saves fail
/// so the persistence-error path can be exercised.
#[derive(Clone, Default)]
pub struct InMemoryCartStore {
    state: Arc<RwLock<MemoryState>>,
}

impl InMemoryCartStore {
    /// Creates a new empty in-memory cart store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of carts with a stored snapshot.
    pub async fn snapshot_count(&self) -> usize {
        self.state.read().await.snapshots.len()
    }

    /// Clears all stored snapshots.
    pub async fn clear(&self) {
        self.state.write().await.snapshots.clear();
    }

    /// Configures the store to reject save calls.
    pub async fn set_fail_on_save(&self, fail: bool) {
        self.state.write().await.fail_on_save = fail;
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn load(&self, cart_id: &CartId) -> Result<Option<CartSnapshot>> {
        Ok(self.state.read().await.snapshots.get(cart_id).cloned())
    }

    async fn save(&self, snapshot: CartSnapshot) -> Result<()> {
        let mut state = self.state.write().await;

        if state.fail_on_save {
            return Err(CartStoreError::SaveRejected(snapshot.cart_id));
        }

        state.snapshots.insert(snapshot.cart_id.clone(), snapshot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CartStoreExt;

    fn snapshot(cart_id: &str, state: serde_json::Value) -> CartSnapshot {
        CartSnapshot::new(CartId::new(cart_id), state)
    }

    #[tokio::test]
    async fn save_and_load_roundtrip() {
        let store = InMemoryCartStore::new();
        let cart_id = CartId::new("cart:a");

        assert!(store.load(&cart_id).await.unwrap().is_none());

        store
            .save(snapshot("cart:a", serde_json::json!([{"id": 1}])))
            .await
            .unwrap();

        let loaded = store.load(&cart_id).await.unwrap().unwrap();
        assert_eq!(loaded.state, serde_json::json!([{"id": 1}]));
        assert_eq!(store.snapshot_count().await, 1);
    }

    #[tokio::test]
    async fn save_replaces_previous_snapshot() {
        let store = InMemoryCartStore::new();
        let cart_id = CartId::new("cart:a");

        store
            .save(snapshot("cart:a", serde_json::json!([1])))
            .await
            .unwrap();
        store
            .save(snapshot("cart:a", serde_json::json!([1, 2])))
            .await
            .unwrap();

        let loaded = store.load(&cart_id).await.unwrap().unwrap();
        assert_eq!(loaded.state, serde_json::json!([1, 2]));
        assert_eq!(store.snapshot_count().await, 1);
    }

    #[tokio::test]
    async fn carts_are_isolated_by_id() {
        let store = InMemoryCartStore::new();

        store
            .save(snapshot("cart:a", serde_json::json!(["a"])))
            .await
            .unwrap();
        store
            .save(snapshot("cart:b", serde_json::json!(["b"])))
            .await
            .unwrap();

        let a = store.load(&CartId::new("cart:a")).await.unwrap().unwrap();
        let b = store.load(&CartId::new("cart:b")).await.unwrap().unwrap();
        assert_eq!(a.state, serde_json::json!(["a"]));
        assert_eq!(b.state, serde_json::json!(["b"]));
    }

    #[tokio::test]
    async fn fail_on_save_leaves_store_untouched() {
        let store = InMemoryCartStore::new();
        store.set_fail_on_save(true).await;

        let result = store.save(snapshot("cart:a", serde_json::json!([]))).await;
        assert!(matches!(result, Err(CartStoreError::SaveRejected(_))));
        assert_eq!(store.snapshot_count().await, 0);

        store.set_fail_on_save(false).await;
        store
            .save(snapshot("cart:a", serde_json::json!([])))
            .await
            .unwrap();
        assert!(store.exists(&CartId::new("cart:a")).await.unwrap());
    }
}
