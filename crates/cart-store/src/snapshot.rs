use chrono::{DateTime, Utc};
use common::CartId;
use serde::{Deserialize, Serialize};

/// The last committed state of a cart, stored as an opaque JSON blob.
///
/// The store never inspects the payload; the reconciler owns the shape of
/// the serialized cart and round-trips it through [`CartSnapshot::from_state`]
/// and [`CartSnapshot::into_state`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartSnapshot {
    /// The cart this snapshot belongs to.
    pub cart_id: CartId,

    /// When the snapshot was committed.
    pub timestamp: DateTime<Utc>,

    /// The serialized cart state.
    pub state: serde_json::Value,
}

impl CartSnapshot {
    /// Creates a new snapshot from raw JSON state.
    pub fn new(cart_id: CartId, state: serde_json::Value) -> Self {
        Self {
            cart_id,
            timestamp: Utc::now(),
            state,
        }
    }

    /// Creates a snapshot from a serializable cart state.
    pub fn from_state<T: Serialize>(
        cart_id: CartId,
        state: &T,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            cart_id,
            timestamp: Utc::now(),
            state: serde_json::to_value(state)?,
        })
    }

    /// Deserializes the snapshot state into a concrete type.
    pub fn into_state<T: for<'de> Deserialize<'de>>(self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.state)
    }

    /// Gets a reference to the state as JSON.
    pub fn state_ref(&self) -> &serde_json::Value {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestState {
        items: Vec<u64>,
        label: String,
    }

    #[test]
    fn snapshot_new() {
        let state = serde_json::json!({"items": []});

        let snapshot = CartSnapshot::new(CartId::new("cart"), state.clone());

        assert_eq!(snapshot.cart_id, CartId::new("cart"));
        assert_eq!(snapshot.state, state);
    }

    #[test]
    fn snapshot_from_state_and_into_state() {
        let original = TestState {
            items: vec![1, 2, 3],
            label: "test".to_string(),
        };

        let snapshot = CartSnapshot::from_state(CartId::new("cart"), &original).unwrap();

        let restored: TestState = snapshot.into_state().unwrap();
        assert_eq!(restored, original);
    }
}
