//! Cart error taxonomy.

use cart_store::CartStoreError;
use common::ProductId;
use thiserror::Error;

use crate::services::LookupError;

/// Errors that can occur during cart operations.
///
/// Every kind maps to one fixed human-readable message, delivered to the
/// notification sink when the operation fails. A failing operation never
/// mutates the cart or its persisted snapshot.
#[derive(Debug, Error)]
pub enum CartError {
    /// The requested quantity exceeds the available stock observed for the
    /// product at the time of the operation.
    #[error("Insufficient stock for product {product_id}: requested {requested}, available {available}")]
    OutOfStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    /// A removal targeted a product that is not in the cart.
    #[error("Product {0} is not in the cart")]
    NotInCart(ProductId),

    /// An inventory or catalog lookup failed.
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// The cart store failed to persist the snapshot.
    #[error("Store error: {0}")]
    Store(#[from] CartStoreError),

    /// The cart state could not be serialized for persistence.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CartError {
    /// The single human-readable message for this error kind, as delivered
    /// to the notification sink.
    pub fn user_message(&self) -> &'static str {
        match self {
            CartError::OutOfStock { .. } => "requested quantity exceeds stock",
            CartError::NotInCart(_) => "removal failed",
            CartError::Lookup(_) => "product lookup failed",
            CartError::Store(_) | CartError::Serialization(_) => "failed to persist cart",
        }
    }

    /// Stable kind label for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CartError::OutOfStock { .. } => "out_of_stock",
            CartError::NotInCart(_) => "not_in_cart",
            CartError::Lookup(_) => "lookup",
            CartError::Store(_) => "store",
            CartError::Serialization(_) => "serialization",
        }
    }
}

/// Result type for cart operations.
pub type Result<T> = std::result::Result<T, CartError>;
