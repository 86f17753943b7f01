use common::CartId;
use thiserror::Error;

/// Errors that can occur when interacting with the cart store.
#[derive(Debug, Error)]
pub enum CartStoreError {
    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A serialization/deserialization error occurred.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The store rejected the save. Used by test doubles to exercise the
    /// save-failure path without a real backend.
    #[error("Save rejected for cart {0}")]
    SaveRejected(CartId),
}

/// Result type for cart store operations.
pub type Result<T> = std::result::Result<T, CartStoreError>;
