//! External collaborator contracts and their in-memory test doubles.

pub mod catalog;
pub mod inventory;
pub mod notify;

use common::ProductId;
use thiserror::Error;

pub use catalog::{CatalogService, InMemoryCatalogService, ProductInfo};
pub use inventory::{InMemoryInventoryService, InventoryService, StockInfo};
pub use notify::{NotificationSink, RecordingNotifier, TracingNotifier};

/// Failure of an inventory or catalog lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The remote service does not know the product.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),

    /// The remote call itself failed.
    #[error("Remote service error: {0}")]
    Remote(String),
}
