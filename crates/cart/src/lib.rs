//! Cart reconciliation core.
//!
//! This crate provides the [`CartReconciler`]: a stateful owner of a cart
//! (an ordered, product-unique collection of line-items) that validates
//! every mutation against a remote inventory source before committing it.
//!
//! Each of the three operations (add, remove, set-quantity) follows the same
//! shape:
//! 1. Take the cart lock, so no two mutations interleave their
//!    read-validate-write sequence.
//! 2. Query the inventory (and, on first addition, the catalog) collaborator.
//! 3. Compute the new collection and persist it to the cart store.
//! 4. Only then swap the new collection into memory, so the persisted
//!    snapshot and the in-memory cart are always equal after a success.
//!
//! Failures are translated into one human-readable message per error kind,
//! routed to the [`NotificationSink`], and leave both the in-memory cart and
//! its persisted snapshot untouched.

pub mod cart;
pub mod error;
pub mod item;
pub mod reconciler;
pub mod services;

pub use cart::Cart;
pub use error::{CartError, Result};
pub use item::LineItem;
pub use reconciler::CartReconciler;
pub use services::{
    CatalogService, InMemoryCatalogService, InMemoryInventoryService, InventoryService,
    LookupError, NotificationSink, ProductInfo, RecordingNotifier, StockInfo, TracingNotifier,
};
